use crate::e2e::helpers::{mocks, TestContext};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_audio_for_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/generate",
            &json!({"text": "Hello there, listener.", "language": "en"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.json();
    let audio = body.get("audio").unwrap();
    assert_eq!(
        audio.get("file_size").and_then(|v| v.as_u64()),
        Some(mocks::MOCK_AUDIO.len() as u64)
    );
    assert!(audio.get("estimated_duration").and_then(|v| v.as_f64()).unwrap() > 0.0);
    assert!(audio.get("duration").map_or(true, |v| v.is_null()));

    let audio_filename = body
        .get("audio_filename")
        .and_then(|v| v.as_str())
        .unwrap();
    assert!(audio_filename.starts_with("tts_en_"));
    assert!(audio_filename.ends_with(".mp3"));
    assert!(ctx.audio_dir.join(audio_filename).exists());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_tts_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/tts/generate", &json!({"text": ""}))
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_for_unimplemented_tts_service(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/generate",
            &json!({"text": "Hello.", "service": "elevenlabs"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_translation_before_document_narration(ctx: &TestContext) {
    let document_id = ctx.upload_document().await;

    let response = ctx
        .client
        .post(
            "/api/tts/generate-document",
            &json!({"document_id": document_id, "language": "es"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    let error = response.json().get("error").and_then(|v| v.as_str()).unwrap();
    assert!(error.contains("Translation not found"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_narrate_a_translated_document_by_sentence(ctx: &TestContext) {
    let document_id = ctx.translated_document("es").await;

    let response = ctx
        .client
        .post(
            "/api/tts/generate-document",
            &json!({"document_id": document_id, "language": "es", "segment_type": "sentence"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.json();
    assert_eq!(
        body.get("segment_type").and_then(|v| v.as_str()),
        Some("sentence")
    );
    assert_eq!(
        body.get("audio_directory").and_then(|v| v.as_str()),
        Some(document_id.as_str())
    );

    let segments = body.get("segments").and_then(|v| v.as_array()).unwrap();
    assert!(!segments.is_empty());
    assert_eq!(
        body.get("total_segments").and_then(|v| v.as_u64()),
        Some(segments.len() as u64)
    );

    // Every narrated segment aligns to an original-language counterpart by
    // position; the field exists even when empty
    for segment in segments {
        assert!(segment.get("original_text").is_some());
        assert!(segment.get("audio_path").is_some());
    }

    // Segment audio and manifest land under the document's audio directory
    assert!(ctx
        .audio_dir
        .join(&document_id)
        .join("segment_0.mp3")
        .exists());
    assert!(ctx.audio_dir.join(&document_id).join("segments.json").exists());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_narrate_a_full_document_into_one_file(ctx: &TestContext) {
    let document_id = ctx.translated_document("es").await;

    let response = ctx
        .client
        .post(
            "/api/tts/generate-document",
            &json!({"document_id": document_id, "language": "es", "segment_type": "full"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.json();
    let audio_filename = body
        .get("audio_filename")
        .and_then(|v| v.as_str())
        .unwrap();
    assert_eq!(audio_filename, format!("{}_es_full.mp3", document_id));
    assert!(ctx.audio_dir.join(audio_filename).exists());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_narrate_custom_text_with_alignment(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/generate-custom",
            &json!({
                "document_id": "custom_doc",
                "translated_text": "Hola mundo. Segunda frase.",
                "original_text": "Hello world. Second sentence.",
                "language": "es"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.json();
    let segments = body.get("segments").and_then(|v| v.as_array()).unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(
        segments[0].get("original_text").and_then(|v| v.as_str()),
        Some("Hello world.")
    );
    assert_eq!(
        segments[1].get("text").and_then(|v| v.as_str()),
        Some("Segunda frase.")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_capture_segment_failures_inline(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/generate-custom",
            &json!({
                "document_id": "custom_doc",
                "translated_text": "Buena frase. FAILSEG aquí. Otra buena.",
                "original_text": "",
                "language": "es"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let segments = response
        .json()
        .get("segments")
        .and_then(|v| v.as_array())
        .unwrap()
        .clone();
    assert_eq!(segments.len(), 3);
    assert!(segments[0].get("audio_path").is_some());
    assert!(segments[1].get("error").is_some());
    assert!(segments[1].get("audio_path").is_none());
    assert!(segments[2].get("audio_path").is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_custom_narration_without_required_fields(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/generate-custom",
            &json!({"document_id": "custom_doc", "translated_text": ""}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_custom_narration_with_full_segment_type(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/tts/generate-custom",
            &json!({
                "document_id": "custom_doc",
                "translated_text": "Hola.",
                "segment_type": "full"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json().get("error").and_then(|v| v.as_str()),
        Some("Only sentence segment_type is supported")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_generated_audio_files(ctx: &TestContext) {
    let document_id = ctx.translated_document("es").await;
    ctx.client
        .post(
            "/api/tts/generate-document",
            &json!({"document_id": document_id, "language": "es"}),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx
        .client
        .get(&format!("/api/tts/audio/{}/segment_0.mp3", document_id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.header("content-type").map(|v| v.as_str()),
        Some("audio/mpeg")
    );
    assert_eq!(response.body_bytes, mocks::MOCK_AUDIO);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_missing_audio(ctx: &TestContext) {
    let response = ctx.client.get("/api/tts/audio/nope.mp3").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json().get("error").and_then(|v| v.as_str()),
        Some("Audio file not found")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_path_traversal_in_audio_paths(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/tts/audio/../secrets.txt")
        .await
        .unwrap();

    // Either the router normalizes it away or the handler rejects it; it
    // must never be a 200
    assert_ne!(response.status, StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_the_persisted_segment_manifest(ctx: &TestContext) {
    let document_id = ctx.translated_document("es").await;
    ctx.client
        .post(
            "/api/tts/generate-document",
            &json!({"document_id": document_id, "language": "es"}),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx
        .client
        .get(&format!("/api/tts/segments/{}", document_id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let manifest = response.json().get("segments").unwrap().clone();
    assert_eq!(
        manifest.get("document_id").and_then(|v| v.as_str()),
        Some(document_id.as_str())
    );
    assert_eq!(
        manifest.get("language").and_then(|v| v.as_str()),
        Some("es")
    );
    assert!(!manifest
        .get("segments")
        .and_then(|v| v.as_array())
        .unwrap()
        .is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_missing_manifest(ctx: &TestContext) {
    let response = ctx.client.get("/api/tts/segments/ghost").await.unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_tts_supported_languages(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/tts/supported-languages")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.json();
    assert_eq!(body.get("service").and_then(|v| v.as_str()), Some("gtts"));
    assert!(!body
        .get("languages")
        .and_then(|v| v.as_array())
        .unwrap()
        .is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_empty_languages_for_placeholder_services(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/tts/supported-languages?service=azure")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert!(response
        .json()
        .get("languages")
        .and_then(|v| v.as_array())
        .unwrap()
        .is_empty());
}
