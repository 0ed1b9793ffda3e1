pub mod config;
pub mod extraction;
pub mod http;
pub mod providers;
pub mod request_id;
pub mod stores;
