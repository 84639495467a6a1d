//! Generic access to the platform's REST API

pub mod http;
pub mod token;

pub use http::ApiClient;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
