//! Robolearn - client for the Epic Robotics learning platform
//!
//! This is the library interface: a typed SDK over the platform's REST API
//! plus the session context the CLI is built on.

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use api::Api;
pub use client::ApiClient;
pub use config::Config;
pub use error::Error;
pub use session::SessionManager;
