// flowconf-client: HTTP client for the flowconf console API

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use client::ConsoleClient;
pub use config::HttpClientConfig;
pub use error::{ClientError, Result};
pub use session::SessionTokens;
