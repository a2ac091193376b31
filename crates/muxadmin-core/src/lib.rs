//! Mux Admin Core Library
//!
//! Domain models, error types, session configuration and pure request
//! builders shared by the admin client, the detail view and the CLI.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod query;
pub mod service;
pub mod urls;

// Re-export commonly used types
pub use config::SessionContext;
pub use error::{AdminError, AdminResult, LogLevel};
pub use query::build_list_query;
pub use service::AssetMutations;
pub use urls::{sign_path, thumbnail_url};
