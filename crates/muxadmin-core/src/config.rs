//! Configuration module
//!
//! `SessionContext` carries everything the transport needs to talk to the
//! CMS: the admin bearer token and the plugin-scoped base URL. It is passed
//! explicitly into the client rather than looked up from global state.

use std::env;
use std::fmt;

use crate::constants::{DEFAULT_BACKEND_URL, DEFAULT_PLUGIN_ID};
use crate::error::{AdminError, AdminResult};

#[derive(Clone)]
pub struct SessionContext {
    token: String,
    base_url: String,
}

impl SessionContext {
    /// `base_url` is the plugin-scoped base, e.g.
    /// `http://localhost:1337/mux-video-uploader`. Trailing slashes are dropped.
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            token: token.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a session for a backend URL and plugin identifier.
    pub fn for_plugin(token: impl Into<String>, backend_url: &str, plugin_id: &str) -> Self {
        Self::new(
            token,
            format!(
                "{}/{}",
                backend_url.trim_end_matches('/'),
                plugin_id.trim_matches('/')
            ),
        )
    }

    /// Create a session from environment: MUXADMIN_BACKEND_URL,
    /// MUXADMIN_PLUGIN_ID, MUXADMIN_TOKEN (or STRAPI_ADMIN_TOKEN).
    pub fn from_env() -> AdminResult<Self> {
        let backend_url =
            env::var("MUXADMIN_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let plugin_id =
            env::var("MUXADMIN_PLUGIN_ID").unwrap_or_else(|_| DEFAULT_PLUGIN_ID.to_string());
        let token = env::var("MUXADMIN_TOKEN")
            .or_else(|_| env::var("STRAPI_ADMIN_TOKEN"))
            .map_err(|_| {
                AdminError::Config(
                    "Missing admin token. Set MUXADMIN_TOKEN or STRAPI_ADMIN_TOKEN".to_string(),
                )
            })?;

        if token.trim().is_empty() {
            return Err(AdminError::Config("Admin token is empty".to_string()));
        }

        Ok(Self::for_plugin(token, &backend_url, &plugin_id))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// Keep the token out of logs and panic messages.
impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_plugin_joins_backend_and_plugin() {
        let session = SessionContext::for_plugin("t", "http://cms.local/", "mux-video-uploader");
        assert_eq!(session.base_url(), "http://cms.local/mux-video-uploader");
        assert_eq!(
            session.url("/mux-asset"),
            "http://cms.local/mux-video-uploader/mux-asset"
        );
    }

    #[test]
    fn new_trims_trailing_slash() {
        let session = SessionContext::new("t", "http://cms.local/plugin/");
        assert_eq!(session.base_url(), "http://cms.local/plugin");
    }

    #[test]
    fn debug_redacts_token() {
        let session = SessionContext::new("super-secret", "http://cms.local/p");
        let printed = format!("{:?}", session);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
