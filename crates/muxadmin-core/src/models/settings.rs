use serde::{Deserialize, Serialize};

/// Whether the plugin has credentials for the video host. The settings
/// endpoint answers with a bare JSON boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigStatus(pub bool);

impl ConfigStatus {
    pub fn is_configured(&self) -> bool {
        self.0
    }
}

/// Plugin settings form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuxSettings {
    pub access_token: String,
    pub secret_key: String,
    pub webhook_signing_secret: String,
    #[serde(default)]
    pub playback_signing_id: Option<String>,
    #[serde(default)]
    pub playback_signing_secret: Option<String>,
}

impl MuxSettings {
    /// Multipart fields, in form order. Unset optional fields are skipped.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("access_token", self.access_token.clone()),
            ("secret_key", self.secret_key.clone()),
            ("webhook_signing_secret", self.webhook_signing_secret.clone()),
        ];
        if let Some(id) = &self.playback_signing_id {
            fields.push(("playback_signing_id", id.clone()));
        }
        if let Some(secret) = &self.playback_signing_secret {
            fields.push(("playback_signing_secret", secret.clone()));
        }
        fields
    }
}

impl std::fmt::Debug for MuxSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MuxSettings")
            .field("access_token", &self.access_token)
            .field("secret_key", &"<redacted>")
            .field("webhook_signing_secret", &"<redacted>")
            .field("playback_signing_id", &self.playback_signing_id)
            .field("playback_signing_secret", &"<redacted>")
            .finish()
    }
}
