use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdminError;

/// What a signed token grants access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenPurpose {
    Thumbnail,
    Playback,
}

impl Display for TokenPurpose {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TokenPurpose::Thumbnail => write!(f, "thumbnail"),
            TokenPurpose::Playback => write!(f, "playback"),
        }
    }
}

impl FromStr for TokenPurpose {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thumbnail" => Ok(TokenPurpose::Thumbnail),
            "playback" => Ok(TokenPurpose::Playback),
            other => Err(AdminError::validation(
                "type",
                format!("Unknown token type: {}", other),
            )),
        }
    }
}

/// Short-lived signed token for one playback id. Never cached client-side.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackToken {
    pub token: String,
}

impl std::fmt::Debug for PlaybackToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PlaybackToken")
            .field("token", &"<redacted>")
            .finish()
    }
}
