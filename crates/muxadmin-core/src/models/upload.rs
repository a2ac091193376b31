use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::asset::Asset;
use crate::constants::{DIRECT_UPLOAD_PATH, REMOTE_UPLOAD_PATH};
use crate::error::{AdminError, AdminResult};

/// Where the video for a new upload comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadOrigin {
    FromComputer,
    FromUrl,
}

impl UploadOrigin {
    pub fn endpoint(&self) -> &'static str {
        match self {
            UploadOrigin::FromComputer => DIRECT_UPLOAD_PATH,
            UploadOrigin::FromUrl => REMOTE_UPLOAD_PATH,
        }
    }
}

impl Display for UploadOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadOrigin::FromComputer => write!(f, "from_computer"),
            UploadOrigin::FromUrl => write!(f, "from_url"),
        }
    }
}

impl FromStr for UploadOrigin {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "from_computer" => Ok(UploadOrigin::FromComputer),
            "from_url" => Ok(UploadOrigin::FromUrl),
            _ => Err(AdminError::validation(
                "origin",
                "Unable to determine upload origin",
            )),
        }
    }
}

/// Video source for an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadMedia {
    /// Local file, sent to the direct upload URL after the CMS hands one out.
    File { file_name: String, bytes: Vec<u8> },
    /// Publicly reachable URL the video host ingests itself.
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadInfo {
    pub title: String,
    pub media: UploadMedia,
    pub origin: UploadOrigin,
    pub signed: bool,
}

impl UploadInfo {
    /// Checks run before any request is issued.
    pub fn validate(&self) -> AdminResult<()> {
        if self.title.trim().is_empty() {
            return Err(AdminError::validation("title", "No title specified"));
        }

        match (&self.origin, &self.media) {
            (UploadOrigin::FromUrl, UploadMedia::Url(url)) if url.trim().is_empty() => Err(
                AdminError::validation("media", "No video URL specified"),
            ),
            (UploadOrigin::FromUrl, UploadMedia::Url(_))
            | (UploadOrigin::FromComputer, UploadMedia::File { .. }) => Ok(()),
            (origin, _) => Err(AdminError::validation(
                "media",
                format!("Media source does not match upload origin {}", origin),
            )),
        }
    }

    /// Multipart text fields sent to the upload endpoint.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.clone()),
            ("signed", self.signed.to_string()),
        ];
        if let UploadMedia::Url(url) = &self.media {
            fields.push(("url", url.clone()));
        }
        fields
    }

    /// File bytes to push once a direct upload ticket has been issued.
    pub fn file(&self) -> Option<(&str, &[u8])> {
        match &self.media {
            UploadMedia::File { file_name, bytes } => Some((file_name.as_str(), bytes.as_slice())),
            UploadMedia::Url(_) => None,
        }
    }
}

/// Direct upload ticket from the video host: the file is PUT to `url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectUpload {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Result of submitting an upload. Remote uploads answer with the created
/// asset record, direct uploads with a ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum UploadResponse {
    DirectUpload(DirectUpload),
    Asset(Asset),
}
