use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Video asset record as stored by the CMS, mirroring a remote Mux asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub upload_id: Option<String>,
    /// Remote asset identifier on the video host
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub playback_id: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(rename = "isReady", default)]
    pub is_ready: bool,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub signed: bool,
    #[serde(default)]
    pub asset_data: Option<AssetData>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Metadata derived by the video host. Only `aspect_ratio` is interpreted;
/// everything else is kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssetData {
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl Asset {
    /// Direct aspect ratio if present, otherwise the one nested in `asset_data`.
    pub fn aspect_ratio(&self) -> Option<&str> {
        self.aspect_ratio
            .as_deref()
            .filter(|ratio| !ratio.is_empty())
            .or_else(|| {
                self.asset_data
                    .as_ref()
                    .and_then(|data| data.aspect_ratio.as_deref())
                    .filter(|ratio| !ratio.is_empty())
            })
    }

    /// Aspect ratio in CSS form: `16:9` becomes `16 / 9`.
    pub fn css_aspect_ratio(&self) -> Option<String> {
        self.aspect_ratio().map(|ratio| ratio.replacen(':', " / ", 1))
    }

    /// An asset without a playback id has not been processed yet.
    pub fn is_processed(&self) -> bool {
        self.playback_id
            .as_deref()
            .is_some_and(|playback_id| !playback_id.is_empty())
    }
}

/// One page of the asset listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetPage {
    #[serde(default)]
    pub items: Vec<Asset>,
    #[serde(rename = "totalCount", default)]
    pub total_count: u64,
}

/// Sparse update: the identifier plus only the fields the user changed.
/// Absent fields are not serialized, so the server leaves them untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetUpdatePatch {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(
        rename = "isReady",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub is_ready: Option<bool>,
}

impl AssetUpdatePatch {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_ready(mut self, is_ready: bool) -> Self {
        self.is_ready = Some(is_ready);
        self
    }

    /// True when the patch carries no field besides the identifier.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.is_ready.is_none()
    }
}

/// Body of the combined delete request. Deleting always removes the remote
/// asset as well as the CMS record.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAssetRequest {
    pub id: u64,
    pub delete_on_mux: bool,
}

impl DeleteAssetRequest {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            delete_on_mux: true,
        }
    }

    pub fn for_asset(asset: &Asset) -> Self {
        Self::new(asset.id)
    }
}
