//! Endpoint paths and defaults shared by the admin client crates.

/// Plugin identifier the CMS mounts the admin routes under.
pub const DEFAULT_PLUGIN_ID: &str = "mux-video-uploader";

/// Backend used when no URL is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:1337";

/// Default page size for asset listings.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

pub const SETTINGS_PATH: &str = "/mux-settings";
pub const REMOTE_UPLOAD_PATH: &str = "/submitRemoteUpload";
pub const DIRECT_UPLOAD_PATH: &str = "/submitDirectUpload";
pub const ASSET_PATH: &str = "/mux-asset";
pub const DELETE_ASSET_PATH: &str = "/deleteMuxAsset";
pub const THUMBNAIL_PATH: &str = "/thumbnail";
pub const SIGN_PATH: &str = "/sign";
