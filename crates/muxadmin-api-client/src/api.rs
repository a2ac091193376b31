//! Asset operations for the admin API client.
//!
//! Each method is a thin composition over the transport in `lib.rs` and the
//! pure builders in `muxadmin_core`.

use async_trait::async_trait;
use muxadmin_core::constants::{ASSET_PATH, DELETE_ASSET_PATH, SETTINGS_PATH};
use muxadmin_core::models::{
    Asset, AssetPage, AssetUpdatePatch, ConfigStatus, DeleteAssetRequest, ListQuery, MuxSettings,
    PlaybackToken, SearchCriterion, SortCriterion, TokenPurpose, UploadInfo, UploadResponse,
};
use muxadmin_core::{build_list_query, sign_path, thumbnail_url, AdminResult, AssetMutations};

use crate::{ApiClient, RequestBody};

impl ApiClient {
    /// Whether the plugin has video host credentials configured.
    pub async fn is_configured(&self) -> AdminResult<ConfigStatus> {
        self.get(SETTINGS_PATH).await
    }

    /// Save plugin settings as a multipart form. Returns the server's JSON
    /// answer, if any.
    pub async fn save_settings(
        &self,
        settings: &MuxSettings,
    ) -> AdminResult<Option<serde_json::Value>> {
        tracing::info!("Saving plugin settings");
        self.request_optional(
            reqwest::Method::POST,
            SETTINGS_PATH,
            Some(RequestBody::form(settings.form_fields())),
        )
        .await
    }

    /// Submit an upload. Remote URLs go to the remote upload endpoint, local
    /// files to the direct upload endpoint, which answers with a ticket.
    /// Input is validated before any request is made.
    pub async fn submit_upload(&self, info: &UploadInfo) -> AdminResult<UploadResponse> {
        info.validate()?;
        tracing::info!(origin = %info.origin, signed = info.signed, "Submitting upload");
        self.post_multipart(
            info.origin.endpoint(),
            RequestBody::form(info.form_fields()),
        )
        .await
    }

    /// Submit an upload and, for local files, push the bytes to the direct
    /// upload URL the video host handed out.
    pub async fn upload_video(&self, info: &UploadInfo) -> AdminResult<UploadResponse> {
        let response = self.submit_upload(info).await?;
        if let (UploadResponse::DirectUpload(ticket), Some((file_name, bytes))) =
            (&response, info.file())
        {
            tracing::info!(upload_id = %ticket.id, file_name, "Sending file to direct upload URL");
            self.upload_file_to(&ticket.url, bytes.to_vec()).await?;
        }
        Ok(response)
    }

    /// List assets with optional search and sort.
    pub async fn list_assets(
        &self,
        search: Option<&SearchCriterion>,
        sort: Option<&SortCriterion>,
        offset: u32,
        limit: u32,
    ) -> AdminResult<AssetPage> {
        let query = build_list_query(search, sort, offset, limit);
        self.get(&format!("{}?{}", ASSET_PATH, query)).await
    }

    pub async fn list(&self, query: &ListQuery) -> AdminResult<AssetPage> {
        self.list_assets(
            query.search.as_ref(),
            query.sort.as_ref(),
            query.offset,
            query.limit,
        )
        .await
    }

    /// PUT a sparse patch to the asset's endpoint.
    pub async fn update_asset(&self, patch: &AssetUpdatePatch) -> AdminResult<Asset> {
        tracing::debug!(
            asset_id = patch.id,
            title = patch.title.is_some(),
            is_ready = patch.is_ready.is_some(),
            "Updating asset"
        );
        self.put_json(&format!("{}/{}", ASSET_PATH, patch.id), patch)
            .await
    }

    /// Delete the CMS record and the remote asset in one request.
    pub async fn delete_asset(&self, asset: &Asset) -> AdminResult<()> {
        self.delete_asset_by_id(asset.id).await
    }

    pub async fn delete_asset_by_id(&self, id: u64) -> AdminResult<()> {
        tracing::info!(asset_id = id, "Deleting asset and its remote copy");
        self.request_unit(
            reqwest::Method::POST,
            DELETE_ASSET_PATH,
            Some(RequestBody::json(&DeleteAssetRequest::new(id))?),
        )
        .await
    }

    /// Thumbnail URL for a playback id (does not call the API).
    pub fn thumbnail_url(&self, playback_id: Option<&str>, token: Option<&str>) -> Option<String> {
        thumbnail_url(self.base_url(), playback_id, token)
    }

    /// Request a signed token for a playback id.
    pub async fn playback_token(
        &self,
        playback_id: &str,
        purpose: TokenPurpose,
    ) -> AdminResult<PlaybackToken> {
        self.get(&sign_path(playback_id, purpose)).await
    }

    /// Signed thumbnail URL. Returns `Ok(None)` without any request when the
    /// asset has no playback id.
    pub async fn signed_thumbnail_url(
        &self,
        playback_id: Option<&str>,
    ) -> AdminResult<Option<String>> {
        let Some(playback_id) = playback_id.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };
        let token = self
            .playback_token(playback_id, TokenPurpose::Thumbnail)
            .await?;
        Ok(self.thumbnail_url(Some(playback_id), Some(&token.token)))
    }
}

#[async_trait]
impl AssetMutations for ApiClient {
    async fn update_asset(&self, patch: &AssetUpdatePatch) -> AdminResult<Asset> {
        ApiClient::update_asset(self, patch).await
    }

    async fn delete_asset(&self, asset: &Asset) -> AdminResult<()> {
        ApiClient::delete_asset(self, asset).await
    }
}
