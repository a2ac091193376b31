//! Seam between the detail view and whatever performs asset mutations.
//!
//! The HTTP client implements this trait; the detail controller only depends
//! on it, so it can be driven by any backend.

use async_trait::async_trait;

use crate::error::AdminResult;
use crate::models::{Asset, AssetUpdatePatch};

#[async_trait]
pub trait AssetMutations: Send + Sync {
    /// Send a sparse update. Fields absent from the patch stay untouched.
    async fn update_asset(&self, patch: &AssetUpdatePatch) -> AdminResult<Asset>;

    /// Delete the CMS record and the remote asset in one combined request.
    async fn delete_asset(&self, asset: &Asset) -> AdminResult<()>;
}
