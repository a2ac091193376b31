use anyhow::Context;
use muxadmin_api_client::{ApiClient, SearchCriterion, UploadMedia};
use muxadmin_core::constants::DEFAULT_PAGE_LIMIT;
use muxadmin_core::models::{Asset, AssetPage};
use muxadmin_core::AdminResult;
use std::path::Path;

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Render an asset page as a fixed-width table.
pub fn format_asset_table(page: &AssetPage) -> String {
    let mut out = format!(
        "{:<8} {:<40} {:<6} {:<24} {}\n",
        "ID", "TITLE", "READY", "PLAYBACK ID", "ERROR"
    );
    for asset in &page.items {
        out.push_str(&format_asset_row(asset));
        out.push('\n');
    }
    out.push_str(&format!(
        "{} of {} asset(s)",
        page.items.len(),
        page.total_count
    ));
    out
}

fn format_asset_row(asset: &Asset) -> String {
    format!(
        "{:<8} {:<40} {:<6} {:<24} {}",
        asset.id,
        truncate_string(&asset.title, 40),
        if asset.is_ready { "yes" } else { "no" },
        truncate_string(asset.playback_id.as_deref().unwrap_or("-"), 24),
        asset.error_message.as_deref().unwrap_or("")
    )
}

/// Read a local video into an upload payload named after the file.
pub fn read_upload_file(path: &Path) -> anyhow::Result<UploadMedia> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("video.mp4")
        .to_string();
    Ok(UploadMedia::File { file_name, bytes })
}

/// Find an asset by its exact remote id. The search is a contains match, so
/// every page is walked until the id turns up.
pub async fn find_by_remote_id(client: &ApiClient, asset_id: &str) -> AdminResult<Option<Asset>> {
    let search = SearchCriterion::by_asset_id(asset_id);
    let mut offset = 0;
    loop {
        let page = client
            .list_assets(Some(&search), None, offset, DEFAULT_PAGE_LIMIT)
            .await?;
        let fetched = page.items.len() as u32;
        if let Some(asset) = page
            .items
            .into_iter()
            .find(|a| a.asset_id.as_deref() == Some(asset_id))
        {
            return Ok(Some(asset));
        }
        offset += fetched;
        if fetched == 0 || u64::from(offset) >= page.total_count {
            return Ok(None);
        }
    }
}

/// Initialize tracing for the CLI. Logs go to stderr so JSON output on
/// stdout stays clean.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
