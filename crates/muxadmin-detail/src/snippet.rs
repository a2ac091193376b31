use muxadmin_core::models::Asset;

/// `<mux-player>` embed snippet for an asset. The token and environment key
/// are left as placeholders for the integrator to fill in.
pub fn player_snippet(asset: &Asset) -> String {
    format!(
        "<mux-player\n  playback-id=\"{}\"\n  playback-token=\"TOKEN\"\n  env-key=\"ENV_KEY\"\n  metadata-video-title=\"{}\"\n  controls\n/>",
        escape_attr(asset.playback_id.as_deref().unwrap_or_default()),
        escape_attr(&asset.title)
    )
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
