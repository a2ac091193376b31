//! URL builders that need no network access.

use crate::constants::{SIGN_PATH, THUMBNAIL_PATH};
use crate::models::TokenPurpose;

/// Thumbnail URL for a playback id under the plugin base URL.
///
/// Returns `None` when there is no playback id (the asset has not been
/// processed yet). The token query parameter is added only when a non-empty
/// token is given.
pub fn thumbnail_url(
    base_url: &str,
    playback_id: Option<&str>,
    token: Option<&str>,
) -> Option<String> {
    let playback_id = playback_id.filter(|id| !id.is_empty())?;
    let mut url = format!(
        "{}{}/{}",
        base_url.trim_end_matches('/'),
        THUMBNAIL_PATH,
        urlencoding::encode(playback_id)
    );
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        url.push_str("?token=");
        url.push_str(&urlencoding::encode(token));
    }
    Some(url)
}

/// Path (relative to the plugin base) of the token signing endpoint.
pub fn sign_path(playback_id: &str, purpose: TokenPurpose) -> String {
    format!(
        "{}/{}?type={}",
        SIGN_PATH,
        urlencoding::encode(playback_id),
        purpose
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://cms.local/mux-video-uploader";

    #[test]
    fn no_playback_id_means_no_url() {
        assert_eq!(thumbnail_url(BASE, None, Some("t1")), None);
        assert_eq!(thumbnail_url(BASE, Some(""), None), None);
    }

    #[test]
    fn unsigned_thumbnail_has_no_token_param() {
        assert_eq!(
            thumbnail_url(BASE, Some("abc"), None).as_deref(),
            Some("http://cms.local/mux-video-uploader/thumbnail/abc")
        );
        assert_eq!(
            thumbnail_url(BASE, Some("abc"), Some("")).as_deref(),
            Some("http://cms.local/mux-video-uploader/thumbnail/abc")
        );
    }

    #[test]
    fn signed_thumbnail_carries_token() {
        assert_eq!(
            thumbnail_url(BASE, Some("abc"), Some("t1")).as_deref(),
            Some("http://cms.local/mux-video-uploader/thumbnail/abc?token=t1")
        );
    }

    #[test]
    fn sign_path_includes_purpose() {
        assert_eq!(sign_path("abc", TokenPurpose::Thumbnail), "/sign/abc?type=thumbnail");
        assert_eq!(sign_path("abc", TokenPurpose::Playback), "/sign/abc?type=playback");
    }
}
