//! Detail view controller.
//!
//! Owns the edit state of exactly one asset at a time:
//!
//! ```text
//! Closed -> open() -> Editing <-> DeleteConfirming
//!                        |              |
//!                     submit()    confirm_delete()
//!                        v              |
//!                   Submitting          |
//!                        v              v
//!                      Closed <---------+
//! ```
//!
//! A single `processing` flag keeps submit and delete mutually exclusive
//! while a request is outstanding.

use muxadmin_core::models::Asset;
use muxadmin_core::{AdminError, AdminResult, AssetMutations};

use crate::snippet::player_snippet;
use crate::state::{build_patch, validate, EditAction, EditState, TITLE_FIELD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    Closed,
    Editing,
    DeleteConfirming,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailPermissions {
    pub enable_update: bool,
    pub enable_delete: bool,
}

impl Default for DetailPermissions {
    fn default() -> Self {
        Self {
            enable_update: true,
            enable_delete: true,
        }
    }
}

/// Signal for the parent view after a successful submit or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    RefreshAndClose,
}

/// Message for the host's notification surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    CopiedToClipboard,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::CopiedToClipboard => "Copied code snippet to clipboard",
        }
    }
}

struct OpenAsset {
    asset: Asset,
    state: EditState,
    snippet: String,
}

pub struct DetailController<S> {
    service: S,
    phase: DetailPhase,
    open: Option<OpenAsset>,
    permissions: DetailPermissions,
    processing: bool,
}

impl<S: AssetMutations> DetailController<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            phase: DetailPhase::Closed,
            open: None,
            permissions: DetailPermissions::default(),
            processing: false,
        }
    }

    /// Open the view for an asset. Any previous edit state is discarded.
    pub fn open(&mut self, asset: Asset, permissions: DetailPermissions) {
        tracing::debug!(asset_id = asset.id, "Opening asset details");
        self.open = Some(OpenAsset {
            state: EditState::from_asset(&asset),
            snippet: player_snippet(&asset),
            asset,
        });
        self.permissions = permissions;
        self.processing = false;
        self.phase = DetailPhase::Editing;
    }

    /// Close the view, dropping edit state and touched fields.
    pub fn close(&mut self) {
        if let Some(open) = self.open.take() {
            tracing::debug!(asset_id = open.asset.id, "Closing asset details");
        }
        self.processing = false;
        self.phase = DetailPhase::Closed;
    }

    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn permissions(&self) -> DetailPermissions {
        self.permissions
    }

    pub fn asset(&self) -> Option<&Asset> {
        self.open.as_ref().map(|open| &open.asset)
    }

    pub fn edit_state(&self) -> Option<&EditState> {
        self.open.as_ref().map(|open| &open.state)
    }

    /// Processing error reported by the video host, for the error banner.
    pub fn error_message(&self) -> Option<&str> {
        self.asset().and_then(|asset| asset.error_message.as_deref())
    }

    pub fn code_snippet(&self) -> Option<&str> {
        self.open.as_ref().map(|open| open.snippet.as_str())
    }

    /// Hand out the snippet for the clipboard along with the notice to show.
    pub fn copy_code_snippet(&self) -> AdminResult<(&str, Notice)> {
        let snippet = self
            .code_snippet()
            .ok_or_else(|| AdminError::InvalidState("Details are not open".to_string()))?;
        Ok((snippet, Notice::CopiedToClipboard))
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> AdminResult<()> {
        self.edit(EditAction::SetTitle(title.into()))
    }

    pub fn set_ready(&mut self, is_ready: bool) -> AdminResult<()> {
        self.edit(EditAction::SetReady(is_ready))
    }

    fn edit(&mut self, action: EditAction) -> AdminResult<()> {
        self.require_phase(DetailPhase::Editing)?;
        if !self.permissions.enable_update {
            return Err(AdminError::NotPermitted(
                "Updating this asset is disabled".to_string(),
            ));
        }
        self.dispatch(action);
        Ok(())
    }

    /// Show or hide the delete confirmation. Hiding it has no side effects.
    pub fn toggle_delete_warning(&mut self) -> AdminResult<()> {
        if self.processing {
            return Err(AdminError::Busy);
        }
        match self.phase {
            DetailPhase::Editing => {
                if !self.permissions.enable_delete {
                    return Err(AdminError::NotPermitted(
                        "Deleting this asset is disabled".to_string(),
                    ));
                }
                self.phase = DetailPhase::DeleteConfirming;
            }
            DetailPhase::DeleteConfirming => self.phase = DetailPhase::Editing,
            other => return Err(invalid_phase(other)),
        }
        tracing::debug!(phase = ?self.phase, "Toggled delete confirmation");
        Ok(())
    }

    pub fn cancel_delete(&mut self) -> AdminResult<()> {
        self.require_phase(DetailPhase::DeleteConfirming)?;
        self.toggle_delete_warning()
    }

    /// Validate and send the touched fields. On success the view closes and
    /// the parent should refresh. A validation failure issues no request.
    pub async fn submit(&mut self) -> AdminResult<DetailOutcome> {
        if self.processing {
            return Err(AdminError::Busy);
        }
        self.require_phase(DetailPhase::Editing)?;
        let open = self.open_asset()?;

        let errors = validate(&open.state.values);
        if let Some(message) = errors.title.clone() {
            self.dispatch(EditAction::SetErrors(errors));
            return Err(AdminError::validation(TITLE_FIELD, message));
        }

        let patch = build_patch(open.asset.id, &open.state);
        if patch.is_empty() {
            tracing::debug!(asset_id = patch.id, "Nothing touched, skipping update");
            self.close();
            return Ok(DetailOutcome::RefreshAndClose);
        }

        self.processing = true;
        self.phase = DetailPhase::Submitting;
        self.dispatch(EditAction::SubmitStarted);

        match self.service.update_asset(&patch).await {
            Ok(updated) => {
                tracing::info!(asset_id = updated.id, "Asset updated");
                self.close();
                Ok(DetailOutcome::RefreshAndClose)
            }
            Err(err) => {
                tracing::warn!(asset_id = patch.id, error = %err, "Asset update failed");
                self.processing = false;
                self.phase = DetailPhase::Editing;
                self.dispatch(EditAction::SubmitFinished);
                Err(err)
            }
        }
    }

    /// Delete the asset locally and on the video host. Only valid while the
    /// confirmation is shown. On failure the form is re-enabled.
    pub async fn confirm_delete(&mut self) -> AdminResult<DetailOutcome> {
        if self.processing {
            return Err(AdminError::Busy);
        }
        self.require_phase(DetailPhase::DeleteConfirming)?;
        let asset = self.open_asset()?.asset.clone();

        self.processing = true;
        match self.service.delete_asset(&asset).await {
            Ok(()) => {
                tracing::info!(asset_id = asset.id, "Asset deleted");
                self.close();
                Ok(DetailOutcome::RefreshAndClose)
            }
            Err(err) => {
                tracing::warn!(asset_id = asset.id, error = %err, "Asset deletion failed");
                self.processing = false;
                self.phase = DetailPhase::Editing;
                Err(err)
            }
        }
    }

    fn dispatch(&mut self, action: EditAction) {
        if let Some(open) = self.open.as_mut() {
            open.state = open.state.clone().apply(action);
        }
    }

    fn open_asset(&self) -> AdminResult<&OpenAsset> {
        self.open
            .as_ref()
            .ok_or_else(|| AdminError::InvalidState("Details are not open".to_string()))
    }

    fn require_phase(&self, expected: DetailPhase) -> AdminResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(invalid_phase(self.phase))
        }
    }
}

fn invalid_phase(phase: DetailPhase) -> AdminError {
    match phase {
        DetailPhase::Submitting => AdminError::Busy,
        other => AdminError::InvalidState(format!("Not allowed while {:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use muxadmin_core::models::AssetUpdatePatch;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingService {
        updates: Mutex<Vec<AssetUpdatePatch>>,
        deletes: Mutex<Vec<u64>>,
        fail: bool,
        hang: bool,
    }

    impl RecordingService {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn hanging() -> Self {
            Self {
                hang: true,
                ..Default::default()
            }
        }

        fn request_count(&self) -> usize {
            self.updates.lock().unwrap().len() + self.deletes.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AssetMutations for RecordingService {
        async fn update_asset(&self, patch: &AssetUpdatePatch) -> AdminResult<Asset> {
            self.updates.lock().unwrap().push(patch.clone());
            if self.hang {
                return std::future::pending().await;
            }
            if self.fail {
                return Err(AdminError::Server {
                    status: 500,
                    body: None,
                });
            }
            let mut asset = sample_asset();
            if let Some(title) = &patch.title {
                asset.title = title.clone();
            }
            Ok(asset)
        }

        async fn delete_asset(&self, asset: &Asset) -> AdminResult<()> {
            self.deletes.lock().unwrap().push(asset.id);
            if self.fail {
                return Err(AdminError::Network("connection reset".to_string()));
            }
            Ok(())
        }
    }

    fn sample_asset() -> Asset {
        serde_json::from_value(serde_json::json!({
            "id": 42,
            "title": "Original",
            "playback_id": "pb-42",
            "isReady": false,
            "error_message": "Input file is corrupt"
        }))
        .unwrap()
    }

    fn opened(service: RecordingService) -> DetailController<RecordingService> {
        let mut controller = DetailController::new(service);
        controller.open(sample_asset(), DetailPermissions::default());
        controller
    }

    #[test]
    fn open_initializes_from_snapshot() {
        let controller = opened(RecordingService::default());
        assert_eq!(controller.phase(), DetailPhase::Editing);
        let state = controller.edit_state().unwrap();
        assert_eq!(state.values.title, "Original");
        assert!(state.touched.is_empty());
        assert_eq!(controller.error_message(), Some("Input file is corrupt"));
        assert!(controller.code_snippet().unwrap().contains("pb-42"));
    }

    #[tokio::test]
    async fn submit_sends_only_touched_title() {
        let mut controller = opened(RecordingService::default());
        controller.set_title("Renamed").unwrap();

        let outcome = controller.submit().await.unwrap();

        assert_eq!(outcome, DetailOutcome::RefreshAndClose);
        assert_eq!(controller.phase(), DetailPhase::Closed);
        assert!(controller.edit_state().is_none());
        let updates = controller.service().updates.lock().unwrap();
        assert_eq!(
            updates.as_slice(),
            &[AssetUpdatePatch::new(42).with_title("Renamed")]
        );
    }

    #[tokio::test]
    async fn submit_sends_only_touched_readiness() {
        let mut controller = opened(RecordingService::default());
        controller.set_ready(true).unwrap();

        controller.submit().await.unwrap();

        let updates = controller.service().updates.lock().unwrap();
        assert_eq!(updates.as_slice(), &[AssetUpdatePatch::new(42).with_ready(true)]);
    }

    #[tokio::test]
    async fn empty_title_blocks_submission() {
        let mut controller = opened(RecordingService::default());
        controller.set_title("").unwrap();

        let err = controller.submit().await.unwrap_err();

        assert_eq!(err.field(), Some("title"));
        assert_eq!(controller.phase(), DetailPhase::Editing);
        assert!(!controller.is_processing());
        assert_eq!(
            controller.edit_state().unwrap().errors.title.as_deref(),
            Some("No title specified")
        );
        assert_eq!(controller.service().request_count(), 0);
    }

    #[tokio::test]
    async fn untouched_submit_closes_without_request() {
        let mut controller = opened(RecordingService::default());

        let outcome = controller.submit().await.unwrap();

        assert_eq!(outcome, DetailOutcome::RefreshAndClose);
        assert_eq!(controller.service().request_count(), 0);
    }

    #[tokio::test]
    async fn failed_submit_reenables_form() {
        let mut controller = opened(RecordingService::failing());
        controller.set_title("Renamed").unwrap();

        let err = controller.submit().await.unwrap_err();

        assert!(matches!(err, AdminError::Server { status: 500, .. }));
        assert_eq!(controller.phase(), DetailPhase::Editing);
        assert!(!controller.is_processing());
        let state = controller.edit_state().unwrap();
        assert!(!state.submitting);
        assert_eq!(state.values.title, "Renamed");
        assert!(state.touched.title);
    }

    #[tokio::test]
    async fn outstanding_request_blocks_second_mutation() {
        let mut controller = opened(RecordingService::hanging());
        controller.set_title("Renamed").unwrap();

        let timed_out = tokio::time::timeout(Duration::from_millis(20), controller.submit()).await;
        assert!(timed_out.is_err());

        assert!(controller.is_processing());
        assert!(matches!(controller.submit().await, Err(AdminError::Busy)));
        assert!(matches!(controller.confirm_delete().await, Err(AdminError::Busy)));
        assert!(matches!(controller.toggle_delete_warning(), Err(AdminError::Busy)));
        assert_eq!(controller.service().request_count(), 1);

        controller.close();
        assert!(!controller.is_processing());
    }

    #[tokio::test]
    async fn cancel_delete_has_no_side_effects() {
        let mut controller = opened(RecordingService::default());
        controller.set_title("Pending edit").unwrap();
        let before = controller.edit_state().cloned();

        controller.toggle_delete_warning().unwrap();
        assert_eq!(controller.phase(), DetailPhase::DeleteConfirming);
        controller.cancel_delete().unwrap();

        assert_eq!(controller.phase(), DetailPhase::Editing);
        assert_eq!(controller.edit_state().cloned(), before);
        assert_eq!(controller.asset(), Some(&sample_asset()));
        assert_eq!(controller.service().request_count(), 0);
    }

    #[tokio::test]
    async fn confirm_delete_issues_one_request_then_refresh() {
        let mut controller = opened(RecordingService::default());
        controller.toggle_delete_warning().unwrap();

        let outcome = controller.confirm_delete().await.unwrap();

        assert_eq!(outcome, DetailOutcome::RefreshAndClose);
        assert_eq!(controller.phase(), DetailPhase::Closed);
        assert_eq!(controller.service().deletes.lock().unwrap().as_slice(), &[42]);
        assert!(controller.service().updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn confirm_requires_confirmation_phase() {
        let mut controller = opened(RecordingService::default());

        let err = controller.confirm_delete().await.unwrap_err();

        assert!(matches!(err, AdminError::InvalidState(_)));
        assert_eq!(controller.service().request_count(), 0);
    }

    #[tokio::test]
    async fn failed_delete_returns_to_editing() {
        let mut controller = opened(RecordingService::failing());
        controller.toggle_delete_warning().unwrap();

        let err = controller.confirm_delete().await.unwrap_err();

        assert!(matches!(err, AdminError::Network(_)));
        assert_eq!(controller.phase(), DetailPhase::Editing);
        assert!(!controller.is_processing());
        assert!(controller.asset().is_some());
    }

    #[test]
    fn permissions_gate_edits_and_delete() {
        let mut controller = DetailController::new(RecordingService::default());
        controller.open(
            sample_asset(),
            DetailPermissions {
                enable_update: false,
                enable_delete: false,
            },
        );

        assert!(matches!(
            controller.set_title("x"),
            Err(AdminError::NotPermitted(_))
        ));
        assert!(matches!(
            controller.toggle_delete_warning(),
            Err(AdminError::NotPermitted(_))
        ));
        assert_eq!(controller.phase(), DetailPhase::Editing);
        assert!(controller.edit_state().unwrap().touched.is_empty());
    }

    #[tokio::test]
    async fn submit_with_update_disabled_closes_without_request() {
        let mut controller = DetailController::new(RecordingService::default());
        controller.open(
            sample_asset(),
            DetailPermissions {
                enable_update: false,
                enable_delete: true,
            },
        );

        let outcome = controller.submit().await.unwrap();

        assert_eq!(outcome, DetailOutcome::RefreshAndClose);
        assert_eq!(controller.phase(), DetailPhase::Closed);
        assert_eq!(controller.service().request_count(), 0);
    }

    #[test]
    fn edits_rejected_while_closed_or_confirming() {
        let mut controller = DetailController::new(RecordingService::default());
        assert!(matches!(
            controller.set_title("x"),
            Err(AdminError::InvalidState(_))
        ));

        controller.open(sample_asset(), DetailPermissions::default());
        controller.toggle_delete_warning().unwrap();
        assert!(matches!(
            controller.set_ready(true),
            Err(AdminError::InvalidState(_))
        ));
    }

    #[test]
    fn copy_snippet_yields_notice() {
        let controller = opened(RecordingService::default());
        let (snippet, notice) = controller.copy_code_snippet().unwrap();
        assert!(snippet.contains("metadata-video-title=\"Original\""));
        assert_eq!(notice.message(), "Copied code snippet to clipboard");
    }

    #[test]
    fn reopening_discards_previous_edits() {
        let mut controller = opened(RecordingService::default());
        controller.set_title("Draft").unwrap();
        controller.close();
        assert!(controller.code_snippet().is_none());

        controller.open(sample_asset(), DetailPermissions::default());
        let state = controller.edit_state().unwrap();
        assert_eq!(state.values.title, "Original");
        assert!(state.touched.is_empty());
    }
}
