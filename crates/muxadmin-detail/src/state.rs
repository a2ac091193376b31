//! Edit state for one asset and the pure reducer that mutates it.

use muxadmin_core::models::{Asset, AssetUpdatePatch};

pub const TITLE_FIELD: &str = "title";
pub const TITLE_REQUIRED: &str = "No title specified";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub is_ready: bool,
}

impl FormValues {
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            title: asset.title.clone(),
            is_ready: asset.is_ready,
        }
    }
}

/// Fields the user edited since the form was opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedFields {
    pub title: bool,
    pub is_ready: bool,
}

impl TouchedFields {
    pub fn is_empty(&self) -> bool {
        !self.title && !self.is_ready
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub values: FormValues,
    pub touched: TouchedFields,
    pub errors: FormErrors,
    pub submitting: bool,
}

impl EditState {
    /// Fresh state from an asset snapshot: nothing touched, no errors.
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            values: FormValues::from_asset(asset),
            touched: TouchedFields::default(),
            errors: FormErrors::default(),
            submitting: false,
        }
    }

    pub fn apply(self, action: EditAction) -> Self {
        reduce(self, action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    SetTitle(String),
    SetReady(bool),
    SetErrors(FormErrors),
    SubmitStarted,
    SubmitFinished,
}

pub fn reduce(mut state: EditState, action: EditAction) -> EditState {
    match action {
        EditAction::SetTitle(title) => {
            state.values.title = title;
            state.touched.title = true;
            state.errors.title = None;
        }
        EditAction::SetReady(is_ready) => {
            state.values.is_ready = is_ready;
            state.touched.is_ready = true;
        }
        EditAction::SetErrors(errors) => state.errors = errors,
        EditAction::SubmitStarted => {
            state.submitting = true;
            state.errors = FormErrors::default();
        }
        EditAction::SubmitFinished => state.submitting = false,
    }
    state
}

pub fn validate(values: &FormValues) -> FormErrors {
    FormErrors {
        title: values
            .title
            .trim()
            .is_empty()
            .then(|| TITLE_REQUIRED.to_string()),
    }
}

/// Sparse patch holding only touched fields.
pub fn build_patch(asset_id: u64, state: &EditState) -> AssetUpdatePatch {
    AssetUpdatePatch {
        id: asset_id,
        title: state
            .touched
            .title
            .then(|| state.values.title.clone()),
        is_ready: state.touched.is_ready.then_some(state.values.is_ready),
    }
}
