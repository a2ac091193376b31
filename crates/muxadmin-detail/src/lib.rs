//! Headless asset detail view.
//!
//! Holds the form for one asset, tracks touched fields, validates the title
//! and sends only what changed. Independent of any UI toolkit: a front end
//! renders `edit_state()` and forwards user events to the controller.

pub mod controller;
pub mod snippet;
pub mod state;

pub use controller::{DetailController, DetailOutcome, DetailPermissions, DetailPhase, Notice};
pub use snippet::player_snippet;
pub use state::{
    build_patch, reduce, validate, EditAction, EditState, FormErrors, FormValues, TouchedFields,
};
