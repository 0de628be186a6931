//! Browser DOM layer for the vitae badge editor.
//!
//! This crate keeps a `BadgeList` in lockstep with its rendered rows and the
//! serialized hidden form field. It assumes a `wasm32-unknown-unknown`
//! target environment.
//!
//! # Architecture
//!
//! - `element`: the `BadgeEditor` component lifecycle and event handlers
//! - `dom_sync`: row construction and keyed DOM reconciliation
//! - `hidden_form`: contenteditable -> hidden form copy before htmx submit
//!
//! # Re-exports
//!
//! This crate re-exports `vitae-editor-core` for convenience, so consumers
//! only need to depend on `vitae-editor-browser`.

// Re-export core crate
pub use vitae_editor_core;
pub use vitae_editor_core::*;

pub mod dom_sync;
pub mod element;
pub mod hidden_form;

pub use element::BadgeEditor;
pub use hidden_form::HiddenFormBridge;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
