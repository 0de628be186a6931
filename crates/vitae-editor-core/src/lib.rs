//! vitae-editor-core: Pure Rust badge list logic without browser dependencies.
//!
//! This crate provides:
//! - `BadgeList` - the ordered, de-duplicated label list and its operations
//! - `BadgeRender` - the per-row render plan with stable content-based IDs
//! - `BadgeEditorConfig` - immutable per-initialization configuration
//!
//! Everything here is synchronous and framework-agnostic; the DOM side lives
//! in `vitae-editor-browser`.

pub mod badges;
pub mod config;
pub mod render;

pub use badges::{AddOutcome, BadgeList, BadgeParseError, parse_labels};
pub use config::{BadgeEditorConfig, IconVariant};
pub use render::{BadgeRender, find_badge_index, hash_label, make_badge_id, render_badges};
pub use smol_str::SmolStr;
