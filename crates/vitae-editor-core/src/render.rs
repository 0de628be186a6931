//! Row-level render plan for the badge list.
//!
//! Each label gets a `BadgeRender` row with a stable content-based ID, so the
//! DOM layer can reconcile by identity instead of rebuilding everything, and
//! removal can resolve a clicked row back to its label without relying on
//! live tree traversal.

use smol_str::{SmolStr, format_smolstr};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::badges::BadgeList;

/// A renderable badge row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeRender {
    /// Stable content-based ID for DOM diffing (format: `badge-{hash:x}`)
    pub id: SmolStr,

    /// The badge label text
    pub label: String,

    /// Hash of the label for quick change detection
    pub source_hash: u64,
}

/// Hash a label for identity comparison.
pub fn hash_label(label: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    hasher.finish()
}

/// Generate a row ID from a label.
///
/// Labels are unique within a list, so the derived IDs are too. IDs are
/// stable across re-renders of the same label.
pub fn make_badge_id(label: &str) -> SmolStr {
    format_smolstr!("badge-{:x}", hash_label(label))
}

/// Build the render plan for the current list state, one row per label in
/// presentation order.
pub fn render_badges(list: &BadgeList) -> Vec<BadgeRender> {
    list.labels()
        .iter()
        .map(|label| BadgeRender {
            id: make_badge_id(label),
            label: label.clone(),
            source_hash: hash_label(label),
        })
        .collect()
}

/// Resolve a row ID back to its index in the plan.
///
/// Returns `None` for unknown IDs (stale references), which callers treat as
/// a no-op.
pub fn find_badge_index(rows: &[BadgeRender], id: &str) -> Option<usize> {
    rows.iter().position(|row| row.id == id)
}
