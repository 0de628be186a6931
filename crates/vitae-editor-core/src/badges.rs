//! The badge list model: an ordered sequence of unique, non-empty labels.
//!
//! Three views of this state must stay consistent - the in-memory list here,
//! the rendered rows, and the serialized hidden-field projection. The list is
//! the single source of truth after initial load; the other two are derived.

use thiserror::Error;

/// Error produced when initial field content cannot be read as a badge list.
///
/// Callers that load from an external field recover to an empty list rather
/// than propagating this; see [`BadgeList::from_json`].
#[derive(Debug, Error)]
pub enum BadgeParseError {
    /// The field content was not valid JSON.
    #[error("invalid JSON in badge field: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The field content parsed, but was not an array of strings.
    #[error("badge field is not a JSON array of strings")]
    NotAStringArray,
}

/// Outcome of an add attempt.
///
/// Returned to the event layer so presentation policy (notice vs. silence)
/// stays out of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Label appended at this index.
    Added(usize),
    /// Trimmed label case-sensitively equals an existing member; unchanged.
    Duplicate,
    /// Input was empty or whitespace-only; unchanged.
    Empty,
}

/// Parse raw field text as a JSON array of strings.
///
/// Strict: any non-array or non-string member is an error. Lenient recovery
/// is layered on top in [`BadgeList::from_json`].
pub fn parse_labels(raw: &str) -> Result<Vec<String>, BadgeParseError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let items = value.as_array().ok_or(BadgeParseError::NotAStringArray)?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_owned)
                .ok_or(BadgeParseError::NotAStringArray)
        })
        .collect()
}

/// Ordered list of badge labels.
///
/// Invariants: no two equal members (case-sensitive), no empty or
/// whitespace-only member, order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeList {
    labels: Vec<String>,
}

impl BadgeList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from raw field text.
    ///
    /// Malformed content (invalid JSON, non-array, non-string members)
    /// degrades to an empty list with a warning - a broken field must not
    /// take the page down. Loaded members are normalized: trimmed, empties
    /// dropped, duplicates dropped keeping the first occurrence, so the
    /// invariants hold for arbitrary input.
    pub fn from_json(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::new();
        }
        match parse_labels(raw) {
            Ok(parsed) => Self::from_labels(parsed),
            Err(err) => {
                tracing::warn!(%err, "malformed badge field content, starting empty");
                Self::new()
            }
        }
    }

    /// Build from already-parsed labels, normalizing to uphold invariants.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for label in labels {
            // Normalization only; no notice for dropped entries at load time.
            let _ = list.add(label.as_ref());
        }
        list
    }

    /// The current labels, in presentation order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Check membership (case-sensitive exact match).
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Attempt to append a label. The input is trimmed first.
    pub fn add(&mut self, raw: &str) -> AddOutcome {
        let label = raw.trim();
        if label.is_empty() {
            return AddOutcome::Empty;
        }
        if self.contains(label) {
            return AddOutcome::Duplicate;
        }
        self.labels.push(label.to_owned());
        AddOutcome::Added(self.labels.len() - 1)
    }

    /// Remove the label at `index`, returning it. Out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.labels.len() {
            Some(self.labels.remove(index))
        } else {
            None
        }
    }

    /// The serialized projection written to the hidden field.
    ///
    /// Always exactly `JSON.stringify(labels)` of the current state.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.labels).unwrap_or_else(|_| String::from("[]"))
    }
}
