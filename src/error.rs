//! Error types for the options editor.
//!
//! Kind mismatches on edits are not errors (see [`EditOutcome`](crate::EditOutcome));
//! everything here is either a malformed configuration or a lookup into the
//! tree that does not resolve.

use thiserror::Error;

use crate::tree::GroupId;

/// A color field was found in a shape outside the legal set.
///
/// Legal shapes are a bare string, `{}`, `{ "value": string }`,
/// `{ "value": { "r", "g", "b" } }` and `{ "value": { "h", "s", "l" } }`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unrecognized color shape: {found}")]
pub struct ColorShapeError {
    /// The offending JSON, serialized.
    pub found: String,
}

impl ColorShapeError {
    pub(crate) fn new(found: &serde_json::Value) -> Self {
        Self {
            found: found.to_string(),
        }
    }
}

/// Errors produced while building or driving the editor tree.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A color field had a shape the normalizer cannot round-trip.
    #[error(transparent)]
    UnrecognizedColor(#[from] ColorShapeError),
    /// The group id does not belong to this tree.
    #[error("no group with id {0:?}")]
    UnknownGroup(GroupId),
    /// No group matched the key path.
    #[error("no group at path `{0}`")]
    UnknownPath(String),
    /// The group has no property with this key.
    #[error("group `{group}` has no property `{key}`")]
    UnknownProperty { group: String, key: String },
    /// The group has no button with this key.
    #[error("group `{group}` has no button `{key}`")]
    UnknownButton { group: String, key: String },
    /// The shared options are borrowed elsewhere (usually a refresh still
    /// holding them).
    #[error("options are borrowed elsewhere")]
    OptionsBusy,
    /// Failed to read or write an options file.
    #[error("options file: {0}")]
    Io(#[from] std::io::Error),
    /// Options JSON did not parse or serialize.
    #[error("options json: {0}")]
    Json(#[from] serde_json::Error),
}
