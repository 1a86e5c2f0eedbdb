use serde::{Deserialize, Serialize};

/// Title given to freshly created notes.
pub(crate) const DEFAULT_TITLE: &str = "Untitled";

/// The persisted note record.
///
/// Serialized names follow the storage blob layout: `lastModified` is
/// camelCase on disk so existing collections keep loading.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Note {
    pub id: String,
    pub title: String,
    pub content: String,

    /// Milliseconds since epoch; refreshed on every field edit.
    #[serde(rename = "lastModified")]
    pub last_modified: i64,
}
