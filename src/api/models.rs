use serde::{Deserialize, Serialize};

/// A book as served by the Wing API.
///
/// `sentences_count` and `words_count` are maintained server-side when the
/// book content is imported; older records may omit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub sentences_count: i64,
    #[serde(default)]
    pub words_count: i64,
}
