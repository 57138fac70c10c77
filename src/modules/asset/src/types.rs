use serde::{Deserialize, Serialize};

/// The one record kind this module manages.
///
/// Pure data: construction, accessors, structural equality. The serialized
/// field names (`picId`, `eventId`, `hashContext`, `picPath`, `createDate`)
/// are pinned for compatibility with already-persisted values and must not
/// change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(rename = "picId")]
    pub id: String,
    pub event_id: String,
    pub hash_context: String,
    #[serde(rename = "picPath")]
    pub path: String,
    /// Stored exactly as supplied, never parsed or validated.
    pub create_date: String,
}

impl AssetRecord {
    pub fn new(
        id: impl Into<String>,
        event_id: impl Into<String>,
        hash_context: impl Into<String>,
        path: impl Into<String>,
        create_date: impl Into<String>,
    ) -> Self {
        AssetRecord {
            id: id.into(),
            event_id: event_id.into(),
            hash_context: hash_context.into(),
            path: path.into(),
            create_date: create_date.into(),
        }
    }
}
