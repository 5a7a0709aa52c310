use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CharacterRecord: one entry of the sibling list
// ---------------------------------------------------------------------------

/// A character on the same account as the looked-up character.
///
/// Item levels are display strings upstream (e.g. `"1,620.00"`), so they are
/// kept as-is rather than parsed into numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CharacterRecord {
    pub server_name: String,
    pub character_name: String,
    pub character_level: i64,
    pub character_class_name: String,
    pub item_avg_level: String,
    pub item_max_level: String,
}
