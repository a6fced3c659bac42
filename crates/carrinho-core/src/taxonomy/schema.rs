use serde::{Deserialize, Serialize};

/// A keyword taxonomy: the closed substring lists used to sort the free-text
/// description fragments under a cart line into buckets.
///
/// Keywords are matched case-sensitively against untranslated page text, so
/// they must stay in the shop's display language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Substrings marking a fragment as the card's language.
    pub language: Vec<String>,
    /// Substrings marking a fragment as the card's condition.
    pub condition: Vec<String>,
    /// Substrings marking a fragment as an extra attribute tag.
    pub extras: Vec<String>,
}
