use serde::{Deserialize, Serialize};

/// One learning card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub title: String,
    /// Matched case-insensitively.
    pub occupation: String,
    /// Matched case-insensitively.
    pub category: String,
    pub description: String,
    /// Rendered in order with 1-based numbering.
    #[serde(default)]
    pub steps: Vec<String>,
    pub fun_fact: String,
    pub key_takeaway: String,
}

impl Record {
    /// True when any searchable field contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        [
            &self.title,
            &self.description,
            &self.occupation,
            &self.category,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}
