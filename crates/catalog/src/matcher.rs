//! Card selection for the `get_learning_card`, `list_all_cards` and
//! `search_cards` tools.

use crate::{Catalog, Record};
use serde::{Deserialize, Serialize};

/// Arguments of `get_learning_card`. Free-form strings, no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CardQuery {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// The single filter a [`CardQuery`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardFilter<'a> {
    Id(&'a str),
    Occupation(&'a str),
    Category(&'a str),
    Random,
}

impl CardQuery {
    /// Precedence is fixed: id, then occupation, then category. Empty
    /// strings count as absent.
    pub(crate) fn filter(&self) -> CardFilter<'_> {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        if let Some(id) = present(&self.id) {
            CardFilter::Id(id)
        } else if let Some(occupation) = present(&self.occupation) {
            CardFilter::Occupation(occupation)
        } else if let Some(category) = present(&self.category) {
            CardFilter::Category(category)
        } else {
            CardFilter::Random
        }
    }
}

/// Resolves a query to at most one card; no filters picks uniformly at random.
pub fn find_card<'a>(catalog: &'a Catalog, query: &CardQuery) -> Option<&'a Record> {
    match query.filter() {
        CardFilter::Id(id) => catalog.by_id(id),
        CardFilter::Occupation(occupation) => catalog.by_occupation(occupation),
        CardFilter::Category(category) => catalog.by_category(category),
        CardFilter::Random => catalog.random(),
    }
}

/// Projection of a record used by `list_all_cards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub occupation: &'a str,
    pub category: &'a str,
}

impl<'a> From<&'a Record> for CardSummary<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            id: &record.id,
            title: &record.title,
            occupation: &record.occupation,
            category: &record.category,
        }
    }
}

pub fn list_cards(catalog: &Catalog) -> Vec<CardSummary<'_>> {
    catalog.all().iter().map(CardSummary::from).collect()
}

/// Case-insensitive substring search over title, description, occupation
/// and category. Catalog order, no ranking; an empty query matches all.
pub fn search_cards<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Record> {
    let needle = query.to_lowercase();
    catalog
        .all()
        .iter()
        .filter(|record| record.contains_lowercase(&needle))
        .collect()
}
