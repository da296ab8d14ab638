use crate::Record;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// The read-only set of learning cards.
///
/// Built once at startup and never mutated afterwards. Lookups scan in
/// catalog order, so when ids (or names) repeat the first record wins.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                log::warn!(
                    "Duplicate card id '{}' in catalog; lookups return the first occurrence",
                    record.id
                );
            }
        }
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn by_id(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn by_occupation(&self, occupation: &str) -> Option<&Record> {
        let wanted = occupation.to_lowercase();
        self.records
            .iter()
            .find(|record| record.occupation.to_lowercase() == wanted)
    }

    pub fn by_category(&self, category: &str) -> Option<&Record> {
        let wanted = category.to_lowercase();
        self.records
            .iter()
            .find(|record| record.category.to_lowercase() == wanted)
    }

    /// Uniform pick over the catalog; `None` when it is empty.
    pub fn random(&self) -> Option<&Record> {
        self.random_with(&mut rand::thread_rng())
    }

    pub(crate) fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Record> {
        self.records.choose(rng)
    }
}
