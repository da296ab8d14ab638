//! Learning card catalog
//!
//! Holds the read-only set of learning cards loaded at startup and the
//! lookup/search operations the MCP tools are built on.

mod error;
mod loader;
mod matcher;
mod record;
mod store;

pub use error::{CatalogError, Result};
pub use matcher::{find_card, list_cards, search_cards, CardQuery, CardSummary};
pub use record::Record;
pub use store::Catalog;
