//! Knowledge Base module - the multilingual reply table.
//!
//! - **Keys**: (category, subcategory, language) triples
//! - **Entries**: fixed text or a set of random variants
//! - **Table**: flat map loaded once from the bundled TOML data

mod entry;
mod key;
mod table;

pub use entry::*;
pub use key::*;
pub use table::*;
