//! Remap spec types.
//!
//! A spec maps field names to entries describing where each field's value is
//! read from. Specs are declared per record type in the registry or passed
//! alongside the data at build time; both use the same grammar.

mod entry;
mod mapping;

pub use entry::SpecEntry;
pub use mapping::SpecMapping;
