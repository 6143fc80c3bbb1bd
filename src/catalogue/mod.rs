/// Catalogue module
///
/// This module handles everything about the tree catalogue:
/// - The record data model and id lookup (data.rs)
/// - Loading and parsing the catalogue file (loader.rs)
/// - The search/filter contract and selector option sets (filter.rs)

pub mod data;
pub mod filter;
pub mod loader;
