/// View construction module
///
/// Pure state → widget functions. Data shaping (filtering, option
/// derivation, lookup) lives in the catalogue module; these files only
/// build widgets from already-shaped state.

pub mod collection;
pub mod detail;
