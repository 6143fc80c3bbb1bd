/// Search/filter contract for the collection grid
///
/// Three independent criteria combined with AND: a case-insensitive
/// free-text query, an exact species match, and an exact style match.
/// `None` for species or style means "all" (pass-through). Filtering
/// borrows from the catalogue and preserves its order; it never sorts
/// or mutates.

use super::data::TreeRecord;

/// The current state of the three filter controls
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    /// Free-text query; empty matches everything
    pub query: String,
    /// Exact species, or `None` for all species
    pub species: Option<String>,
    /// Exact style, or `None` for all styles
    pub style: Option<String>,
}

impl Filter {
    /// Does one record satisfy all three active criteria?
    pub fn matches(&self, record: &TreeRecord) -> bool {
        let term = self.query.trim().to_lowercase();

        let matches_term = term.is_empty() || {
            // Missing notes count as an empty field, not a mismatch
            let haystack = format!(
                "{} {} {} {}",
                record.name,
                record.species,
                record.style,
                record.notes.as_deref().unwrap_or("")
            )
            .to_lowercase();

            haystack.contains(&term)
        };

        let matches_species = self
            .species
            .as_deref()
            .map_or(true, |species| record.species == species);

        let matches_style = self
            .style
            .as_deref()
            .map_or(true, |style| record.style == style);

        matches_term && matches_species && matches_style
    }

    /// The order-stable subsequence of records passing the filter
    pub fn apply<'a>(&self, catalogue: &'a [TreeRecord]) -> Vec<&'a TreeRecord> {
        catalogue.iter().filter(|record| self.matches(record)).collect()
    }
}

/// Distinct species present in the catalogue, sorted ascending
pub fn distinct_species(catalogue: &[TreeRecord]) -> Vec<String> {
    distinct(catalogue.iter().map(|record| record.species.clone()))
}

/// Distinct styles present in the catalogue, sorted ascending
pub fn distinct_styles(catalogue: &[TreeRecord]) -> Vec<String> {
    distinct(catalogue.iter().map(|record| record.style.clone()))
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut values: Vec<String> = values.collect();
    values.sort();
    values.dedup();
    values
}
