//! View projection: filter a country list by a search query and sort it by
//! a view-selected key. Pure and non-mutating; the interactive surfaces
//! recompute it from scratch on every input change.

use crate::models::{Country, Population};
use std::cmp::Ordering;

/// Sort keys offered by the views. The card grid exposes `Name` and
/// `Population`; the table all four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic on the country name.
    Name,
    /// Descending numeric; `N/A` entries sort after every number.
    Population,
    /// Lexicographic on the ISO3 code.
    Iso,
    /// Lexicographic on the capital name.
    Capital,
}

/// Case-insensitive substring match of the trimmed query against the
/// country name or ISO code. An empty query passes everything.
fn matches_query(country: &Country, query: &str) -> bool {
    country.name.to_lowercase().contains(query) || country.iso.to_lowercase().contains(query)
}

/// Case-insensitive lexicographic order with raw order as tie-break so the
/// result is deterministic for names differing only in case.
fn lexicographic(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Descending population order. `N/A` sorts after every numeric value; two
/// `N/A` entries compare equal so a stable sort keeps their input order.
pub fn population_desc(a: &Population, b: &Population) -> Ordering {
    match (a.as_count(), b.as_count()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Filter by `search` and sort by `sort`, returning a fresh list.
pub fn filter_and_sort(countries: &[Country], search: &str, sort: SortKey) -> Vec<Country> {
    let query = search.trim().to_lowercase();
    let mut out: Vec<Country> = countries
        .iter()
        .filter(|c| matches_query(c, &query))
        .cloned()
        .collect();
    out.sort_by(|a, b| match sort {
        SortKey::Name => lexicographic(&a.name, &b.name),
        SortKey::Population => population_desc(&a.population, &b.population),
        SortKey::Iso => lexicographic(&a.iso, &b.iso),
        SortKey::Capital => lexicographic(&a.capital, &b.capital),
    });
    out
}
