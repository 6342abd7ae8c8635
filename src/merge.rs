//! Trim the raw population series and join the three feeds into one
//! normalized record per country.

use crate::models::{CapitalRecord, Country, FlagRecord, Population, PopulationRecord};
use std::collections::HashMap;

/// First real country in the upstream population series. The API prepends a
/// handful of aggregate rows (regions, income groups) before the country
/// list proper; this entry marks where it starts.
pub const ANCHOR_COUNTRY: &str = "Afghanistan";

/// Drop every record preceding the anchor entry.
///
/// Returns the subsequence from the first record whose `country` equals
/// [`ANCHOR_COUNTRY`] (exact match) to the end, or an empty slice when the
/// anchor is absent. Absence degrades to "no data" rather than an error.
pub fn trim_leading_aggregates(records: &[PopulationRecord]) -> &[PopulationRecord] {
    match records.iter().position(|r| r.country == ANCHOR_COUNTRY) {
        Some(start) => &records[start..],
        None => &[],
    }
}

/// Join the (already trimmed) population series with the flag and capital
/// feeds by exact country name.
///
/// Emits one [`Country`] per population record, in input order. Unmatched
/// lookups degrade to documented fallbacks instead of dropping the record:
/// empty flag URL, `"Unknown"` capital, `"-"` ISO code, and `N/A` population
/// when the year series is empty. When a name appears more than once in the
/// flag or capital feed, the first occurrence wins.
pub fn merge(
    population: &[PopulationRecord],
    flags: &[FlagRecord],
    capitals: &[CapitalRecord],
) -> Vec<Country> {
    let mut flag_by_name: HashMap<&str, &str> = HashMap::new();
    for f in flags {
        flag_by_name.entry(f.name.as_str()).or_insert(f.flag.as_str());
    }
    let mut capital_by_name: HashMap<&str, &str> = HashMap::new();
    for c in capitals {
        capital_by_name
            .entry(c.name.as_str())
            .or_insert(c.capital.as_str());
    }

    population
        .iter()
        .map(|record| {
            let population = match record.population_counts.last() {
                Some(count) => Population::Count(count.value),
                None => Population::Unknown,
            };
            Country {
                name: record.country.clone(),
                iso: record.iso3.clone().unwrap_or_else(|| "-".into()),
                population,
                flag_url: flag_by_name
                    .get(record.country.as_str())
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                capital: capital_by_name
                    .get(record.country.as_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "Unknown".into()),
            }
        })
        .collect()
}
