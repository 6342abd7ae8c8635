use crate::models::Country;
use crate::query::population_desc;
use serde::{Deserialize, Serialize};

/// Number of individually named slices in the pie breakdown; everything
/// beyond rank 10 is folded into a single "Others" slice.
pub const TOP_SLICES: usize = 10;

/// Aggregate population figures for one country list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Overview {
    pub count: usize,
    /// Countries whose population is `N/A`. These contribute zero to
    /// `total`, so the total understates reality by however much data is
    /// missing upstream.
    pub missing: usize,
    pub total: u64,
    /// `total / count`. NaN when the list is empty; callers render that as
    /// a missing value rather than treating it as an error.
    pub average: f64,
}

/// One slice of the population pie: a country name (or "Others") and its
/// population share.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieSlice {
    pub name: String,
    pub value: u64,
}

/// Compute total and average population over a country list.
pub fn population_overview(countries: &[Country]) -> Overview {
    let total: u64 = countries.iter().map(|c| c.population.or_zero()).sum();
    let missing = countries
        .iter()
        .filter(|c| c.population.is_unknown())
        .count();
    Overview {
        count: countries.len(),
        missing,
        total,
        average: total as f64 / countries.len() as f64,
    }
}

/// The top ten countries by population as named slices, plus one final
/// "Others" slice summing the remainder.
///
/// The ordering comparator matches the views' population sort, so `N/A`
/// entries land in the "Others" bucket (at value zero) unless fewer than
/// ten countries exist overall. The "Others" slice is always present, even
/// when it sums to zero.
pub fn top_slices(countries: &[Country]) -> Vec<PieSlice> {
    let mut ranked: Vec<&Country> = countries.iter().collect();
    ranked.sort_by(|a, b| population_desc(&a.population, &b.population));

    let named = ranked.len().min(TOP_SLICES);
    let mut slices: Vec<PieSlice> = ranked[..named]
        .iter()
        .map(|c| PieSlice {
            name: c.name.clone(),
            value: c.population.or_zero(),
        })
        .collect();
    let others: u64 = ranked[named..].iter().map(|c| c.population.or_zero()).sum();
    slices.push(PieSlice {
        name: "Others".into(),
        value: others,
    });
    slices
}
