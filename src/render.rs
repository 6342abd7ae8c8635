//! Plain-text renderings of the three surfaces (card grid, table,
//! population overview) for the CLI. Each renderer is a pure function over
//! an already projected country list.

use crate::models::{Country, Population};
use crate::stats::Overview;
use num_format::{Locale, ToFormattedString};
use std::fmt::Write;

/// Thousands-separated population, or `N/A`.
pub fn format_population(population: &Population) -> String {
    match population.as_count() {
        Some(v) => v.to_formatted_string(&Locale::en),
        None => "N/A".into(),
    }
}

/// Thousands-separated float rounded to a whole number, or `N/A` when not
/// finite (the average of an empty list).
pub fn format_average(value: f64) -> String {
    if value.is_finite() {
        (value.round() as u64).to_formatted_string(&Locale::en)
    } else {
        "N/A".into()
    }
}

/// The "Found N countries" line shown above both interactive surfaces.
pub fn results_summary(count: usize, search: &str) -> String {
    let noun = if count == 1 { "country" } else { "countries" };
    let search = search.trim();
    if search.is_empty() {
        format!("Found {} {}", count, noun)
    } else {
        format!("Found {} {} matching \"{}\"", count, noun, search)
    }
}

/// Card blocks: name with ISO tag, capital, population, and the flag URL
/// when one matched.
pub fn card_grid(countries: &[Country]) -> String {
    let mut out = String::new();
    for c in countries {
        let _ = writeln!(out, "{} [{}]", c.name, c.iso);
        let _ = writeln!(out, "  Capital:    {}", c.capital);
        let _ = writeln!(out, "  Population: {}", format_population(&c.population));
        if !c.flag_url.is_empty() {
            let _ = writeln!(out, "  Flag:       {}", c.flag_url);
        }
        out.push('\n');
    }
    out
}

/// Aligned Country | ISO | Capital | Population table, population
/// right-aligned.
pub fn table(countries: &[Country]) -> String {
    if countries.is_empty() {
        return "No results found.\n".into();
    }

    let rows: Vec<(&str, &str, &str, String)> = countries
        .iter()
        .map(|c| {
            (
                c.name.as_str(),
                c.iso.as_str(),
                c.capital.as_str(),
                format_population(&c.population),
            )
        })
        .collect();

    let name_w = rows.iter().map(|r| r.0.chars().count()).max().unwrap_or(0).max("Country".len());
    let iso_w = rows.iter().map(|r| r.1.chars().count()).max().unwrap_or(0).max("ISO".len());
    let cap_w = rows.iter().map(|r| r.2.chars().count()).max().unwrap_or(0).max("Capital".len());
    let pop_w = rows.iter().map(|r| r.3.chars().count()).max().unwrap_or(0).max("Population".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_w$}  {:<iso_w$}  {:<cap_w$}  {:>pop_w$}",
        "Country", "ISO", "Capital", "Population"
    );
    let _ = writeln!(
        out,
        "{}  {}  {}  {}",
        "-".repeat(name_w),
        "-".repeat(iso_w),
        "-".repeat(cap_w),
        "-".repeat(pop_w)
    );
    for (name, iso, capital, population) in rows {
        let _ = writeln!(
            out,
            "{:<name_w$}  {:<iso_w$}  {:<cap_w$}  {:>pop_w$}",
            name, iso, capital, population
        );
    }
    out
}

/// The population overview block of the stats surface.
pub fn overview(stats: &Overview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Population Overview");
    let _ = writeln!(
        out,
        "  Total population:   {}",
        stats.total.to_formatted_string(&Locale::en)
    );
    let _ = writeln!(
        out,
        "  Average population: {}",
        format_average(stats.average)
    );
    if stats.missing > 0 {
        let _ = writeln!(
            out,
            "  Countries:          {} ({} without population data)",
            stats.count, stats.missing
        );
    } else {
        let _ = writeln!(out, "  Countries:          {}", stats.count);
    }
    out
}
