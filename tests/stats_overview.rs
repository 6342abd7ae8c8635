use cnow_rs::models::{Country, Population};
use cnow_rs::stats::{TOP_SLICES, population_overview, top_slices};

fn country(name: &str, population: Population) -> Country {
    Country {
        name: name.into(),
        iso: name.to_uppercase().chars().take(3).collect(),
        population,
        flag_url: String::new(),
        capital: "Unknown".into(),
    }
}

fn n_countries(n: usize) -> Vec<Country> {
    (0..n)
        .map(|i| {
            country(
                &format!("Country{:02}", i),
                Population::Count((n - i) as u64 * 1_000),
            )
        })
        .collect()
}

#[test]
fn empty_list_has_zero_total_and_non_finite_average() {
    let overview = population_overview(&[]);
    assert_eq!(overview.count, 0);
    assert_eq!(overview.total, 0);
    assert!(!overview.average.is_finite());
}

#[test]
fn totals_and_average() {
    let countries = vec![
        country("A", Population::Count(1_000)),
        country("B", Population::Count(3_000)),
    ];
    let overview = population_overview(&countries);
    assert_eq!(overview.count, 2);
    assert_eq!(overview.missing, 0);
    assert_eq!(overview.total, 4_000);
    assert!((overview.average - 2_000.0).abs() < 1e-9);
}

#[test]
fn missing_population_counts_as_zero_in_total() {
    // N/A contributes 0 to the sum but still counts toward the average's
    // denominator, so the total understates and the average dilutes.
    let countries = vec![
        country("A", Population::Count(3_000)),
        country("B", Population::Unknown),
        country("C", Population::Count(3_000)),
    ];
    let overview = population_overview(&countries);
    assert_eq!(overview.total, 6_000);
    assert_eq!(overview.missing, 1);
    assert!((overview.average - 2_000.0).abs() < 1e-9);
}

#[test]
fn pie_has_min_ten_plus_others_slices() {
    for n in [1usize, 5, 10, 11, 25] {
        let slices = top_slices(&n_countries(n));
        assert_eq!(slices.len(), n.min(TOP_SLICES) + 1, "n = {}", n);
        assert_eq!(slices.last().unwrap().name, "Others");
    }
}

#[test]
fn others_bucket_sums_the_remainder() {
    let slices = top_slices(&n_countries(12));
    // Populations are 12k..1k descending; ranks 11 and 12 hold 2k and 1k.
    assert_eq!(slices.last().unwrap().value, 3_000);
    // Named slices are the ten largest, in descending order.
    assert_eq!(slices[0].value, 12_000);
    assert_eq!(slices[9].value, 3_000);
}

#[test]
fn fewer_than_ten_countries_all_become_named_slices() {
    let slices = top_slices(&n_countries(4));
    assert_eq!(slices.len(), 5);
    assert_eq!(slices.last().unwrap().name, "Others");
    assert_eq!(slices.last().unwrap().value, 0);
}

#[test]
fn na_populations_land_in_others_at_zero() {
    let mut countries = n_countries(10);
    countries.push(country("Nowhere", Population::Unknown));
    let slices = top_slices(&countries);
    assert_eq!(slices.len(), 11);
    // The unknown entry ranks last, so it falls into Others contributing 0.
    assert_eq!(slices.last().unwrap().value, 0);
    assert!(slices.iter().all(|s| s.name != "Nowhere"));
}

#[test]
fn empty_list_still_yields_an_others_slice() {
    let slices = top_slices(&[]);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].name, "Others");
    assert_eq!(slices[0].value, 0);
}
