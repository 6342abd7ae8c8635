use cnow_rs::models::{Country, Population};
use cnow_rs::query::{SortKey, filter_and_sort};

fn country(name: &str, iso: &str, population: Population, capital: &str) -> Country {
    Country {
        name: name.into(),
        iso: iso.into(),
        population,
        flag_url: String::new(),
        capital: capital.into(),
    }
}

fn sample() -> Vec<Country> {
    vec![
        country("France", "FRA", Population::Count(67_391_582), "Paris"),
        country("Germany", "DEU", Population::Count(83_240_525), "Berlin"),
        country("Kosovo", "-", Population::Unknown, "Pristina"),
        country("Albania", "ALB", Population::Count(2_837_743), "Tirana"),
    ]
}

#[test]
fn empty_query_passes_everything() {
    let out = filter_and_sort(&sample(), "", SortKey::Name);
    assert_eq!(out.len(), 4);
}

#[test]
fn filter_matches_name_and_iso_case_insensitively() {
    // "fr" hits France both by name and by ISO "FRA"
    let out = filter_and_sort(&sample(), "fr", SortKey::Name);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "France");

    // ISO-only hit
    let out = filter_and_sort(&sample(), "deu", SortKey::Name);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Germany");

    // Uppercase query
    let out = filter_and_sort(&sample(), "ALBA", SortKey::Name);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "Albania");
}

#[test]
fn query_is_trimmed_before_matching() {
    let out = filter_and_sort(&sample(), "  fr  ", SortKey::Name);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "France");
}

#[test]
fn name_sort_is_alphabetical() {
    let out = filter_and_sort(&sample(), "", SortKey::Name);
    let names: Vec<&str> = out.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Albania", "France", "Germany", "Kosovo"]);
}

#[test]
fn population_sort_is_descending_with_na_last() {
    let out = filter_and_sort(&sample(), "", SortKey::Population);
    let names: Vec<&str> = out.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Germany", "France", "Albania", "Kosovo"]);
}

#[test]
fn na_sorts_last_regardless_of_input_order() {
    let mut countries = sample();
    countries.reverse(); // Kosovo now leads
    let out = filter_and_sort(&countries, "", SortKey::Population);
    assert_eq!(out.last().unwrap().name, "Kosovo");
}

#[test]
fn equal_na_entries_keep_input_order() {
    let countries = vec![
        country("B-land", "BBB", Population::Unknown, ""),
        country("A-land", "AAA", Population::Count(10), ""),
        country("C-land", "CCC", Population::Unknown, ""),
    ];
    let out = filter_and_sort(&countries, "", SortKey::Population);
    let names: Vec<&str> = out.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A-land", "B-land", "C-land"]);
}

#[test]
fn sorting_is_idempotent() {
    for sort in [SortKey::Name, SortKey::Population, SortKey::Iso, SortKey::Capital] {
        let once = filter_and_sort(&sample(), "", sort);
        let twice = filter_and_sort(&once, "", sort);
        assert_eq!(once, twice);
    }
}

#[test]
fn iso_sort_orders_by_code() {
    let out = filter_and_sort(&sample(), "", SortKey::Iso);
    let isos: Vec<&str> = out.iter().map(|c| c.iso.as_str()).collect();
    assert_eq!(isos, ["-", "ALB", "DEU", "FRA"]);
}

#[test]
fn capital_sort_treats_empty_as_lowest() {
    let countries = vec![
        country("B-land", "BBB", Population::Count(1), "Bville"),
        country("A-land", "AAA", Population::Count(1), ""),
    ];
    let out = filter_and_sort(&countries, "", SortKey::Capital);
    assert_eq!(out[0].name, "A-land");
    assert_eq!(out[1].name, "B-land");
}

#[test]
fn projection_does_not_mutate_input() {
    let countries = sample();
    let before = countries.clone();
    let _ = filter_and_sort(&countries, "fr", SortKey::Population);
    assert_eq!(countries, before);
}
