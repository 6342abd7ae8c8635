//! cnow-rs
//!
//! A lightweight Rust library for retrieving, merging, visualizing, and
//! analyzing country population, capital, and flag data from the
//! countriesnow.space API. Pairs with the `cnow` CLI and `cnow-gui` viewer.
//!
//! ### Features
//! - Fetch the population, flag, and capital feeds concurrently and merge
//!   them into one normalized record per country
//! - Search and sort the merged list the way the card-grid and table views do
//! - Quick population figures (total, average, top-10-plus-Others breakdown)
//! - Generate an SVG/PNG pie chart of the breakdown
//! - Save the merged list as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use cnow_rs::{Client, SortKey, query, stats, storage, viz};
//!
//! let client = Client::default();
//! let countries = client.fetch_countries()?;
//! let visible = query::filter_and_sort(&countries, "fr", SortKey::Population);
//! storage::save_csv(&visible, "countries.csv")?;
//! let slices = stats::top_slices(&countries);
//! viz::plot_population_pie(&slices, "population.svg", 1000, 700, "Top 10 Countries by Population")?;
//! println!("{:#?}", stats::population_overview(&countries));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod merge;
pub mod models;
pub mod query;
pub mod render;
pub mod stats;
pub mod storage;
pub mod viz;

pub use api::Client;
pub use models::{Country, Population};
pub use query::SortKey;
