//! Synchronous client for the **countriesnow.space API (v0.1)**.
//!
//! This module covers the three country endpoints the tool consumes
//! (`/countries/population`, `/countries/flag/images`, `/countries/capital`)
//! and returns their payloads as `models` rows.
//!
//! ### Notes
//! - Every endpoint wraps its payload in `{ error, msg, data }`; an
//!   `error: true` body arrives with HTTP 200 and is surfaced as an error
//!   carrying the API's `msg`.
//! - Each request is attempted exactly once. A failed fetch fails the whole
//!   operation; callers degrade to an empty country list rather than retry.
//! - Network timeouts use a sane default (30s) and can be adjusted by editing
//!   the client builder.
//!
//! Typical usage:
//! ```no_run
//! # use cnow_rs::Client;
//! let client = Client::default();
//! let countries = client.fetch_countries()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::merge;
use crate::models::{CapitalRecord, Country, Envelope, FlagRecord, PopulationRecord};
use anyhow::{Context, Result, anyhow, bail};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("cnow_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://countriesnow.space/api/v0.1".into(),
            http,
        }
    }
}

impl Client {
    /// GET one endpoint and unwrap its `{ error, msg, data }` envelope.
    fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        let resp = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("GET {}", url))?;
        if !resp.status().is_success() {
            bail!("request failed with HTTP {}", resp.status());
        }
        let envelope: Envelope<T> = resp.json().context("decode json")?;
        if envelope.error {
            bail!("countriesnow api error: {}", envelope.msg);
        }
        Ok(envelope.data)
    }

    /// Fetch the per-country population series.
    pub fn population(&self) -> Result<Vec<PopulationRecord>> {
        self.get_data("countries/population")
    }

    /// Fetch the flag image URLs.
    pub fn flags(&self) -> Result<Vec<FlagRecord>> {
        self.get_data("countries/flag/images")
    }

    /// Fetch the capital cities.
    pub fn capitals(&self) -> Result<Vec<CapitalRecord>> {
        self.get_data("countries/capital")
    }

    /// Fetch all three feeds concurrently.
    ///
    /// The three GETs run on scoped threads and are joined before returning;
    /// any single failure aborts the whole fetch.
    pub fn fetch_all(
        &self,
    ) -> Result<(Vec<PopulationRecord>, Vec<FlagRecord>, Vec<CapitalRecord>)> {
        thread::scope(|s| {
            let population = s.spawn(|| self.population());
            let flags = s.spawn(|| self.flags());
            let capitals = s.spawn(|| self.capitals());

            let population = population
                .join()
                .map_err(|_| anyhow!("population fetch thread panicked"))??;
            let flags = flags
                .join()
                .map_err(|_| anyhow!("flag fetch thread panicked"))??;
            let capitals = capitals
                .join()
                .map_err(|_| anyhow!("capital fetch thread panicked"))??;

            Ok((population, flags, capitals))
        })
    }

    /// Fetch, trim, and merge into the normalized country list.
    ///
    /// This is the one-shot operation every view runs once per mount.
    pub fn fetch_countries(&self) -> Result<Vec<Country>> {
        let (population, flags, capitals) = self.fetch_all()?;
        let population = merge::trim_leading_aggregates(&population);
        Ok(merge::merge(population, &flags, &capitals))
    }
}
