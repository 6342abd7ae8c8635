use crate::models::Country;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a country list as CSV with header. `N/A` populations serialize as
/// the literal `N/A`.
pub fn save_csv<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("name", "iso", "capital", "population", "flag_url"))?;
    for c in countries {
        wtr.serialize((&c.name, &c.iso, &c.capital, c.population, &c.flag_url))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a country list as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(countries: &[Country], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(countries)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Population;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let countries = vec![
            Country {
                name: "Germany".into(),
                iso: "DEU".into(),
                population: Population::Count(83_100_000),
                flag_url: "https://flagcdn.com/de.svg".into(),
                capital: "Berlin".into(),
            },
            Country {
                name: "Atlantis".into(),
                iso: "-".into(),
                population: Population::Unknown,
                flag_url: String::new(),
                capital: "Unknown".into(),
            },
        ];
        save_csv(&countries, &csvp).unwrap();
        save_json(&countries, &jsonp).unwrap();

        let csv_text = std::fs::read_to_string(&csvp).unwrap();
        assert!(csv_text.contains("Germany,DEU,Berlin,83100000"));
        assert!(csv_text.contains("Atlantis,-,Unknown,N/A,"));

        let json_text = std::fs::read_to_string(&jsonp).unwrap();
        assert!(json_text.contains("\"population\": 83100000"));
        assert!(json_text.contains("\"population\": \"N/A\""));
    }
}
