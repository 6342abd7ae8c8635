use serde::{Deserialize, Serialize};

/// Response wrapper used by every countriesnow.space endpoint.
///
/// The payload of interest lives in `data`; `error`/`msg` carry API-level
/// failure reports that arrive with HTTP 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub error: bool,
    #[serde(default)]
    pub msg: String,
    pub data: T,
}

/// Raw entry from `/countries/population`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationRecord {
    pub country: String,
    /// Absent for some aggregate rows the API prepends to the series.
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default, rename = "populationCounts")]
    pub population_counts: Vec<PopulationCount>,
}

/// One year/value pair inside a population series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PopulationCount {
    pub year: i32,
    /// Some responses encode counts as strings, others as numbers.
    /// Accept both and normalize to `u64`.
    #[serde(deserialize_with = "de_u64_from_string_or_number")]
    pub value: u64,
}

/// Serde helper: parse `u64` from either a JSON number or a string.
fn de_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U64Visitor;

    impl<'de> Visitor<'de> for U64Visitor {
        type Value = u64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer representing a non-negative number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom("negative value for u64"));
            }
            Ok(v as u64)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.parse::<u64>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U64Visitor)
}

/// Raw entry from `/countries/flag/images`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagRecord {
    pub name: String,
    /// Image URL.
    #[serde(default)]
    pub flag: String,
}

/// Raw entry from `/countries/capital`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalRecord {
    pub name: String,
    #[serde(default)]
    pub capital: String,
}

/// A country's most recent population count, or the `N/A` placeholder when
/// the source series is empty.
///
/// Serializes as a plain JSON number, or the literal string `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    Count(u64),
    Unknown,
}

impl Population {
    pub fn as_count(&self) -> Option<u64> {
        match *self {
            Population::Count(v) => Some(v),
            Population::Unknown => None,
        }
    }

    /// The value used in arithmetic contexts. `Unknown` counts as zero,
    /// which understates sums over partially missing data.
    pub fn or_zero(&self) -> u64 {
        self.as_count().unwrap_or(0)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Population::Unknown)
    }
}

impl std::fmt::Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Population::Count(v) => write!(f, "{}", v),
            Population::Unknown => write!(f, "N/A"),
        }
    }
}

impl Serialize for Population {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {
            Population::Count(v) => serializer.serialize_u64(v),
            Population::Unknown => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for Population {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        struct PopulationVisitor;

        impl<'de> Visitor<'de> for PopulationVisitor {
            type Value = Population;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a non-negative number or the string \"N/A\"")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Population::Count(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v < 0 {
                    return Err(E::custom("negative population count"));
                }
                Ok(Population::Count(v as u64))
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if s == "N/A" {
                    Ok(Population::Unknown)
                } else {
                    s.parse::<u64>().map(Population::Count).map_err(E::custom)
                }
            }
        }

        deserializer.deserialize_any(PopulationVisitor)
    }
}

/// Merged per-country record consumed by every view (one row = one country
/// surviving the series trim).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub name: String,
    /// ISO3 code, or `"-"` when the source omits it.
    pub iso: String,
    pub population: Population,
    /// Flag image URL, empty when no flag entry matched.
    pub flag_url: String,
    /// Capital city, `"Unknown"` when no capital entry matched.
    pub capital: String,
}
