//! Curated per-country tourism records.
//!
//! The countries dataset is a JSON array where each entry carries a
//! two-letter code, a centroid, alternate identifiers, a month-keyed
//! climate table, and optional regional breakdowns. Parsing is lenient:
//! a malformed entry is skipped with a warning instead of failing the
//! whole dataset.

use super::identifiers::RawId;
use super::DataError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Canonical two-letter country key shared by every dataset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parses an alpha-2 code, normalizing to uppercase.
    ///
    /// Returns `None` unless the input is exactly two ASCII letters.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(Self(code.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar month used to key climate records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Month {
    #[default]
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Parses an English month name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Month> {
        let name = name.trim();
        Month::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

/// Tri-state "best time to visit" verdict for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BestTime {
    Best,
    Okay,
    Avoid,
}

impl BestTime {
    pub fn parse(value: &str) -> Option<BestTime> {
        match value.trim().to_ascii_lowercase().as_str() {
            "best" => Some(BestTime::Best),
            "okay" => Some(BestTime::Okay),
            "avoid" => Some(BestTime::Avoid),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BestTime::Best => "Best time to visit",
            BestTime::Okay => "Okay time to visit",
            BestTime::Avoid => "Better to avoid",
        }
    }
}

/// Climate summary for one country in one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthRecord {
    /// Average daytime temperature in °C.
    pub day_temp_c: f32,
    /// Average night temperature in °C.
    pub night_temp_c: f32,
    /// Total rainfall in mm, never negative.
    pub rainfall_mm: f32,
    pub description: Option<String>,
    /// Absent in older datasets.
    pub best_time: Option<BestTime>,
}

/// Named sub-region used to enrich the tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalRecord {
    pub name: String,
    pub description: String,
    pub months: BTreeMap<Month, MonthRecord>,
}

/// A curated country with its climate table.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalCountry {
    pub code: CountryCode,
    pub name: String,
    /// Centroid as `[lat, lng]`.
    pub centroid: Option<[f64; 2]>,
    pub alpha3: Option<String>,
    pub numeric: Option<RawId>,
    pub common_names: Vec<String>,
    pub months: BTreeMap<Month, MonthRecord>,
    pub regions: Vec<RegionalRecord>,
}

impl CanonicalCountry {
    pub fn month(&self, month: Month) -> Option<&MonthRecord> {
        self.months.get(&month)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMonth {
    avg_day_temp: f32,
    avg_night_temp: f32,
    rainfall: f32,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    best_time: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawAlternativeCodes {
    #[serde(default)]
    alpha3: Option<String>,
    #[serde(default)]
    numeric: Option<RawId>,
    #[serde(default)]
    common_names: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegion {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    monthly_data: BTreeMap<String, RawMonth>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCountry {
    name: String,
    code: String,
    #[serde(default)]
    coordinates: Option<[f64; 2]>,
    #[serde(default)]
    alternative_codes: RawAlternativeCodes,
    #[serde(default)]
    monthly_data: BTreeMap<String, RawMonth>,
    #[serde(default)]
    regions: Vec<RawRegion>,
}

/// Parses the countries dataset.
///
/// Only a non-array document is an error. Entries with an invalid code,
/// duplicate codes, and unknown month keys are dropped with a warning.
pub fn parse_countries(bytes: &[u8]) -> Result<Vec<CanonicalCountry>, DataError> {
    let entries: Vec<serde_json::Value> = serde_json::from_slice(bytes)?;
    let mut seen = HashSet::new();
    let mut countries = Vec::with_capacity(entries.len());

    for (idx, entry) in entries.into_iter().enumerate() {
        let raw: RawCountry = match serde_json::from_value(entry) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Skipping country entry {}: {}", idx, e);
                continue;
            }
        };

        let Some(code) = CountryCode::parse(&raw.code) else {
            log::warn!("Skipping country {:?}: invalid code {:?}", raw.name, raw.code);
            continue;
        };

        if !seen.insert(code.clone()) {
            log::warn!("Skipping duplicate country code {}", code);
            continue;
        }

        let regions = raw
            .regions
            .into_iter()
            .map(|region| RegionalRecord {
                months: convert_months(&region.name, region.monthly_data),
                name: region.name,
                description: region.description,
            })
            .collect();

        countries.push(CanonicalCountry {
            months: convert_months(code.as_str(), raw.monthly_data),
            code,
            name: raw.name.trim().to_string(),
            centroid: raw.coordinates,
            alpha3: raw
                .alternative_codes
                .alpha3
                .map(|a| a.trim().to_ascii_uppercase())
                .filter(|a| !a.is_empty()),
            numeric: raw.alternative_codes.numeric,
            common_names: raw.alternative_codes.common_names,
            regions,
        });
    }

    Ok(countries)
}

fn convert_months(owner: &str, raw: BTreeMap<String, RawMonth>) -> BTreeMap<Month, MonthRecord> {
    let mut months = BTreeMap::new();
    for (key, value) in raw {
        let Some(month) = Month::from_name(&key) else {
            log::warn!("{}: ignoring unknown month key {:?}", owner, key);
            continue;
        };

        let best_time = value.best_time.as_deref().and_then(|b| {
            let parsed = BestTime::parse(b);
            if parsed.is_none() {
                log::warn!("{}: unknown bestTime {:?} for {}", owner, b, key);
            }
            parsed
        });

        months.insert(
            month,
            MonthRecord {
                day_temp_c: value.avg_day_temp,
                night_temp_c: value.avg_night_temp,
                rainfall_mm: value.rainfall.max(0.0),
                description: value.description,
                best_time,
            },
        );
    }
    months
}
