//! Country identifier resolution.
//!
//! The three datasets name countries differently: boundaries carry numeric
//! or alpha-3 ids (sometimes only a name), the visa matrix uses alpha-3,
//! and curated records use alpha-2. `IdentifierIndex` folds all of them
//! onto the canonical alpha-2 `CountryCode`.

use super::countries::{CanonicalCountry, CountryCode};
use super::iso::{ISO_COUNTRIES, NAME_ALIASES};
use crate::geo::BoundaryFeature;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// A raw identifier as found in an input dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawId::Number(n) => write!(f, "{}", n),
            RawId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for RawId {
    fn from(s: &str) -> Self {
        RawId::Text(s.to_string())
    }
}

impl From<String> for RawId {
    fn from(s: String) -> Self {
        RawId::Text(s)
    }
}

impl From<i64> for RawId {
    fn from(n: i64) -> Self {
        RawId::Number(n)
    }
}

/// Lookup tables from every known identifier form to the canonical code.
///
/// Built once per data load from the ISO table overlaid with the curated
/// country list, then read-only.
#[derive(Debug, Clone, Default)]
pub struct IdentifierIndex {
    by_alpha2: HashMap<String, CountryCode>,
    by_alpha3: HashMap<String, CountryCode>,
    by_numeric: HashMap<u16, CountryCode>,
    by_name: HashMap<String, CountryCode>,
    alpha3_of: HashMap<CountryCode, String>,
    name_of: HashMap<CountryCode, String>,
}

impl IdentifierIndex {
    /// Builds the index from the ISO table plus curated countries.
    ///
    /// Curated entries are applied last so their names and alternate codes
    /// take precedence.
    pub fn new(countries: &[CanonicalCountry]) -> Self {
        let mut index = Self::default();

        for entry in ISO_COUNTRIES {
            let Some(code) = CountryCode::parse(entry.alpha2) else {
                continue;
            };
            index.insert_alpha3(&code, entry.alpha3);
            index.by_numeric.insert(entry.numeric, code.clone());
            index.insert_name(&code, entry.name);
            index.name_of.insert(code.clone(), entry.name.to_string());
            index.by_alpha2.insert(code.as_str().to_string(), code);
        }

        for (alias, alpha2) in NAME_ALIASES {
            if let Some(code) = CountryCode::parse(alpha2) {
                index.insert_name(&code, alias);
            }
        }

        for country in countries {
            let code = &country.code;
            index
                .by_alpha2
                .insert(code.as_str().to_string(), code.clone());
            if let Some(alpha3) = &country.alpha3 {
                index.insert_alpha3(code, alpha3);
            }
            if let Some(numeric) = country.numeric.as_ref().and_then(numeric_value) {
                index.by_numeric.insert(numeric, code.clone());
            }
            index.insert_name(code, &country.name);
            for alias in &country.common_names {
                index.insert_name(code, alias);
            }
            if !country.name.is_empty() {
                index.name_of.insert(code.clone(), country.name.clone());
            }
        }

        log::debug!(
            "Identifier index: {} codes, {} names",
            index.by_alpha2.len(),
            index.by_name.len()
        );

        index
    }

    fn insert_alpha3(&mut self, code: &CountryCode, alpha3: &str) {
        let alpha3 = alpha3.trim().to_ascii_uppercase();
        if alpha3.is_empty() {
            return;
        }
        self.by_alpha3.insert(alpha3.clone(), code.clone());
        self.alpha3_of.insert(code.clone(), alpha3);
    }

    fn insert_name(&mut self, code: &CountryCode, name: &str) {
        let key = name_key(name);
        if !key.is_empty() {
            self.by_name.insert(key, code.clone());
        }
    }

    /// Resolves a raw identifier to its canonical code.
    ///
    /// Tries alpha-2, alpha-3, numeric (raw or zero-padded), then an exact
    /// case-insensitive name. Anything else, including empty input and the
    /// `-99` placeholder, yields `None`.
    pub fn resolve(&self, raw: &RawId) -> Option<CountryCode> {
        match raw {
            RawId::Number(n) => u16::try_from(*n)
                .ok()
                .and_then(|n| self.by_numeric.get(&n))
                .cloned(),
            RawId::Text(text) => self.resolve_str(text),
        }
    }

    pub fn resolve_str(&self, text: &str) -> Option<CountryCode> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let upper = text.to_ascii_uppercase();
        if let Some(code) = self.by_alpha2.get(&upper) {
            return Some(code.clone());
        }
        if let Some(code) = self.by_alpha3.get(&upper) {
            return Some(code.clone());
        }
        if let Some(code) = parse_numeric(text).and_then(|n| self.by_numeric.get(&n)) {
            return Some(code.clone());
        }
        self.by_name.get(&name_key(text)).cloned()
    }

    /// Resolves the first candidate that maps to a known country.
    pub fn resolve_first<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a RawId>,
    ) -> Option<CountryCode> {
        candidates.into_iter().find_map(|raw| self.resolve(raw))
    }

    /// Resolves a boundary feature through its identifier candidates.
    pub fn resolve_feature(&self, feature: &BoundaryFeature) -> Option<CountryCode> {
        self.resolve_first(&feature.ids)
    }

    /// Alpha-3 form of a canonical code, used to key the visa matrix.
    pub fn alpha3(&self, code: &CountryCode) -> Option<&str> {
        self.alpha3_of.get(code).map(String::as_str)
    }

    /// Preferred display name for a canonical code.
    pub fn display_name(&self, code: &CountryCode) -> Option<&str> {
        self.name_of.get(code).map(String::as_str)
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Parses an all-digit identifier such as `"076"` or `"76"`.
fn parse_numeric(text: &str) -> Option<u16> {
    if !text.is_empty() && text.len() <= 3 && text.chars().all(|c| c.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

fn numeric_value(raw: &RawId) -> Option<u16> {
    match raw {
        RawId::Number(n) => u16::try_from(*n).ok(),
        RawId::Text(text) => parse_numeric(text.trim()),
    }
}
