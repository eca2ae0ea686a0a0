//! Owned holder of the loaded datasets.
//!
//! The store is passed by reference to everything that reads country data.
//! `generation` changes on every install or invalidate so derived caches
//! (the projected boundary layer, marker list) know when to rebuild.

use super::countries::{CanonicalCountry, CountryCode};
use super::identifiers::IdentifierIndex;
use super::visa::VisaMatrix;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct DataStore {
    countries: Vec<CanonicalCountry>,
    by_code: HashMap<CountryCode, usize>,
    visa: VisaMatrix,
    index: IdentifierIndex,
    generation: u64,
    loaded: bool,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all datasets and rebuilds the identifier index.
    pub fn install(&mut self, countries: Vec<CanonicalCountry>, visa: VisaMatrix) {
        self.index = IdentifierIndex::new(&countries);
        self.by_code = countries
            .iter()
            .enumerate()
            .map(|(i, c)| (c.code.clone(), i))
            .collect();
        self.countries = countries;
        self.visa = visa;
        self.generation += 1;
        self.loaded = true;

        log::info!(
            "Installed {} countries and {} visa rows (generation {})",
            self.countries.len(),
            self.visa.len(),
            self.generation
        );
    }

    /// Drops all loaded data ahead of a reload.
    pub fn invalidate(&mut self) {
        self.countries.clear();
        self.by_code.clear();
        self.visa = VisaMatrix::default();
        self.index = IdentifierIndex::default();
        self.generation += 1;
        self.loaded = false;
        log::debug!("Data store invalidated (generation {})", self.generation);
    }

    pub fn country(&self, code: &CountryCode) -> Option<&CanonicalCountry> {
        self.by_code.get(code).map(|&i| &self.countries[i])
    }

    pub fn countries(&self) -> &[CanonicalCountry] {
        &self.countries
    }

    pub fn visa(&self) -> &VisaMatrix {
        &self.visa
    }

    pub fn index(&self) -> &IdentifierIndex {
        &self.index
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Display name for a code, preferring the curated record.
    pub fn display_name(&self, code: &CountryCode) -> String {
        self.country(code)
            .map(|c| c.name.clone())
            .or_else(|| self.index.display_name(code).map(str::to_string))
            .unwrap_or_else(|| code.to_string())
    }

    /// Passports present in the visa matrix, resolved and sorted by name.
    pub fn passports(&self) -> Vec<(CountryCode, String)> {
        let mut passports: Vec<(CountryCode, String)> = self
            .visa
            .passports()
            .into_iter()
            .filter_map(|alpha3| self.index.resolve_str(alpha3))
            .map(|code| {
                let name = self.display_name(&code);
                (code, name)
            })
            .collect();
        passports.sort_by(|a, b| a.1.cmp(&b.1));
        passports.dedup_by(|a, b| a.0 == b.0);
        passports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{parse_countries, VisaCategory};

    fn sample_store() -> DataStore {
        let countries = parse_countries(
            br#"[
                {"name": "Brazil", "code": "BR", "coordinates": [-14.2, -51.9]},
                {"name": "Japan", "code": "JP", "coordinates": [36.2, 138.2]}
            ]"#,
        )
        .unwrap();
        let mut visa = VisaMatrix::default();
        visa.insert("JPN", "BRA", VisaCategory::Free);
        visa.insert("DEU", "BRA", VisaCategory::Free);
        visa.insert("XXX", "BRA", VisaCategory::Other);

        let mut store = DataStore::new();
        store.install(countries, visa);
        store
    }

    #[test]
    fn test_install_indexes_countries() {
        let store = sample_store();
        assert!(store.is_loaded());
        assert_eq!(store.generation(), 1);
        let br = CountryCode::parse("BR").unwrap();
        assert_eq!(store.country(&br).unwrap().name, "Brazil");
        assert_eq!(store.index().resolve(&"76".into()), Some(br));
    }

    #[test]
    fn test_invalidate_clears_and_bumps_generation() {
        let mut store = sample_store();
        store.invalidate();
        assert!(!store.is_loaded());
        assert_eq!(store.generation(), 2);
        assert!(store.countries().is_empty());
        assert!(store.visa().is_empty());
        assert!(store.index().resolve(&"BRA".into()).is_none());
    }

    #[test]
    fn test_passports_sorted_by_name() {
        let store = sample_store();
        let names: Vec<String> = store.passports().into_iter().map(|(_, n)| n).collect();
        // Germany comes from the ISO table, Japan from the curated record.
        assert_eq!(names, vec!["Germany".to_string(), "Japan".to_string()]);
    }
}
