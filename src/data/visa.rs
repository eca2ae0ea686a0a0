//! Passport-to-destination visa requirement matrix.
//!
//! Input is a tidy CSV keyed by alpha-3 codes:
//!
//! ```text
//! Passport,Destination,Requirement
//! DEU,BRA,visa free
//! DEU,IND,e-visa
//! ```
//!
//! Requirement strings vary wildly between sources ("90", "visa on arrival",
//! "-1", ...) and are folded into a closed set of categories.

use super::DataError;
use std::collections::{BTreeSet, HashMap};

/// Normalized visa requirement for one passport/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisaCategory {
    Free,
    OnArrival,
    EVisa,
    Sticker,
    NoAdmission,
    NotApplicable,
    Other,
}

impl VisaCategory {
    pub fn label(&self) -> &'static str {
        match self {
            VisaCategory::Free => "Visa free",
            VisaCategory::OnArrival => "Visa on arrival",
            VisaCategory::EVisa => "eVisa / ETA",
            VisaCategory::Sticker => "Visa required",
            VisaCategory::NoAdmission => "No admission",
            VisaCategory::NotApplicable => "No data",
            VisaCategory::Other => "Other",
        }
    }

    pub fn all() -> &'static [VisaCategory] {
        &[
            VisaCategory::Free,
            VisaCategory::OnArrival,
            VisaCategory::EVisa,
            VisaCategory::Sticker,
            VisaCategory::NoAdmission,
            VisaCategory::Other,
            VisaCategory::NotApplicable,
        ]
    }
}

/// Folds a raw requirement string into a `VisaCategory`.
///
/// Case-insensitive after trimming. A bare day count (e.g. `"90"`) means
/// visa-free for that many days.
pub fn normalize_visa_requirement(raw: &str) -> VisaCategory {
    let value = raw.trim().to_lowercase();
    if value.is_empty() || value == "-1" {
        return VisaCategory::NotApplicable;
    }
    if value.chars().all(|c| c.is_ascii_digit()) {
        return VisaCategory::Free;
    }
    match value.as_str() {
        "visa free" | "freedom of movement" => VisaCategory::Free,
        "visa on arrival" => VisaCategory::OnArrival,
        "e-visa" | "evisa" | "eta" => VisaCategory::EVisa,
        "visa required" => VisaCategory::Sticker,
        "no admission" | "ban" => VisaCategory::NoAdmission,
        _ => VisaCategory::Other,
    }
}

/// Directed visa requirements keyed by alpha-3 codes.
#[derive(Debug, Clone, Default)]
pub struct VisaMatrix {
    by_passport: HashMap<String, HashMap<String, VisaCategory>>,
}

impl VisaMatrix {
    /// Parses the tidy CSV. Rows missing either code are skipped.
    pub fn from_csv(bytes: &[u8]) -> Result<Self, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);
        reader.headers()?;

        let mut matrix = Self::default();
        let mut skipped = 0usize;

        for (line, result) in reader.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("Skipping visa row {}: {}", line + 2, e);
                    skipped += 1;
                    continue;
                }
            };

            let passport = record.get(0).unwrap_or("");
            let destination = record.get(1).unwrap_or("");
            if passport.is_empty() || destination.is_empty() {
                skipped += 1;
                continue;
            }

            matrix.insert(
                passport,
                destination,
                normalize_visa_requirement(record.get(2).unwrap_or("")),
            );
        }

        if skipped > 0 {
            log::warn!("Skipped {} incomplete visa rows", skipped);
        }

        Ok(matrix)
    }

    pub fn insert(&mut self, passport: &str, destination: &str, category: VisaCategory) {
        self.by_passport
            .entry(passport.to_ascii_uppercase())
            .or_default()
            .insert(destination.to_ascii_uppercase(), category);
    }

    /// Requirement for holders of `passport` entering `destination`.
    pub fn requirement(&self, passport: &str, destination: &str) -> Option<VisaCategory> {
        self.by_passport
            .get(passport)
            .and_then(|row| row.get(destination))
            .copied()
    }

    /// Alpha-3 codes of every passport with at least one row, sorted.
    pub fn passports(&self) -> BTreeSet<&str> {
        self.by_passport.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.by_passport.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_passport.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_visa_requirement() {
        assert_eq!(normalize_visa_requirement(""), VisaCategory::NotApplicable);
        assert_eq!(normalize_visa_requirement(" -1 "), VisaCategory::NotApplicable);
        assert_eq!(normalize_visa_requirement("90"), VisaCategory::Free);
        assert_eq!(normalize_visa_requirement("Visa Free"), VisaCategory::Free);
        assert_eq!(normalize_visa_requirement("freedom of movement"), VisaCategory::Free);
        assert_eq!(normalize_visa_requirement("visa on arrival"), VisaCategory::OnArrival);
        assert_eq!(normalize_visa_requirement("ETA"), VisaCategory::EVisa);
        assert_eq!(normalize_visa_requirement("e-visa"), VisaCategory::EVisa);
        assert_eq!(normalize_visa_requirement("eVisa"), VisaCategory::EVisa);
        assert_eq!(normalize_visa_requirement("visa required"), VisaCategory::Sticker);
        assert_eq!(normalize_visa_requirement("No Admission"), VisaCategory::NoAdmission);
        assert_eq!(normalize_visa_requirement("ban"), VisaCategory::NoAdmission);
        assert_eq!(normalize_visa_requirement("covid ban"), VisaCategory::Other);
        assert_eq!(normalize_visa_requirement("9O"), VisaCategory::Other);
    }

    #[test]
    fn test_from_csv() {
        let csv = "Passport,Destination,Requirement\n\
                   DEU,BRA,90\n\
                   DEU,IND,e-visa\n\
                   deu,usa,eta\n\
                   DEU,\n\
                   FRA,DEU\n\
                   \n";
        let matrix = VisaMatrix::from_csv(csv.as_bytes()).unwrap();

        assert_eq!(matrix.requirement("DEU", "BRA"), Some(VisaCategory::Free));
        assert_eq!(matrix.requirement("DEU", "IND"), Some(VisaCategory::EVisa));
        assert_eq!(matrix.requirement("DEU", "USA"), Some(VisaCategory::EVisa));
        assert_eq!(matrix.requirement("FRA", "DEU"), Some(VisaCategory::NotApplicable));
        assert_eq!(matrix.requirement("BRA", "DEU"), None);
        assert_eq!(matrix.len(), 4);

        let passports: Vec<_> = matrix.passports().into_iter().collect();
        assert_eq!(passports, vec!["DEU", "FRA"]);
    }

    #[test]
    fn test_empty_csv() {
        let matrix = VisaMatrix::from_csv(b"Passport,Destination,Requirement\n").unwrap();
        assert!(matrix.is_empty());
    }
}
