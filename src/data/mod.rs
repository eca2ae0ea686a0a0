//! Country datasets and the identifier join between them.
//!
//! ## Datasets
//! - `countries`: curated per-country tourism records (monthly weather,
//!   best time to visit, regions)
//! - `visa`: directed passport → destination requirements, keyed by alpha-3
//! - boundaries: world outlines, parsed in `crate::geo`
//!
//! ## Identifier join
//! The three datasets name countries differently. `IdentifierIndex` maps
//! every alpha-2, alpha-3, numeric code and known name to one canonical
//! alpha-2 `CountryCode`, seeded from the static ISO 3166 table in `iso`.
//!
//! ## Ownership
//! `DataStore` owns the loaded datasets and is reloadable; `loader` reads
//! and parses them off the UI thread.

pub mod countries;
pub mod error;
pub mod identifiers;
pub mod iso;
pub mod loader;
pub mod store;
pub mod visa;
pub mod weather;

pub use countries::{parse_countries, BestTime, CountryCode, Month, MonthRecord};
pub use error::DataError;
pub use identifiers::{IdentifierIndex, RawId};
pub use loader::{DataBundle, DataLoadChannel, DataSourceConfig};
pub use store::DataStore;
pub use visa::{VisaCategory, VisaMatrix};
pub use weather::WeatherCondition;
