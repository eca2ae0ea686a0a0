//! Dataset loading.
//!
//! Loading is the only asynchronous boundary in the app. The UI asks
//! `DataLoadChannel` for a load and polls it each frame; the finished
//! `DataBundle` is installed into the `DataStore` on the UI thread.
//!
//! Each dataset degrades independently: a file that fails to read falls
//! back to the embedded copy, and a dataset that fails to parse is replaced
//! by an empty collection.

use super::countries::CanonicalCountry;
use super::{parse_countries, DataError, VisaMatrix};
use crate::geo::BoundaryLayer;
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Environment variable naming a directory of dataset overrides.
pub const DATA_DIR_ENV: &str = "WAYFARER_DATA_DIR";

pub const COUNTRIES_FILE: &str = "countries.json";
pub const VISA_FILE: &str = "visa_tidy_iso3.csv";
pub const BOUNDARIES_FILE: &str = "world.geojson";

const EMBEDDED_COUNTRIES: &[u8] = include_bytes!("../../assets/data/countries.json");
const EMBEDDED_VISA: &[u8] = include_bytes!("../../assets/data/visa_tidy_iso3.csv");
const EMBEDDED_BOUNDARIES: &[u8] = include_bytes!("../../assets/vectors/world.geojson");

/// Where datasets are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSourceConfig {
    /// Directory holding override files. `None` uses the embedded assets.
    pub data_dir: Option<PathBuf>,
}

impl DataSourceConfig {
    /// Reads the override directory from the environment (native only).
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let data_dir = std::env::var_os(DATA_DIR_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from);
            if let Some(dir) = &data_dir {
                log::info!("Reading datasets from {}", dir.display());
            }
            Self { data_dir }
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    /// Bytes of one dataset, falling back to the embedded copy.
    fn read(&self, file: &str, embedded: &'static [u8]) -> Vec<u8> {
        let Some(dir) = &self.data_dir else {
            return embedded.to_vec();
        };
        let path = dir.join(file);
        match std::fs::read(&path).map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        }) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("{}; using embedded {}", e, file);
                embedded.to_vec()
            }
        }
    }
}

/// Every dataset from one load.
#[derive(Debug, Default)]
pub struct DataBundle {
    pub countries: Vec<CanonicalCountry>,
    pub visa: VisaMatrix,
    pub boundaries: BoundaryLayer,
}

/// Parses the three datasets, replacing any that fail with an empty one.
pub fn parse_bundle(countries: &[u8], visa: &[u8], boundaries: &[u8]) -> DataBundle {
    let countries = parse_countries(countries).unwrap_or_else(|e| {
        log::error!("Failed to load {}: {}", COUNTRIES_FILE, e);
        Vec::new()
    });
    let visa = VisaMatrix::from_csv(visa).unwrap_or_else(|e| {
        log::error!("Failed to load {}: {}", VISA_FILE, e);
        VisaMatrix::default()
    });
    let boundaries = BoundaryLayer::from_geojson(boundaries).unwrap_or_else(|e| {
        log::error!("Failed to load {}: {}", BOUNDARIES_FILE, e);
        BoundaryLayer::default()
    });

    log::info!(
        "Loaded {} countries, {} visa rows, {} boundary features",
        countries.len(),
        visa.len(),
        boundaries.len()
    );

    DataBundle {
        countries,
        visa,
        boundaries,
    }
}

/// Reads and parses every dataset for `config`.
pub fn load_bundle(config: &DataSourceConfig) -> DataBundle {
    let countries = config.read(COUNTRIES_FILE, EMBEDDED_COUNTRIES);
    let visa = config.read(VISA_FILE, EMBEDDED_VISA);
    let boundaries = config.read(BOUNDARIES_FILE, EMBEDDED_BOUNDARIES);
    parse_bundle(&countries, &visa, &boundaries)
}

/// Channel delivering loaded bundles to the UI thread.
///
/// On native the load runs on a worker thread; on wasm it runs as a local
/// future. Either way the result arrives through the channel and a repaint
/// is requested so `update()` picks it up.
pub struct DataLoadChannel {
    sender: Sender<DataBundle>,
    receiver: Receiver<DataBundle>,
    loading: bool,
}

impl Default for DataLoadChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoadChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            loading: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Starts a load. Ignored while one is already in flight.
    pub fn request(&mut self, ctx: egui::Context, config: DataSourceConfig) {
        if self.loading {
            log::debug!("Data load already in progress, ignoring request");
            return;
        }
        self.loading = true;
        let sender = self.sender.clone();

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::thread::spawn(move || {
                let bundle = load_bundle(&config);
                let _ = sender.send(bundle);
                ctx.request_repaint();
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                let bundle = load_bundle(&config);
                let _ = sender.send(bundle);
                ctx.request_repaint();
            });
        }
    }

    /// Non-blocking check for a finished load.
    pub fn try_recv(&mut self) -> Option<DataBundle> {
        let bundle = self.receiver.try_recv().ok()?;
        self.loading = false;
        Some(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CountryCode, IdentifierIndex};

    #[test]
    fn test_embedded_assets_parse() {
        let bundle = load_bundle(&DataSourceConfig::default());
        assert!(!bundle.countries.is_empty());
        assert!(!bundle.visa.is_empty());
        assert!(!bundle.boundaries.is_empty());
    }

    #[test]
    fn test_embedded_boundaries_resolve() {
        let bundle = load_bundle(&DataSourceConfig::default());
        let index = IdentifierIndex::new(&bundle.countries);
        let features = &bundle.boundaries.features;
        assert!(features.len() >= 175, "only {} outlines", features.len());

        let unresolved: Vec<_> = features
            .iter()
            .filter(|f| index.resolve_feature(f).is_none())
            .map(|f| f.label.clone().unwrap_or_default())
            .collect();
        assert!(unresolved.len() <= 3, "unresolved outlines: {:?}", unresolved);

        for code in ["BR", "US", "RU", "FJ", "XK", "AU"] {
            let code = CountryCode::parse(code).unwrap();
            assert!(
                features
                    .iter()
                    .any(|f| index.resolve_feature(f).as_ref() == Some(&code)),
                "no outline for {}",
                code
            );
        }
    }

    #[test]
    fn test_identifier_shapes_resolve() {
        const ID_SHAPES: &[u8] =
            include_bytes!("../../assets/fixtures/boundary_id_shapes.geojson");
        let bundle = parse_bundle(EMBEDDED_COUNTRIES, EMBEDDED_VISA, ID_SHAPES);
        let index = IdentifierIndex::new(&bundle.countries);

        let resolved: Vec<(String, Option<CountryCode>)> = bundle
            .boundaries
            .features
            .iter()
            .map(|f| (f.label.clone().unwrap_or_default(), index.resolve_feature(f)))
            .collect();
        assert_eq!(resolved.len(), 29);

        let code_of = |label: &str| {
            resolved
                .iter()
                .find(|(l, _)| l == label)
                .and_then(|(_, code)| code.as_ref())
                .map(|c| c.as_str().to_string())
        };
        assert_eq!(code_of("Brazil").as_deref(), Some("BR"));
        assert_eq!(code_of("Peru").as_deref(), Some("PE"));
        assert_eq!(code_of("Iceland").as_deref(), Some("IS"));
        assert_eq!(code_of("Norway").as_deref(), Some("NO"));
        assert_eq!(code_of("Kosovo").as_deref(), Some("XK"));
        assert_eq!(code_of("India").as_deref(), Some("IN"));
        assert_eq!(code_of("Spain").as_deref(), Some("ES"));
        assert_eq!(code_of("N. Cyprus"), None);
        assert_eq!(resolved.iter().filter(|(_, c)| c.is_none()).count(), 1);
    }

    #[test]
    fn test_bad_dataset_degrades_to_empty() {
        let bundle = parse_bundle(b"{", EMBEDDED_VISA, b"[]");
        assert!(bundle.countries.is_empty());
        assert!(!bundle.visa.is_empty());
        assert!(bundle.boundaries.is_empty());
    }

    #[test]
    fn test_missing_override_falls_back_to_embedded() {
        let config = DataSourceConfig {
            data_dir: Some(PathBuf::from("/nonexistent/wayfarer")),
        };
        let bundle = load_bundle(&config);
        assert!(!bundle.countries.is_empty());
    }

    #[test]
    fn test_channel_delivers_bundle() {
        let mut channel = DataLoadChannel::new();
        channel.request(egui::Context::default(), DataSourceConfig::default());
        assert!(channel.is_loading());

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        let bundle = loop {
            if let Some(bundle) = channel.try_recv() {
                break bundle;
            }
            assert!(std::time::Instant::now() < deadline, "load timed out");
            std::thread::sleep(std::time::Duration::from_millis(10));
        };
        assert!(!channel.is_loading());
        assert!(!bundle.countries.is_empty());
    }
}
