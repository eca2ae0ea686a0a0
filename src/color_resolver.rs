//! Country fill colors for the active map mode.
//!
//! Every lookup failure (unresolved code, missing country, missing month,
//! missing value) lands on `colors::NO_DATA`. Results depend only on the
//! inputs, so the renderer may call this every frame.

use crate::data::{BestTime, CountryCode, DataStore, Month, VisaCategory};
use crate::ui::colors;
use eframe::egui::Color32;
use std::fmt;

/// Weather metric shown in weather mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeatherMetric {
    #[default]
    Temperature,
    Rainfall,
    BestTime,
}

impl WeatherMetric {
    pub const ALL: [WeatherMetric; 3] = [
        WeatherMetric::Temperature,
        WeatherMetric::Rainfall,
        WeatherMetric::BestTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeatherMetric::Temperature => "Temperature",
            WeatherMetric::Rainfall => "Rainfall",
            WeatherMetric::BestTime => "Best time to visit",
        }
    }
}

/// What the map is colored by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapMode {
    Weather { metric: WeatherMetric, month: Month },
    Visa { passport: Option<CountryCode> },
}

impl Default for MapMode {
    fn default() -> Self {
        MapMode::Weather {
            metric: WeatherMetric::default(),
            month: Month::default(),
        }
    }
}

impl fmt::Display for MapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapMode::Weather { metric, month } => write!(f, "{} in {}", metric.label(), month.name()),
            MapMode::Visa { passport: Some(p) } => write!(f, "Visa requirements for {} passport", p),
            MapMode::Visa { passport: None } => write!(f, "Visa requirements"),
        }
    }
}

/// Entry status of a destination for a passport holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisaStatus {
    /// The destination is the passport's own country.
    Home,
    Requirement(VisaCategory),
}

impl VisaStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VisaStatus::Home => "Home country",
            VisaStatus::Requirement(category) => category.label(),
        }
    }
}

/// Requirement edge from `passport` to `destination`, if the matrix has one.
///
/// Both sides go through the identifier index to reach the alpha-3 keys of
/// the visa matrix.
pub fn category_for_visa(
    store: &DataStore,
    passport: &CountryCode,
    destination: &CountryCode,
) -> Option<VisaCategory> {
    let index = store.index();
    let passport3 = index.alpha3(passport)?;
    let destination3 = index.alpha3(destination)?;
    store.visa().requirement(passport3, destination3)
}

/// Visa status for tooltips and fills. An absent edge reads as "n/a".
pub fn visa_status(
    store: &DataStore,
    passport: &CountryCode,
    destination: &CountryCode,
) -> VisaStatus {
    if passport == destination {
        return VisaStatus::Home;
    }
    VisaStatus::Requirement(
        category_for_visa(store, passport, destination).unwrap_or(VisaCategory::NotApplicable),
    )
}

pub fn visa_color(category: VisaCategory) -> Color32 {
    match category {
        VisaCategory::Free => colors::visa::FREE,
        VisaCategory::OnArrival => colors::visa::ON_ARRIVAL,
        VisaCategory::EVisa => colors::visa::E_VISA,
        VisaCategory::Sticker => colors::visa::STICKER,
        VisaCategory::NoAdmission => colors::visa::NO_ADMISSION,
        VisaCategory::NotApplicable => colors::visa::NOT_APPLICABLE,
        VisaCategory::Other => colors::visa::OTHER,
    }
}

pub fn best_time_color(best_time: BestTime) -> Color32 {
    match best_time {
        BestTime::Best => colors::best_time::BEST,
        BestTime::Okay => colors::best_time::OKAY,
        BestTime::Avoid => colors::best_time::AVOID,
    }
}

pub fn temperature_color(celsius: f32) -> Color32 {
    colors::ramp(&colors::TEMPERATURE_RAMP, celsius)
}

pub fn rainfall_color(mm: f32) -> Color32 {
    colors::ramp(&colors::RAINFALL_RAMP, mm)
}

/// Fill color for a country under `mode`.
pub fn color_for(code: Option<&CountryCode>, mode: &MapMode, store: &DataStore) -> Color32 {
    let Some(code) = code else {
        return colors::NO_DATA;
    };

    match mode {
        MapMode::Weather { metric, month } => {
            let Some(record) = store.country(code).and_then(|c| c.month(*month)) else {
                return colors::NO_DATA;
            };
            match metric {
                WeatherMetric::Temperature => temperature_color(record.day_temp_c),
                WeatherMetric::Rainfall => rainfall_color(record.rainfall_mm),
                WeatherMetric::BestTime => record
                    .best_time
                    .map(best_time_color)
                    .unwrap_or(colors::NO_DATA),
            }
        }
        MapMode::Visa { passport: None } => colors::NO_DATA,
        MapMode::Visa {
            passport: Some(passport),
        } => match visa_status(store, passport, code) {
            VisaStatus::Home => colors::visa::HOME,
            VisaStatus::Requirement(category) => visa_color(category),
        },
    }
}
