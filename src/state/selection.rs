//! Month, category and passport selection.

use crate::color_resolver::{MapMode, WeatherMetric};
use crate::data::{CountryCode, Month};

/// Category chosen in the selector panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapCategory {
    #[default]
    Temperature,
    Rainfall,
    BestTime,
    Visa,
}

impl MapCategory {
    pub const ALL: [MapCategory; 4] = [
        MapCategory::Temperature,
        MapCategory::Rainfall,
        MapCategory::BestTime,
        MapCategory::Visa,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MapCategory::Temperature => "Temperature",
            MapCategory::Rainfall => "Rainfall",
            MapCategory::BestTime => "Best time to visit",
            MapCategory::Visa => "Visa requirements",
        }
    }

    /// Parses the `category` URL parameter.
    pub fn from_param(value: &str) -> Option<MapCategory> {
        match value.trim().to_ascii_lowercase().as_str() {
            "temperature" | "temp" => Some(MapCategory::Temperature),
            "rainfall" | "rain" => Some(MapCategory::Rainfall),
            "besttime" | "best" => Some(MapCategory::BestTime),
            "visa" => Some(MapCategory::Visa),
            _ => None,
        }
    }

    pub fn is_weather(&self) -> bool {
        !matches!(self, MapCategory::Visa)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub month: Month,
    pub category: MapCategory,
    pub passport: Option<CountryCode>,
    /// Passport named in the URL, resolved once data is installed.
    pub pending_passport: Option<String>,
}

impl SelectionState {
    /// Map mode for the current selection.
    pub fn mode(&self) -> MapMode {
        let metric = match self.category {
            MapCategory::Temperature => WeatherMetric::Temperature,
            MapCategory::Rainfall => WeatherMetric::Rainfall,
            MapCategory::BestTime => WeatherMetric::BestTime,
            MapCategory::Visa => {
                return MapMode::Visa {
                    passport: self.passport.clone(),
                }
            }
        };
        MapMode::Weather {
            metric,
            month: self.month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_follows_selection() {
        let mut selection = SelectionState {
            month: Month::July,
            category: MapCategory::Rainfall,
            ..Default::default()
        };
        assert_eq!(
            selection.mode(),
            MapMode::Weather {
                metric: WeatherMetric::Rainfall,
                month: Month::July
            }
        );

        selection.category = MapCategory::Visa;
        selection.passport = CountryCode::parse("DE");
        assert_eq!(
            selection.mode(),
            MapMode::Visa {
                passport: CountryCode::parse("DE")
            }
        );
    }

    #[test]
    fn test_category_from_param() {
        assert_eq!(MapCategory::from_param("bestTime"), Some(MapCategory::BestTime));
        assert_eq!(MapCategory::from_param("VISA"), Some(MapCategory::Visa));
        assert_eq!(MapCategory::from_param("snow"), None);
    }
}
