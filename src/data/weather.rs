//! Human-readable summaries of monthly climate figures.

use super::countries::MonthRecord;

/// Coarse weather character of a month, shown in the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    HeavyStorms,
    TropicalRain,
    ColdAndWet,
    Showery,
    HotDesert,
    VeryHot,
    WarmPleasant,
    CoolMild,
    Chilly,
    Freezing,
}

impl WeatherCondition {
    /// Classifies a month. Rainfall dominates, then heat, then average
    /// temperature.
    pub fn classify(day_temp: f32, night_temp: f32, rainfall: f32) -> Self {
        let avg_temp = (day_temp + night_temp) / 2.0;

        if rainfall > 200.0 {
            WeatherCondition::HeavyStorms
        } else if rainfall > 100.0 && avg_temp > 20.0 {
            WeatherCondition::TropicalRain
        } else if rainfall > 100.0 {
            WeatherCondition::ColdAndWet
        } else if rainfall > 50.0 {
            WeatherCondition::Showery
        } else if day_temp > 35.0 && rainfall < 20.0 {
            WeatherCondition::HotDesert
        } else if day_temp > 30.0 {
            WeatherCondition::VeryHot
        } else if avg_temp > 20.0 {
            WeatherCondition::WarmPleasant
        } else if avg_temp > 10.0 {
            WeatherCondition::CoolMild
        } else if avg_temp > 0.0 {
            WeatherCondition::Chilly
        } else {
            WeatherCondition::Freezing
        }
    }

    pub fn for_record(record: &MonthRecord) -> Self {
        Self::classify(record.day_temp_c, record.night_temp_c, record.rainfall_mm)
    }

    pub fn description(&self) -> &'static str {
        match self {
            WeatherCondition::HeavyStorms => "Heavy storms & flooding",
            WeatherCondition::TropicalRain => "Tropical rainy season",
            WeatherCondition::ColdAndWet => "Cold & wet season",
            WeatherCondition::Showery => "Showery weather",
            WeatherCondition::HotDesert => "Hot & arid desert",
            WeatherCondition::VeryHot => "Very hot & sunny",
            WeatherCondition::WarmPleasant => "Warm & pleasant",
            WeatherCondition::CoolMild => "Cool & mild",
            WeatherCondition::Chilly => "Cold & chilly",
            WeatherCondition::Freezing => "Freezing conditions",
        }
    }
}

/// Wording for a monthly rainfall total in mm.
pub fn rainfall_level(rainfall: f32) -> &'static str {
    if rainfall <= 0.0 {
        "No rain"
    } else if rainfall <= 10.0 {
        "Very light"
    } else if rainfall <= 30.0 {
        "Light"
    } else if rainfall <= 60.0 {
        "Moderate"
    } else if rainfall <= 100.0 {
        "Heavy"
    } else if rainfall <= 200.0 {
        "Very heavy"
    } else {
        "Extreme"
    }
}

/// Wording for a temperature in °C.
pub fn temperature_feeling(temp: f32) -> &'static str {
    if temp < 0.0 {
        "Freezing"
    } else if temp < 10.0 {
        "Cold"
    } else if temp < 20.0 {
        "Cool"
    } else if temp < 25.0 {
        "Mild"
    } else if temp < 30.0 {
        "Warm"
    } else if temp < 35.0 {
        "Hot"
    } else {
        "Very hot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rain_first() {
        assert_eq!(WeatherCondition::classify(40.0, 30.0, 250.0), WeatherCondition::HeavyStorms);
        assert_eq!(WeatherCondition::classify(30.0, 24.0, 150.0), WeatherCondition::TropicalRain);
        assert_eq!(WeatherCondition::classify(8.0, 2.0, 150.0), WeatherCondition::ColdAndWet);
        assert_eq!(WeatherCondition::classify(20.0, 10.0, 60.0), WeatherCondition::Showery);
    }

    #[test]
    fn test_classify_dry_months() {
        assert_eq!(WeatherCondition::classify(38.0, 24.0, 5.0), WeatherCondition::HotDesert);
        assert_eq!(WeatherCondition::classify(38.0, 24.0, 30.0), WeatherCondition::VeryHot);
        assert_eq!(WeatherCondition::classify(27.0, 17.0, 10.0), WeatherCondition::WarmPleasant);
        assert_eq!(WeatherCondition::classify(18.0, 8.0, 10.0), WeatherCondition::CoolMild);
        assert_eq!(WeatherCondition::classify(6.0, -2.0, 10.0), WeatherCondition::Chilly);
        assert_eq!(WeatherCondition::classify(-5.0, -12.0, 10.0), WeatherCondition::Freezing);
    }

    #[test]
    fn test_rainfall_level_boundaries() {
        assert_eq!(rainfall_level(0.0), "No rain");
        assert_eq!(rainfall_level(10.0), "Very light");
        assert_eq!(rainfall_level(30.0), "Light");
        assert_eq!(rainfall_level(60.0), "Moderate");
        assert_eq!(rainfall_level(100.0), "Heavy");
        assert_eq!(rainfall_level(200.0), "Very heavy");
        assert_eq!(rainfall_level(201.0), "Extreme");
    }

    #[test]
    fn test_temperature_feeling() {
        assert_eq!(temperature_feeling(-1.0), "Freezing");
        assert_eq!(temperature_feeling(24.9), "Mild");
        assert_eq!(temperature_feeling(35.0), "Very hot");
    }
}
