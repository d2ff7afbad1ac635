//! Weather data models

use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A weather reading at a single point in time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: Decimal,
    /// Solar UV index, non-negative (typically 0-14)
    pub uv_index: Decimal,
    /// Cloud coverage, 0-100
    pub cloud_coverage_percent: i32,
    /// Free text such as "Clear", "Rain" or "Clouds"
    pub condition: String,
}

impl WeatherSample {
    /// Reading substituted when the weather provider cannot be reached:
    /// 25°C, UV 5, clear sky, no cloud
    pub fn fallback(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            temperature_celsius: Decimal::from(25),
            uv_index: Decimal::from(5),
            cloud_coverage_percent: 0,
            condition: "Clear".to_string(),
        }
    }
}

/// Hourly forecast for a bounded window at one location
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ForecastSeries {
    /// Offset of the location's local time from UTC
    #[serde(default)]
    pub utc_offset_seconds: i32,
    pub samples: Vec<WeatherSample>,
}

impl ForecastSeries {
    pub fn new(utc_offset_seconds: i32, mut samples: Vec<WeatherSample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self {
            utc_offset_seconds,
            samples,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Local wall-clock time of a sample at this location
    pub fn local_time(&self, sample: &WeatherSample) -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(self.utc_offset_seconds).unwrap_or_else(|| Utc.fix());
        sample.timestamp.with_timezone(&offset)
    }

    /// Whether a sample falls inside the 06:00-18:00 local daylight window
    pub fn is_daylight(&self, sample: &WeatherSample) -> bool {
        let local = self.local_time(sample);
        let minute_of_day = local.hour() * 60 + local.minute();
        (DAYLIGHT_START_MINUTE..=DAYLIGHT_END_MINUTE).contains(&minute_of_day)
    }

    /// Samples inside the daylight window, in timestamp order
    pub fn daylight_samples(&self) -> impl Iterator<Item = &WeatherSample> {
        self.samples.iter().filter(move |s| self.is_daylight(s))
    }
}

const DAYLIGHT_START_MINUTE: u32 = 6 * 60;
const DAYLIGHT_END_MINUTE: u32 = 18 * 60;
