//! Weather API client for fetching UV and forecast data
//!
//! Integrates with the OpenWeatherMap One Call API for current conditions,
//! hourly and daily forecasts

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use shared::{clamp_sample, uv_index_from_f64, ForecastSeries, WeatherSample};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Everything the provider returns for one coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub timezone: String,
    pub current: WeatherSample,
    pub hourly: ForecastSeries,
    /// One representative reading per day, today first
    pub daily: Vec<WeatherSample>,
}

/// OpenWeatherMap One Call response
#[derive(Debug, Deserialize)]
struct OneCallResponse {
    timezone: String,
    timezone_offset: i32,
    current: OneCallCurrent,
    #[serde(default)]
    hourly: Vec<OneCallCurrent>,
    #[serde(default)]
    daily: Vec<OneCallDaily>,
}

#[derive(Debug, Deserialize)]
struct OneCallCurrent {
    dt: i64,
    temp: f64,
    #[serde(default)]
    uvi: f64,
    #[serde(default)]
    clouds: i32,
    #[serde(default)]
    weather: Vec<OneCallWeather>,
}

#[derive(Debug, Deserialize)]
struct OneCallDaily {
    dt: i64,
    temp: OneCallDailyTemp,
    #[serde(default)]
    uvi: f64,
    #[serde(default)]
    clouds: i32,
    #[serde(default)]
    weather: Vec<OneCallWeather>,
}

#[derive(Debug, Deserialize)]
struct OneCallDailyTemp {
    day: f64,
}

#[derive(Debug, Deserialize)]
struct OneCallWeather {
    main: String,
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current conditions plus hourly and daily forecasts by coordinates
    pub async fn get_report(&self, latitude: f64, longitude: f64) -> AppResult<WeatherReport> {
        let url = format!(
            "{}/onecall?lat={}&lon={}&exclude=minutely,alerts&appid={}&units=metric",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() || e.is_connect() {
                AppError::WeatherServiceUnavailable
            } else {
                AppError::WeatherApi(format!("request failed: {}", e))
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherApi(format!("{} - {}", status, body)));
        }

        let data: OneCallResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherApi(format!("malformed payload: {}", e)))?;

        tracing::debug!(
            timezone = %data.timezone,
            hourly = data.hourly.len(),
            daily = data.daily.len(),
            "Fetched One Call report"
        );

        Ok(convert_report(data))
    }
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value).unwrap_or_default()
}

/// UV index as whole numbers, half away from zero, saturating at the accepted range
fn round_uv(uvi: f64) -> Decimal {
    uv_index_from_f64(uvi)
        .unwrap_or_default()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn condition_of(weather: &[OneCallWeather]) -> String {
    weather
        .first()
        .map(|w| w.main.clone())
        .unwrap_or_else(|| "Clear".to_string())
}

fn timestamp_of(dt: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(dt, 0).unwrap_or_else(Utc::now)
}

fn convert_sample(item: &OneCallCurrent) -> WeatherSample {
    clamp_sample(WeatherSample {
        timestamp: timestamp_of(item.dt),
        temperature_celsius: to_decimal(item.temp).round_dp(1),
        uv_index: round_uv(item.uvi),
        cloud_coverage_percent: item.clouds,
        condition: condition_of(&item.weather),
    })
}

fn convert_daily(item: &OneCallDaily) -> WeatherSample {
    clamp_sample(WeatherSample {
        timestamp: timestamp_of(item.dt),
        temperature_celsius: to_decimal(item.temp.day).round_dp(1),
        uv_index: round_uv(item.uvi),
        cloud_coverage_percent: item.clouds,
        condition: condition_of(&item.weather),
    })
}

/// Convert a One Call response to our format
fn convert_report(data: OneCallResponse) -> WeatherReport {
    WeatherReport {
        timezone: data.timezone,
        current: convert_sample(&data.current),
        hourly: ForecastSeries::new(
            data.timezone_offset,
            data.hourly.iter().map(convert_sample).collect(),
        ),
        daily: data.daily.iter().map(convert_daily).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "lat": -33.87,
        "lon": 151.21,
        "timezone": "Australia/Sydney",
        "timezone_offset": 39600,
        "current": {
            "dt": 1733011200,
            "temp": 24.37,
            "uvi": 8.5,
            "clouds": 20,
            "weather": [{"id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d"}]
        },
        "hourly": [
            {"dt": 1733018400, "temp": 25.1, "uvi": 10.49, "clouds": 0,
             "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}]},
            {"dt": 1733014800, "temp": 24.8, "uvi": 9.2, "clouds": 105,
             "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}]}
        ],
        "daily": [
            {"dt": 1733014800, "temp": {"day": 26.2, "min": 18.0, "max": 27.5}, "uvi": 11.6, "clouds": 15,
             "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}]}
        ]
    }"#;

    fn report() -> WeatherReport {
        let data: OneCallResponse = serde_json::from_str(FIXTURE).unwrap();
        convert_report(data)
    }

    #[test]
    fn test_current_sample_conversion() {
        let report = report();
        assert_eq!(report.timezone, "Australia/Sydney");
        assert_eq!(report.current.condition, "Clouds");
        assert_eq!(report.current.cloud_coverage_percent, 20);
        assert_eq!(report.current.temperature_celsius, Decimal::new(244, 1));
        // 8.5 rounds half away from zero
        assert_eq!(report.current.uv_index, Decimal::from(9));
    }

    #[test]
    fn test_hourly_sorted_and_offset_carried() {
        let report = report();
        assert_eq!(report.hourly.utc_offset_seconds, 39600);
        assert_eq!(report.hourly.samples.len(), 2);
        assert!(report.hourly.samples[0].timestamp < report.hourly.samples[1].timestamp);
        assert_eq!(report.hourly.samples[0].uv_index, Decimal::from(9));
        assert_eq!(report.hourly.samples[1].uv_index, Decimal::from(10));
    }

    #[test]
    fn test_cloud_coverage_is_clamped() {
        let report = report();
        assert_eq!(report.hourly.samples[0].cloud_coverage_percent, 100);
    }

    #[test]
    fn test_daily_conversion() {
        let report = report();
        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.daily[0].uv_index, Decimal::from(12));
        assert_eq!(report.daily[0].temperature_celsius, Decimal::new(262, 1));
    }

    #[test]
    fn test_out_of_range_uv_saturates() {
        let json = r#"{"timezone":"UTC","timezone_offset":0,
            "current":{"dt":1733011200,"temp":20.0,"uvi":1e30,"clouds":0},
            "hourly":[{"dt":1733014800,"temp":20.0,"uvi":-1e30,"clouds":0}]}"#;
        let data: OneCallResponse = serde_json::from_str(json).unwrap();
        let report = convert_report(data);
        assert_eq!(report.current.uv_index, Decimal::from(shared::MAX_UV_INDEX));
        assert!(!shared::evaluate(shared::SkinClassification::Deep, &report.current).is_safe);
        assert_eq!(report.hourly.samples[0].uv_index, Decimal::ZERO);
    }

    #[test]
    fn test_missing_weather_defaults_to_clear() {
        let json = r#"{"timezone":"UTC","timezone_offset":0,
            "current":{"dt":1733011200,"temp":20.0}}"#;
        let data: OneCallResponse = serde_json::from_str(json).unwrap();
        let report = convert_report(data);
        assert_eq!(report.current.condition, "Clear");
        assert_eq!(report.current.uv_index, Decimal::ZERO);
        assert!(report.hourly.is_empty());
    }
}
