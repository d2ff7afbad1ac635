//! Advisory service combining provider readings with the advisory engine
//!
//! Provider failures never reach the engine: the documented fallback reading
//! is substituted and the response is flagged.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use shared::{
    best_time_of_day, evaluate, evaluate_series, validate_sample, AdvisoryResult,
    SkinClassification, SlotAdvisory, WeatherSample,
};

use crate::error::{AppError, AppResult};
use crate::external::weather::{WeatherClient, WeatherReport};

/// Advisory service for exposure recommendations
#[derive(Clone)]
pub struct AdvisoryService {
    weather_client: Option<WeatherClient>,
    fallback_location: String,
}

/// Recommendation for the current reading at a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdvisory {
    pub shade: SkinClassification,
    pub location: String,
    pub sample: WeatherSample,
    pub advisory: AdvisoryResult,
    pub risk_description: String,
    pub fallback_used: bool,
}

/// Recommendations for each daylight forecast slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastAdvisory {
    pub shade: SkinClassification,
    pub location: String,
    pub utc_offset_seconds: i32,
    pub slots: Vec<SlotAdvisory>,
    /// Slot allowing the longest safe session; None when no slot is safe
    pub best: Option<WeatherSample>,
    /// Day-level reading used when the forecast has no daylight slots
    pub daily_outlook: Option<SlotAdvisory>,
    pub fallback_used: bool,
}

impl AdvisoryService {
    pub fn new(weather_client: Option<WeatherClient>, fallback_location: String) -> Self {
        Self {
            weather_client,
            fallback_location,
        }
    }

    /// Evaluate a reading supplied directly by the client
    pub fn evaluate_reading(
        &self,
        shade: SkinClassification,
        sample: &WeatherSample,
    ) -> AppResult<AdvisoryResult> {
        validate_sample(sample).map_err(|message| AppError::Validation {
            field: "sample".to_string(),
            message: message.to_string(),
        })?;
        Ok(evaluate(shade, sample))
    }

    /// Advisory for the provider's current reading, or the fallback reading
    pub async fn current(
        &self,
        shade: SkinClassification,
        latitude: f64,
        longitude: f64,
    ) -> CurrentAdvisory {
        let (location, sample, fallback_used) = match self.fetch_report(latitude, longitude).await
        {
            Some(report) => (report.timezone, report.current, false),
            None => (
                self.fallback_location.clone(),
                WeatherSample::fallback(Utc::now()),
                true,
            ),
        };

        let advisory = evaluate(shade, &sample);
        tracing::debug!(
            %shade,
            uv_index = %sample.uv_index,
            minutes = advisory.recommended_minutes,
            fallback_used,
            "Evaluated current advisory"
        );

        CurrentAdvisory {
            shade,
            location,
            sample,
            advisory,
            risk_description: advisory.risk_label.description().to_string(),
            fallback_used,
        }
    }

    /// Advisory for every daylight forecast slot plus the best one
    pub async fn forecast(
        &self,
        shade: SkinClassification,
        latitude: f64,
        longitude: f64,
    ) -> ForecastAdvisory {
        let Some(report) = self.fetch_report(latitude, longitude).await else {
            let sample = WeatherSample::fallback(Utc::now());
            return ForecastAdvisory {
                shade,
                location: self.fallback_location.clone(),
                utc_offset_seconds: 0,
                slots: Vec::new(),
                best: None,
                daily_outlook: Some(SlotAdvisory {
                    advisory: evaluate(shade, &sample),
                    sample,
                }),
                fallback_used: true,
            };
        };

        let slots = evaluate_series(shade, &report.hourly);
        let best = best_time_of_day(shade, &report.hourly).cloned();
        let daily_outlook = if slots.is_empty() {
            daily_outlook(shade, &report)
        } else {
            None
        };

        tracing::debug!(
            %shade,
            slots = slots.len(),
            has_best = best.is_some(),
            "Evaluated forecast advisory"
        );

        ForecastAdvisory {
            shade,
            location: report.timezone,
            utc_offset_seconds: report.hourly.utc_offset_seconds,
            slots,
            best,
            daily_outlook,
            fallback_used: false,
        }
    }

    /// Fetch a report, logging and swallowing any provider failure
    async fn fetch_report(&self, latitude: f64, longitude: f64) -> Option<WeatherReport> {
        let Some(client) = &self.weather_client else {
            tracing::warn!("Weather provider not configured, using fallback reading");
            return None;
        };

        match client.get_report(latitude, longitude).await {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!(error = %e, "Weather provider failed, using fallback reading");
                None
            }
        }
    }
}

/// Tomorrow's day-level reading when available, otherwise today's
fn daily_outlook(shade: SkinClassification, report: &WeatherReport) -> Option<SlotAdvisory> {
    report
        .daily
        .get(1)
        .or_else(|| report.daily.first())
        .map(|sample| SlotAdvisory {
            sample: sample.clone(),
            advisory: evaluate(shade, sample),
        })
}
