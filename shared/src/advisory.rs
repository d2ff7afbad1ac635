//! Tanning-duration advisory engine
//!
//! Pure functions turning a skin classification and a weather reading into a
//! safe exposure recommendation. Every UV threshold is evaluated top-down from
//! the most restrictive band, first match wins.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AdvisoryResult, ForecastSeries, RiskLabel, SkinBand, SkinClassification, SpfTier,
    WeatherSample,
};

/// Longest session ever recommended, in minutes
pub const MAX_SESSION_MINUTES: u32 = 30;

/// Cloud coverage above which a session may run longer
pub const HEAVY_CLOUD_PERCENT: i32 = 70;

/// Exposure before environmental adjustment
pub fn base_exposure_minutes(classification: SkinClassification) -> u32 {
    match classification.band() {
        SkinBand::Light => 10,
        SkinBand::Medium => 15,
        SkinBand::Dark => 20,
    }
}

/// Darker classifications never get a higher tier than lighter ones
pub fn recommended_spf(classification: SkinClassification) -> SpfTier {
    match classification.band() {
        SkinBand::Light => SpfTier::FiftyPlus,
        SkinBand::Medium => SpfTier::Thirty,
        SkinBand::Dark => SpfTier::Fifteen,
    }
}

/// Step adjustment of a base duration for UV intensity
pub fn adjust_for_uv(base_minutes: u32, uv_index: Decimal) -> u32 {
    if uv_index >= Decimal::from(11) {
        0
    } else if uv_index >= Decimal::from(8) {
        base_minutes.saturating_sub(10).max(5)
    } else if uv_index >= Decimal::from(6) {
        base_minutes.saturating_sub(5).max(8)
    } else if uv_index <= Decimal::from(2) {
        base_minutes.saturating_add(10).min(MAX_SESSION_MINUTES)
    } else {
        base_minutes
    }
}

/// Adjustment for sky conditions. A zero from the UV step is final.
pub fn adjust_for_weather(minutes: u32, cloud_coverage_percent: i32, condition: &str) -> u32 {
    if minutes == 0 {
        return 0;
    }
    if cloud_coverage_percent > HEAVY_CLOUD_PERCENT {
        minutes.saturating_add(5).min(MAX_SESSION_MINUTES)
    } else if condition.eq_ignore_ascii_case("rain") {
        0
    } else {
        minutes
    }
}

pub fn risk_label(uv_index: Decimal) -> RiskLabel {
    if uv_index >= Decimal::from(11) {
        RiskLabel::Extreme
    } else if uv_index >= Decimal::from(8) {
        RiskLabel::VeryHigh
    } else if uv_index >= Decimal::from(6) {
        RiskLabel::High
    } else if uv_index <= Decimal::from(2) {
        RiskLabel::Low
    } else {
        RiskLabel::Moderate
    }
}

/// Full recommendation for one classification under one reading
pub fn evaluate(classification: SkinClassification, sample: &WeatherSample) -> AdvisoryResult {
    let base = base_exposure_minutes(classification);
    let minutes = adjust_for_weather(
        adjust_for_uv(base, sample.uv_index),
        sample.cloud_coverage_percent,
        &sample.condition,
    );

    AdvisoryResult {
        recommended_minutes: minutes,
        recommended_spf: recommended_spf(classification),
        risk_label: risk_label(sample.uv_index),
        is_safe: minutes > 0,
    }
}

/// A forecast slot paired with its advisory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotAdvisory {
    pub sample: WeatherSample,
    pub advisory: AdvisoryResult,
}

/// Advisory for every daylight slot of a forecast, in timestamp order
pub fn evaluate_series(
    classification: SkinClassification,
    series: &ForecastSeries,
) -> Vec<SlotAdvisory> {
    let mut slots: Vec<SlotAdvisory> = series
        .daylight_samples()
        .map(|sample| SlotAdvisory {
            sample: sample.clone(),
            advisory: evaluate(classification, sample),
        })
        .collect();
    slots.sort_by_key(|slot| slot.sample.timestamp);
    slots
}

/// Daylight slot allowing the longest safe session, earliest on ties.
/// None when there is no daylight slot or none of them is safe.
pub fn best_time_of_day(
    classification: SkinClassification,
    series: &ForecastSeries,
) -> Option<&WeatherSample> {
    series
        .daylight_samples()
        .map(|sample| (sample, evaluate(classification, sample)))
        .filter(|(_, advisory)| advisory.is_safe)
        .fold(None, |best: Option<(&WeatherSample, u32)>, (sample, advisory)| {
            let minutes = advisory.recommended_minutes;
            match best {
                Some((current, current_minutes))
                    if current_minutes > minutes
                        || (current_minutes == minutes && current.timestamp <= sample.timestamp) =>
                {
                    Some((current, current_minutes))
                }
                _ => Some((sample, minutes)),
            }
        })
        .map(|(sample, _)| sample)
}
