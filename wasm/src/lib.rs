//! WebAssembly module for the TanAI platform
//!
//! Provides client-side computation for:
//! - Exposure advisories for a UV selection or time slot
//! - Best time of day over a fetched forecast
//! - Shade selection and Fitzpatrick lookup
//! - Tanning plan generation

use chrono::Utc;
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::advisory::*;
pub use shared::models::*;
pub use shared::plan::*;
pub use shared::validation::*;

fn parse_shade(shade: &str) -> Result<SkinClassification, JsValue> {
    shade
        .parse()
        .map_err(|e: ShadeError| JsValue::from_str(&e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

fn uv_from_f64(uv_index: f64) -> Result<Decimal, JsValue> {
    uv_index_from_f64(uv_index).ok_or_else(|| JsValue::from_str("UV index must be a number"))
}

/// Build the advisory for a single reading and return it as JSON
#[wasm_bindgen]
pub fn evaluate_advisory(
    shade: &str,
    uv_index: f64,
    cloud_coverage_percent: i32,
    condition: &str,
) -> Result<String, JsValue> {
    let classification = parse_shade(shade)?;
    let sample = WeatherSample {
        uv_index: uv_from_f64(uv_index)?,
        cloud_coverage_percent: clamp_cloud_coverage(cloud_coverage_percent),
        condition: condition.to_string(),
        ..WeatherSample::fallback(Utc::now())
    };
    to_json(&evaluate(classification, &sample))
}

/// Recommended SPF label for a shade, e.g. "SPF 50+"
#[wasm_bindgen]
pub fn recommended_spf_label(shade: &str) -> Result<String, JsValue> {
    Ok(recommended_spf(parse_shade(shade)?).to_string())
}

/// Risk description for a UV index, e.g. "High UV - Moderate exposure"
#[wasm_bindgen]
pub fn uv_risk_description(uv_index: f64) -> Result<String, JsValue> {
    Ok(risk_label(uv_from_f64(uv_index)?).description().to_string())
}

/// Best slot of a forecast (`ForecastSeries` JSON) as JSON, or None
#[wasm_bindgen]
pub fn best_time_of_day_json(shade: &str, forecast_json: &str) -> Result<Option<String>, JsValue> {
    let classification = parse_shade(shade)?;
    let mut series: ForecastSeries = serde_json::from_str(forecast_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid forecast JSON: {}", e)))?;
    series.samples = series.samples.into_iter().map(clamp_sample).collect();

    best_time_of_day(classification, &series)
        .map(to_json)
        .transpose()
}

/// Advisory for every daylight slot of a forecast as JSON
#[wasm_bindgen]
pub fn evaluate_forecast(shade: &str, forecast_json: &str) -> Result<String, JsValue> {
    let classification = parse_shade(shade)?;
    let mut series: ForecastSeries = serde_json::from_str(forecast_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid forecast JSON: {}", e)))?;
    series.samples = series.samples.into_iter().map(clamp_sample).collect();
    to_json(&evaluate_series(classification, &series))
}

/// Shades darker than the current one, as snake_case keys
#[wasm_bindgen]
pub fn target_shades(shade: &str) -> Result<String, JsValue> {
    to_json(&parse_shade(shade)?.darker_options())
}

/// Map image-analysis text onto a shade key; unrecognised text is Medium
#[wasm_bindgen]
pub fn shade_from_fitzpatrick(analysis: &str) -> String {
    let shade = match SkinClassification::from_fitzpatrick_text(analysis) {
        Ok(shade) => shade,
        Err(e) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(&JsValue::from_str(&format!("{}; defaulting to Medium", e)));
            #[cfg(not(target_arch = "wasm32"))]
            let _ = e;
            SkinClassification::Medium
        }
    };
    shade_key(shade)
}

fn shade_key(shade: SkinClassification) -> String {
    serde_json::to_value(shade)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_else(|| shade.label().to_string())
}

/// Build a plan from a `TanningProfile` JSON document
#[wasm_bindgen]
pub fn build_tanning_plan(profile_json: &str) -> Result<String, JsValue> {
    let profile: TanningProfile = serde_json::from_str(profile_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid profile JSON: {}", e)))?;
    let plan = build_plan(&profile).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&plan)
}

/// UTC offset of the device clock in seconds, east positive
#[wasm_bindgen]
pub fn device_utc_offset_seconds() -> i32 {
    // getTimezoneOffset is minutes west of UTC
    let minutes_west = js_sys::Date::new_0().get_timezone_offset();
    (-minutes_west * 60.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_advisory_json() {
        let json = evaluate_advisory("Very Light", 9.0, 0, "Clear").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["recommended_minutes"], 5);
        assert_eq!(value["recommended_spf"], "fifty_plus");
        assert_eq!(value["risk_label"], "very_high");
        assert_eq!(value["is_safe"], true);
    }

    #[test]
    fn test_evaluate_advisory_clamps_inputs() {
        let json = evaluate_advisory("deep", -4.0, 250, "Clear").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        // UV 0 and full cloud both lengthen the session, capped at 30
        assert_eq!(value["recommended_minutes"], 30);
        assert_eq!(value["risk_label"], "low");
    }

    #[test]
    fn test_evaluate_advisory_saturates_huge_uv() {
        for uv in [f64::INFINITY, 1e30, 25.0] {
            let json = evaluate_advisory("very_light", uv, 0, "Clear").unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["recommended_minutes"], 0);
            assert_eq!(value["risk_label"], "extreme");
            assert_eq!(value["is_safe"], false);
        }
    }

    #[test]
    fn test_spf_and_risk_strings() {
        assert_eq!(recommended_spf_label("light_medium").unwrap(), "SPF 50+");
        assert_eq!(recommended_spf_label("Medium Deep").unwrap(), "SPF 30");
        assert_eq!(uv_risk_description(6.0).unwrap(), "High UV - Moderate exposure");
        assert_eq!(uv_risk_description(11.0).unwrap(), "Extreme UV - Not safe to tan");
        assert_eq!(uv_risk_description(1e30).unwrap(), "Extreme UV - Not safe to tan");
    }

    #[test]
    fn test_best_time_of_day_json() {
        let forecast = r#"{
            "utc_offset_seconds": 0,
            "samples": [
                {"timestamp":"2024-12-01T09:00:00Z","temperature_celsius":22,"uv_index":7,"cloud_coverage_percent":0,"condition":"Clear"},
                {"timestamp":"2024-12-01T15:00:00Z","temperature_celsius":24,"uv_index":2,"cloud_coverage_percent":0,"condition":"Clear"}
            ]
        }"#;
        let best = best_time_of_day_json("medium", forecast).unwrap().unwrap();
        assert!(best.contains("2024-12-01T15:00:00Z"));
    }

    #[test]
    fn test_best_time_of_day_json_none() {
        let forecast = r#"{"samples":[]}"#;
        assert!(best_time_of_day_json("medium", forecast).unwrap().is_none());
    }

    #[test]
    fn test_target_shades() {
        assert_eq!(target_shades("Medium Deep").unwrap(), r#"["deep"]"#);
        assert_eq!(target_shades("deep").unwrap(), "[]");
    }

    #[test]
    fn test_shade_from_fitzpatrick() {
        assert_eq!(shade_from_fitzpatrick("Fitzpatrick Type II"), "light");
        assert_eq!(shade_from_fitzpatrick("no classification given"), "medium");
    }

    #[test]
    fn test_build_tanning_plan() {
        let profile = r#"{
            "current_shade": "medium",
            "target_shade": "deep",
            "goal": "deep_tan",
            "timeframe": "ongoing_maintenance",
            "method": "combination",
            "frequency": "occasionally"
        }"#;
        let json = build_tanning_plan(profile).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["recommended_spf"], "thirty");
        assert_eq!(value["maintenance"]["frequency"], "every other week");
        assert!(value["total_days"].is_null());
    }
}
