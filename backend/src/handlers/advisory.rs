//! HTTP handlers for exposure advisory endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use shared::{AdvisoryResult, SkinClassification, WeatherSample};

use crate::error::AppResult;
use crate::services::advisory::{CurrentAdvisory, ForecastAdvisory};
use crate::AppState;

/// Query parameters for location-based advisories
#[derive(Debug, Deserialize, Validate)]
pub struct LocationQuery {
    /// Shade label ("Light Medium") or key ("light_medium")
    pub shade: String,
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Body for evaluating a client-selected reading
#[derive(Debug, Deserialize)]
pub struct EvaluateInput {
    pub shade: String,
    pub sample: WeatherSample,
}

/// Evaluate a reading chosen by the client (UV selection or time slot)
pub async fn evaluate_reading(
    State(state): State<AppState>,
    Json(input): Json<EvaluateInput>,
) -> AppResult<Json<AdvisoryResult>> {
    let shade: SkinClassification = input.shade.parse()?;
    let result = state.advisory.evaluate_reading(shade, &input.sample)?;
    Ok(Json(result))
}

/// Advisory for the current reading at a location
pub async fn get_current_advisory(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<CurrentAdvisory>> {
    query.validate()?;
    let shade: SkinClassification = query.shade.parse()?;
    let advisory = state
        .advisory
        .current(shade, query.latitude, query.longitude)
        .await;
    Ok(Json(advisory))
}

/// Advisory for each daylight forecast slot at a location
pub async fn get_forecast_advisory(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<ForecastAdvisory>> {
    query.validate()?;
    let shade: SkinClassification = query.shade.parse()?;
    let forecast = state
        .advisory
        .forecast(shade, query.latitude, query.longitude)
        .await;
    Ok(Json(forecast))
}
