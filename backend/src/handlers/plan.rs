//! HTTP handlers for tanning plans

use axum::Json;

use shared::{build_plan, TanningPlan, TanningProfile};

use crate::error::AppResult;

/// Build a plan from the onboarding answers
pub async fn create_plan(Json(profile): Json<TanningProfile>) -> AppResult<Json<TanningPlan>> {
    let plan = build_plan(&profile)?;
    tracing::info!(
        current = %profile.current_shade,
        target = %profile.target_shade,
        "Generated tanning plan"
    );
    Ok(Json(plan))
}
