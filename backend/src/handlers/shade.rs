//! HTTP handlers for the skin shade catalogue

use axum::{extract::Path, Json};
use serde::Serialize;

use shared::{base_exposure_minutes, recommended_spf, SkinBand, SkinClassification, SpfTier};

use crate::error::AppResult;

/// One entry of the shade picker
#[derive(Debug, Serialize)]
pub struct ShadeInfo {
    pub key: SkinClassification,
    pub label: String,
    pub order: u8,
    pub band: SkinBand,
    pub color: String,
    pub recommended_spf: SpfTier,
    pub base_minutes: u32,
}

impl From<SkinClassification> for ShadeInfo {
    fn from(shade: SkinClassification) -> Self {
        Self {
            key: shade,
            label: shade.label().to_string(),
            order: shade.order(),
            band: shade.band(),
            color: shade.hex_color().to_string(),
            recommended_spf: recommended_spf(shade),
            base_minutes: base_exposure_minutes(shade),
        }
    }
}

/// List all shades, lightest first
pub async fn list_shades() -> Json<Vec<ShadeInfo>> {
    Json(
        SkinClassification::all()
            .iter()
            .copied()
            .map(ShadeInfo::from)
            .collect(),
    )
}

/// Shades a user may pick as a target (strictly darker)
pub async fn list_target_shades(Path(shade): Path<String>) -> AppResult<Json<Vec<ShadeInfo>>> {
    let current: SkinClassification = shade.parse()?;
    Ok(Json(
        current
            .darker_options()
            .into_iter()
            .map(ShadeInfo::from)
            .collect(),
    ))
}
