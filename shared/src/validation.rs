//! Validation utilities for weather readings entering the advisory engine
//!
//! The engine assumes readings are already inside their documented domains.
//! Provider adapters clamp with these helpers before calling it.

use rust_decimal::Decimal;

use crate::models::WeatherSample;

/// Highest UV index accepted from a provider
pub const MAX_UV_INDEX: i64 = 20;

// ============================================================================
// Range Validations
// ============================================================================

/// Validate a UV index is non-negative and plausible
pub fn validate_uv_index(uv_index: Decimal) -> Result<(), &'static str> {
    if uv_index < Decimal::ZERO {
        return Err("UV index cannot be negative");
    }
    if uv_index > Decimal::from(MAX_UV_INDEX) {
        return Err("UV index must be at most 20");
    }
    Ok(())
}

/// Validate cloud coverage is a percentage
pub fn validate_cloud_coverage(percent: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&percent) {
        return Err("Cloud coverage must be between 0 and 100%");
    }
    Ok(())
}

/// Validate every field the engine reads from a sample
pub fn validate_sample(sample: &WeatherSample) -> Result<(), &'static str> {
    validate_uv_index(sample.uv_index)?;
    validate_cloud_coverage(sample.cloud_coverage_percent)?;
    Ok(())
}

// ============================================================================
// Clamping
// ============================================================================

pub fn clamp_uv_index(uv_index: Decimal) -> Decimal {
    uv_index.clamp(Decimal::ZERO, Decimal::from(MAX_UV_INDEX))
}

pub fn clamp_cloud_coverage(percent: i32) -> i32 {
    percent.clamp(0, 100)
}

/// UV index from a raw float reading, saturating outside the accepted range.
/// None for NaN.
pub fn uv_index_from_f64(value: f64) -> Option<Decimal> {
    if value.is_nan() {
        return None;
    }
    let uv_index = Decimal::try_from(value).unwrap_or(if value > 0.0 {
        Decimal::from(MAX_UV_INDEX)
    } else {
        Decimal::ZERO
    });
    Some(clamp_uv_index(uv_index))
}

/// Bring a provider reading into the engine's input domain
pub fn clamp_sample(mut sample: WeatherSample) -> WeatherSample {
    sample.uv_index = clamp_uv_index(sample.uv_index);
    sample.cloud_coverage_percent = clamp_cloud_coverage(sample.cloud_coverage_percent);
    sample
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_uv_index_validation() {
        assert!(validate_uv_index(Decimal::ZERO).is_ok());
        assert!(validate_uv_index(Decimal::new(115, 1)).is_ok());
        assert!(validate_uv_index(Decimal::from(20)).is_ok());
        assert!(validate_uv_index(Decimal::from(-1)).is_err());
        assert!(validate_uv_index(Decimal::from(21)).is_err());
    }

    #[test]
    fn test_cloud_coverage_validation() {
        assert!(validate_cloud_coverage(0).is_ok());
        assert!(validate_cloud_coverage(70).is_ok());
        assert!(validate_cloud_coverage(100).is_ok());
        assert!(validate_cloud_coverage(-5).is_err());
        assert!(validate_cloud_coverage(101).is_err());
    }

    #[test]
    fn test_clamping() {
        assert_eq!(clamp_uv_index(Decimal::from(-2)), Decimal::ZERO);
        assert_eq!(clamp_uv_index(Decimal::from(25)), Decimal::from(20));
        assert_eq!(clamp_uv_index(Decimal::from(7)), Decimal::from(7));
        assert_eq!(clamp_cloud_coverage(130), 100);
        assert_eq!(clamp_cloud_coverage(-1), 0);
    }

    #[test]
    fn test_uv_index_from_f64_saturates() {
        assert_eq!(uv_index_from_f64(7.0), Some(Decimal::from(7)));
        assert_eq!(uv_index_from_f64(f64::INFINITY), Some(Decimal::from(MAX_UV_INDEX)));
        assert_eq!(uv_index_from_f64(1e30), Some(Decimal::from(MAX_UV_INDEX)));
        assert_eq!(uv_index_from_f64(f64::NEG_INFINITY), Some(Decimal::ZERO));
        assert_eq!(uv_index_from_f64(-1e30), Some(Decimal::ZERO));
        assert_eq!(uv_index_from_f64(f64::NAN), None);
    }

    #[test]
    fn test_clamped_sample_validates() {
        let raw = WeatherSample {
            uv_index: Decimal::from(-3),
            cloud_coverage_percent: 140,
            ..WeatherSample::fallback(Utc::now())
        };
        assert!(validate_sample(&raw).is_err());
        assert!(validate_sample(&clamp_sample(raw)).is_ok());
    }
}
