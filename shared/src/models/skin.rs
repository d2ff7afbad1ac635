//! Skin shade classification models

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Skin shade on a six-step Fitzpatrick-like scale, lightest to darkest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SkinClassification {
    VeryLight,
    Light,
    LightMedium,
    Medium,
    MediumDeep,
    Deep,
}

/// Coarse sensitivity band used by every exposure and SPF rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkinBand {
    Light,
    Medium,
    Dark,
}

/// Errors raised while mapping external input onto a classification
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShadeError {
    #[error("unknown skin shade: {0}")]
    UnknownShade(String),

    #[error("shade order {0} is outside 0-5")]
    OrderOutOfRange(u8),

    #[error("no Fitzpatrick type found in: {0}")]
    UnrecognizedFitzpatrick(String),
}

const ALL_SHADES: [SkinClassification; 6] = [
    SkinClassification::VeryLight,
    SkinClassification::Light,
    SkinClassification::LightMedium,
    SkinClassification::Medium,
    SkinClassification::MediumDeep,
    SkinClassification::Deep,
];

impl SkinClassification {
    /// All classifications in ascending order
    pub fn all() -> &'static [SkinClassification] {
        &ALL_SHADES
    }

    /// Rank 0 (lightest) to 5 (darkest)
    pub fn order(&self) -> u8 {
        match self {
            SkinClassification::VeryLight => 0,
            SkinClassification::Light => 1,
            SkinClassification::LightMedium => 2,
            SkinClassification::Medium => 3,
            SkinClassification::MediumDeep => 4,
            SkinClassification::Deep => 5,
        }
    }

    pub fn from_order(order: u8) -> Result<Self, ShadeError> {
        ALL_SHADES
            .get(usize::from(order))
            .copied()
            .ok_or(ShadeError::OrderOutOfRange(order))
    }

    /// Display name shown in the shade picker
    pub fn label(&self) -> &'static str {
        match self {
            SkinClassification::VeryLight => "Very Light",
            SkinClassification::Light => "Light",
            SkinClassification::LightMedium => "Light Medium",
            SkinClassification::Medium => "Medium",
            SkinClassification::MediumDeep => "Medium Deep",
            SkinClassification::Deep => "Deep",
        }
    }

    /// Swatch colour used by clients
    pub fn hex_color(&self) -> &'static str {
        match self {
            SkinClassification::VeryLight => "#FFE4C4",
            SkinClassification::Light => "#F5DEB3",
            SkinClassification::LightMedium => "#DEB887",
            SkinClassification::Medium => "#D2B48C",
            SkinClassification::MediumDeep => "#B3612E",
            SkinClassification::Deep => "#8B4513",
        }
    }

    /// The one place a shade is mapped to its band
    pub fn band(&self) -> SkinBand {
        match self {
            SkinClassification::VeryLight
            | SkinClassification::Light
            | SkinClassification::LightMedium => SkinBand::Light,
            SkinClassification::Medium | SkinClassification::MediumDeep => SkinBand::Medium,
            SkinClassification::Deep => SkinBand::Dark,
        }
    }

    /// Shades strictly darker than this one, lightest first
    pub fn darker_options(&self) -> Vec<SkinClassification> {
        ALL_SHADES
            .iter()
            .copied()
            .filter(|shade| shade.order() > self.order())
            .collect()
    }

    /// Map free text from an image-analysis service ("... Type III ...")
    /// onto the scale. Type N lands on order N-1.
    pub fn from_fitzpatrick_text(text: &str) -> Result<Self, ShadeError> {
        let lower = text.to_lowercase();
        let mut rest = lower.as_str();

        while let Some(pos) = rest.find("type") {
            let after = rest[pos + "type".len()..].trim_start();
            let token: String = after
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric())
                .collect();

            if let Some(fitzpatrick) = parse_fitzpatrick_numeral(&token) {
                return Self::from_order(fitzpatrick - 1);
            }
            rest = &rest[pos + "type".len()..];
        }

        Err(ShadeError::UnrecognizedFitzpatrick(text.to_string()))
    }
}

fn parse_fitzpatrick_numeral(token: &str) -> Option<u8> {
    match token {
        "i" | "1" => Some(1),
        "ii" | "2" => Some(2),
        "iii" | "3" => Some(3),
        "iv" | "4" => Some(4),
        "v" | "5" => Some(5),
        "vi" | "6" => Some(6),
        _ => None,
    }
}

impl std::fmt::Display for SkinClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SkinClassification {
    type Err = ShadeError;

    /// Accepts the display label ("Light Medium") or the wire key
    /// ("light_medium"), ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect();

        ALL_SHADES
            .iter()
            .copied()
            .find(|shade| shade.label().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ShadeError::UnknownShade(s.to_string()))
    }
}

impl std::fmt::Display for SkinBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinBand::Light => write!(f, "Light"),
            SkinBand::Medium => write!(f, "Medium"),
            SkinBand::Dark => write!(f, "Dark"),
        }
    }
}

/// Check that a target shade does not ask the skin to get lighter
pub fn validate_target(
    current: SkinClassification,
    target: SkinClassification,
) -> Result<(), &'static str> {
    if target.order() < current.order() {
        return Err("Target shade cannot be lighter than the current shade");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_monotonic() {
        for pair in SkinClassification::all().windows(2) {
            assert!(pair[0].order() < pair[1].order());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_from_order_roundtrip_and_range() {
        for shade in SkinClassification::all() {
            assert_eq!(SkinClassification::from_order(shade.order()), Ok(*shade));
        }
        assert_eq!(
            SkinClassification::from_order(6),
            Err(ShadeError::OrderOutOfRange(6))
        );
    }

    #[test]
    fn test_band_table() {
        assert_eq!(SkinClassification::VeryLight.band(), SkinBand::Light);
        assert_eq!(SkinClassification::Light.band(), SkinBand::Light);
        // "Light Medium" belongs to the light band
        assert_eq!(SkinClassification::LightMedium.band(), SkinBand::Light);
        assert_eq!(SkinClassification::Medium.band(), SkinBand::Medium);
        assert_eq!(SkinClassification::MediumDeep.band(), SkinBand::Medium);
        assert_eq!(SkinClassification::Deep.band(), SkinBand::Dark);
    }

    #[test]
    fn test_parse_labels_and_keys() {
        assert_eq!("Very Light".parse(), Ok(SkinClassification::VeryLight));
        assert_eq!("medium deep".parse(), Ok(SkinClassification::MediumDeep));
        assert_eq!("light_medium".parse(), Ok(SkinClassification::LightMedium));
        assert_eq!(" DEEP ".parse(), Ok(SkinClassification::Deep));
        assert!("Olive".parse::<SkinClassification>().is_err());
        assert!("".parse::<SkinClassification>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&SkinClassification::MediumDeep).unwrap();
        assert_eq!(json, "\"medium_deep\"");
        let shade: SkinClassification = serde_json::from_str("\"very_light\"").unwrap();
        assert_eq!(shade, SkinClassification::VeryLight);
    }

    #[test]
    fn test_darker_options() {
        let options = SkinClassification::Medium.darker_options();
        assert_eq!(
            options,
            vec![SkinClassification::MediumDeep, SkinClassification::Deep]
        );
        assert!(SkinClassification::Deep.darker_options().is_empty());
        assert_eq!(SkinClassification::VeryLight.darker_options().len(), 5);
    }

    #[test]
    fn test_validate_target() {
        assert!(validate_target(SkinClassification::Light, SkinClassification::Medium).is_ok());
        assert!(validate_target(SkinClassification::Medium, SkinClassification::Medium).is_ok());
        assert!(validate_target(SkinClassification::Deep, SkinClassification::Light).is_err());
    }

    #[test]
    fn test_fitzpatrick_lookup() {
        let cases = [
            ("Current skin tone: Type I, burns easily", SkinClassification::VeryLight),
            ("Fitzpatrick type II", SkinClassification::Light),
            ("1) Fitzpatrick Type III. 2) Warm undertone", SkinClassification::LightMedium),
            ("TYPE IV", SkinClassification::Medium),
            ("skin type v with neutral undertone", SkinClassification::MediumDeep),
            ("Type VI", SkinClassification::Deep),
            ("type 3", SkinClassification::LightMedium),
        ];

        for (text, expected) in cases {
            assert_eq!(SkinClassification::from_fitzpatrick_text(text), Ok(expected), "{text}");
        }
    }

    #[test]
    fn test_fitzpatrick_skips_unrelated_type_words() {
        let text = "Undertone type: warm. Fitzpatrick Type V";
        assert_eq!(
            SkinClassification::from_fitzpatrick_text(text),
            Ok(SkinClassification::MediumDeep)
        );
    }

    #[test]
    fn test_fitzpatrick_unrecognized() {
        assert!(matches!(
            SkinClassification::from_fitzpatrick_text("warm olive skin"),
            Err(ShadeError::UnrecognizedFitzpatrick(_))
        ));
        assert!(SkinClassification::from_fitzpatrick_text("Type VII").is_err());
    }
}
