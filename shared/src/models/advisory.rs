//! Exposure advisory models

use serde::{Deserialize, Serialize};

/// Sunscreen strength bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SpfTier {
    Fifteen,
    Thirty,
    FiftyPlus,
}

impl std::fmt::Display for SpfTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpfTier::Fifteen => write!(f, "SPF 15"),
            SpfTier::Thirty => write!(f, "SPF 30"),
            SpfTier::FiftyPlus => write!(f, "SPF 50+"),
        }
    }
}

/// Qualitative UV risk, most to least severe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    Extreme,
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl RiskLabel {
    /// One-line guidance shown next to the UV reading
    pub fn description(&self) -> &'static str {
        match self {
            RiskLabel::Extreme => "Extreme UV - Not safe to tan",
            RiskLabel::VeryHigh => "Very high UV - Limited exposure recommended",
            RiskLabel::High => "High UV - Moderate exposure",
            RiskLabel::Moderate => "Moderate UV - Good conditions",
            RiskLabel::Low => "Low UV - Extended exposure possible",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLabel::Extreme => write!(f, "Extreme"),
            RiskLabel::VeryHigh => write!(f, "Very High"),
            RiskLabel::High => write!(f, "High"),
            RiskLabel::Moderate => write!(f, "Moderate"),
            RiskLabel::Low => write!(f, "Low"),
        }
    }
}

/// Outcome of one advisory evaluation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdvisoryResult {
    /// Safe exposure in minutes; 0 means do not tan now
    pub recommended_minutes: u32,
    pub recommended_spf: SpfTier,
    pub risk_label: RiskLabel,
    /// False iff `recommended_minutes` is 0
    pub is_safe: bool,
}
