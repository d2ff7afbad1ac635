//! Tanning plan models

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{SkinClassification, SpfTier};

/// What the user wants to achieve
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TanningGoal {
    LightTan,
    MediumTan,
    DeepTan,
    MaintainCurrent,
}

/// How long the user gives themselves to reach the goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    TwoWeeks,
    ThreeWeeks,
    FourWeeks,
    OngoingMaintenance,
}

impl Timeframe {
    /// Length in days; None for open-ended maintenance
    pub fn days(&self) -> Option<u32> {
        match self {
            Timeframe::TwoWeeks => Some(14),
            Timeframe::ThreeWeeks => Some(21),
            Timeframe::FourWeeks => Some(28),
            Timeframe::OngoingMaintenance => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TanningMethod {
    NaturalSun,
    TanningBed,
    Combination,
}

impl std::fmt::Display for TanningMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TanningMethod::NaturalSun => write!(f, "Natural Sun"),
            TanningMethod::TanningBed => write!(f, "Tanning Bed"),
            TanningMethod::Combination => write!(f, "Combination"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TanningFrequency {
    /// Every day
    Daily,
    /// 2-3 sessions per week
    Weekly,
    /// About once per week
    Occasionally,
}

impl TanningFrequency {
    pub fn sessions_per_week(&self) -> SessionRange {
        match self {
            TanningFrequency::Daily => SessionRange { min: 7, max: 7 },
            TanningFrequency::Weekly => SessionRange { min: 2, max: 3 },
            TanningFrequency::Occasionally => SessionRange { min: 1, max: 1 },
        }
    }
}

/// Answers collected during onboarding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TanningProfile {
    pub current_shade: SkinClassification,
    pub target_shade: SkinClassification,
    pub goal: TanningGoal,
    pub timeframe: Timeframe,
    pub method: TanningMethod,
    pub frequency: TanningFrequency,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("target shade {target} is lighter than current shade {current}")]
    TargetLighterThanCurrent {
        current: SkinClassification,
        target: SkinClassification,
    },
}

/// Inclusive range of minutes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MinuteRange {
    pub min: u32,
    pub max: u32,
}

impl std::fmt::Display for MinuteRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Inclusive range of sessions per week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRange {
    pub min: u32,
    pub max: u32,
}

impl std::fmt::Display for SessionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepCategory {
    Preparation,
    Protection,
    Exposure,
    Progression,
    Routine,
    Tracking,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanStep {
    pub number: u32,
    pub title: String,
    pub description: String,
    pub category: StepCategory,
}

/// Routine after the target shade is reached
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaintenancePlan {
    pub frequency: String,
    pub duration: MinuteRange,
    pub spf: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TanningPlan {
    pub profile: TanningProfile,
    pub recommended_spf: SpfTier,
    pub initial_exposure: MinuteRange,
    pub sessions_per_week: SessionRange,
    pub total_days: Option<u32>,
    /// Session count range over the timeframe, when it is bounded
    pub estimated_sessions: Option<SessionRange>,
    pub steps: Vec<PlanStep>,
    pub maintenance: MaintenancePlan,
}
