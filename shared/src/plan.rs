//! Rule-based tanning plan builder
//!
//! Figures are derived from the same shade band table as the advisory
//! engine so the plan and the live recommendation never disagree.

use crate::advisory::recommended_spf;
use crate::models::{
    validate_target, MaintenancePlan, MinuteRange, PlanStep, ProfileError, SessionRange,
    SkinBand, StepCategory, TanningFrequency, TanningPlan, TanningProfile,
};

/// Starting session length per band
pub fn initial_exposure(band: SkinBand) -> MinuteRange {
    match band {
        SkinBand::Light => MinuteRange { min: 5, max: 10 },
        SkinBand::Medium => MinuteRange { min: 10, max: 15 },
        SkinBand::Dark => MinuteRange { min: 15, max: 20 },
    }
}

/// Minutes added every other session
pub fn exposure_increase(band: SkinBand) -> MinuteRange {
    match band {
        SkinBand::Light => MinuteRange { min: 2, max: 3 },
        SkinBand::Medium => MinuteRange { min: 3, max: 5 },
        SkinBand::Dark => MinuteRange { min: 5, max: 7 },
    }
}

fn maintenance_duration(band: SkinBand) -> MinuteRange {
    match band {
        SkinBand::Light => MinuteRange { min: 15, max: 20 },
        SkinBand::Medium => MinuteRange { min: 20, max: 25 },
        SkinBand::Dark => MinuteRange { min: 25, max: 30 },
    }
}

fn maintenance_spf(band: SkinBand) -> &'static str {
    match band {
        SkinBand::Light => "30+",
        SkinBand::Medium => "15-30",
        SkinBand::Dark => "15",
    }
}

fn routine_phrase(frequency: TanningFrequency) -> &'static str {
    match frequency {
        TanningFrequency::Daily => "daily",
        TanningFrequency::Weekly => "2-3 times per week",
        TanningFrequency::Occasionally => "once per week",
    }
}

fn maintenance_frequency(frequency: TanningFrequency) -> &'static str {
    match frequency {
        TanningFrequency::Daily => "2-3 times per week",
        TanningFrequency::Weekly => "once per week",
        TanningFrequency::Occasionally => "every other week",
    }
}

/// Validate the profile and lay out the step-by-step plan
pub fn build_plan(profile: &TanningProfile) -> Result<TanningPlan, ProfileError> {
    validate_target(profile.current_shade, profile.target_shade).map_err(|_| {
        ProfileError::TargetLighterThanCurrent {
            current: profile.current_shade,
            target: profile.target_shade,
        }
    })?;

    let band = profile.current_shade.band();
    let spf = recommended_spf(profile.current_shade);
    let initial = initial_exposure(band);
    let increase = exposure_increase(band);
    let sessions_per_week = profile.frequency.sessions_per_week();
    let total_days = profile.timeframe.days();
    let estimated_sessions = total_days.map(|days| {
        let weeks = days / 7;
        SessionRange {
            min: weeks * sessions_per_week.min,
            max: weeks * sessions_per_week.max,
        }
    });

    let step_specs = [
        (
            "Skin Preparation",
            "Exfoliate your skin and moisturize well 24 hours before starting your tanning routine."
                .to_string(),
            StepCategory::Preparation,
        ),
        (
            "SPF Protection",
            format!("Apply {} 30 minutes before sun exposure.", spf),
            StepCategory::Protection,
        ),
        (
            "Initial Exposure",
            format!(
                "Start with {} minutes of {} exposure during optimal UV hours (10 AM - 4 PM).",
                initial,
                profile.method.to_string().to_lowercase()
            ),
            StepCategory::Exposure,
        ),
        (
            "Gradual Increase",
            format!(
                "Increase exposure time by {} minutes every other session.",
                increase
            ),
            StepCategory::Progression,
        ),
        (
            "Regular Sessions",
            format!(
                "Maintain {} tanning sessions at your target duration.",
                routine_phrase(profile.frequency)
            ),
            StepCategory::Routine,
        ),
        (
            "Progress Assessment",
            "Take progress photos every week to track your tanning journey.".to_string(),
            StepCategory::Tracking,
        ),
    ];

    let steps = step_specs
        .into_iter()
        .zip(1u32..)
        .map(|((title, description, category), number)| PlanStep {
            number,
            title: title.to_string(),
            description,
            category,
        })
        .collect();

    let maintenance = MaintenancePlan {
        frequency: maintenance_frequency(profile.frequency).to_string(),
        duration: maintenance_duration(band),
        spf: maintenance_spf(band).to_string(),
        tips: vec![
            "Maintain regular moisturizing routine".to_string(),
            "Continue using appropriate SPF protection".to_string(),
            "Stay hydrated before and after sessions".to_string(),
            "Monitor skin health regularly".to_string(),
        ],
    };

    Ok(TanningPlan {
        profile: profile.clone(),
        recommended_spf: spf,
        initial_exposure: initial,
        sessions_per_week,
        total_days,
        estimated_sessions,
        steps,
        maintenance,
    })
}
