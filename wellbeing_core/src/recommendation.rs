//! Recommendations derived from the latest wellbeing log.
//!
//! These are informational: they never change how a program is packed.

use crate::config::WellbeingThresholds;
use crate::{Intensity, SuggestionKind, WellbeingLog, WellbeingRecommendation, WorkoutSuggestion};

const NEUTRAL_RPE: i32 = 5;

/// Suggested RPE and message for the next program
pub fn wellbeing_recommendations(
    latest: Option<&WellbeingLog>,
    thresholds: &WellbeingThresholds,
) -> WellbeingRecommendation {
    let Some(log) = latest else {
        return WellbeingRecommendation {
            suggested_rpe: NEUTRAL_RPE as u8,
            message: "No wellbeing data yet. A moderate load is recommended.".into(),
            pain_areas: Vec::new(),
        };
    };

    let mut rpe = NEUTRAL_RPE;
    let mut messages: Vec<&str> = Vec::new();

    if log.sleep_quality <= thresholds.sleep_poor {
        rpe -= 2;
        messages.push("Poor sleep - intensity reduced");
    } else if log.sleep_quality >= thresholds.sleep_excellent {
        rpe += 1;
        messages.push("Excellent sleep - load can be increased");
    }

    if log.energy_level <= thresholds.energy_low {
        rpe -= 2;
        messages.push("Low energy - rest is recommended");
    } else if log.energy_level >= thresholds.energy_very_high {
        rpe += 1;
        messages.push("High energy - you can train harder");
    }

    if log.muscle_pain.len() >= thresholds.significant_pain_count {
        rpe -= 1;
        messages.push("Pain in several areas - load reduced");
    }

    let suggested_rpe = rpe.clamp(1, 10) as u8;
    let message = if messages.is_empty() {
        "Normal condition".to_string()
    } else {
        messages.join(". ")
    };

    tracing::debug!("Wellbeing suggests RPE {} ({})", suggested_rpe, message);

    WellbeingRecommendation {
        suggested_rpe,
        message,
        pain_areas: log.muscle_pain.clone(),
    }
}

fn activities(items: &[&str]) -> Vec<String> {
    items.iter().map(|a| (*a).to_string()).collect()
}

/// Kind of session to do today, for dashboard display
pub fn workout_suggestion(
    latest: Option<&WellbeingLog>,
    thresholds: &WellbeingThresholds,
) -> WorkoutSuggestion {
    let Some(log) = latest else {
        return WorkoutSuggestion {
            kind: SuggestionKind::Rest,
            title: "Start tracking your wellbeing".into(),
            description: "Add a wellbeing entry to get personalised workout suggestions.".into(),
            intensity: Intensity::None,
            activities: Vec::new(),
        };
    };

    let pain = &log.muscle_pain;

    if log.energy_level <= thresholds.energy_low || log.sleep_quality <= thresholds.sleep_poor {
        return WorkoutSuggestion {
            kind: SuggestionKind::Rest,
            title: "Rest and recovery".into(),
            description: "Energy or sleep quality is low. Rest, light stretching or a walk \
                          outdoors is recommended."
                .into(),
            intensity: Intensity::Low,
            activities: activities(&["Stretching", "Walking", "Breathing exercises"]),
        };
    }

    if pain.len() >= thresholds.significant_pain_count {
        return WorkoutSuggestion {
            kind: SuggestionKind::Recovery,
            title: "Recovery session".into(),
            description: "Muscle pain in several areas. Light recovery activity is recommended."
                .into(),
            intensity: Intensity::Low,
            activities: activities(&["Light stretching", "Yoga", "Swimming", "Self-massage"]),
        };
    }

    if log.energy_level == thresholds.energy_moderate
        || log.sleep_quality == thresholds.sleep_moderate
    {
        let avoid = if pain.is_empty() {
            String::new()
        } else {
            format!(" Avoid loading: {}.", pain.join(", "))
        };
        return WorkoutSuggestion {
            kind: SuggestionKind::Moderate,
            title: "Moderate session".into(),
            description: format!("Your condition allows a moderate session.{}", avoid),
            intensity: Intensity::Moderate,
            activities: activities(&[
                "Moderate cardio",
                "Functional exercises",
                "Light strength work",
            ]),
        };
    }

    if log.energy_level >= thresholds.energy_high && log.sleep_quality >= thresholds.sleep_good {
        let description = if pain.is_empty() {
            "Great condition for an intensive session!".to_string()
        } else {
            format!(
                "Good condition for an intensive session. Be careful with: {}.",
                pain.join(", ")
            )
        };
        return WorkoutSuggestion {
            kind: SuggestionKind::Intensive,
            title: "Intensive session".into(),
            description,
            intensity: Intensity::High,
            activities: activities(&["Strength training", "HIIT", "Intense cardio"]),
        };
    }

    WorkoutSuggestion {
        kind: SuggestionKind::Moderate,
        title: "Moderate activity".into(),
        description: "Your condition allows moderate exercise.".into(),
        intensity: Intensity::Moderate,
        activities: activities(&["Cardio", "Functional training", "Stretching"]),
    }
}

/// Encouragement based on how many logs were written this week
pub fn motivation_message(logs_this_week: usize) -> &'static str {
    match logs_this_week {
        0 => "Start tracking your wellbeing for more accurate suggestions!",
        n if n >= 5 => "Great job! You track your condition regularly.",
        n if n >= 3 => "Good progress! Keep logging your wellbeing.",
        _ => "Try logging more often for more accurate suggestions.",
    }
}
