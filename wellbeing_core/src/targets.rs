//! Volume targets: how many minutes each category should get.
//!
//! Two ways to get there:
//! - RPE buckets (low / default / high tables from config)
//! - a workout goal's distribution applied to a total session length

use crate::config::{RpeConfig, TargetTables};
use crate::{Category, Distribution, VolumeTarget, WorkoutGoal};
use once_cell::sync::Lazy;

/// Session lengths offered to the user, in minutes
pub const DURATION_OPTIONS: [u32; 5] = [15, 20, 30, 45, 60];

static WORKOUT_GOALS: Lazy<Vec<WorkoutGoal>> = Lazy::new(build_workout_goals);

/// RPE bucket a value falls into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RpeBucket {
    Low,
    Default,
    High,
}

impl RpeBucket {
    pub fn classify(rpe: u8, thresholds: &RpeConfig) -> Self {
        if rpe >= thresholds.high {
            RpeBucket::High
        } else if rpe <= thresholds.low {
            RpeBucket::Low
        } else {
            RpeBucket::Default
        }
    }
}

/// Targets for an RPE value
pub fn targets_for_rpe(rpe: u8, thresholds: &RpeConfig, tables: &TargetTables) -> VolumeTarget {
    let bucket = RpeBucket::classify(rpe, thresholds);
    tracing::debug!("RPE {} falls in {:?} bucket", rpe, bucket);
    match bucket {
        RpeBucket::High => tables.high,
        RpeBucket::Low => tables.low,
        RpeBucket::Default => tables.default,
    }
}

/// Targets from a goal distribution over `total_duration` minutes
///
/// Each category is rounded on its own, so the three targets need not add up
/// to `total_duration`.
pub fn targets_for_goal(goal: &WorkoutGoal, total_duration: u32) -> VolumeTarget {
    let share = |category: Category| -> u32 {
        let minutes = (f64::from(total_duration) * goal.distribution.for_category(category)).round();
        minutes.max(0.0) as u32
    };

    let targets = VolumeTarget {
        stretch: share(Category::Stretch),
        lfc: share(Category::Lfc),
        meditation: share(Category::Meditation),
    };
    tracing::debug!(
        "Goal '{}' over {} min -> {:?}",
        goal.id,
        total_duration,
        targets
    );
    targets
}

fn goal(
    id: &str,
    name: &str,
    description: &str,
    (stretch, lfc, meditation): (f64, f64, f64),
    focus_areas: &[&str],
) -> WorkoutGoal {
    WorkoutGoal {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        distribution: Distribution {
            stretch,
            lfc,
            meditation,
        },
        focus_areas: focus_areas.iter().map(|a| (*a).to_string()).collect(),
    }
}

fn build_workout_goals() -> Vec<WorkoutGoal> {
    vec![
        goal(
            "general",
            "General workout",
            "Balanced session for overall health",
            (0.4, 0.4, 0.2),
            &[],
        ),
        goal(
            "mobility",
            "Mobility",
            "Joint mobility and flexibility",
            (0.7, 0.2, 0.1),
            &[],
        ),
        goal(
            "strength",
            "Strength",
            "Build muscle strength",
            (0.2, 0.7, 0.1),
            &[],
        ),
        goal(
            "posture",
            "Posture",
            "Posture correction and back strengthening",
            (0.3, 0.6, 0.1),
            &["back", "core", "shoulders"],
        ),
        goal(
            "recovery",
            "Recovery",
            "Gentle recovery after hard training",
            (0.5, 0.2, 0.3),
            &[],
        ),
        goal(
            "cardio",
            "Cardio",
            "Aerobic work for heart and endurance",
            (0.3, 0.6, 0.1),
            &["legs", "core"],
        ),
    ]
}

/// All built-in workout goals
pub fn all_workout_goals() -> &'static [WorkoutGoal] {
    &WORKOUT_GOALS
}

/// Look up a goal by id (case-insensitive)
pub fn get_workout_goal(id: &str) -> Option<&'static WorkoutGoal> {
    WORKOUT_GOALS
        .iter()
        .find(|g| g.id.eq_ignore_ascii_case(id))
}
