//! Program generation engine.
//!
//! Builds a program in four steps:
//! - Resolve per-category minute targets (RPE buckets or goal distribution)
//! - Drop exercises that load painful areas
//! - Greedily pack each category towards its target
//! - Summarize the focus area
//!
//! Generation never fails for well-formed input. Validation of RPE and pain
//! labels happens before this module is called.

use crate::catalog::Catalog;
use crate::focus::{most_frequent_area, FULL_BODY_FALLBACK};
use crate::history::ProgramSink;
use crate::log_store::WellbeingSource;
use crate::packer::pack_by_minutes;
use crate::pain::{default_pain_map, filter_by_pain};
use crate::recommendation::wellbeing_recommendations;
use crate::targets::{targets_for_goal, targets_for_rpe};
use crate::{total_minutes, Category, Config, GeneratedProgram, VolumeTarget, WorkoutGoal};
use chrono::Utc;
use uuid::Uuid;

/// Inputs for one generation call
#[derive(Clone, Debug)]
pub struct ProgramRequest {
    /// Already clamped to 1..=10
    pub rpe: u8,
    pub pain_areas: Vec<String>,
    pub goal: Option<WorkoutGoal>,
    /// Session minutes for goal-based programs
    pub duration: Option<u32>,
    pub use_wellbeing_data: bool,
}

impl ProgramRequest {
    /// RPE-driven request with no goal and no wellbeing lookup
    pub fn from_rpe(rpe: u8, pain_areas: Vec<String>) -> Self {
        Self {
            rpe,
            pain_areas,
            goal: None,
            duration: None,
            use_wellbeing_data: false,
        }
    }
}

/// Minute targets for a request
///
/// A goal switches to the distribution-based targets, using the configured
/// default duration when none is given. Without a goal the RPE tables apply.
pub fn resolve_targets(config: &Config, request: &ProgramRequest) -> VolumeTarget {
    let program = &config.program;
    match &request.goal {
        Some(goal) => {
            let duration = request.duration.unwrap_or(program.default_duration);
            targets_for_goal(goal, duration)
        }
        None => {
            if let Some(duration) = request.duration {
                tracing::debug!(
                    "Duration {} min ignored without a goal; using RPE targets",
                    duration
                );
            }
            targets_for_rpe(request.rpe, &program.rpe, &program.targets)
        }
    }
}

/// Generate a program from the catalog
pub fn generate_program(
    catalog: &Catalog,
    config: &Config,
    request: &ProgramRequest,
    wellbeing: &dyn WellbeingSource,
) -> GeneratedProgram {
    let recommendations = if request.use_wellbeing_data {
        let latest = match wellbeing.latest_log() {
            Ok(latest) => latest,
            Err(e) => {
                tracing::warn!("Unable to read latest wellbeing log: {}. Ignoring.", e);
                None
            }
        };
        Some(wellbeing_recommendations(latest.as_ref(), &config.wellbeing))
    } else {
        None
    };

    let targets = resolve_targets(config, request);
    tracing::info!(
        "Generating program: rpe {}, goal {:?}, pain {:?}, targets {:?}",
        request.rpe,
        request.goal.as_ref().map(|g| g.id.as_str()),
        request.pain_areas,
        targets
    );

    let pain_map = default_pain_map();
    let [stretch, lfc, meditation] = Category::ALL.map(|category| {
        let available = filter_by_pain(catalog.exercises(category), &request.pain_areas, pain_map);
        let selected = pack_by_minutes(
            &available,
            targets.for_category(category),
            config.program.tolerance,
        );
        tracing::debug!(
            "{}: {} of {} candidates, {} min",
            category.as_str(),
            selected.len(),
            available.len(),
            total_minutes(&selected)
        );
        selected
    });

    let total = total_minutes(&stretch) + total_minutes(&lfc) + total_minutes(&meditation);

    let area_lists: Vec<&[String]> = stretch
        .iter()
        .chain(lfc.iter())
        .map(|e| e.areas.as_slice())
        .collect();
    let focus_area =
        most_frequent_area(&area_lists).unwrap_or_else(|| FULL_BODY_FALLBACK.to_string());

    tracing::info!("Program ready: {} min, focus {}", total, focus_area);

    GeneratedProgram {
        id: Uuid::new_v4(),
        rpe: request.rpe,
        pain_areas: request.pain_areas.clone(),
        goal: request.goal.as_ref().map(|g| g.id.clone()),
        stretch,
        lfc,
        meditation,
        total_minutes: total,
        focus_area,
        recommendations,
        timestamp: Utc::now(),
    }
}

/// Generate a program and append it to history
///
/// A history failure is logged and otherwise ignored; the program is
/// returned either way.
pub fn generate_and_record(
    catalog: &Catalog,
    config: &Config,
    request: &ProgramRequest,
    wellbeing: &dyn WellbeingSource,
    history: &mut dyn ProgramSink,
) -> GeneratedProgram {
    let program = generate_program(catalog, config, request, wellbeing);
    if let Err(e) = history.append(&program) {
        tracing::warn!("Failed to save program {} to history: {}", program.id, e);
    }
    program
}
