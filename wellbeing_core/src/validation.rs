//! Input validation performed before the program engine runs.
//!
//! The engine itself trusts its inputs; callers run these checks first.

use crate::pain::PainAreaMap;
use crate::targets::DURATION_OPTIONS;
use crate::{Error, Result, WellbeingLog};

pub const MAX_MOOD_LEN: usize = 100;
pub const MAX_PAIN_AREAS: usize = 10;

/// Accept an RPE value in 1..=10
pub fn validate_rpe(rpe: u8) -> Result<u8> {
    if (1..=10).contains(&rpe) {
        Ok(rpe)
    } else {
        Err(Error::Validation(format!(
            "RPE must be between 1 and 10, got {}",
            rpe
        )))
    }
}

/// Accept a session length from the offered duration options
pub fn validate_duration(minutes: u32) -> Result<u32> {
    if DURATION_OPTIONS.contains(&minutes) {
        Ok(minutes)
    } else {
        let options: Vec<String> = DURATION_OPTIONS.iter().map(u32::to_string).collect();
        Err(Error::Validation(format!(
            "Duration must be one of {} minutes, got {}",
            options.join(", "),
            minutes
        )))
    }
}

/// Reject pain labels the map does not know
pub fn validate_pain_areas<S: AsRef<str>>(pain_areas: &[S], map: &PainAreaMap) -> Result<()> {
    let unknown: Vec<&str> = pain_areas
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| !map.is_known(p))
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "Unknown pain areas: {}",
            unknown.join(", ")
        )))
    }
}

impl WellbeingLog {
    /// Field-level problems with this entry, empty when valid
    pub fn validate(&self, map: &PainAreaMap) -> Vec<String> {
        let mut errors = Vec::new();

        if !(1..=5).contains(&self.sleep_quality) {
            errors.push(format!(
                "sleep_quality must be between 1 and 5, got {}",
                self.sleep_quality
            ));
        }
        if !(1..=5).contains(&self.energy_level) {
            errors.push(format!(
                "energy_level must be between 1 and 5, got {}",
                self.energy_level
            ));
        }

        if self.mood.trim().is_empty() {
            errors.push("mood is required".to_string());
        } else if self.mood.chars().count() > MAX_MOOD_LEN {
            errors.push(format!("mood must not exceed {} characters", MAX_MOOD_LEN));
        }

        if self.muscle_pain.len() > MAX_PAIN_AREAS {
            errors.push(format!(
                "too many pain areas ({} > {})",
                self.muscle_pain.len(),
                MAX_PAIN_AREAS
            ));
        }
        if let Err(Error::Validation(msg)) = validate_pain_areas(&self.muscle_pain, map) {
            errors.push(msg);
        }

        errors
    }
}
