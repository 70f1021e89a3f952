//! Core domain types for the wellbeing program generator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and their categories
//! - Volume targets and workout goals
//! - Generated programs
//! - Wellbeing log entries and recommendations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Exercise Types
// ============================================================================

/// Exercise grouping within the catalog and a generated program
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Stretch,
    /// Therapeutic exercise
    Lfc,
    Meditation,
}

impl Category {
    /// All categories in program order
    pub const ALL: [Category; 3] = [Category::Stretch, Category::Lfc, Category::Meditation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Stretch => "stretch",
            Category::Lfc => "lfc",
            Category::Meditation => "meditation",
        }
    }
}

/// A single exercise from the catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// Minutes
    pub duration: u32,
    /// Difficulty tier, 1..=3
    pub level: u8,
    pub areas: Vec<String>,
}

// ============================================================================
// Targets and Goals
// ============================================================================

/// Target minutes per category
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeTarget {
    pub stretch: u32,
    pub lfc: u32,
    pub meditation: u32,
}

impl VolumeTarget {
    pub fn for_category(&self, category: Category) -> u32 {
        match category {
            Category::Stretch => self.stretch,
            Category::Lfc => self.lfc,
            Category::Meditation => self.meditation,
        }
    }
}

/// Fraction of a session's duration given to each category
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Distribution {
    pub stretch: f64,
    pub lfc: f64,
    pub meditation: f64,
}

impl Distribution {
    pub fn for_category(&self, category: Category) -> f64 {
        match category {
            Category::Stretch => self.stretch,
            Category::Lfc => self.lfc,
            Category::Meditation => self.meditation,
        }
    }
}

/// A workout goal with its category distribution
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutGoal {
    pub id: String,
    pub name: String,
    pub description: String,
    pub distribution: Distribution,
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

// ============================================================================
// Program Types
// ============================================================================

/// A generated exercise program
///
/// Built once per generation call and never mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratedProgram {
    pub id: Uuid,
    pub rpe: u8,
    pub pain_areas: Vec<String>,
    /// Goal id when the program was built from a goal distribution
    pub goal: Option<String>,
    pub stretch: Vec<Exercise>,
    pub lfc: Vec<Exercise>,
    pub meditation: Vec<Exercise>,
    pub total_minutes: u32,
    pub focus_area: String,
    pub recommendations: Option<WellbeingRecommendation>,
    pub timestamp: DateTime<Utc>,
}

impl GeneratedProgram {
    /// Selected exercises for one category
    pub fn exercises(&self, category: Category) -> &[Exercise] {
        match category {
            Category::Stretch => &self.stretch,
            Category::Lfc => &self.lfc,
            Category::Meditation => &self.meditation,
        }
    }

    /// Minutes selected for one category
    pub fn category_minutes(&self, category: Category) -> u32 {
        total_minutes(self.exercises(category))
    }
}

/// Sum of exercise durations
pub fn total_minutes(exercises: &[Exercise]) -> u32 {
    exercises.iter().map(|e| e.duration).sum()
}

// ============================================================================
// Wellbeing Types
// ============================================================================

/// A daily wellbeing log entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WellbeingLog {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// 1..=5
    pub sleep_quality: u8,
    /// 1..=5
    pub energy_level: u8,
    pub mood: String,
    #[serde(default)]
    pub muscle_pain: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Training suggestion derived from the latest wellbeing log
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WellbeingRecommendation {
    pub suggested_rpe: u8,
    pub message: String,
    pub pain_areas: Vec<String>,
}

/// Kind of workout suggested for the day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Rest,
    Recovery,
    Moderate,
    Intensive,
}

/// Intensity level attached to a suggestion
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    None,
    Low,
    Moderate,
    High,
}

/// Dashboard-style workout suggestion
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSuggestion {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    pub intensity: Intensity,
    pub activities: Vec<String>,
}
