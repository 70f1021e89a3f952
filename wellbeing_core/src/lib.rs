#![forbid(unsafe_code)]

//! Core domain model and business logic for the Wellp wellbeing tracker.
//!
//! This crate provides:
//! - Domain types (exercises, goals, programs, wellbeing logs)
//! - Exercise catalog and pain-area mapping
//! - Program generation engine (targets, pain filter, packer, focus)
//! - Persistence (wellbeing log store, program history)
//! - Recommendations, validation and statistics

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod pain;
pub mod targets;
pub mod packer;
pub mod focus;
pub mod recommendation;
pub mod validation;
pub mod log_store;
pub mod history;
pub mod stats;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog};
pub use config::Config;
pub use pain::{default_pain_map, filter_by_pain, PainAreaMap};
pub use targets::{all_workout_goals, get_workout_goal, targets_for_goal, targets_for_rpe};
pub use packer::pack_by_minutes;
pub use focus::most_frequent_area;
pub use recommendation::{motivation_message, wellbeing_recommendations, workout_suggestion};
pub use validation::{validate_duration, validate_pain_areas, validate_rpe};
pub use log_store::{JsonlLogStore, LogSink, NoWellbeingData, WellbeingSource};
pub use history::{FileProgramHistory, ProgramHistory, ProgramSink};
pub use stats::{compute_statistics, LogStatistics};
pub use engine::{generate_and_record, generate_program, ProgramRequest};
