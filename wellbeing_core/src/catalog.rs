//! Default exercise catalog.
//!
//! Exercises are kept in ordered lists per category. The order matters:
//! the packer breaks ties by catalog position.

use crate::config::CustomExercise;
use crate::{Category, Exercise};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Longest single exercise accepted by `Catalog::validate`
pub const MAX_EXERCISE_MINUTES: u32 = 240;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Ordered exercise lists for each category
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub stretch: Vec<Exercise>,
    pub lfc: Vec<Exercise>,
    pub meditation: Vec<Exercise>,
}

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

fn exercise(id: &str, name: &str, duration: u32, level: u8, areas: &[&str]) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        duration,
        level,
        areas: areas.iter().map(|a| (*a).to_string()).collect(),
    }
}

/// Builds the default catalog with the built-in exercises
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference.
pub fn build_default_catalog() -> Catalog {
    let stretch = vec![
        exercise("s1", "Standing hamstring stretch", 5, 1, &["legs", "hips"]),
        exercise("s2", "Cat-cow", 4, 1, &["back", "core"]),
        exercise("s3", "Doorway chest stretch", 3, 1, &["chest", "shoulders"]),
        exercise("s4", "Neck release", 3, 1, &["neck"]),
        exercise("s5", "Kneeling hip flexor stretch", 5, 2, &["hips", "legs"]),
        exercise("s6", "Child's pose", 5, 1, &["back", "hips"]),
        exercise("s7", "Overhead triceps stretch", 3, 1, &["arms", "shoulders"]),
        exercise("s8", "Seated spinal twist", 4, 2, &["back", "core"]),
    ];

    let lfc = vec![
        exercise("l1", "Glute bridge", 5, 1, &["legs", "hips", "core"]),
        exercise("l2", "Bird dog", 5, 2, &["back", "core"]),
        exercise("l3", "Wall push-up", 4, 1, &["chest", "arms"]),
        exercise("l4", "Dead bug", 5, 2, &["core"]),
        exercise("l5", "Sit-to-stand", 6, 1, &["legs"]),
        exercise("l6", "Band pull-apart", 4, 2, &["shoulders", "back"]),
        exercise("l7", "Calf raises", 3, 1, &["legs"]),
        exercise("l8", "Scapular squeeze", 3, 1, &["back", "shoulders"]),
    ];

    let meditation = vec![
        exercise("m1", "Box breathing", 5, 1, &["mind"]),
        exercise("m2", "Body scan", 10, 2, &["mind"]),
        exercise("m3", "Mindful breathing", 3, 1, &["mind"]),
        exercise("m4", "Guided relaxation", 8, 1, &["mind"]),
    ];

    Catalog {
        stretch,
        lfc,
        meditation,
    }
}

impl Catalog {
    /// Ordered exercises of one category
    pub fn exercises(&self, category: Category) -> &[Exercise] {
        match category {
            Category::Stretch => &self.stretch,
            Category::Lfc => &self.lfc,
            Category::Meditation => &self.meditation,
        }
    }

    fn exercises_mut(&mut self, category: Category) -> &mut Vec<Exercise> {
        match category {
            Category::Stretch => &mut self.stretch,
            Category::Lfc => &mut self.lfc,
            Category::Meditation => &mut self.meditation,
        }
    }

    /// Total number of exercises across categories
    pub fn len(&self) -> usize {
        self.stretch.len() + self.lfc.len() + self.meditation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return a copy of this catalog with custom exercises appended
    ///
    /// Custom entries go after the built-ins of their category, in config order.
    pub fn with_custom(&self, custom: &[CustomExercise]) -> Catalog {
        let mut catalog = self.clone();
        for c in custom {
            catalog.exercises_mut(c.category).push(Exercise {
                id: c.id.clone(),
                name: c.name.clone(),
                duration: c.duration,
                level: c.level,
                areas: c.areas.clone(),
            });
        }
        if !custom.is_empty() {
            tracing::debug!("Added {} custom exercises to catalog", custom.len());
        }
        catalog
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for category in Category::ALL {
            let mut seen = HashSet::new();
            for ex in self.exercises(category) {
                let cat = category.as_str();
                if ex.id.is_empty() {
                    errors.push(format!("{} exercise has empty ID", cat));
                } else if !seen.insert(ex.id.as_str()) {
                    errors.push(format!("Duplicate {} exercise ID '{}'", cat, ex.id));
                }
                if ex.name.is_empty() {
                    errors.push(format!("Exercise '{}' has empty name", ex.id));
                }
                if ex.duration == 0 {
                    errors.push(format!("Exercise '{}' has zero duration", ex.id));
                } else if ex.duration > MAX_EXERCISE_MINUTES {
                    errors.push(format!(
                        "Exercise '{}': duration {} exceeds {} minutes",
                        ex.id, ex.duration, MAX_EXERCISE_MINUTES
                    ));
                }
                if !(1..=3).contains(&ex.level) {
                    errors.push(format!(
                        "Exercise '{}': level {} outside 1..=3",
                        ex.id, ex.level
                    ));
                }
                if ex.areas.is_empty() {
                    errors.push(format!("Exercise '{}' has no areas", ex.id));
                }
            }
        }

        errors
    }
}
