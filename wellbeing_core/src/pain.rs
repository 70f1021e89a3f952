//! Pain-area mapping and exercise filtering.
//!
//! A pain label reported by the user (e.g. "Legs") expands to the set of
//! area tags an exercise must not load. Labels the map does not know expand
//! to nothing, so they never exclude an exercise.

use crate::Exercise;
use once_cell::sync::Lazy;
use std::collections::HashSet;

const PHYSICAL_AREAS: [&str; 8] = [
    "legs", "back", "arms", "chest", "neck", "core", "shoulders", "hips",
];

static DEFAULT_PAIN_MAP: Lazy<PainAreaMap> = Lazy::new(PainAreaMap::built_in);

/// Static lookup from pain label to conflicting area tags
#[derive(Clone, Debug, Default)]
pub struct PainAreaMap {
    entries: Vec<(String, Vec<String>)>,
}

/// Get a reference to the built-in pain map
pub fn default_pain_map() -> &'static PainAreaMap {
    &DEFAULT_PAIN_MAP
}

impl PainAreaMap {
    fn built_in() -> Self {
        let mut map = Self::default();
        let table: [([&str; 2], &[&str]); 5] = [
            (["Legs", "Ноги"], &["legs", "hips"]),
            (["Back", "Спина"], &["back"]),
            (["Arms", "Руки"], &["arms", "shoulders"]),
            (["Chest", "Грудь"], &["chest"]),
            (["Full body", "Всё тело"], &PHYSICAL_AREAS),
        ];
        for (labels, tags) in table {
            for label in labels {
                map.insert(label, tags);
            }
        }
        map
    }

    /// Add or replace the conflict tags for a label
    pub fn insert(&mut self, label: &str, tags: &[&str]) {
        let tags: Vec<String> = tags.iter().map(|t| (*t).to_string()).collect();
        match self.entries.iter_mut().find(|(l, _)| l.as_str() == label) {
            Some(entry) => entry.1 = tags,
            None => self.entries.push((label.to_string(), tags)),
        }
    }

    /// Conflict tags for a label; empty for unknown labels
    pub fn conflicts(&self, label: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(l, _)| l.as_str() == label)
            .map(|(_, tags)| tags.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_known(&self, label: &str) -> bool {
        self.entries.iter().any(|(l, _)| l.as_str() == label)
    }

    /// Known labels in definition order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Union of conflict tags for all given labels
    pub fn expand<S: AsRef<str>>(&self, pain_areas: &[S]) -> HashSet<&str> {
        pain_areas
            .iter()
            .flat_map(|p| self.conflicts(p.as_ref()))
            .map(String::as_str)
            .collect()
    }
}

/// Remove exercises whose areas overlap the reported pain areas
///
/// Keeps the relative order of the remaining exercises. With no pain areas
/// the input comes back unchanged.
pub fn filter_by_pain<S: AsRef<str>>(
    exercises: &[Exercise],
    pain_areas: &[S],
    map: &PainAreaMap,
) -> Vec<Exercise> {
    if pain_areas.is_empty() {
        return exercises.to_vec();
    }

    let conflicts = map.expand(pain_areas);
    let kept: Vec<Exercise> = exercises
        .iter()
        .filter(|ex| !ex.areas.iter().any(|a| conflicts.contains(a.as_str())))
        .cloned()
        .collect();

    tracing::debug!(
        "Pain filter kept {}/{} exercises (conflict tags: {:?})",
        kept.len(),
        exercises.len(),
        conflicts
    );
    kept
}
