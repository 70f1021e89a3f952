//! Greedy minute packing.
//!
//! Picks exercises one at a time so the running total lands inside
//! `target × (1 ± tolerance)`. This is a greedy approximation and must stay
//! one: an exact subset-sum search would pick different exercises.

use crate::Exercise;

/// Acceptance band around a target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinuteBand {
    pub lower: f64,
    pub upper: f64,
}

impl MinuteBand {
    pub fn new(target_minutes: u32, tolerance: f64) -> Self {
        let target = f64::from(target_minutes);
        Self {
            lower: target * (1.0 - tolerance),
            upper: target * (1.0 + tolerance),
        }
    }

    /// Inclusive on both ends
    pub fn contains(&self, minutes: impl Into<u64>) -> bool {
        let m = minutes.into() as f64;
        m >= self.lower && m <= self.upper
    }

    fn exceeds_upper(&self, minutes: u64) -> bool {
        minutes as f64 > self.upper
    }
}

/// Select exercises whose summed duration approximates `target_minutes`
///
/// Each step takes the remaining candidate that brings the total closest to
/// the target; ties go to the earliest candidate in input order. A candidate
/// that would push the total past the upper bound ends packing, as does
/// reaching the band. The result may fall short of the lower bound when the
/// candidates cannot reach it.
pub fn pack_by_minutes(exercises: &[Exercise], target_minutes: u32, tolerance: f64) -> Vec<Exercise> {
    if exercises.is_empty() {
        return Vec::new();
    }

    let band = MinuteBand::new(target_minutes, tolerance);
    let target = u64::from(target_minutes);

    // Remaining candidates stay in input order so `min_by_key` (which keeps
    // the first minimum) breaks ties by original index.
    let mut available: Vec<&Exercise> = exercises.iter().collect();
    let mut selected = Vec::new();
    // Summed in u64 so catalog durations up to u32::MAX cannot overflow
    let mut total: u64 = 0;

    while (total as f64) < band.upper && !available.is_empty() {
        let Some((pos, next)) = available
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| target.abs_diff(total + u64::from(e.duration)))
            .map(|(pos, e)| (pos, *e))
        else {
            break;
        };

        let next_total = total + u64::from(next.duration);
        if band.exceeds_upper(next_total) {
            break;
        }

        total = next_total;
        selected.push(next.clone());
        available.remove(pos);

        if band.contains(total) {
            break;
        }
    }

    tracing::debug!(
        "Packed {} exercises into {} min (target {}, band {:.1}..={:.1})",
        selected.len(),
        total,
        target_minutes,
        band.lower,
        band.upper
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::total_minutes;

    fn ex(id: &str, duration: u32) -> Exercise {
        Exercise {
            id: id.into(),
            name: id.into(),
            duration,
            level: 1,
            areas: vec!["legs".into()],
        }
    }

    fn ids(exercises: &[Exercise]) -> Vec<&str> {
        exercises.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(pack_by_minutes(&[], 10, 0.1).is_empty());
        assert!(pack_by_minutes(&[], 0, 0.5).is_empty());
    }

    #[test]
    fn test_packs_into_band() {
        let exercises = vec![ex("a", 5), ex("b", 7), ex("c", 3), ex("d", 10), ex("e", 2)];
        let result = pack_by_minutes(&exercises, 15, 0.1);
        let total = total_minutes(&result);
        assert!((13.5..=16.5).contains(&f64::from(total)), "total {}", total);
        assert_eq!(ids(&result), vec!["d", "a"]);
    }

    #[test]
    fn test_three_equal_exercises() {
        let exercises = vec![ex("a", 5), ex("b", 5), ex("c", 5)];
        let result = pack_by_minutes(&exercises, 10, 0.1);
        assert_eq!(total_minutes(&result), 10);
        // Ties resolve to input order
        assert_eq!(ids(&result), vec!["a", "b"]);
    }

    #[test]
    fn test_tie_breaks_by_original_index() {
        // After picking "big" (total 8), both 1-minute items are equally close;
        // the earlier one wins. Zero tolerance forces both to be taken.
        let exercises = vec![ex("x", 1), ex("big", 8), ex("y", 1)];
        let result = pack_by_minutes(&exercises, 10, 0.0);
        assert_eq!(ids(&result), vec!["big", "x", "y"]);
        assert_eq!(total_minutes(&result), 10);
    }

    #[test]
    fn test_stops_when_best_candidate_overshoots() {
        let exercises = vec![ex("a", 30)];
        let result = pack_by_minutes(&exercises, 10, 0.1);
        assert!(result.is_empty());
    }

    #[test]
    fn test_may_stop_below_lower_bound() {
        let exercises = vec![ex("a", 2), ex("b", 3)];
        let result = pack_by_minutes(&exercises, 20, 0.1);
        assert_eq!(total_minutes(&result), 5);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_greedy_is_not_optimal() {
        // An exact solver would take 6 + 4. Greedy grabs 9 first, then the
        // closest follow-up (4) overshoots 10.5 and packing stops.
        let exercises = vec![ex("six", 6), ex("nine", 9), ex("four", 4)];
        let result = pack_by_minutes(&exercises, 10, 0.05);
        assert_eq!(ids(&result), vec!["nine"]);
    }

    #[test]
    fn test_deterministic() {
        let exercises = vec![
            ex("a", 4),
            ex("b", 6),
            ex("c", 4),
            ex("d", 2),
            ex("e", 6),
            ex("f", 3),
        ];
        let first = pack_by_minutes(&exercises, 17, 0.1);
        for _ in 0..10 {
            assert_eq!(pack_by_minutes(&exercises, 17, 0.1), first);
        }
    }

    #[test]
    fn test_zero_target_selects_nothing() {
        let exercises = vec![ex("a", 1)];
        assert!(pack_by_minutes(&exercises, 0, 0.1).is_empty());
    }

    #[test]
    fn test_huge_duration_does_not_overflow() {
        let exercises = vec![ex("a", 5), ex("huge", u32::MAX)];
        let result = pack_by_minutes(&exercises, 10, 0.1);
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_huge_target_with_huge_durations() {
        let exercises = vec![ex("a", u32::MAX), ex("b", u32::MAX), ex("c", 1)];
        let result = pack_by_minutes(&exercises, u32::MAX, 0.5);
        // First pick lands exactly on target, which is inside the band
        assert_eq!(ids(&result), vec!["a"]);
    }

    #[test]
    fn test_band_inclusive() {
        let band = MinuteBand::new(10, 0.1);
        assert!(band.contains(9u32));
        assert!(band.contains(11u32));
        assert!(!band.contains(12u32));
    }
}
