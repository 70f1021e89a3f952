//! Focus area of a program: the most targeted area tag.

/// Label shown when a program has no areas to report
pub const FULL_BODY_FALLBACK: &str = "Full body";

/// Most frequent tag across all area lists
///
/// Ties go to the tag seen first in flattened order. Returns `None` when the
/// lists contain no tags at all.
pub fn most_frequent_area<L, S>(area_lists: &[L]) -> Option<String>
where
    L: AsRef<[S]>,
    S: AsRef<str>,
{
    // (tag, count) in first-seen order
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for tag in area_lists.iter().flat_map(|l| l.as_ref()) {
        let tag = tag.as_ref();
        match counts.iter_mut().find(|(t, _)| *t == tag) {
            Some(entry) => entry.1 += 1,
            None => counts.push((tag, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for &(tag, count) in &counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((tag, count));
        }
    }
    best.map(|(tag, _)| tag.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent() {
        let areas = vec![vec!["legs", "back"], vec!["legs", "arms"], vec!["legs"]];
        assert_eq!(most_frequent_area(&areas), Some("legs".to_string()));
    }

    #[test]
    fn test_empty_input() {
        let areas: Vec<Vec<String>> = vec![];
        assert_eq!(most_frequent_area(&areas), None);
    }

    #[test]
    fn test_lists_without_tags() {
        let areas: Vec<Vec<String>> = vec![vec![], vec![]];
        assert_eq!(most_frequent_area(&areas), None);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let areas = vec![vec!["legs"], vec!["back"], vec!["legs"], vec!["back"]];
        for _ in 0..5 {
            assert_eq!(most_frequent_area(&areas), Some("legs".to_string()));
        }

        let reversed = vec![vec!["back"], vec!["legs"], vec!["back"], vec!["legs"]];
        assert_eq!(most_frequent_area(&reversed), Some("back".to_string()));
    }

    #[test]
    fn test_later_tag_wins_on_higher_count() {
        let areas = vec![vec!["core"], vec!["hips", "hips"], vec!["core", "hips"]];
        assert_eq!(most_frequent_area(&areas), Some("hips".to_string()));
    }
}
