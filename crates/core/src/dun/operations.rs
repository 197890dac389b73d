use super::error::DunError;
use super::types::{Dun, DunFilter, Statistics};

/// Filters duns by completion state.
pub fn filter_duns(duns: &[Dun], filter: DunFilter) -> Vec<Dun> {
    duns.iter()
        .filter(|dun| filter.matches(dun))
        .cloned()
        .collect()
}

/// Sorts duns by id so listings are deterministic.
pub fn sort_duns_by_id(duns: &mut [Dun]) {
    duns.sort_by(|a, b| a.id.cmp(&b.id));
}

/// Computes the share of active and completed duns.
///
/// An empty slice yields zero for both percentages.
pub fn compute_statistics(duns: &[Dun]) -> Statistics {
    if duns.is_empty() {
        return Statistics::default();
    }

    let total = duns.len() as f32;
    let active = duns.iter().filter(|dun| dun.is_active()).count() as f32;

    Statistics {
        active_percent: 100.0 * active / total,
        completed_percent: 100.0 * (total - active) / total,
    }
}

/// Validates a dun before it is handed to the repository.
pub fn validate_dun(dun: &Dun) -> Result<(), DunError> {
    if dun.is_empty() {
        return Err(DunError::Empty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dun(id: &str, completed: bool) -> Dun {
        Dun::new(id, "").with_id(id).with_completed(completed)
    }

    #[test]
    fn test_filter_duns_active() {
        let duns = vec![dun("a", false), dun("b", true), dun("c", false)];

        let active = filter_duns(&duns, DunFilter::Active);

        let ids: Vec<_> = active.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_duns_completed() {
        let duns = vec![dun("a", false), dun("b", true)];

        let completed = filter_duns(&duns, DunFilter::Completed);

        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, "b");
    }

    #[test]
    fn test_sort_duns_by_id() {
        let mut duns = vec![dun("c", false), dun("a", false), dun("b", false)];

        sort_duns_by_id(&mut duns);

        let ids: Vec<_> = duns.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_statistics_empty() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.active_percent, 0.0);
        assert_eq!(stats.completed_percent, 0.0);
    }

    #[test]
    fn test_statistics_no_completed() {
        let stats = compute_statistics(&[dun("a", false)]);
        assert_eq!(stats.active_percent, 100.0);
        assert_eq!(stats.completed_percent, 0.0);
    }

    #[test]
    fn test_statistics_both() {
        let duns = vec![dun("a", false), dun("b", true), dun("c", true), dun("d", true)];

        let stats = compute_statistics(&duns);

        assert_eq!(stats.active_percent, 25.0);
        assert_eq!(stats.completed_percent, 75.0);
    }

    #[test]
    fn test_validate_dun() {
        assert!(validate_dun(&Dun::new("Pisa", "")).is_ok());
        assert!(validate_dun(&Dun::new("", "Tower")).is_ok());
        assert_eq!(validate_dun(&Dun::new("", "")), Err(DunError::Empty));
    }
}
