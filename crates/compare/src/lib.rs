pub mod metrics;

use loc_tally_model::lists::SortedLists;

/// Aggregate metrics for one reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TallyReport {
    pub distance: u64,
    /// `None` when the run is configured distance-only.
    pub similarity: Option<i64>,
}

impl TallyReport {
    pub fn compute(lists: &SortedLists, with_similarity: bool) -> TallyReport {
        let distance = metrics::total_distance(lists);
        let similarity = with_similarity.then(|| metrics::similarity_score(lists));
        TallyReport {
            distance,
            similarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loc_tally_model::lists::LocationLists;

    #[test]
    fn compute_honors_the_similarity_switch() {
        let lists: LocationLists = [(3, 4), (4, 3), (2, 5), (1, 3), (3, 9), (3, 3)]
            .into_iter()
            .collect();
        let lists = lists.into_sorted();

        let full = TallyReport::compute(&lists, true);
        assert_eq!(
            full,
            TallyReport {
                distance: 11,
                similarity: Some(31),
            }
        );

        let distance_only = TallyReport::compute(&lists, false);
        assert_eq!(distance_only.distance, 11);
        assert_eq!(distance_only.similarity, None);
    }
}
