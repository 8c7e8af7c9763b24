use loc_tally_model::lists::SortedLists;

/// Total distance: the sum of |left − right| over the rank pairing of the
/// two sorted lists.
pub fn total_distance(lists: &SortedLists) -> u64 {
    lists
        .left()
        .iter()
        .zip(lists.right())
        .map(|(&left, &right)| left.abs_diff(right))
        .sum()
}

/// Similarity score: every left id weighted by how many times it occurs in
/// the right list.
///
/// Consecutive equal left ids share one occurrence count. The left list is
/// sorted, so the count computed for the previous id is still valid and the
/// right list is not rescanned for it.
pub fn similarity_score(lists: &SortedLists) -> i64 {
    let mut total = 0;
    let mut cached: Option<(i64, i64)> = None;
    for &id in lists.left() {
        let count = match cached {
            Some((prev, count)) if prev == id => count,
            _ => occurrences(lists.right(), id),
        };
        cached = Some((id, count));
        total += id * count;
    }
    total
}

/// Rescans the right list for every left id. Same result as
/// [`similarity_score`], without the cache.
pub fn similarity_score_rescan(lists: &SortedLists) -> i64 {
    lists
        .left()
        .iter()
        .map(|&id| id * occurrences(lists.right(), id))
        .sum()
}

fn occurrences(ids: &[i64], id: i64) -> i64 {
    let count = ids.iter().filter(|&&other| other == id).count();
    count as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use loc_tally_model::lists::LocationLists;
    use loc_tally_model::pairs::PairGenerator;

    fn sorted(pairs: impl IntoIterator<Item = (i64, i64)>) -> SortedLists {
        let lists: LocationLists = pairs.into_iter().collect();
        lists.into_sorted()
    }

    #[test]
    fn tallies_the_worked_example() {
        // Raw columns [3,4,2,1,3,3] and [4,3,5,3,9,3].
        let lists = sorted([(3, 4), (4, 3), (2, 5), (1, 3), (3, 9), (3, 3)]);
        assert_eq!(total_distance(&lists), 11);
        assert_eq!(similarity_score(&lists), 31);
    }

    #[test]
    fn distance_of_a_list_against_itself_is_zero() {
        let lists = sorted([(5, 5), (-2, -2), (19, 19)]);
        assert_eq!(total_distance(&lists), 0);
    }

    #[test]
    fn empty_lists_produce_zero_metrics() {
        let lists = sorted([]);
        assert_eq!(total_distance(&lists), 0);
        assert_eq!(similarity_score(&lists), 0);
        assert_eq!(similarity_score_rescan(&lists), 0);
    }

    #[test]
    fn disjoint_lists_have_zero_similarity() {
        let lists = sorted([(1, 2), (3, 4), (5, 6)]);
        assert_eq!(similarity_score(&lists), 0);
    }

    #[test]
    fn negative_ids_contribute_negative_terms() {
        let lists = sorted([(-3, -3), (-3, 0), (2, 2)]);
        assert_eq!(similarity_score(&lists), -4);
        assert_eq!(total_distance(&lists), 3);
    }

    #[test]
    fn duplicate_runs_longer_than_two_reuse_the_count() {
        let lists = sorted([(5, 5), (5, 5), (5, 1), (5, 2)]);
        // Four 5s on the left, two on the right.
        assert_eq!(similarity_score(&lists), 40);
        assert_eq!(similarity_score(&lists), similarity_score_rescan(&lists));
    }

    #[test]
    fn cached_count_matches_rescan_on_random_lists() {
        for seed in 0..8 {
            let lists: LocationLists = PairGenerator::seeded(seed).take(500).collect();
            let lists = lists.into_sorted();
            assert_eq!(similarity_score(&lists), similarity_score_rescan(&lists));
        }
    }

    #[test]
    fn zero_ids_never_skew_the_score() {
        // A zero on the left matches zeros on the right but weighs nothing.
        let lists = sorted([(0, 0), (0, 7), (4, 0)]);
        assert_eq!(similarity_score(&lists), similarity_score_rescan(&lists));
        assert_eq!(similarity_score(&lists), 0);
    }
}
