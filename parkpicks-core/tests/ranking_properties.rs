//! Property coverage for the ranker.

use parkpicks_core::{ScoredRide, rank};
use proptest::prelude::*;

#[expect(
    clippy::float_arithmetic,
    reason = "quarter-point scores exercise ties and fractions"
)]
fn scored_rides() -> impl Strategy<Value = Vec<ScoredRide>> {
    prop::collection::vec((-60_i32..=150, 0_u32..=180), 0..40).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (score, wait_time))| ScoredRide {
                name: format!("ride-{index}"),
                wait_time,
                score: f64::from(score) / 4.0,
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: every adjacent pair is ordered by non-increasing score.
    #[test]
    fn ranking_is_non_increasing(rides in scored_rides()) {
        let ranking = rank(rides);
        for pair in ranking.as_slice().windows(2) {
            if let [first, second] = pair {
                prop_assert!(first.score >= second.score);
            }
        }
    }

    /// Property: ranking neither drops nor invents rides.
    #[test]
    fn ranking_is_a_permutation(rides in scored_rides()) {
        let mut expected: Vec<String> = rides.iter().map(|ride| ride.name.clone()).collect();
        let ranking = rank(rides);
        let mut actual: Vec<String> = ranking.iter().map(|ride| ride.name.clone()).collect();
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    /// Property: equal scores keep their input order.
    #[test]
    fn ties_keep_input_order(rides in scored_rides()) {
        let ranking = rank(rides);
        for pair in ranking.as_slice().windows(2) {
            if let [first, second] = pair {
                if first.score == second.score {
                    let index = |ride: &ScoredRide| {
                        ride.name
                            .trim_start_matches("ride-")
                            .parse::<usize>()
                            .unwrap_or_default()
                    };
                    prop_assert!(index(first) < index(second));
                }
            }
        }
    }

    /// Property: top-N is a prefix of the full ranking.
    #[test]
    fn top_n_is_a_prefix(rides in scored_rides(), n in 0_usize..10) {
        let ranking = rank(rides);
        let top = ranking.top_n(n);
        prop_assert_eq!(top.len(), n.min(ranking.len()));
        prop_assert_eq!(top, &ranking.as_slice()[..top.len()]);
    }
}
