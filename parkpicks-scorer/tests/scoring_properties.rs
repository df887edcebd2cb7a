//! Property coverage for rule-based scoring.

use std::sync::Arc;

use parkpicks_core::{
    Category, ClassificationTables, Park, PreferenceProfile, Ride, Scorer, Topology,
    TopologyRegistry, VisitHour,
};
use parkpicks_scorer::{Proximity, Recommender, RuleScorer};
use proptest::prelude::*;

const LANDS: [&str; 4] = ["Fantasyland", "Tomorrowland", "Frontierland", "Adventureland"];
const RIDES: [&str; 5] = [
    "Space Mountain",
    "Jungle Cruise",
    "Dumbo the Flying Elephant",
    "Haunted Mansion",
    "Unlisted Ride",
];

fn topology() -> TopologyRegistry {
    TopologyRegistry::new().with_park(
        Park::Disneyland,
        Topology::new()
            .with_land("Fantasyland", ["Tomorrowland", "Frontierland"])
            .with_land("Tomorrowland", ["Fantasyland"])
            .with_land("Frontierland", ["Adventureland"]),
    )
}

fn scorer() -> RuleScorer {
    let tables = ClassificationTables::new()
        .with_ride(Category::Thrill, "Space Mountain")
        .with_ride(Category::RopeDrop, "Space Mountain")
        .with_ride(Category::Chill, "Jungle Cruise")
        .with_ride(Category::KidFriendly, "Dumbo the Flying Elephant")
        .with_ride(Category::CommonlySkipped, "Dumbo the Flying Elephant")
        .with_ride(Category::Indoor, "Haunted Mansion")
        .with_ride(Category::NightAmbiance, "Haunted Mansion");
    RuleScorer::new(Arc::new(tables), Arc::new(topology()))
}

fn ride() -> impl Strategy<Value = Ride> {
    (
        prop::sample::select(RIDES.to_vec()),
        prop::sample::select(LANDS.to_vec()),
        0_u32..=180,
        any::<bool>(),
    )
        .prop_map(|(name, land, wait, open)| Ride::new(name, land, wait, open))
}

fn profile() -> impl Strategy<Value = PreferenceProfile> {
    (
        0_u8..=23,
        prop::option::of(prop::sample::select(LANDS.to_vec())),
        any::<[bool; 5]>(),
    )
        .prop_filter_map("hour in range", |(hour, land, flags)| {
            let [thrill, indoor, kids, single, skipped] = flags;
            let base = PreferenceProfile::new(VisitHour::new(hour).ok()?)
                .with_thrill(thrill)
                .with_indoor(indoor)
                .with_kids(kids)
                .with_single_rider(single)
                .with_skipped(skipped);
            Some(match land {
                Some(current) => base.with_current_land(current),
                None => base,
            })
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: identical inputs always yield identical scores.
    #[test]
    fn scoring_is_deterministic(ride in ride(), profile in profile()) {
        let scorer = scorer();
        let first = scorer.score(Park::Disneyland, &ride, &profile);
        let second = scorer.clone().score(Park::Disneyland, &ride, &profile);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    /// Property: each ride gets exactly one proximity contribution.
    #[test]
    fn proximity_fires_once(ride in ride(), profile in profile()) {
        let contributions = scorer().explain(Park::Disneyland, &ride, &profile);
        let proximity = contributions.iter().filter(|c| c.rule == "proximity").count();
        prop_assert_eq!(proximity, 1);
    }

    /// Property: same land and adjacency are mutually exclusive outcomes.
    #[test]
    fn proximity_outcome_matches_topology(ride in ride(), profile in profile()) {
        let registry = topology();
        let outcome = Proximity::classify(
            &registry,
            Park::Disneyland,
            &ride.land,
            profile.current_land(),
        );
        let same = profile.current_land() == Some(ride.land.as_str());
        let adjacent = profile
            .current_land()
            .is_some_and(|land| registry.is_adjacent(Park::Disneyland, land, &ride.land));
        let expected = if same {
            Proximity::SameLand
        } else if adjacent {
            Proximity::Nearby
        } else {
            Proximity::Far
        };
        prop_assert_eq!(outcome, expected);
    }

    /// Property: closed rides never reach the ranking, and the ranking is
    /// ordered by non-increasing score.
    #[test]
    fn recommendations_are_open_and_ordered(
        rides in prop::collection::vec(ride(), 0..20),
        profile in profile(),
    ) {
        let ranking = Recommender::new(scorer()).recommend_rides(Park::Disneyland, &profile, &rides);
        let open = rides.iter().filter(|ride| ride.is_open).count();
        prop_assert_eq!(ranking.len(), open);
        for pair in ranking.as_slice().windows(2) {
            if let [first, second] = pair {
                prop_assert!(first.score >= second.score);
            }
        }
    }
}
