//! Facade crate for the Park Picks recommendation engine.
//!
//! This crate re-exports the core domain types and the rule-based scorer, and
//! exposes the built-in park catalogue and feed snapshot reader behind the
//! `builtin-catalogue` feature.
//!
//! ```
//! # #[cfg(feature = "builtin-catalogue")]
//! # {
//! use parkpicks::{Park, PreferenceProfile, Recommender, Ride, VisitHour, builtin_scorer};
//!
//! let rides = vec![
//!     Ride::new("it's a small world", "Fantasyland", 10, true),
//!     Ride::new("Space Mountain", "Tomorrowland", 45, false),
//! ];
//! let profile = PreferenceProfile::new(VisitHour::new(14)?).with_current_land("Fantasyland");
//! let ranking = Recommender::new(builtin_scorer()).recommend_rides(Park::Disneyland, &profile, &rides);
//! assert_eq!(ranking.len(), 1);
//! # }
//! # Ok::<(), parkpicks::VisitHourError>(())
//! ```

#![forbid(unsafe_code)]

pub use parkpicks_core::{
    Asymmetry, Category, ClassificationTables, DEFAULT_TOP_PICKS, Park, PreferenceProfile, Ranking,
    Ride, RideSource, RideSourceError, ScoredRide, Scorer, Topology, TopologyRegistry,
    UnknownParkError, VisitHour, VisitHourError, WaitCurve, desirability, rank,
};
pub use parkpicks_scorer::{
    Proximity, RecommendError, Recommender, Rule, RuleContribution, RuleScorer, RuleWeights,
    RuleWeightsError,
};

#[cfg(feature = "builtin-catalogue")]
pub use parkpicks_data::{Catalogue, FeedDirectorySource, builtin_tables, builtin_topology};

/// Rule scorer over the built-in catalogue with the default weights.
#[cfg(feature = "builtin-catalogue")]
#[must_use]
pub fn builtin_scorer() -> RuleScorer {
    let catalogue = Catalogue::builtin();
    RuleScorer::new(catalogue.tables(), catalogue.topology())
}
