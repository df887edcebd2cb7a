//! Rule-based scoring for Park Picks.
//!
//! [`RuleScorer`] implements the [`Scorer`](parkpicks_core::Scorer) trait by
//! summing an ordered list of [`Rule`]s: the wait-time desirability term,
//! category matches against the visitor's preferences, proximity to the
//! visitor's current land, and time-of-day adjustments. [`RuleWeights`]
//! holds every contribution so callers can tune or test rules in isolation.
//!
//! [`Recommender`] ties a scorer to a [`RideSource`](parkpicks_core::RideSource):
//! it drops closed rides, scores the rest and ranks them.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use parkpicks_core::{
//!     Category, ClassificationTables, Park, PreferenceProfile, Ride, TopologyRegistry, VisitHour,
//! };
//! use parkpicks_scorer::{Recommender, RuleScorer};
//!
//! let tables = ClassificationTables::new().with_ride(Category::Thrill, "Space Mountain");
//! let scorer = RuleScorer::new(Arc::new(tables), Arc::new(TopologyRegistry::new()));
//! let recommender = Recommender::new(scorer);
//! let rides = [
//!     Ride::new("Autopia", "Tomorrowland", 15, true),
//!     Ride::new("Space Mountain", "Tomorrowland", 15, true),
//! ];
//! let profile = PreferenceProfile::new(VisitHour::new(13)?).with_thrill(true);
//! let ranking = recommender.recommend_rides(Park::Disneyland, &profile, &rides);
//! assert_eq!(ranking.top_picks()[0].name, "Space Mountain");
//! # Ok::<(), parkpicks_core::VisitHourError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod error;
mod recommend;
mod rules;
mod weights;

pub use engine::{RuleContribution, RuleScorer};
pub use error::RecommendError;
pub use recommend::Recommender;
pub use rules::{Proximity, Rule, RuleContext, standard_rules};
pub use weights::{RuleWeights, RuleWeightsError};
