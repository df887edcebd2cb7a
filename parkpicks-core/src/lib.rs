//! Core domain types for the Park Picks recommendation engine.
//!
//! The crate holds the read-only building blocks shared by every scoring
//! request: parks and their land topology, ride classification tables, the
//! wait-time desirability curve, visitor preference profiles, and the ranker
//! that orders scored rides. The [`Scorer`] and [`RideSource`] traits mark the
//! seams where scoring engines and live data providers plug in.
//!
//! Nothing in this crate mutates shared state; tables and registries are
//! built once and then only read.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
mod classification;
mod hour;
mod park;
mod profile;
mod rank;
mod ride;
pub mod scorer;
pub mod source;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod topology;
mod wait;

pub use category::Category;
pub use classification::ClassificationTables;
pub use hour::{VisitHour, VisitHourError};
pub use park::{Park, UnknownParkError};
pub use profile::PreferenceProfile;
pub use rank::{DEFAULT_TOP_PICKS, Ranking, rank};
pub use ride::{Ride, ScoredRide};
pub use scorer::Scorer;
pub use source::{RideSource, RideSourceError};
pub use topology::{Asymmetry, Topology, TopologyRegistry};
pub use wait::{DESIRABILITY_CEILING, WaitCurve, desirability, desirability_unrounded};
