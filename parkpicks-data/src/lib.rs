//! Data sources for the Park Picks engine.
//!
//! Responsibilities:
//! - Ship the built-in catalogue: land topology for every park and the ride
//!   classification tables.
//! - Decode live wait-time feed snapshots into [`Ride`](parkpicks_core::Ride)
//!   records.
//! - Provide [`FeedDirectorySource`], a file-backed
//!   [`RideSource`](parkpicks_core::RideSource).
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `parkpicks-scorer`).
//! - No network access; snapshots are fetched by something else.
#![forbid(unsafe_code)]

mod catalogue;
mod feed;

pub use catalogue::{Catalogue, builtin_tables, builtin_topology, park_topology};
pub use feed::{FeedDirectorySource, FeedLand, FeedPayload, FeedRide};
