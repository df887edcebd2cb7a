//! Decoding live wait-time feed snapshots.

mod payload;
mod source;

pub use payload::{FeedLand, FeedPayload, FeedRide};
pub use source::FeedDirectorySource;
