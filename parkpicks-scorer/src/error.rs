//! Errors raised while producing recommendations.
#![forbid(unsafe_code)]

use parkpicks_core::{Park, RideSourceError};
use thiserror::Error;

/// Errors returned by [`Recommender::recommend`](crate::Recommender::recommend).
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The ride source could not supply rides for the park.
    #[error("could not load rides for {park}: {source}")]
    Source {
        /// Park that was requested.
        park: Park,
        /// Source error from the ride provider.
        #[source]
        source: RideSourceError,
    },
}
