//! Supply ride records for a park.
//!
//! The `RideSource` trait abstracts the live wait-time provider. The engine
//! never retries a failed source; callers decide how to surface the error.

use thiserror::Error;

use crate::{Park, Ride};

/// Errors from [`RideSource::rides`].
#[derive(Debug, Error)]
pub enum RideSourceError {
    /// The source holds no data for the park.
    #[error("no ride data is available for {park}")]
    Unavailable {
        /// Park that was requested.
        park: Park,
    },
    /// Reading the underlying data failed.
    #[error("failed to read ride data for {park}")]
    Io {
        /// Park that was requested.
        park: Park,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The payload could not be decoded into ride records.
    #[error("malformed ride data for {park}: {message}")]
    Malformed {
        /// Park that was requested.
        park: Park,
        /// Decoder diagnostics.
        message: String,
    },
}

/// Fetch the current ride list for a park.
///
/// Implementations return every ride the provider knows about, open or
/// closed; filtering is the engine's job.
///
/// # Examples
///
/// ```rust
/// use parkpicks_core::{Park, Ride, RideSource, RideSourceError};
///
/// struct OneRide;
///
/// impl RideSource for OneRide {
///     fn rides(&self, park: Park) -> Result<Vec<Ride>, RideSourceError> {
///         match park {
///             Park::Epcot => Ok(vec![Ride::new("Test Track", "World Discovery", 55, true)]),
///             other => Err(RideSourceError::Unavailable { park: other }),
///         }
///     }
/// }
///
/// assert_eq!(OneRide.rides(Park::Epcot)?.len(), 1);
/// assert!(OneRide.rides(Park::Disneyland).is_err());
/// # Ok::<(), RideSourceError>(())
/// ```
pub trait RideSource: Send + Sync {
    /// Return the rides currently reported for `park`.
    ///
    /// # Errors
    /// Returns [`RideSourceError`] when the data cannot be obtained.
    fn rides(&self, park: Park) -> Result<Vec<Ride>, RideSourceError>;
}
