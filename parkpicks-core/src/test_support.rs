//! Test-only, in-memory `RideSource` and `Scorer` implementations used by
//! unit and behaviour tests.

use std::collections::HashMap;

use crate::{Park, PreferenceProfile, Ride, RideSource, RideSourceError, Scorer};

/// In-memory `RideSource` holding fixed ride lists per park.
///
/// Parks without a list report [`RideSourceError::Unavailable`].
#[derive(Default, Debug, Clone)]
pub struct MemoryRideSource {
    rides: HashMap<Park, Vec<Ride>>,
}

impl MemoryRideSource {
    /// Create a source serving `rides` for a single park.
    pub fn with_rides<I>(park: Park, rides: I) -> Self
    where
        I: IntoIterator<Item = Ride>,
    {
        let mut source = Self::default();
        source.rides.insert(park, rides.into_iter().collect());
        source
    }
}

impl RideSource for MemoryRideSource {
    fn rides(&self, park: Park) -> Result<Vec<Ride>, RideSourceError> {
        self.rides
            .get(&park)
            .cloned()
            .ok_or(RideSourceError::Unavailable { park })
    }
}

/// Deterministic `Scorer` that prefers shorter waits, one point per minute.
#[derive(Default, Debug, Copy, Clone)]
pub struct NegatedWaitScorer;

impl Scorer for NegatedWaitScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the score is the negated wait"
    )]
    fn score(&self, _park: Park, ride: &Ride, _profile: &PreferenceProfile) -> f64 {
        -f64::from(ride.wait_time)
    }
}
