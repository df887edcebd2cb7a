//! Turn a ride list into ranked recommendations.
#![forbid(unsafe_code)]

use log::debug;
use parkpicks_core::{
    Park, PreferenceProfile, Ranking, Ride, RideSource, ScoredRide, Scorer, rank,
};

use crate::RecommendError;

/// Scores open rides and ranks them for one visitor.
///
/// The recommender is generic over the [`Scorer`] so tests can swap in a
/// deterministic stand-in. It never retries a failing [`RideSource`].
#[derive(Debug, Clone)]
pub struct Recommender<S>
where
    S: Scorer,
{
    scorer: S,
}

impl<S> Recommender<S>
where
    S: Scorer,
{
    /// Wrap a scorer.
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Scorer used for every ride.
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Rank the open rides in `rides`.
    ///
    /// Closed rides are dropped before scoring. Rides with equal scores keep
    /// their order from `rides`.
    #[must_use]
    pub fn recommend_rides(
        &self,
        park: Park,
        profile: &PreferenceProfile,
        rides: &[Ride],
    ) -> Ranking {
        let scored: Vec<ScoredRide> = rides
            .iter()
            .filter(|ride| ride.is_open)
            .map(|ride| ScoredRide::from_ride(ride, self.scorer.score(park, ride, profile)))
            .collect();
        let closed = rides.len().saturating_sub(scored.len());
        let ranking = rank(scored);
        debug!(
            "ranked {} open rides for {park} at {} ({closed} closed)",
            ranking.len(),
            profile.hour()
        );
        ranking
    }

    /// Fetch rides from `source` and rank them.
    ///
    /// # Errors
    /// Returns [`RecommendError::Source`] when the source fails.
    pub fn recommend(
        &self,
        source: &dyn RideSource,
        park: Park,
        profile: &PreferenceProfile,
    ) -> Result<Ranking, RecommendError> {
        let rides = source
            .rides(park)
            .map_err(|source| RecommendError::Source { park, source })?;
        Ok(self.recommend_rides(park, profile, &rides))
    }
}
