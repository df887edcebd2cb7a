//! Score rides for a visitor.
//!
//! The `Scorer` trait assigns a recommendation score to an open [`Ride`]
//! given the [`Park`] it belongs to and a visitor's
//! [`PreferenceProfile`].

use crate::{Park, PreferenceProfile, Ride};

/// Calculate a recommendation score for a ride.
///
/// Higher scores indicate a better pick. Scores are additive and unbounded:
/// penalties may push them below zero. Implementations must be thread-safe
/// (`Send` + `Sync`) so one scorer can serve concurrent requests, and must be
/// pure: identical inputs always produce the identical score.
///
/// Callers only score open rides; closed rides are filtered out beforehand.
///
/// # Examples
///
/// ```rust
/// use parkpicks_core::{Park, PreferenceProfile, Ride, Scorer, VisitHour};
///
/// struct ShortestWait;
///
/// impl Scorer for ShortestWait {
///     fn score(&self, _park: Park, ride: &Ride, _profile: &PreferenceProfile) -> f64 {
///         -f64::from(ride.wait_time)
///     }
/// }
///
/// let ride = Ride::new("Dumbo the Flying Elephant", "Fantasyland", 15, true);
/// let profile = PreferenceProfile::new(VisitHour::new(10)?);
/// assert_eq!(ShortestWait.score(Park::Disneyland, &ride, &profile), -15.0);
/// # Ok::<(), parkpicks_core::VisitHourError>(())
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `ride` in `park` according to `profile`.
    fn score(&self, park: Park, ride: &Ride, profile: &PreferenceProfile) -> f64;
}

impl<T: Scorer + ?Sized> Scorer for &T {
    fn score(&self, park: Park, ride: &Ride, profile: &PreferenceProfile) -> f64 {
        (**self).score(park, ride, profile)
    }
}

impl<T: Scorer + ?Sized> Scorer for Box<T> {
    fn score(&self, park: Park, ride: &Ride, profile: &PreferenceProfile) -> f64 {
        (**self).score(park, ride, profile)
    }
}
