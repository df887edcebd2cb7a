//! Ride records as reported by the live wait-time feed, and their scored
//! counterparts.

/// A single attraction's state at the time of a feed fetch.
///
/// Records are built fresh for every fetch and never mutated afterwards.
///
/// # Examples
/// ```
/// use parkpicks_core::Ride;
///
/// let ride = Ride::new("Peter Pan's Flight", "Fantasyland", 20, true);
/// assert_eq!(ride.wait_time, 20);
/// assert!(ride.is_open);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ride {
    /// Ride name, unique within its land.
    pub name: String,
    /// Land (themed zone) containing the ride.
    pub land: String,
    /// Posted wait in minutes.
    pub wait_time: u32,
    /// Whether the ride is currently operating.
    pub is_open: bool,
}

impl Ride {
    /// Construct a ride record.
    pub fn new(
        name: impl Into<String>,
        land: impl Into<String>,
        wait_time: u32,
        is_open: bool,
    ) -> Self {
        Self {
            name: name.into(),
            land: land.into(),
            wait_time,
            is_open,
        }
    }
}

/// A ride paired with the score it earned for one request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredRide {
    /// Ride name.
    pub name: String,
    /// Posted wait in minutes.
    pub wait_time: u32,
    /// Additive recommendation score; higher is better.
    pub score: f64,
}

impl ScoredRide {
    /// Pair a ride with its score.
    #[must_use]
    pub fn from_ride(ride: &Ride, score: f64) -> Self {
        Self {
            name: ride.name.clone(),
            wait_time: ride.wait_time,
            score,
        }
    }
}
