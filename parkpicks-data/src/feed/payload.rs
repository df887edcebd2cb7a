//! Wire types for the live wait-time feed.
//!
//! The provider groups rides by land. A handful of rides are also reported
//! at the top level without a land; those cannot be placed on the park map
//! and are dropped during conversion.

use std::io::Read;

use log::warn;
use parkpicks_core::{Park, Ride, RideSourceError};
use serde::{Deserialize, Deserializer};

/// One snapshot of a park's queue times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedPayload {
    /// Rides grouped by land.
    #[serde(default)]
    pub lands: Vec<FeedLand>,
    /// Rides reported without a land.
    #[serde(default)]
    pub rides: Vec<FeedRide>,
}

/// A themed land and its rides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedLand {
    /// Provider identifier.
    #[serde(default)]
    pub id: Option<u64>,
    /// Land name, as used by the topology tables.
    pub name: String,
    /// Rides located in this land.
    #[serde(default)]
    pub rides: Vec<FeedRide>,
}

/// A single ride entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedRide {
    /// Provider identifier.
    #[serde(default)]
    pub id: Option<u64>,
    /// Ride name, as used by the classification tables.
    pub name: String,
    /// Whether the ride is operating.
    #[serde(default)]
    pub is_open: bool,
    /// Posted wait in minutes. `null` or absent reads as zero.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub wait_time: u32,
    /// Provider timestamp of the last update.
    #[serde(default)]
    pub last_updated: Option<String>,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u32>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl FeedPayload {
    /// Decode a payload from JSON.
    ///
    /// # Errors
    /// Returns [`RideSourceError::Malformed`] when the JSON does not match
    /// the feed format.
    pub fn from_reader<R: Read>(park: Park, reader: R) -> Result<Self, RideSourceError> {
        serde_json::from_reader(reader).map_err(|err| RideSourceError::Malformed {
            park,
            message: err.to_string(),
        })
    }

    /// Flatten the payload into ride records, in feed order.
    #[must_use]
    pub fn into_rides(self, park: Park) -> Vec<Ride> {
        for orphan in &self.rides {
            warn!("{park}: skipping '{}', which has no land", orphan.name);
        }
        self.lands
            .into_iter()
            .flat_map(|land| {
                let FeedLand { name, rides, .. } = land;
                rides.into_iter().map(move |ride| {
                    Ride::new(ride.name, name.clone(), ride.wait_time, ride.is_open)
                })
            })
            .collect()
    }
}
