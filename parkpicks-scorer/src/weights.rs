//! Tunable contributions for each scoring rule.
#![forbid(unsafe_code)]

use parkpicks_core::WaitCurve;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when validating [`RuleWeights`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleWeightsError {
    /// A contribution or curve parameter was NaN or infinite.
    #[error("weight `{field}` must be finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// An hour threshold was outside `0..=23`.
    #[error("hour threshold `{field}` must be within 0..=23, got {hour}")]
    HourOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected hour.
        hour: u8,
    },
}

/// Points awarded or deducted by each rule.
///
/// Penalties are stored as negative numbers and added like any other
/// contribution. The defaults reproduce the production scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleWeights {
    /// Wait-time curve and its scale.
    pub wait: WaitCurve,
    /// Ride matches the visitor's thrill or chill preference.
    pub pace_match: f64,
    /// Indoor ride for a visitor who prefers indoor rides.
    pub indoor_preference: f64,
    /// Kid-friendly ride for a party with children.
    pub kid_friendly_bonus: f64,
    /// Any ride that does not earn the kid-friendly bonus.
    pub kid_friendly_penalty: f64,
    /// Ride is in the visitor's current land.
    pub same_land: f64,
    /// Ride is in a land adjacent to the current land.
    pub nearby_land: f64,
    /// Ride is neither in nor next to the current land.
    pub far_land: f64,
    /// Night-ambiance ride after dark.
    pub night_ambiance: f64,
    /// First hour counted as after dark.
    pub night_starts_at: u8,
    /// Rope-drop ride early in the day.
    pub rope_drop_bonus: f64,
    /// Rope-drop ride later in the day.
    pub rope_drop_penalty: f64,
    /// Last hour counted as early in the day.
    pub rope_drop_ends_at: u8,
    /// Single-rider entry for a visitor happy to ride alone.
    pub single_rider_bonus: f64,
    /// Any other ride for a visitor happy to ride alone.
    pub single_rider_penalty: f64,
    /// Commonly-skipped attraction when skipped rides are excluded.
    pub commonly_skipped_penalty: f64,
}

impl RuleWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`RuleWeightsError`] when a value is not finite or an hour
    /// threshold is out of range.
    pub fn validate(self) -> Result<Self, RuleWeightsError> {
        let values = [
            ("wait.steepness", self.wait.steepness),
            ("wait.midpoint", self.wait.midpoint),
            ("wait.scale", self.wait.scale),
            ("pace_match", self.pace_match),
            ("indoor_preference", self.indoor_preference),
            ("kid_friendly_bonus", self.kid_friendly_bonus),
            ("kid_friendly_penalty", self.kid_friendly_penalty),
            ("same_land", self.same_land),
            ("nearby_land", self.nearby_land),
            ("far_land", self.far_land),
            ("night_ambiance", self.night_ambiance),
            ("rope_drop_bonus", self.rope_drop_bonus),
            ("rope_drop_penalty", self.rope_drop_penalty),
            ("single_rider_bonus", self.single_rider_bonus),
            ("single_rider_penalty", self.single_rider_penalty),
            ("commonly_skipped_penalty", self.commonly_skipped_penalty),
        ];
        if let Some(&(field, _)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RuleWeightsError::NonFinite { field });
        }
        for (field, hour) in [
            ("night_starts_at", self.night_starts_at),
            ("rope_drop_ends_at", self.rope_drop_ends_at),
        ] {
            if hour > 23 {
                return Err(RuleWeightsError::HourOutOfRange { field, hour });
            }
        }
        Ok(self)
    }
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            wait: WaitCurve::default(),
            pace_match: 30.0,
            indoor_preference: 20.0,
            kid_friendly_bonus: 25.0,
            kid_friendly_penalty: -10.0,
            same_land: 25.0,
            nearby_land: 15.0,
            far_land: -10.0,
            night_ambiance: 15.0,
            night_starts_at: 18,
            rope_drop_bonus: 15.0,
            rope_drop_penalty: -5.0,
            rope_drop_ends_at: 10,
            single_rider_bonus: 10.0,
            single_rider_penalty: -5.0,
            commonly_skipped_penalty: -25.0,
        }
    }
}
