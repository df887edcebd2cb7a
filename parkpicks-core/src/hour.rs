//! Hour-of-day used for time-sensitive scoring rules.

use thiserror::Error;

/// Errors returned when constructing a [`VisitHour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VisitHourError {
    /// The hour was outside `0..=23`.
    #[error("hour {hour} is outside 0..=23")]
    OutOfRange {
        /// Rejected hour.
        hour: u8,
    },
    /// The minute was outside `0..=59`.
    #[error("minute {minute} is outside 0..=59")]
    MinuteOutOfRange {
        /// Rejected minute.
        minute: u8,
    },
}

/// A validated local hour in `0..=23`.
///
/// # Examples
/// ```
/// use parkpicks_core::VisitHour;
///
/// let hour = VisitHour::from_wall_clock(14, 5)?;
/// assert_eq!(hour.get(), 15);
/// assert!(VisitHour::new(24).is_err());
/// # Ok::<(), parkpicks_core::VisitHourError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct VisitHour(u8);

impl VisitHour {
    /// Validate an hour.
    ///
    /// # Errors
    /// Returns [`VisitHourError::OutOfRange`] when `hour > 23`.
    pub const fn new(hour: u8) -> Result<Self, VisitHourError> {
        if hour > 23 {
            return Err(VisitHourError::OutOfRange { hour });
        }
        Ok(Self(hour))
    }

    /// Derive the scoring hour from a wall-clock time.
    ///
    /// Any minutes past the hour round up to the next hour, wrapping from
    /// 23 to 0.
    ///
    /// # Errors
    /// Returns [`VisitHourError`] when either component is out of range.
    pub const fn from_wall_clock(hour: u8, minute: u8) -> Result<Self, VisitHourError> {
        if minute > 59 {
            return Err(VisitHourError::MinuteOutOfRange { minute });
        }
        let base = match Self::new(hour) {
            Ok(base) => base,
            Err(err) => return Err(err),
        };
        if minute == 0 {
            return Ok(base);
        }
        if base.0 == 23 {
            Ok(Self(0))
        } else {
            Ok(Self(base.0 + 1))
        }
    }

    /// Return the raw hour.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for VisitHour {
    type Error = VisitHourError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VisitHour> for u8 {
    fn from(hour: VisitHour) -> Self {
        hour.0
    }
}

impl std::fmt::Display for VisitHour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}
