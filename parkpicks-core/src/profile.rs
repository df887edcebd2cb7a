//! Visitor preference profiles.
//!
//! A profile is assembled once per recommendation request and only read
//! afterwards. Chaining setters keep call sites readable.

use crate::VisitHour;

/// What a visitor wants from the next ride.
///
/// # Examples
/// ```
/// use parkpicks_core::{PreferenceProfile, VisitHour};
///
/// let profile = PreferenceProfile::new(VisitHour::new(14)?)
///     .with_current_land("Fantasyland")
///     .with_kids(true);
/// assert_eq!(profile.current_land(), Some("Fantasyland"));
/// assert!(profile.travelling_with_kids());
/// assert!(!profile.prefers_thrills());
/// # Ok::<(), parkpicks_core::VisitHourError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent visitor preference read by one scoring rule"
)]
pub struct PreferenceProfile {
    #[cfg_attr(feature = "serde", serde(default))]
    thrill_chill: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    current_land: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    prefer_indoor: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    with_kids: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    single_rider: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    include_skipped: bool,
    hour: VisitHour,
}

impl PreferenceProfile {
    /// Construct a profile with every preference switched off and no
    /// current land.
    #[must_use]
    pub const fn new(hour: VisitHour) -> Self {
        Self {
            thrill_chill: false,
            current_land: None,
            prefer_indoor: false,
            with_kids: false,
            single_rider: false,
            include_skipped: false,
            hour,
        }
    }

    /// Prefer thrill rides (`true`) or chill rides (`false`).
    #[must_use]
    pub const fn with_thrill(mut self, thrill: bool) -> Self {
        self.thrill_chill = thrill;
        self
    }

    /// Set the land the visitor is standing in.
    #[must_use]
    pub fn with_current_land(mut self, land: impl Into<String>) -> Self {
        self.current_land = Some(land.into());
        self
    }

    /// Prefer indoor rides.
    #[must_use]
    pub const fn with_indoor(mut self, indoor: bool) -> Self {
        self.prefer_indoor = indoor;
        self
    }

    /// The party includes children.
    #[must_use]
    pub const fn with_kids(mut self, kids: bool) -> Self {
        self.with_kids = kids;
        self
    }

    /// The visitor is happy to use single-rider lines.
    #[must_use]
    pub const fn with_single_rider(mut self, single_rider: bool) -> Self {
        self.single_rider = single_rider;
        self
    }

    /// Keep commonly-skipped attractions at full value.
    #[must_use]
    pub const fn with_skipped(mut self, include_skipped: bool) -> Self {
        self.include_skipped = include_skipped;
        self
    }

    /// Whether thrill rides are preferred over chill rides.
    #[must_use]
    pub const fn prefers_thrills(&self) -> bool {
        self.thrill_chill
    }

    /// The land the visitor is in, if known.
    #[must_use]
    pub fn current_land(&self) -> Option<&str> {
        self.current_land.as_deref()
    }

    /// Whether indoor rides are preferred.
    #[must_use]
    pub const fn prefers_indoor(&self) -> bool {
        self.prefer_indoor
    }

    /// Whether the party includes children.
    #[must_use]
    pub const fn travelling_with_kids(&self) -> bool {
        self.with_kids
    }

    /// Whether single-rider lines are acceptable.
    #[must_use]
    pub const fn single_rider(&self) -> bool {
        self.single_rider
    }

    /// Whether commonly-skipped attractions keep their full score.
    #[must_use]
    pub const fn includes_skipped(&self) -> bool {
        self.include_skipped
    }

    /// Hour used by time-sensitive rules.
    #[must_use]
    pub const fn hour(&self) -> VisitHour {
        self.hour
    }
}
