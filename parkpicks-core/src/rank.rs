//! Ordering of scored rides.

use crate::ScoredRide;

/// Number of picks shown to visitors.
pub const DEFAULT_TOP_PICKS: usize = 5;

/// Scored rides ordered from best to worst.
///
/// Ordering is descending by score. The sort is stable, so rides with equal
/// scores keep the order in which they were scored.
///
/// # Examples
/// ```
/// use parkpicks_core::{ScoredRide, rank};
///
/// let ranking = rank(vec![
///     ScoredRide { name: "Dumbo".into(), wait_time: 10, score: 12.0 },
///     ScoredRide { name: "Matterhorn".into(), wait_time: 45, score: 40.0 },
/// ]);
/// assert_eq!(ranking.top_n(1)[0].name, "Matterhorn");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ranking {
    rides: Vec<ScoredRide>,
}

/// Sort scored rides descending by score.
#[must_use]
pub fn rank(mut scored: Vec<ScoredRide>) -> Ranking {
    scored.sort_by(|left, right| right.score.total_cmp(&left.score));
    Ranking { rides: scored }
}

impl Ranking {
    /// The first `n` rides, or all of them when fewer are ranked.
    #[must_use]
    pub fn top_n(&self, n: usize) -> &[ScoredRide] {
        let end = n.min(self.rides.len());
        self.rides.get(..end).unwrap_or_default()
    }

    /// The [`DEFAULT_TOP_PICKS`] best rides.
    #[must_use]
    pub fn top_picks(&self) -> &[ScoredRide] {
        self.top_n(DEFAULT_TOP_PICKS)
    }

    /// Every ranked ride.
    #[must_use]
    pub fn as_slice(&self) -> &[ScoredRide] {
        &self.rides
    }

    /// Iterate over the ranked rides, best first.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredRide> {
        self.rides.iter()
    }

    /// Number of ranked rides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rides.len()
    }

    /// Report whether nothing was ranked.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    /// Consume the ranking, keeping at most `n` rides.
    #[must_use]
    pub fn into_top_n(mut self, n: usize) -> Vec<ScoredRide> {
        self.rides.truncate(n);
        self.rides
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a ScoredRide;
    type IntoIter = std::slice::Iter<'a, ScoredRide>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
