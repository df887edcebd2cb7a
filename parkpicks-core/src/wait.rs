//! Wait-time desirability.
//!
//! A logistic curve turns posted wait minutes into a desirability value in
//! `(0, 120)`: short waits score close to the ceiling, long waits fall
//! towards zero, and the midpoint wait scores exactly half of the ceiling.

/// Upper bound of the desirability curve.
pub const DESIRABILITY_CEILING: f64 = 120.0;

/// Logistic desirability of a wait, rounded to two decimal places.
///
/// Computes `120 / (1 + exp(steepness * (wait_minutes - midpoint)))`.
/// Rounding keeps scores reproducible across platforms; use
/// [`desirability_unrounded`] when the exact curve is needed.
///
/// # Examples
/// ```
/// use parkpicks_core::desirability;
///
/// assert_eq!(desirability(20.0, 0.12, 20.0), 60.0);
/// assert!(desirability(5.0, 0.12, 20.0) > desirability(45.0, 0.12, 20.0));
/// ```
#[must_use]
pub fn desirability(wait_minutes: f64, steepness: f64, midpoint: f64) -> f64 {
    round_to_hundredths(desirability_unrounded(wait_minutes, steepness, midpoint))
}

/// Logistic desirability of a wait without rounding.
#[expect(
    clippy::float_arithmetic,
    reason = "the logistic curve is defined over real numbers"
)]
#[must_use]
pub fn desirability_unrounded(wait_minutes: f64, steepness: f64, midpoint: f64) -> f64 {
    DESIRABILITY_CEILING / (1.0 + (steepness * (wait_minutes - midpoint)).exp())
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by a power of ten"
)]
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Parameters for the wait-time term of a ride's score.
///
/// # Examples
/// ```
/// use parkpicks_core::WaitCurve;
///
/// let curve = WaitCurve::default();
/// assert_eq!(curve.contribution(20), 15.0);
/// assert!(curve.contribution(0) <= curve.max_contribution());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitCurve {
    /// Sharpness of the drop-off around the midpoint.
    pub steepness: f64,
    /// Wait, in minutes, scoring half of the ceiling.
    pub midpoint: f64,
    /// Multiplier applied to the desirability.
    pub scale: f64,
}

impl WaitCurve {
    /// Desirability of a wait before scaling.
    #[must_use]
    pub fn desirability(&self, wait_minutes: u32) -> f64 {
        desirability(f64::from(wait_minutes), self.steepness, self.midpoint)
    }

    /// Scaled desirability, as added to a ride's score.
    #[expect(
        clippy::float_arithmetic,
        reason = "the wait term scales the desirability"
    )]
    #[must_use]
    pub fn contribution(&self, wait_minutes: u32) -> f64 {
        self.desirability(wait_minutes) * self.scale
    }

    /// Upper bound of [`WaitCurve::contribution`].
    #[expect(
        clippy::float_arithmetic,
        reason = "the bound scales the curve ceiling"
    )]
    #[must_use]
    pub fn max_contribution(&self) -> f64 {
        DESIRABILITY_CEILING * self.scale
    }
}

impl Default for WaitCurve {
    fn default() -> Self {
        Self {
            steepness: 0.12,
            midpoint: 20.0,
            scale: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-9;

    #[expect(
        clippy::float_arithmetic,
        reason = "assertions compare floats within a tolerance"
    )]
    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    #[case(20, 60.0)]
    #[case(0, 110.02)]
    #[case(40, 9.98)]
    #[case(120, 0.0)]
    fn default_curve_values(#[case] wait: u32, #[case] expected: f64) {
        let curve = WaitCurve::default();
        assert_close(curve.desirability(wait), expected);
    }

    #[rstest]
    fn midpoint_contributes_fifteen() {
        assert_close(WaitCurve::default().contribution(20), 15.0);
    }

    #[rstest]
    fn contribution_never_exceeds_thirty() {
        let curve = WaitCurve::default();
        assert_close(curve.max_contribution(), 30.0);
        assert!(curve.contribution(0) < curve.max_contribution());
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "test rescales the value to inspect its decimals"
    )]
    fn rounds_to_two_decimals() {
        let value = desirability(7.0, 0.12, 20.0);
        assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-6);
    }
}
