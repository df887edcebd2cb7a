//! The scoring rules, evaluated in order for every open ride.
//!
//! Each rule inspects one aspect of the ride (category membership, land,
//! wait) against the visitor's profile and either contributes a fixed number
//! of points or stays silent. Rules never depend on each other, so the final
//! score is simply the sum of whatever fired.
#![forbid(unsafe_code)]

use parkpicks_core::{
    Category, ClassificationTables, Park, PreferenceProfile, Ride, TopologyRegistry, WaitCurve,
};

use crate::RuleWeights;

/// Everything a rule may look at while scoring one ride.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Park the ride belongs to.
    pub park: Park,
    /// Ride being scored.
    pub ride: &'a Ride,
    /// Visitor preferences.
    pub profile: &'a PreferenceProfile,
    /// Category membership tables.
    pub tables: &'a ClassificationTables,
    /// Land adjacency for every park.
    pub topology: &'a TopologyRegistry,
}

impl RuleContext<'_> {
    fn ride_is(&self, category: Category) -> bool {
        self.tables.is_member(category, &self.ride.name)
    }

    fn proximity(&self) -> Proximity {
        Proximity::classify(
            self.topology,
            self.park,
            &self.ride.land,
            self.profile.current_land(),
        )
    }
}

/// Where a ride sits relative to the visitor.
///
/// Exactly one variant applies to any ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    /// The ride is in the visitor's current land.
    SameLand,
    /// The current land declares the ride's land as a neighbour.
    Nearby,
    /// Neither, including when the current land is unknown.
    Far,
}

impl Proximity {
    /// Classify a ride's land against the visitor's current land.
    ///
    /// Adjacency is read from the current land's entry only, matching how
    /// the topology tables are declared.
    #[must_use]
    pub fn classify(
        topology: &TopologyRegistry,
        park: Park,
        ride_land: &str,
        current_land: Option<&str>,
    ) -> Self {
        match current_land {
            Some(current) if current == ride_land => Self::SameLand,
            Some(current) if topology.is_adjacent(park, current, ride_land) => Self::Nearby,
            _ => Self::Far,
        }
    }
}

/// One entry of the scoring rule list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Scaled logistic desirability of the posted wait. Always fires.
    WaitDesirability(WaitCurve),
    /// Bonus when the ride matches the thrill or chill preference.
    PaceMatch {
        /// Points for a match.
        bonus: f64,
    },
    /// Bonus for indoor rides when the visitor prefers them.
    IndoorPreference {
        /// Points for an indoor ride.
        bonus: f64,
    },
    /// Bonus for kid-friendly rides with children, penalty otherwise.
    KidFriendliness {
        /// Points for a kid-friendly ride with children in the party.
        bonus: f64,
        /// Points for every other case.
        penalty: f64,
    },
    /// Same land, adjacent land, or far away. Always fires.
    Proximity {
        /// Points for the current land.
        same_land: f64,
        /// Points for an adjacent land.
        nearby: f64,
        /// Points for any other land.
        far: f64,
    },
    /// Bonus for night-ambiance rides after dark.
    NightAmbiance {
        /// Points after dark.
        bonus: f64,
        /// First hour counted as after dark.
        from_hour: u8,
    },
    /// Bonus for rope-drop rides early, penalty later.
    RopeDrop {
        /// Points up to and including `until_hour`.
        bonus: f64,
        /// Points after `until_hour`.
        penalty: f64,
        /// Last hour counted as early.
        until_hour: u8,
    },
    /// Single-rider preference: bonus for single-rider entries, penalty for
    /// the rest. Silent when the visitor has not opted in.
    SingleRider {
        /// Points for a single-rider entry.
        bonus: f64,
        /// Points for any other ride.
        penalty: f64,
    },
    /// Penalty for commonly-skipped attractions unless explicitly included.
    CommonlySkipped {
        /// Points for a skipped attraction.
        penalty: f64,
    },
}

impl Rule {
    /// Short stable identifier for logs and score breakdowns.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::WaitDesirability(_) => "wait-desirability",
            Self::PaceMatch { .. } => "pace-match",
            Self::IndoorPreference { .. } => "indoor-preference",
            Self::KidFriendliness { .. } => "kid-friendliness",
            Self::Proximity { .. } => "proximity",
            Self::NightAmbiance { .. } => "night-ambiance",
            Self::RopeDrop { .. } => "rope-drop",
            Self::SingleRider { .. } => "single-rider",
            Self::CommonlySkipped { .. } => "commonly-skipped",
        }
    }

    /// Points contributed by this rule, or `None` when it does not fire.
    #[must_use]
    pub fn evaluate(&self, context: &RuleContext<'_>) -> Option<f64> {
        let profile = context.profile;
        let hour = profile.hour().get();
        match *self {
            Self::WaitDesirability(curve) => Some(curve.contribution(context.ride.wait_time)),
            Self::PaceMatch { bonus } => {
                let wanted = if profile.prefers_thrills() {
                    Category::Thrill
                } else {
                    Category::Chill
                };
                context.ride_is(wanted).then_some(bonus)
            }
            Self::IndoorPreference { bonus } => {
                (profile.prefers_indoor() && context.ride_is(Category::Indoor)).then_some(bonus)
            }
            Self::KidFriendliness { bonus, penalty } => {
                if profile.travelling_with_kids() && context.ride_is(Category::KidFriendly) {
                    Some(bonus)
                } else {
                    Some(penalty)
                }
            }
            Self::Proximity {
                same_land,
                nearby,
                far,
            } => Some(match context.proximity() {
                Proximity::SameLand => same_land,
                Proximity::Nearby => nearby,
                Proximity::Far => far,
            }),
            Self::NightAmbiance { bonus, from_hour } => {
                (context.ride_is(Category::NightAmbiance) && hour >= from_hour).then_some(bonus)
            }
            Self::RopeDrop {
                bonus,
                penalty,
                until_hour,
            } => context
                .ride_is(Category::RopeDrop)
                .then_some(if hour <= until_hour { bonus } else { penalty }),
            Self::SingleRider { bonus, penalty } => profile.single_rider().then(|| {
                if context.ride_is(Category::SingleRider) {
                    bonus
                } else {
                    penalty
                }
            }),
            Self::CommonlySkipped { penalty } => (!profile.includes_skipped()
                && context.ride_is(Category::CommonlySkipped))
            .then_some(penalty),
        }
    }
}

/// Build the production rule list from a set of weights.
///
/// The order is fixed and mirrors the scoring table: wait, pace, indoor,
/// kids, proximity, night, rope drop, single rider, skipped.
#[must_use]
pub fn standard_rules(weights: &RuleWeights) -> Vec<Rule> {
    vec![
        Rule::WaitDesirability(weights.wait),
        Rule::PaceMatch {
            bonus: weights.pace_match,
        },
        Rule::IndoorPreference {
            bonus: weights.indoor_preference,
        },
        Rule::KidFriendliness {
            bonus: weights.kid_friendly_bonus,
            penalty: weights.kid_friendly_penalty,
        },
        Rule::Proximity {
            same_land: weights.same_land,
            nearby: weights.nearby_land,
            far: weights.far_land,
        },
        Rule::NightAmbiance {
            bonus: weights.night_ambiance,
            from_hour: weights.night_starts_at,
        },
        Rule::RopeDrop {
            bonus: weights.rope_drop_bonus,
            penalty: weights.rope_drop_penalty,
            until_hour: weights.rope_drop_ends_at,
        },
        Rule::SingleRider {
            bonus: weights.single_rider_bonus,
            penalty: weights.single_rider_penalty,
        },
        Rule::CommonlySkipped {
            penalty: weights.commonly_skipped_penalty,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkpicks_core::{Topology, VisitHour};
    use rstest::{fixture, rstest};

    const TOLERANCE: f64 = 1e-9;

    struct Fixture {
        tables: ClassificationTables,
        topology: TopologyRegistry,
    }

    #[fixture]
    fn fixture() -> Fixture {
        let tables = ClassificationTables::new()
            .with_ride(Category::Thrill, "Space Mountain")
            .with_ride(Category::RopeDrop, "Space Mountain")
            .with_ride(Category::Chill, "Jungle Cruise")
            .with_ride(Category::KidFriendly, "Dumbo the Flying Elephant")
            .with_ride(Category::CommonlySkipped, "Dumbo the Flying Elephant")
            .with_ride(Category::NightAmbiance, "Big Thunder Mountain Railroad")
            .with_ride(Category::SingleRider, "Matterhorn Bobsleds Single Rider")
            .with_ride(Category::Indoor, "Pirates of the Caribbean");
        let topology = TopologyRegistry::new().with_park(
            Park::Disneyland,
            Topology::new()
                .with_land("Tomorrowland", ["Fantasyland"])
                .with_land("Fantasyland", ["Tomorrowland", "Frontierland"]),
        );
        Fixture { tables, topology }
    }

    fn profile(hour: u8) -> PreferenceProfile {
        PreferenceProfile::new(VisitHour::new(hour).expect("valid hour"))
    }

    fn evaluate(fixture: &Fixture, rule: Rule, ride: &Ride, profile: &PreferenceProfile) -> Option<f64> {
        let context = RuleContext {
            park: Park::Disneyland,
            ride,
            profile,
            tables: &fixture.tables,
            topology: &fixture.topology,
        };
        rule.evaluate(&context)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "assertions compare points within a tolerance"
    )]
    fn assert_points(actual: Option<f64>, expected: Option<f64>) {
        match (actual, expected) {
            (Some(a), Some(e)) => assert!((a - e).abs() < TOLERANCE, "expected {e}, got {a}"),
            (a, e) => assert_eq!(a, e),
        }
    }

    fn rules() -> Vec<Rule> {
        standard_rules(&RuleWeights::default())
    }

    fn rule_named(name: &str) -> Rule {
        rules()
            .into_iter()
            .find(|rule| rule.name() == name)
            .expect("rule should exist")
    }

    #[rstest]
    #[case(true, "Space Mountain", Some(30.0))]
    #[case(true, "Jungle Cruise", None)]
    #[case(false, "Jungle Cruise", Some(30.0))]
    #[case(false, "Space Mountain", None)]
    fn pace_match(
        fixture: Fixture,
        #[case] thrill: bool,
        #[case] ride: &str,
        #[case] expected: Option<f64>,
    ) {
        let ride = Ride::new(ride, "Tomorrowland", 10, true);
        let profile = profile(12).with_thrill(thrill);
        assert_points(evaluate(&fixture, rule_named("pace-match"), &ride, &profile), expected);
    }

    #[rstest]
    #[case(true, "Pirates of the Caribbean", Some(20.0))]
    #[case(false, "Pirates of the Caribbean", None)]
    #[case(true, "Jungle Cruise", None)]
    fn indoor_preference(
        fixture: Fixture,
        #[case] indoor: bool,
        #[case] ride: &str,
        #[case] expected: Option<f64>,
    ) {
        let ride = Ride::new(ride, "Adventureland", 10, true);
        let profile = profile(12).with_indoor(indoor);
        assert_points(
            evaluate(&fixture, rule_named("indoor-preference"), &ride, &profile),
            expected,
        );
    }

    #[rstest]
    #[case(true, "Dumbo the Flying Elephant", 25.0)]
    #[case(true, "Space Mountain", -10.0)]
    #[case(false, "Dumbo the Flying Elephant", -10.0)]
    #[case(false, "Space Mountain", -10.0)]
    fn kid_friendliness_always_fires(
        fixture: Fixture,
        #[case] kids: bool,
        #[case] ride: &str,
        #[case] expected: f64,
    ) {
        let ride = Ride::new(ride, "Fantasyland", 10, true);
        let profile = profile(12).with_kids(kids);
        assert_points(
            evaluate(&fixture, rule_named("kid-friendliness"), &ride, &profile),
            Some(expected),
        );
    }

    #[rstest]
    #[case(Some("Fantasyland"), "Fantasyland", 25.0)]
    #[case(Some("Fantasyland"), "Frontierland", 15.0)]
    #[case(Some("Tomorrowland"), "Frontierland", -10.0)]
    #[case(Some("Frontierland"), "Fantasyland", -10.0)]
    #[case(None, "Fantasyland", -10.0)]
    #[case(Some("Nowhere"), "Fantasyland", -10.0)]
    fn proximity(
        fixture: Fixture,
        #[case] current: Option<&str>,
        #[case] ride_land: &str,
        #[case] expected: f64,
    ) {
        let ride = Ride::new("Space Mountain", ride_land, 10, true);
        let base = profile(12);
        let profile = match current {
            Some(land) => base.with_current_land(land),
            None => base,
        };
        assert_points(evaluate(&fixture, rule_named("proximity"), &ride, &profile), Some(expected));
    }

    #[rstest]
    #[case(17, None)]
    #[case(18, Some(15.0))]
    #[case(23, Some(15.0))]
    fn night_ambiance(fixture: Fixture, #[case] hour: u8, #[case] expected: Option<f64>) {
        let ride = Ride::new("Big Thunder Mountain Railroad", "Frontierland", 10, true);
        assert_points(
            evaluate(&fixture, rule_named("night-ambiance"), &ride, &profile(hour)),
            expected,
        );
    }

    #[rstest]
    #[case(0, 15.0)]
    #[case(9, 15.0)]
    #[case(10, 15.0)]
    #[case(11, -5.0)]
    #[case(20, -5.0)]
    fn rope_drop(fixture: Fixture, #[case] hour: u8, #[case] expected: f64) {
        let ride = Ride::new("Space Mountain", "Tomorrowland", 10, true);
        assert_points(
            evaluate(&fixture, rule_named("rope-drop"), &ride, &profile(hour)),
            Some(expected),
        );
    }

    #[rstest]
    fn rope_drop_ignores_other_rides(fixture: Fixture) {
        let ride = Ride::new("Jungle Cruise", "Adventureland", 10, true);
        assert_points(evaluate(&fixture, rule_named("rope-drop"), &ride, &profile(9)), None);
    }

    #[rstest]
    #[case(true, "Matterhorn Bobsleds Single Rider", Some(10.0))]
    #[case(true, "Matterhorn Bobsleds", Some(-5.0))]
    #[case(false, "Matterhorn Bobsleds Single Rider", None)]
    #[case(false, "Matterhorn Bobsleds", None)]
    fn single_rider(
        fixture: Fixture,
        #[case] opted_in: bool,
        #[case] ride: &str,
        #[case] expected: Option<f64>,
    ) {
        let ride = Ride::new(ride, "Fantasyland", 10, true);
        let profile = profile(12).with_single_rider(opted_in);
        assert_points(evaluate(&fixture, rule_named("single-rider"), &ride, &profile), expected);
    }

    #[rstest]
    #[case(false, Some(-25.0))]
    #[case(true, None)]
    fn commonly_skipped(fixture: Fixture, #[case] include: bool, #[case] expected: Option<f64>) {
        let ride = Ride::new("Dumbo the Flying Elephant", "Fantasyland", 10, true);
        let profile = profile(12).with_skipped(include);
        assert_points(
            evaluate(&fixture, rule_named("commonly-skipped"), &ride, &profile),
            expected,
        );
    }

    #[rstest]
    fn wait_rule_always_fires(fixture: Fixture) {
        let ride = Ride::new("Unlisted Ride", "Nowhere", 20, true);
        assert_points(
            evaluate(&fixture, rule_named("wait-desirability"), &ride, &profile(12)),
            Some(15.0),
        );
    }

    #[rstest]
    fn standard_rules_keep_table_order() {
        let names: Vec<&str> = rules().iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec![
                "wait-desirability",
                "pace-match",
                "indoor-preference",
                "kid-friendliness",
                "proximity",
                "night-ambiance",
                "rope-drop",
                "single-rider",
                "commonly-skipped",
            ]
        );
    }
}
