//! Rule-based implementation of the [`Scorer`] trait.
#![forbid(unsafe_code)]

use std::sync::Arc;

use parkpicks_core::{
    ClassificationTables, Park, PreferenceProfile, Ride, Scorer, TopologyRegistry,
};
use serde::Serialize;

use crate::{Rule, RuleContext, RuleWeights, RuleWeightsError, standard_rules};

/// Points contributed by one rule while scoring a ride.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleContribution {
    /// Identifier of the rule, as returned by [`Rule::name`].
    pub rule: &'static str,
    /// Points added to the score. Penalties are negative.
    pub points: f64,
}

/// Sums the contributions of an ordered rule list.
///
/// The scorer shares its classification tables and topology through [`Arc`],
/// so cloning it is cheap and one instance can serve concurrent requests.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use parkpicks_core::{
///     Category, ClassificationTables, Park, PreferenceProfile, Ride, Scorer, TopologyRegistry,
///     VisitHour,
/// };
/// use parkpicks_scorer::RuleScorer;
///
/// let tables = ClassificationTables::new().with_ride(Category::Chill, "Jungle Cruise");
/// let scorer = RuleScorer::new(Arc::new(tables), Arc::new(TopologyRegistry::new()));
/// let ride = Ride::new("Jungle Cruise", "Adventureland", 20, true);
/// let profile = PreferenceProfile::new(VisitHour::new(14)?);
///
/// // wait 15, chill match 30, no kids -10, far -10
/// assert_eq!(scorer.score(Park::Disneyland, &ride, &profile), 25.0);
/// # Ok::<(), parkpicks_core::VisitHourError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RuleScorer {
    tables: Arc<ClassificationTables>,
    topology: Arc<TopologyRegistry>,
    rules: Vec<Rule>,
}

impl RuleScorer {
    /// Build a scorer with the default weights.
    #[must_use]
    pub fn new(tables: Arc<ClassificationTables>, topology: Arc<TopologyRegistry>) -> Self {
        Self {
            tables,
            topology,
            rules: standard_rules(&RuleWeights::default()),
        }
    }

    /// Replace the rule list with one built from `weights`.
    ///
    /// # Errors
    /// Returns [`RuleWeightsError`] when the weights fail validation.
    pub fn with_weights(mut self, weights: RuleWeights) -> Result<Self, RuleWeightsError> {
        self.rules = standard_rules(&weights.validate()?);
        Ok(self)
    }

    /// Replace the rule list verbatim.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classification tables consulted by the rules.
    #[must_use]
    pub fn tables(&self) -> &ClassificationTables {
        &self.tables
    }

    /// Land topology consulted by the proximity rule.
    #[must_use]
    pub fn topology(&self) -> &TopologyRegistry {
        &self.topology
    }

    /// Break a ride's score down into the rules that fired.
    ///
    /// The contributions appear in rule order and sum to
    /// [`Scorer::score`].
    #[must_use]
    pub fn explain(
        &self,
        park: Park,
        ride: &Ride,
        profile: &PreferenceProfile,
    ) -> Vec<RuleContribution> {
        let context = RuleContext {
            park,
            ride,
            profile,
            tables: &self.tables,
            topology: &self.topology,
        };
        self.rules
            .iter()
            .filter_map(|rule| {
                rule.evaluate(&context).map(|points| RuleContribution {
                    rule: rule.name(),
                    points,
                })
            })
            .collect()
    }
}

impl Scorer for RuleScorer {
    fn score(&self, park: Park, ride: &Ride, profile: &PreferenceProfile) -> f64 {
        self.explain(park, ride, profile)
            .iter()
            .map(|contribution| contribution.points)
            .sum()
    }
}
