//! Category membership tables keyed by exact ride name.
//!
//! Lookups are case-sensitive and make no attempt to reconcile punctuation
//! variants: `"Mickey's PhilharMagic"` and `"Mickey’s PhilharMagic"` are
//! different rides as far as the tables are concerned.

use std::collections::{BTreeSet, HashMap};

use crate::Category;

/// Immutable sets of ride names, one per [`Category`].
///
/// Build the tables once, then share them read-only (typically behind an
/// `Arc`) across every scoring request.
///
/// # Examples
/// ```
/// use parkpicks_core::{Category, ClassificationTables};
///
/// let tables = ClassificationTables::new()
///     .with_ride(Category::Thrill, "Space Mountain")
///     .with_rides(Category::Indoor, ["Space Mountain", "Haunted Mansion"]);
/// assert!(tables.is_member(Category::Thrill, "Space Mountain"));
/// assert!(!tables.is_member(Category::Thrill, "space mountain"));
/// assert!(!tables.is_member(Category::Chill, "Space Mountain"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationTables {
    sets: HashMap<Category, BTreeSet<String>>,
}

impl ClassificationTables {
    /// Create empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a ride with a category.
    pub fn insert(&mut self, category: Category, ride_name: impl Into<String>) {
        self.sets
            .entry(category)
            .or_default()
            .insert(ride_name.into());
    }

    /// Tag a ride while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_ride(mut self, category: Category, ride_name: impl Into<String>) -> Self {
        self.insert(category, ride_name);
        self
    }

    /// Tag several rides with the same category.
    #[must_use]
    pub fn with_rides<I, S>(mut self, category: Category, ride_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in ride_names {
            self.insert(category, name);
        }
        self
    }

    /// Report whether `ride_name` carries `category`.
    #[must_use]
    pub fn is_member(&self, category: Category, ride_name: &str) -> bool {
        self.sets
            .get(&category)
            .is_some_and(|names| names.contains(ride_name))
    }

    /// Return every category a ride belongs to, in declaration order.
    #[must_use]
    pub fn categories_of(&self, ride_name: &str) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|category| self.is_member(*category, ride_name))
            .collect()
    }

    /// Iterate over the rides in one category, sorted by name.
    pub fn rides(&self, category: Category) -> impl Iterator<Item = &str> {
        self.sets
            .get(&category)
            .into_iter()
            .flat_map(|names| names.iter().map(String::as_str))
    }

    /// Number of rides tagged with `category`.
    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        self.sets.get(&category).map_or(0, BTreeSet::len)
    }

    /// Report whether no ride is tagged at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.values().all(BTreeSet::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn tables() -> ClassificationTables {
        ClassificationTables::new()
            .with_rides(Category::Chill, ["Jungle Cruise", "it's a small world"])
            .with_rides(Category::Indoor, ["it's a small world"])
            .with_ride(Category::CommonlySkipped, "Mickey’s PhilharMagic")
    }

    #[rstest]
    #[case(Category::Chill, "Jungle Cruise", true)]
    #[case(Category::Chill, "jungle cruise", false)]
    #[case(Category::Indoor, "Jungle Cruise", false)]
    #[case(Category::CommonlySkipped, "Mickey’s PhilharMagic", true)]
    #[case(Category::CommonlySkipped, "Mickey's PhilharMagic", false)]
    #[case(Category::Thrill, "Jungle Cruise", false)]
    fn membership_is_exact(
        tables: ClassificationTables,
        #[case] category: Category,
        #[case] name: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(tables.is_member(category, name), expected);
    }

    #[rstest]
    fn lists_categories_of_a_ride(tables: ClassificationTables) {
        assert_eq!(
            tables.categories_of("it's a small world"),
            vec![Category::Chill, Category::Indoor]
        );
        assert!(tables.categories_of("Space Mountain").is_empty());
    }

    #[rstest]
    fn counts_and_iterates(tables: ClassificationTables) {
        assert_eq!(tables.len(Category::Chill), 2);
        assert_eq!(tables.len(Category::Thrill), 0);
        let chill: Vec<&str> = tables.rides(Category::Chill).collect();
        assert_eq!(chill, vec!["Jungle Cruise", "it's a small world"]);
        assert!(!tables.is_empty());
        assert!(ClassificationTables::new().is_empty());
    }
}
