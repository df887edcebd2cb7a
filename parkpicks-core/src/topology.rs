//! Per-park land adjacency.
//!
//! Each park is described as a directed graph: a land lists the lands a
//! visitor can walk to directly. The graph is meant to be symmetric, but the
//! registry stores edges exactly as declared. [`Topology::asymmetries`]
//! reports one-way edges so they can be reviewed as data bugs.

use std::collections::{BTreeSet, HashMap};

use crate::Park;

static NO_NEIGHBOURS: BTreeSet<String> = BTreeSet::new();

/// A one-way adjacency edge with no declared return edge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Asymmetry {
    /// Land that declares the edge.
    pub from: String,
    /// Land that does not declare the edge back.
    pub to: String,
}

/// Land adjacency for a single park.
///
/// # Examples
/// ```
/// use parkpicks_core::Topology;
///
/// let topology = Topology::new()
///     .with_land("Tomorrowland", ["Fantasyland"])
///     .with_land("Fantasyland", ["Tomorrowland"]);
/// assert!(topology.is_adjacent("Fantasyland", "Tomorrowland"));
/// assert!(topology.neighbors("Adventureland").is_empty());
/// assert!(topology.asymmetries().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    order: Vec<String>,
    adjacency: HashMap<String, BTreeSet<String>>,
}

impl Topology {
    /// Create a topology with no lands.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a land and the lands reachable from it.
    ///
    /// Declaring the same land twice merges the neighbour sets.
    pub fn insert_land<I, S>(&mut self, land: impl Into<String>, neighbors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = land.into();
        if !self.adjacency.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.adjacency
            .entry(name)
            .or_default()
            .extend(neighbors.into_iter().map(Into::into));
    }

    /// Declare a land while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_land<I, S>(mut self, land: impl Into<String>, neighbors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_land(land, neighbors);
        self
    }

    /// Lands reachable from `land`; empty when the land is unknown.
    #[must_use]
    pub fn neighbors(&self, land: &str) -> &BTreeSet<String> {
        self.adjacency.get(land).unwrap_or(&NO_NEIGHBOURS)
    }

    /// Report whether `from` declares `to` as a neighbour.
    #[must_use]
    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).contains(to)
    }

    /// Report whether `land` has an adjacency entry.
    #[must_use]
    pub fn contains_land(&self, land: &str) -> bool {
        self.adjacency.contains_key(land)
    }

    /// Declared lands in declaration order.
    pub fn lands(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Every declared edge whose reverse edge is missing, sorted.
    #[must_use]
    pub fn asymmetries(&self) -> Vec<Asymmetry> {
        let mut found: Vec<Asymmetry> = self
            .adjacency
            .iter()
            .flat_map(|(from, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |to| !self.is_adjacent(to, from))
                    .map(move |to| Asymmetry {
                        from: from.clone(),
                        to: to.clone(),
                    })
            })
            .collect();
        found.sort();
        found
    }
}

/// Topologies for every configured park.
///
/// The registry is read-only once built; share it behind an `Arc` when
/// serving concurrent requests.
///
/// # Examples
/// ```
/// use parkpicks_core::{Park, Topology, TopologyRegistry};
///
/// let registry = TopologyRegistry::new().with_park(
///     Park::Epcot,
///     Topology::new().with_land("World Showcase", ["World Nature"]),
/// );
/// assert!(registry.is_adjacent(Park::Epcot, "World Showcase", "World Nature"));
/// assert!(registry.neighbors(Park::Disneyland, "Fantasyland").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyRegistry {
    parks: HashMap<Park, Topology>,
}

impl TopologyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the topology for a park, replacing any previous one.
    pub fn insert(&mut self, park: Park, topology: Topology) {
        self.parks.insert(park, topology);
    }

    /// Register a park while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_park(mut self, park: Park, topology: Topology) -> Self {
        self.insert(park, topology);
        self
    }

    /// Return the topology for a park, if registered.
    #[must_use]
    pub fn topology(&self, park: Park) -> Option<&Topology> {
        self.parks.get(&park)
    }

    /// Lands reachable from `land` in `park`; empty when either is unknown.
    #[must_use]
    pub fn neighbors(&self, park: Park, land: &str) -> &BTreeSet<String> {
        self.topology(park)
            .map_or(&NO_NEIGHBOURS, |topology| topology.neighbors(land))
    }

    /// Report whether `from` declares `to` as a neighbour within `park`.
    #[must_use]
    pub fn is_adjacent(&self, park: Park, from: &str, to: &str) -> bool {
        self.neighbors(park, from).contains(to)
    }

    /// One-way edges for every registered park, ordered by park.
    #[must_use]
    pub fn asymmetries(&self) -> Vec<(Park, Asymmetry)> {
        Park::ALL
            .into_iter()
            .filter_map(|park| self.topology(park).map(|topology| (park, topology)))
            .flat_map(|(park, topology)| {
                topology
                    .asymmetries()
                    .into_iter()
                    .map(move |asymmetry| (park, asymmetry))
            })
            .collect()
    }
}
