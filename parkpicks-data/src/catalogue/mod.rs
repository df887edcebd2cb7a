//! The built-in park catalogue: land topology and ride classification.

mod classification;
mod topology;

use std::sync::Arc;

use log::warn;
use parkpicks_core::{ClassificationTables, TopologyRegistry};

pub use classification::builtin_tables;
pub use topology::{builtin_topology, park_topology};

/// Shared, read-only catalogue handed to the scoring engine.
///
/// Cloning is cheap; both halves sit behind [`Arc`].
#[derive(Debug, Clone)]
pub struct Catalogue {
    tables: Arc<ClassificationTables>,
    topology: Arc<TopologyRegistry>,
}

impl Catalogue {
    /// Assemble a catalogue from caller-supplied parts.
    #[must_use]
    pub fn new(tables: ClassificationTables, topology: TopologyRegistry) -> Self {
        Self {
            tables: Arc::new(tables),
            topology: Arc::new(topology),
        }
    }

    /// Load the built-in catalogue.
    ///
    /// One-way adjacency edges are logged at `warn` level and kept as
    /// declared.
    #[must_use]
    pub fn builtin() -> Self {
        let topology = builtin_topology();
        for (park, asymmetry) in topology.asymmetries() {
            warn!(
                "{park}: '{}' lists '{}' as adjacent but not the reverse",
                asymmetry.from, asymmetry.to
            );
        }
        Self::new(builtin_tables(), topology)
    }

    /// Classification tables.
    #[must_use]
    pub fn tables(&self) -> Arc<ClassificationTables> {
        Arc::clone(&self.tables)
    }

    /// Land topology for every park.
    #[must_use]
    pub fn topology(&self) -> Arc<TopologyRegistry> {
        Arc::clone(&self.topology)
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}
