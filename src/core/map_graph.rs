//! Map connectivity graph
//!
//! Directed adjacency between location names, built from warp and door
//! transition points. The graph is a cache over the host's location list:
//! cheap to rebuild, so it is rebuilt wholesale instead of patched when
//! the world changes under it (festival maps, mod-added locations).

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::types::LocationSnapshot;

// =============================================================================
// GRAPH
// =============================================================================

/// Location adjacency: name of a location to the set of location names
/// reachable from it in one transition.
///
/// BTree collections keep neighbor iteration in name order, which makes
/// route selection deterministic when several routes tie.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapGraph {
    neighbors: BTreeMap<String, BTreeSet<String>>,
}

impl MapGraph {
    /// Empty graph. `rebuild` fills it on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a location list
    pub fn build(locations: &[LocationSnapshot]) -> Self {
        let mut graph = Self::new();
        graph.rebuild(locations);
        graph
    }

    /// Drop all adjacency and rebuild it from the given location list.
    ///
    /// Doors without a resolved interior transition carry no edge and are
    /// skipped. Duplicate transitions to the same target collapse into one
    /// edge. A location with no outgoing transitions still gets a node.
    pub fn rebuild(&mut self, locations: &[LocationSnapshot]) {
        self.neighbors.clear();

        let mut skipped_doors = 0usize;
        for location in locations {
            let targets = self.neighbors.entry(location.name.clone()).or_default();

            for warp in &location.warps {
                targets.insert(warp.target.clone());
            }
            for door in &location.doors {
                match &door.transition {
                    Some(transition) => {
                        targets.insert(transition.target.clone());
                    }
                    None => skipped_doors += 1,
                }
            }
        }

        debug!(
            locations = self.neighbors.len(),
            skipped_doors, "[GRAPH] Rebuilt connectivity graph"
        );
    }

    /// True if the location has a node in the graph
    pub fn contains(&self, location: &str) -> bool {
        self.neighbors.contains_key(location)
    }

    /// Locations reachable from `location` in one transition, in name order
    pub fn neighbors(&self, location: &str) -> Option<&BTreeSet<String>> {
        self.neighbors.get(location)
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
