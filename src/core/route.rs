//! Route resolution - where to point when the target is on another map
//!
//! Finds the shortest transition chain from the local player's location to
//! the target's location and returns the world anchor of the first
//! transition on that chain. The arrow then points at the door or map edge
//! to walk through instead of at a straight-line position on a map the
//! player cannot see.

use std::collections::{BTreeMap, VecDeque};

use tracing::debug;

use super::map_graph::MapGraph;
use super::types::{LocationSnapshot, WorldPos};

// =============================================================================
// ERRORS
// =============================================================================

/// Why a route could not be resolved this cycle. Every variant is
/// recoverable: the caller keeps its previous target and retries on the
/// next refresh trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A location name has no node in the graph, even after a rebuild
    UnknownLocation(String),
    /// No transition chain connects source to target
    NoRoute,
    /// The graph has a route, but the source location snapshot carries no
    /// matching transition point (stale graph edge)
    NoAnchor(String),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::UnknownLocation(name) => {
                write!(f, "Location '{}' is not in the connectivity graph", name)
            }
            ResolveError::NoRoute => {
                write!(f, "No transition chain connects the two locations")
            }
            ResolveError::NoAnchor(target) => {
                write!(f, "Source location has no transition toward '{}'", target)
            }
        }
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Resolve the world position an arrow should point at when its target is
/// in `target` and the local player is in `source`.
///
/// BFS over the connectivity graph, so among routes with different hop
/// counts the shortest wins. Among equal-length routes the first hop with
/// the lexicographically smallest name wins (BTree neighbor order), which
/// keeps the choice stable run to run.
///
/// A name missing from the graph triggers one rebuild from `locations`
/// per call, healing the cache after festival maps or mod locations
/// appear. `resolve(l, l)` only succeeds when a transition chain loops
/// back to `l`; callers treat same-location targets as same-map and never
/// ask for a route.
pub fn resolve(
    graph: &mut MapGraph,
    locations: &[LocationSnapshot],
    source: &str,
    target: &str,
) -> Result<WorldPos, ResolveError> {
    let mut rebuilt = false;
    ensure_known(graph, locations, source, &mut rebuilt)?;
    ensure_known(graph, locations, target, &mut rebuilt)?;

    let path = shortest_path(graph, locations, source, target, &mut rebuilt)
        .ok_or(ResolveError::NoRoute)?;
    let next_hop = path.get(1).ok_or(ResolveError::NoRoute)?;

    let anchor = locations
        .iter()
        .find(|l| l.name == source)
        .and_then(|l| l.transition_to(next_hop))
        .map(|t| t.anchor_world())
        .ok_or_else(|| ResolveError::NoAnchor(next_hop.clone()))?;

    debug!(
        source = %source,
        target = %target,
        next_hop = %next_hop,
        hops = path.len() - 1,
        "[ROUTE] Resolved cross-map target"
    );
    Ok(anchor)
}

/// Node must exist in the graph; one rebuild is allowed to make it appear
fn ensure_known(
    graph: &mut MapGraph,
    locations: &[LocationSnapshot],
    name: &str,
    rebuilt: &mut bool,
) -> Result<(), ResolveError> {
    if graph.contains(name) {
        return Ok(());
    }
    if !*rebuilt {
        debug!(location = %name, "[ROUTE] Unknown location, rebuilding graph");
        graph.rebuild(locations);
        *rebuilt = true;
        if graph.contains(name) {
            return Ok(());
        }
    }
    Err(ResolveError::UnknownLocation(name.to_string()))
}

/// BFS shortest path from `source` to `target`, both endpoints included.
///
/// Completion is checked on the edge, not the dequeued node, so a chain
/// looping back to the source still counts as a route. The returned path
/// therefore always has at least two entries. Nodes whose adjacency is
/// missing after the one allowed rebuild are abandoned.
fn shortest_path(
    graph: &mut MapGraph,
    locations: &[LocationSnapshot],
    source: &str,
    target: &str,
    rebuilt: &mut bool,
) -> Option<Vec<String>> {
    let mut came_from: BTreeMap<String, String> = BTreeMap::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    came_from.insert(source.to_string(), source.to_string());
    queue.push_back(source.to_string());

    while let Some(node) = queue.pop_front() {
        let Some(neighbors) = node_neighbors(graph, locations, &node, rebuilt) else {
            debug!(location = %node, "[ROUTE] No adjacency for location, branch abandoned");
            continue;
        };

        for next in neighbors {
            if next == target {
                // Walk back to the source through the parent links
                let mut path = vec![target.to_string()];
                let mut current = node.clone();
                loop {
                    path.push(current.clone());
                    match came_from.get(&current) {
                        Some(parent) if *parent != current => current = parent.clone(),
                        _ => break,
                    }
                }
                path.reverse();
                return Some(path);
            }
            if !came_from.contains_key(&next) {
                came_from.insert(next.clone(), node.clone());
                queue.push_back(next);
            }
        }
    }

    None
}

/// Adjacency of one node, cloned out so the graph stays borrowable for
/// the mid-search rebuild
fn node_neighbors(
    graph: &mut MapGraph,
    locations: &[LocationSnapshot],
    node: &str,
    rebuilt: &mut bool,
) -> Option<Vec<String>> {
    if graph.neighbors(node).is_none() && !*rebuilt {
        debug!(location = %node, "[ROUTE] Location missing mid-search, rebuilding graph");
        graph.rebuild(locations);
        *rebuilt = true;
    }
    graph
        .neighbors(node)
        .map(|set| set.iter().cloned().collect())
}
