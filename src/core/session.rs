//! Arrow session - orchestrates tracking, routing and arrow emission
//!
//! ArrowSession owns everything the arrow feature knows about one play
//! session: the connectivity graph for the loaded save and one tracker
//! per connected peer. The host drives it through the runtime:
//!
//! 1. `reset` when a save loads, `clear` when it unloads
//! 2. `update_tick` on throttled update ticks (routing + geometry)
//! 3. `on_local_warp` immediately after the local player changes maps
//! 4. `emit_arrows` during the render pass
//!
//! The session is platform-independent and is tested with mocks.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::core::color::{player_color, Color, ColorPalette};
use crate::core::config::ArrowConfig;
use crate::core::constants::LABEL_OFFSET;
use crate::core::geometry;
use crate::core::map_graph::MapGraph;
use crate::core::present::{ArrowDraw, ArrowSink};
use crate::core::route;
use crate::core::tracker::PlayerArrow;
use crate::core::traits::WorldReader;
use crate::core::types::{LocationSnapshot, PlayerId, PlayerSnapshot, Viewport};

// =============================================================================
// ARROW SESSION
// =============================================================================

/// Session-scoped arrow state: one tracker per peer plus the graph cache
pub struct ArrowSession {
    graph: MapGraph,
    trackers: BTreeMap<PlayerId, PlayerArrow>,
}

impl ArrowSession {
    pub fn new() -> Self {
        Self {
            graph: MapGraph::new(),
            trackers: BTreeMap::new(),
        }
    }

    /// Start of a play session: drop stale trackers and build the graph
    /// for the freshly loaded world
    pub fn reset<W: WorldReader>(&mut self, world: &W) {
        self.trackers.clear();
        self.graph.rebuild(&world.locations());
        info!(locations = self.graph.len(), "[SESSION] Session started");
    }

    /// End of a play session: release all tracking state
    pub fn clear(&mut self) {
        let dropped = self.trackers.len();
        self.trackers.clear();
        self.graph = MapGraph::new();
        debug!(dropped, "[SESSION] Session cleared");
    }

    /// Tracker for one peer, if they are currently tracked
    pub fn tracker(&self, id: PlayerId) -> Option<&PlayerArrow> {
        self.trackers.get(&id)
    }

    pub fn tracker_count(&self) -> usize {
        self.trackers.len()
    }

    /// Drop the tracker of a disconnected peer
    pub fn remove_peer(&mut self, id: PlayerId) {
        if self.trackers.remove(&id).is_some() {
            info!(player = %id, "[SESSION] Peer disconnected, tracker removed");
        }
    }

    /// Recompute tracker colors after a palette change
    pub fn refresh_colors(&mut self, palette: ColorPalette) {
        for arrow in self.trackers.values_mut() {
            arrow.color = player_color(arrow.player_id, palette);
        }
    }

    // =========================================================================
    // Update pass
    // =========================================================================

    /// One throttled update pass: reconcile trackers with the connected
    /// peer list, refresh routes where a peer's location changed, then
    /// recompute screen geometry.
    ///
    /// Peers whose location has not replicated yet are skipped entirely;
    /// their tracker appears once the location is known. Cross-map routes
    /// are only re-resolved when the peer's location changed since the
    /// last attempt, so a quiet world costs a handful of comparisons.
    pub fn update_tick<W: WorldReader>(
        &mut self,
        world: &W,
        viewport: &Viewport,
        config: &ArrowConfig,
    ) {
        let Some(local) = world.local_player() else {
            return;
        };
        let Some(local_location) = local.location.as_deref() else {
            debug!("[SESSION] Local player location unresolved, skipping update");
            return;
        };

        let others = world.other_players();

        // Peers can vanish without a disconnect event (host quirks); sweep
        // trackers against the live list
        let connected: BTreeSet<PlayerId> = others.iter().map(|p| p.id).collect();
        let before = self.trackers.len();
        self.trackers.retain(|id, _| connected.contains(id));
        if self.trackers.len() < before {
            debug!(
                removed = before - self.trackers.len(),
                "[SESSION] Dropped trackers for absent peers"
            );
        }

        let mut locations: Option<Vec<LocationSnapshot>> = None;
        let Self { graph, trackers } = self;

        for peer in &others {
            if peer.id == local.id {
                continue;
            }
            let Some(peer_location) = peer.location.as_deref() else {
                debug!(player = %peer.id, "[SESSION] Peer location unresolved, deferred");
                continue;
            };

            let arrow = trackers.entry(peer.id).or_insert_with(|| {
                info!(player = %peer.id, name = %peer.display_name, "[SESSION] Tracking new peer");
                PlayerArrow::new(peer, config.palette)
            });

            if peer_location == local_location {
                arrow.follow_live(peer.position);
            } else {
                arrow.same_map = false;
                if arrow.needs_route_refresh(peer_location) {
                    let locs = locations.get_or_insert_with(|| world.locations());
                    match route::resolve(graph, locs, local_location, peer_location) {
                        Ok(anchor) => arrow.note_routed(peer_location, anchor),
                        Err(err) => {
                            debug!(
                                player = %peer.id,
                                peer_location = %peer_location,
                                error = %err,
                                "[SESSION] Route resolution failed, keeping previous target"
                            );
                            arrow.note_route_failed(peer_location);
                        }
                    }
                }
            }

            refresh_geometry(arrow, &local, peer, viewport);

            if config.debug {
                debug!(
                    player = %peer.id,
                    location = %peer_location,
                    x = peer.position.x,
                    y = peer.position.y,
                    "[SESSION] Peer position"
                );
            }
        }
    }

    /// The local player just changed maps: every cached anchor points at
    /// the wrong map's geometry, so re-resolve all cross-map routes now
    /// instead of waiting for the next peer movement.
    ///
    /// Only existing trackers are refreshed; new peers still appear
    /// through the regular update pass.
    pub fn on_local_warp<W: WorldReader>(&mut self, world: &W, viewport: &Viewport) {
        let Some(local) = world.local_player() else {
            return;
        };
        let Some(local_location) = local.location.as_deref() else {
            return;
        };

        info!(location = %local_location, "[SESSION] Local player changed maps, refreshing routes");

        for arrow in self.trackers.values_mut() {
            arrow.invalidate_route();
        }

        let others = world.other_players();
        let mut locations: Option<Vec<LocationSnapshot>> = None;
        let Self { graph, trackers } = self;

        for peer in &others {
            let Some(peer_location) = peer.location.as_deref() else {
                continue;
            };
            let Some(arrow) = trackers.get_mut(&peer.id) else {
                continue;
            };

            if peer_location == local_location {
                arrow.follow_live(peer.position);
            } else {
                arrow.same_map = false;
                let locs = locations.get_or_insert_with(|| world.locations());
                match route::resolve(graph, locs, local_location, peer_location) {
                    Ok(anchor) => arrow.note_routed(peer_location, anchor),
                    Err(err) => {
                        debug!(
                            player = %peer.id,
                            peer_location = %peer_location,
                            error = %err,
                            "[SESSION] Post-warp route resolution failed"
                        );
                        arrow.note_route_failed(peer_location);
                    }
                }
            }

            refresh_geometry(arrow, &local, peer, viewport);
        }
    }

    // =========================================================================
    // Render pass
    // =========================================================================

    /// Emit one draw item per visible arrow, in peer-id order.
    ///
    /// Runs on the render path, so it does no routing and no allocation
    /// beyond the label strings. Opacity is read from the live config on
    /// every call; trackers without a resolved target and trackers whose
    /// peer is visible on screen are skipped.
    pub fn emit_arrows<S: ArrowSink>(&mut self, config: &ArrowConfig, sink: &mut S) {
        for arrow in self.trackers.values_mut() {
            if !arrow.has_target() || arrow.on_screen {
                continue;
            }

            arrow.opacity = config.opacity();
            let label = config.names_on_arrows.then(|| {
                (
                    arrow.display_name.clone(),
                    geometry::label_pos(arrow.screen_pos, arrow.screen_angle, LABEL_OFFSET),
                )
            });

            sink.draw_arrow(&ArrowDraw {
                player: arrow.player_id,
                screen_pos: arrow.screen_pos,
                rotation: geometry::sprite_rotation(arrow.screen_angle),
                body_color: arrow.color,
                border_color: config.show_border.then_some(Color::BLACK),
                opacity: arrow.opacity,
                label,
            });
        }
    }
}

impl Default for ArrowSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Recompute an arrow's screen anchor and bearing from its current target
fn refresh_geometry(
    arrow: &mut PlayerArrow,
    local: &PlayerSnapshot,
    peer: &PlayerSnapshot,
    viewport: &Viewport,
) {
    if let Some(target) = arrow.target_world_pos {
        arrow.screen_angle = geometry::bearing(local.position, target);
        arrow.screen_pos =
            geometry::edge_point(viewport.screen_w, viewport.screen_h, arrow.screen_angle);
    }
    arrow.on_screen = arrow.same_map && geometry::target_on_screen(&peer.bounds, &viewport.world);
}

// =============================================================================
// TESTS
// =============================================================================
