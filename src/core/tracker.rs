//! Per-target arrow state
//!
//! One `PlayerArrow` per tracked peer, owned by the session. The record
//! remembers the last resolved target so a failed resolution degrades to
//! a slightly stale arrow instead of no arrow, and remembers which peer
//! location it last resolved so routes are recomputed on location changes
//! rather than every tick.

use super::color::{player_color, Color, ColorPalette};
use super::types::{PlayerId, PlayerSnapshot, ScreenPos, WorldPos};

// =============================================================================
// PLAYER ARROW
// =============================================================================

/// Directional arrow state for one tracked peer
#[derive(Clone, Debug)]
pub struct PlayerArrow {
    pub player_id: PlayerId,
    pub display_name: String,
    /// Body color, fixed at creation from the peer id and palette
    pub color: Color,
    /// World position the arrow points at. None until the first successful
    /// resolution; an arrow without a target is never drawn.
    pub target_world_pos: Option<WorldPos>,
    /// Peer currently shares the local player's map
    pub same_map: bool,
    /// Peer's sprite overlaps the local viewport; suppresses drawing
    pub on_screen: bool,
    /// Latest screen geometry, meaningful while a target is set
    pub screen_pos: ScreenPos,
    pub screen_angle: f32,
    /// Live alpha, refreshed from config at every render
    pub opacity: f32,
    /// Peer location consumed by the last cross-map resolution attempt
    routed_location: Option<String>,
}

impl PlayerArrow {
    pub fn new(player: &PlayerSnapshot, palette: ColorPalette) -> Self {
        Self {
            player_id: player.id,
            display_name: player.display_name.clone(),
            color: player_color(player.id, palette),
            target_world_pos: None,
            same_map: false,
            on_screen: false,
            screen_pos: ScreenPos::new(0.0, 0.0),
            screen_angle: 0.0,
            opacity: 0.0,
            routed_location: None,
        }
    }

    /// Whether a cross-map resolution is due for the peer's current
    /// location. True until `note_routed` or `note_route_failed` records
    /// an attempt for that location.
    pub fn needs_route_refresh(&self, peer_location: &str) -> bool {
        self.routed_location.as_deref() != Some(peer_location)
    }

    /// Record a successful resolution: the arrow now points at `anchor`
    pub fn note_routed(&mut self, peer_location: &str, anchor: WorldPos) {
        self.routed_location = Some(peer_location.to_string());
        self.target_world_pos = Some(anchor);
    }

    /// Record a failed resolution. The previous target is kept and the
    /// attempt is not repeated until the next refresh trigger.
    pub fn note_route_failed(&mut self, peer_location: &str) {
        self.routed_location = Some(peer_location.to_string());
    }

    /// Peer shares the local player's map: follow their live position.
    /// Route memory is dropped so leaving the map triggers a fresh
    /// resolution.
    pub fn follow_live(&mut self, position: WorldPos) {
        self.same_map = true;
        self.target_world_pos = Some(position);
        self.routed_location = None;
    }

    /// Forget which location was last resolved. Used when the local player
    /// changes maps, which invalidates every cached anchor.
    pub fn invalidate_route(&mut self) {
        self.routed_location = None;
    }

    /// True when the arrow has a target to draw toward
    pub fn has_target(&self) -> bool {
        self.target_world_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Rect;

    fn make_player(id: u64, name: &str, location: Option<&str>) -> PlayerSnapshot {
        PlayerSnapshot {
            id: PlayerId(id),
            display_name: name.to_string(),
            position: WorldPos::new(320.0, 320.0),
            bounds: Rect::new(288.0, 256.0, 64.0, 128.0),
            location: location.map(str::to_string),
        }
    }

    #[test]
    fn test_new_arrow_has_no_target() {
        let arrow = PlayerArrow::new(&make_player(42, "Abigail", Some("Town")), ColorPalette::All);
        assert_eq!(arrow.player_id, PlayerId(42));
        assert_eq!(arrow.display_name, "Abigail");
        assert!(!arrow.has_target());
        assert!(!arrow.same_map);
        assert!(!arrow.on_screen);
    }

    #[test]
    fn test_new_arrow_color_follows_palette() {
        let player = make_player(76543210, "Sam", Some("Town"));
        let arrow = PlayerArrow::new(&player, ColorPalette::Black);
        assert_eq!(arrow.color, Color::BLACK);

        let arrow = PlayerArrow::new(&player, ColorPalette::All);
        assert_eq!(arrow.color, player_color(PlayerId(76543210), ColorPalette::All));
    }

    #[test]
    fn test_route_refresh_consumed_per_location() {
        let mut arrow = PlayerArrow::new(&make_player(1, "Sam", Some("Beach")), ColorPalette::All);
        assert!(arrow.needs_route_refresh("Beach"));

        arrow.note_routed("Beach", WorldPos::new(100.0, 200.0));
        assert!(!arrow.needs_route_refresh("Beach"));
        assert!(arrow.needs_route_refresh("Desert"));
        assert_eq!(arrow.target_world_pos, Some(WorldPos::new(100.0, 200.0)));
    }

    #[test]
    fn test_failed_route_keeps_previous_target() {
        let mut arrow = PlayerArrow::new(&make_player(1, "Sam", Some("Beach")), ColorPalette::All);
        arrow.note_routed("Beach", WorldPos::new(100.0, 200.0));

        arrow.note_route_failed("Desert");
        assert_eq!(arrow.target_world_pos, Some(WorldPos::new(100.0, 200.0)));
        // Failure consumed the trigger; no retry until the location changes
        assert!(!arrow.needs_route_refresh("Desert"));
        assert!(arrow.needs_route_refresh("Beach"));
    }

    #[test]
    fn test_follow_live_resets_route_memory() {
        let mut arrow = PlayerArrow::new(&make_player(1, "Sam", Some("Beach")), ColorPalette::All);
        arrow.note_routed("Beach", WorldPos::new(100.0, 200.0));

        arrow.follow_live(WorldPos::new(640.0, 640.0));
        assert!(arrow.same_map);
        assert_eq!(arrow.target_world_pos, Some(WorldPos::new(640.0, 640.0)));

        // Peer walks back to the beach: the route must be resolved again
        assert!(arrow.needs_route_refresh("Beach"));
    }

    #[test]
    fn test_invalidate_route_forces_refresh() {
        let mut arrow = PlayerArrow::new(&make_player(1, "Sam", Some("Beach")), ColorPalette::All);
        arrow.note_routed("Beach", WorldPos::new(100.0, 200.0));
        assert!(!arrow.needs_route_refresh("Beach"));

        arrow.invalidate_route();
        assert!(arrow.needs_route_refresh("Beach"));
        // The stale target survives until the refresh lands
        assert!(arrow.has_target());
    }
}
