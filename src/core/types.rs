//! Core types - platform-independent data structures
//!
//! Snapshot types describing the game world as the arrow engine sees it.
//! The host adapter fills these from live game state each update; nothing
//! here holds a reference back into the game.

use super::constants::TILE_PIXELS;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique multiplayer peer id, stable for the lifetime of a connection
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u64);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// POSITIONS
// =============================================================================

/// Absolute position in world pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another world position
    pub fn distance_to(&self, other: &WorldPos) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Position in screen pixels, origin at the top-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

impl ScreenPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in world pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True if the two rectangles overlap (shared edges don't count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

// =============================================================================
// MAP TRANSITIONS
// =============================================================================

/// A walkable map edge: stepping on the anchor tile moves the player to
/// the target location
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionPoint {
    /// Name of the destination location
    pub target: String,
    /// Anchor tile within the source location
    pub tile_x: i32,
    /// Anchor tile within the source location
    pub tile_y: i32,
}

impl TransitionPoint {
    pub fn new(target: impl Into<String>, tile_x: i32, tile_y: i32) -> Self {
        Self {
            target: target.into(),
            tile_x,
            tile_y,
        }
    }

    /// Anchor tile converted to world pixels
    pub fn anchor_world(&self) -> WorldPos {
        WorldPos::new(self.tile_x as f32 * TILE_PIXELS, self.tile_y as f32 * TILE_PIXELS)
    }
}

/// A building door on a map. Doors only act as transitions once the host
/// has resolved which interior they lead to; unresolved doors are skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct DoorPoint {
    /// Building the door belongs to
    pub building: String,
    /// Interior transition, if the host could resolve it
    pub transition: Option<TransitionPoint>,
}

/// One loaded map area with its outgoing transitions
#[derive(Clone, Debug, PartialEq)]
pub struct LocationSnapshot {
    pub name: String,
    /// Map-edge warps out of this location
    pub warps: Vec<TransitionPoint>,
    /// Building doors on this location
    pub doors: Vec<DoorPoint>,
}

impl LocationSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warps: Vec::new(),
            doors: Vec::new(),
        }
    }

    /// First transition out of this location that leads to `target`.
    /// Warps take precedence over doors.
    pub fn transition_to(&self, target: &str) -> Option<&TransitionPoint> {
        self.warps
            .iter()
            .find(|w| w.target == target)
            .or_else(|| {
                self.doors
                    .iter()
                    .filter_map(|d| d.transition.as_ref())
                    .find(|t| t.target == target)
            })
    }
}

// =============================================================================
// PLAYERS
// =============================================================================

/// One player as seen this update
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub display_name: String,
    /// Center of the player sprite in world pixels
    pub position: WorldPos,
    /// Sprite bounding box in world pixels
    pub bounds: Rect,
    /// Current location name. None while the player is warping or their
    /// location has not replicated yet.
    pub location: Option<String>,
}

// =============================================================================
// VIEWPORT
// =============================================================================

/// The local player's camera for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Visible region in world pixels
    pub world: Rect,
    /// Screen width in pixels
    pub screen_w: f32,
    /// Screen height in pixels
    pub screen_h: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_pos_distance_to() {
        let a = WorldPos::new(0.0, 0.0);
        let b = WorldPos::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 0.001);

        // Same position = 0 distance
        assert!(a.distance_to(&a).abs() < 0.001);
    }

    #[test]
    fn test_rect_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_rect_intersects_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_rect_intersects_contained() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_transition_anchor_world() {
        let warp = TransitionPoint::new("Town", 3, -2);
        let anchor = warp.anchor_world();
        assert_eq!(anchor, WorldPos::new(192.0, -128.0));
    }

    #[test]
    fn test_transition_to_prefers_warps_over_doors() {
        let mut loc = LocationSnapshot::new("Farm");
        loc.doors.push(DoorPoint {
            building: "FarmHouse".to_string(),
            transition: Some(TransitionPoint::new("Town", 99, 99)),
        });
        loc.warps.push(TransitionPoint::new("Town", 5, 10));

        let hit = loc.transition_to("Town").unwrap();
        assert_eq!((hit.tile_x, hit.tile_y), (5, 10));
    }

    #[test]
    fn test_transition_to_falls_back_to_doors() {
        let mut loc = LocationSnapshot::new("Town");
        loc.warps.push(TransitionPoint::new("Forest", 0, 0));
        loc.doors.push(DoorPoint {
            building: "Saloon".to_string(),
            transition: Some(TransitionPoint::new("SaloonInterior", 12, 7)),
        });
        loc.doors.push(DoorPoint {
            building: "Shed".to_string(),
            transition: None,
        });

        let hit = loc.transition_to("SaloonInterior").unwrap();
        assert_eq!((hit.tile_x, hit.tile_y), (12, 7));
        assert!(loc.transition_to("Desert").is_none());
    }
}
