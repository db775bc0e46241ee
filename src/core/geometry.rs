//! Arrow geometry - bearings, screen placement, visibility
//!
//! Pure math over snapshots. Angles are radians, 0 points right (+x) and
//! angles grow toward +y, matching `atan2` in a screen coordinate system
//! with y pointing down.

use std::f32::consts::FRAC_PI_2;

use super::constants::EDGE_INSET;
use super::types::{Rect, ScreenPos, WorldPos};

// =============================================================================
// BEARINGS
// =============================================================================

/// World-space bearing from one position to another
pub fn bearing(from: WorldPos, to: WorldPos) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Rotation to apply to the arrow sprite for a bearing. The artwork
/// carries a quarter-turn offset.
pub fn sprite_rotation(bearing: f32) -> f32 {
    bearing - FRAC_PI_2
}

// =============================================================================
// SCREEN PLACEMENT
// =============================================================================

/// Screen anchor for an arrow with the given bearing: a point on an
/// ellipse centered mid-screen and inset from the borders, so the sprite
/// never clips at the edge
pub fn edge_point(screen_w: f32, screen_h: f32, angle: f32) -> ScreenPos {
    let cx = screen_w / 2.0;
    let cy = screen_h / 2.0;
    ScreenPos::new(
        cx + EDGE_INSET * cx * angle.cos(),
        cy + EDGE_INSET * cy * angle.sin(),
    )
}

/// Label anchor `offset` pixels back from the arrow along its bearing,
/// between the arrow and the screen center
pub fn label_pos(arrow: ScreenPos, bearing: f32, offset: f32) -> ScreenPos {
    ScreenPos::new(
        arrow.x - offset * bearing.cos(),
        arrow.y - offset * bearing.sin(),
    )
}

// =============================================================================
// VISIBILITY
// =============================================================================

/// True when the target's bounding box overlaps the visible world region.
/// On-screen targets need no arrow.
pub fn target_on_screen(bounds: &Rect, visible_world: &Rect) -> bool {
    bounds.intersects(visible_world)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_4, PI};

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 0.001, "{} != {}", a, b);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = WorldPos::new(0.0, 0.0);
        assert_close(bearing(origin, WorldPos::new(10.0, 0.0)), 0.0);
        assert_close(bearing(origin, WorldPos::new(0.0, 10.0)), FRAC_PI_2);
        assert_close(bearing(origin, WorldPos::new(-10.0, 0.0)), PI);
        assert_close(bearing(origin, WorldPos::new(0.0, -10.0)), -FRAC_PI_2);
    }

    #[test]
    fn test_bearing_diagonal() {
        let origin = WorldPos::new(0.0, 0.0);
        assert_close(bearing(origin, WorldPos::new(5.0, 5.0)), FRAC_PI_4);
    }

    #[test]
    fn test_bearing_is_position_relative() {
        let a = WorldPos::new(100.0, 50.0);
        let b = WorldPos::new(130.0, 50.0);
        assert_close(bearing(a, b), 0.0);
        assert_close(bearing(b, a), PI);
    }

    #[test]
    fn test_sprite_rotation_offsets_quarter_turn() {
        assert_close(sprite_rotation(FRAC_PI_2), 0.0);
        assert_close(sprite_rotation(0.0), -FRAC_PI_2);
    }

    #[test]
    fn test_edge_point_cardinal_directions() {
        // 800x600 screen: half extents 400/300, inset radius 360/270
        let right = edge_point(800.0, 600.0, 0.0);
        assert_close(right.x, 760.0);
        assert_close(right.y, 300.0);

        let down = edge_point(800.0, 600.0, FRAC_PI_2);
        assert_close(down.x, 400.0);
        assert_close(down.y, 570.0);

        let left = edge_point(800.0, 600.0, PI);
        assert_close(left.x, 40.0);
        assert_close(left.y, 300.0);

        let up = edge_point(800.0, 600.0, -FRAC_PI_2);
        assert_close(up.x, 400.0);
        assert_close(up.y, 30.0);
    }

    #[test]
    fn test_edge_point_stays_inside_screen() {
        let mut angle = -PI;
        while angle < PI {
            let p = edge_point(1920.0, 1080.0, angle);
            assert!(p.x > 0.0 && p.x < 1920.0, "x={} at angle {}", p.x, angle);
            assert!(p.y > 0.0 && p.y < 1080.0, "y={} at angle {}", p.y, angle);
            angle += 0.1;
        }
    }

    #[test]
    fn test_label_pos_backs_off_along_bearing() {
        let arrow = ScreenPos::new(100.0, 100.0);

        let right = label_pos(arrow, 0.0, 40.0);
        assert_close(right.x, 60.0);
        assert_close(right.y, 100.0);

        let down = label_pos(arrow, FRAC_PI_2, 40.0);
        assert_close(down.x, 100.0);
        assert_close(down.y, 60.0);
    }

    #[test]
    fn test_target_on_screen() {
        let visible = Rect::new(0.0, 0.0, 1280.0, 720.0);
        let inside = Rect::new(600.0, 300.0, 64.0, 128.0);
        let outside = Rect::new(2000.0, 300.0, 64.0, 128.0);
        let straddling = Rect::new(1250.0, 0.0, 64.0, 128.0);

        assert!(target_on_screen(&inside, &visible));
        assert!(!target_on_screen(&outside, &visible));
        assert!(target_on_screen(&straddling, &visible));
    }
}
