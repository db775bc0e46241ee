//! Presentation seam - what the host draws, not how
//!
//! The engine emits fully-computed `ArrowDraw` items; the host adapter
//! owns textures, fonts and the actual draw calls. Tests collect the
//! items through the mock sink below.

use super::color::Color;
use super::types::{PlayerId, ScreenPos};

// =============================================================================
// DRAW ITEMS
// =============================================================================

/// One arrow, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowDraw {
    /// Peer this arrow points toward
    pub player: PlayerId,
    /// Anchor on the screen-edge ellipse
    pub screen_pos: ScreenPos,
    /// Sprite rotation in radians; 0 keeps an upward-pointing sprite
    /// upright
    pub rotation: f32,
    /// Body tint
    pub body_color: Color,
    /// Outline tint, None when outlines are disabled
    pub border_color: Option<Color>,
    /// Alpha in 0.0..=1.0, already clamped
    pub opacity: f32,
    /// Name text and its anchor, None when name labels are disabled
    pub label: Option<(String, ScreenPos)>,
}

// =============================================================================
// SINK TRAIT
// =============================================================================

/// Receives draw items during the render pass
///
/// Called between the host's world and HUD drawing, once per visible
/// arrow, in stable peer-id order.
pub trait ArrowSink {
    fn draw_arrow(&mut self, arrow: &ArrowDraw);
}

// =============================================================================
// MOCK IMPLEMENTATIONS FOR TESTING
// =============================================================================


#[cfg(test)]
mod tests {
    use super::mocks::*;
    use super::*;

    fn make_arrow(id: u64) -> ArrowDraw {
        ArrowDraw {
            player: PlayerId(id),
            screen_pos: ScreenPos::new(760.0, 300.0),
            rotation: 0.0,
            body_color: Color::new(200, 80, 80),
            border_color: Some(Color::BLACK),
            opacity: 0.7,
            label: Some(("Abigail".to_string(), ScreenPos::new(712.0, 300.0))),
        }
    }

    #[test]
    fn test_mock_sink_records_draws() {
        let mut sink = MockSink::new();
        assert_eq!(sink.draw_count(), 0);

        sink.draw_arrow(&make_arrow(1));
        sink.draw_arrow(&make_arrow(2));

        assert_eq!(sink.draw_count(), 2);
        assert_eq!(sink.last_drawn().unwrap().player, PlayerId(2));
    }

    #[test]
    fn test_mock_sink_finds_latest_per_player() {
        let mut sink = MockSink::new();
        sink.draw_arrow(&make_arrow(1));

        let mut updated = make_arrow(1);
        updated.rotation = 1.5;
        sink.draw_arrow(&updated);

        assert!((sink.drawn_for(PlayerId(1)).unwrap().rotation - 1.5).abs() < 0.001);
        assert!(sink.drawn_for(PlayerId(9)).is_none());
    }

    #[test]
    fn test_mock_sink_clear() {
        let mut sink = MockSink::new();
        sink.draw_arrow(&make_arrow(1));
        sink.clear();
        assert_eq!(sink.draw_count(), 0);
    }
}
