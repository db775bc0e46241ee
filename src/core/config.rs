//! Runtime configuration for the arrow engine
//!
//! A plain snapshot struct the host hands to the runtime. Hosts that
//! support live config editing call `ModRuntime::apply_config` with a new
//! snapshot; nothing in here caches derived values between frames.

use serde::{Deserialize, Serialize};

use super::color::ColorPalette;
use super::constants::BASE_TICK_RATE;

// =============================================================================
// CONFIGURATION STRUCTURE
// =============================================================================

/// Arrow engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowConfig {
    /// Master switch. Disabling releases all tracking state.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Log peer positions every update pass
    #[serde(default)]
    pub debug: bool,

    /// Draw player names next to their arrows
    #[serde(default = "default_names_on_arrows")]
    pub names_on_arrows: bool,

    /// Draw a black outline under each arrow body
    #[serde(default = "default_show_border")]
    pub show_border: bool,

    /// Target updates per second, clamped to 1..=60. Lower values cut the
    /// per-tick cost on large servers.
    #[serde(default = "default_update_fps")]
    pub update_fps: u32,

    /// Arrow opacity in percent, clamped to 1..=100
    #[serde(default = "default_arrow_opacity")]
    pub arrow_opacity: u32,

    /// Which slice of the RGB cube player colors come from
    #[serde(default)]
    pub palette: ColorPalette,
}

fn default_enabled() -> bool {
    true
}
fn default_names_on_arrows() -> bool {
    true
}
fn default_show_border() -> bool {
    true
}
fn default_update_fps() -> u32 {
    40
}
fn default_arrow_opacity() -> u32 {
    70
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            debug: false,
            names_on_arrows: default_names_on_arrows(),
            show_border: default_show_border(),
            update_fps: default_update_fps(),
            arrow_opacity: default_arrow_opacity(),
            palette: ColorPalette::default(),
        }
    }
}

// =============================================================================
// DERIVED VALUES
// =============================================================================

impl ArrowConfig {
    /// Base ticks between update passes: `ceil(60 / update_fps)`, with the
    /// rate clamped to 1..=60 first. 40 fps over a 60-tick base means every
    /// second tick.
    pub fn update_interval(&self) -> u64 {
        let fps = self.update_fps.clamp(1, BASE_TICK_RATE);
        ((BASE_TICK_RATE + fps - 1) / fps) as u64
    }

    /// Arrow opacity as a 0.0..=1.0 alpha value
    pub fn opacity(&self) -> f32 {
        self.arrow_opacity.clamp(1, 100) as f32 / 100.0
    }
}
