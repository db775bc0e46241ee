//! Mod runtime - event-driven state machine around the arrow session
//!
//! The host translates its engine callbacks into [`GameEvent`]s and feeds
//! them here. The runtime gates everything on the enabled flag: while
//! disabled it holds no session at all, so toggling the feature off
//! releases every tracker and the graph in one move. It also owns the
//! update throttle, so hosts forward every tick and the runtime decides
//! which ones do work.

use tracing::{debug, info};

use crate::core::config::ArrowConfig;
use crate::core::present::ArrowSink;
use crate::core::session::ArrowSession;
use crate::core::traits::WorldReader;
use crate::core::types::{PlayerId, Viewport};

// =============================================================================
// GAME EVENTS
// =============================================================================

/// Host events the runtime reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A save finished loading and multiplayer state is readable
    SessionStarted,
    /// One engine update tick; `tick` counts up at the base tick rate
    UpdateTicked { tick: u64 },
    /// The world layer finished rendering; overlays may draw now
    WorldRendered,
    /// The local player arrived on a different map
    LocalPlayerWarped,
    /// A peer left the game
    PeerDisconnected { id: PlayerId },
    /// The save is unloading
    SessionEnded,
}

// =============================================================================
// RUNTIME
// =============================================================================

/// Feature state. Session data only exists while the feature is enabled.
enum RuntimeState {
    Disabled,
    Enabled { session: ArrowSession },
}

pub struct ModRuntime {
    state: RuntimeState,
    config: ArrowConfig,
}

impl ModRuntime {
    pub fn new(config: ArrowConfig) -> Self {
        let state = if config.enabled {
            RuntimeState::Enabled {
                session: ArrowSession::new(),
            }
        } else {
            RuntimeState::Disabled
        };
        info!(
            enabled = config.enabled,
            update_interval = config.update_interval(),
            "[RUNTIME] Runtime initialized"
        );
        Self { state, config }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.state, RuntimeState::Enabled { .. })
    }

    pub fn config(&self) -> &ArrowConfig {
        &self.config
    }

    /// Live session, if the feature is enabled
    pub fn session(&self) -> Option<&ArrowSession> {
        match &self.state {
            RuntimeState::Enabled { session } => Some(session),
            RuntimeState::Disabled => None,
        }
    }

    /// Flip the feature on or off. Disabling drops all session state;
    /// re-enabling starts from an empty session that repopulates on the
    /// next update tick.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.is_enabled() {
            return;
        }
        if enabled {
            info!("[RUNTIME] Arrows enabled");
            self.state = RuntimeState::Enabled {
                session: ArrowSession::new(),
            };
        } else {
            info!("[RUNTIME] Arrows disabled, dropping session state");
            self.state = RuntimeState::Disabled;
        }
        self.config.enabled = enabled;
    }

    /// Adopt a new configuration, reacting to the fields that need more
    /// than a value swap
    pub fn apply_config(&mut self, new: ArrowConfig) {
        if new.enabled != self.is_enabled() {
            self.set_enabled(new.enabled);
        }
        if new.update_fps != self.config.update_fps {
            info!(
                from = self.config.update_fps,
                to = new.update_fps,
                "[RUNTIME] Update rate changed"
            );
        }
        if new.palette != self.config.palette {
            info!(palette = ?new.palette, "[RUNTIME] Palette changed, recoloring trackers");
            if let RuntimeState::Enabled { session } = &mut self.state {
                session.refresh_colors(new.palette);
            }
        }
        if new.debug != self.config.debug {
            info!(debug = new.debug, "[RUNTIME] Debug logging toggled");
        }
        if new.arrow_opacity != self.config.arrow_opacity
            || new.names_on_arrows != self.config.names_on_arrows
            || new.show_border != self.config.show_border
        {
            debug!("[RUNTIME] Presentation settings changed");
        }
        self.config = new;
    }

    /// React to one host event. A disabled runtime ignores everything, so
    /// hosts can forward events unconditionally.
    pub fn handle_event<W: WorldReader, S: ArrowSink>(
        &mut self,
        event: GameEvent,
        world: &W,
        viewport: &Viewport,
        sink: &mut S,
    ) {
        let RuntimeState::Enabled { session } = &mut self.state else {
            return;
        };
        let config = &self.config;

        match event {
            GameEvent::SessionStarted => session.reset(world),
            GameEvent::UpdateTicked { tick } => {
                if tick % config.update_interval() == 0 {
                    session.update_tick(world, viewport, config);
                }
            }
            GameEvent::WorldRendered => session.emit_arrows(config, sink),
            GameEvent::LocalPlayerWarped => session.on_local_warp(world, viewport),
            GameEvent::PeerDisconnected { id } => session.remove_peer(id),
            GameEvent::SessionEnded => session.clear(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
