//! Core traits - abstraction over the hosting game
//!
//! The engine never talks to the game directly. The host adapter
//! implements `WorldReader` over live game state; tests drive the engine
//! through the mock below.

use super::types::{LocationSnapshot, PlayerSnapshot};

// =============================================================================
// WORLD READER
// =============================================================================

/// Read multiplayer world state
///
/// Every call returns a fresh snapshot of what the host currently knows.
/// Peers whose state has not replicated yet may be missing or carry a
/// None location; the engine tolerates both.
pub trait WorldReader {
    /// The local player, or None while no save is loaded
    fn local_player(&self) -> Option<PlayerSnapshot>;

    /// All connected remote players, the local player excluded
    fn other_players(&self) -> Vec<PlayerSnapshot>;

    /// Every loaded map area with its outgoing transitions
    fn locations(&self) -> Vec<LocationSnapshot>;
}

// =============================================================================
// TEST MOCKS
// =============================================================================

#[cfg(test)]
pub mod mocks {
    use super::*;
    use crate::core::types::{PlayerId, Rect, WorldPos};
    use std::cell::{Cell, RefCell};

    /// Mock WorldReader for testing
    ///
    /// State is mutated through `&self` setters between engine calls;
    /// counters record how often the engine asked for each snapshot.
    pub struct MockWorld {
        pub local: RefCell<Option<PlayerSnapshot>>,
        pub others: RefCell<Vec<PlayerSnapshot>>,
        pub locations: RefCell<Vec<LocationSnapshot>>,
        pub other_players_calls: Cell<usize>,
        pub locations_calls: Cell<usize>,
    }

    impl MockWorld {
        pub fn new() -> Self {
            Self {
                local: RefCell::new(None),
                others: RefCell::new(Vec::new()),
                locations: RefCell::new(Vec::new()),
                other_players_calls: Cell::new(0),
                locations_calls: Cell::new(0),
            }
        }

        pub fn set_local(&self, player: PlayerSnapshot) {
            *self.local.borrow_mut() = Some(player);
        }

        pub fn set_others(&self, players: Vec<PlayerSnapshot>) {
            *self.others.borrow_mut() = players;
        }

        pub fn set_locations(&self, locations: Vec<LocationSnapshot>) {
            *self.locations.borrow_mut() = locations;
        }

        /// Move a connected peer to a new location and position
        pub fn move_peer(&self, id: PlayerId, location: Option<&str>, position: WorldPos) {
            for peer in self.others.borrow_mut().iter_mut() {
                if peer.id == id {
                    peer.location = location.map(str::to_string);
                    peer.position = position;
                    peer.bounds = bounds_at(position);
                }
            }
        }

        /// Drop a peer from the connected list
        pub fn disconnect_peer(&self, id: PlayerId) {
            self.others.borrow_mut().retain(|p| p.id != id);
        }
    }

    impl Default for MockWorld {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WorldReader for MockWorld {
        fn local_player(&self) -> Option<PlayerSnapshot> {
            self.local.borrow().clone()
        }

        fn other_players(&self) -> Vec<PlayerSnapshot> {
            self.other_players_calls.set(self.other_players_calls.get() + 1);
            self.others.borrow().clone()
        }

        fn locations(&self) -> Vec<LocationSnapshot> {
            self.locations_calls.set(self.locations_calls.get() + 1);
            self.locations.borrow().clone()
        }
    }

    /// Sprite bounds for a player centered at `position`
    pub fn bounds_at(position: WorldPos) -> Rect {
        Rect::new(position.x - 32.0, position.y - 64.0, 64.0, 128.0)
    }

    /// Player snapshot with standard sprite bounds
    pub fn make_player(
        id: u64,
        name: &str,
        location: Option<&str>,
        x: f32,
        y: f32,
    ) -> PlayerSnapshot {
        let position = WorldPos::new(x, y);
        PlayerSnapshot {
            id: PlayerId(id),
            display_name: name.to_string(),
            position,
            bounds: bounds_at(position),
            location: location.map(str::to_string),
        }
    }
}
