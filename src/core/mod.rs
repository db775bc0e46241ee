//! Core module - platform-independent arrow engine

pub mod color;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod map_graph;
pub mod present;
pub mod rng;
pub mod route;
pub mod runtime;
pub mod session;
pub mod tracker;
pub mod traits;
pub mod types;

pub use color::{player_color, Color, ColorPalette};
pub use config::ArrowConfig;
pub use present::{ArrowDraw, ArrowSink};
pub use route::ResolveError;
pub use runtime::{GameEvent, ModRuntime};
pub use session::ArrowSession;
pub use tracker::PlayerArrow;
pub use traits::WorldReader;
pub use types::{LocationSnapshot, PlayerId, PlayerSnapshot, Rect, ScreenPos, Viewport, WorldPos};
