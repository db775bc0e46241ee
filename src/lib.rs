// Player Arrows - cross-map directional arrows for multiplayer game overlays

pub mod core;
pub mod host;
