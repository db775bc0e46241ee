//! Host module - environment-specific glue around the core engine
//!
//! This module contains the host-side code including:
//! - Configuration file loading
//! - Logging setup
//!
//! Game-API bindings (reading players, drawing sprites) live in the
//! embedding project, implemented against the `core` traits.

pub mod config;
pub mod logging;
