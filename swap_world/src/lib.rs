//! # Swap World
//!
//! Everything the quick tool swap engine reads from or writes to: identifiers,
//! inventory contents, world observation at a tile position, input signals and
//! the key/value configuration store. The engine in `swap_core` only talks to
//! the traits defined here; the in-memory implementations let it run without a
//! game runtime attached.

pub mod config;
pub mod entities;
pub mod input;
pub mod world_state;

pub use config::*;
pub use entities::*;
pub use input::*;
pub use world_state::*;
