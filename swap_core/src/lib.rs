//! # Swap Core
//!
//! Picks the best tool for whatever the actor is facing and swaps it into the
//! held slot for as long as the swap trigger is held. Works against the
//! collaborator traits in `swap_world`.
//!
//! ## Core Components
//!
//! - **ruleset**: Parses configuration entries into ordered activity sections
//! - **resolver**: Maps observed identifiers to a priority list, then to a slot
//! - **swap**: The swap/restore state machine evaluated once per tick
//!
//! ## Ordering
//!
//! Sections are matched in declaration order. The first section whose
//! activation set contains *any* observed identifier wins, regardless of the
//! order in which identifiers were observed.

pub mod error;
pub mod resolver;
pub mod ruleset;
pub mod swap;

pub use error::*;
pub use resolver::*;
pub use ruleset::*;
pub use swap::*;
