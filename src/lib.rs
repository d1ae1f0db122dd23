// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Warlife: a multi-team game-of-life variant with run-length-encoded grids.
//!
//! Cells belong to teams, age every round, die in combat against enemy
//! majorities, and recapture dead cells for the locally dominant team. The
//! crate provides:
//! - Bounded grid and team/cell types with a synchronous step function
//! - A lossless codec between map files, run-length-encoded cell files, and
//!   the in-memory grid, plus a properties-file parser
//! - A run controller with census tracking, loop detection, and winner
//!   determination
//! - File-based game loading, saving, conversion, and discovery
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       Runner (rounds, verdict)      │
//! ├─────────────────────────────────────┤
//! │     Simulation (grid, step)         │
//! ├─────────────────────────────────────┤
//! │   Codec (map / RLE / properties)    │
//! └─────────────────────────────────────┘
//! ```

pub mod codec;
pub mod error;
pub mod games;
pub mod render;
pub mod runner;
pub mod sim;

pub use error::{ConfigError, FormatError, TokenFault};

// Re-export key simulation types at crate root for convenience
pub use runner::{EndReason, FingerprintScope, GameRunner, Verdict, run_to_completion};
pub use sim::{Cell, Census, Coord, GameConfig, Grid, Team, step};
