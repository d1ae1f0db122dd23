//! Simulation core.
//!
//! Implements the game rules on the grid:
//! - Teams, cells, and the bounded rectangular grid
//! - Validated scalar configuration with defaults and clamping
//! - The synchronous per-round step function (aging, combat, revival)
//! - Per-team census of alive cells

mod cell;
mod census;
mod config;
mod engine;
mod grid;

pub use cell::{Cell, Team};
pub use census::Census;
pub use config::GameConfig;
pub use engine::{check_invariants, step};
pub use grid::{Coord, Grid};
