//! Grid codec.
//!
//! Lossless, deterministic translation between three representations of the
//! same grid content:
//! - a human-authored ASCII map of team symbols (`.grid`)
//! - a run-length-encoded persisted form (`.cells`)
//! - the in-memory [`Grid`](crate::sim::Grid)
//!
//! plus the `key:value` properties file (`.config`) that accompanies a
//! persisted grid. Ages are not persisted by any format: decoding always
//! yields age-0 cells.

mod map;
mod properties;
mod rle;

pub use map::{parse_map, write_map};
pub use properties::Properties;
pub use rle::{decode, encode};
