//! Team and cell types.

use std::fmt;

/// A team identity, distinguished only by its printable symbol.
///
/// The set of teams is discovered from the input grid at decode time; there
/// is no compile-time enumeration. Equality, ordering, and hashing follow the
/// symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Team(char);

impl Team {
    /// The reserved character for a dead cell in every file format.
    pub const DEAD_MARKER: char = '.';

    /// Create a team from its symbol.
    ///
    /// Returns `None` for reserved characters: the dead marker and the ASCII
    /// digits used by the run-length format.
    #[must_use]
    pub fn new(symbol: char) -> Option<Self> {
        if Self::is_reserved(symbol) {
            None
        } else {
            Some(Self(symbol))
        }
    }

    /// Check whether a character is reserved and cannot name a team.
    #[must_use]
    pub const fn is_reserved(symbol: char) -> bool {
        symbol == Self::DEAD_MARKER || symbol.is_ascii_digit()
    }

    /// Get the team's symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single grid cell.
///
/// Outside the step function, `age <= death_age` holds for every alive cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// An empty cell.
    #[default]
    Dead,
    /// A cell held by a team.
    Alive {
        /// The owning team.
        team: Team,
        /// Rounds survived since birth.
        age: u8,
    },
}

impl Cell {
    /// Create a freshly born cell for a team.
    #[must_use]
    pub const fn alive(team: Team) -> Self {
        Cell::Alive { team, age: 0 }
    }

    /// Check whether the cell is alive.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive { .. })
    }

    /// Get the owning team, if any.
    #[must_use]
    pub const fn team(self) -> Option<Team> {
        match self {
            Cell::Dead => None,
            Cell::Alive { team, .. } => Some(team),
        }
    }

    /// The cell's symbol in every file format: the team symbol, or the dead
    /// marker.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Dead => Team::DEAD_MARKER,
            Cell::Alive { team, .. } => team.symbol(),
        }
    }
}
