//! Per-team census of alive cells.

use std::collections::BTreeMap;

use crate::sim::{Grid, Team};

/// Count of currently alive cells per team.
///
/// Teams with zero alive cells are never stored. The census is an explicit
/// value recomputed each round and threaded through the run loop; there is
/// no ambient tally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Census {
    /// Alive-cell count keyed by team, in symbol order.
    counts: BTreeMap<Team, u32>,
}

impl Census {
    /// Tally the alive cells of a grid.
    #[must_use]
    pub fn of(grid: &Grid) -> Self {
        let mut counts = BTreeMap::new();
        for cell in grid.cells() {
            if let Some(team) = cell.team() {
                *counts.entry(team).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Number of teams with at least one alive cell.
    #[must_use]
    pub fn teams_alive(&self) -> usize {
        self.counts.len()
    }

    /// Alive-cell count for a team (zero if absent).
    #[must_use]
    pub fn count(&self, team: Team) -> u32 {
        self.counts.get(&team).copied().unwrap_or(0)
    }

    /// Total alive cells across all teams.
    #[must_use]
    pub fn total_alive(&self) -> u32 {
        self.counts.values().sum()
    }

    /// The team with the strictly greatest count.
    ///
    /// Returns `None` when no team is alive or when two or more teams tie
    /// for the greatest count.
    #[must_use]
    pub fn leader(&self) -> Option<Team> {
        let mut best: Option<(Team, u32)> = None;
        let mut tied = false;

        for (&team, &count) in &self.counts {
            match best {
                None => best = Some((team, count)),
                Some((_, top)) if count > top => {
                    best = Some((team, count));
                    tied = false;
                }
                Some((_, top)) if count == top => tied = true,
                Some(_) => {}
            }
        }

        match best {
            Some((team, _)) if !tied => Some(team),
            _ => None,
        }
    }

    /// Iterate over `(team, count)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Team, u32)> + '_ {
        self.counts.iter().map(|(&team, &count)| (team, count))
    }
}
