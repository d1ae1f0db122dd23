//! The run controller.
//!
//! Owns the grid, round counter, census, and fingerprint history for one
//! run, and decides when and why the run ends. The controller is clock-free:
//! display pacing lives entirely in the caller.

use std::collections::HashMap;
use std::fmt;

use crate::sim::{Cell, Census, GameConfig, Grid, Team, step};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// At most one team has alive cells (covers total extinction).
    SingleTeamRemaining,
    /// The configured round limit was reached.
    RoundLimitReached,
    /// The grid state was seen in an earlier round.
    LoopDetected,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::SingleTeamRemaining => write!(f, "single team remaining"),
            EndReason::RoundLimitReached => write!(f, "round limit reached"),
            EndReason::LoopDetected => write!(f, "loop detected"),
        }
    }
}

/// The outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Why the run ended.
    pub reason: EndReason,
    /// The team with the strictly greatest alive count, or `None` on a tie
    /// or total extinction.
    pub winner: Option<Team>,
    /// The round at which the run ended.
    pub round: u32,
}

/// What the loop-detection fingerprint covers.
///
/// Age affects future transitions, so two grids with the same team layout
/// but different ages are not equivalent; `Full` is the default. The
/// layout-only scope exists for testing and compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FingerprintScope {
    /// Team-or-dead plus age, per cell.
    #[default]
    Full,
    /// Team-or-dead only, per cell.
    TeamLayout,
}

/// Hash a full grid state for the round history.
///
/// FNV-1a over the dimensions and per-cell content. Deterministic for a
/// given grid and scope.
#[must_use]
pub fn fingerprint(grid: &Grid, scope: FingerprintScope) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    let mut hash = OFFSET_BASIS;
    for byte in grid.width().to_le_bytes() {
        hash = fnv1a(hash, byte);
    }
    for byte in grid.height().to_le_bytes() {
        hash = fnv1a(hash, byte);
    }
    for cell in grid.cells() {
        let (symbol, age) = match *cell {
            Cell::Dead => (Team::DEAD_MARKER, 0),
            Cell::Alive { team, age } => (
                team.symbol(),
                if scope == FingerprintScope::Full { age } else { 0 },
            ),
        };
        for byte in u32::from(symbol).to_le_bytes() {
            hash = fnv1a(hash, byte);
        }
        hash = fnv1a(hash, age);
    }
    hash
}

/// One round of FNV-1a mixing.
fn fnv1a(hash: u64, byte: u8) -> u64 {
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    (hash ^ u64::from(byte)).wrapping_mul(PRIME)
}

/// Drives a run from an initial grid to its verdict.
///
/// Termination checks run in fixed priority order after every completed
/// step, and once at construction for round 0, so a degenerate input with
/// at most one team ends without stepping:
/// 1. at most one team alive
/// 2. round limit reached
/// 3. state fingerprint already in the history
#[derive(Debug)]
pub struct GameRunner {
    /// Current grid state.
    grid: Grid,
    /// Immutable run configuration.
    config: GameConfig,
    /// Census of the current grid.
    census: Census,
    /// Completed rounds.
    round: u32,
    /// Fingerprint of every visited state, with the round it was first
    /// seen. Bounded by `win_round` entries.
    history: HashMap<u64, u32>,
    /// Loop-detection scope.
    scope: FingerprintScope,
    /// Set once the run has ended.
    verdict: Option<Verdict>,
}

impl GameRunner {
    /// Create a runner with the default (full-state) fingerprint scope.
    #[must_use]
    pub fn new(grid: Grid, config: GameConfig) -> Self {
        Self::with_scope(grid, config, FingerprintScope::default())
    }

    /// Create a runner with an explicit fingerprint scope.
    #[must_use]
    pub fn with_scope(grid: Grid, config: GameConfig, scope: FingerprintScope) -> Self {
        let census = Census::of(&grid);
        let mut runner = Self {
            grid,
            config,
            census,
            round: 0,
            history: HashMap::new(),
            scope,
            verdict: None,
        };
        runner.verdict = runner.evaluate();
        runner
    }

    /// Advance one round.
    ///
    /// Steps the grid, updates the round counter and census, and re-runs
    /// the termination checks. Returns `false` without stepping once the
    /// run has ended.
    pub fn advance(&mut self) -> bool {
        if self.verdict.is_some() {
            return false;
        }
        self.grid = step(&self.grid, &self.config);
        self.round += 1;
        self.census = Census::of(&self.grid);
        self.verdict = self.evaluate();
        true
    }

    /// Run the termination checks for the current state, recording the
    /// fingerprint when the run continues.
    fn evaluate(&mut self) -> Option<Verdict> {
        if self.census.teams_alive() <= 1 {
            return Some(Verdict {
                reason: EndReason::SingleTeamRemaining,
                winner: self.census.leader(),
                round: self.round,
            });
        }
        if self.round >= self.config.win_round {
            return Some(Verdict {
                reason: EndReason::RoundLimitReached,
                winner: self.census.leader(),
                round: self.round,
            });
        }
        let print = fingerprint(&self.grid, self.scope);
        if self.history.contains_key(&print) {
            return Some(Verdict {
                reason: EndReason::LoopDetected,
                winner: self.census.leader(),
                round: self.round,
            });
        }
        self.history.insert(print, self.round);
        None
    }

    /// Step to the end and return the final grid with the verdict.
    #[must_use]
    pub fn run_to_completion(mut self) -> (Grid, Verdict) {
        loop {
            if let Some(verdict) = self.verdict {
                return (self.grid, verdict);
            }
            self.advance();
        }
    }

    /// Check whether the run has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.verdict.is_some()
    }

    /// The verdict, once the run has ended.
    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// The current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The census of the current grid.
    #[must_use]
    pub fn census(&self) -> &Census {
        &self.census
    }

    /// Completed rounds.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// The run configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Run a grid to completion under a configuration.
///
/// Convenience wrapper over [`GameRunner`] with the default fingerprint
/// scope.
#[must_use]
pub fn run_to_completion(grid: Grid, config: GameConfig) -> (Grid, Verdict) {
    GameRunner::new(grid, config).run_to_completion()
}
