//! Output formatting utilities for CLI.

use serde::Serialize;
use warlife::{Census, EndReason, Verdict};

/// JSON-serializable run summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunSummary {
    /// Why the run ended.
    pub(super) reason: &'static str,
    /// Winning team symbol (null if none).
    pub(super) winner: Option<char>,
    /// Rounds elapsed.
    pub(super) rounds: u32,
    /// Per-team final counts.
    pub(super) teams: Vec<JsonTeamCount>,
}

/// JSON-serializable per-team count.
#[derive(Debug, Serialize)]
pub(super) struct JsonTeamCount {
    /// Team symbol.
    pub(super) team: char,
    /// Alive cells at the end of the run.
    pub(super) alive: u32,
}

/// Stable machine-readable name for an end reason.
pub(super) fn reason_slug(reason: EndReason) -> &'static str {
    match reason {
        EndReason::SingleTeamRemaining => "single-team-remaining",
        EndReason::RoundLimitReached => "round-limit-reached",
        EndReason::LoopDetected => "loop-detected",
    }
}

impl JsonRunSummary {
    /// Create from a verdict and the final census.
    pub(super) fn from_verdict(verdict: &Verdict, census: &Census) -> Self {
        Self {
            reason: reason_slug(verdict.reason),
            winner: verdict.winner.map(warlife::Team::symbol),
            rounds: verdict.round,
            teams: census
                .iter()
                .map(|(team, alive)| JsonTeamCount {
                    team: team.symbol(),
                    alive,
                })
                .collect(),
        }
    }
}

/// Format a run summary as human-readable text.
pub(super) fn format_summary(verdict: &Verdict, census: &Census) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Game over after {} rounds: {}\n",
        verdict.round, verdict.reason
    ));
    match verdict.winner {
        Some(team) => out.push_str(&format!("  Winner: {team}\n")),
        None if census.teams_alive() == 0 => out.push_str("  Winner: none (no survivors)\n"),
        None => out.push_str("  Winner: none (tie)\n"),
    }
    for (team, count) in census.iter() {
        out.push_str(&format!("  {team}: {count} alive\n"));
    }

    out
}
