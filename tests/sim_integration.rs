//! End-to-end runs from loaded artifacts to a verdict.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::TempDir;
use warlife::{
    Census, EndReason, FingerprintScope, GameConfig, GameRunner, Team, run_to_completion,
};
use warlife::codec::parse_map;
use warlife::games;

fn config(death_age: u8, win_round: u32) -> GameConfig {
    GameConfig {
        width: 7,
        height: 7,
        death_age,
        win_round,
        ..GameConfig::default()
    }
}

#[test]
fn test_outnumbered_team_is_eliminated() {
    // The lone B cell faces three A neighbors and no allies: it dies in the
    // first round, ending the run with A as the only team left.
    let grid = parse_map("AAA....\nAAA....\n.B.....\n.......\n.......\n.......\n.......\n")
        .unwrap();
    let (final_grid, verdict) = run_to_completion(grid, config(8, 512));

    assert_eq!(verdict.reason, EndReason::SingleTeamRemaining);
    assert_eq!(verdict.round, 1);
    assert_eq!(verdict.winner, Some(Team::new('A').unwrap()));
    assert_eq!(Census::of(&final_grid).count(Team::new('B').unwrap()), 0);
}

#[test]
fn test_isolated_blocks_age_out_together() {
    // Two stable blocks never interact; both die of old age on the same
    // round and nobody wins.
    let grid = parse_map("AA.....\nAA.....\n.......\n.......\n.......\n.....BB\n.....BB\n")
        .unwrap();
    let (final_grid, verdict) = run_to_completion(grid, config(3, 512));

    assert_eq!(verdict.reason, EndReason::SingleTeamRemaining);
    assert_eq!(verdict.round, 4);
    assert_eq!(verdict.winner, None);
    assert_eq!(Census::of(&final_grid).total_alive(), 0);
}

#[test]
fn test_layout_loop_ends_run() {
    let grid = parse_map("AA.....\nAA.....\n.......\n.......\n.......\n.....BB\n.....BB\n")
        .unwrap();
    let runner = GameRunner::with_scope(grid, config(8, 512), FingerprintScope::TeamLayout);
    let (_, verdict) = runner.run_to_completion();

    assert_eq!(verdict.reason, EndReason::LoopDetected);
    assert_eq!(verdict.round, 1);
    // Equal block sizes: the census is tied, so the loop has no winner
    assert_eq!(verdict.winner, None);
}

#[test]
fn test_every_run_terminates_within_the_round_limit() {
    let grid = parse_map("A.B.C.D\n.......\nD.A.B.C\n.......\nC.D.A.B\n.......\nB.C.D.A\n")
        .unwrap();
    let cfg = config(8, 128);
    let (_, verdict) = run_to_completion(grid, cfg);

    assert!(verdict.round <= cfg.win_round);
}

#[test]
fn test_run_from_files_matches_in_memory_run() {
    let tmp = TempDir::new().unwrap();
    let map = "AAA....\nAAA....\n.B.....\n.......\n.......\n.......\n.......\n";
    fs::write(tmp.path().join("battle.grid"), map).unwrap();
    games::convert(&tmp.path().join("battle.grid"), false).unwrap();

    let (grid, config) = games::load_dir(tmp.path()).unwrap();
    let (_, from_files) = run_to_completion(grid, config);

    let (_, in_memory) = run_to_completion(parse_map(map).unwrap(), config);
    assert_eq!(from_files, in_memory);
}
