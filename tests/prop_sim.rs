//! Property-based tests for the simulation step.
//!
//! These tests verify totality, determinism, and the invariants of the
//! per-round transition.
//! Run with: cargo test --release prop_sim

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use proptest::prelude::*;

use warlife::sim::check_invariants;
use warlife::{Cell, Census, GameConfig, Grid, Team, step};

const SYMBOLS: [char; 4] = ['A', 'B', 'C', 'D'];

fn arb_setup() -> impl Strategy<Value = (Grid, GameConfig)> {
    (5u16..=20, 5u16..=15, 1u8..=8).prop_flat_map(|(width, height, death_age)| {
        let cell = prop_oneof![
            2 => Just(Cell::Dead),
            1 => proptest::sample::select(&SYMBOLS[..])
                .prop_map(|symbol| Cell::alive(Team::new(symbol).unwrap())),
        ];
        let size = usize::from(width) * usize::from(height);
        proptest::collection::vec(cell, size).prop_map(move |cells| {
            let grid = Grid::from_cells(width, height, cells).unwrap();
            let config = GameConfig {
                width,
                height,
                death_age,
                ..GameConfig::default()
            };
            (grid, config)
        })
    })
}

fn teams_of(grid: &Grid) -> BTreeSet<Team> {
    grid.cells().iter().copied().filter_map(Cell::team).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Stepping any valid grid never panics and preserves the dimensions.
    #[test]
    fn prop_step_total((grid, config) in arb_setup()) {
        let next = step(&grid, &config);
        prop_assert_eq!(next.width(), grid.width());
        prop_assert_eq!(next.height(), grid.height());
    }

    /// The step function is deterministic.
    #[test]
    fn prop_step_deterministic((grid, config) in arb_setup()) {
        prop_assert_eq!(step(&grid, &config), step(&grid, &config));
    }

    /// The age invariant holds across repeated steps.
    #[test]
    fn prop_invariants_hold((grid, config) in arb_setup()) {
        let mut current = grid;
        for _ in 0..5 {
            current = step(&current, &config);
            if let Err(violation) = check_invariants(&current, &config) {
                return Err(TestCaseError::fail(violation));
            }
        }
    }

    /// Stepping never introduces a team that was not on the grid before.
    #[test]
    fn prop_no_new_teams((grid, config) in arb_setup()) {
        let before = teams_of(&grid);
        let after = teams_of(&step(&grid, &config));
        prop_assert!(after.is_subset(&before), "teams appeared: {after:?} vs {before:?}");
    }

    /// The census never counts more cells than the grid holds.
    #[test]
    fn prop_census_bounded((grid, config) in arb_setup()) {
        let next = step(&grid, &config);
        let area = u32::from(next.width()) * u32::from(next.height());
        prop_assert!(Census::of(&next).total_alive() <= area);
    }

    /// An empty grid stays empty: revival needs alive neighbors.
    #[test]
    fn prop_empty_grid_fixed_point(width in 5u16..=20, height in 5u16..=15) {
        let grid = Grid::new(width, height).unwrap();
        let config = GameConfig { width, height, ..GameConfig::default() };
        prop_assert_eq!(step(&grid, &config), grid);
    }
}
