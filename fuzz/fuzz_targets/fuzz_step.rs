#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use warlife::sim::check_invariants;
use warlife::{Cell, GameConfig, Grid, Team, step};

/// Structured input for step fuzzing.
#[derive(Arbitrary, Debug)]
struct StepInput {
    /// Grid width (clamped into the supported range).
    width: u16,
    /// Grid height (clamped into the supported range).
    height: u16,
    /// Maximum cell age (clamped into the supported range).
    death_age: u8,
    /// Cell seeds: symbol and age per cell, cycled over the grid.
    seeds: Vec<(u8, u8)>,
}

fuzz_target!(|input: StepInput| {
    let width = input.width.clamp(5, 100);
    let height = input.height.clamp(5, 50);
    let death_age = input.death_age.clamp(1, 32);
    if input.seeds.is_empty() {
        return;
    }

    let size = usize::from(width) * usize::from(height);
    let cells: Vec<Cell> = (0..size)
        .map(|idx| {
            let (symbol, age) = input.seeds[idx % input.seeds.len()];
            match Team::new(char::from(symbol)) {
                // Keep the age invariant satisfied on entry
                Some(team) => Cell::Alive {
                    team,
                    age: age % (death_age + 1),
                },
                None => Cell::Dead,
            }
        })
        .collect();
    let grid = Grid::from_cells(width, height, cells).expect("cell count matches dimensions");

    let config = GameConfig {
        width,
        height,
        death_age,
        ..GameConfig::default()
    };

    // Stepping must never panic, must preserve dimensions, and must uphold
    // the age invariant
    let next = step(&grid, &config);
    assert_eq!(next.width(), grid.width());
    assert_eq!(next.height(), grid.height());
    if let Err(violation) = check_invariants(&next, &config) {
        panic!("invariant violated after step: {violation}");
    }
});
