//! The synchronous per-round step function.
//!
//! Every cell's next state is computed against the current grid only; a cell
//! that dies this round still counts as an alive neighbor for every other
//! cell's transition this round. The grid is replaced wholesale, never
//! mutated mid-step.

use crate::sim::{Cell, Coord, GameConfig, Grid, Team};

/// Alive neighbors required before a dead cell can be captured.
const REVIVAL_MINIMUM: u8 = 3;

/// Compute the next grid state.
///
/// Pure and total: any well-formed grid/config pair steps without failure.
/// Rules, per cell, evaluated against the pre-step grid:
/// - An alive cell dies when it exceeds `death_age`, or when strictly more
///   enemies than allies surround it; otherwise it survives one round older.
/// - A dead cell with at least [`REVIVAL_MINIMUM`] alive neighbors is
///   captured at age 0 by the unique team with the most neighbors; a tie for
///   the most leaves it dead.
#[must_use]
pub fn step(grid: &Grid, config: &GameConfig) -> Grid {
    let mut next = grid.clone();
    for (coord, cell) in grid.iter() {
        next.set(coord, next_cell(grid, coord, cell, config.death_age));
    }
    next
}

/// Transition a single cell.
fn next_cell(grid: &Grid, coord: Coord, cell: Cell, death_age: u8) -> Cell {
    let (neighbors, count) = coord.moore(grid.width(), grid.height());
    let neighbors = &neighbors[..usize::from(count)];

    match cell {
        Cell::Alive { team, age } => {
            // Equivalent to age + 1 > death_age, without the overflow
            if age >= death_age {
                return Cell::Dead;
            }

            let mut allied = 0u8;
            let mut enemy = 0u8;
            for &nb in neighbors {
                if let Some(Cell::Alive { team: other, .. }) = grid.get(nb) {
                    if other == team {
                        allied += 1;
                    } else {
                        enemy += 1;
                    }
                }
            }

            if enemy > allied {
                Cell::Dead
            } else {
                Cell::Alive { team, age: age + 1 }
            }
        }
        Cell::Dead => {
            // Tally alive neighbors per team. At most 8 distinct teams.
            let mut tally: [Option<(Team, u8)>; 8] = [None; 8];
            let mut total = 0u8;
            for &nb in neighbors {
                if let Some(Cell::Alive { team, .. }) = grid.get(nb) {
                    total += 1;
                    for slot in &mut tally {
                        match slot {
                            Some((existing, count)) if *existing == team => {
                                *count += 1;
                                break;
                            }
                            None => {
                                *slot = Some((team, 1));
                                break;
                            }
                            Some(_) => {}
                        }
                    }
                }
            }

            if total < REVIVAL_MINIMUM {
                return Cell::Dead;
            }

            let mut best: Option<(Team, u8)> = None;
            let mut tied = false;
            for (team, count) in tally.into_iter().flatten() {
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
                Some((team, _)) if !tied => Cell::alive(team),
                _ => Cell::Dead,
            }
        }
    }
}

/// Check the grid invariants that hold between steps.
///
/// Every alive cell must satisfy `age <= death_age`.
///
/// # Errors
///
/// Returns a description of the first violated invariant.
pub fn check_invariants(grid: &Grid, config: &GameConfig) -> Result<(), String> {
    for (coord, cell) in grid.iter() {
        if let Cell::Alive { team, age } = cell
            && age > config.death_age
        {
            return Err(format!(
                "cell at ({}, {}) of team {team} has age {age} > death-age {}",
                coord.x, coord.y, config.death_age
            ));
        }
    }
    Ok(())
}
