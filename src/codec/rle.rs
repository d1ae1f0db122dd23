//! Run-length encoding of persisted grids.
//!
//! Each grid row becomes maximal runs of identical cell content as
//! `<count><symbol>` tokens with no separator, one row per line, trailing
//! newline. Runs merge on symbol only; ages never split a run and are not
//! persisted.

use crate::error::{FormatError, TokenFault};
use crate::sim::{Cell, GameConfig, Grid, Team};

/// Encode a grid into its run-length persisted form.
///
/// Counts are positive decimals without leading zeros. Every row ends with a
/// newline, including the last.
#[must_use]
pub fn encode(grid: &Grid) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        let mut run: Option<(char, u32)> = None;
        for cell in grid.row(y) {
            let symbol = cell.symbol();
            match &mut run {
                Some((current, count)) if *current == symbol => *count += 1,
                _ => {
                    if let Some((current, count)) = run {
                        out.push_str(&count.to_string());
                        out.push(current);
                    }
                    run = Some((symbol, 1));
                }
            }
        }
        if let Some((current, count)) = run {
            out.push_str(&count.to_string());
            out.push(current);
        }
        out.push('\n');
    }
    out
}

/// Decode a run-length persisted grid against a configuration.
///
/// Each line must expand to exactly `config.width` cells and the line count
/// must equal `config.height`. Decoded alive cells start at age 0: loading a
/// snapshot always resets aging history.
///
/// # Errors
///
/// - [`FormatError::BadToken`] for a missing or zero count, a count without
///   a symbol, or a reserved symbol
/// - [`FormatError::WidthMismatch`] when a row's counts do not sum to the
///   configured width
/// - [`FormatError::HeightMismatch`] when the row count is wrong
pub fn decode(text: &str, config: &GameConfig) -> Result<Grid, FormatError> {
    let width = u64::from(config.width);
    let mut cells = Vec::with_capacity(usize::from(config.width) * usize::from(config.height));
    let mut rows = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        rows += 1;
        let mut row_sum = 0u64;
        let mut chars = line.chars().peekable();

        while chars.peek().is_some() {
            let mut count = 0u64;
            let mut digits = 0u32;
            while let Some(c) = chars.peek().copied() {
                let Some(digit) = c.to_digit(10) else { break };
                count = count.saturating_mul(10).saturating_add(u64::from(digit));
                digits += 1;
                chars.next();
            }

            if digits == 0 {
                return Err(FormatError::BadToken {
                    line: line_no,
                    fault: TokenFault::MissingCount,
                });
            }
            if count == 0 {
                return Err(FormatError::BadToken {
                    line: line_no,
                    fault: TokenFault::ZeroCount,
                });
            }

            let Some(symbol) = chars.next() else {
                return Err(FormatError::BadToken {
                    line: line_no,
                    fault: TokenFault::MissingSymbol,
                });
            };

            let cell = if symbol == Team::DEAD_MARKER {
                Cell::Dead
            } else {
                match Team::new(symbol) {
                    Some(team) => Cell::alive(team),
                    None => {
                        return Err(FormatError::BadToken {
                            line: line_no,
                            fault: TokenFault::ReservedSymbol(symbol),
                        });
                    }
                }
            };

            row_sum += count;
            // Bail before expanding a run that already overflows the row
            if row_sum > width {
                return Err(FormatError::WidthMismatch {
                    line: line_no,
                    found: row_sum,
                    expected: config.width,
                });
            }
            for _ in 0..count {
                cells.push(cell);
            }
        }

        if row_sum != width {
            return Err(FormatError::WidthMismatch {
                line: line_no,
                found: row_sum,
                expected: config.width,
            });
        }
    }

    if rows != usize::from(config.height) {
        return Err(FormatError::HeightMismatch {
            found: rows,
            expected: config.height,
        });
    }

    Grid::from_cells(config.width, config.height, cells).ok_or(FormatError::BadDimensions {
        width: usize::from(config.width),
        height: usize::from(config.height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::parse_map;
    use crate::sim::Coord;

    fn config(width: u16, height: u16) -> GameConfig {
        GameConfig {
            width,
            height,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_encode_merges_runs() {
        let grid = parse_map("...XX.XX\n....XXXX\n##.#....\n###.....\n........\n").unwrap();
        assert_eq!(encode(&grid), "3.2X1.2X\n4.4X\n2#1.1#4.\n3#5.\n8.\n");
    }

    #[test]
    fn test_encode_ignores_ages() {
        let mut grid = parse_map("AA...\n.....\n.....\n.....\n.....\n").unwrap();
        let team = Team::new('A').unwrap();
        grid.set(Coord::new(1, 0), Cell::Alive { team, age: 3 });
        // Different ages, same team: still one run
        assert_eq!(encode(&grid), "2A3.\n5.\n5.\n5.\n5.\n");
    }

    #[test]
    fn test_decode_basic() {
        let grid = decode("3.2X1.2X\n4.4X\n8.\n8.\n8.\n", &config(8, 5)).unwrap();
        assert_eq!(grid.get(Coord::new(3, 0)).and_then(Cell::team), Team::new('X'));
        assert_eq!(grid.get(Coord::new(5, 0)), Some(Cell::Dead));
        assert_eq!(grid.get(Coord::new(7, 1)).and_then(Cell::team), Team::new('X'));
    }

    #[test]
    fn test_decode_resets_ages() {
        let grid = decode("5A\n5.\n5.\n5.\n5.\n", &config(5, 5)).unwrap();
        let team = Team::new('A').unwrap();
        for x in 0..5 {
            assert_eq!(grid.get(Coord::new(x, 0)), Some(Cell::Alive { team, age: 0 }));
        }
    }

    #[test]
    fn test_decode_missing_count() {
        let err = decode("A5.\n", &config(5, 1)).unwrap_err();
        assert_eq!(
            err,
            FormatError::BadToken {
                line: 1,
                fault: TokenFault::MissingCount,
            }
        );
    }

    #[test]
    fn test_decode_zero_count() {
        let err = decode("0A5.\n", &config(5, 5)).unwrap_err();
        assert_eq!(
            err,
            FormatError::BadToken {
                line: 1,
                fault: TokenFault::ZeroCount,
            }
        );
    }

    #[test]
    fn test_decode_missing_symbol() {
        let err = decode("3.2\n", &config(5, 5)).unwrap_err();
        assert_eq!(
            err,
            FormatError::BadToken {
                line: 1,
                fault: TokenFault::MissingSymbol,
            }
        );
    }

    #[test]
    fn test_decode_width_mismatch() {
        let err = decode("4.\n5.\n5.\n5.\n5.\n", &config(5, 5)).unwrap_err();
        assert_eq!(
            err,
            FormatError::WidthMismatch {
                line: 1,
                found: 4,
                expected: 5,
            }
        );

        // Oversized runs are rejected without being expanded
        assert!(matches!(
            decode("999999999999999999999A\n", &config(5, 5)),
            Err(FormatError::WidthMismatch { line: 1, .. })
        ));
    }

    #[test]
    fn test_decode_height_mismatch() {
        let err = decode("5.\n5.\n5.\n5.\n", &config(5, 5)).unwrap_err();
        assert_eq!(
            err,
            FormatError::HeightMismatch {
                found: 4,
                expected: 5,
            }
        );
    }

    #[test]
    fn test_round_trip() {
        let text = ".A...\nAAA..\n.....\n..BB.\n..BB.\n";
        let grid = parse_map(text).unwrap();
        let decoded = decode(&encode(&grid), &config(5, 5)).unwrap();
        assert_eq!(decoded, grid);
    }
}
