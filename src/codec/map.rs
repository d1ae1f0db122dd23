//! ASCII map parsing and writing.

use crate::error::{FormatError, TokenFault};
use crate::sim::{Cell, Grid, Team};

/// Parse a plain-text map into a grid, inferring the dimensions.
///
/// One character per cell: the dead marker for an empty cell, anything else
/// (except the reserved digits) for a team symbol. All rows must have the
/// same length. Alive cells start at age 0.
///
/// # Errors
///
/// - [`FormatError::RaggedMap`] when a row differs in length from the first
/// - [`FormatError::BadToken`] with [`TokenFault::ReservedSymbol`] when a
///   digit is used as a team symbol
/// - [`FormatError::BadDimensions`] when the inferred dimensions fall
///   outside the supported grid sizes
pub fn parse_map(text: &str) -> Result<Grid, FormatError> {
    let mut cells = Vec::new();
    let mut width: Option<usize> = None;
    let mut height = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let mut row_len = 0usize;

        for symbol in line.chars() {
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
            cells.push(cell);
            row_len += 1;
        }

        match width {
            None => width = Some(row_len),
            Some(expected) if expected != row_len => {
                return Err(FormatError::RaggedMap { line: line_no });
            }
            Some(_) => {}
        }
        height += 1;
    }

    let width = width.unwrap_or(0);
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(FormatError::BadDimensions { width, height });
    };
    Grid::from_cells(w, h, cells).ok_or(FormatError::BadDimensions { width, height })
}

/// Write a grid as a plain-text map, one symbol per cell.
///
/// The inverse of [`parse_map`] up to ages: one row per line, trailing
/// newline.
#[must_use]
pub fn write_map(grid: &Grid) -> String {
    let per_row = usize::from(grid.width()) + 1;
    let mut out = String::with_capacity(per_row * usize::from(grid.height()));
    for y in 0..grid.height() {
        for cell in grid.row(y) {
            out.push(cell.symbol());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Coord;

    #[test]
    fn test_parse_map_basic() {
        let grid = parse_map(".A...\n.....\n...B.\n.....\n.....\n").unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
        assert_eq!(
            grid.get(Coord::new(1, 0)).and_then(Cell::team),
            Team::new('A')
        );
        assert_eq!(grid.get(Coord::new(3, 2)).and_then(Cell::team), Team::new('B'));
        assert_eq!(grid.get(Coord::new(0, 0)), Some(Cell::Dead));
    }

    #[test]
    fn test_parse_map_ragged() {
        let err = parse_map(".....\n....\n.....\n.....\n.....\n").unwrap_err();
        assert_eq!(err, FormatError::RaggedMap { line: 2 });
    }

    #[test]
    fn test_parse_map_digit_rejected() {
        let err = parse_map("..3..\n.....\n.....\n.....\n.....\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::BadToken {
                line: 1,
                fault: TokenFault::ReservedSymbol('3'),
            }
        );
    }

    #[test]
    fn test_parse_map_bad_dimensions() {
        // 4 columns is below the minimum width
        let err = parse_map("....\n....\n....\n....\n....\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::BadDimensions {
                width: 4,
                height: 5,
            }
        );

        // 3 rows is below the minimum height
        assert!(matches!(
            parse_map(".....\n.....\n.....\n"),
            Err(FormatError::BadDimensions { .. })
        ));
    }

    #[test]
    fn test_write_map_round_trip() {
        let text = ".A...\n.....\n...B.\n..CC.\n.....\n";
        let grid = parse_map(text).unwrap();
        assert_eq!(write_map(&grid), text);
    }
}
