//! The bounded rectangular grid.

use crate::sim::Cell;

/// A coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Get the Moore neighborhood (up to 8 adjacent coordinates).
    ///
    /// Returns a fixed-size array and count to avoid heap allocation.
    /// The array contains valid coordinates in indices 0..count. Border
    /// cells have fewer than 8 neighbors; there is no wraparound.
    #[must_use]
    #[inline]
    pub fn moore(self, width: u16, height: u16) -> ([Coord; 8], u8) {
        let mut result = [Coord::new(0, 0); 8];
        let mut count = 0u8;

        let left = self.x.checked_sub(1);
        let right = if self.x + 1 < width { Some(self.x + 1) } else { None };
        let up = self.y.checked_sub(1);
        let down = if self.y + 1 < height { Some(self.y + 1) } else { None };

        for y in [up, Some(self.y), down].into_iter().flatten() {
            for x in [left, Some(self.x), right].into_iter().flatten() {
                if x == self.x && y == self.y {
                    continue;
                }
                result[usize::from(count)] = Coord::new(x, y);
                count += 1;
            }
        }

        (result, count)
    }
}

/// The simulation grid: a fixed-size rectangular array of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width of the grid in cells.
    width: u16,
    /// Height of the grid in cells.
    height: u16,
    /// Cells stored in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Minimum supported width.
    pub const MIN_WIDTH: u16 = 5;
    /// Maximum supported width.
    pub const MAX_WIDTH: u16 = 100;
    /// Minimum supported height.
    pub const MIN_HEIGHT: u16 = 5;
    /// Maximum supported height.
    pub const MAX_HEIGHT: u16 = 50;

    /// Create a new grid filled with dead cells.
    ///
    /// Returns `None` if either dimension is outside the supported range.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if !Self::dimensions_ok(width, height) {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        Some(Self {
            width,
            height,
            cells: vec![Cell::Dead; size],
        })
    }

    /// Create a grid from row-major cells.
    ///
    /// Returns `None` if the dimensions are unsupported or the cell count
    /// does not equal `width * height`.
    #[must_use]
    pub fn from_cells(width: u16, height: u16, cells: Vec<Cell>) -> Option<Self> {
        if !Self::dimensions_ok(width, height)
            || cells.len() != usize::from(width) * usize::from(height)
        {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Check whether dimensions fall inside the supported ranges.
    #[must_use]
    pub const fn dimensions_ok(width: u16, height: u16) -> bool {
        width >= Self::MIN_WIDTH
            && width <= Self::MAX_WIDTH
            && height >= Self::MIN_HEIGHT
            && height <= Self::MAX_HEIGHT
    }

    /// Get the width of the grid.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the grid.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a coordinate is within the grid bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Convert a coordinate to an index into the cells array.
    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.y) * usize::from(self.width) + usize::from(coord.x))
        } else {
            None
        }
    }

    /// Get the cell at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.coord_to_index(coord).map(|idx| self.cells[idx])
    }

    /// Set the cell at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        if let Some(idx) = self.coord_to_index(coord) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Get a reference to the raw cells slice in row-major order.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get one row of cells, or an empty slice if the row is out of bounds.
    #[must_use]
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = usize::from(y) * usize::from(self.width);
        &self.cells[start..start + usize::from(self.width)]
    }

    /// Iterate over all coordinates and cells.
    // Index arithmetic stays below width * height, which fits u16 per axis
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(idx, cell)| {
            let x = (idx % usize::from(self.width)) as u16;
            let y = (idx / usize::from(self.width)) as u16;
            (Coord::new(x, y), *cell)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Team;

    #[test]
    fn test_moore_center() {
        let (neighbors, count) = Coord::new(2, 2).moore(5, 5);
        assert_eq!(count, 8);
        let slice = &neighbors[..usize::from(count)];
        assert!(slice.contains(&Coord::new(1, 1)));
        assert!(slice.contains(&Coord::new(3, 3)));
        assert!(!slice.contains(&Coord::new(2, 2)));
    }

    #[test]
    fn test_moore_corner() {
        let (neighbors, count) = Coord::new(0, 0).moore(5, 5);
        assert_eq!(count, 3);
        let slice = &neighbors[..usize::from(count)];
        assert!(slice.contains(&Coord::new(1, 0)));
        assert!(slice.contains(&Coord::new(0, 1)));
        assert!(slice.contains(&Coord::new(1, 1)));
    }

    #[test]
    fn test_moore_edge() {
        let (_, count) = Coord::new(2, 0).moore(5, 5);
        assert_eq!(count, 5);
    }

    #[test]
    fn test_grid_bounds_rejected() {
        assert!(Grid::new(4, 10).is_none());
        assert!(Grid::new(101, 10).is_none());
        assert!(Grid::new(10, 4).is_none());
        assert!(Grid::new(10, 51).is_none());
        assert!(Grid::new(5, 5).is_some());
        assert!(Grid::new(100, 50).is_some());
    }

    #[test]
    fn test_grid_get_set() {
        let mut grid = Grid::new(5, 5).unwrap();
        let coord = Coord::new(3, 2);
        assert_eq!(grid.get(coord), Some(Cell::Dead));

        let team = Team::new('A').unwrap();
        assert!(grid.set(coord, Cell::alive(team)));
        assert_eq!(grid.get(coord), Some(Cell::alive(team)));

        assert!(!grid.set(Coord::new(5, 0), Cell::Dead));
        assert_eq!(grid.get(Coord::new(0, 5)), None);
    }

    #[test]
    fn test_from_cells_length_check() {
        assert!(Grid::from_cells(5, 5, vec![Cell::Dead; 25]).is_some());
        assert!(Grid::from_cells(5, 5, vec![Cell::Dead; 24]).is_none());
    }

    #[test]
    fn test_row_slicing() {
        let mut grid = Grid::new(5, 5).unwrap();
        let team = Team::new('B').unwrap();
        grid.set(Coord::new(4, 1), Cell::alive(team));

        let row = grid.row(1);
        assert_eq!(row.len(), 5);
        assert_eq!(row[4], Cell::alive(team));
        assert!(grid.row(5).is_empty());
    }
}
