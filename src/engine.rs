//! Core grid model for the block puzzle.
//!
//! This module defines the game's fundamental components:
//! - `CellState`: the occupant of one grid cell (a colored block, or empty).
//! - `Grid`: a square matrix of cell states with point accessors, full-value
//!   cloning, a textual renderer, and seeded random generation.
//!
//! The grid carries no game logic of its own; rule evaluation lives in
//! `rules` and the edit-distance search in `solver`.

use crate::error::{EngineError, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// The occupant of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// No block in the cell.
    Empty,
    /// A red block.
    Red,
    /// A green block.
    Green,
    /// A blue block.
    Blue,
}

impl CellState {
    /// Every placeable color, in declaration order. Candidate enumeration in
    /// the solver and the shell's color selection both rely on this order
    /// being fixed.
    pub const COLORS: [CellState; 3] = [CellState::Red, CellState::Green, CellState::Blue];

    /// Converts the cell state to its single-character display code.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockgrid_solver::engine::CellState;
    /// assert_eq!(CellState::Red.to_char(), 'r');
    /// assert_eq!(CellState::Empty.to_char(), '_');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            CellState::Empty => '_',
            CellState::Red => 'r',
            CellState::Green => 'g',
            CellState::Blue => 'b',
        }
    }

    /// True for any color, false for `Empty`.
    pub fn is_occupied(&self) -> bool {
        !matches!(self, CellState::Empty)
    }
}

/// A square grid of cell states.
///
/// Storage is a flat row-major `Vec` indexed by `y * side + x`, so cloning a
/// grid is a full value copy; two grids never alias. The side length is fixed
/// at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates an all-empty grid with the given side length.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidGridSize` if `side` is zero. Any positive
    /// side is accepted.
    ///
    /// # Examples
    /// ```
    /// use blockgrid_solver::engine::{CellState, Grid};
    /// let grid = Grid::new(5).unwrap();
    /// assert_eq!(grid.get(0, 0), CellState::Empty);
    /// assert!(Grid::new(0).is_err());
    /// ```
    pub fn new(side: usize) -> Result<Self> {
        if side == 0 {
            return Err(EngineError::InvalidGridSize(side));
        }
        Ok(Grid {
            side,
            cells: vec![CellState::Empty; side * side],
        })
    }

    /// Creates a grid with every cell drawn uniformly from the four states
    /// (the three colors and `Empty`) using a seeded generator.
    ///
    /// The same seed always produces the same grid; different seeds produce
    /// different grids. Unlike a fresh game grid this includes occupied
    /// cells, which makes it useful for evaluator sweeps and tests.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidGridSize` if `side` is zero.
    pub fn random_with_seed(side: usize, seed: u64) -> Result<Self> {
        let mut grid = Grid::new(side)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        for cell in grid.cells.iter_mut() {
            *cell = match rng.gen_range(0..4u8) {
                0 => CellState::Red,
                1 => CellState::Green,
                2 => CellState::Blue,
                _ => CellState::Empty,
            };
        }
        Ok(grid)
    }

    /// The side length `n` of this `n`×`n` grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the state of the cell at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is outside `[0, side)`. Out-of-range access is a
    /// caller defect; every caller in this crate iterates `0..side`.
    pub fn get(&self, x: usize, y: usize) -> CellState {
        assert!(
            x < self.side && y < self.side,
            "cell ({}, {}) out of range for side {}",
            x,
            y,
            self.side
        );
        self.cells[y * self.side + x]
    }

    /// Sets the cell at `(x, y)` to `value`.
    ///
    /// # Panics
    /// Panics if `x` or `y` is outside `[0, side)`, as with [`Grid::get`].
    pub fn set(&mut self, x: usize, y: usize, value: CellState) {
        assert!(
            x < self.side && y < self.side,
            "cell ({}, {}) out of range for side {}",
            x,
            y,
            self.side
        );
        self.cells[y * self.side + x] = value;
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }
}

impl fmt::Display for Grid {
    /// Renders the grid row-major, one row per line, cells as
    /// space-separated single-character codes (`r`, `g`, `b`, `_`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.side {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.side {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(x, y).to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_all_empty() {
        let grid = Grid::new(5).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(grid.get(x, y), CellState::Empty);
            }
        }
        assert_eq!(grid.side(), 5);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_new_grid_zero_side_rejected() {
        assert_eq!(Grid::new(0), Err(EngineError::InvalidGridSize(0)));
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(2, 1, CellState::Green);
        assert_eq!(grid.get(2, 1), CellState::Green);
        assert_eq!(grid.get(1, 2), CellState::Empty);
        grid.set(2, 1, CellState::Empty);
        assert_eq!(grid.get(2, 1), CellState::Empty);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let grid = Grid::new(3).unwrap();
        let _ = grid.get(3, 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Grid::new(4).unwrap();
        original.set(0, 0, CellState::Red);
        let mut copy = original.clone();
        copy.set(0, 0, CellState::Blue);
        copy.set(3, 3, CellState::Green);
        assert_eq!(original.get(0, 0), CellState::Red);
        assert_eq!(original.get(3, 3), CellState::Empty);
    }

    #[test]
    fn test_display_format() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(0, 0, CellState::Red);
        grid.set(1, 0, CellState::Green);
        grid.set(2, 2, CellState::Blue);
        let rendered = format!("{}", grid);
        assert_eq!(rendered, "r g _\n_ _ _\n_ _ b");
    }

    #[test]
    fn test_random_with_seed_determinism() {
        let a = Grid::random_with_seed(6, 42).unwrap();
        let b = Grid::random_with_seed(6, 42).unwrap();
        assert_eq!(a, b, "grids with the same seed must be identical");

        let c = Grid::random_with_seed(6, 43).unwrap();
        assert_ne!(a, c, "grids with different seeds should differ");
    }

    #[test]
    fn test_random_with_seed_zero_side_rejected() {
        assert!(Grid::random_with_seed(0, 1).is_err());
    }

    #[test]
    fn test_colors_order_fixed() {
        assert_eq!(
            CellState::COLORS,
            [CellState::Red, CellState::Green, CellState::Blue]
        );
        assert!(CellState::COLORS.iter().all(|c| c.is_occupied()));
    }
}
