use crate::engine::{CellState, Grid};
use crate::error::{EngineError, Result};

/// Parses an array of string slices into a [`Grid`].
///
/// The grid's side length is the number of rows provided; each string slice
/// is one row, top to bottom. Whitespace inside a row is skipped, so the
/// output of the grid renderer parses back unchanged. Rows with fewer cells
/// than the side length are padded with `Empty`.
///
/// Valid cell characters:
/// - `r`: `CellState::Red`
/// - `g`: `CellState::Green`
/// - `b`: `CellState::Blue`
/// - `_` or `.`: `CellState::Empty`
///
/// # Errors
/// - `EngineError::InvalidGridSize` if no rows are given.
/// - `EngineError::GridParse` if a row holds more cells than the side
///   length, or an unrecognized character appears.
///
/// # Examples
/// ```
/// use blockgrid_solver::engine::CellState;
/// use blockgrid_solver::utils::grid_from_str_array;
///
/// let grid = grid_from_str_array(&[
///     "r g _",
///     "_ b _",
///     "_ _ _",
/// ]).unwrap();
/// assert_eq!(grid.side(), 3);
/// assert_eq!(grid.get(0, 0), CellState::Red);
/// assert_eq!(grid.get(1, 1), CellState::Blue);
/// assert_eq!(grid.get(2, 2), CellState::Empty);
///
/// assert!(grid_from_str_array(&["r x _", "_ _ _", "_ _ _"]).is_err());
/// ```
pub fn grid_from_str_array(s: &[&str]) -> Result<Grid> {
    let side = s.len();
    let mut grid = Grid::new(side)?;

    for (y, row_str) in s.iter().enumerate() {
        let mut x = 0;
        for ch in row_str.chars() {
            if ch.is_whitespace() {
                continue;
            }
            if x >= side {
                return Err(EngineError::GridParse(format!(
                    "row {} is too long: expected at most {} cells",
                    y, side
                )));
            }
            let cell = match ch {
                'r' => CellState::Red,
                'g' => CellState::Green,
                'b' => CellState::Blue,
                '_' | '.' => CellState::Empty,
                _ => {
                    return Err(EngineError::GridParse(format!(
                        "unrecognized cell character '{}' in row {} col {}",
                        ch, y, x
                    )))
                }
            };
            grid.set(x, y, cell);
            x += 1;
        }
        // A short row leaves its remaining cells Empty.
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_grid() {
        let grid = grid_from_str_array(&["r g b", "_ _ _", "b g r"]).unwrap();
        assert_eq!(grid.side(), 3);
        assert_eq!(grid.get(0, 0), CellState::Red);
        assert_eq!(grid.get(2, 0), CellState::Blue);
        assert_eq!(grid.get(0, 1), CellState::Empty);
        assert_eq!(grid.get(2, 2), CellState::Red);
    }

    #[test]
    fn test_dot_and_underscore_both_mean_empty() {
        let grid = grid_from_str_array(&["r.", "._"]).unwrap();
        assert_eq!(grid.get(0, 0), CellState::Red);
        assert_eq!(grid.get(1, 0), CellState::Empty);
        assert_eq!(grid.get(0, 1), CellState::Empty);
        assert_eq!(grid.get(1, 1), CellState::Empty);
    }

    #[test]
    fn test_short_rows_pad_with_empty() {
        let grid = grid_from_str_array(&["r", "", "b g"]).unwrap();
        assert_eq!(grid.get(0, 0), CellState::Red);
        assert_eq!(grid.get(1, 0), CellState::Empty);
        assert_eq!(grid.get(0, 1), CellState::Empty);
        assert_eq!(grid.get(0, 2), CellState::Blue);
        assert_eq!(grid.get(1, 2), CellState::Green);
        assert_eq!(grid.get(2, 2), CellState::Empty);
    }

    #[test]
    fn test_unrecognized_character() {
        let result = grid_from_str_array(&["r x", "_ _"]);
        assert!(matches!(result, Err(EngineError::GridParse(ref msg))
            if msg.contains("unrecognized cell character 'x'")));
    }

    #[test]
    fn test_row_too_long() {
        let result = grid_from_str_array(&["r g b", "_ _"]);
        assert!(matches!(result, Err(EngineError::GridParse(ref msg))
            if msg.contains("row 0 is too long")));
    }

    #[test]
    fn test_no_rows_rejected() {
        let rows: [&str; 0] = [];
        assert_eq!(
            grid_from_str_array(&rows),
            Err(EngineError::InvalidGridSize(0))
        );
    }

    #[test]
    fn test_render_round_trip() {
        let grid = grid_from_str_array(&["r g _ _", "_ b _ _", "_ _ _ g", "b _ _ _"]).unwrap();
        let rendered = format!("{}", grid);
        let lines: Vec<&str> = rendered.lines().collect();
        let reparsed = grid_from_str_array(&lines).unwrap();
        assert_eq!(reparsed, grid);
    }
}
