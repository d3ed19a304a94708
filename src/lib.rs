//! # Blockgrid Solver Library
//!
//! This library models a square grid of colored blocks that a player fills
//! or empties one cell at a time, together with winning-condition rules and
//! a breadth-first search engine that reports the minimum number of
//! single-cell edits needed to make a rule hold.
//!
//! It is used by two binaries:
//! - `interactive_player`: the command shell for playing by hand (place and
//!   remove blocks, select colors and rules, evaluate the current rule).
//! - `rule_evaluator`: loads or generates a grid, then prints the minimum
//!   edit distance to a chosen rule and the witness grid.
//!
//! ## Modules
//! - `engine`: cell states and the grid (storage, accessors, rendering,
//!   seeded random generation).
//! - `rules`: the rule predicate kinds and the session `RuleSet`.
//! - `solver`: the breadth-first minimum-edit-distance search with its
//!   node arena and replay/rollback buffer discipline.
//! - `error`: the crate error taxonomy.
//! - `utils`: grid parsing from string fixtures.

pub mod engine;
pub mod error;
pub mod rules;
pub mod solver;
pub mod utils;

// Items are accessed via their module path, e.g.
// `blockgrid_solver::solver::find_min_edits`. This keeps the top-level
// library namespace clean.
