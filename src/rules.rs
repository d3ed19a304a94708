//! Winning-condition rules and the session rule set.
//!
//! A `Rule` is a named predicate over a [`Grid`]: `evaluate` answers "does
//! this grid satisfy the winning condition". Rule kinds form a closed enum
//! dispatched by `match`; the only populated kind is the consecutive-run
//! rule. A `RuleSet` is the ordered collection a session owns, built once by
//! `bootstrap` and never mutated afterwards.

use crate::engine::Grid;
use crate::error::{EngineError, Result};

/// Kind-specific parameters of a rule.
///
/// The set of kinds is closed; adding one means adding a variant here and an
/// arm to `Rule::evaluate` and `Rule::feasible_on`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    /// Satisfied when some row or column holds an unbroken run of
    /// `run_length` occupied cells. Occupancy only: the run may mix colors.
    ConsecutiveRun { run_length: usize },
}

/// An immutable winning condition.
///
/// The `outcome` tag is an opaque integer used only when listing rules; the
/// search never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    outcome: u32,
    kind: RuleKind,
}

impl Rule {
    /// A consecutive-run rule. The outcome tag is the run length itself,
    /// matching how the rule announces itself in listings.
    pub fn consecutive_run(run_length: usize) -> Self {
        Rule {
            outcome: run_length as u32,
            kind: RuleKind::ConsecutiveRun { run_length },
        }
    }

    /// The opaque display tag for `lr`-style listings.
    pub fn outcome(&self) -> u32 {
        self.outcome
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// True iff `grid` satisfies this rule.
    pub fn evaluate(&self, grid: &Grid) -> bool {
        match self.kind {
            RuleKind::ConsecutiveRun { run_length } => has_consecutive_run(grid, run_length),
        }
    }

    /// Whether any grid of the given side can ever satisfy this rule.
    ///
    /// The search engine consults this before exploring: a rule that cannot
    /// hold on the grid's side is reported unreachable up front, since the
    /// candidate tree itself never runs dry.
    pub fn feasible_on(&self, side: usize) -> bool {
        match self.kind {
            RuleKind::ConsecutiveRun { run_length } => run_length <= side,
        }
    }
}

/// Scans every row start and every column start for an unbroken run of
/// `run_length` occupied cells, bounded so the run fits within the grid
/// (`side - start >= run_length` on the scanned axis).
fn has_consecutive_run(grid: &Grid, run_length: usize) -> bool {
    let n = grid.side();
    for y in 0..n {
        for x in 0..n {
            // row-wise, starting at (x, y)
            if n - x >= run_length && (0..run_length).all(|k| grid.get(x + k, y).is_occupied()) {
                return true;
            }
            // column-wise, starting at (x, y)
            if n - y >= run_length && (0..run_length).all(|k| grid.get(x, y + k).is_occupied()) {
                return true;
            }
        }
    }
    false
}

/// The ordered rule collection owned by a session.
///
/// Insertion order is significant: `nth` and `list` both use it. The current
/// bootstrap registers a single rule, but the set is built to hold more.
#[derive(Clone, Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// The fixed startup rule generation: one consecutive-run rule with run
    /// length 4.
    pub fn bootstrap() -> Self {
        RuleSet {
            rules: vec![Rule::consecutive_run(4)],
        }
    }

    /// Looks a rule up by index.
    ///
    /// # Errors
    /// Returns `EngineError::RuleNotFound` for an out-of-range index; the
    /// caller reports "no such rule" and continues.
    pub fn nth(&self, index: usize) -> Result<&Rule> {
        self.rules.get(index).ok_or(EngineError::RuleNotFound(index))
    }

    /// `(index, outcome_tag)` pairs in insertion order, for listings.
    pub fn list(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.rules.iter().enumerate().map(|(i, r)| (i, r.outcome()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grid_from_str_array;

    #[test]
    fn test_row_run_satisfies() {
        let grid = grid_from_str_array(&[
            "_ _ _ _ _",
            "r g b r _",
            "_ _ _ _ _",
            "_ _ _ _ _",
            "_ _ _ _ _",
        ])
        .unwrap();
        let rule = Rule::consecutive_run(4);
        assert!(rule.evaluate(&grid), "mixed-color row run of 4 must satisfy");
    }

    #[test]
    fn test_column_run_satisfies() {
        let grid = grid_from_str_array(&[
            "_ _ b _ _",
            "_ _ b _ _",
            "_ _ r _ _",
            "_ _ g _ _",
            "_ _ _ _ _",
        ])
        .unwrap();
        assert!(Rule::consecutive_run(4).evaluate(&grid));
    }

    #[test]
    fn test_broken_run_fails() {
        // Three in a row plus a gap, and three in a column: no run of 4.
        let grid = grid_from_str_array(&[
            "r r r _ r",
            "g _ _ _ _",
            "g _ _ _ _",
            "_ _ _ _ _",
            "_ _ _ _ _",
        ])
        .unwrap();
        assert!(!Rule::consecutive_run(4).evaluate(&grid));
    }

    #[test]
    fn test_run_longer_than_required() {
        let grid = grid_from_str_array(&[
            "r r r r r",
            "_ _ _ _ _",
            "_ _ _ _ _",
            "_ _ _ _ _",
            "_ _ _ _ _",
        ])
        .unwrap();
        assert!(Rule::consecutive_run(4).evaluate(&grid));
    }

    #[test]
    fn test_run_must_fit_within_grid() {
        // Two occupied at the end of a row and two at the start of the next:
        // no single axis holds 4 in a row.
        let grid = grid_from_str_array(&[
            "_ _ _ b b",
            "b b _ _ _",
            "_ _ _ _ _",
            "_ _ _ _ _",
            "_ _ _ _ _",
        ])
        .unwrap();
        assert!(!Rule::consecutive_run(4).evaluate(&grid));
    }

    #[test]
    fn test_empty_grid_fails() {
        let grid = Grid::new(5).unwrap();
        assert!(!Rule::consecutive_run(4).evaluate(&grid));
    }

    #[test]
    fn test_feasible_on() {
        let rule = Rule::consecutive_run(4);
        assert!(rule.feasible_on(4));
        assert!(rule.feasible_on(5));
        assert!(!rule.feasible_on(3));
        assert!(!rule.feasible_on(1));
    }

    #[test]
    fn test_bootstrap_lists_single_run_rule() {
        let set = RuleSet::bootstrap();
        assert_eq!(set.len(), 1);
        let listed: Vec<(usize, u32)> = set.list().collect();
        assert_eq!(listed, vec![(0, 4)]);
    }

    #[test]
    fn test_nth_out_of_range() {
        let set = RuleSet::bootstrap();
        assert!(set.nth(0).is_ok());
        assert_eq!(set.nth(5).unwrap_err(), EngineError::RuleNotFound(5));
    }

    #[test]
    fn test_bootstrap_rule_parameters() {
        let set = RuleSet::bootstrap();
        let rule = set.nth(0).unwrap();
        assert_eq!(rule.outcome(), 4);
        assert_eq!(rule.kind(), RuleKind::ConsecutiveRun { run_length: 4 });
    }
}
