//! Breadth-first minimum-edit-distance search.
//!
//! Given a grid and a rule, `find_min_edits` reports the smallest number of
//! single-cell edits (place a color, or remove a block) that turn the grid
//! into one the rule accepts.
//!
//! The search stores one `SearchNode` per candidate edit, never a grid
//! snapshot: a node records its edit and a back-reference to the edit before
//! it on the same path. A single live buffer is re-edited for every dequeued
//! node by replaying its parent chain and rolled back afterwards, so memory
//! grows with the number of explored nodes rather than nodes times grid
//! size, at the cost of O(depth) work per node. All nodes of a run live in
//! one arena that is dropped when the run ends, which keeps parent
//! back-references valid for the whole search.

use crate::engine::{CellState, Grid};
use crate::error::{EngineError, Result};
use crate::rules::Rule;
use std::collections::VecDeque;

/// Hard cap on the length of a root-to-node path. Replay reconstructs paths
/// through a fixed-capacity scratch buffer of this many slots; a longer path
/// aborts the run with `EngineError::DepthExceeded` instead of truncating.
pub const MAX_SEARCH_DEPTH: usize = 1024;

/// The two single-cell edit operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    /// Put a block of some color into an empty cell.
    Place,
    /// Take the block out of an occupied cell.
    Remove,
}

/// One single-cell edit, as reported in a winning path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edit {
    pub x: usize,
    pub y: usize,
    pub kind: EditKind,
    /// The color placed, or the occupant that was removed.
    pub color: CellState,
}

impl Edit {
    /// Applies this edit to a grid: a place sets the cell to the color, a
    /// remove empties it.
    pub fn apply(&self, grid: &mut Grid) {
        match self.kind {
            EditKind::Place => grid.set(self.x, self.y, self.color),
            EditKind::Remove => grid.set(self.x, self.y, CellState::Empty),
        }
    }
}

/// A winning edit sequence.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Number of edits on the path; a root-level edit counts as 1.
    pub distance: u32,
    /// The edits in root-to-leaf order. Applying them to a clone of the
    /// searched grid produces a state the rule accepts.
    pub edits: Vec<Edit>,
}

/// Outcome of one search run.
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    /// A rule-satisfying state exists; the minimal path to it.
    Satisfied(Solution),
    /// No reachable state satisfies the rule.
    Unreachable,
}

/// One node of the search tree. Stores only the edit that produced the state
/// and the arena index of its parent; the grid state itself is reconstructed
/// on demand. Fields are compact (`u16` coordinates, `u32` parent index)
/// since a run can hold tens of millions of nodes.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    kind: EditKind,
    color: CellState,
    x: u16,
    y: u16,
    parent: Option<u32>,
}

impl SearchNode {
    fn apply(&self, grid: &mut Grid) {
        match self.kind {
            EditKind::Place => grid.set(self.x as usize, self.y as usize, self.color),
            EditKind::Remove => grid.set(self.x as usize, self.y as usize, CellState::Empty),
        }
    }

    /// Inverse of `apply`: a placed block is lifted back out, a removed
    /// occupant is put back.
    fn revert(&self, grid: &mut Grid) {
        match self.kind {
            EditKind::Place => grid.set(self.x as usize, self.y as usize, CellState::Empty),
            EditKind::Remove => grid.set(self.x as usize, self.y as usize, self.color),
        }
    }

    fn to_edit(&self) -> Edit {
        Edit {
            x: self.x as usize,
            y: self.y as usize,
            kind: self.kind,
            color: self.color,
        }
    }
}

/// Finds the minimum number of single-cell edits turning `initial_grid` into
/// a state that satisfies `rule`.
///
/// The caller's grid is never mutated; the search works on a clone. The
/// frontier is a FIFO queue, so nodes are processed strictly in
/// depth order and the first satisfying state found is a minimal one.
///
/// # Errors
/// Returns `EngineError::DepthExceeded` if a path outgrows
/// [`MAX_SEARCH_DEPTH`]; the run is aborted rather than truncated.
///
/// # Examples
/// ```
/// use blockgrid_solver::engine::Grid;
/// use blockgrid_solver::rules::Rule;
/// use blockgrid_solver::solver::{find_min_edits, SearchOutcome};
///
/// let grid = Grid::new(2).unwrap();
/// let rule = Rule::consecutive_run(2);
/// match find_min_edits(&grid, &rule).unwrap() {
///     SearchOutcome::Satisfied(solution) => assert_eq!(solution.distance, 2),
///     SearchOutcome::Unreachable => unreachable!(),
/// }
/// ```
pub fn find_min_edits(initial_grid: &Grid, rule: &Rule) -> Result<SearchOutcome> {
    // Candidate enumeration emits at least one child per cell from every
    // state, so the frontier only runs dry when the rule rules itself out.
    // A rule no grid of this side can satisfy is unreachable up front.
    if !rule.feasible_on(initial_grid.side()) {
        return Ok(SearchOutcome::Unreachable);
    }

    // Compact node coordinates; any practical grid is far smaller.
    assert!(initial_grid.side() <= u16::MAX as usize);

    let mut buffer = initial_grid.clone();
    let mut arena: Vec<SearchNode> = Vec::new();
    let mut frontier: VecDeque<u32> = VecDeque::new();

    // Seed the frontier from the pristine buffer.
    enumerate_candidates(&buffer, None, &mut arena, &mut frontier);

    while let Some(id) = frontier.pop_front() {
        let distance = replay(&arena, id, &mut buffer)?;

        if rule.evaluate(&buffer) {
            // The stale buffer is irrelevant on the success path; the whole
            // arena is dropped on return.
            return Ok(SearchOutcome::Satisfied(Solution {
                distance,
                edits: collect_path(&arena, id),
            }));
        }

        // Children are enumerated from the edited buffer, then the buffer is
        // restored to the pristine grid before the next dequeue.
        enumerate_candidates(&buffer, Some(id), &mut arena, &mut frontier);
        rollback(&arena, id, &mut buffer);
    }

    Ok(SearchOutcome::Unreachable)
}

/// Enumerates one candidate edit per cell of `grid`: a Remove for each
/// occupied cell (recording the occupant so rollback can restore it), and a
/// Place per color for each empty cell, colors in declaration order. Cells
/// are scanned x-outer, y-inner. Each candidate joins the arena parented to
/// `parent` and is enqueued at the frontier tail.
fn enumerate_candidates(
    grid: &Grid,
    parent: Option<u32>,
    arena: &mut Vec<SearchNode>,
    frontier: &mut VecDeque<u32>,
) {
    let n = grid.side();
    for x in 0..n {
        for y in 0..n {
            let occupant = grid.get(x, y);
            if occupant.is_occupied() {
                push_candidate(
                    arena,
                    frontier,
                    SearchNode {
                        kind: EditKind::Remove,
                        color: occupant,
                        x: x as u16,
                        y: y as u16,
                        parent,
                    },
                );
            } else {
                for &color in CellState::COLORS.iter() {
                    push_candidate(
                        arena,
                        frontier,
                        SearchNode {
                            kind: EditKind::Place,
                            color,
                            x: x as u16,
                            y: y as u16,
                            parent,
                        },
                    );
                }
            }
        }
    }
}

fn push_candidate(arena: &mut Vec<SearchNode>, frontier: &mut VecDeque<u32>, node: SearchNode) {
    let id = arena.len() as u32;
    arena.push(node);
    frontier.push_back(id);
}

/// Reconstructs the root-to-`node` path and applies it, in root-first order,
/// onto the live buffer. Returns the path length, which is the node's edit
/// distance from the pristine grid (a root node counts as 1).
///
/// The path runs through a fixed scratch buffer of `MAX_SEARCH_DEPTH` slots;
/// a longer path fails with `DepthExceeded` before anything is applied, so
/// the buffer is never left half-edited.
fn replay(arena: &[SearchNode], node: u32, buffer: &mut Grid) -> Result<u32> {
    let mut path = [0u32; MAX_SEARCH_DEPTH];
    let mut len = 0usize;

    let mut cursor = Some(node);
    while let Some(id) = cursor {
        if len == MAX_SEARCH_DEPTH {
            return Err(EngineError::DepthExceeded(MAX_SEARCH_DEPTH));
        }
        path[len] = id;
        len += 1;
        cursor = arena[id as usize].parent;
    }

    for &id in path[..len].iter().rev() {
        arena[id as usize].apply(buffer);
    }
    Ok(len as u32)
}

/// Undoes every edit from `node` back up to the root, in leaf-first order,
/// restoring the buffer to the pristine initial grid.
fn rollback(arena: &[SearchNode], node: u32, buffer: &mut Grid) {
    let mut cursor = Some(node);
    while let Some(id) = cursor {
        let n = &arena[id as usize];
        n.revert(buffer);
        cursor = n.parent;
    }
}

/// The root-to-`node` edit sequence, for reporting a solution.
fn collect_path(arena: &[SearchNode], node: u32) -> Vec<Edit> {
    let mut edits = Vec::new();
    let mut cursor = Some(node);
    while let Some(id) = cursor {
        let n = &arena[id as usize];
        edits.push(n.to_edit());
        cursor = n.parent;
    }
    edits.reverse();
    edits
}
