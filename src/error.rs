use thiserror::Error;

/// Errors surfaced by the grid, rule set, parser, and search engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A grid was requested with a side length of zero.
    #[error("invalid grid size: {0}")]
    InvalidGridSize(usize),

    /// A rule was looked up by an index past the end of the rule set.
    /// Recoverable: callers report "no such rule" and continue.
    #[error("no such rule: {0}")]
    RuleNotFound(usize),

    /// A search path grew past the replay buffer capacity. Fatal for the
    /// run: truncating the path would corrupt the replayed grid state.
    #[error("search depth exceeded: path longer than {0} edits")]
    DepthExceeded(usize),

    /// `grid_from_str_array` rejected its input.
    #[error("grid parse error: {0}")]
    GridParse(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
