use thiserror::Error;

/// Errors reported by the maze engine.
///
/// Failing to reach the exit is not an error, see [`crate::solvers::SolveResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze dimensions must be between 1 and 255, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("maze has {cells} cells, more than the configured maximum of {max}")]
    TooManyCells { cells: u32, max: u32 },

    #[error("no valid boundary position for an entrance or exit")]
    NoEntranceExitCandidates,

    #[error("only one boundary position is available, entrance and exit would coincide")]
    DegenerateEntranceExit,

    #[error("maze must have an entrance and an exit before it can be solved")]
    MissingEntranceOrExit,

    #[error("unknown maze generator `{0}`")]
    UnknownGenerator(String),

    #[error("unknown maze solver `{0}`")]
    UnknownSolver(String),
}
