use thiserror::Error;

use crate::weight::WeightKind;

/// Errors raised when constructing or querying graphs.
///
/// Construction errors reject the input outright; nothing is ever silently corrected.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("adjacency matrix must be square: row {row} has {found} entries, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid weight at ({row}, {col}): weights must be non-negative and finite")]
    Weight { row: usize, col: usize },

    #[error("self-loop at vertex `{vertex}`: cycles of length 1 are not allowed")]
    SelfLoop { vertex: String },

    #[error("expected {expected} vertex names, got {found}")]
    NameCount { expected: usize, found: usize },

    #[error("vertex name `{0}` is not unique")]
    DuplicateName(String),

    #[error("malformed edge in line {line}: {reason}")]
    MalformedEdge { line: usize, reason: String },

    #[error("edge `{from}` -> `{to}` must have a strictly positive weight")]
    NonPositiveWeight { from: String, to: String },

    #[error("edge endpoint `{0}` is missing from the supplied vertex names")]
    NameMismatch(String),

    #[error("edge `{from}` -> `{to}` is given more than once")]
    DuplicateEdge { from: String, to: String },

    #[error("unknown vertex name `{0}`")]
    UnknownName(String),

    #[error("cannot compare a graph with {expected} weights to a graph with {found} weights")]
    TypeMismatch {
        expected: WeightKind,
        found: WeightKind,
    },

    #[error("graph is not a subgraph of the displayed graph")]
    NotASubgraph,

    #[error("injected engines do not operate on the same graph")]
    EngineMismatch,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
