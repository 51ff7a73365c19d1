use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("Invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Grid has no {0} cell")]
    MissingEndpoint(Endpoint),
    #[error("Grid has more than one {0} cell")]
    DuplicateEndpoint(Endpoint),
    #[error("Parent links do not lead back to the start within {limit} steps")]
    CorruptParentChain { limit: usize },
    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}
