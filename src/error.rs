use thiserror::Error;

use crate::board::Position;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed net: {0}")]
    MalformedNet(String),

    #[error("invalid cube: {0}")]
    InvalidCube(String),

    #[error("mismatch detected at {at:?}: {existing:?} != {derived:?}")]
    MismatchedTopology {
        at: Position,
        existing: Position,
        derived: Position,
    },

    #[error("no transition recorded for {at:?}")]
    IncompleteTopology { at: Position },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("{0:?} is not covered by the topology")]
    OffBoard(Position),
}

pub type Result<T> = std::result::Result<T, Error>;
