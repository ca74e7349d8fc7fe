use crate::search::{Direction, Position};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestError {
    #[error("failed to read quest file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid quest file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unexpected {found:?} in map at line {line}, column {column}")]
    Syntax {
        line: u32,
        column: usize,
        found: Option<char>,
    },
    #[error("map row at line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: u32,
        expected: usize,
        found: usize,
    },
    #[error("the map has no start position")]
    MissingStart,
    #[error("the map has a second start position at {second}, the first one is at {first}")]
    DuplicateStart { first: Position, second: Position },
    #[error("the cost of moving {direction} must be a non-negative number, got {cost}")]
    InvalidCost { direction: Direction, cost: f64 },
}
