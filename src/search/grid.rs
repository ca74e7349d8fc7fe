//! Grid vocabulary shared by the directional heuristics and the grid domains
//! they are evaluated on. Positions grow East along `x` and South along `y`.

use crate::search::Cost;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The position one step away in `direction`.
    pub fn step(&self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y - 1),
            Direction::East => Self::new(self.x + 1, self.y),
            Direction::South => Self::new(self.x, self.y + 1),
            Direction::West => Self::new(self.x - 1, self.y),
        }
    }

    /// Number of unit steps between the two positions, ignoring direction
    /// costs.
    pub fn manhattan_distance(&self, other: &Position) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal movement directions. Iteration order is
/// N, E, S, W.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum Direction {
    #[strum(serialize = "N")]
    #[serde(rename = "N")]
    North,
    #[strum(serialize = "E")]
    #[serde(rename = "E")]
    East,
    #[strum(serialize = "S")]
    #[serde(rename = "S")]
    South,
    #[strum(serialize = "W")]
    #[serde(rename = "W")]
    West,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label: &'static str = self.into();
        write!(f, "{}", label)
    }
}

/// Access to a per-direction movement cost table.
pub trait DirectionalCosts {
    fn cost(&self, direction: Direction) -> Cost;
}

/// States made of an agent position and an ordered collection of positions
/// the agent still has to visit.
pub trait AgentState {
    fn agent(&self) -> Position;

    fn targets(&self) -> &[Position];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn directions_iterate_clockwise_from_north() {
        let directions: Vec<Direction> = Direction::iter().collect();
        assert_eq!(
            directions,
            vec![
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West
            ]
        );
    }

    #[test]
    fn step_moves_one_cell() {
        let origin = Position::new(3, 3);
        assert_eq!(origin.step(Direction::North), Position::new(3, 2));
        assert_eq!(origin.step(Direction::East), Position::new(4, 3));
        assert_eq!(origin.step(Direction::South), Position::new(3, 4));
        assert_eq!(origin.step(Direction::West), Position::new(2, 3));
    }

    #[test]
    fn direction_labels() {
        assert_eq!(Direction::from_str("W").unwrap(), Direction::West);
        assert_eq!(Direction::South.to_string(), "S");
        assert!(Direction::from_str("Q").is_err());
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(10, 3);
        let b = Position::new(3, 1);
        assert_eq!(a.manhattan_distance(&b), 9);
        assert_eq!(b.manhattan_distance(&a), 9);
    }
}
