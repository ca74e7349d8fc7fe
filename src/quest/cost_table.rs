use crate::quest::QuestError;
use crate::search::{Cost, Direction, DirectionalCosts};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The cost of a single step in each direction. In quest files this is the
/// `[costs]` table with keys `N`, `S`, `E` and `W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CostTable {
    #[serde(rename = "N")]
    north: Cost,
    #[serde(rename = "S")]
    south: Cost,
    #[serde(rename = "E")]
    east: Cost,
    #[serde(rename = "W")]
    west: Cost,
}

impl CostTable {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north: OrderedFloat(north),
            south: OrderedFloat(south),
            east: OrderedFloat(east),
            west: OrderedFloat(west),
        }
    }

    /// Every direction costs the same.
    pub fn uniform(cost: f64) -> Self {
        Self::new(cost, cost, cost, cost)
    }

    /// Reject negative and NaN step costs, A* relies on path costs never
    /// decreasing.
    pub fn check(&self) -> Result<(), QuestError> {
        for direction in Direction::iter() {
            let cost = self.cost(direction).into_inner();
            if cost.is_nan() || cost < 0. {
                return Err(QuestError::InvalidCost { direction, cost });
            }
        }
        Ok(())
    }
}

impl DirectionalCosts for CostTable {
    fn cost(&self, direction: Direction) -> Cost {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }
}
