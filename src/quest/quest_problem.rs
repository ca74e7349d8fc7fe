use crate::quest::{CostTable, QuestError, QuestMap, QuestState};
use crate::search::{Cost, Direction, DirectionalCosts, SearchProblem};
use serde::Deserialize;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::info;

/// The on-disk layout of a quest file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuestFile {
    map: String,
    costs: CostTable,
}

/// A quest: walk the agent around a grid, collecting every medal, where
/// each step costs whatever the [`CostTable`] charges for its direction.
#[derive(Debug, Clone)]
pub struct QuestProblem {
    map: QuestMap,
    costs: CostTable,
}

impl QuestProblem {
    pub fn new(map: QuestMap, costs: CostTable) -> Result<Self, QuestError> {
        costs.check()?;
        Ok(Self { map, costs })
    }

    /// Read a quest from the TOML text of a quest file, e.g.
    ///
    /// ```toml
    /// map = """
    /// %%%%%%
    /// %S..M%
    /// %%%%%%
    /// """
    ///
    /// [costs]
    /// N = 4
    /// S = 3
    /// E = 2
    /// W = 1
    /// ```
    pub fn from_text(text: &str) -> Result<Self, QuestError> {
        let quest_file: QuestFile = toml::from_str(text)?;
        let map = QuestMap::from_text(&quest_file.map)?;
        Self::new(map, quest_file.costs)
    }

    pub fn from_path(path: &Path) -> Result<Self, QuestError> {
        let text = std::fs::read_to_string(path).map_err(|source| QuestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let problem = Self::from_text(&text)?;
        info!(
            path = %path.display(),
            width = problem.map.width(),
            height = problem.map.height(),
            medals = problem.map.medals().len(),
            "loaded quest"
        );
        Ok(problem)
    }

    pub fn map(&self) -> &QuestMap {
        &self.map
    }

    pub fn costs(&self) -> &CostTable {
        &self.costs
    }
}

impl SearchProblem for QuestProblem {
    type State = QuestState;
    type Action = Direction;

    fn start_state(&self) -> QuestState {
        QuestState::new(self.map.start(), self.map.medals().iter().copied())
    }

    fn is_goal(&self, state: &QuestState) -> bool {
        state.medals.is_empty()
    }

    fn expand(&self, state: &QuestState) -> Vec<(QuestState, Direction, Cost)> {
        Direction::iter()
            .filter_map(|direction| {
                let next = state.agent.step(direction);
                self.map
                    .is_free(next)
                    .then(|| (state.moved_to(next), direction, self.costs.cost(direction)))
            })
            .collect()
    }
}

impl DirectionalCosts for QuestProblem {
    fn cost(&self, direction: Direction) -> Cost {
        self.costs.cost(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Position;
    use crate::test_utils::*;
    use ordered_float::OrderedFloat;
    use std::io::Write;

    #[test]
    fn loads_quest_text() {
        let problem = QuestProblem::from_text(CORRIDOR_QUEST_TEXT).unwrap();
        let start = problem.start_state();
        assert_eq!(start.agent, Position::new(1, 1));
        assert_eq!(start.medals.as_slice(), &[Position::new(6, 1)]);
        assert_eq!(problem.cost(Direction::East), OrderedFloat(2.));
        assert!(!problem.is_goal(&start));
    }

    #[test]
    fn expand_skips_walls_and_charges_direction_costs() {
        let problem = QuestProblem::from_text(CORRIDOR_QUEST_TEXT).unwrap();
        let successors = problem.expand(&problem.start_state());
        // Walls to the north, south and west of the start
        assert_eq!(successors.len(), 1);
        let (next, direction, cost) = &successors[0];
        assert_eq!(*direction, Direction::East);
        assert_eq!(*cost, OrderedFloat(2.));
        assert_eq!(next.agent, Position::new(2, 1));
    }

    #[test]
    fn expand_follows_direction_order() {
        let problem = open_field_problem(CostTable::new(4., 3., 2., 1.), (1, 1), &[(0, 0)]);
        let directions: Vec<Direction> = problem
            .expand(&problem.start_state())
            .into_iter()
            .map(|(_, direction, _)| direction)
            .collect();
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
    fn collecting_the_last_medal_reaches_the_goal() {
        let problem = open_field_problem(CostTable::uniform(1.), (0, 0), &[(1, 0)]);
        let (next, _, _) = problem
            .expand(&problem.start_state())
            .into_iter()
            .find(|(_, direction, _)| *direction == Direction::East)
            .unwrap();
        assert!(problem.is_goal(&next));
    }

    #[test]
    fn negative_costs_are_rejected() {
        let text = CORRIDOR_QUEST_TEXT.replace("W = 1", "W = -1");
        assert!(matches!(
            QuestProblem::from_text(&text),
            Err(QuestError::InvalidCost {
                direction: Direction::West,
                ..
            })
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let text = format!("{}\nteleport = true\n", CORRIDOR_QUEST_TEXT);
        assert!(matches!(
            QuestProblem::from_text(&text),
            Err(QuestError::Toml(_))
        ));
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MAZE_QUEST_TEXT.as_bytes()).unwrap();
        let problem = QuestProblem::from_path(file.path()).unwrap();
        assert_eq!(problem.map().medals().len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing.toml");
        assert!(matches!(
            QuestProblem::from_path(&path),
            Err(QuestError::Io { .. })
        ));
    }
}
