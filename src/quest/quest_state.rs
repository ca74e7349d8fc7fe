use crate::search::{AgentState, Position};
use smallvec::SmallVec;

/// Where the agent stands and which medals it has yet to collect, in the
/// order they appear on the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestState {
    pub agent: Position,
    pub medals: SmallVec<[Position; 4]>,
}

impl QuestState {
    pub fn new(agent: Position, medals: impl IntoIterator<Item = Position>) -> Self {
        Self {
            agent,
            medals: medals.into_iter().collect(),
        }
    }

    /// The state after the agent walks onto `position`, picking up the medal
    /// there if there is one.
    pub fn moved_to(&self, position: Position) -> Self {
        Self {
            agent: position,
            medals: self
                .medals
                .iter()
                .copied()
                .filter(|&medal| medal != position)
                .collect(),
        }
    }
}

impl AgentState for QuestState {
    fn agent(&self) -> Position {
        self.agent
    }

    fn targets(&self) -> &[Position] {
        &self.medals
    }
}
