//! A grid quest: the agent walks North, South, East or West between open
//! cells and has to collect every medal on the map. Each direction has its
//! own step cost.

mod cost_table;
mod quest_error;
mod quest_map;
mod quest_problem;
mod quest_state;

pub use cost_table::CostTable;
pub use quest_error::QuestError;
pub use quest_map::QuestMap;
pub use quest_problem::QuestProblem;
pub use quest_state::QuestState;
