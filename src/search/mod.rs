//! The generic informed search engine: a priority frontier, an arena of
//! search nodes, pluggable heuristics and the A* driver tying them together.

mod frontier;
mod grid;
pub mod heuristics;
mod plan;
pub mod search_engines;
mod search_node;
mod search_problem;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use frontier::{Frontier, FrontierError};
pub use grid::{AgentState, Direction, DirectionalCosts, Position};
pub use heuristics::{Heuristic, HeuristicName};
pub use plan::Plan;
pub use search_engines::{astar, AStar, SearchEngine, SearchResult};
pub use search_node::{NodeId, SearchNode};
pub use search_problem::{Cost, SearchProblem};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
