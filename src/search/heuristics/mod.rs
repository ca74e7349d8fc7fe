mod directional;
mod heuristic;
mod single_target;
mod worst_case;
mod zero_heuristic;

pub use directional::{
    cheapest_target_cost, costliest_target, directional_cost, DirectionalHeuristic, TargetChoice,
};
pub use heuristic::{Heuristic, HeuristicName};
pub use single_target::SingleTargetHeuristic;
pub use worst_case::WorstCaseHeuristic;
pub use zero_heuristic::ZeroHeuristic;
