//! Direction-aware cost estimates for grid problems where moving in each of
//! the four directions has its own cost.

use crate::search::{
    AgentState, Cost, Direction, DirectionalCosts, Heuristic, Position, SearchProblem,
};
use ordered_float::OrderedFloat;

/// Cost of walking from `from` to `to` without detours. Exactly one
/// horizontal and one vertical direction is used, East when `to.x >= from.x`
/// and South when `to.y >= from.y`. With no obstacles in the way this is the
/// optimal cost of reaching `to`.
pub fn directional_cost<C>(from: Position, to: Position, costs: &C) -> Cost
where
    C: DirectionalCosts + ?Sized,
{
    let horizontal = if to.x >= from.x {
        Direction::East
    } else {
        Direction::West
    };
    let vertical = if to.y >= from.y {
        Direction::South
    } else {
        Direction::North
    };
    let width = (to.x - from.x).abs() as f64;
    let height = (to.y - from.y).abs() as f64;
    OrderedFloat(
        costs.cost(horizontal).into_inner() * width + costs.cost(vertical).into_inner() * height,
    )
}

/// The smallest [`directional_cost`] from `agent` over all `targets`, or
/// `None` when there are no targets.
pub fn cheapest_target_cost<C>(agent: Position, targets: &[Position], costs: &C) -> Option<Cost>
where
    C: DirectionalCosts + ?Sized,
{
    targets
        .iter()
        .map(|&target| directional_cost(agent, target, costs))
        .min()
}

/// The target that is most expensive to reach from `agent`, or `None` when
/// there are no targets. The earliest such target wins ties.
pub fn costliest_target<C>(agent: Position, targets: &[Position], costs: &C) -> Option<Position>
where
    C: DirectionalCosts + ?Sized,
{
    // `max_by_key` keeps the last maximum, so scan backwards
    targets
        .iter()
        .rev()
        .max_by_key(|&&target| directional_cost(agent, target, costs))
        .copied()
}

/// Which remaining target [`DirectionalHeuristic`] estimates the cost to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetChoice {
    /// The first target in the state's ordered collection
    First,
    /// The target that is cheapest to reach
    #[default]
    Nearest,
}

/// Directional cost of reaching one remaining target. Every target has to be
/// visited, so the cost of reaching any single one never overestimates.
#[derive(Clone, Debug, Default)]
pub struct DirectionalHeuristic {
    choice: TargetChoice,
}

impl DirectionalHeuristic {
    pub fn new(choice: TargetChoice) -> Self {
        Self { choice }
    }
}

impl<P> Heuristic<P> for DirectionalHeuristic
where
    P: SearchProblem + DirectionalCosts,
    P::State: AgentState,
{
    fn evaluate(&mut self, state: &P::State, problem: &P) -> Cost {
        if problem.is_goal(state) {
            return (0.).into();
        }

        let agent = state.agent();
        let estimate = match self.choice {
            TargetChoice::First => state
                .targets()
                .first()
                .map(|&target| directional_cost(agent, target, problem)),
            TargetChoice::Nearest => cheapest_target_cost(agent, state.targets(), problem),
        };
        estimate.unwrap_or_else(|| (0.).into())
    }
}
