use crate::search::heuristics::{
    DirectionalHeuristic, SingleTargetHeuristic, TargetChoice, WorstCaseHeuristic, ZeroHeuristic,
};
use crate::search::{AgentState, Cost, DirectionalCosts, SearchProblem};

/// A [`Heuristic`] estimates the cost of reaching a goal from a state. For
/// A* to return optimal plans the estimate must never exceed the true
/// remaining cost, and it must be zero for goal states.
///
/// Any `FnMut(&State, &Problem) -> Cost` is a heuristic, so plain functions
/// and closures can be passed wherever a heuristic is expected.
pub trait Heuristic<P: SearchProblem> {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> Cost;

    /// Evaluate a batch of states with respect to the given problem. The
    /// default implementation simply calls `evaluate` for each state
    /// sequentially.
    fn evaluate_batch(&mut self, states: &[P::State], problem: &P) -> Vec<Cost> {
        states
            .iter()
            .map(|state| self.evaluate(state, problem))
            .collect()
    }
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: FnMut(&P::State, &P) -> Cost,
{
    fn evaluate(&mut self, state: &P::State, problem: &P) -> Cost {
        self(state, problem)
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(name = "zero", help = "The zero heuristic, turns A* into uniform cost search.")]
    Zero,
    #[clap(
        name = "single",
        help = "Manhattan distance to the first remaining target. Ignores \
        direction costs, only admissible when every step costs at least one."
    )]
    SingleTarget,
    #[clap(
        help = "Direction-aware cost of reaching the nearest remaining target."
    )]
    Directional,
    #[clap(
        help = "Direction-aware cost of reaching the most expensive remaining \
        target."
    )]
    WorstCase,
}

impl HeuristicName {
    pub fn create<P>(&self) -> Box<dyn Heuristic<P>>
    where
        P: SearchProblem + DirectionalCosts,
        P::State: AgentState,
    {
        match self {
            HeuristicName::Zero => Box::new(ZeroHeuristic::new()),
            HeuristicName::SingleTarget => Box::new(SingleTargetHeuristic::new()),
            HeuristicName::Directional => {
                Box::new(DirectionalHeuristic::new(TargetChoice::Nearest))
            }
            HeuristicName::WorstCase => Box::new(WorstCaseHeuristic::new()),
        }
    }
}
