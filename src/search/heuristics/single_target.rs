use crate::search::{AgentState, Cost, Heuristic, SearchProblem};

/// Manhattan distance from the agent to the first remaining target. Direction
/// costs are ignored, so the estimate is only admissible when no step costs
/// less than one.
#[derive(Clone, Debug, Default)]
pub struct SingleTargetHeuristic {}

impl SingleTargetHeuristic {
    pub fn new() -> Self {
        SingleTargetHeuristic {}
    }
}

impl<P> Heuristic<P> for SingleTargetHeuristic
where
    P: SearchProblem,
    P::State: AgentState,
{
    fn evaluate(&mut self, state: &P::State, problem: &P) -> Cost {
        if problem.is_goal(state) {
            return (0.).into();
        }

        let agent = state.agent();
        match state.targets().first() {
            Some(target) => (agent.manhattan_distance(target) as f64).into(),
            None => (0.).into(),
        }
    }
}
