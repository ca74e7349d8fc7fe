use crate::search::heuristics::directional_cost;
use crate::search::{AgentState, Cost, DirectionalCosts, Heuristic, SearchProblem};

/// The largest directional cost from the agent to any remaining target.
///
/// Collecting every target means reaching the most expensive one, so the
/// maximum never overestimates. Summing the per-target costs would, since a
/// single path can pass several targets on the way.
#[derive(Clone, Debug, Default)]
pub struct WorstCaseHeuristic {}

impl WorstCaseHeuristic {
    pub fn new() -> Self {
        WorstCaseHeuristic {}
    }
}

impl<P> Heuristic<P> for WorstCaseHeuristic
where
    P: SearchProblem + DirectionalCosts,
    P::State: AgentState,
{
    fn evaluate(&mut self, state: &P::State, problem: &P) -> Cost {
        if problem.is_goal(state) {
            return (0.).into();
        }

        let agent = state.agent();
        state
            .targets()
            .iter()
            .map(|&target| directional_cost(agent, target, problem))
            .max()
            .unwrap_or_else(|| (0.).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::CostTable;
    use crate::search::heuristics::{DirectionalHeuristic, TargetChoice};
    use crate::test_utils::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn takes_the_maximum_not_the_sum() {
        let problem = open_field_problem(
            CostTable::new(1., 4., 2., 3.),
            (2, 2),
            &[(3, 1), (0, 8)],
        );
        let mut heuristic = WorstCaseHeuristic::new();
        assert_eq!(
            heuristic.evaluate(&problem.start_state(), &problem),
            OrderedFloat(30.)
        );
    }

    #[test]
    fn dominates_nearest_target() {
        let problem = open_field_problem(
            CostTable::new(4., 3., 2., 1.),
            (10, 3),
            &[(3, 1), (0, 8), (13, 7), (1, 4), (10, 6), (14, 3)],
        );
        let state = problem.start_state();
        let mut worst_case = WorstCaseHeuristic::new();
        let mut nearest = DirectionalHeuristic::new(TargetChoice::Nearest);
        assert_eq!(worst_case.evaluate(&state, &problem), OrderedFloat(25.));
        assert_eq!(nearest.evaluate(&state, &problem), OrderedFloat(8.));
    }

    #[test]
    fn zero_at_goal() {
        let problem = open_field_problem(CostTable::new(4., 3., 2., 1.), (0, 0), &[]);
        let mut heuristic = WorstCaseHeuristic::new();
        assert_eq!(
            heuristic.evaluate(&problem.start_state(), &problem),
            OrderedFloat(0.)
        );
    }
}
