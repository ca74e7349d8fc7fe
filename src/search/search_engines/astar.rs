//! This module implements the A* graph search algorithm.

use crate::search::{
    search_engines::{SearchEngine, SearchResult},
    Cost, Frontier, Heuristic, NodeId, SearchProblem, SearchSpace, SearchStatistics,
};
use std::collections::HashSet;
use tracing::{info, trace};

/// A* graph search. Nodes are taken from the frontier in order of
/// `g + h`, where `g` is the cost of the path to the node and `h` the
/// heuristic estimate for its state.
///
/// A state is expanded at most once. The first time it is taken from the
/// frontier it is closed for good, even if a cheaper path to it turns up
/// later. With a consistent heuristic the first goal taken from the frontier
/// is therefore optimal. With an admissible but inconsistent heuristic the
/// returned plan may be more expensive than necessary.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for AStar {
    fn search<P, H>(
        &mut self,
        problem: &P,
        heuristic: &mut H,
    ) -> (SearchResult<P::Action>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        let mut statistics = SearchStatistics::new();
        let mut search_space: SearchSpace<P::State, P::Action> = SearchSpace::new();
        let mut frontier: Frontier<NodeId> = Frontier::new();
        let mut closed: HashSet<P::State> = HashSet::new();

        let root_id = search_space.insert_root(problem.start_state());
        frontier.push(root_id, (0.).into());

        while let Ok((node_id, f_value)) = frontier.pop_with_key() {
            statistics.register_f_value(f_value);

            let state = search_space.get_state(node_id);
            if problem.is_goal(state) {
                let plan = search_space.solution(node_id);
                info!(
                    plan_length = plan.len(),
                    plan_cost = search_space
                        .get_node(node_id)
                        .get_cumulative_cost()
                        .into_inner(),
                    "goal reached"
                );
                statistics.finalise_search();
                return (SearchResult::Success(plan), statistics);
            }

            if closed.contains(state) {
                statistics.increment_duplicate_pops();
                continue;
            }
            closed.insert(state.clone());
            statistics.increment_expanded_nodes();
            trace!(?state, f_value = f_value.into_inner(), "expanding");

            let successors = problem.expand(state);
            statistics.increment_generated_nodes(successors.len());

            let (child_states, transitions): (Vec<_>, Vec<_>) = successors
                .into_iter()
                .map(|(child_state, action, cost)| (child_state, (action, cost)))
                .unzip();
            let h_values = heuristic.evaluate_batch(&child_states, problem);

            for ((child_state, (action, action_cost)), h_value) in child_states
                .into_iter()
                .zip(transitions.into_iter())
                .zip(h_values.into_iter())
            {
                statistics.increment_evaluated_nodes();
                let child_id = search_space.insert_child(node_id, child_state, action, action_cost);
                let g_value: Cost = search_space.get_node(child_id).get_cumulative_cost();
                frontier.push(child_id, g_value + h_value);
            }
        }

        info!("frontier exhausted, no solution");
        statistics.finalise_search();
        (SearchResult::NoSolution, statistics)
    }
}

/// Run [`AStar`] on `problem` guided by `heuristic`.
pub fn astar<P, H>(problem: &P, heuristic: &mut H) -> SearchResult<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    let (result, _) = AStar::new().search(problem, heuristic);
    result
}
