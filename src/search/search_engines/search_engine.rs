use crate::search::{Heuristic, Plan, SearchProblem, SearchStatistics};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search was successful
    Success(Plan<A>),
    /// The frontier was exhausted without reaching a goal
    NoSolution,
}

impl<A> SearchResult<A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn plan(&self) -> Option<&Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::NoSolution => None,
        }
    }

    pub fn into_plan(self) -> Option<Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::NoSolution => None,
        }
    }
}

pub trait SearchEngine {
    /// Run the search to completion. Running out of states to expand is an
    /// ordinary outcome reported as [`SearchResult::NoSolution`].
    fn search<P, H>(
        &mut self,
        problem: &P,
        heuristic: &mut H,
    ) -> (SearchResult<P::Action>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized;
}
