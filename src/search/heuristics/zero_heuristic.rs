use crate::search::{Cost, Heuristic, SearchProblem};

/// Estimates zero everywhere. Running A* with it is uniform cost search.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl<P: SearchProblem> Heuristic<P> for ZeroHeuristic {
    fn evaluate(&mut self, _state: &P::State, _problem: &P) -> Cost {
        (0.).into()
    }
}
