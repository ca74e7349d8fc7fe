use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::hash::Hash;

/// Numeric type shared by action costs, path costs, priority keys and
/// heuristic estimates. It is totally ordered so it can be used as a key in
/// the frontier.
pub type Cost = OrderedFloat<f64>;

/// A [`SearchProblem`] describes a state space to the search engines. The
/// engines only ever compare and hash states, all structural knowledge lives
/// in the problem and in the heuristics.
///
/// Action costs returned by [`SearchProblem::expand`] are expected to be
/// non-negative. This is not checked, a problem violating it silently loses
/// the optimality guarantee of A*.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Generate the successors of `state` as `(successor, action, cost)`
    /// triples. The order of the triples determines the order in which
    /// equally ranked children are later expanded.
    fn expand(&self, state: &Self::State) -> Vec<(Self::State, Self::Action, Cost)>;
}
