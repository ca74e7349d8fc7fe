use crate::search::Cost;

/// Index of a node in its [`SearchSpace`](crate::search::SearchSpace). Ids are
/// handed out in insertion order and stay valid for the lifetime of the
/// space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// A [`SearchNode`] records how a state was reached: the node it was expanded
/// from, the action taken and the total cost of the path from the root.
/// Nodes are never modified once they have been created.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode<S, A> {
    /// The state represented by this node
    state: S,
    /// Node this one was expanded from, `None` for the root
    parent_id: Option<NodeId>,
    /// Action that led from the parent to this node, `None` for the root
    action: Option<A>,
    /// Cost of the path from the root to this node
    cumulative_cost: Cost,
}

impl<S, A> SearchNode<S, A> {
    /// Create a root node. The cumulative cost of a root is zero.
    pub fn new_without_parent(state: S) -> Self {
        Self {
            state,
            parent_id: None,
            action: None,
            cumulative_cost: (0.).into(),
        }
    }

    /// Create a node reached from `parent_id` via `action`, with the given
    /// total path cost.
    pub fn new_with_parent(state: S, parent_id: NodeId, action: A, cumulative_cost: Cost) -> Self {
        Self {
            state,
            parent_id: Some(parent_id),
            action: Some(action),
            cumulative_cost,
        }
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_cumulative_cost(&self) -> Cost {
        self.cumulative_cost
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
