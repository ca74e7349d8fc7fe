use crate::search::{Cost, NodeId, Plan, SearchNode};
use segvec::{Linear, SegVec};
use std::fmt::{self, Debug, Formatter};

/// A [`SearchSpace`] is the arena holding every node generated during a
/// search. Nodes refer to their parents by [`NodeId`], so ancestor chains
/// shared by many children are stored only once. The arena only ever grows.
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S, A> SearchSpace<S, A> {
    pub fn new() -> Self {
        Self {
            nodes: SegVec::new(),
        }
    }

    fn insert(&mut self, node: SearchNode<S, A>) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        node_id
    }

    pub fn insert_root(&mut self, state: S) -> NodeId {
        self.insert(SearchNode::new_without_parent(state))
    }

    /// Add the node reached by applying `action` to the node `parent_id` at
    /// the given action cost.
    pub fn insert_child(
        &mut self,
        parent_id: NodeId,
        state: S,
        action: A,
        action_cost: Cost,
    ) -> NodeId {
        let cumulative_cost = self.get_node(parent_id).get_cumulative_cost() + action_cost;
        self.insert(SearchNode::new_with_parent(
            state,
            parent_id,
            action,
            cumulative_cost,
        ))
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.get_node(node_id).get_state()
    }

    /// Number of actions on the path from the root to `node_id`.
    pub fn depth(&self, node_id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.get_node(node_id);
        while let Some(parent_id) = current.get_parent_id() {
            depth += 1;
            current = self.get_node(parent_id);
        }
        depth
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}

impl<S, A: Clone> SearchSpace<S, A> {
    /// The actions leading from the root to `node_id`, in execution order.
    pub fn solution(&self, node_id: NodeId) -> Plan<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(node_id);
        while let Some(parent_id) = current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                steps.push(action.clone());
            }
            current_node = self.get_node(parent_id);
        }
        steps.reverse();
        Plan::new(steps)
    }
}

impl<S, A> Default for SearchSpace<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Debug for SearchSpace<S, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSpace")
            .field("nodes", &self.nodes.len())
            .finish()
    }
}
