use crate::search::{Cost, NodeId, Plan, SearchNode};
use segvec::{Linear, SegVec};
use std::{collections::HashSet, hash::Hash};

/// A [`SearchSpace`] is a data structure for managing the nodes and the set of
/// visited states during a single search. Every frontier entry is a node
/// allocated here, and plans are recovered by walking parent links, so memory
/// grows with the number of generated entries rather than with the total
/// length of the paths they represent.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<S, A>, Linear>,
    visited: HashSet<S>,
}

impl<S: Clone + Eq + Hash, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new_without_parent(root_node_id, initial_state));

        Self {
            root_node_id,
            nodes,
            visited: HashSet::new(),
        }
    }

    /// Allocate a new node reached from `parent_id` via `action`. A node is
    /// created even if another node for the same state exists already.
    pub fn insert_node(&mut self, state: S, action: A, parent_id: NodeId, g: Cost) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        let node = SearchNode::new_with_parent(node_id, state, self.get_node(parent_id), action, g);
        self.nodes.push(node);
        node_id
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<S, A> {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.get_node(node_id).get_state()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Record that `state` has been expanded. Returns `false` if it had been
    /// expanded before.
    pub fn mark_visited(&mut self, state: &S) -> bool {
        if self.visited.contains(state) {
            return false;
        }
        self.visited.insert(state.clone())
    }

    pub fn is_visited(&self, state: &S) -> bool {
        self.visited.contains(state)
    }

    pub fn num_visited(&self) -> usize {
        self.visited.len()
    }

    /// The actions leading from the root to the given node, in order.
    pub fn extract_plan(&self, goal_node_id: NodeId) -> Plan<A> {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_node_id);
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
