use crate::search::Cost;

/// Index of a [`SearchNode`] inside its [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
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

/// A [`SearchNode`] is one frontier entry: a state together with the way it
/// was reached. Nodes are never modified once created, so the path of a node
/// (recovered by following parent links back to the root) cannot change while
/// the node waits in the frontier.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Unique identifier of the node
    node_id: NodeId,
    /// The state this node reaches
    state: S,
    /// Parent node and the action that led from it to this node. `None` only
    /// for the root node.
    parent: Option<(NodeId, A)>,
    /// Cumulative cost of the path from the root to this node
    g: Cost,
    /// Number of actions on the path from the root to this node
    depth: usize,
}

impl<S, A> SearchNode<S, A> {
    /// Create the root node of a search space, reached by the empty path.
    pub fn new_without_parent(node_id: NodeId, state: S) -> Self {
        Self {
            node_id,
            state,
            parent: None,
            g: Cost::from(0.),
            depth: 0,
        }
    }

    /// Create a node reached from `parent` by `action`.
    pub fn new_with_parent(node_id: NodeId, state: S, parent: &Self, action: A, g: Cost) -> Self {
        Self {
            node_id,
            state,
            parent: Some((parent.node_id, action)),
            g,
            depth: parent.depth + 1,
        }
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_g(&self) -> Cost {
        self.g
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent.as_ref().map(|(parent_id, _)| *parent_id)
    }

    pub fn get_action(&self) -> Option<&A> {
        self.parent.as_ref().map(|(_, action)| action)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
