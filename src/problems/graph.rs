//! An explicit directed graph with weighted edges. States are node names and
//! actions are edges. Graphs are written in TOML:
//!
//! ```toml
//! start = "S"
//! goals = ["G"]
//!
//! [[edges]]
//! from = "S"
//! to = "G"
//! cost = 2.5
//!
//! # optional per-node estimates for the table heuristic
//! [heuristic]
//! S = 2.0
//! ```

use crate::search::{
    Cost, CostError, Heuristic, HeuristicValue, SearchProblem, StepCost, Successor, ZeroHeuristic,
};
use ordered_float::{Float, OrderedFloat};
use serde::Deserialize;
use std::{
    collections::{HashMap, HashSet},
    fmt::{self, Display},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to read graph file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse graph: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid cost on edge {from} -> {to}: {source}")]
    InvalidCost {
        from: String,
        to: String,
        source: CostError,
    },
    #[error("edge {from} -> {to} is defined more than once")]
    DuplicateEdge { from: String, to: String },
    #[error("invalid heuristic estimate {estimate} for node {node}")]
    InvalidEstimate { node: String, estimate: f64 },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphDefinition {
    start: String,
    #[serde(default)]
    goals: Vec<String>,
    #[serde(default)]
    edges: Vec<EdgeDefinition>,
    #[serde(default)]
    heuristic: HashMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeDefinition {
    from: String,
    to: String,
    #[serde(default = "default_edge_cost")]
    cost: f64,
}

fn default_edge_cost() -> f64 {
    1.
}

/// Taking the edge from one node to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[derive(Debug, Clone)]
pub struct GraphProblem {
    start: String,
    goals: HashSet<String>,
    /// Outgoing edges of each node, in the order they appear in the file
    adjacency: HashMap<String, Vec<(String, StepCost)>>,
    estimates: HashMap<String, HeuristicValue>,
}

impl GraphProblem {
    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let contents = std::fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, GraphError> {
        let definition: GraphDefinition = toml::from_str(text)?;

        let mut adjacency: HashMap<String, Vec<(String, StepCost)>> = HashMap::new();
        for edge in definition.edges {
            let step_cost =
                StepCost::try_new(edge.cost).map_err(|source| GraphError::InvalidCost {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    source,
                })?;
            let outgoing = adjacency.entry(edge.from.clone()).or_default();
            if outgoing.iter().any(|(to, _)| *to == edge.to) {
                return Err(GraphError::DuplicateEdge {
                    from: edge.from,
                    to: edge.to,
                });
            }
            outgoing.push((edge.to, step_cost));
        }

        let mut estimates = HashMap::new();
        for (node, estimate) in definition.heuristic {
            if !estimate.is_finite() || estimate < 0. {
                return Err(GraphError::InvalidEstimate { node, estimate });
            }
            estimates.insert(node, OrderedFloat(estimate));
        }

        debug!(
            start = %definition.start,
            num_goals = definition.goals.len(),
            num_nodes_with_edges = adjacency.len(),
            "loaded graph"
        );

        Ok(Self {
            start: definition.start,
            goals: definition.goals.into_iter().collect(),
            adjacency,
            estimates,
        })
    }

    /// Shorthand for building the action that takes the edge `from -> to`.
    pub fn edge(&self, from: &str, to: &str) -> Edge {
        Edge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn step_cost(&self, from: &str, to: &str) -> Option<StepCost> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, step_cost)| *step_cost)
    }
}

impl SearchProblem for GraphProblem {
    type State = String;
    type Action = Edge;

    fn start_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal_state(&self, state: &String) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &String) -> Vec<Successor<String, Edge>> {
        self.adjacency
            .get(state)
            .map(|outgoing| {
                outgoing
                    .iter()
                    .map(|(to, step_cost)| {
                        Successor::new(to.clone(), self.edge(state, to), *step_cost)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Infinite if the edges do not form a walk from the start node.
    fn cost_of_actions(&self, actions: &[Edge]) -> Cost {
        let mut current = self.start.as_str();
        let mut total = Cost::from(0.);
        for edge in actions {
            if edge.from != current {
                return Cost::infinity();
            }
            match self.step_cost(&edge.from, &edge.to) {
                Some(step_cost) => total += step_cost.value(),
                None => return Cost::infinity(),
            }
            current = edge.to.as_str();
        }
        total
    }
}

/// Looks up the estimates given in the `[heuristic]` table of the graph file.
/// Nodes without an estimate get 0.
#[derive(Debug, Clone)]
pub struct TableHeuristic {
    estimates: HashMap<String, HeuristicValue>,
}

impl TableHeuristic {
    pub fn new(problem: &GraphProblem) -> Self {
        Self {
            estimates: problem.estimates.clone(),
        }
    }
}

impl Heuristic<GraphProblem> for TableHeuristic {
    fn evaluate(&mut self, state: &String, _problem: &GraphProblem) -> HeuristicValue {
        self.estimates
            .get(state)
            .copied()
            .unwrap_or(OrderedFloat(0.))
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum GraphHeuristicName {
    #[clap(help = "The zero heuristic.")]
    Zero,
    #[clap(help = "Per-node estimates from the [heuristic] table of the graph file.")]
    Table,
}

impl GraphHeuristicName {
    pub fn create(&self, problem: &GraphProblem) -> Box<dyn Heuristic<GraphProblem>> {
        match self {
            GraphHeuristicName::Zero => Box::new(ZeroHeuristic::new()),
            GraphHeuristicName::Table => Box::new(TableHeuristic::new(problem)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        search::{
            astar_search, breadth_first_search, depth_first_search, uniform_cost_search,
            SearchResult,
        },
        test_utils::*,
    };
    use std::io::Write;

    #[test]
    fn successors_in_file_order() {
        let problem = GraphProblem::from_text(DIAMOND_GRAPH_TEXT).unwrap();
        let successors = problem.successors(&"S".to_string());
        let targets: Vec<&str> = successors.iter().map(|s| s.state.as_str()).collect();
        assert_eq!(targets, vec!["A", "B"]);
        assert_eq!(successors[1].step_cost, StepCost::from(5));
        assert!(problem.successors(&"G".to_string()).is_empty());
    }

    #[test]
    fn cost_of_actions_sums_edges() {
        let problem = GraphProblem::from_text(DIAMOND_GRAPH_TEXT).unwrap();
        let actions = [problem.edge("S", "A"), problem.edge("A", "G")];
        assert_eq!(problem.cost_of_actions(&actions), Cost::from(2.));
        assert_eq!(problem.cost_of_actions(&[]), Cost::from(0.));
    }

    #[test]
    fn cost_of_broken_walk_is_infinite() {
        let problem = GraphProblem::from_text(DIAMOND_GRAPH_TEXT).unwrap();
        let disconnected = [problem.edge("S", "A"), problem.edge("B", "G")];
        assert!(problem.cost_of_actions(&disconnected).is_infinite());
        let missing = [problem.edge("S", "G")];
        assert!(problem.cost_of_actions(&missing).is_infinite());
    }

    #[test]
    fn rejects_negative_cost() {
        let text = r#"
        start = "S"
        goals = ["G"]
        [[edges]]
        from = "S"
        to = "G"
        cost = -1.0
        "#;
        assert!(matches!(
            GraphProblem::from_text(text),
            Err(GraphError::InvalidCost {
                source: CostError::Negative(_),
                ..
            })
        ));
    }

    #[test]
    fn rejects_duplicate_edge() {
        let text = r#"
        start = "S"
        goals = ["G"]
        [[edges]]
        from = "S"
        to = "G"
        [[edges]]
        from = "S"
        to = "G"
        cost = 3.0
        "#;
        assert!(matches!(
            GraphProblem::from_text(text),
            Err(GraphError::DuplicateEdge { .. })
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            GraphProblem::from_text("start = "),
            Err(GraphError::Parse(_))
        ));
        assert!(matches!(
            GraphProblem::from_text("goals = [\"G\"]"),
            Err(GraphError::Parse(_))
        ));
    }

    #[test]
    fn rejects_negative_estimate() {
        let text = r#"
        start = "S"
        [heuristic]
        S = -2.0
        "#;
        assert!(matches!(
            GraphProblem::from_text(text),
            Err(GraphError::InvalidEstimate { .. })
        ));
    }

    #[test]
    fn edge_cost_defaults_to_one() {
        let text = r#"
        start = "S"
        goals = ["G"]
        [[edges]]
        from = "S"
        to = "G"
        "#;
        let problem = GraphProblem::from_text(text).unwrap();
        assert_eq!(
            problem.cost_of_actions(&[problem.edge("S", "G")]),
            Cost::from(1.)
        );
    }

    #[test]
    fn table_heuristic_defaults_to_zero() {
        let problem = GraphProblem::from_text(CHAIN_GRAPH_TEXT).unwrap();
        let mut heuristic = TableHeuristic::new(&problem);
        assert_eq!(
            heuristic.evaluate(&"A".to_string(), &problem),
            HeuristicValue::from(3.)
        );
        assert_eq!(
            heuristic.evaluate(&"nowhere".to_string(), &problem),
            HeuristicValue::from(0.)
        );
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DIAMOND_GRAPH_TEXT.as_bytes()).unwrap();
        let problem = GraphProblem::from_path(file.path()).unwrap();
        assert_eq!(problem.start_state(), "S");
        assert!(problem.is_goal_state(&"G".to_string()));
    }

    #[test]
    fn from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            GraphProblem::from_path(&path),
            Err(GraphError::Io { .. })
        ));
    }

    #[test]
    fn start_is_goal_gives_empty_plan() {
        let text = r#"
        start = "G"
        goals = ["G"]
        [[edges]]
        from = "G"
        to = "H"
        "#;
        let problem = GraphProblem::from_text(text).unwrap();
        let empty = SearchResult::Success(crate::search::Plan::empty());
        assert_eq!(depth_first_search(&problem), empty);
        assert_eq!(breadth_first_search(&problem), empty);
        assert_eq!(uniform_cost_search(&problem), empty);
        assert_eq!(
            astar_search(&problem, &mut TableHeuristic::new(&problem)),
            empty
        );
    }

    #[test]
    fn disconnected_goal_has_no_solution() {
        let problem = GraphProblem::from_text(DISCONNECTED_GRAPH_TEXT).unwrap();
        assert_eq!(depth_first_search(&problem), SearchResult::NoSolution);
        assert_eq!(breadth_first_search(&problem), SearchResult::NoSolution);
        assert_eq!(uniform_cost_search(&problem), SearchResult::NoSolution);
        assert_eq!(
            astar_search(&problem, &mut ZeroHeuristic::new()),
            SearchResult::NoSolution
        );
    }

    #[test]
    fn heuristic_names_create_heuristics() {
        let problem = GraphProblem::from_text(CHAIN_GRAPH_TEXT).unwrap();
        let state = "S".to_string();
        let mut zero = GraphHeuristicName::Zero.create(&problem);
        let mut table = GraphHeuristicName::Table.create(&problem);
        assert_eq!(zero.evaluate(&state, &problem), HeuristicValue::from(0.));
        assert_eq!(table.evaluate(&state, &problem), HeuristicValue::from(4.));
    }
}
