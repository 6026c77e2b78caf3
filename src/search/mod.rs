mod frontier;
mod heuristics;
mod plan;
mod problem;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use frontier::{Fifo, Frontier, FrontierError, Lifo, PriorityFrontier};
pub use heuristics::{from_fn, FnHeuristic, Heuristic, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use problem::{Cost, CostError, SearchProblem, StepCost, Successor};
pub use search_engines::{
    astar_search, breadth_first_search, depth_first_search, uniform_cost_search, SearchEngine,
    SearchEngineName, SearchResult,
};
pub use search_node::{NodeId, SearchNode};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
