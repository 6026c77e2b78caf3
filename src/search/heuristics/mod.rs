mod heuristic;
mod zero_heuristic;

pub use heuristic::{from_fn, FnHeuristic, Heuristic, HeuristicValue};
pub use zero_heuristic::ZeroHeuristic;
