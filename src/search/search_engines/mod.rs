mod astar;
mod bfs;
mod dfs;
mod graph_search;
mod search_engine;
mod ucs;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use ucs::UCS;

use crate::search::{Heuristic, SearchProblem, ZeroHeuristic};

/// Depth-first graph search. Returns some plan if one exists, with no
/// guarantee on its cost or length.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
    DFS::new().search(problem, &mut ZeroHeuristic::new()).0
}

/// Breadth-first graph search. Returns a plan with the fewest actions.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
    BFS::new().search(problem, &mut ZeroHeuristic::new()).0
}

/// Uniform-cost search. Returns a cheapest plan.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
    UCS::new().search(problem, &mut ZeroHeuristic::new()).0
}

/// A* search. Pass [`ZeroHeuristic`] to get uniform-cost behaviour.
pub fn astar_search<P, H>(problem: &P, heuristic: &mut H) -> SearchResult<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    AStar::new().search(problem, heuristic).0
}
