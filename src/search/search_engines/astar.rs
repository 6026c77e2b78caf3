//! A* search

use crate::search::{
    frontier::PriorityFrontier,
    search_engines::{graph_search::graph_search, SearchEngine, SearchResult},
    Heuristic, SearchProblem, SearchStatistics,
};

/// Expands entries in order of path cost plus heuristic estimate. With the
/// zero heuristic this expands exactly what uniform-cost search expands.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for AStar {
    fn search<P, H>(
        &mut self,
        problem: &P,
        heuristic: &mut H,
    ) -> (SearchResult<P::Action>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        graph_search(
            problem,
            PriorityFrontier::new(),
            |state, g_value, statistics| {
                let h_value = heuristic.evaluate(state, problem);
                statistics.register_heuristic_value(h_value);
                g_value + h_value
            },
        )
    }
}
