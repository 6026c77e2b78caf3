//! Uniform cost search

use crate::search::{
    frontier::PriorityFrontier,
    search_engines::{graph_search::graph_search, SearchEngine, SearchResult},
    Heuristic, SearchProblem, SearchStatistics,
};

/// Expands entries in order of the cost of the path reaching them. The first
/// goal popped is reached by a cheapest path.
#[derive(Debug, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for UCS {
    fn search<P, H>(
        &mut self,
        problem: &P,
        _heuristic: &mut H,
    ) -> (SearchResult<P::Action>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        graph_search(problem, PriorityFrontier::new(), |_, g_value, _| g_value)
    }
}
