//! Depth first search

use crate::search::{
    frontier::Lifo,
    search_engines::{graph_search::graph_search, SearchEngine, SearchResult},
    Heuristic, SearchProblem, SearchStatistics,
};

#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for DFS {
    fn search<P, H>(
        &mut self,
        problem: &P,
        _heuristic: &mut H,
    ) -> (SearchResult<P::Action>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        graph_search(problem, Lifo::new(), |_, g_value, _| g_value)
    }
}
