//! Breadth first search

use crate::search::{
    frontier::Fifo,
    search_engines::{graph_search::graph_search, SearchEngine, SearchResult},
    Heuristic, SearchProblem, SearchStatistics,
};

#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BFS {
    fn search<P, H>(
        &mut self,
        problem: &P,
        _heuristic: &mut H,
    ) -> (SearchResult<P::Action>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        graph_search(problem, Fifo::new(), |_, g_value, _| g_value)
    }
}
