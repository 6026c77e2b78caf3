use crate::search::{
    search_engines::{AStar, BFS, DFS, UCS},
    Heuristic, Plan, SearchProblem, SearchStatistics,
};
use clap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search reached a goal, the plan may be empty if the start state is
    /// a goal
    Success(Plan<A>),
    /// The frontier was exhausted without reaching a goal. All engines here
    /// are complete on finite problems, so there is no plan.
    NoSolution,
}

impl<A> SearchResult<A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn plan(&self) -> Option<&Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::NoSolution => None,
        }
    }

    pub fn into_plan(self) -> Option<Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::NoSolution => None,
        }
    }
}

pub trait SearchEngine {
    /// Search for a plan. Engines that are not informed ignore the heuristic.
    fn search<P, H>(
        &mut self,
        problem: &P,
        heuristic: &mut H,
    ) -> (SearchResult<P::Action>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Depth-first graph search, no optimality guarantee.")]
    DFS,
    #[clap(help = "Breadth-first graph search, fewest actions.")]
    BFS,
    #[clap(help = "Uniform-cost search, cheapest plan.")]
    UCS,
    #[clap(
        name = "astar",
        help = "A* search, cheapest plan if the heuristic is admissible."
    )]
    AStar,
}

impl SearchEngineName {
    pub fn search<P, H>(
        &self,
        problem: &P,
        heuristic: &mut H,
    ) -> (SearchResult<P::Action>, SearchStatistics)
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        match self {
            SearchEngineName::DFS => DFS::new().search(problem, heuristic),
            SearchEngineName::BFS => BFS::new().search(problem, heuristic),
            SearchEngineName::UCS => UCS::new().search(problem, heuristic),
            SearchEngineName::AStar => AStar::new().search(problem, heuristic),
        }
    }

    /// Whether the engine makes use of the heuristic it is given.
    pub fn is_informed(&self) -> bool {
        matches!(self, SearchEngineName::AStar)
    }
}
