//! The loop shared by every search engine. Engines differ only in the frontier
//! they pass in and in how they assign a priority to a new entry.

use crate::search::{
    search_engines::SearchResult, Cost, Frontier, HeuristicValue, NodeId, SearchProblem,
    SearchSpace, SearchStatistics,
};
use tracing::{debug, info, trace};

/// Run a graph search from the problem's start state.
///
/// Goal testing happens when an entry is popped, so the empty plan is returned
/// when the start state is a goal. A state is expanded at most once: entries
/// whose state was visited by the time they are popped are skipped. Successors
/// are only filtered against the states visited at push time, so the frontier
/// may still hold several entries for the same state.
///
/// `priority_of` receives the state of a new entry and the cost of the path
/// reaching it. Frontiers that are not priority ordered ignore the result.
pub(super) fn graph_search<P, F, E>(
    problem: &P,
    mut frontier: F,
    mut priority_of: E,
) -> (SearchResult<P::Action>, SearchStatistics)
where
    P: SearchProblem,
    F: Frontier<NodeId>,
    E: FnMut(&P::State, Cost, &mut SearchStatistics) -> HeuristicValue,
{
    let mut statistics = SearchStatistics::new();
    let mut search_space = SearchSpace::new(problem.start_state());

    let root_node = search_space.get_root_node();
    let root_priority = priority_of(root_node.get_state(), root_node.get_g(), &mut statistics);
    frontier.push(root_node.get_node_id(), root_priority);
    statistics.increment_generated_nodes(1);
    statistics.register_frontier_size(frontier.len());

    while let Ok(node_id) = frontier.pop() {
        let node = search_space.get_node(node_id);
        if problem.is_goal_state(node.get_state()) {
            let plan = search_space.extract_plan(node_id);
            debug!(
                plan_length = plan.len(),
                plan_cost = node.get_g().into_inner(),
                "goal reached"
            );
            statistics.finalise_search();
            return (SearchResult::Success(plan), statistics);
        }

        let state = node.get_state().clone();
        let g_value = node.get_g();
        if !search_space.mark_visited(&state) {
            statistics.increment_duplicate_pops();
            continue;
        }
        statistics.increment_expanded_nodes();
        trace!(?state, g_value = g_value.into_inner(), "expanding");

        let successors = problem.successors(&state);
        statistics.increment_generated_successors(successors.len());
        for successor in successors {
            if search_space.is_visited(&successor.state) {
                statistics.increment_pruned_successors();
                continue;
            }
            let child_g = g_value + successor.step_cost.value();
            let priority = priority_of(&successor.state, child_g, &mut statistics);
            let child_node_id =
                search_space.insert_node(successor.state, successor.action, node_id, child_g);
            frontier.push(child_node_id, priority);
            statistics.increment_generated_nodes(1);
        }
        statistics.register_frontier_size(frontier.len());
    }

    info!(
        visited_states = search_space.num_visited(),
        "frontier exhausted without reaching a goal"
    );
    statistics.finalise_search();
    (SearchResult::NoSolution, statistics)
}
