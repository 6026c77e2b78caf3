use crate::search::HeuristicValue;
use ordered_float::Float;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchStatistics {
    /// Number of nodes expanded, equal to the number of visited states
    expanded_nodes: i64,
    /// Number of nodes pushed into the frontier, including the root
    generated_nodes: i64,
    /// Number of successors returned by the problem
    generated_successors: i64,
    /// Number of successors not pushed because their state was already
    /// visited
    pruned_successors: i64,
    /// Number of popped nodes skipped because their state was already visited
    duplicate_pops: i64,
    /// Largest number of entries held by the frontier at once
    peak_frontier_size: i64,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Wall clock time of the search in seconds, set when the search finishes
    search_duration: Option<f64>,
    /// Time when the search started
    #[serde(skip)]
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    #[serde(skip)]
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            generated_successors: 0,
            pruned_successors: 0,
            duplicate_pops: 0,
            peak_frontier_size: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            search_duration: None,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            info!(best_heuristic_value = self.best_heuristic_value.into_inner());
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_generated_successors(&mut self, num_successors: usize) {
        self.generated_successors += num_successors as i64;
        self.log_if_needed();
    }

    pub fn increment_pruned_successors(&mut self) {
        self.pruned_successors += 1;
    }

    pub fn increment_duplicate_pops(&mut self) {
        self.duplicate_pops += 1;
    }

    pub fn register_frontier_size(&mut self, frontier_size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(frontier_size as i64);
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> i64 {
        self.generated_nodes
    }

    pub fn generated_successors(&self) -> i64 {
        self.generated_successors
    }

    pub fn pruned_successors(&self) -> i64 {
        self.pruned_successors
    }

    pub fn duplicate_pops(&self) -> i64 {
        self.duplicate_pops
    }

    pub fn peak_frontier_size(&self) -> i64 {
        self.peak_frontier_size
    }

    pub fn best_heuristic_value(&self) -> HeuristicValue {
        self.best_heuristic_value
    }

    pub fn search_duration(&self) -> Option<f64> {
        self.search_duration
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            generated_successors = self.generated_successors,
            pruned_successors = self.pruned_successors,
            duplicate_pops = self.duplicate_pops,
            peak_frontier_size = self.peak_frontier_size,
            best_heuristic_value = self.best_heuristic_value.into_inner(),
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        let search_duration = self.search_start_time.elapsed().as_secs_f64();
        self.search_duration = Some(search_duration);
        self.log();
        info!(search_duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut statistics = SearchStatistics::new();
        statistics.increment_expanded_nodes();
        statistics.increment_expanded_nodes();
        statistics.increment_generated_nodes(3);
        statistics.increment_generated_successors(4);
        statistics.increment_pruned_successors();
        statistics.increment_duplicate_pops();
        statistics.register_frontier_size(5);
        statistics.register_frontier_size(2);

        assert_eq!(statistics.expanded_nodes(), 2);
        assert_eq!(statistics.generated_nodes(), 3);
        assert_eq!(statistics.generated_successors(), 4);
        assert_eq!(statistics.pruned_successors(), 1);
        assert_eq!(statistics.duplicate_pops(), 1);
        assert_eq!(statistics.peak_frontier_size(), 5);
    }

    #[test]
    fn best_heuristic_value_only_decreases() {
        let mut statistics = SearchStatistics::new();
        assert!(statistics.best_heuristic_value().is_infinite());
        statistics.register_heuristic_value(3.0.into());
        statistics.register_heuristic_value(5.0.into());
        assert_eq!(statistics.best_heuristic_value(), HeuristicValue::from(3.0));
    }

    #[test]
    fn duration_set_when_finalised() {
        let mut statistics = SearchStatistics::new();
        assert_eq!(statistics.search_duration(), None);
        statistics.finalise_search();
        assert!(statistics.search_duration().unwrap() >= 0.);
    }
}
