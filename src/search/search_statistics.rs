use crate::search::Cost;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i64,
    /// Number of nodes evaluated by the heuristic
    evaluated_nodes: i64,
    /// Number of nodes generated, including duplicates of known states
    generated_nodes: i64,
    /// Number of popped nodes whose state had already been expanded
    duplicate_pops: i64,
    /// The first f-value of every f-layer, in the order the layers were
    /// entered, together with the number of expansions before that layer
    f_layers: Vec<(Cost, i64)>,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
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
            evaluated_nodes: 0,
            generated_nodes: 0,
            duplicate_pops: 0,
            f_layers: vec![],
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    /// Record the key of a node taken from the frontier. A key different from
    /// the previous one starts a new f-layer.
    pub fn register_f_value(&mut self, f_value: Cost) {
        if self.f_layers.last().map(|&(f, _)| f) != Some(f_value) {
            self.f_layers.push((f_value, self.expanded_nodes));
            debug!(
                f_value = f_value.into_inner(),
                expanded_nodes = self.expanded_nodes,
                "new f-layer"
            );
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_duplicate_pops(&mut self) {
        self.duplicate_pops += 1;
        self.log_if_needed();
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn evaluated_nodes(&self) -> i64 {
        self.evaluated_nodes
    }

    pub fn generated_nodes(&self) -> i64 {
        self.generated_nodes
    }

    pub fn duplicate_pops(&self) -> i64 {
        self.duplicate_pops
    }

    pub fn f_layers(&self) -> &[(Cost, i64)] {
        &self.f_layers
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
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            duplicate_pops = self.duplicate_pops,
            f_layers = self.f_layers.len(),
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
