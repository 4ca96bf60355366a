use crate::state::frontier::{Frontier, FrontierEntry};
use std::collections::HashSet;

/// Mutable state of one crawl run
///
/// Owned by a single crawler and dropped with it; nothing here outlives the
/// run or is shared between runs.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    /// Normalized URLs already processed; only ever grows
    visited: HashSet<String>,

    /// URLs waiting to be processed
    frontier: Frontier,

    /// Number of URLs processed so far
    pages_processed: usize,
}

impl RunState {
    /// Creates the initial state with the seed queued at depth 0
    pub fn seeded(seed_url: &str) -> Self {
        let mut frontier = Frontier::new();
        frontier.push_back(FrontierEntry::new(seed_url, 0));
        Self {
            frontier,
            ..Self::default()
        }
    }

    /// Marks a URL visited and counts it as processed
    ///
    /// Returns false, changing nothing, if the URL was already visited.
    pub fn begin_page(&mut self, url: &str) -> bool {
        if !self.visited.insert(url.to_string()) {
            return false;
        }
        self.pages_processed += 1;
        true
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn pages_processed(&self) -> usize {
        self.pages_processed
    }

    /// Visited URLs plus queued entries, the figure the enqueue cap applies to
    pub fn known_count(&self) -> usize {
        self.visited.len() + self.frontier.len()
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn frontier_mut(&mut self) -> &mut Frontier {
        &mut self.frontier
    }
}
