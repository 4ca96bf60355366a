//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `Frontier`: queue of URLs awaiting processing, documents first
//! - `RunState`: visited set, frontier and page counter of one run

mod frontier;
mod run_state;

// Re-export main types
pub use frontier::{Frontier, FrontierEntry};
pub use run_state::RunState;
