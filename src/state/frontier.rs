use crate::url::is_priority_document;
use std::collections::VecDeque;

/// A URL waiting to be processed, with its link depth from the seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Normalized URL
    pub url: String,

    /// Link depth; the seed is depth 0
    pub depth: u32,
}

impl FrontierEntry {
    /// Creates an entry for `url` at `depth`
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

/// Double-ended queue of URLs awaiting processing
///
/// Documents (`.pdf`, `.docx`, `.txt`) jump to the front so they are
/// processed before further HTML traversal; everything else waits at the
/// back in discovery order.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a discovered link according to the document-priority rule
    ///
    /// Returns true if the entry went to the front.
    pub fn enqueue(&mut self, entry: FrontierEntry) -> bool {
        if is_priority_document(&entry.url) {
            self.push_front(entry);
            true
        } else {
            self.push_back(entry);
            false
        }
    }

    /// Queues an entry to be processed next
    pub fn push_front(&mut self, entry: FrontierEntry) {
        self.queue.push_front(entry);
    }

    /// Queues an entry behind everything already queued
    pub fn push_back(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
    }

    /// Removes and returns the next entry to process
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    /// Number of queued entries
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
