//! URL handling module
//!
//! This module provides URL normalization, origin extraction and
//! content-type classification.

mod classify;
mod domain;
mod normalize;

// Re-export main functions
pub use classify::{classify, is_priority_document, ContentType};
pub use domain::{extract_netloc, is_same_origin};
pub use normalize::normalize_url;
