//! Shared fixtures and reference algorithms for integration tests

#![allow(dead_code)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{austria, random_graph, upper_austria, Fixture};
pub use reference::{all_pairs_distances, is_reachable};

/// Route test output through the crate's subscriber (once per test binary)
pub fn init_logging() {
    let _ = routegraph::logging::init_tracing(Some("debug"), false);
}
