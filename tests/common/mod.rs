//! Common test utilities for ptt-dl end-to-end tests

#[allow(dead_code)]
pub mod fixtures;

pub use fixtures::*;
