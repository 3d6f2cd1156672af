//! Grammar tests
//!
//! These tests run the raw pest grammar without building a tree.

mod connectives;
mod terms;
