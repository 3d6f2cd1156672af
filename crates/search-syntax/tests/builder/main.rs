//! Tree builder tests
//!
//! These tests verify that filter text is built into the expected term tree.

mod trees;
