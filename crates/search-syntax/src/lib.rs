//! Parser for search-bar filter expressions.
//!
//! Turns text such as `name:"John Wick" AND enable:true` into a tree of
//! [`ast::GroupNode`]s and [`ast::TermNode`]s.

pub mod ast;
pub mod builder;
pub mod error;
pub mod parser;

pub use builder::parse;
