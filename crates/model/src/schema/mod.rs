//! Entity and column metadata the filter compiler resolves field names against.

pub mod catalog;
pub mod column;
pub mod definition;
pub mod entity;
