pub mod group;
pub mod literal;
pub mod path;
pub mod span;
pub mod term;

pub use group::{Connective, GroupNode, Node};
pub use literal::Literal;
pub use path::FieldPath;
pub use term::{Comparator, TermNode};
