use crate::ast::term::TermNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean operator combining sibling nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connective {
    #[default]
    And,
    Or,
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => write!(f, "AND"),
            Connective::Or => write!(f, "OR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Term(TermNode),
    Group(GroupNode),
}

/// An ordered boolean combination of terms and nested groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupNode {
    #[serde(default)]
    pub connective: Connective,
    pub children: Vec<Node>,
}

impl GroupNode {
    pub fn new(connective: Connective, children: Vec<Node>) -> Self {
        Self {
            connective,
            children,
        }
    }

    pub fn and(children: Vec<Node>) -> Self {
        Self::new(Connective::And, children)
    }

    pub fn or(children: Vec<Node>) -> Self {
        Self::new(Connective::Or, children)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of term leaves in this group and every nested group.
    pub fn term_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Node::Term(_) => 1,
                Node::Group(group) => group.term_count(),
            })
            .sum()
    }
}

impl From<TermNode> for Node {
    fn from(term: TermNode) -> Self {
        Node::Term(term)
    }
}

impl From<GroupNode> for Node {
    fn from(group: GroupNode) -> Self {
        Node::Group(group)
    }
}

impl fmt::Display for GroupNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.connective)?;
            }
            match child {
                Node::Term(term) => write!(f, "{term}")?,
                Node::Group(group) => write!(f, "({group})")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::literal::Literal;

    #[test]
    fn test_group_display_and_count() {
        let tree = GroupNode::or(vec![
            GroupNode::and(vec![
                TermNode::eq("a", Literal::Integer(1)).into(),
                TermNode::eq("b", Literal::Integer(2)).into(),
            ])
            .into(),
            TermNode::eq("c", Literal::Null).into(),
        ]);

        assert_eq!(tree.to_string(), "(a:1 AND b:2) OR c:null");
        assert_eq!(tree.term_count(), 3);
    }
}
