//! PatternNode - the expanded tree of a pattern string.

use std::fmt;

/// A slot in an expanded pattern.
///
/// A group splits whatever duration it is given evenly between its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternNode {
    /// `x`
    Note,
    /// `-`
    Rest,
    /// `_`
    Sustain,
    /// `[...]`, and the top level of a pattern
    Group(Vec<PatternNode>),
}

impl PatternNode {
    /// Children of a group; empty for leaves
    pub fn children(&self) -> &[PatternNode] {
        match self {
            PatternNode::Group(children) => children.as_slice(),
            _ => &[],
        }
    }

    /// Number of `x` leaves anywhere below this node
    pub fn on_count(&self) -> usize {
        match self {
            PatternNode::Note => 1,
            PatternNode::Rest | PatternNode::Sustain => 0,
            PatternNode::Group(children) => children.iter().map(|c| c.on_count()).sum(),
        }
    }

    /// Number of leaves (events the node will emit)
    pub fn leaf_count(&self) -> usize {
        match self {
            PatternNode::Group(children) => children.iter().map(|c| c.leaf_count()).sum(),
            _ => 1,
        }
    }

    fn write_children(children: &[PatternNode], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in children {
            write!(f, "{}", child)?;
        }
        Ok(())
    }

    /// Render a root node without the outer brackets
    pub fn to_pattern_string(&self) -> String {
        match self {
            PatternNode::Group(children) => children.iter().map(|c| c.to_string()).collect(),
            leaf => leaf.to_string(),
        }
    }
}

impl fmt::Display for PatternNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternNode::Note => write!(f, "x"),
            PatternNode::Rest => write!(f, "-"),
            PatternNode::Sustain => write!(f, "_"),
            PatternNode::Group(children) => {
                write!(f, "[")?;
                Self::write_children(children, f)?;
                write!(f, "]")
            }
        }
    }
}
