//! Pattern-string expansion.

use super::node::PatternNode;
use super::token::NotationToken;
use crate::error::{ClipError, Result};
use std::str::CharIndices;

/// Reject any character outside `x - _ [ ]`, reporting the first offender.
pub fn check_characters(pattern: &str) -> Result<()> {
    match pattern
        .char_indices()
        .find(|(_, c)| NotationToken::from_char(*c).is_none())
    {
        Some((pos, c)) => Err(ClipError::syntax_at(
            format!(
                "unexpected character '{}' at position {}; pattern can only comprise x - _ [ ]",
                c, pos
            ),
            pos,
        )),
        None => Ok(()),
    }
}

/// Expand a pattern string into its tree. The root is always a group whose
/// children are the top-level slots.
///
/// An empty pattern and an empty group `[]` are rejected rather than
/// expanding to nothing: a group with no children has no way to share out
/// its slot, and an empty clip is almost always a typo.
pub fn expand(pattern: &str) -> Result<PatternNode> {
    check_characters(pattern)?;
    if pattern.is_empty() {
        return Err(ClipError::syntax("pattern is empty"));
    }

    let mut chars = pattern.char_indices();
    let slots = parse_nodes(&mut chars, None)?;
    Ok(PatternNode::Group(slots))
}

/// Parse nodes until the end of input, or until the `]` matching the `[` at
/// `open` when inside a group.
fn parse_nodes(chars: &mut CharIndices, open: Option<usize>) -> Result<Vec<PatternNode>> {
    let mut nodes = Vec::new();

    while let Some((pos, c)) = chars.next() {
        let token = NotationToken::from_char(c)
            .ok_or_else(|| ClipError::syntax_at(format!("unexpected character '{}'", c), pos))?;
        match token {
            NotationToken::NoteOn => nodes.push(PatternNode::Note),
            NotationToken::RestSilent => nodes.push(PatternNode::Rest),
            NotationToken::RestSustain => nodes.push(PatternNode::Sustain),
            NotationToken::GroupOpen => {
                let children = parse_nodes(chars, Some(pos))?;
                if children.is_empty() {
                    return Err(ClipError::syntax_at(
                        format!("empty group at position {}", pos),
                        pos,
                    ));
                }
                nodes.push(PatternNode::Group(children));
            }
            NotationToken::GroupClose => {
                if open.is_none() {
                    return Err(ClipError::syntax_at(
                        format!("unmatched ']' at position {}", pos),
                        pos,
                    ));
                }
                return Ok(nodes);
            }
        }
    }

    match open {
        Some(pos) => Err(ClipError::syntax_at(
            format!("unclosed '[' at position {}", pos),
            pos,
        )),
        None => Ok(nodes),
    }
}
