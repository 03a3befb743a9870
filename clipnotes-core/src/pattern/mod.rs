//! Pattern notation for clip rhythms
//!
//! A pattern like `"x[x[xx]x]x"` is a row of slots: `x` plays a note, `-` and
//! `_` rest, and brackets split one slot into equal parts.

mod node;
mod parser;
mod token;


pub use node::PatternNode;
pub use parser::{check_characters, expand};
pub use token::NotationToken;
