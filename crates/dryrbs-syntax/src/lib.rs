//! dryrbs-syntax - Ruby source parsing
//!
//! Parses Ruby source with tree-sitter and lowers the concrete syntax tree
//! into [`SyntaxNode`], a closed set of node variants carrying only what the
//! signature generator inspects:
//!
//! ```text
//! Ruby source
//!     ↓
//!  [tree-sitter-ruby]
//!     ↓
//!  concrete syntax tree
//!     ↓
//!  [lowering]
//!     ↓
//!  SyntaxNode (Namespace / Class / Call / Literal / Constant / Sequence / Other)
//! ```

mod node;
mod parser;

pub use node::{ConstantPath, SyntaxNode};
pub use parser::{RUBY_EXTENSION, parse_file, parse_source};
