//! Regular expression syntax trees that keep a link to the pattern text,
//! and the canonical s-expression form used to compare and debug them.
//!
//! Trees are built by a parser outside this crate. Each [`Expr`] carries
//! an [`Operation`] tag, its byte span in the pattern, and its arguments.
//!
//! Example: pattern `a|bc` → `(or a bc)`

pub mod ast;
pub mod error;
pub mod format;
pub mod node;
pub mod operation;

pub use ast::{Expr, Position, Regexp, MAX_PATTERN_LEN};
pub use error::{Error, Result};
pub use format::{format_expr, format_syntax};
pub use node::Node;
pub use operation::{Arity, Operation, Role};
