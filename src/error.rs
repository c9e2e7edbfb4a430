use thiserror::Error;

use crate::ast::Position;
use crate::operation::{Arity, Operation, Role};

/// Everything that can be wrong with a syntax tree.
///
/// None of these are raised by the formatter; it degrades instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("pattern is {len} bytes long, at most {max} are supported")]
    PatternTooLong { len: usize, max: usize },

    #[error("unknown operation tag {0}")]
    UnknownOperation(u8),

    #[error("sentinel operation {op} used as a node at {pos}")]
    SentinelNode { op: Operation, pos: Position },

    #[error("{op} at {pos} expects {expected} arguments, found {found}")]
    Arity {
        op: Operation,
        expected: Arity,
        found: usize,
        pos: Position,
    },

    #[error("argument {index} of {op} at {pos} must be {expected}, found {found}")]
    Role {
        op: Operation,
        index: usize,
        expected: Role,
        found: Operation,
        pos: Position,
    },

    #[error("span {pos} is outside of the {len}-byte pattern")]
    SpanOutOfBounds { pos: Position, len: usize },

    #[error("span {pos} does not fall on a character boundary")]
    SpanNotCharBoundary { pos: Position },

    #[error("child span {child} is not inside parent span {parent}")]
    SpanNotNested { parent: Position, child: Position },
}

pub type Result<T> = std::result::Result<T, Error>;
