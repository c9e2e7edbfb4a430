use std::fmt;
use std::ops::Range;

use crate::error::{Error, Result};
use crate::node::Node;
use crate::operation::Operation;

/// Longest pattern a [`Regexp`] can hold; offsets are stored as `u16`.
pub const MAX_PATTERN_LEN: usize = u16::MAX as usize;

/// Byte range `[begin, end)` of a node inside the pattern source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub begin: u16,
    pub end: u16,
}

impl Position {
    pub fn new(begin: u16, end: u16) -> Self {
        Self { begin, end }
    }

    pub fn len(self) -> usize {
        usize::from(self.end.saturating_sub(self.begin))
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Whether `other` lies entirely within `self`.
    pub fn contains(self, other: Position) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    pub fn range(self) -> Range<usize> {
        usize::from(self.begin)..usize::from(self.end)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

/// A syntax tree node.
///
/// The node owns its arguments. Their order is meaningful: branch order
/// for `Alt`, lower then upper bound for `CharRange`, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr {
    pub pos: Position,
    pub op: Operation,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn new(op: Operation, pos: Position, args: Vec<Expr>) -> Self {
        Self { pos, op, args }
    }

    /// Node without arguments, e.g. `Char` or `Dot`.
    pub fn leaf(op: Operation, pos: Position) -> Self {
        Self::new(op, pos, Vec::new())
    }

    /// Leftmost offset.
    pub fn begin(&self) -> u16 {
        self.pos.begin
    }

    /// Rightmost offset.
    pub fn end(&self) -> u16 {
        self.pos.end
    }

    /// Last argument of the node.
    ///
    /// # Panics
    ///
    /// When the node has no arguments. Only call it on operations that
    /// always carry at least one.
    pub fn last_arg(&self) -> &Expr {
        match self.args.last() {
            Some(arg) => arg,
            None => panic!("last_arg called on {} node without arguments", self.op),
        }
    }

    /// Typed view of this node, checked against the arity contract.
    pub fn node(&self) -> Result<Node<'_>> {
        Node::try_from(self)
    }
}

/// A pattern together with its syntax tree.
///
/// Every node's position indexes into `source`, so node text is always
/// borrowed from the original pattern, never copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regexp {
    source: String,
    pub expr: Expr,
}

impl Regexp {
    pub fn new(source: impl Into<String>, expr: Expr) -> Result<Self> {
        let source = source.into();
        if source.len() > MAX_PATTERN_LEN {
            return Err(Error::PatternTooLong {
                len: source.len(),
                max: MAX_PATTERN_LEN,
            });
        }
        Ok(Self { source, expr })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source text spanned by `e`.
    ///
    /// # Panics
    ///
    /// When the span is out of bounds or splits a character. Use
    /// [`Regexp::validate`] first for trees from an untrusted producer.
    pub fn text_of(&self, e: &Expr) -> &str {
        &self.source[e.pos.range()]
    }

    /// Checks the whole tree: no sentinel tags, arity and argument roles
    /// per operation, spans inside the source and nested within their parent.
    pub fn validate(&self) -> Result<()> {
        self.validate_expr(&self.expr)
    }

    /// Same as [`Regexp::validate`] for a subtree, its own span included.
    pub fn validate_expr(&self, e: &Expr) -> Result<()> {
        self.check_span(e)?;
        e.node()?;
        for (index, arg) in e.args.iter().enumerate() {
            let expected = e.op.arg_role(index);
            if !expected.admits(arg.op) {
                return Err(Error::Role {
                    op: e.op,
                    index,
                    expected,
                    found: arg.op,
                    pos: e.pos,
                });
            }
            if !e.pos.contains(arg.pos) {
                return Err(Error::SpanNotNested {
                    parent: e.pos,
                    child: arg.pos,
                });
            }
            self.validate_expr(arg)?;
        }
        Ok(())
    }

    fn check_span(&self, e: &Expr) -> Result<()> {
        let range = e.pos.range();
        if range.start > range.end || range.end > self.source.len() {
            return Err(Error::SpanOutOfBounds {
                pos: e.pos,
                len: self.source.len(),
            });
        }
        if !self.source.is_char_boundary(range.start) || !self.source.is_char_boundary(range.end)
        {
            return Err(Error::SpanNotCharBoundary { pos: e.pos });
        }
        Ok(())
    }
}
