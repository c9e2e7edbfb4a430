use crate::ast::Expr;
use crate::error::Error;
use crate::operation::{Arity, Operation};

/// Typed view of an [`Expr`].
///
/// Each variant holds exactly the arguments its operation requires, so
/// code matching on it cannot index past the end of `args`. Text-like
/// variants carry the node itself; pass it to [`Regexp::text_of`] to get
/// the source text.
///
/// [`Regexp::text_of`]: crate::ast::Regexp::text_of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Concat(&'a [Expr]),
    Dot,
    Alt(&'a [Expr]),
    Star(&'a Expr),
    Plus(&'a Expr),
    Question(&'a Expr),
    NonGreedy(&'a Expr),
    Possessive(&'a Expr),
    Caret,
    Dollar,
    /// The run itself and its `Char` children.
    Literal(&'a Expr, &'a [Expr]),
    Char(&'a Expr),
    String(&'a Expr),
    Quote(&'a Expr),
    /// Any of the `Escape*` operations; the node keeps the exact kind.
    Escape(&'a Expr),
    CharClass(&'a [Expr]),
    NegCharClass(&'a [Expr]),
    CharRange { lo: &'a Expr, hi: &'a Expr },
    PosixClass(&'a Expr),
    Repeat { expr: &'a Expr, count: &'a Expr },
    Capture(&'a Expr),
    NamedCapture { expr: &'a Expr, name: &'a Expr },
    Group(&'a Expr),
    GroupWithFlags { expr: &'a Expr, flags: &'a Expr },
    FlagOnlyGroup { flags: &'a Expr },
}

impl<'a> TryFrom<&'a Expr> for Node<'a> {
    type Error = Error;

    fn try_from(e: &'a Expr) -> Result<Self, Self::Error> {
        use Operation as Op;

        let arity = e.op.arity();
        if arity == Arity::Sentinel {
            return Err(Error::SentinelNode { op: e.op, pos: e.pos });
        }
        let args = e.args.as_slice();
        let node = match (e.op, args) {
            (Op::Concat, args) => Node::Concat(args),
            (Op::Alt, args) => Node::Alt(args),
            (Op::Literal, args) => Node::Literal(e, args),
            (Op::CharClass, args) => Node::CharClass(args),
            (Op::NegCharClass, args) => Node::NegCharClass(args),

            (Op::Dot, []) => Node::Dot,
            (Op::Caret, []) => Node::Caret,
            (Op::Dollar, []) => Node::Dollar,
            (Op::Char, []) => Node::Char(e),
            (Op::String, []) => Node::String(e),
            (Op::Quote, []) => Node::Quote(e),
            (
                Op::Escape
                | Op::EscapeMeta
                | Op::EscapeOctal
                | Op::EscapeHex
                | Op::EscapeHexFull
                | Op::EscapeUni
                | Op::EscapeUniFull,
                [],
            ) => Node::Escape(e),
            (Op::PosixClass, []) => Node::PosixClass(e),

            (Op::Star, [x]) => Node::Star(x),
            (Op::Plus, [x]) => Node::Plus(x),
            (Op::Question, [x]) => Node::Question(x),
            (Op::NonGreedy, [x]) => Node::NonGreedy(x),
            (Op::Possessive, [x]) => Node::Possessive(x),
            (Op::Capture, [x]) => Node::Capture(x),
            (Op::Group, [x]) => Node::Group(x),
            (Op::FlagOnlyGroup, [flags]) => Node::FlagOnlyGroup { flags },

            (Op::CharRange, [lo, hi]) => Node::CharRange { lo, hi },
            (Op::Repeat, [expr, count]) => Node::Repeat { expr, count },
            (Op::NamedCapture, [expr, name]) => Node::NamedCapture { expr, name },
            (Op::GroupWithFlags, [expr, flags]) => Node::GroupWithFlags { expr, flags },

            (op, args) => {
                return Err(Error::Arity {
                    op,
                    expected: arity,
                    found: args.len(),
                    pos: e.pos,
                })
            }
        };
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Position;

    fn leaf(op: Operation) -> Expr {
        Expr::leaf(op, Position::new(0, 1))
    }

    fn with_args(op: Operation, n: usize) -> Expr {
        Expr::new(op, Position::new(0, 1), vec![leaf(Operation::Char); n])
    }

    #[test]
    fn every_operation_accepts_its_own_arity() {
        for op in Operation::ALL {
            let n = match op.arity() {
                Arity::Exact(n) => n,
                Arity::Variadic => 3,
                Arity::Sentinel => unreachable!(),
            };
            let e = with_args(op, n);
            assert!(e.node().is_ok(), "{op} with {n} args was rejected");
        }
    }

    #[test]
    fn every_operation_rejects_wrong_arity() {
        for op in Operation::ALL {
            if let Arity::Exact(n) = op.arity() {
                let e = with_args(op, n + 1);
                assert_eq!(
                    e.node(),
                    Err(Error::Arity {
                        op,
                        expected: Arity::Exact(n),
                        found: n + 1,
                        pos: e.pos,
                    })
                );
            }
        }
    }

    #[test]
    fn variadic_accepts_empty() {
        assert_eq!(with_args(Operation::Concat, 0).node(), Ok(Node::Concat(&[])));
        assert_eq!(with_args(Operation::Alt, 0).node(), Ok(Node::Alt(&[])));
    }

    #[test]
    fn binary_views_keep_argument_order() {
        let e = Expr::new(
            Operation::CharRange,
            Position::new(0, 3),
            vec![
                Expr::leaf(Operation::Char, Position::new(0, 1)),
                Expr::leaf(Operation::Char, Position::new(2, 3)),
            ],
        );
        match e.node() {
            Ok(Node::CharRange { lo, hi }) => {
                assert_eq!(lo.pos, Position::new(0, 1));
                assert_eq!(hi.pos, Position::new(2, 3));
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn sentinels_have_no_view() {
        for op in [Operation::None, Operation::None2] {
            assert!(matches!(leaf(op).node(), Err(Error::SentinelNode { .. })));
        }
    }
}
