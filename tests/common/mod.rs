#![allow(dead_code)]

use syntax::{Expr, Operation, Position};

pub fn leaf(op: Operation, begin: u16, end: u16) -> Expr {
    Expr::leaf(op, Position::new(begin, end))
}

pub fn node(op: Operation, begin: u16, end: u16, args: Vec<Expr>) -> Expr {
    Expr::new(op, Position::new(begin, end), args)
}

/// `Literal` over `[begin, end)` with one `Char` per byte. ASCII only.
pub fn literal(begin: u16, end: u16) -> Expr {
    let chars = (begin..end)
        .map(|i| leaf(Operation::Char, i, i + 1))
        .collect();
    node(Operation::Literal, begin, end, chars)
}

pub fn ch(at: u16) -> Expr {
    leaf(Operation::Char, at, at + 1)
}
