use crate::ast::{Expr, Regexp};
use crate::node::Node;

/// Render the whole tree of `re` in its canonical s-expression form.
///
/// Examples (pattern → output):
/// - `a|bc`    → `(or a bc)`
/// - `[a0-9]`  → `[a 0-9]`
/// - `x{3,5}`  → `(repeat x 3,5)`
/// - `(?P<foo>ab)` → `(capture {ab} foo)`
/// - empty pattern → `{}`
///
/// Literal text is copied from the source verbatim. A lone `{` or `}`
/// char is quoted as `'{'` / `'}'` so it can't be confused with the braces
/// of a `Concat`.
///
/// Never fails on a node it can't interpret: sentinel tags render as
/// `<op=N>`, nodes with the wrong number of arguments as `<op=N args=K>`.
/// Spans are trusted; see [`Regexp::text_of`].
pub fn format_syntax(re: &Regexp) -> String {
    format_expr(re, &re.expr)
}

/// Same as [`format_syntax`] for a subtree of `re`.
pub fn format_expr(re: &Regexp, e: &Expr) -> String {
    let mut out = String::with_capacity(e.pos.len() * 2);
    write_expr(re, e, &mut out);
    out
}

fn write_expr(re: &Regexp, e: &Expr, out: &mut String) {
    let node = match e.node() {
        Ok(node) => node,
        Err(_) => return write_unknown(e, out),
    };

    match node {
        Node::Char(_) | Node::Literal(..) => match re.text_of(e) {
            "{" => out.push_str("'{'"),
            "}" => out.push_str("'}'"),
            s => out.push_str(s),
        },
        Node::String(_) | Node::Escape(_) | Node::PosixClass(_) => out.push_str(re.text_of(e)),
        Node::Quote(_) => wrap(out, "q", |out| out.push_str(re.text_of(e))),

        Node::Caret => out.push('^'),
        Node::Dollar => out.push('$'),
        Node::Dot => out.push('.'),

        Node::CharRange { lo, hi } => {
            write_expr(re, lo, out);
            out.push('-');
            write_expr(re, hi, out);
        }
        Node::CharClass(args) => {
            out.push('[');
            write_list(re, args, out);
            out.push(']');
        }
        Node::NegCharClass(args) => {
            out.push_str("[^");
            write_list(re, args, out);
            out.push(']');
        }
        Node::Concat(args) => {
            out.push('{');
            write_list(re, args, out);
            out.push('}');
        }
        Node::Alt(args) => wrap(out, "or", |out| write_list(re, args, out)),

        Node::Capture(x) => wrap(out, "capture", |out| write_expr(re, x, out)),
        Node::NamedCapture { expr, name } => wrap(out, "capture", |out| {
            write_expr(re, expr, out);
            out.push(' ');
            out.push_str(re.text_of(name));
        }),
        Node::Group(x) => wrap(out, "group", |out| write_expr(re, x, out)),
        Node::GroupWithFlags { expr, flags } => wrap(out, "group", |out| {
            write_expr(re, expr, out);
            out.push(' ');
            out.push_str(re.text_of(flags));
        }),
        Node::FlagOnlyGroup { flags } => wrap(out, "flags", |out| write_expr(re, flags, out)),

        Node::Plus(x) => wrap(out, "+", |out| write_expr(re, x, out)),
        Node::Star(x) => wrap(out, "*", |out| write_expr(re, x, out)),
        Node::Question(x) => wrap(out, "?", |out| write_expr(re, x, out)),
        Node::NonGreedy(x) => wrap(out, "non-greedy", |out| write_expr(re, x, out)),
        Node::Possessive(x) => wrap(out, "possessive", |out| write_expr(re, x, out)),
        Node::Repeat { expr, count } => wrap(out, "repeat", |out| {
            write_expr(re, expr, out);
            out.push(' ');
            out.push_str(re.text_of(count));
        }),
    }
}

/// `(head <body>)`
fn wrap(out: &mut String, head: &str, body: impl FnOnce(&mut String)) {
    out.push('(');
    out.push_str(head);
    out.push(' ');
    body(out);
    out.push(')');
}

fn write_list(re: &Regexp, args: &[Expr], out: &mut String) {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_expr(re, arg, out);
    }
}

// Debug placeholder, keeps partially broken trees printable.
fn write_unknown(e: &Expr, out: &mut String) {
    use std::fmt::Write;

    let tag = e.op.as_u8();
    // Writing into a String can't fail.
    let _ = if e.op.is_sentinel() {
        write!(out, "<op={tag}>")
    } else {
        write!(out, "<op={tag} args={}>", e.args.len())
    };
}
