use std::fmt;

use crate::error::Error;

/// The kind of a syntax tree node.
///
/// Every operation fixes how many arguments its node carries and what
/// role each argument plays; see [`Operation::arity`]. `None` and `None2`
/// bound the range of tags and never label a real node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Operation {
    None = 0,

    /// Concatenation of ops.
    ///
    /// Examples: `xy` `abc\d` ``
    /// Args - concatenated ops. With 0 args it stands for the empty pattern.
    Concat,

    /// `.` wildcard.
    Dot,

    /// `x|y` alternation.
    ///
    /// Examples: `a|bc` `x(.*?)|y(.*?)`
    /// Args - branches, left to right.
    Alt,

    /// `x*`, shorthand for `{0,}`.
    /// Args[0] - repeated expression.
    Star,

    /// `x+`, shorthand for `{1,}`.
    /// Args[0] - repeated expression.
    Plus,

    /// `x?`, shorthand for `{0,1}`.
    /// Args[0] - repeated expression.
    Question,

    /// Makes its operand quantifier non-greedy.
    ///
    /// Examples: `x??` `x*?` `x+?`
    /// Args[0] - quantified expression.
    NonGreedy,

    /// Makes its operand quantifier possessive.
    ///
    /// Examples: `x?+` `x*+` `x++`
    /// Args[0] - quantified expression.
    Possessive,

    /// `^` anchor.
    Caret,

    /// `$` anchor.
    Dollar,

    /// Run of consecutive chars.
    ///
    /// Examples: `ab` `10x`
    /// Args - enclosed characters (`Char`).
    Literal,

    /// Single literal pattern character.
    ///
    /// Examples: `a` `6` `ф`
    Char,

    /// Artificial text holder used as an argument of other nodes.
    String,

    /// `\Q...\E` enclosed literal. The closing `\E` is optional.
    ///
    /// Examples: `\Q.?\E` `\Q?q[]=1`
    Quote,

    /// Single character escape.
    ///
    /// Examples: `\d` `\a` `\n`
    Escape,

    /// Escaped meta char.
    ///
    /// Examples: `\(` `\[` `\+`
    EscapeMeta,

    /// Octal char code escape, up to 3 digits.
    ///
    /// Examples: `\123` `\12`
    EscapeOctal,

    /// Hex char code escape, exactly 2 digits.
    ///
    /// Examples: `\x7F` `\xF7`
    EscapeHex,

    /// Braced hex char code escape.
    ///
    /// Examples: `\x{10FFFF}` `\x{F}`
    EscapeHexFull,

    /// Unicode class escape with a one-letter name.
    ///
    /// Examples: `\pS` `\pL` `\PL`
    EscapeUni,

    /// Unicode class escape with a braced name.
    ///
    /// Examples: `\p{Greek}` `\p{Symbol}` `\p{^L}`
    EscapeUniFull,

    /// Char class enclosed in `[]`.
    ///
    /// Examples: `[abc]` `[a-z0-9\]]`
    /// Args - class elements, may include `CharRange` and `PosixClass`.
    CharClass,

    /// Negated char class enclosed in `[^]`.
    ///
    /// Examples: `[^abc]` `[^a-z0-9\]]`
    /// Args - class elements, may include `CharRange` and `PosixClass`.
    NegCharClass,

    /// Inclusive range inside a char class.
    ///
    /// Examples: `0-9` `A-Z`
    /// Args[0] - lower bound (`Char` or `Escape`).
    /// Args[1] - upper bound (`Char` or `Escape`).
    CharRange,

    /// Named ASCII set inside a char class.
    ///
    /// Examples: `[:alpha:]` `[:blank:]`
    PosixClass,

    /// `{min,max}` repetition.
    ///
    /// Examples: `x{5}` `x{min,max}` `x{min,}`
    /// Args[0] - repeated expression.
    /// Args[1] - repeat count (`String`).
    Repeat,

    /// `(re)` capturing group.
    ///
    /// Examples: `(abc)` `(x|y)`
    /// Args[0] - enclosed expression.
    Capture,

    /// `(?P<name>re)` capturing group.
    ///
    /// Examples: `(?P<foo>abc)` `(?P<name>x|y)`
    /// Args[0] - enclosed expression (`Concat` with 0 args for an empty group).
    /// Args[1] - group name (`String`).
    NamedCapture,

    /// `(?:re)` non-capturing group.
    ///
    /// Args[0] - enclosed expression (`Concat` with 0 args for an empty group).
    Group,

    /// `(?flags:re)` non-capturing group.
    ///
    /// Examples: `(?i:abc)` `(?i:x|y)`
    /// Args[0] - enclosed expression (`Concat` with 0 args for an empty group).
    /// Args[1] - flags (`String`).
    GroupWithFlags,

    /// `(?flags)` form, changes the flags of the enclosing group.
    ///
    /// Examples: `(?i)` `(?i-m)` `(?-im)`
    /// Args[0] - flags (`String`).
    FlagOnlyGroup,

    None2,
}

/// Which operations may fill an argument slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Any,
    /// `Char`, the elements of a `Literal`.
    Char,
    /// `Char` or a single-character escape, the bounds of a `CharRange`.
    RangeBound,
    /// `String` text holder: repeat counts, group names and flags.
    Text,
}

impl Role {
    pub fn admits(self, op: Operation) -> bool {
        use Operation::*;
        match self {
            Role::Any => true,
            Role::Char => op == Char,
            Role::RangeBound => matches!(
                op,
                Char | Escape | EscapeMeta | EscapeOctal | EscapeHex | EscapeHexFull
            ),
            Role::Text => op == String,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Any => f.write_str("any node"),
            Role::Char => f.write_str("Char"),
            Role::RangeBound => f.write_str("Char or escape"),
            Role::Text => f.write_str("String"),
        }
    }
}

/// How many arguments a node of some [`Operation`] must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// Any number, including zero.
    Variadic,
    /// Tag is not allowed on a node at all.
    Sentinel,
}

impl Arity {
    pub fn accepts(self, len: usize) -> bool {
        match self {
            Arity::Exact(n) => n == len,
            Arity::Variadic => true,
            Arity::Sentinel => false,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::Variadic => f.write_str("any number of"),
            Arity::Sentinel => f.write_str("no node with"),
        }
    }
}

impl Operation {
    /// All operations that may label a node, in declaration order.
    pub const ALL: [Operation; 31] = [
        Operation::Concat,
        Operation::Dot,
        Operation::Alt,
        Operation::Star,
        Operation::Plus,
        Operation::Question,
        Operation::NonGreedy,
        Operation::Possessive,
        Operation::Caret,
        Operation::Dollar,
        Operation::Literal,
        Operation::Char,
        Operation::String,
        Operation::Quote,
        Operation::Escape,
        Operation::EscapeMeta,
        Operation::EscapeOctal,
        Operation::EscapeHex,
        Operation::EscapeHexFull,
        Operation::EscapeUni,
        Operation::EscapeUniFull,
        Operation::CharClass,
        Operation::NegCharClass,
        Operation::CharRange,
        Operation::PosixClass,
        Operation::Repeat,
        Operation::Capture,
        Operation::NamedCapture,
        Operation::Group,
        Operation::GroupWithFlags,
        Operation::FlagOnlyGroup,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_sentinel(self) -> bool {
        matches!(self, Operation::None | Operation::None2)
    }

    /// Argument count contract for nodes tagged with this operation.
    pub fn arity(self) -> Arity {
        use Operation::*;
        match self {
            None | None2 => Arity::Sentinel,
            Concat | Alt | Literal | CharClass | NegCharClass => Arity::Variadic,
            Dot | Caret | Dollar | Char | String | Quote | Escape | EscapeMeta | EscapeOctal
            | EscapeHex | EscapeHexFull | EscapeUni | EscapeUniFull | PosixClass => {
                Arity::Exact(0)
            }
            Star | Plus | Question | NonGreedy | Possessive | Capture | Group
            | FlagOnlyGroup => Arity::Exact(1),
            CharRange | Repeat | NamedCapture | GroupWithFlags => Arity::Exact(2),
        }
    }

    /// Role of the argument at `index` of a node tagged with this operation.
    pub fn arg_role(self, index: usize) -> Role {
        use Operation::*;
        match (self, index) {
            (Literal, _) => Role::Char,
            (CharRange, _) => Role::RangeBound,
            (Repeat | NamedCapture | GroupWithFlags, 1) | (FlagOnlyGroup, 0) => Role::Text,
            _ => Role::Any,
        }
    }

    pub fn name(self) -> &'static str {
        use Operation::*;
        match self {
            None => "None",
            Concat => "Concat",
            Dot => "Dot",
            Alt => "Alt",
            Star => "Star",
            Plus => "Plus",
            Question => "Question",
            NonGreedy => "NonGreedy",
            Possessive => "Possessive",
            Caret => "Caret",
            Dollar => "Dollar",
            Literal => "Literal",
            Char => "Char",
            String => "String",
            Quote => "Quote",
            Escape => "Escape",
            EscapeMeta => "EscapeMeta",
            EscapeOctal => "EscapeOctal",
            EscapeHex => "EscapeHex",
            EscapeHexFull => "EscapeHexFull",
            EscapeUni => "EscapeUni",
            EscapeUniFull => "EscapeUniFull",
            CharClass => "CharClass",
            NegCharClass => "NegCharClass",
            CharRange => "CharRange",
            PosixClass => "PosixClass",
            Repeat => "Repeat",
            Capture => "Capture",
            NamedCapture => "NamedCapture",
            Group => "Group",
            GroupWithFlags => "GroupWithFlags",
            FlagOnlyGroup => "FlagOnlyGroup",
            None2 => "None2",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Operation {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Operation::None),
            t if t == Operation::None2 as u8 => Ok(Operation::None2),
            t => Operation::ALL
                .get(usize::from(t) - 1)
                .copied()
                .ok_or(Error::UnknownOperation(t)),
        }
    }
}
