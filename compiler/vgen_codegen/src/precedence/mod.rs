//! Operator precedence for Verilog expressions.
//!
//! Lower level = binds tighter. A child expression is parenthesized when its
//! level is strictly greater than the level its context requires; equal
//! levels are left unwrapped (same-level chains read left-associatively).
//!
//! | level | variant | operators |
//! |------:|---------|-----------|
//! | 0 | `Atomic` | literals, identifiers, `{}` |
//! | 1 | `Member` | `[]` |
//! | 1.1 | `Bracket` | `()` |
//! | 1.2 | `Unary` | `!` `~` `&` `\|` `~&` `~\|` `~^` (unary), `and` `or` |
//! | 2 | `UnarySign` | unary `+` `-` |
//! | 3 | `Concat` | `{}` |
//! | 4 | `Replicate` | `{{}}` |
//! | 5 | `Multiplicative` | `*` `/` `%` |
//! | 6 | `Additive` | `+` `-` |
//! | 7 | `Shift` | `<<` `>>` |
//! | 8 | `Relational` | `>` `>=` `<` `<=` |
//! | 9 | `Equality` | `==` `!=` |
//! | 10 | `CaseEquality` | `===` `!==` |
//! | 11 | `BitwiseAnd` | `&` |
//! | 12 | `BitwiseXor` | `^` `~^` `^~` |
//! | 13 | `BitwiseOr` | `\|` |
//! | 14 | `LogicAnd` | `&&` |
//! | 15 | `LogicOr` | `\|\|` |
//! | 16 | `Conditional` | `?:` |
//! | 50 | `None` | bare value |

use std::fmt;

/// Binding strength of the operator an expression handler emitted.
///
/// Variant order is the total order; derive(`Ord`) compares by it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Atomic,
    Member,
    Bracket,
    Unary,
    UnarySign,
    Concat,
    Replicate,
    Multiplicative,
    Additive,
    Shift,
    Relational,
    Equality,
    CaseEquality,
    BitwiseAnd,
    BitwiseXor,
    BitwiseOr,
    LogicAnd,
    LogicOr,
    Conditional,
    None,
}

impl Precedence {
    // Operators sharing a level.
    pub const LOGIC_NEG: Precedence = Precedence::Unary;
    pub const NEG: Precedence = Precedence::Unary;
    pub const REDUCE_AND: Precedence = Precedence::Unary;
    pub const REDUCE_OR: Precedence = Precedence::Unary;
    pub const REDUCE_NAND: Precedence = Precedence::Unary;
    pub const REDUCE_NOR: Precedence = Precedence::Unary;
    pub const REDUCE_XOR: Precedence = Precedence::Unary;
    pub const UNARY_PLUS: Precedence = Precedence::UnarySign;
    pub const UNARY_MINUS: Precedence = Precedence::UnarySign;
    pub const MULT: Precedence = Precedence::Multiplicative;
    pub const DIV: Precedence = Precedence::Multiplicative;
    pub const MOD: Precedence = Precedence::Multiplicative;
    pub const BINARY_PLUS: Precedence = Precedence::Additive;
    pub const BINARY_MINUS: Precedence = Precedence::Additive;
    pub const SHIFT_LEFT: Precedence = Precedence::Shift;
    pub const SHIFT_RIGHT: Precedence = Precedence::Shift;
    pub const GREATER_THAN: Precedence = Precedence::Relational;
    pub const GREATER_THAN_EQ: Precedence = Precedence::Relational;
    pub const LESS_THAN: Precedence = Precedence::Relational;
    pub const LESS_THAN_EQ: Precedence = Precedence::Relational;
    pub const LOGIC_EQ: Precedence = Precedence::Equality;
    pub const LOGIC_INEQ: Precedence = Precedence::Equality;
    pub const CASE_EQ: Precedence = Precedence::CaseEquality;
    pub const CASE_INEQ: Precedence = Precedence::CaseEquality;
    pub const BITWISE_XNOR: Precedence = Precedence::BitwiseXor;

    /// All levels, tightest first.
    pub const ALL: [Precedence; 20] = [
        Precedence::Atomic,
        Precedence::Member,
        Precedence::Bracket,
        Precedence::Unary,
        Precedence::UnarySign,
        Precedence::Concat,
        Precedence::Replicate,
        Precedence::Multiplicative,
        Precedence::Additive,
        Precedence::Shift,
        Precedence::Relational,
        Precedence::Equality,
        Precedence::CaseEquality,
        Precedence::BitwiseAnd,
        Precedence::BitwiseXor,
        Precedence::BitwiseOr,
        Precedence::LogicAnd,
        Precedence::LogicOr,
        Precedence::Conditional,
        Precedence::None,
    ];

    /// Numeric level, in tenths (`Unary` is 1.2, so 12).
    pub const fn level(self) -> u16 {
        match self {
            Precedence::Atomic => 0,
            Precedence::Member => 10,
            Precedence::Bracket => 11,
            Precedence::Unary => 12,
            Precedence::UnarySign => 20,
            Precedence::Concat => 30,
            Precedence::Replicate => 40,
            Precedence::Multiplicative => 50,
            Precedence::Additive => 60,
            Precedence::Shift => 70,
            Precedence::Relational => 80,
            Precedence::Equality => 90,
            Precedence::CaseEquality => 100,
            Precedence::BitwiseAnd => 110,
            Precedence::BitwiseXor => 120,
            Precedence::BitwiseOr => 130,
            Precedence::LogicAnd => 140,
            Precedence::LogicOr => 150,
            Precedence::Conditional => 160,
            Precedence::None => 500,
        }
    }

    /// The next tighter level.
    ///
    /// Right operands of non-associative operators require this so that a
    /// same-level child gets parentheses (`a - (b - c)`).
    pub const fn tighter(self) -> Precedence {
        match self {
            Precedence::Atomic | Precedence::Member => Precedence::Atomic,
            Precedence::Bracket => Precedence::Member,
            Precedence::Unary => Precedence::Bracket,
            Precedence::UnarySign => Precedence::Unary,
            Precedence::Concat => Precedence::UnarySign,
            Precedence::Replicate => Precedence::Concat,
            Precedence::Multiplicative => Precedence::Replicate,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Shift => Precedence::Additive,
            Precedence::Relational => Precedence::Shift,
            Precedence::Equality => Precedence::Relational,
            Precedence::CaseEquality => Precedence::Equality,
            Precedence::BitwiseAnd => Precedence::CaseEquality,
            Precedence::BitwiseXor => Precedence::BitwiseAnd,
            Precedence::BitwiseOr => Precedence::BitwiseXor,
            Precedence::LogicAnd => Precedence::BitwiseOr,
            Precedence::LogicOr => Precedence::LogicAnd,
            Precedence::Conditional => Precedence::LogicOr,
            Precedence::None => Precedence::Conditional,
        }
    }

    /// Whether a child at this level needs parentheses where `required` is expected.
    #[inline]
    pub fn needs_parens(self, required: Precedence) -> bool {
        self > required
    }
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = self.level();
        if level % 10 == 0 {
            write!(f, "{}", level / 10)
        } else {
            write!(f, "{}.{}", level / 10, level % 10)
        }
    }
}

/// Wrap `text` in parentheses if `child` binds looser than `required`.
pub fn parenthesize(text: String, child: Precedence, required: Precedence) -> String {
    if child.needs_parens(required) {
        format!("({text})")
    } else {
        text
    }
}
