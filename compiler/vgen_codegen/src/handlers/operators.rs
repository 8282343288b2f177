//! Operator expressions.

use vgen_ir::NodeId;

use super::{invalid_field, ExprResult};
use crate::context::GenerationContext;
use crate::Precedence;

/// A binary operator: its text, its level, and whether a same-level right
/// operand must be parenthesized.
struct BinaryOp {
    text: &'static str,
    level: Precedence,
    right_tighter: bool,
}

impl BinaryOp {
    const fn new(text: &'static str, level: Precedence) -> Self {
        BinaryOp {
            text,
            level,
            right_tighter: false,
        }
    }

    const fn non_associative(text: &'static str, level: Precedence) -> Self {
        BinaryOp {
            text,
            level,
            right_tighter: true,
        }
    }

    /// Emit `A op B` with the given fallback for missing operands.
    fn emit(&self, ctx: &mut GenerationContext<'_>, node: NodeId, fallback: &str) -> ExprResult {
        let right_level = if self.right_tighter {
            self.level.tighter()
        } else {
            self.level
        };
        let left = ctx.value_or(node, "A", self.level, fallback)?;
        let right = ctx.value_or(node, "B", right_level, fallback)?;
        Ok((format!("{left} {} {right}", self.text), self.level))
    }
}

pub(super) fn logic_compare(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    let op = match ctx.field(node, "OP").as_str() {
        "EQ" => BinaryOp::non_associative("==", Precedence::LOGIC_EQ),
        "NEQ" => BinaryOp::non_associative("!=", Precedence::LOGIC_INEQ),
        "LT" => BinaryOp::non_associative("<", Precedence::LESS_THAN),
        "LTE" => BinaryOp::non_associative("<=", Precedence::LESS_THAN_EQ),
        "GT" => BinaryOp::non_associative(">", Precedence::GREATER_THAN),
        "GTE" => BinaryOp::non_associative(">=", Precedence::GREATER_THAN_EQ),
        "CASE_EQ" => BinaryOp::non_associative("===", Precedence::CASE_EQ),
        "CASE_NEQ" => BinaryOp::non_associative("!==", Precedence::CASE_INEQ),
        _ => return Err(invalid_field(ctx, node, "OP")),
    };
    op.emit(ctx, node, "0")
}

/// `&&` / `||`, or the word forms `and` / `or`.
///
/// Both operands missing gives `0 op 0`. A single missing operand is filled
/// with the identity of the operator: `1` for AND, `0` for OR.
fn boolean_operation(
    ctx: &mut GenerationContext<'_>,
    node: NodeId,
    and: BinaryOp,
    or: BinaryOp,
) -> ExprResult {
    let (op, identity) = match ctx.field(node, "OP").as_str() {
        "AND" => (and, "1"),
        "OR" => (or, "0"),
        _ => return Err(invalid_field(ctx, node, "OP")),
    };
    let left = ctx.value(node, "A", op.level)?;
    let right = ctx.value(node, "B", op.level)?;
    let (left, right) = match (left, right) {
        (None, None) => ("0".to_string(), "0".to_string()),
        (left, right) => (
            left.unwrap_or_else(|| identity.to_string()),
            right.unwrap_or_else(|| identity.to_string()),
        ),
    };
    Ok((format!("{left} {} {right}", op.text), op.level))
}

pub(super) fn logic_operation(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    boolean_operation(
        ctx,
        node,
        BinaryOp::new("&&", Precedence::LogicAnd),
        BinaryOp::new("||", Precedence::LogicOr),
    )
}

pub(super) fn logic_operation_words(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    boolean_operation(
        ctx,
        node,
        BinaryOp::new("and", Precedence::REDUCE_AND),
        BinaryOp::new("or", Precedence::REDUCE_OR),
    )
}

pub(super) fn bitwise_operation(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    let op = match ctx.field(node, "OP").as_str() {
        "And" => BinaryOp::new("&", Precedence::BitwiseAnd),
        "Or" => BinaryOp::new("|", Precedence::BitwiseOr),
        "Xor" => BinaryOp::new("^", Precedence::BitwiseXor),
        "Xnor" => BinaryOp::new("~^", Precedence::BITWISE_XNOR),
        _ => return Err(invalid_field(ctx, node, "OP")),
    };
    op.emit(ctx, node, "0")
}

pub(super) fn math_arithmetic(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    let op = match ctx.field(node, "OP").as_str() {
        "ADD" => BinaryOp::new("+", Precedence::BINARY_PLUS),
        "MINUS" => BinaryOp::non_associative("-", Precedence::BINARY_MINUS),
        "MULTIPLY" => BinaryOp::non_associative("*", Precedence::MULT),
        "DIVIDE" => BinaryOp::non_associative("/", Precedence::DIV),
        "MODULO" => BinaryOp::non_associative("%", Precedence::MOD),
        "SHIFT_LEFT" => BinaryOp::non_associative("<<", Precedence::SHIFT_LEFT),
        "SHIFT_RIGHT" => BinaryOp::non_associative(">>", Precedence::SHIFT_RIGHT),
        _ => return Err(invalid_field(ctx, node, "OP")),
    };
    op.emit(ctx, node, "0")
}

/// `!x` or `~x`; a missing operand negates `1`.
pub(super) fn negate(ctx: &mut GenerationContext<'_>, node: NodeId, op: &str) -> ExprResult {
    let operand = ctx.value_or(node, "BOOL", Precedence::LOGIC_NEG, "1")?;
    Ok((format!("{op}{operand}"), Precedence::LOGIC_NEG))
}

pub(super) fn logic_ternary(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    let condition = ctx.value_or(node, "IF", Precedence::LogicOr, "0")?;
    let then = ctx.value_or(node, "THEN", Precedence::Conditional, "X")?;
    let otherwise = ctx.value_or(node, "ELSE", Precedence::Conditional, "X")?;
    Ok((
        format!("{condition} ? {then} : {otherwise}"),
        Precedence::Conditional,
    ))
}

/// `posedge clk` / `negedge clk`. Only meaningful inside a sensitivity list.
pub(super) fn edge(ctx: &mut GenerationContext<'_>, node: NodeId, keyword: &str) -> ExprResult {
    let signal = ctx.value_or(node, "NAME", Precedence::Member, "X")?;
    Ok((format!("{keyword} {signal}"), Precedence::None))
}

pub(super) fn bit_select(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    let signal = ctx.value_or(node, "NAME", Precedence::Member, "X")?;
    let index = ctx.value_or(node, "number", Precedence::None, "0")?;
    Ok((format!("{signal}[{index}]"), Precedence::Member))
}

pub(super) fn concat(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    let first = ctx.value_or(node, "arg1", Precedence::None, "X")?;
    let second = ctx.value_or(node, "arg2", Precedence::None, "X")?;
    Ok((format!("{{{first}, {second}}}"), Precedence::Atomic))
}

pub(super) fn replicate(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    let count = ctx.value_or(node, "count", Precedence::Atomic, "1")?;
    let value = ctx.value_or(node, "value", Precedence::None, "X")?;
    Ok((format!("{{{count}{{{value}}}}}"), Precedence::Atomic))
}
