//! Constants, numbers, variable reads and radix conversions.

use vgen_ir::{format_number, NodeId};

use super::{ExprResult, StmtResult};
use crate::context::GenerationContext;
use crate::Precedence;

pub(super) fn logic_boolean(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    let code = if ctx.field(node, "BOOL") == "TRUE" { "1" } else { "0" };
    Ok((code.to_string(), Precedence::Atomic))
}

pub(super) fn dont_care(_: &mut GenerationContext<'_>, _: NodeId) -> ExprResult {
    Ok(("X".to_string(), Precedence::Atomic))
}

pub(super) fn high_impedance(_: &mut GenerationContext<'_>, _: NodeId) -> ExprResult {
    Ok(("Z".to_string(), Precedence::Atomic))
}

pub(super) fn one(_: &mut GenerationContext<'_>, _: NodeId) -> ExprResult {
    Ok(("1".to_string(), Precedence::Atomic))
}

pub(super) fn zero(_: &mut GenerationContext<'_>, _: NodeId) -> ExprResult {
    Ok(("0".to_string(), Precedence::Atomic))
}

/// A number in its shortest form; a negative number binds like unary minus.
pub(super) fn math_number(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    let value = ctx
        .node(node)
        .field("NUM")
        .and_then(vgen_ir::FieldValue::as_number)
        .filter(|n| n.is_finite());
    match value {
        Some(n) if n < 0.0 => Ok((format_number(n), Precedence::NEG)),
        Some(n) => Ok((format_number(n), Precedence::Atomic)),
        None => Ok(("0".to_string(), Precedence::Atomic)),
    }
}

pub(super) fn variables_get(ctx: &mut GenerationContext<'_>, node: NodeId) -> ExprResult {
    let var = ctx.field(node, "VAR");
    Ok((ctx.variable_name(&var), Precedence::Atomic))
}

/// Target radix of a sized literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Hex,
    Octal,
}

impl Radix {
    /// Base letter after the `'` of a sized literal.
    pub fn letter(self) -> char {
        match self {
            Radix::Binary => 'b',
            Radix::Hex => 'h',
            Radix::Octal => 'o',
        }
    }

    fn digits(self, value: u128) -> String {
        match self {
            Radix::Binary => format!("{value:b}"),
            Radix::Hex => format!("{value:x}"),
            Radix::Octal => format!("{value:o}"),
        }
    }
}

/// Render `text` as a sized Verilog literal: `5` -> `3'b101`, `3'h5`, `3'o5`.
///
/// The width is the number of binary digits whatever the radix. Text that is
/// not a non-negative integer becomes the don't-care literal `1'bx` (`1'hx`,
/// `1'ox`). Negative and fractional numbers count as not converting, since
/// `-101` and `10.1` are not legal Verilog digits.
pub fn sized_literal(text: &str, radix: Radix) -> String {
    let Some(value) = parse_unsigned(text) else {
        return format!("1'{}x", radix.letter());
    };
    let width = if value == 0 {
        1
    } else {
        u128::BITS - value.leading_zeros()
    };
    format!("{width}'{}{}", radix.letter(), radix.digits(value))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "range and integrality are checked first"
)]
fn parse_unsigned(text: &str) -> Option<u128> {
    let text = text.trim();
    if let Ok(value) = text.parse::<u128>() {
        return Some(value);
    }
    let value: f64 = text.parse().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < 2f64.powi(64) {
        Some(value as u128)
    } else {
        None
    }
}

pub(super) fn radix_value(
    ctx: &mut GenerationContext<'_>,
    node: NodeId,
    radix: Radix,
) -> ExprResult {
    let number = ctx.value_or(node, "number", Precedence::None, "")?;
    Ok((sized_literal(&number, radix), Precedence::Atomic))
}

pub(super) fn radix_statement(
    ctx: &mut GenerationContext<'_>,
    node: NodeId,
    radix: Radix,
) -> StmtResult {
    let number = ctx.value_or(node, "val", Precedence::None, "")?;
    Ok(format!("{};\n", sized_literal(&number, radix)))
}
