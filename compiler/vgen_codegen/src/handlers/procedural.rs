//! Procedural blocks, conditionals, delays and system tasks.

use vgen_ir::NodeId;

use super::StmtResult;
use crate::context::GenerationContext;
use crate::Precedence;

/// Hoist the `` `timescale `` directive if one is configured.
fn define_timescale(ctx: &mut GenerationContext<'_>) {
    if let Some(timescale) = &ctx.config().timescale {
        ctx.define("timescale", format!("`timescale {timescale}"));
    }
}

/// `always @ (sensitivity) begin ... end`; an empty list becomes `*`.
pub(super) fn always_block(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    let condition = ctx.value_or(node, "condition", Precedence::None, "*")?;
    let body = ctx.statements(node, "body")?;
    Ok(format!("always @ ({condition})\nbegin\n{body}end\n"))
}

/// `always #delay begin ... end`.
pub(super) fn always_delay(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    define_timescale(ctx);
    let delay = ctx.value_or(node, "delay", Precedence::Atomic, "1")?;
    let body = ctx.statements(node, "code")?;
    Ok(format!("always #{delay} begin\n{body}end\n"))
}

pub(super) fn initial(
    ctx: &mut GenerationContext<'_>,
    node: NodeId,
    open: &str,
    close: &str,
) -> StmtResult {
    let body = ctx.statements(node, "body")?;
    Ok(format!("initial {open}\n{body}{close}\n"))
}

/// `if`/`else if`/`else` chain.
///
/// The node declares its branches through slots: `IF0`/`DO0` always, then one
/// more branch for every `IF<n>` slot present, and a trailing `else` when an
/// `ELSE` statement slot exists. Present-but-empty conditions become `0`.
pub(super) fn controls_if(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    let block = ctx.node(node);
    let mut code = String::new();
    let mut n = 0;
    loop {
        let condition = ctx.value_or(node, &format!("IF{n}"), Precedence::None, "0")?;
        let branch = ctx.statements(node, &format!("DO{n}"))?;
        if n > 0 {
            code.push_str(" else ");
        }
        code.push_str(&format!("if ({condition}) begin\n{branch}end"));
        n += 1;
        if !block.values.contains(&format!("IF{n}")) {
            break;
        }
    }
    if block.statements.contains("ELSE") {
        let branch = ctx.statements(node, "ELSE")?;
        code.push_str(&format!(" else begin\n{branch}end"));
    }
    code.push('\n');
    Ok(code)
}

/// Two-way conditional where the second branch has its own condition.
pub(super) fn if_else_block(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    let first = ctx.value_or(node, "condition_if", Precedence::None, "0")?;
    let then = ctx.statements(node, "if_code")?;
    let second = ctx.value_or(node, "condition_else", Precedence::None, "0")?;
    let otherwise = ctx.statements(node, "else_code")?;
    Ok(format!(
        "if ({first}) begin\n{then}end\nelse if ({second}) begin\n{otherwise}end\n"
    ))
}

/// `#delay` followed by the delayed statements.
pub(super) fn delay(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    define_timescale(ctx);
    let delay = ctx.value_or(node, "arg1", Precedence::Atomic, "1")?;
    let body = ctx.statements(node, "arg2")?;
    Ok(format!("#{delay}\n{body}"))
}

pub(super) fn display(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    let text = escape_string(&ctx.field(node, "text"));
    Ok(format!("$display(\"{text}\");\n"))
}

pub(super) fn monitor(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    Ok(format!("$monitor({});\n", ctx.field(node, "names").trim()))
}

pub(super) fn finish(_: &mut GenerationContext<'_>, _: NodeId) -> StmtResult {
    Ok("$finish;\n".to_string())
}

/// Escape text for a Verilog string literal.
fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}
