//! Module headers, declarations, gate instances and continuous assignments.

use vgen_ir::NodeId;

use super::StmtResult;
use crate::context::GenerationContext;
use crate::Precedence;

/// Placeholder the editor leaves in an untouched port list field.
const PORT_LIST_PLACEHOLDER: &str = "varNames";

pub(super) fn module_dec(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    let name = ctx.field(node, "modName");
    let ports = ctx.field(node, "varNames");
    let ports = ports.trim();
    if ports.is_empty() || ports == PORT_LIST_PLACEHOLDER {
        Ok(format!("module {name}();\n"))
    } else {
        Ok(format!("module {name} ({ports});\n"))
    }
}

pub(super) fn module_test(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    Ok(format!("module {}();\n", ctx.field(node, "modName")))
}

pub(super) fn end_module(_: &mut GenerationContext<'_>, _: NodeId) -> StmtResult {
    Ok("endmodule\n".to_string())
}

/// `input a;`, `wire [7:0] bus;`, `reg [n-1:0] r;`.
pub(super) fn port(ctx: &mut GenerationContext<'_>, node: NodeId, keyword: &str) -> StmtResult {
    let name = ctx.field(node, "NAME");
    let size = ctx.value(node, "size", Precedence::BINARY_MINUS)?;
    match size.as_deref().map(range) {
        Some(Some(range)) => Ok(format!("{keyword} {range} {name};\n")),
        _ => Ok(format!("{keyword} {name};\n")),
    }
}

/// Bit range for a declared width; `None` for a single bit.
fn range(size: &str) -> Option<String> {
    let size = size.trim();
    match size.parse::<i64>() {
        Ok(width) if width <= 1 => None,
        Ok(width) => Some(format!("[{}:0]", width - 1)),
        Err(_) if size.is_empty() => None,
        Err(_) => Some(format!("[{size}-1:0]")),
    }
}

/// Gate primitive instance: `and g1 (out, a, b);`.
pub(super) fn gate(ctx: &mut GenerationContext<'_>, node: NodeId, gate: &str) -> StmtResult {
    let instance = ctx.field(node, "gName");
    let output = ctx.field(node, "oName");
    let first = ctx.value_or(node, "arg1", Precedence::None, "X")?;
    let second = ctx.value_or(node, "arg2", Precedence::None, "X")?;
    let instance = instance.trim();
    if instance.is_empty() {
        Ok(format!("{gate} ({output}, {first}, {second});\n"))
    } else {
        Ok(format!("{gate} {instance} ({output}, {first}, {second});\n"))
    }
}

pub(super) fn not_gate(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    let output = ctx.field(node, "out");
    let input = ctx.value_or(node, "NAME", Precedence::None, "X")?;
    Ok(format!("not ({output}, {input});\n"))
}

/// Continuous assignment to a workspace variable.
pub(super) fn assign(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    let var = ctx.field(node, "var");
    let target = ctx.variable_name(&var);
    let value = ctx.value_or(node, "NAME", Precedence::None, "X")?;
    Ok(format!("assign {target} = {value};\n"))
}

/// Non-blocking assignment to a workspace variable.
pub(super) fn nonblocking_assign(ctx: &mut GenerationContext<'_>, node: NodeId) -> StmtResult {
    let var = ctx.field(node, "var");
    let target = ctx.variable_name(&var);
    let value = ctx.value_or(node, "NAME", Precedence::None, "X")?;
    Ok(format!("{target} <= {value};\n"))
}
