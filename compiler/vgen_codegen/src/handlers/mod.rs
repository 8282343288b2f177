//! Built-in Verilog handlers.
//!
//! Handlers are grouped by what they emit:
//! - `literals`: constants, numbers, variable reads, radix conversions
//! - `operators`: logic, bitwise, arithmetic and selection expressions
//! - `structure`: module headers, port and net declarations, gates, assignments
//! - `procedural`: always/initial blocks, conditionals, delays, system tasks
//!
//! Every statement handler returns newline-terminated text and leaves
//! comments and `next` chaining to the context.

mod literals;
mod operators;
mod procedural;
mod structure;

use vgen_ir::NodeId;

use crate::context::GenerationContext;
use crate::{CodegenError, HandlerRegistry, Precedence};

pub use literals::{sized_literal, Radix};

type ExprResult = Result<(String, Precedence), CodegenError>;
type StmtResult = Result<String, CodegenError>;

/// Register every built-in handler.
pub fn register_builtins(registry: &mut HandlerRegistry) {
    // Constants and literals
    registry.register_expression("logic_boolean", literals::logic_boolean);
    registry.register_expression("logic_null", literals::dont_care);
    registry.register_expression("dont_care", literals::dont_care);
    registry.register_expression("high_impedence", literals::high_impedance);
    registry.register_expression("one", literals::one);
    registry.register_expression("zero", literals::zero);
    registry.register_expression("math_number", literals::math_number);
    registry.register_expression("variables_get", literals::variables_get);

    // Radix conversions
    registry.register_expression("decimal_binary_return", |ctx, node| {
        literals::radix_value(ctx, node, Radix::Binary)
    });
    registry.register_expression("decimal_hexa_return", |ctx, node| {
        literals::radix_value(ctx, node, Radix::Hex)
    });
    registry.register_expression("decimal_octal_return", |ctx, node| {
        literals::radix_value(ctx, node, Radix::Octal)
    });
    registry.register_statement("decimal_binary", |ctx, node| {
        literals::radix_statement(ctx, node, Radix::Binary)
    });
    registry.register_statement("decimal_hexa", |ctx, node| {
        literals::radix_statement(ctx, node, Radix::Hex)
    });
    registry.register_statement("decimal_octa", |ctx, node| {
        literals::radix_statement(ctx, node, Radix::Octal)
    });

    // Operators
    registry.register_expression("logic_compare", operators::logic_compare);
    registry.register_expression("logic_operation", operators::logic_operation);
    registry.register_expression("logic_operation_2", operators::logic_operation_words);
    registry.register_expression("logic_operation3", operators::bitwise_operation);
    registry.register_expression("logic_negate", |ctx, node| {
        operators::negate(ctx, node, "!")
    });
    registry.register_expression("logic_negate3", |ctx, node| {
        operators::negate(ctx, node, "~")
    });
    registry.register_expression("logic_ternary", operators::logic_ternary);
    registry.register_expression("math_arithmetic", operators::math_arithmetic);
    registry.register_expression("pos_edge", |ctx, node| operators::edge(ctx, node, "posedge"));
    registry.register_expression("neg_edge", |ctx, node| operators::edge(ctx, node, "negedge"));
    registry.register_expression("bit_select", operators::bit_select);
    registry.register_expression("concat", operators::concat);
    registry.register_expression("replicate", operators::replicate);

    // Module structure
    registry.register_statement("module_dec", structure::module_dec);
    registry.register_statement("module_test", structure::module_test);
    registry.register_statement("end_module", structure::end_module);
    for (kind, keyword) in [
        ("input_block", "input"),
        ("output_block", "output"),
        ("wire_block", "wire"),
        ("reg_block", "reg"),
        ("inout_block", "inout"),
        ("input_simu", "reg"),
        ("output_simu", "wire"),
    ] {
        registry.register_statement(kind, move |ctx, node| structure::port(ctx, node, keyword));
    }
    for (kind, gate) in [
        ("and_block", "and"),
        ("or_block", "or"),
        ("xor_block", "xor"),
        ("nand_block", "nand"),
        ("nor_block", "nor"),
        ("xnor_block", "xnor"),
    ] {
        registry.register_statement(kind, move |ctx, node| structure::gate(ctx, node, gate));
    }
    registry.register_statement("not_gate", structure::not_gate);
    registry.register_statement("assign_block", structure::assign);
    registry.register_statement("variables_set_parallel", structure::nonblocking_assign);

    // Procedural blocks
    registry.register_statement("always_blk", procedural::always_block);
    registry.register_statement("always_simu", procedural::always_delay);
    registry.register_statement("intial", |ctx, node| {
        procedural::initial(ctx, node, "begin", "end")
    });
    registry.register_statement("intial_par", |ctx, node| {
        procedural::initial(ctx, node, "fork", "join")
    });
    registry.register_statement("controls_if", procedural::controls_if);
    registry.register_statement("controls_ifelse", procedural::controls_if);
    registry.register_statement("if_else_block", procedural::if_else_block);
    registry.register_statement("time_block", procedural::delay);
    registry.register_statement("display_block", procedural::display);
    registry.register_statement("monitor_block", procedural::monitor);
    registry.register_statement("finish_block", procedural::finish);
}

/// Error for a choice field holding a value the handler does not know.
fn invalid_field(ctx: &GenerationContext<'_>, node: NodeId, field: &str) -> CodegenError {
    CodegenError::InvalidField {
        node: ctx.graph().key_of(node),
        field: field.to_string(),
        value: ctx.field(node, field),
    }
}
