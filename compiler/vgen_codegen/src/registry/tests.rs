use super::*;
use pretty_assertions::assert_eq;
use vgen_ir::Node;

fn literal(_: &mut GenerationContext<'_>, _: NodeId) -> Result<(String, Precedence), CodegenError> {
    Ok(("1".to_string(), Precedence::Atomic))
}

fn line(_: &mut GenerationContext<'_>, _: NodeId) -> Result<String, CodegenError> {
    Ok("x;\n".to_string())
}

#[test]
fn test_registration() {
    let mut registry = HandlerRegistry::new();
    assert!(registry.is_empty());
    registry.register_expression("one", literal);
    registry.register_statement("stmt", line);
    assert_eq!(registry.len(), 2);
    assert!(registry.contains("one"));
    assert_eq!(registry.get("one").map(Handler::shape), Some(HandlerShape::Expression));
    assert_eq!(registry.get("stmt").map(Handler::shape), Some(HandlerShape::Statement));
    assert!(registry.get("missing").is_none());
}

#[test]
fn test_reregistration_replaces() {
    let mut registry = HandlerRegistry::new();
    registry.register_expression("k", literal);
    registry.register_statement("k", line);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("k").map(Handler::shape), Some(HandlerShape::Statement));
}

#[test]
fn test_builtins_cover_block_set() {
    let registry = builtin_registry();
    for kind in [
        "controls_if",
        "controls_ifelse",
        "logic_compare",
        "logic_operation",
        "logic_operation_2",
        "logic_operation3",
        "logic_negate",
        "logic_negate3",
        "logic_boolean",
        "logic_null",
        "logic_ternary",
        "math_number",
        "module_dec",
        "end_module",
        "input_block",
        "xnor_block",
        "not_gate",
        "assign_block",
        "always_blk",
        "always_simu",
        "intial",
        "intial_par",
        "time_block",
        "display_block",
        "decimal_binary",
        "decimal_octal_return",
    ] {
        assert!(registry.contains(kind), "missing {kind}");
    }
    let mut kinds: Vec<&str> = registry.kinds().collect();
    kinds.sort_unstable();
    kinds.dedup();
    assert_eq!(kinds.len(), registry.len());
}

#[test]
fn test_check_unsupported_kind() {
    let mut graph = NodeGraph::new();
    let root = graph.add(Node::statement("stmt").with_key("a"));
    let unknown = graph.add(Node::statement("mystery").with_key("b"));
    graph.set_next(root, unknown);

    let mut registry = HandlerRegistry::new();
    registry.register_statement("stmt", line);
    assert_eq!(
        registry.check(&graph, &[root]),
        Err(CodegenError::UnsupportedKind {
            node: "b".to_string(),
            kind: "mystery".to_string(),
        })
    );
}

#[test]
fn test_check_shape_mismatch() {
    let mut graph = NodeGraph::new();
    let root = graph.add(Node::statement("one").with_key("a"));

    let mut registry = HandlerRegistry::new();
    registry.register_expression("one", literal);
    assert_eq!(
        registry.check(&graph, &[root]),
        Err(CodegenError::HandlerShapeMismatch {
            node: "a".to_string(),
            kind: "one".to_string(),
            registered: HandlerShape::Expression,
            found: HandlerShape::Statement,
        })
    );
}

#[test]
fn test_check_skips_disabled_and_unreachable() {
    let mut graph = NodeGraph::new();
    let root = graph.add(Node::statement("mystery").disabled());
    let after = graph.add(Node::statement("stmt"));
    graph.set_next(root, after);
    graph.add(Node::statement("also_unknown"));

    let mut registry = HandlerRegistry::new();
    registry.register_statement("stmt", line);
    assert_eq!(registry.check(&graph, &[root]), Ok(()));
}

#[test]
fn test_check_follows_next_of_disabled() {
    let mut graph = NodeGraph::new();
    let root = graph.add(Node::statement("stmt").disabled());
    let after = graph.add(Node::statement("mystery").with_key("m"));
    graph.set_next(root, after);

    let registry = HandlerRegistry::new();
    assert!(matches!(
        registry.check(&graph, &[root]),
        Err(CodegenError::UnsupportedKind { node, .. }) if node == "m"
    ));
}

#[test]
fn test_shape_display() {
    assert_eq!(HandlerShape::Expression.to_string(), "expression");
    assert_eq!(HandlerShape::of_node(false), HandlerShape::Statement);
}
