use super::*;
use crate::Node;
use pretty_assertions::assert_eq;

fn two_statements() -> (NodeGraph, NodeId, NodeId) {
    let mut graph = NodeGraph::new();
    let a = graph.add(Node::statement("intial").with_key("a"));
    let b = graph.add(Node::statement("finish_block").with_key("b"));
    (graph, a, b)
}

#[test]
fn test_well_formed_graph_passes() {
    let (mut graph, a, b) = two_statements();
    let value = graph.add(Node::expression("one"));
    let assign = graph.add(Node::statement("assign_block"));
    graph.connect_statement(a, "body", assign);
    graph.connect_value(assign, "NAME", value);
    graph.set_next(a, b);

    assert_eq!(validate(&graph, &[a]), Ok(()));
}

#[test]
fn test_dangling_reference() {
    let (mut graph, a, _) = two_statements();
    graph.connect_statement(a, "body", NodeId::new(99));

    assert_eq!(
        validate(&graph, &[a]),
        Err(GraphError::DanglingReference {
            node: "a".to_string(),
            slot: "body".to_string(),
            target: "#99".to_string(),
        })
    );
}

#[test]
fn test_next_cycle() {
    let (mut graph, a, b) = two_statements();
    graph.set_next(a, b);
    graph.set_next(b, a);

    assert!(matches!(
        validate(&graph, &[]),
        Err(GraphError::Cycle { .. })
    ));
}

#[test]
fn test_self_loop_through_statement_input() {
    let (mut graph, a, _) = two_statements();
    graph.connect_statement(a, "body", a);

    assert_eq!(
        validate(&graph, &[]),
        Err(GraphError::Cycle {
            node: "a".to_string()
        })
    );
}

#[test]
fn test_value_cycle() {
    let mut graph = NodeGraph::new();
    let x = graph.add(Node::expression("logic_negate").with_key("x"));
    let y = graph.add(Node::expression("logic_negate").with_key("y"));
    graph.connect_value(x, "BOOL", y);
    graph.connect_value(y, "BOOL", x);

    assert!(matches!(
        validate(&graph, &[]),
        Err(GraphError::Cycle { .. })
    ));
}

#[test]
fn test_shared_child_is_not_a_cycle() {
    let mut graph = NodeGraph::new();
    let shared = graph.add(Node::expression("one"));
    let x = graph.add(Node::expression("logic_operation3"));
    graph.connect_value(x, "A", shared);
    graph.connect_value(x, "B", shared);

    assert_eq!(validate(&graph, &[x]), Ok(()));
}

#[test]
fn test_value_slot_connected_to_statement() {
    let (mut graph, a, b) = two_statements();
    graph.connect_value(a, "condition", b);

    assert_eq!(
        validate(&graph, &[a]),
        Err(GraphError::ValueInputNotExpression {
            node: "a".to_string(),
            slot: "condition".to_string(),
            target: "b".to_string(),
        })
    );
}

#[test]
fn test_next_to_expression() {
    let (mut graph, a, _) = two_statements();
    let value = graph.add(Node::expression("one").with_key("v"));
    graph.set_next(a, value);

    assert_eq!(
        validate(&graph, &[a]),
        Err(GraphError::StatementIsExpression {
            node: "a".to_string(),
            slot: "next".to_string(),
            target: "v".to_string(),
        })
    );
}

#[test]
fn test_expression_with_next() {
    let (mut graph, _, b) = two_statements();
    let value = graph.add(Node::expression("one").with_key("v"));
    graph.set_next(value, b);

    assert_eq!(
        validate(&graph, &[value]),
        Err(GraphError::ExpressionHasNext {
            node: "v".to_string()
        })
    );
}

#[test]
fn test_root_must_not_be_referenced() {
    let (mut graph, a, b) = two_statements();
    graph.set_next(a, b);

    assert_eq!(
        validate(&graph, &[a, b]),
        Err(GraphError::RootIsReferenced {
            node: "b".to_string()
        })
    );
}

#[test]
fn test_unknown_root() {
    let (graph, _, _) = two_statements();
    assert_eq!(
        validate(&graph, &[NodeId::new(5)]),
        Err(GraphError::UnknownRoot { index: 5 })
    );
}
