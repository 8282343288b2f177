//! End-to-end generation over complete graphs.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use vgen_codegen::{
    generate, generate_with, CodegenConfig, CodegenError, HandlerRegistry, Precedence,
};
use vgen_ir::{parse_document, GraphError, LoadedGraph, Node, NodeGraph};

fn load(json: &str) -> LoadedGraph {
    parse_document(json).unwrap()
}

fn render(json: &str) -> String {
    let loaded = load(json);
    generate(&loaded.graph, &loaded.roots, &CodegenConfig::default()).unwrap()
}

#[test]
fn full_module() {
    let out = render(
        r#"{
          "variables": [{ "id": "v_y", "name": "y" }],
          "nodes": [
            { "id": "m", "kind": "module_dec",
              "fields": { "modName": "half_adder", "varNames": "a, b, y" }, "next": "a" },
            { "id": "a", "kind": "input_block", "fields": { "NAME": "a" }, "next": "b" },
            { "id": "b", "kind": "input_block", "fields": { "NAME": "b" }, "next": "y" },
            { "id": "y", "kind": "output_block", "fields": { "NAME": "y" }, "next": "g" },
            { "id": "g", "kind": "xor_block",
              "fields": { "gName": "x1", "oName": "y" },
              "values": { "arg1": "ra", "arg2": "rb" }, "next": "as" },
            { "id": "ra", "kind": "bit_select", "output": true, "values": { "NAME": null, "number": null } },
            { "id": "rb", "kind": "one", "output": true },
            { "id": "as", "kind": "assign_block", "fields": { "var": "v_y" },
              "values": { "NAME": "op" }, "comment": "drive the output", "next": "end" },
            { "id": "op", "kind": "logic_operation3", "output": true,
              "fields": { "OP": "Xor" }, "values": { "A": null, "B": "rb2" } },
            { "id": "rb2", "kind": "zero", "output": true },
            { "id": "end", "kind": "end_module" }
          ]
        }"#,
    );
    assert_eq!(
        out,
        "module half_adder (a, b, y);\n\
         input a;\n\
         input b;\n\
         output y;\n\
         xor x1 (y, X[0], 1);\n\
         // drive the output\n\
         assign y = 0 ^ 0;\n\
         endmodule\n"
    );
}

#[test]
fn word_and_with_no_inputs() {
    let out = render(
        r#"{ "nodes": [
          { "id": "and", "kind": "logic_operation_2", "output": true, "fields": { "OP": "AND" } }
        ] }"#,
    );
    assert_eq!(out, "0 and 0;\n");
}

#[test]
fn radix_conversions_of_five() {
    for (kind, expected) in [
        ("decimal_binary_return", "3'b101;\n"),
        ("decimal_hexa_return", "3'h5;\n"),
        ("decimal_octal_return", "3'o5;\n"),
    ] {
        let json = format!(
            r#"{{ "nodes": [
              {{ "id": "c", "kind": "{kind}", "output": true, "values": {{ "number": "n" }} }},
              {{ "id": "n", "kind": "math_number", "output": true, "fields": {{ "NUM": 5 }} }}
            ] }}"#
        );
        assert_eq!(render(&json), expected, "{kind}");
    }
}

#[test]
fn radix_conversion_of_text() {
    let out = render(
        r#"{
          "variables": [{ "id": "v", "name": "sig" }],
          "nodes": [
            { "id": "c", "kind": "decimal_binary_return", "output": true, "values": { "number": "n" } },
            { "id": "n", "kind": "variables_get", "output": true, "fields": { "VAR": "v" } }
          ]
        }"#,
    );
    assert_eq!(out, "1'bx;\n");
}

#[test]
fn chain_is_emitted_in_order() {
    let out = render(
        r#"{ "nodes": [
          { "id": "A", "kind": "display_block", "fields": { "text": "A" }, "next": "B" },
          { "id": "B", "kind": "display_block", "fields": { "text": "B" }, "next": "C" },
          { "id": "C", "kind": "display_block", "fields": { "text": "C" } }
        ] }"#,
    );
    assert_eq!(out, "$display(\"A\");\n$display(\"B\");\n$display(\"C\");\n");
}

#[test]
fn declaration_defined_twice_appears_once_before_body() {
    let mut registry = HandlerRegistry::with_builtins();
    registry.register_expression("clock_ref", |ctx, _| {
        ctx.define("clock", "reg clk = 0;\nalways #5 clk = ~clk;");
        Ok(("clk".to_string(), Precedence::Atomic))
    });

    let loaded = load(
        r#"{ "nodes": [
          { "id": "e1", "kind": "pos_edge", "output": true, "values": { "NAME": "c1" } },
          { "id": "c1", "kind": "clock_ref", "output": true },
          { "id": "e2", "kind": "neg_edge", "output": true, "values": { "NAME": "c2" } },
          { "id": "c2", "kind": "clock_ref", "output": true }
        ] }"#,
    );
    let out = generate_with(
        &loaded.graph,
        &loaded.roots,
        &registry,
        &CodegenConfig::default(),
    )
    .unwrap();
    assert_eq!(
        out,
        "reg clk = 0;\nalways #5 clk = ~clk;\n\n\nposedge clk;\n\nnegedge clk;\n"
    );
}

#[test]
fn two_passes_are_identical() {
    let loaded = load(
        r#"{
          "variables": [{ "id": "v1", "name": "wire" }, { "id": "v2", "name": "wire" }],
          "nodes": [
            { "id": "d", "kind": "time_block", "values": { "arg1": null },
              "statements": { "arg2": "s1" } },
            { "id": "s1", "kind": "variables_set_parallel", "fields": { "var": "v2" }, "next": "s2" },
            { "id": "s2", "kind": "variables_set_parallel", "fields": { "var": "v1" } }
          ]
        }"#,
    );
    let config = CodegenConfig::default().with_timescale("1ns/1ns");
    let first = generate(&loaded.graph, &loaded.roots, &config).unwrap();
    let second = generate(&loaded.graph, &loaded.roots, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first,
        "`timescale 1ns/1ns\n\n\n#1\n  wire3 <= X;\n  wire2 <= X;\n"
    );
}

#[test]
fn unsupported_kind_is_an_error() {
    let loaded = load(r#"{ "nodes": [ { "id": "q", "kind": "quantum_gate" } ] }"#);
    let err = generate(&loaded.graph, &loaded.roots, &CodegenConfig::default()).unwrap_err();
    assert_eq!(
        err,
        CodegenError::UnsupportedKind {
            node: "q".to_string(),
            kind: "quantum_gate".to_string(),
        }
    );
}

#[test]
fn shape_mismatch_is_an_error() {
    let loaded = load(r#"{ "nodes": [ { "id": "e", "kind": "end_module", "output": true } ] }"#);
    let err = generate(&loaded.graph, &loaded.roots, &CodegenConfig::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "node 'e': kind 'end_module' is registered as statement but the node is expression"
    );
}

#[test]
fn graph_errors_pass_through() {
    let mut graph = NodeGraph::new();
    let stmt = graph.add(Node::statement("finish_block").with_key("s"));
    let parent = graph.add(Node::statement("assign_block").with_key("p"));
    graph.connect_value(parent, "NAME", stmt);
    let err = generate(&graph, &[parent], &CodegenConfig::default()).unwrap_err();
    assert_eq!(
        err,
        CodegenError::Graph(GraphError::ValueInputNotExpression {
            node: "p".to_string(),
            slot: "NAME".to_string(),
            target: "s".to_string(),
        })
    );
}
