use super::*;

#[test]
fn test_format_number() {
    assert_eq!(format_number(5.0), "5");
    assert_eq!(format_number(-3.0), "-3");
    assert_eq!(format_number(2.5), "2.5");
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn test_field_value_text() {
    assert_eq!(FieldValue::from("abc").as_text(), "abc");
    assert_eq!(FieldValue::from(12.0).as_text(), "12");
    assert_eq!(FieldValue::Bool(true).as_text(), "TRUE");
}

#[test]
fn test_field_value_number() {
    assert_eq!(FieldValue::from(" 7 ").as_number(), Some(7.0));
    assert_eq!(FieldValue::from("seven").as_number(), None);
    assert_eq!(FieldValue::Bool(false).as_number(), None);
}

#[test]
fn test_slot_list_keeps_order_and_replaces() {
    let mut slots = SlotList::new();
    slots.set("B", Some(NodeId::new(1)));
    slots.set("A", None);
    slots.set("B", Some(NodeId::new(2)));

    let names: Vec<_> = slots.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
    assert_eq!(slots.target("B"), Some(NodeId::new(2)));
    assert!(slots.contains("A"));
    assert_eq!(slots.target("A"), None);
    assert!(!slots.contains("C"));
}

#[test]
fn test_node_successor_order() {
    let mut node = Node::statement("controls_if");
    node.values.set("IF0", Some(NodeId::new(1)));
    node.statements.set("DO0", Some(NodeId::new(2)));
    node.next = Some(NodeId::new(3));

    let succ: Vec<_> = node.successors().collect();
    assert_eq!(succ, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
}

#[test]
fn test_empty_comment_is_none() {
    let node = Node::statement("finish_block").with_comment("");
    assert_eq!(node.comment(), None);
    let node = Node::statement("finish_block").with_comment("done");
    assert_eq!(node.comment(), Some("done"));
}

#[test]
fn test_field_text_missing_is_empty() {
    let node = Node::statement("module_dec").with_field("modName", "top");
    assert_eq!(node.field_text("modName"), "top");
    assert_eq!(node.field_text("varNames"), "");
}
