use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_safe_name() {
    assert_eq!(safe_name("count"), "count");
    assert_eq!(safe_name("my count"), "my_count");
    assert_eq!(safe_name("a-b.c"), "a_b_c");
    assert_eq!(safe_name(""), "unnamed");
    assert_eq!(safe_name("4bits"), "my_4bits");
    assert_eq!(safe_name("é"), "_C3_A9");
}

#[test]
fn test_safe_name_escapes_unsafe_ascii() {
    assert_eq!(safe_name("a\"b"), "a_22b");
    assert_eq!(safe_name("a<b"), "a_3Cb");
    assert_eq!(safe_name("bus[3]"), "bus_5B3_5D");
    assert_eq!(safe_name("50%"), "my_50_25");
    assert_eq!(safe_name("a\tb"), "a_09b");
    assert_eq!(safe_name("a(b)#c"), "a_b__c");

    let mut names = NameAllocator::new();
    assert_eq!(names.allocate(NameSpace::Variable, "v1", "a\"b"), "a_22b");
    assert_eq!(names.allocate(NameSpace::Variable, "v2", "a<b"), "a_3Cb");
}

#[test]
fn test_allocate_is_idempotent() {
    let mut names = NameAllocator::new();
    let first = names.allocate(NameSpace::Variable, "v1", "count");
    let second = names.allocate(NameSpace::Variable, "v1", "something else");
    assert_eq!(first, "count");
    assert_eq!(second, "count");
    assert_eq!(names.lookup(NameSpace::Variable, "v1"), Some("count"));
}

#[test]
fn test_collisions_get_numeric_suffix() {
    let mut names = NameAllocator::new();
    assert_eq!(names.allocate(NameSpace::Variable, "v1", "x"), "x");
    assert_eq!(names.allocate(NameSpace::Variable, "v2", "x"), "x2");
    assert_eq!(names.allocate(NameSpace::Variable, "v3", "x"), "x3");
    assert_eq!(names.allocate(NameSpace::Developer, "v1", "x"), "x4");
}

#[test]
fn test_keywords_are_avoided() {
    let mut names = NameAllocator::new();
    assert_eq!(names.allocate(NameSpace::Variable, "v1", "wire"), "wire2");
    assert_eq!(names.allocate(NameSpace::Variable, "v2", "module"), "module2");
    // Membership is case-sensitive.
    assert_eq!(names.allocate(NameSpace::Variable, "v3", "Wire"), "Wire");
}

#[test]
fn test_suffix_skips_taken_names() {
    let mut names = NameAllocator::new();
    names.allocate(NameSpace::Variable, "a", "reg2");
    assert_eq!(names.allocate(NameSpace::Variable, "b", "reg"), "reg3");
}

#[test]
fn test_extra_reserved_words() {
    let mut names = NameAllocator::with_reserved(["clk"]);
    assert!(names.is_reserved("clk"));
    assert_eq!(names.allocate(NameSpace::Variable, "v1", "clk"), "clk2");
}

#[test]
fn test_reset_clears_allocations() {
    let mut names = NameAllocator::with_reserved(["rst"]);
    names.allocate(NameSpace::Variable, "v1", "x");
    names.allocate(NameSpace::Variable, "v2", "x");
    assert_eq!(names.len(), 2);

    names.reset();
    assert!(names.is_empty());
    assert_eq!(names.lookup(NameSpace::Variable, "v2"), None);
    assert_eq!(names.allocate(NameSpace::Variable, "v2", "x"), "x");
    assert!(names.is_reserved("rst"));
}

#[test]
fn test_keyword_list() {
    assert!(is_keyword("always"));
    assert!(is_keyword("strong0"));
    assert!(is_keyword("strong1"));
    assert!(is_keyword("Verilog"));
    assert!(!is_keyword("count"));
}
