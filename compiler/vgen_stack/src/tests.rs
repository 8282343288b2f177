use super::*;

/// A chain of nested nodes, one frame each.
fn depth(n: u64) -> u64 {
    ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
}

#[test]
fn test_shallow_nesting() {
    assert_eq!(depth(10), 10);
}

#[test]
fn test_deep_nesting() {
    assert_eq!(depth(100_000), 100_000);
}

#[test]
fn test_passes_result_through() {
    let result: Result<&str, String> = ensure_sufficient_stack(|| Ok("module top();"));
    assert_eq!(result, Ok("module top();"));
}
