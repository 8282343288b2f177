//! The `--check` mode: load and validate without generating.

use vgen_codegen::builtin_registry;
use vgen_ir::{parse_document, validate};

use super::read_input;
use crate::CliError;

/// Validate a graph document and check every reachable kind has a handler.
///
/// Returns a one-line summary.
pub fn check_source(text: &str) -> Result<String, CliError> {
    let loaded = parse_document(text)?;
    validate(&loaded.graph, &loaded.roots)?;
    builtin_registry().check(&loaded.graph, &loaded.roots)?;
    Ok(format!(
        "{} nodes, {} roots",
        loaded.graph.len(),
        loaded.roots.len()
    ))
}

pub fn check_file(path: &str) -> Result<String, CliError> {
    let summary = check_source(&read_input(path)?)?;
    Ok(format!("OK: {path} ({summary})"))
}
