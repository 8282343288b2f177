//! The default mode: graph document in, Verilog out.

use vgen_codegen::{generate, CodegenConfig};
use vgen_ir::parse_document;

use super::read_input;
use crate::{CliError, Options};

/// Generate Verilog from the text of a graph document.
#[tracing::instrument(level = "debug", skip_all)]
pub fn generate_source(text: &str, config: &CodegenConfig) -> Result<String, CliError> {
    let loaded = parse_document(text)?;
    tracing::debug!(
        nodes = loaded.graph.len(),
        roots = loaded.roots.len(),
        "loaded graph"
    );
    Ok(generate(&loaded.graph, &loaded.roots, config)?)
}

/// Read `options.input` and generate Verilog from it.
pub fn generate_file(options: &Options) -> Result<String, CliError> {
    let text = read_input(&options.input)?;
    generate_source(&text, &options.config)
}
