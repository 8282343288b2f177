//! Command-line driver for the block-to-Verilog generator.
//!
//! Reads a JSON graph document, runs the generator with the built-in
//! handlers and writes the Verilog text to a file or stdout.

pub mod commands;
mod error;
mod options;

pub use error::CliError;
pub use options::{parse_args, Options};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only does anything when `RUST_LOG` is set; spans are printed as a tree on
/// stderr so nested handler calls line up with the graph.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        }
    });
}
