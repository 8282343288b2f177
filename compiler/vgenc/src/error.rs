//! Driver errors.

use std::path::PathBuf;

use vgen_codegen::CodegenError;
use vgen_ir::GraphError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    #[error("cannot find file '{}'", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied reading '{}'", .0.display())]
    PermissionDenied(PathBuf),

    #[error("'{}' contains invalid UTF-8 data", .0.display())]
    InvalidUtf8(PathBuf),

    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error writing '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document could not be loaded into a graph.
    #[error(transparent)]
    Load(#[from] GraphError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}
