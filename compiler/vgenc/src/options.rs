//! Command-line options.

use std::path::PathBuf;

use vgen_codegen::CodegenConfig;

use crate::CliError;

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Graph document path, `-` for stdin.
    pub input: String,
    /// Output path; stdout when absent.
    pub output: Option<PathBuf>,
    pub config: CodegenConfig,
    /// Validate only, generate nothing.
    pub check_only: bool,
}

/// Parse the arguments after the program name.
///
/// `-o` takes the next argument; every other option uses `--name=value`.
pub fn parse_args(args: &[String]) -> Result<Options, CliError> {
    let mut input = None;
    let mut output = None;
    let mut config = CodegenConfig::default();
    let mut check_only = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-o" {
            let Some(path) = args.get(i + 1) else {
                return Err(CliError::Usage("-o needs a path".to_string()));
            };
            output = Some(PathBuf::from(path));
            i += 2;
            continue;
        }

        if let Some(n) = arg.strip_prefix("--indent=") {
            config.indent = " ".repeat(parse_count("--indent", n)?);
        } else if let Some(n) = arg.strip_prefix("--comment-wrap=") {
            config.comment_wrap = parse_count("--comment-wrap", n)?;
        } else if let Some(scale) = arg.strip_prefix("--timescale=") {
            if scale.is_empty() {
                return Err(CliError::Usage("--timescale needs a value".to_string()));
            }
            config.timescale = Some(scale.to_string());
        } else if let Some(words) = arg.strip_prefix("--reserve=") {
            config.reserved_words.extend(
                words
                    .split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(String::from),
            );
        } else if arg == "--check" {
            check_only = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else if input.is_none() {
            input = Some(arg.to_string());
        } else {
            return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
        }
        i += 1;
    }

    let Some(input) = input else {
        return Err(CliError::Usage("missing graph document".to_string()));
    };
    Ok(Options {
        input,
        output,
        config,
        check_only,
    })
}

fn parse_count(flag: &str, value: &str) -> Result<usize, CliError> {
    value
        .parse()
        .map_err(|_| CliError::Usage(format!("{flag} expects a number, got '{value}'")))
}
