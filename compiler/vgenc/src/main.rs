//! `vgen`: generate Verilog from a block graph document.

use vgenc::commands::{check_file, generate_file, write_output};
use vgenc::{init_tracing, parse_args, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => {
            print_usage();
            std::process::exit(1);
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            return;
        }
        Some("version" | "--version" | "-V") => {
            println!("vgen {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Some(_) => {}
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("Run `vgen --help` for usage.");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(options: &vgenc::Options) -> Result<(), CliError> {
    if options.check_only {
        println!("{}", check_file(&options.input)?);
        return Ok(());
    }

    let code = generate_file(options)?;
    match &options.output {
        Some(path) => write_output(path, &code),
        None => {
            print!("{code}");
            Ok(())
        }
    }
}

fn print_usage() {
    println!("vgen - block graph to Verilog generator");
    println!();
    println!("Usage: vgen <graph.json | -> [options]");
    println!();
    println!("Options:");
    println!("  -o <path>            Write Verilog to a file (default: stdout)");
    println!("  --indent=<n>         Spaces per nesting level (default: 2)");
    println!("  --comment-wrap=<n>   Comment line width (default: 60)");
    println!("  --timescale=<scale>  Emit `timescale <scale> for delay statements");
    println!("  --reserve=<a,b,...>  Extra names never given to variables");
    println!("  --check              Validate the graph only");
    println!("  help, --help         Show this help message");
    println!("  version, --version   Show version information");
    println!();
    println!("Set RUST_LOG=vgen_codegen=trace to trace handler dispatch.");
    println!();
    println!("Examples:");
    println!("  vgen design.json -o design.v");
    println!("  vgen - --timescale=1ns/1ps < testbench.json");
    println!("  vgen design.json --check");
}
