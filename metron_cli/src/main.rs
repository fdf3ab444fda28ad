// CLI entry point for Metron.
//
// Reads a poem from a file (or stdin), scans every non-blank line for meter,
// analyzes the rhyme scheme per stanza, and prints a table or JSON. With
// `--pair` it classifies the rhyme between two words instead. See `args.rs`
// for the flags and `report.rs` for the output layout.
//
// Diagnostics go to stderr through `tracing`; `RUST_LOG` overrides the
// default level (`warn`, or `debug` with `--verbose`).

use metron_cli::args::USAGE;
use metron_cli::{parse_args, run};
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if options.help {
        println!("{USAGE}");
        return;
    }

    init_tracing(options.verbose);

    match run(&options) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
