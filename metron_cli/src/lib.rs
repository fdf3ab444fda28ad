// Library half of the `metron` command-line tool.
//
// The binary (`main.rs`) only installs logging, calls `parse_args`, and
// prints whatever `run` returns. The pipeline itself lives here, where the
// integration tests call it directly.
//
// Modules:
// - `args.rs`:   `Options` and the hand-rolled flag parser
// - `error.rs`:  `CliError`
// - `report.rs`: `PoemReport`: scansion and rhyme results joined per line,
//                plus the plain-text table renderer

pub mod args;
pub mod error;
pub mod report;

use std::io::Read;

use metron_rhyme::classify_rhyme_type;
use metron_scansion::{ScanConfig, Scanner};
use serde::Serialize;

pub use args::{Options, parse_args};
pub use error::CliError;
pub use report::{LineReport, PoemReport, build_report, render_text};

/// Result of `--pair`.
#[derive(Debug, Serialize)]
struct PairReport<'a> {
    a: &'a str,
    b: &'a str,
    rhyme_type: metron_rhyme::RhymeType,
    name: &'static str,
}

/// Resolve the scan config from `--config` and `--catalog`.
pub fn resolve_config(options: &Options) -> Result<ScanConfig, CliError> {
    let mut config = match &options.config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading scan config");
            ScanConfig::load(path)?
        }
        None => ScanConfig::default(),
    };
    if let Some(catalog) = &options.catalog_path {
        config.catalog_path = Some(catalog.clone());
    }
    Ok(config)
}

fn read_input(options: &Options) -> Result<String, CliError> {
    match &options.input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::Stdin)?;
            Ok(text)
        }
    }
}

/// Execute one invocation and return the text to print on stdout.
pub fn run(options: &Options) -> Result<String, CliError> {
    if let Some((a, b)) = &options.pair {
        let rhyme_type = classify_rhyme_type(a, b);
        return if options.json {
            Ok(serde_json::to_string_pretty(&PairReport {
                a,
                b,
                rhyme_type,
                name: rhyme_type.name(),
            })?)
        } else {
            Ok(format!("{a} / {b}: {rhyme_type}"))
        };
    }

    let scanner = Scanner::from_config(resolve_config(options)?)?;
    let text = read_input(options)?;
    let report = build_report(&scanner, &text);
    tracing::debug!(lines = report.lines.len(), scheme = %report.rhyme.scheme_name, "poem analyzed");

    if options.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(render_text(&report))
    }
}
