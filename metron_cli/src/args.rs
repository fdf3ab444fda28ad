// Command-line flags for `metron`.
//
// Plain `std::env::args()` matching, no argument-parsing crate. The parser
// takes the arguments after the program name and returns `Options`; the
// binary decides how to report errors.

use std::path::PathBuf;

use crate::error::CliError;

pub const USAGE: &str = "\
Usage: metron [OPTIONS] [FILE]

Scans FILE (or stdin) line by line and reports meter and rhyme.

Options:
  --json                    Emit the report as JSON
  --config <PATH>           Scan config JSON
  --catalog <PATH>          Verse-form catalog JSON (overrides the config)
  --pair <WORD_A> <WORD_B>  Classify the rhyme between two words instead
  --verbose, -v             Debug diagnostics on stderr
  --help, -h                Show this help";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub json: bool,
    pub verbose: bool,
    pub help: bool,
    pub config_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub pair: Option<(String, String)>,
    /// Poem file; stdin when absent.
    pub input: Option<PathBuf>,
}

fn value<'a>(args: &'a [String], i: usize, flag: &str, what: &'static str) -> Result<&'a str, CliError> {
    args.get(i).map(String::as_str).ok_or_else(|| CliError::MissingValue {
        flag: flag.to_string(),
        what,
    })
}

/// Parse the arguments that follow the program name.
pub fn parse_args(args: &[String]) -> Result<Options, CliError> {
    let mut options = Options::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--json" => options.json = true,
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => options.help = true,
            "--config" => {
                i += 1;
                options.config_path = Some(value(args, i, "--config", "a path")?.into());
            }
            "--catalog" => {
                i += 1;
                options.catalog_path = Some(value(args, i, "--catalog", "a path")?.into());
            }
            "--pair" => {
                let a = value(args, i + 1, "--pair", "two words")?;
                let b = value(args, i + 2, "--pair", "two words")?;
                options.pair = Some((a.to_string(), b.to_string()));
                i += 2;
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::UnknownArgument(other.to_string()));
            }
            path => {
                if options.input.is_some() {
                    return Err(CliError::ExtraInput(path.to_string()));
                }
                // A lone "-" means stdin, which is also the default.
                if path != "-" {
                    options.input = Some(path.into());
                }
            }
        }
        i += 1;
    }

    Ok(options)
}
