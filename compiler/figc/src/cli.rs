//! Command-line parsing for the `fig` binary.

use std::path::PathBuf;

use crate::OutputFormat;

pub const USAGE: &str = "\
Usage: fig [options] <program.fig> [more.fig ...]

Programs run in order, each one starting from the bindings the previous
ones left behind.

Options:
  -json <file>   Write the final bindings to <file> as JSON
  -yaml <file>   Write the final bindings to <file> as YAML
  -h, -help      Show this message

Flags may use one or two dashes and any case. Set RUST_LOG to trace
evaluation, e.g. RUST_LOG=fig_eval=debug.";

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(CliOptions),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Requested outputs, in the order given.
    pub outputs: Vec<(OutputFormat, PathBuf)>,
    pub programs: Vec<PathBuf>,
}

/// Parse arguments, not including the program name.
///
/// Flags come first; the first argument not starting with `-` begins the
/// list of program files.
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = CliOptions::default();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        let Some(flag) = arg.strip_prefix('-') else {
            break;
        };
        let flag = flag.strip_prefix('-').unwrap_or(flag).to_ascii_lowercase();

        if flag == "h" || flag == "help" {
            return Ok(Command::Help);
        }
        let Some(format) = OutputFormat::from_name(&flag) else {
            return Err(format!("unknown flag `{arg}`"));
        };
        let Some(path) = args.get(i + 1) else {
            return Err(format!("`{arg}` needs an output file"));
        };
        options.outputs.push((format, PathBuf::from(path)));
        i += 2;
    }

    options.programs = args[i..].iter().map(PathBuf::from).collect();
    if options.programs.is_empty() {
        return Err("no program files given".to_string());
    }
    Ok(Command::Run(options))
}
