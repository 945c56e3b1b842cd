//! Fig: a small Lisp-like language for computing configuration.
//!
//! This crate ties the pipeline together (source text → tokens → forms →
//! evaluated environment), runs several programs in sequence through a
//! [`Session`], and turns the final environment into the mapping handed to
//! output writers ([`export`]).
//!
//! ```ignore
//! let mut session = figc::Session::new();
//! session.run("base.fig", "(define (port 8080))")?;
//! session.run("prod.fig", "(define (url (concat 'http://host:' 'x')))")?;
//! let json = figc::to_json(&session.export())?;
//! ```

mod cli;
mod error;
mod export;
mod output;
mod session;
mod tracing_setup;

use fig_ir::Form;

pub use cli::{parse_args, CliOptions, Command, USAGE};
pub use error::Error;
pub use export::export;
pub use output::{to_json, to_yaml, write_json, write_output, write_yaml, OutputFormat};
pub use session::{ProgramOutcome, Session};
pub use tracing_setup::init_tracing;

/// Lex and parse a whole program.
pub fn parse_source(source: &str) -> Result<Vec<Form>, Error> {
    let tokens = fig_lexer::lex(source)?;
    Ok(fig_parse::parse(&tokens)?)
}
