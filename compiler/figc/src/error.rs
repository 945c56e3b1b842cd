//! Errors surfaced by the driver.

use std::io;
use std::path::PathBuf;

use fig_eval::EvalError;
use fig_lexer::LexError;
use fig_parse::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Eval(#[from] EvalError),

    #[error("couldn't open program file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("couldn't write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("couldn't encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("couldn't encode output as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
