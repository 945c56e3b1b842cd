//! Output writers.

use std::collections::BTreeMap;
use std::path::Path;

use fig_ir::Primitive;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::Error;

/// Formats an exported environment can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    /// Match a format name as given on the command line, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

/// Pretty-printed JSON with four-space indentation.
pub fn to_json(data: &BTreeMap<String, Primitive>) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    data.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn to_yaml(data: &BTreeMap<String, Primitive>) -> Result<String, Error> {
    Ok(serde_yaml::to_string(data)?)
}

pub fn write_json(data: &BTreeMap<String, Primitive>, path: &Path) -> Result<(), Error> {
    let json = to_json(data)?;
    write_file(path, &json)
}

pub fn write_yaml(data: &BTreeMap<String, Primitive>, path: &Path) -> Result<(), Error> {
    let yaml = to_yaml(data)?;
    write_file(path, &yaml)
}

// Encoding happens before this, so a failed encode leaves `path` untouched.
fn write_file(path: &Path, contents: &str) -> Result<(), Error> {
    std::fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `data` to `path` in `format`.
pub fn write_output(
    format: OutputFormat,
    data: &BTreeMap<String, Primitive>,
    path: &Path,
) -> Result<(), Error> {
    debug!(
        format = format.name(),
        path = %path.display(),
        bindings = data.len(),
        "writing output"
    );
    match format {
        OutputFormat::Json => write_json(data, path),
        OutputFormat::Yaml => write_yaml(data, path),
    }
}
