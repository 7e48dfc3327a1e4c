//! Structured output rendering.
//!
//! Commands build a serializable value and hand it here; nothing else in
//! the binary knows about serialization formats.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::args::OutputFormat;

/// Render `value` in the requested format, always ending with a newline.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to render YAML")?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to render JSON")?
        }
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
