//! Interactive prompting with optional defaults.
//!
//! Reader and writer are injected so the prompt sequence can be unit-tested
//! against in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Print `label`, read one line, and fall back to `default` on blank input.
pub fn read_with_default(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    label: &str,
    default: Option<&str>,
) -> Result<String> {
    match default {
        Some(d) => write!(writer, "{label} [{d}]: ")?,
        None => write!(writer, "{label}: ")?,
    }
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(default.unwrap_or_default().to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
