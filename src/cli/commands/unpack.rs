use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Read};
use tracing::debug;

use crate::CourseworkError;
use crate::unpack::{unpack, unpack_bytes};

#[derive(Debug, Serialize)]
struct UnpackOutput<'a> {
    input: &'a str,
    output: &'a str,
}

/// Unpack `text`, or all of stdin when `text` is `None`.
///
/// A single trailing line terminator on stdin is dropped so that
/// `echo a4 | coursework unpack` behaves like `coursework unpack a4`.
pub fn execute_unpack_command(text: Option<&str>, json: bool) -> Result<()> {
    let (input, output) = match text {
        Some(text) => (text.to_string(), unpack(text).map_err(CourseworkError::from)?),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(CourseworkError::from)
                .context("Failed to read packed string from stdin")?;
            let bytes = strip_line_terminator(&buf);
            let output = unpack_bytes(bytes).map_err(CourseworkError::from)?;
            (String::from_utf8_lossy(bytes).into_owned(), output)
        }
    };

    debug!(
        input_chars = input.chars().count(),
        output_chars = output.chars().count(),
        "Unpacked string"
    );

    if json {
        let report = UnpackOutput {
            input: &input,
            output: &output,
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to emit unpack JSON")?;
        println!("{json}");
    } else {
        println!("{output}");
    }

    Ok(())
}

fn strip_line_terminator(bytes: &[u8]) -> &[u8] {
    match bytes.strip_suffix(b"\n") {
        Some(rest) => rest.strip_suffix(b"\r").unwrap_or(rest),
        None => bytes,
    }
}
