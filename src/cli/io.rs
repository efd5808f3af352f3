//! JSON I/O handling for CLI
//!
//! - Input: one JSON document via stdin (may span lines)
//! - Output: one JSON object per line via stdout
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Read the whole of stdin as one request body
pub fn read_request() -> CliResult<String> {
    read_request_from(&mut io::stdin().lock())
}

pub(crate) fn read_request_from<R: Read>(reader: &mut R) -> CliResult<String> {
    let mut body = String::new();
    reader.read_to_string(&mut body)?;

    if body.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(body)
}

/// Write a value to stdout as a single JSON line
pub fn write_response<T: Serialize>(data: &T) -> CliResult<()> {
    write_response_to(data, &mut io::stdout().lock())
}

pub(crate) fn write_response_to<T: Serialize, W: Write>(data: &T, writer: &mut W) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, data)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SuggestionResponse;
    use crate::recommender::PlatformLabel;

    #[test]
    fn test_read_multiline_request() {
        let mut input = "{\n  \"online_onsite\": \"online\"\n}\n".as_bytes();
        let body = read_request_from(&mut input).unwrap();
        assert!(body.contains("online_onsite"));
    }

    #[test]
    fn test_empty_input_rejected() {
        let mut input = "  \n".as_bytes();
        let err = read_request_from(&mut input).unwrap_err();
        assert_eq!(err.message(), "Empty input");
    }

    #[test]
    fn test_write_one_line() {
        let mut out = Vec::new();
        write_response_to(&SuggestionResponse::new(PlatformLabel::Docker), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"suggested_platform\":\"Docker\"}\n"
        );
    }
}
