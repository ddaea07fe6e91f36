use thiserror::Error;

use crate::http::request::Request;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed request: empty request line")]
    Empty,
    #[error("Malformed request: missing request path")]
    MissingPath,
    #[error("Malformed request: missing HTTP version")]
    MissingVersion,
    #[error("Malformed request: request line is not valid UTF-8")]
    InvalidEncoding,
}

/// Parses the request line out of the bytes received from a client.
///
/// Everything after the first line feed is ignored. The method is the text
/// before the first space, the path sits between the first and second
/// space, and the version is the rest of the line.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let line = first_line(buf);

    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding)?;

    let (method, rest) = line.split_once(' ').ok_or(ParseError::MissingPath)?;
    let (path, version) = rest.split_once(' ').ok_or(ParseError::MissingVersion)?;

    Ok(Request::new(method, path, version))
}

fn first_line(buf: &[u8]) -> &[u8] {
    let line = match buf.iter().position(|&b| b == b'\n') {
        Some(end) => &buf[..end],
        None => buf,
    };

    line.strip_suffix(b"\r").unwrap_or(line)
}
