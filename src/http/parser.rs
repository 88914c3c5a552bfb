use crate::http::request::{Request, DEFAULT_VERSION};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The request line is not valid UTF-8.
    InvalidEncoding,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidEncoding => f.write_str("request line is not valid UTF-8"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses the request line out of the bytes received on a connection.
///
/// Tokens are separated by single spaces, so `"GET  /"` yields an empty URI.
/// Missing tokens are left unset rather than rejected: an empty buffer gives
/// an empty method, no URI and the default version.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let line_end = find_line_end(buf).unwrap_or(buf.len());
    let line = std::str::from_utf8(&buf[..line_end])
        .map_err(|_| ParseError::InvalidEncoding)?;

    let mut parts = line.split(' ');

    // split always yields at least one item
    let method = parts.next().unwrap_or_default().to_string();
    let uri = parts.next().map(str::to_string);
    let version = parts
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_VERSION.to_string());

    Ok(Request {
        method,
        uri,
        version,
    })
}

fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.windows(2)
        .position(|w| w == b"\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request_line(req).unwrap();

        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.uri.as_deref(), Some("/"));
        assert_eq!(parsed.version, "HTTP/1.1");
    }

    #[test]
    fn line_without_crlf_is_used_whole() {
        let parsed = parse_request_line(b"DELETE /x").unwrap();

        assert_eq!(parsed.method, "DELETE");
        assert_eq!(parsed.uri.as_deref(), Some("/x"));
        assert_eq!(parsed.version, DEFAULT_VERSION);
    }
}
