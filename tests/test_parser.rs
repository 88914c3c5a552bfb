use staticd::http::parser::{ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.uri.as_deref(), Some("/"));
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_ignores_headers_and_body() {
    let req = b"POST /api HTTP/1.1\r\nHost: localhost\r\nContent-Length: 5\r\n\r\nhello";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, "POST");
    assert_eq!(parsed.uri.as_deref(), Some("/api"));
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_keeps_query_string() {
    let req = b"GET /search?q=rust HTTP/1.1\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.uri.as_deref(), Some("/search?q=rust"));
}

#[test]
fn test_parse_missing_version_defaults() {
    let parsed = parse_request_line(b"GET /index.html\r\n\r\n").unwrap();

    assert_eq!(parsed.uri.as_deref(), Some("/index.html"));
    assert_eq!(parsed.version, "1.1");
}

#[test]
fn test_parse_method_only() {
    let parsed = parse_request_line(b"GET\r\n\r\n").unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.uri, None);
    assert_eq!(parsed.version, "1.1");
}

#[test]
fn test_parse_empty_input() {
    let parsed = parse_request_line(b"").unwrap();

    assert_eq!(parsed.method, "");
    assert_eq!(parsed.uri, None);
    assert_eq!(parsed.version, "1.1");
}

#[test]
fn test_parse_blank_request_line() {
    let parsed = parse_request_line(b"\r\nHost: example.com\r\n\r\n").unwrap();

    assert_eq!(parsed.method, "");
    assert_eq!(parsed.uri, None);
}

#[test]
fn test_parse_does_not_validate_method() {
    let parsed = parse_request_line(b"BREW /pot HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, "BREW");
}

#[test]
fn test_parse_splits_on_single_spaces() {
    let parsed = parse_request_line(b"GET  /a HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.uri.as_deref(), Some(""));
    assert_eq!(parsed.version, "/a");
}

#[test]
fn test_parse_extra_tokens_ignored() {
    let parsed = parse_request_line(b"GET / HTTP/1.1 trailing\r\n\r\n").unwrap();

    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_invalid_utf8() {
    let result = parse_request_line(b"GET /\xff\xfe HTTP/1.1\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidEncoding)));
}

#[test]
fn test_parse_invalid_bytes_after_request_line_are_ignored() {
    let parsed = parse_request_line(b"GET / HTTP/1.1\r\n\xff\xff\r\n\r\n").unwrap();

    assert_eq!(parsed.method, "GET");
}
