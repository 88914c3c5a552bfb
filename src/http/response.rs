use crate::http::encoding;
use crate::http::headers::Headers;
use crate::http::mime;

/// HTTP status codes the server answers with.
///
/// - `Ok` (200): File served
/// - `Forbidden` (403): Path escapes the document root
/// - `NotFound` (404): No such file
/// - `MethodNotAllowed` (405): POST
/// - `InternalServerError` (500): File could not be read or encoded
/// - `NotImplemented` (501): Any other method
///
/// Codes outside this set are carried as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
    /// Any other code
    Unknown(u16),
}

impl StatusCode {
    pub fn from_u16(code: u16) -> Self {
        match code {
            200 => StatusCode::Ok,
            403 => StatusCode::Forbidden,
            404 => StatusCode::NotFound,
            405 => StatusCode::MethodNotAllowed,
            500 => StatusCode::InternalServerError,
            501 => StatusCode::NotImplemented,
            other => StatusCode::Unknown(other),
        }
    }

    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
            StatusCode::Unknown(code) => *code,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// assert_eq!(StatusCode::from_u16(299).reason_phrase(), "Unknown Status Code");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
            StatusCode::Unknown(_) => "Unknown Status Code",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in the order they are written
    pub headers: Headers,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// Headers set on the builder override the defaults it was created with.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok, &defaults)
///     .header("Content-Type", "application/json")
///     .sized_body(b"{}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder<'a> {
    status: StatusCode,
    defaults: &'a Headers,
    overrides: Headers,
    body: Vec<u8>,
}

pub const NOT_FOUND_BODY: &[u8] = b"<h1>404 Page Not Found</h1>";
pub const FORBIDDEN_BODY: &[u8] = b"<h1>403 Forbidden</h1>";
pub const METHOD_NOT_ALLOWED_BODY: &[u8] = b"<h1>405 Method Not Allowed</h1>";
pub const NOT_IMPLEMENTED_BODY: &[u8] = b"<h1>501 Not Implemented</h1>";
pub const INTERNAL_ERROR_BODY: &[u8] = b"<h1>500 Internal Server Error</h1>";

impl<'a> ResponseBuilder<'a> {
    /// Creates a new response builder on top of a default header set.
    pub fn new(status: StatusCode, defaults: &'a Headers) -> Self {
        Self {
            status,
            defaults,
            overrides: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key, value);
        self
    }

    /// Sets the response body without touching the headers.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Sets the response body and a matching Content-Length.
    pub fn sized_body(self, body: Vec<u8>) -> Self {
        let len = body.len();
        self.header("Content-Length", len.to_string()).body(body)
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.defaults.merged(&self.overrides),
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 response carrying a file's contents.
    ///
    /// Bodies of compressible types are gzip-encoded, in which case
    /// Content-Length is the compressed size.
    pub fn file(
        defaults: &Headers,
        content_type: &str,
        contents: Vec<u8>,
    ) -> std::io::Result<Self> {
        let compress = mime::is_compressible(content_type);
        let body = if compress {
            encoding::gzip(&contents)?
        } else {
            contents
        };

        let mut builder = ResponseBuilder::new(StatusCode::Ok, defaults)
            .header("Content-Type", content_type)
            .sized_body(body)
            .header("Connection", "close");
        if compress {
            builder = builder.header("Content-Encoding", "gzip");
        }

        Ok(builder.build())
    }

    /// Creates a 404 Not Found response.
    pub fn not_found(defaults: &Headers) -> Self {
        Self::error_page(StatusCode::NotFound, defaults, NOT_FOUND_BODY)
    }

    /// Creates a 403 Forbidden response.
    pub fn forbidden(defaults: &Headers) -> Self {
        Self::error_page(StatusCode::Forbidden, defaults, FORBIDDEN_BODY)
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error(defaults: &Headers) -> Self {
        Self::error_page(StatusCode::InternalServerError, defaults, INTERNAL_ERROR_BODY)
    }

    /// Creates a 405 response advertising GET as the only allowed method.
    pub fn method_not_allowed(defaults: &Headers) -> Self {
        ResponseBuilder::new(StatusCode::MethodNotAllowed, defaults)
            .header("Allow", "GET")
            .body(METHOD_NOT_ALLOWED_BODY.to_vec())
            .build()
    }

    /// Creates a 501 response with the default headers only.
    pub fn not_implemented(defaults: &Headers) -> Self {
        ResponseBuilder::new(StatusCode::NotImplemented, defaults)
            .body(NOT_IMPLEMENTED_BODY.to_vec())
            .build()
    }

    fn error_page(status: StatusCode, defaults: &Headers, body: &[u8]) -> Self {
        ResponseBuilder::new(status, defaults)
            .header("Content-Type", "text/html")
            .sized_body(body.to_vec())
            .header("Connection", "close")
            .build()
    }
}
