/// HTTP request methods, as far as routing cares about them.
///
/// Only GET is served. POST is recognised so it can be answered with
/// 405 Method Not Allowed; everything else, including an empty method,
/// falls into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// POST - Rejected with 405
    Post,
    /// Any other token, including the empty string
    Other,
}

/// Represents a parsed HTTP request line.
///
/// Only the first line of the request is parsed; header lines and any body
/// the client sends are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token exactly as sent (may be empty)
    pub method: String,
    /// The request target, if the request line had one
    pub uri: Option<String>,
    /// Protocol version token, "1.1" when the request line omits it
    pub version: String,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: String,
    uri: Option<String>,
    version: Option<String>,
}

pub const DEFAULT_VERSION: &str = "1.1";

impl Method {
    /// Classifies a method token.
    ///
    /// Matching is case-sensitive, as in HTTP.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::Get);
    /// assert_eq!(Method::from_token("get"), Method::Other);
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            _ => Method::Other,
        }
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: String::new(),
            uri: None,
            version: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            uri: self.uri,
            version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Returns the routing class of the method token.
    pub fn method(&self) -> Method {
        Method::from_token(&self.method)
    }

    /// Returns the request target, treating a missing URI as "/".
    pub fn path(&self) -> &str {
        self.uri.as_deref().unwrap_or("/")
    }
}
