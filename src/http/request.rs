use crate::http::headers::HeaderBlock;

/// HTTP request methods.
///
/// Only GET is served; every other verb parses as `Unsupported` and is
/// answered with 400 Bad Request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Unsupported,
}

impl Method {
    /// Matches the method token case-insensitively against "GET".
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("GET") {
            Method::Get
        } else {
            Method::Unsupported
        }
    }
}

/// HTTP protocol versions the server recognizes.
///
/// Anything other than HTTP/1.0 or HTTP/1.1 (matched case-insensitively)
/// is `Unknown` and serializes as the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Version {
    Http10,
    Http11,
    #[default]
    Unknown,
}

impl Version {
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "HTTP/1.0" => Version::Http10,
            "HTTP/1.1" => Version::Http11,
            _ => Version::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
            Version::Unknown => "",
        }
    }
}

/// The path and query portion of a request line.
///
/// Built by splitting the URI token once on `?`; the raw query (if any)
/// splits on `&` and each pair once on `=`. Duplicate keys overwrite the
/// earlier value in place. No percent-decoding is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUri {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Default for RequestUri {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            query: Vec::new(),
        }
    }
}

impl RequestUri {
    pub fn parse(uri: &str) -> Self {
        if uri.is_empty() {
            return Self::default();
        }

        let mut parsed = Self::default();

        match uri.split_once('?') {
            Some((path, raw_query)) => {
                parsed.path = path.to_string();
                for pair in raw_query.split('&') {
                    let (key, value) = match pair.split_once('=') {
                        Some((k, v)) => (k, v),
                        None => (pair, ""),
                    };
                    if let Some(entry) =
                        parsed.query.iter_mut().find(|(k, _)| k == key)
                    {
                        entry.1 = value.to_string();
                    } else {
                        parsed.query.push((key.to_string(), value.to_string()));
                    }
                }
            }
            None => {
                parsed.path = uri.to_string();
            }
        }

        parsed
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// The first line of an HTTP request.
///
/// Constructed from any non-empty line: the line is split on single spaces
/// into at most three tokens. Only the method token is guaranteed; a
/// missing URI leaves the path at "/" and a missing or unrecognized
/// version leaves [`Version::Unknown`]. Construction never fails.
#[derive(Debug, Clone)]
pub struct RequestLine {
    pub method: Method,
    /// The method token exactly as received, for display.
    pub raw_method: String,
    pub uri: RequestUri,
    pub version: Version,
}

impl RequestLine {
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.splitn(3, ' ');

        // splitn always yields at least one (possibly empty) token
        let raw_method = tokens.next().unwrap_or_default().to_string();
        let method = Method::from_token(&raw_method);

        let uri = match tokens.next() {
            Some(token) => RequestUri::parse(token),
            None => RequestUri::default(),
        };

        let version = match tokens.next() {
            Some(token) => Version::from_token(token),
            None => Version::Unknown,
        };

        Self {
            method,
            raw_method,
            uri,
            version,
        }
    }
}

/// A parsed HTTP request: one request line plus one header block.
///
/// Immutable after construction by [`crate::http::parser::parse_request`].
#[derive(Debug, Clone)]
pub struct Request {
    pub line: RequestLine,
    pub headers: HeaderBlock,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}
