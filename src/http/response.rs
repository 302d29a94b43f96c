use bytes::Bytes;

use crate::http::headers::HeaderBlock;
use crate::http::request::Version;

/// HTTP status codes the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 302 Found
    Found,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Found => 302,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// Builds a status line from the request's version and this status,
    /// e.g. `HTTP/1.1 200 OK`. An unknown version leaves the version field
    /// empty, mirroring what the client sent.
    pub fn status_line(&self, version: Version) -> String {
        format!(
            "{} {} {}",
            version.as_str(),
            self.as_u16(),
            self.reason_phrase()
        )
    }
}

/// A complete HTTP response ready for serialization.
///
/// The header block stays mutable until the response is serialized (the
/// connection handler appends the `Server` signature header). The body is
/// an independent owned copy of whatever produced it.
#[derive(Debug, Clone)]
pub struct Response {
    pub status_line: String,
    pub headers: HeaderBlock,
    pub body: Bytes,
}

impl Response {
    pub fn new(status_line: String, headers: HeaderBlock, body: &[u8]) -> Self {
        Self {
            status_line,
            headers,
            body: Bytes::copy_from_slice(body),
        }
    }

    /// Empty-bodied response with no headers beyond what the handler adds.
    pub fn empty(status: StatusCode, version: Version) -> Self {
        Self::new(status.status_line(version), HeaderBlock::new(), &[])
    }

    /// Serializes to exact wire bytes:
    /// status line, CRLF, each header as `Name: Value` CRLF in insertion
    /// order, a blank line, then the body. The blank line is present even
    /// with zero headers.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf =
            Vec::with_capacity(self.status_line.len() + 4 + self.body.len());

        buf.extend_from_slice(self.status_line.as_bytes());
        buf.extend_from_slice(b"\r\n");
        buf.extend_from_slice(self.headers.to_wire_string().as_bytes());
        buf.extend_from_slice(b"\r\n");
        buf.extend_from_slice(&self.body);

        buf
    }
}
