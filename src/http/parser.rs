use crate::http::headers::HeaderBlock;
use crate::http::request::{Request, RequestLine};

/// Parses raw request text into a [`Request`].
///
/// The text splits on the first CRLF into the request line and the header
/// section; a missing header section is an empty block. Structurally odd
/// input never fails here: absent tokens degrade into the documented
/// defaults. The caller guarantees `text` is non-empty (the connection
/// handler only parses reads of at least one byte).
pub fn parse_request(text: &str) -> Request {
    debug_assert!(!text.is_empty(), "request text must be non-empty");

    let (first_line, header_section) = match text.split_once("\r\n") {
        Some((line, rest)) => (line, rest),
        None => (text, ""),
    };

    Request {
        line: RequestLine::parse(first_line),
        headers: HeaderBlock::parse(header_section),
    }
}
