//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.x subset Perseus speaks: one request
//! parsed per connection, one response written, connection closed.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection handler (read once, parse,
//!   resolve, write, close)
//! - **`parser`**: turns raw request text into a [`request::Request`];
//!   structurally odd input degrades into defaults instead of failing
//! - **`request`**: request line, URI and query representation
//! - **`headers`**: order-preserving header block shared by requests and
//!   responses
//! - **`response`**: status codes and the response representation
//! - **`writer`**: serializes a response and writes it fully to the client
//! - **`mime`**: content-type lookup by file extension
//!
//! # Connection lifecycle
//!
//! ```text
//! accept → read (single 8192-byte buffer) → parse → resolve → write → close
//! ```
//!
//! There is no keep-alive: the connection is closed unconditionally after
//! one response, regardless of the client's version or headers.

pub mod connection;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
