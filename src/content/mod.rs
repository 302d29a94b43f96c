//! Content resolution
//!
//! Maps a parsed request onto a response: a file's bytes, a generated
//! directory listing, a redirect to the slash-terminated directory path,
//! or an error status.

pub mod resolver;

pub use resolver::{resolve, unsupported_response};
