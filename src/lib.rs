//! Perseus - Minimal static web server
//!
//! One request per connection: parse a GET, serve a file, a directory
//! listing, a redirect, or an error status, then close.

pub mod config;
pub mod content;
pub mod fs;
pub mod http;
pub mod server;
