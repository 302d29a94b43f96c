use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::{error, info, warn};

use crate::content;
use crate::fs::FileSystem;
use crate::http::parser::parse_request;
use crate::http::request::Method;
use crate::http::writer::ResponseWriter;

/// One read per connection; a larger request truncates silently (known
/// limitation carried over deliberately).
pub const READ_BUFFER_SIZE: usize = 8192;

/// Shared state every connection handler needs: the filesystem the
/// resolver consults and the `Server` header value.
pub struct ServerContext {
    pub fs: Arc<dyn FileSystem>,
    pub signature: String,
}

/// Owns one accepted connection end to end: read, parse, resolve, write,
/// close. Errors never escape; each handled connection logs exactly one
/// outcome line.
pub struct Connection {
    stream: TcpStream,
    label: String,
    ctx: Arc<ServerContext>,
}

impl Connection {
    pub fn new(stream: TcpStream, label: String, ctx: Arc<ServerContext>) -> Self {
        Self { stream, label, ctx }
    }

    pub async fn run(mut self) {
        if let Err(e) = self.process().await {
            error!("{}: Error on processing: {}", self.label, e);
        }
        // Dropping the stream closes the socket; close failures have
        // nowhere to surface and are deliberately ignored.
    }

    async fn process(&mut self) -> anyhow::Result<()> {
        let mut buffer = [0u8; READ_BUFFER_SIZE];
        let count = self.stream.read(&mut buffer).await?;

        if count == 0 {
            // Client closed without sending anything; no response.
            return Ok(());
        }

        let text = String::from_utf8_lossy(&buffer[..count]).into_owned();
        let request = parse_request(&text);

        let mut response = match request.line.method {
            Method::Get => content::resolve(&request, self.ctx.fs.as_ref())?,
            Method::Unsupported => {
                content::unsupported_response(request.line.version)
            }
        };

        // Signature header, appended after resolution so it rides on every
        // response kind.
        response.headers.insert("Server", &self.ctx.signature);

        let mut writer = ResponseWriter::new(&response);
        let intended = writer.len();

        match writer.write_to_stream(&mut self.stream).await {
            Ok(sent) if sent == intended => {
                info!(
                    "{}: Sent {} bytes, {} [{}]",
                    self.label, sent, response.status_line, request.line.uri.path
                );
            }
            Ok(sent) => {
                warn!(
                    "{}: Error on send (wrong count: {} of {})",
                    self.label, sent, intended
                );
            }
            Err(e) => {
                warn!("{}: Socket error on send: {}", self.label, e);
            }
        }

        Ok(())
    }
}
