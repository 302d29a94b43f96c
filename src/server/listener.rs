use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::{Connection, ServerContext};

/// Pause per dropped iteration while inside the cool-down window, so the
/// supervisor task yields instead of spinning the executor.
const COOLDOWN_RETRY_PAUSE: Duration = Duration::from_secs(1);

/// Rate limiter for listening-socket recreation attempts.
///
/// `None` means no attempt has ever been made, which counts as elapsed:
/// the very first loop iteration reaches the create-socket path.
#[derive(Debug)]
pub struct RestartGate {
    cooldown: Duration,
    last_attempt: Option<Instant>,
}

impl RestartGate {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_attempt: None,
        }
    }

    /// True when a recreation attempt may proceed now; records the attempt
    /// timestamp when it does. Repeated failures inside the cool-down
    /// window return false and are dropped without action.
    pub fn try_begin(&mut self) -> bool {
        if let Some(last) = self.last_attempt {
            if last.elapsed() <= self.cooldown {
                return false;
            }
        }
        self.last_attempt = Some(Instant::now());
        true
    }
}

/// Supervisor-owned listener state. Connection handlers never touch this;
/// no synchronization is needed.
struct ListenerState {
    socket: Option<TcpListener>,
    restart: RestartGate,
}

/// The accept loop. Runs for the life of the process: accepts connections,
/// spawns one fire-and-forget handler task per connection, and recovers
/// from accept-time failures by rate-limited socket recreation. Nothing
/// that happens in here or in a handler terminates the loop.
pub async fn run(cfg: &Config, ctx: Arc<ServerContext>) {
    let port = cfg.server.port;
    let backlog = cfg.server.backlog;

    let mut state = ListenerState {
        socket: None,
        restart: RestartGate::new(Duration::from_secs(cfg.server.restart_cooldown_secs)),
    };

    loop {
        match &state.socket {
            Some(listener) => match listener.accept().await {
                Ok((stream, peer)) => {
                    info!("Accepted connection from {}", peer);
                    let label = format!("WWW / {}", peer);
                    let ctx = Arc::clone(&ctx);
                    tokio::spawn(async move {
                        Connection::new(stream, label, ctx).run().await;
                    });
                }
                Err(e) => {
                    // Net-level accept failures are transient: log and
                    // retry immediately, no recreation.
                    error!("Socket error on accept: {}", e);
                }
            },
            None => {
                if state.restart.try_begin() {
                    recreate(&mut state, port, backlog);
                } else {
                    tokio::time::sleep(COOLDOWN_RETRY_PAUSE).await;
                }
            }
        }
    }
}

/// Tears down any previous socket and installs a fresh one. A creation
/// failure leaves the state empty; the next attempt waits out the gate.
fn recreate(state: &mut ListenerState, port: u16, backlog: u32) {
    if let Some(old) = state.socket.take() {
        // Dropping the listener shuts the socket down and closes it;
        // neither step can fail from here.
        drop(old);
        info!("Closed previous listening socket");
    }

    match create_listener(port, backlog) {
        Ok(listener) => {
            info!("Listening on port {}", port);
            state.socket = Some(listener);
        }
        Err(e) => {
            error!("Error creating listening socket on port {}: {}", port, e);
        }
    }
}

fn create_listener(port: u16, backlog: u32) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    let socket = TcpSocket::new_v4()?;
    // Rebinding the same port right after a teardown must succeed.
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;
    Ok(socket.listen(backlog)?)
}
