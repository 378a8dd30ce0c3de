use std::time::Duration;

use anyhow::{Context, Result};
use shared::protocol::{encode_line, Command};
use tokio::{io::AsyncWriteExt, net::TcpStream, time};
use tracing::debug;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8765;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Fire-and-forget sender for the viewer's control port. Every command opens
/// its own connection, writes one line and closes.
#[derive(Debug, Clone)]
pub struct ControlClient {
    addr: String,
}

impl ControlClient {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            addr: format!("{host}:{port}"),
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub async fn send(&self, command: &Command) -> Result<()> {
        let line = encode_line(command).context("failed to encode command")?;

        let mut stream = time::timeout(CONNECT_TIMEOUT, TcpStream::connect(&self.addr))
            .await
            .with_context(|| format!("timed out connecting to {}", self.addr))?
            .with_context(|| format!("failed to connect to {}", self.addr))?;

        stream
            .write_all(line.as_bytes())
            .await
            .with_context(|| format!("failed to send command to {}", self.addr))?;
        stream.shutdown().await.ok();

        debug!(addr = %self.addr, command = command.name(), "sent command");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
