//! Control port: newline-delimited JSON commands over TCP.

use std::time::Duration;

use shared::protocol::{decode_line, Command};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    net::TcpListener,
    sync::mpsc,
    time,
};
use tracing::{debug, info, warn};

const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(50);

/// Accepts connections forever, one reader task per connection. All
/// readers feed the same queue, so each connection's lines stay in order.
pub async fn serve(listener: TcpListener, commands: mpsc::Sender<Command>) {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(error) => {
                warn!(%error, "failed to accept control connection");
                time::sleep(ACCEPT_RETRY_DELAY).await;
                continue;
            }
        };

        info!(%peer, "control connection opened");
        let commands = commands.clone();
        tokio::spawn(async move {
            let forwarded = read_commands(BufReader::new(socket), &commands).await;
            info!(%peer, forwarded, "control connection closed");
        });
    }
}

/// Forwards every decodable line until EOF and returns how many commands
/// were forwarded. Malformed lines are skipped; the stream keeps going.
pub async fn read_commands<R>(mut reader: R, commands: &mpsc::Sender<Command>) -> usize
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    let mut forwarded = 0;

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                debug!(%error, "control connection read failed");
                break;
            }
        }

        let command = match decode_line(&line) {
            Ok(command) => command,
            Err(error) => {
                debug!(%error, "dropping malformed line");
                continue;
            }
        };

        if commands.send(command).await.is_err() {
            warn!("viewer stopped; closing control connection");
            break;
        }
        forwarded += 1;
    }

    forwarded
}

#[cfg(test)]
#[path = "tests/listener_tests.rs"]
mod tests;
