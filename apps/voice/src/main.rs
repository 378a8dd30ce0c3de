use anyhow::Result;
use clap::Parser;
use client_core::{ControlClient, DEFAULT_HOST, DEFAULT_PORT};
use shared::protocol::Command;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

const EXIT_WORDS: &[&str] = &["exit", "quit", "выход"];

#[derive(Parser, Debug)]
#[command(about = "Drive the viewer with spoken-style Russian phrases")]
struct Args {
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    /// Phrase to send once; starts an interactive prompt when omitted.
    phrase: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    let args = Args::parse();
    let client = ControlClient::new(&args.host, args.port);

    if !args.phrase.is_empty() {
        let phrase = args.phrase.join(" ");
        match intent::parse_phrase(&phrase) {
            Some(command) => {
                println!("Executing: {}", describe(&command));
                client.send(&command).await?;
            }
            None => println!("Unknown command phrase."),
        }
        return Ok(());
    }

    println!("ENHANCE voice console");
    println!("Say things like 'увеличь чуть-чуть', 'влево сильно', 'сброс'. Type 'exit' to quit.");

    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let phrase = line.trim();
        if is_exit(phrase) {
            break;
        }

        match intent::parse_phrase(phrase) {
            Some(command) => match client.send(&command).await {
                Ok(()) => println!("Sent: {}", describe(&command)),
                Err(err) => println!("Could not reach the viewer: {err:#}"),
            },
            None => println!("Could not parse that. Try: 'увеличь', 'вправо', 'резкость', 'сброс'"),
        }
    }

    Ok(())
}

fn is_exit(phrase: &str) -> bool {
    let phrase = phrase.to_lowercase();
    EXIT_WORDS.contains(&phrase.as_str())
}

fn describe(command: &Command) -> String {
    serde_json::to_string(command).unwrap_or_else(|_| command.name().to_string())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
