use std::process::ExitCode;

use clap::{Parser, Subcommand};
use client_core::{ControlClient, DEFAULT_HOST, DEFAULT_PORT};
use shared::protocol::{Command, DEFAULT_FIT_MS, DEFAULT_MOVE_MS, DEFAULT_SHARPEN_AMOUNT};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Send one control command to a running viewer")]
struct Cli {
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Multiply the current zoom by FACTOR.
    #[command(allow_negative_numbers = true)]
    Zoom {
        #[arg(value_parser = finite)]
        factor: f64,
        ms: Option<i64>,
    },
    /// Jump to an absolute zoom level.
    #[command(name = "set_zoom")]
    SetZoom {
        #[arg(value_parser = finite)]
        scale: f64,
        ms: Option<i64>,
    },
    /// Move the view by DX/DY screen pixels.
    #[command(allow_negative_numbers = true)]
    Pan {
        #[arg(value_parser = finite)]
        dx: f64,
        #[arg(value_parser = finite)]
        dy: f64,
        ms: Option<i64>,
    },
    /// Fit the whole image into the window.
    Fit { ms: Option<i64> },
    Sharpen {
        #[arg(value_parser = finite)]
        amount: Option<f64>,
    },
    /// Save the visible region; the viewer picks a name when OUT is omitted.
    Crop { out: Option<String> },
    /// Restore the original image and fit it.
    #[command(name = "reset_image")]
    ResetImage,
}

impl Action {
    fn into_command(self) -> Command {
        match self {
            Action::Zoom { factor, ms } => Command::Zoom {
                factor,
                ms: ms.unwrap_or(DEFAULT_MOVE_MS),
            },
            Action::SetZoom { scale, ms } => Command::SetZoom {
                scale,
                ms: ms.unwrap_or(DEFAULT_MOVE_MS),
            },
            Action::Pan { dx, dy, ms } => Command::Pan {
                dx,
                dy,
                ms: ms.unwrap_or(DEFAULT_MOVE_MS),
            },
            Action::Fit { ms } => Command::Fit {
                ms: ms.unwrap_or(DEFAULT_FIT_MS),
            },
            Action::Sharpen { amount } => Command::Sharpen {
                amount: amount.unwrap_or(DEFAULT_SHARPEN_AMOUNT),
            },
            Action::Crop { out } => Command::CropView { out },
            Action::ResetImage => Command::ResetImage,
        }
    }
}

fn finite(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{raw}' is not a finite number"))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let client = ControlClient::new(&cli.host, cli.port);
    match client.send(&cli.action.into_command()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
