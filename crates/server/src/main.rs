use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use viewer_core::{load_image, spawn_viewer, ImageCrateOps, Session};

mod config;
mod listener;
mod surface;

use config::load_settings;
use surface::HeadlessSurface;

#[derive(Parser, Debug)]
#[command(about = "Image viewer driven by JSON lines on a TCP control port")]
struct Args {
    /// Image to open; overrides the configured path.
    image: Option<PathBuf>,
    /// Control port address, e.g. 127.0.0.1:8765.
    #[arg(long)]
    bind: Option<String>,
    /// Config file (defaults to ./viewer.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref());
    if let Some(image) = args.image {
        settings.image_path = image;
    }
    if let Some(bind) = args.bind {
        settings.bind_addr = bind;
    }

    let original = load_image(&settings.image_path).map_err(|err| {
        error!(
            path = %settings.image_path.display(),
            error = %format!("{err:#}"),
            "failed to load image"
        );
        err
    })?;
    info!(
        path = %settings.image_path.display(),
        width = original.width(),
        height = original.height(),
        "image loaded"
    );

    let session = Session::new(original, settings.viewport(), Box::new(ImageCrateOps))
        .with_crop_dir(settings.crop_dir.clone());
    let surface = HeadlessSurface::new(settings.viewport());
    let (viewer, applier) = spawn_viewer(
        session,
        Box::new(surface),
        settings.tick(),
        settings.command_queue,
    );

    let addr: SocketAddr = settings
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.bind_addr))?;
    let tcp = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind control port {addr}"))?;
    info!(%addr, "control port listening");

    tokio::select! {
        _ = listener::serve(tcp, viewer.sender()) => {}
        result = tokio::signal::ctrl_c() => {
            result.context("failed to listen for shutdown signal")?;
            info!("shutting down");
        }
    }

    applier.abort();
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
