use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image::{Rgba, RgbaImage};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const GRID_STEP: u32 = 50;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LIGHT_GRAY: Rgba<u8> = Rgba([211, 211, 211, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const GREEN: Rgba<u8> = Rgba([0, 128, 0, 255]);

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a test card with a grid, shapes and a centre crosshair.
    GenerateSample {
        #[arg(long, default_value = "sample.png")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateSample { out } => {
            sample_image()
                .save(&out)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("Generated {}", out.display());
        }
    }

    Ok(())
}

fn sample_image() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(WIDTH, HEIGHT, WHITE);

    for x in (0..WIDTH).step_by(GRID_STEP as usize) {
        fill_rect(&mut img, x, 0, x, HEIGHT - 1, LIGHT_GRAY);
    }
    for y in (0..HEIGHT).step_by(GRID_STEP as usize) {
        fill_rect(&mut img, 0, y, WIDTH - 1, y, LIGHT_GRAY);
    }

    fill_ellipse(&mut img, 350, 250, 450, 350, RED, BLACK);
    outlined_rect(&mut img, 100, 100, 200, 200, BLUE, BLACK);
    outlined_rect(&mut img, 600, 400, 700, 500, GREEN, BLACK);

    fill_rect(&mut img, 399, 0, 400, HEIGHT - 1, BLACK);
    fill_rect(&mut img, 0, 299, WIDTH - 1, 300, BLACK);

    img
}

/// Inclusive on both corners.
fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    for y in y0..=y1.min(img.height() - 1) {
        for x in x0..=x1.min(img.width() - 1) {
            img.put_pixel(x, y, color);
        }
    }
}

fn outlined_rect(
    img: &mut RgbaImage,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    fill_rect(img, x0, y0, x1, y1, outline);
    fill_rect(img, x0 + 1, y0 + 1, x1 - 1, y1 - 1, fill);
}

fn fill_ellipse(
    img: &mut RgbaImage,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) {
    let cx = f64::from(x0 + x1) / 2.0;
    let cy = f64::from(y0 + y1) / 2.0;
    let rx = f64::from(x1 - x0) / 2.0;
    let ry = f64::from(y1 - y0) / 2.0;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let nx = (f64::from(x) - cx) / rx;
            let ny = (f64::from(y) - cy) / ry;
            let d = nx * nx + ny * ny;
            if d > 1.0 {
                continue;
            }
            let inner_x = (f64::from(x) - cx) / (rx - 1.0);
            let inner_y = (f64::from(y) - cy) / (ry - 1.0);
            let color = if inner_x * inner_x + inner_y * inner_y > 1.0 {
                outline
            } else {
                fill
            };
            img.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
