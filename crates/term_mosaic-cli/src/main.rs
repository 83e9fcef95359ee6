//! mosaic - Render images as terminal block-glyph art
//!
//! A command-line tool for converting images into colored Unicode mosaics.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use term_mosaic::{render_ansi, ColorDepth, RenderOptions};

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(version)]
#[command(about = "Render images as terminal block-glyph art", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display an image in the terminal
    Show {
        /// Input image file (PNG, JPEG, GIF, WebP, BMP, TGA)
        input: PathBuf,

        /// Use the 256-color palette instead of 24-bit true color
        #[arg(long)]
        palette_256: bool,

        /// Downscale images wider than this many pixels
        #[arg(long, default_value = "320")]
        max_width: u32,

        /// Downscale images taller than this many pixels
        #[arg(long, default_value = "600")]
        max_height: u32,
    },

    /// Render an image to a text file
    Render {
        /// Input image file (PNG, JPEG, GIF, WebP, BMP, TGA)
        input: PathBuf,

        /// Output text file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use the 256-color palette instead of 24-bit true color
        #[arg(long)]
        palette_256: bool,

        /// Downscale images wider than this many pixels
        #[arg(long, default_value = "320")]
        max_width: u32,

        /// Downscale images taller than this many pixels
        #[arg(long, default_value = "600")]
        max_height: u32,
    },
}

/// Decode an image, downscale it to fit the bounds, and render it.
fn render_file(
    input: &PathBuf,
    palette_256: bool,
    max_width: u32,
    max_height: u32,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut img = image::open(input)
        .map_err(|e| format!("Failed to open '{}': {}", input.display(), e))?;

    if img.width() > max_width.max(1) || img.height() > max_height.max(1) {
        img = img.thumbnail(max_width.max(1), max_height.max(1));
    }

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();
    let pixels = rgba_img.into_raw();

    let opts = RenderOptions {
        depth: if palette_256 {
            ColorDepth::Palette256
        } else {
            ColorDepth::TrueColor
        },
    };

    let text = render_ansi(&pixels, width as usize, height as usize, &opts)?;
    Ok(text)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            input,
            palette_256,
            max_width,
            max_height,
        } => {
            let text = render_file(&input, palette_256, max_width, max_height)?;
            print!("{}", text);
        }

        Commands::Render {
            input,
            output,
            palette_256,
            max_width,
            max_height,
        } => {
            eprintln!(
                "Rendering '{}' ({})",
                input.display(),
                if palette_256 { "256 colors" } else { "true color" }
            );

            let text = render_file(&input, palette_256, max_width, max_height)?;

            match output {
                Some(path) => {
                    fs::write(&path, &text)?;
                    eprintln!("Written {} bytes to '{}'", text.len(), path.display());
                }
                None => {
                    io::stdout().write_all(text.as_bytes())?;
                }
            }
        }
    }

    Ok(())
}
