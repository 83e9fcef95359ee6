//! # term_mosaic
//!
//! Render RGBA pixel data as colored Unicode block-glyph mosaics for the terminal.
//!
//! Each 4x8 pixel tile of the source image is reduced to a single glyph from a
//! fixed catalog of block/line-drawing characters plus a foreground and a
//! background color, using a variation of the median-cut split described in
//! [`block::match_tile`]. Colors are emitted as SGR escape sequences, either as
//! 24-bit true color or quantized to the xterm 256-color palette.
//!
//! ## Quick Start
//!
//! ### Rendering a full frame
//!
//! ```
//! use term_mosaic::render_ansi_default;
//!
//! // RGBA frame data (4 bytes per pixel), at least one 4x8 tile
//! let rgba = vec![255u8; 4 * 8 * 4]; // solid white tile
//! let text = render_ansi_default(&rgba, 4, 8)?;
//! print!("{}", text);
//! # Ok::<(), term_mosaic::MosaicError>(())
//! ```
//!
//! ### Matching a single tile
//!
//! ```
//! use term_mosaic::block::match_tile;
//!
//! let rgba = vec![0u8; 4 * 8 * 4]; // solid black tile
//! let cell = match_tile(&rgba, 0, 16);
//! assert_eq!(cell.ch, '\u{00a0}'); // blank glyph for a uniform tile
//! ```

use thiserror::Error;

pub mod ansi;
pub mod block;
pub mod render;

pub use ansi::{encode_color, ColorMode, RESET};
pub use block::{best_glyph, match_tile, Rgb, TileGlyph};
pub use render::{render_ansi, render_ansi_default, ColorDepth, RenderOptions};

/// Errors that can occur while rendering a frame.
#[derive(Debug, Error)]
pub enum MosaicError {
    /// Invalid image dimensions (width or height is zero)
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Buffer size doesn't match expected size for dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Result type for rendering operations.
pub type Result<T> = core::result::Result<T, MosaicError>;

/// Width of one tile in pixels.
pub const TILE_WIDTH: usize = 4;
/// Height of one tile in pixels.
pub const TILE_HEIGHT: usize = 8;
/// Bytes per pixel in the interleaved R,G,B,A input format.
pub const BYTES_PER_PIXEL: usize = 4;
