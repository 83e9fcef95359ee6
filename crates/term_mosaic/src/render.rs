//! Full-frame rendering: tiles in, ANSI text out.
//!
//! Walks a decoded RGBA frame in 4x8 tiles, matches each tile to a glyph and
//! a color pair, and assembles the escape-sequence string for the whole
//! frame. Consecutive tiles sharing a color emit no redundant escapes, and
//! every output line ends with an SGR reset so colors never bleed past the
//! rendered area.

use crate::ansi::{encode_color, ColorMode, RESET};
use crate::block::match_tile;
use crate::{MosaicError, Result, BYTES_PER_PIXEL, TILE_HEIGHT, TILE_WIDTH};

/// Color depth of the emitted escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorDepth {
    /// 24-bit true color.
    #[default]
    TrueColor,
    /// xterm 256-color palette.
    Palette256,
}

impl ColorDepth {
    fn mode_flag(self) -> ColorMode {
        match self {
            ColorDepth::TrueColor => ColorMode::TRUE_COLOR,
            ColorDepth::Palette256 => ColorMode::PALETTE_256,
        }
    }
}

/// Options for the frame renderer.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Color depth for both foreground and background escapes.
    pub depth: ColorDepth,
}

/// Render an RGBA frame as one ANSI string, one text row per 4x8 tile row.
///
/// # Arguments
/// * `rgba` - Raw RGBA pixel data (4 bytes per pixel: R, G, B, A)
/// * `width` - Frame width in pixels
/// * `height` - Frame height in pixels
/// * `opts` - Rendering options
///
/// Trailing pixels that do not fill a whole 4x8 tile on the right or bottom
/// edge are not rendered; callers wanting full coverage should pad or resize
/// to tile-aligned dimensions first.
///
/// # Example
/// ```
/// use term_mosaic::{render_ansi, ColorDepth, RenderOptions};
///
/// let rgba = vec![0u8; 4 * 8 * 4]; // one black tile
/// let opts = RenderOptions { depth: ColorDepth::Palette256 };
/// let text = render_ansi(&rgba, 4, 8, &opts)?;
/// assert!(text.ends_with("\x1b[0m\n"));
/// # Ok::<(), term_mosaic::MosaicError>(())
/// ```
#[must_use = "this returns the rendered ANSI string"]
pub fn render_ansi(rgba: &[u8], width: usize, height: usize, opts: &RenderOptions) -> Result<String> {
    if width == 0 || height == 0 {
        return Err(MosaicError::InvalidDimensions { width, height });
    }
    let expected = width * height * BYTES_PER_PIXEL;
    if rgba.len() != expected {
        return Err(MosaicError::BufferSizeMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    let depth = opts.depth.mode_flag();
    let row_stride = width * BYTES_PER_PIXEL;
    let mut out = String::new();

    let mut y = 0;
    while y + TILE_HEIGHT <= height {
        let mut pos = y * row_stride;
        let mut last_fg = String::new();
        let mut last_bg = String::new();

        let mut x = 0;
        while x + TILE_WIDTH <= width {
            let cell = match_tile(rgba, pos, row_stride);

            let fg = encode_color(
                ColorMode::FG | depth,
                cell.fg.r as i32,
                cell.fg.g as i32,
                cell.fg.b as i32,
            );
            let bg = encode_color(
                ColorMode::BG | depth,
                cell.bg.r as i32,
                cell.bg.g as i32,
                cell.bg.b as i32,
            );

            if fg != last_fg {
                out.push_str(&fg);
                last_fg = fg;
            }
            if bg != last_bg {
                out.push_str(&bg);
                last_bg = bg;
            }
            out.push(cell.ch);

            pos += TILE_WIDTH * BYTES_PER_PIXEL;
            x += TILE_WIDTH;
        }

        out.push_str(RESET);
        out.push('\n');
        y += TILE_HEIGHT;
    }

    Ok(out)
}

/// Render an RGBA frame with default options (true color).
#[inline]
#[must_use = "this returns the rendered ANSI string"]
pub fn render_ansi_default(rgba: &[u8], width: usize, height: usize) -> Result<String> {
    render_ansi(rgba, width, height, &RenderOptions::default())
}
