//! SGR color escape sequences and xterm 256-color quantization.
//!
//! The encoder is a pure function from a color mode and an RGB triple to the
//! escape string that selects that color. True color emits the channel values
//! verbatim; 256-color mode quantizes against the fixed xterm palette, picking
//! whichever of the 6x6x6 color cube (indices 16-231) and the 24-step
//! grayscale ramp (indices 232-255) has the smaller perceptually weighted
//! squared error. The 16-color base region is never produced.

use bitflags::bitflags;

bitflags! {
    /// Target and depth flags for [`encode_color`].
    ///
    /// `FG`/`BG` select the SGR introducer (38 vs 48) and are mutually
    /// exclusive by contract; without `BG` the foreground form is emitted.
    /// Without `PALETTE_256` the encoder emits 24-bit true color, so
    /// `TRUE_COLOR` exists only to make that choice explicit at call sites.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColorMode: u8 {
        /// Set the foreground color.
        const FG = 1;
        /// Set the background color.
        const BG = 2;
        /// Quantize to the xterm 256-color palette.
        const PALETTE_256 = 4;
        /// Emit 24-bit true color (the default when `PALETTE_256` is absent).
        const TRUE_COLOR = 8;
    }
}

/// SGR reset: clears any active foreground and background color.
///
/// Must be emitted after each rendered line to keep colors from bleeding
/// into terminal-default regions.
pub const RESET: &str = "\x1b[0m";

/// Channel values of the 6x6x6 xterm color cube.
const CUBE_STEPS: [i32; 6] = [0, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Values of the 24-step xterm grayscale ramp (indices 232-255).
const GRAY_RAMP: [i32; 24] = [
    0x08, 0x12, 0x1c, 0x26, 0x30, 0x3a, 0x44, 0x4e, 0x58, 0x62, 0x6c, 0x76, 0x80, 0x8a, 0x94,
    0x9e, 0xa8, 0xb2, 0xbc, 0xc6, 0xd0, 0xda, 0xe4, 0xee,
];

/// Index of the nearest value in a sorted table, ties going to the lower
/// index. Naive rounding differs from this at exact midpoints, so the
/// tie-break is spelled out after the binary search.
fn nearest_index(v: i32, table: &[i32]) -> usize {
    match table.binary_search(&v) {
        Ok(idx) => idx,
        Err(idx) => {
            if idx == table.len() {
                table.len() - 1
            } else if idx > 0 {
                // candidates are table[idx - 1] and table[idx]
                if v - table[idx - 1] <= table[idx] - v {
                    idx - 1
                } else {
                    idx
                }
            } else {
                idx
            }
        }
    }
}

fn sqr(v: i32) -> f64 {
    (v as f64) * (v as f64)
}

/// Encode an RGB color as an SGR escape sequence.
///
/// Channel values are clamped to 0-255, never rejected. The four output
/// forms are:
///
/// | Mode | Output |
/// |------|--------|
/// | true-color foreground | `ESC[38;2;R;G;Bm` |
/// | true-color background | `ESC[48;2;R;G;Bm` |
/// | indexed foreground | `ESC[38;5;Nm` |
/// | indexed background | `ESC[48;5;Nm` |
///
/// In 256-color mode the index is chosen by quantizing each channel to the
/// nearest cube step, quantizing the luma (0.2989 R + 0.5870 G + 0.1140 B)
/// to the nearest grayscale ramp entry, and comparing the two candidates by
/// weighted squared error (0.3/0.59/0.11). The cube wins only when strictly
/// smaller; ties go to the grayscale ramp.
///
/// # Example
/// ```
/// use term_mosaic::{encode_color, ColorMode};
///
/// let esc = encode_color(ColorMode::FG | ColorMode::TRUE_COLOR, 255, 128, 0);
/// assert_eq!(esc, "\x1b[38;2;255;128;0m");
/// ```
#[must_use]
pub fn encode_color(mode: ColorMode, r: i32, g: i32, b: i32) -> String {
    let r = r.clamp(0, 255);
    let g = g.clamp(0, 255);
    let b = b.clamp(0, 255);

    let bg = mode.contains(ColorMode::BG);

    if !mode.contains(ColorMode::PALETTE_256) {
        let introducer = if bg { "\x1b[48;2;" } else { "\x1b[38;2;" };
        return format!("{introducer}{r};{g};{b}m");
    }

    let r_idx = nearest_index(r, &CUBE_STEPS);
    let g_idx = nearest_index(g, &CUBE_STEPS);
    let b_idx = nearest_index(b, &CUBE_STEPS);

    let r_q = CUBE_STEPS[r_idx];
    let g_q = CUBE_STEPS[g_idx];
    let b_q = CUBE_STEPS[b_idx];

    let gray = (r as f32 * 0.2989 + g as f32 * 0.5870 + b as f32 * 0.1140).round() as i32;

    let gray_idx = nearest_index(gray, &GRAY_RAMP);
    let gray_q = GRAY_RAMP[gray_idx];

    let cube_err = 0.3 * sqr(r_q - r) + 0.59 * sqr(g_q - g) + 0.11 * sqr(b_q - b);
    let gray_err = 0.3 * sqr(gray_q - r) + 0.59 * sqr(gray_q - g) + 0.11 * sqr(gray_q - b);

    let index = if cube_err < gray_err {
        16 + 36 * r_idx + 6 * g_idx + b_idx
    } else {
        232 + gray_idx
    };

    let introducer = if bg { "\x1b[48;5;" } else { "\x1b[38;5;" };
    format!("{introducer}{index}m")
}
