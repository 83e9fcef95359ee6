//! 4x8 pixel tile to block-glyph matching.
//!
//! Converts one 4x8 RGBA tile into a Unicode character plus a foreground and
//! background color. A variation of the median-cut algorithm picks a
//! two-color split for the tile: the channel with the largest range is split
//! at the middle of its interval, the resulting on/off pattern becomes a
//! 32-bit bitmask, and the catalog entry with the smallest Hamming distance
//! (inverted bitmaps included) supplies the glyph.

/// Assumed 4x8 bitmaps of the supported glyphs, row-major, MSB first.
///
/// Entries that are redundant with another entry's bitwise complement
/// (upper 1/2 vs lower 1/2, full block vs space, the 3/4 quadrants) are
/// omitted because the matcher also checks inverted bitmaps. Order is
/// significant: the first entry reaching the minimum distance wins.
pub const GLYPH_BITMAPS: &[(u32, char)] = &[
    (0x00000000, '\u{00a0}'),
    // Block graphics
    (0x0000000f, '\u{2581}'), // lower 1/8
    (0x000000ff, '\u{2582}'), // lower 1/4
    (0x00000fff, '\u{2583}'),
    (0x0000ffff, '\u{2584}'), // lower 1/2
    (0x000fffff, '\u{2585}'),
    (0x00ffffff, '\u{2586}'), // lower 3/4
    (0x0fffffff, '\u{2587}'),
    (0xeeeeeeee, '\u{258a}'), // left 3/4
    (0xcccccccc, '\u{258c}'), // left 1/2
    (0x88888888, '\u{258e}'), // left 1/4
    (0x0000cccc, '\u{2596}'), // quadrant lower left
    (0x00003333, '\u{2597}'), // quadrant lower right
    (0xcccc0000, '\u{2598}'), // quadrant upper left
    (0xcccc3333, '\u{259a}'), // diagonal 1/2
    (0x33330000, '\u{259d}'), // quadrant upper right
    // Line drawing subset: no double lines, no complex light lines.
    // Simple light lines are duplicated because there is no center pixel
    // in the 4x8 matrix.
    (0x000ff000, '\u{2501}'), // heavy horizontal
    (0x66666666, '\u{2503}'), // heavy vertical
    (0x00077666, '\u{250f}'), // heavy down and right
    (0x000ee666, '\u{2513}'), // heavy down and left
    (0x66677000, '\u{2517}'), // heavy up and right
    (0x666ee000, '\u{251b}'), // heavy up and left
    (0x66677666, '\u{2523}'), // heavy vertical and right
    (0x666ee666, '\u{252b}'), // heavy vertical and left
    (0x000ff666, '\u{2533}'), // heavy down and horizontal
    (0x666ff000, '\u{253b}'), // heavy up and horizontal
    (0x666ff666, '\u{254b}'), // heavy cross
    (0x000cc000, '\u{2578}'), // bold horizontal left
    (0x00066000, '\u{2579}'), // bold horizontal up
    (0x00033000, '\u{257a}'), // bold horizontal right
    (0x00066000, '\u{257b}'), // bold horizontal down
    (0x06600660, '\u{254f}'), // heavy double dash vertical
    (0x000f0000, '\u{2500}'), // light horizontal
    (0x0000f000, '\u{2500}'),
    (0x44444444, '\u{2502}'), // light vertical
    (0x22222222, '\u{2502}'),
    (0x000e0000, '\u{2574}'), // light left
    (0x0000e000, '\u{2574}'),
    (0x44440000, '\u{2575}'), // light up
    (0x22220000, '\u{2575}'),
    (0x00030000, '\u{2576}'), // light right
    (0x00003000, '\u{2576}'),
    (0x00004444, '\u{2575}'), // light down
    (0x00002222, '\u{2575}'),
    // Misc technical
    (0x44444444, '\u{23a2}'), // [ extension
    (0x22222222, '\u{23a5}'), // ] extension
    (0x0f000000, '\u{23ba}'), // horizontal scanline 1
    (0x00f00000, '\u{23bb}'), // horizontal scanline 3
    (0x00000f00, '\u{23bc}'), // horizontal scanline 7
    (0x000000f0, '\u{23bd}'), // horizontal scanline 9
    // Geometrical shapes. Tricky because some of them are too wide.
    (0x00066000, '\u{25aa}'), // black small square
    (0x11224488, '\u{2571}'), // diagonals
    (0x88442211, '\u{2572}'),
    (0x99666699, '\u{2573}'),
    (0x000137f0, '\u{25e2}'), // triangles
    (0x0008cef0, '\u{25e3}'),
    (0x000fec80, '\u{25e4}'),
    (0x000f7310, '\u{25e5}'),
];

/// RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Result of matching one tile: the selected glyph and the two average
/// colors approximating the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGlyph {
    /// The selected character.
    pub ch: char,
    /// Average color of the pixels covered by the glyph's "on" cells.
    pub fg: Rgb,
    /// Average color of the remaining pixels.
    pub bg: Rgb,
}

/// Find the catalog glyph with the smallest Hamming distance to `bits`,
/// checking every entry in both its direct and its inverted form.
///
/// Returns the glyph and whether the inverted form won; in that case the
/// glyph's "on" cells correspond to the low side of the color split and the
/// caller must swap foreground and background. Ties are resolved by catalog
/// order, with the direct form of an entry considered before its inverse.
#[must_use]
pub fn best_glyph(bits: u32) -> (char, bool) {
    let mut best_char = '\u{00a0}';
    let mut best_diff = u32::MAX;
    let mut invert = false;

    for &(mask, ch) in GLYPH_BITMAPS {
        let diff = (mask ^ bits).count_ones();
        if diff < best_diff {
            best_char = ch;
            best_diff = diff;
            invert = false;
        }

        let diff = (!mask ^ bits).count_ones();
        if diff < best_diff {
            best_char = ch;
            best_diff = diff;
            invert = true;
        }
    }

    (best_char, invert)
}

/// Convert one 4x8 pixel tile to a glyph and a two-color approximation.
///
/// `rgba` contains interleaved R,G,B,A samples (4 bytes per pixel),
/// `offset` is the byte position of the tile's top-left pixel and
/// `row_stride` the number of bytes per source row, so the tile can be a
/// sub-window of a larger frame. Alpha is ignored.
///
/// The function is pure and total over well-formed tiles: it has no failure
/// modes and may be called concurrently on disjoint tiles.
///
/// # Panics
///
/// Panics if the buffer does not hold 8 full rows of `row_stride` bytes
/// starting at `offset`, or if `row_stride < 16`. Bounds are a caller
/// contract, as the tile has no knowledge of the frame geometry.
#[must_use]
pub fn match_tile(rgba: &[u8], offset: usize, row_stride: usize) -> TileGlyph {
    let mut min = [255u8; 3];
    let mut max = [0u8; 3];

    // Determine the minimum and maximum value for each color channel.
    let mut pos = offset;
    for _y in 0..8 {
        for _x in 0..4 {
            for i in 0..3 {
                let d = rgba[pos];
                min[i] = min[i].min(d);
                max[i] = max[i].max(d);
                pos += 1;
            }
            pos += 1; // alpha
        }
        pos += row_stride - 16;
    }

    // Determine the color channel with the greatest range.
    let mut split_index = 0;
    let mut best_split = 0i32;
    for i in 0..3 {
        let range = max[i] as i32 - min[i] as i32;
        if range > best_split {
            best_split = range;
            split_index = i;
        }
    }

    // Split at the middle of the interval instead of computing the median.
    let split_value = min[split_index] as i32 + best_split / 2;

    // Compute a bitmap using the given split and sum the color values for
    // both buckets.
    let mut bits = 0u32;
    let mut fg_count = 0u32;
    let mut bg_count = 0u32;
    let mut fg_sum = [0u32; 3];
    let mut bg_sum = [0u32; 3];

    pos = offset;
    for _y in 0..8 {
        for _x in 0..4 {
            bits <<= 1;
            let sum = if rgba[pos + split_index] as i32 > split_value {
                bits |= 1;
                fg_count += 1;
                &mut fg_sum
            } else {
                bg_count += 1;
                &mut bg_sum
            };
            for channel in sum.iter_mut() {
                *channel += rgba[pos] as u32;
                pos += 1;
            }
            pos += 1; // alpha
        }
        pos += row_stride - 16;
    }

    // Average each bucket; an empty bucket stays at zero.
    let mut fg = [0u32; 3];
    let mut bg = [0u32; 3];
    for i in 0..3 {
        if fg_count != 0 {
            fg[i] = fg_sum[i] / fg_count;
        }
        if bg_count != 0 {
            bg[i] = bg_sum[i] / bg_count;
        }
    }

    let (ch, invert) = best_glyph(bits);

    let fg = Rgb::new(fg[0] as u8, fg[1] as u8, fg[2] as u8);
    let bg = Rgb::new(bg[0] as u8, bg[1] as u8, bg[2] as u8);

    // An inverted glyph covers the low side of the split, so the colors swap.
    if invert {
        TileGlyph { ch, fg: bg, bg: fg }
    } else {
        TileGlyph { ch, fg, bg }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a 4x8 RGBA tile from a bitmask: set bits become `on`, clear
    /// bits become `off`, MSB first in row-major order.
    fn tile_from_mask(mask: u32, on: [u8; 3], off: [u8; 3]) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(32 * 4);
        for cell in 0..32 {
            let lit = mask & (1 << (31 - cell)) != 0;
            let px = if lit { on } else { off };
            rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        rgba
    }

    #[test]
    fn test_uniform_tile_is_blank() {
        let rgba = tile_from_mask(0, [0, 0, 0], [120, 30, 200]);
        let cell = match_tile(&rgba, 0, 16);
        assert_eq!(cell.ch, '\u{00a0}');
        assert_eq!(cell.bg, Rgb::new(120, 30, 200));
        // the foreground bucket received no samples and stays at zero
        assert_eq!(cell.fg, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_exact_catalog_mask_matches_directly() {
        // quadrant upper left, split on the red channel
        let rgba = tile_from_mask(0xcccc0000, [200, 10, 10], [10, 10, 10]);
        let cell = match_tile(&rgba, 0, 16);
        assert_eq!(cell.ch, '\u{2598}');
        assert_eq!(cell.fg, Rgb::new(200, 10, 10));
        assert_eq!(cell.bg, Rgb::new(10, 10, 10));
    }

    #[test]
    fn test_inverted_match_swaps_colors() {
        // Upper half bright: only the lower-half entry matches, inverted.
        let rgba = tile_from_mask(0xffff0000, [255, 255, 255], [0, 0, 0]);
        let cell = match_tile(&rgba, 0, 16);
        assert_eq!(cell.ch, '\u{2584}');
        assert_eq!(cell.fg, Rgb::new(0, 0, 0));
        assert_eq!(cell.bg, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_tile_as_subwindow_of_wider_frame() {
        // 8 pixels wide frame, tile taken from the right half
        let width = 8usize;
        let mut rgba = vec![0u8; width * 8 * 4];
        for y in 0..8 {
            for x in 4..8 {
                let i = (y * width + x) * 4;
                rgba[i] = 50;
                rgba[i + 1] = 100;
                rgba[i + 2] = 150;
                rgba[i + 3] = 255;
            }
        }
        let cell = match_tile(&rgba, 4 * 4, width * 4);
        assert_eq!(cell.ch, '\u{00a0}');
        assert_eq!(cell.bg, Rgb::new(50, 100, 150));
    }

    #[test]
    fn test_best_glyph_zero_mask() {
        assert_eq!(best_glyph(0), ('\u{00a0}', false));
    }

    #[test]
    fn test_best_glyph_full_mask_is_inverted_blank() {
        // All bits set matches the blank glyph's inverse exactly, and the
        // blank entry comes first in the catalog.
        assert_eq!(best_glyph(0xffffffff), ('\u{00a0}', true));
    }
}
