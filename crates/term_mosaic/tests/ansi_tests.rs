use pretty_assertions::assert_eq;
use term_mosaic::{encode_color, ColorMode, RESET};

#[test]
fn test_reset_constant() {
    assert_eq!(RESET, "\x1b[0m");
}

#[test]
fn test_true_color_foreground() {
    let esc = encode_color(ColorMode::FG | ColorMode::TRUE_COLOR, 12, 200, 7);
    assert_eq!(esc, "\x1b[38;2;12;200;7m");
}

#[test]
fn test_true_color_background() {
    let esc = encode_color(ColorMode::BG | ColorMode::TRUE_COLOR, 12, 200, 7);
    assert_eq!(esc, "\x1b[48;2;12;200;7m");
}

#[test]
fn test_true_color_without_depth_flag() {
    // Absence of PALETTE_256 means true color
    let esc = encode_color(ColorMode::FG, 0, 0, 0);
    assert_eq!(esc, "\x1b[38;2;0;0;0m");
}

#[test]
fn test_out_of_range_channels_are_clamped() {
    for mode in [
        ColorMode::FG | ColorMode::TRUE_COLOR,
        ColorMode::BG | ColorMode::TRUE_COLOR,
        ColorMode::FG | ColorMode::PALETTE_256,
        ColorMode::BG | ColorMode::PALETTE_256,
    ] {
        assert_eq!(
            encode_color(mode, -10, 300, 128),
            encode_color(mode, 0, 255, 128),
            "clamping should be silent in mode {:?}",
            mode
        );
    }
}

#[test]
fn test_indexed_black_maps_to_cube_origin() {
    // Black lies exactly on cube index 16, beating the darkest ramp entry
    assert_eq!(
        encode_color(ColorMode::BG | ColorMode::PALETTE_256, 0, 0, 0),
        "\x1b[48;5;16m"
    );
}

#[test]
fn test_indexed_midpoint_tie_goes_to_lower_cube_step() {
    // 115 is equidistant from cube steps 95 and 135; the lower step wins,
    // giving red index 1 -> palette index 16 + 36
    assert_eq!(
        encode_color(ColorMode::FG | ColorMode::PALETTE_256, 115, 0, 0),
        "\x1b[38;5;52m"
    );
}

#[test]
fn test_indexed_midpoint_tie_goes_to_lower_ramp_entry() {
    // Gray 13 is equidistant from ramp values 8 and 18
    assert_eq!(
        encode_color(ColorMode::FG | ColorMode::PALETTE_256, 13, 13, 13),
        "\x1b[38;5;232m"
    );
}

#[test]
fn test_indexed_saturated_primaries() {
    assert_eq!(
        encode_color(ColorMode::FG | ColorMode::PALETTE_256, 255, 0, 0),
        "\x1b[38;5;196m"
    );
    assert_eq!(
        encode_color(ColorMode::FG | ColorMode::PALETTE_256, 0, 255, 0),
        "\x1b[38;5;46m"
    );
    assert_eq!(
        encode_color(ColorMode::FG | ColorMode::PALETTE_256, 0, 0, 255),
        "\x1b[38;5;21m"
    );
}

/// Parse the palette index back out of an indexed escape sequence.
fn parse_index(esc: &str) -> usize {
    let digits = esc
        .strip_prefix("\x1b[38;5;")
        .or_else(|| esc.strip_prefix("\x1b[48;5;"))
        .and_then(|rest| rest.strip_suffix('m'))
        .expect("indexed escape sequence");
    digits.parse().expect("decimal index")
}

/// Gray level represented by a palette index, for pure-gray inputs.
///
/// Gray inputs quantize all three channels to the same cube step, so a cube
/// index decomposes as 16 + 43 * step.
fn represented_gray(index: usize) -> i32 {
    const CUBE_STEPS: [i32; 6] = [0, 0x5f, 0x87, 0xaf, 0xd7, 0xff];
    if (16..232).contains(&index) {
        let step = (index - 16) / 36;
        assert_eq!(index, 16 + step * 36 + step * 6 + step, "not a gray cube entry");
        CUBE_STEPS[step]
    } else {
        assert!((232..256).contains(&index), "index out of palette: {index}");
        8 + 10 * (index as i32 - 232)
    }
}

#[test]
fn test_gray_sweep_brightness_is_monotonic() {
    // The raw index hops between the ramp (232..) and the cube (16..232)
    // near cube gray levels, but the gray level the selected entry stands
    // for must never decrease as the input brightens.
    let mut last = -1;
    for k in 0..=255 {
        let esc = encode_color(ColorMode::FG | ColorMode::PALETTE_256, k, k, k);
        let gray = represented_gray(parse_index(&esc));
        assert!(
            gray >= last,
            "represented gray regressed at k={k}: {gray} < {last}"
        );
        last = gray;
    }
}

#[test]
fn test_gray_sweep_endpoints_hit_cube_corners() {
    // Pure black and white have exact cube matches, which win strictly
    assert_eq!(
        parse_index(&encode_color(ColorMode::FG | ColorMode::PALETTE_256, 0, 0, 0)),
        16
    );
    assert_eq!(
        parse_index(&encode_color(
            ColorMode::FG | ColorMode::PALETTE_256,
            255,
            255,
            255
        )),
        231
    );
}
