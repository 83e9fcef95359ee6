#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use term_mosaic::{render_ansi, ColorDepth, RenderOptions};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    pixels: Vec<u8>,
    palette_256: bool,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.width as usize).max(1).min(128);
    let height = (input.height as usize).max(1).min(128);

    // Ensure we have enough pixels (RGBA = 4 bytes per pixel)
    let expected_size = width * height * 4;
    if input.pixels.len() < expected_size {
        return;
    }

    let pixels = &input.pixels[..expected_size];
    let opts = RenderOptions {
        depth: if input.palette_256 {
            ColorDepth::Palette256
        } else {
            ColorDepth::TrueColor
        },
    };

    // The renderer should never panic on a size-consistent buffer
    let text = render_ansi(pixels, width, height, &opts).expect("validated input");

    // Every rendered line must be terminated by an SGR reset
    for line in text.lines() {
        assert!(line.ends_with("\x1b[0m"));
    }
});
