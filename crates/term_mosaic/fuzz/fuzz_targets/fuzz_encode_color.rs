#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use term_mosaic::{encode_color, ColorMode};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    mode_bits: u8,
    r: i32,
    g: i32,
    b: i32,
}

fuzz_target!(|input: FuzzInput| {
    let mode = ColorMode::from_bits_truncate(input.mode_bits);

    // The encoder is total: any flag combination and channel range
    let esc = encode_color(mode, input.r, input.g, input.b);

    assert!(esc.starts_with('\x1b'));
    assert!(esc.ends_with('m'));
});
