#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use warlife::codec::{decode, encode};
use warlife::GameConfig;

/// Structured input for decoder fuzzing.
#[derive(Arbitrary, Debug)]
struct DecodeInput {
    /// Raw candidate for the run-length text.
    text: String,
    /// Configured grid width (clamped into the supported range).
    width: u16,
    /// Configured grid height (clamped into the supported range).
    height: u16,
}

fuzz_target!(|input: DecodeInput| {
    let config = GameConfig {
        width: input.width.clamp(5, 100),
        height: input.height.clamp(5, 50),
        ..GameConfig::default()
    };

    // Decoding must never panic, only return an error
    let Ok(grid) = decode(&input.text, &config) else {
        return;
    };

    // A successful decode honors the configured dimensions...
    assert_eq!(grid.width(), config.width);
    assert_eq!(grid.height(), config.height);

    // ...and re-encoding its result round-trips exactly
    let reencoded = encode(&grid);
    let redecoded = decode(&reencoded, &config).expect("re-encoded form must decode");
    assert_eq!(redecoded, grid, "round trip changed the grid");
});
