#![no_main]

use libfuzzer_sys::fuzz_target;
use warlife::codec::{parse_map, write_map};

fuzz_target!(|text: &str| {
    // Parsing must never panic, only return an error
    let Ok(grid) = parse_map(text) else {
        return;
    };

    // A parsed map writes back out and re-parses to the same grid
    let written = write_map(&grid);
    let reparsed = parse_map(&written).expect("written map must parse");
    assert_eq!(reparsed, grid, "round trip changed the grid");

    // The written form is one line per row of exactly width symbols
    assert_eq!(written.lines().count(), usize::from(grid.height()));
    for line in written.lines() {
        assert_eq!(line.chars().count(), usize::from(grid.width()));
    }
});
