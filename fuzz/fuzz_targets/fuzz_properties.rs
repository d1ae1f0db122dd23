#![no_main]

use libfuzzer_sys::fuzz_target;
use warlife::codec::Properties;
use warlife::GameConfig;

fuzz_target!(|text: &str| {
    // Parsing must never panic, only return an error
    let Ok(props) = Properties::parse(text) else {
        return;
    };

    // Every parsed file either yields a configuration or a value error,
    // and a produced configuration sits inside the documented bounds
    if let Ok(config) = GameConfig::from_properties(&props) {
        assert!((5..=100).contains(&config.width));
        assert!((5..=50).contains(&config.height));
        assert!((1..=60).contains(&config.refresh));
        assert!((1..=32).contains(&config.death_age));
        assert!((128..=65536).contains(&config.win_round));
    }

    // Writing the entries back out re-parses to the same value
    let reparsed = Properties::parse(&props.to_text()).expect("written form must parse");
    assert_eq!(reparsed, props, "round trip changed the entries");
});
