#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use timecode_core::{ParseConfig, Timecode};

#[derive(Debug, Arbitrary)]
struct ParseInput {
    text: String,
    fps: u8,
    drop: Option<bool>,
    max_digits: u8,
}

fuzz_target!(|input: ParseInput| {
    let mut config = ParseConfig::with_fps(input.fps.max(1) as f64)
        .max_digits(input.max_digits as usize);
    config.drop = input.drop;

    if let Ok(tc) = Timecode::parse_with(&input.text, &config) {
        // Renders back to the same value while hours stay under the rollover;
        // an inert drop flag renders `;` that the plain parser refuses
        let rendered = tc.to_s_without_rollover();
        let inert_drop = tc.is_drop() && !tc.converter().is_dropping();
        if tc.hours() < 100 && !inert_drop {
            let reparsed = Timecode::parse(&rendered, tc.fps());
            assert_eq!(reparsed.ok(), Some(tc), "{:?} -> {}", input.text, rendered);
        }
    }
    let _ = Timecode::soft_parse_with(&input.text, &config);
    let _ = Timecode::parse_with_fractional_seconds(&input.text, config.fps);
    let _ = Timecode::from_filename_in_sequence(&input.text, config.fps);
});
