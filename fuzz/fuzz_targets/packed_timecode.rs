#![no_main]

use libfuzzer_sys::fuzz_target;
use timecode_core::bcd::read_packed;
use timecode_core::{Standard, Timecode};

fuzz_target!(|data: &[u8]| {
    let mut buf = data;
    while let Ok(tc) = read_packed::<Standard, _>(&mut buf, 30.0) {
        let packed = tc.to_uint().expect("unpacked timecodes stay under 100 hours");
        assert_eq!(Timecode::from_uint(packed, 30).ok(), Some(tc));
    }
});
