//! Timecode Core - SMPTE timecode as an immutable, frame-accurate value
//!
//! This crate provides:
//! - The [`Timecode`] value type and its variants
//! - Drop-frame aware frame count <-> clock atom conversion
//! - A parser for SMPTE, fractional-second, tick, suffixed and digit notations
//! - Rate-checked arithmetic and comparison
//! - The BCD-packed 32-bit representation
//! - A process-wide registry of non-integer framerates

pub mod arith;
pub mod bcd;
pub mod config;
pub mod dropframe;
pub mod error;
pub mod format;
pub mod framerate;
pub mod parse;
pub mod timecode;
pub mod validate;
pub mod variant;

pub use arith::FrameRange;
pub use config::*;
pub use dropframe::{Atoms, DropFrameConverter};
pub use error::*;
pub use framerate::{framerates_in_delta, FramerateRegistry};
pub use parse::{detect_notation, Notation};
pub use timecode::{FrameSource, Timecode};
pub use validate::validate_atoms;
pub use variant::{Standard, Variant};

/// Register a non-integer framerate with the process-wide registry
pub fn add_custom_framerate(rate: f64) -> TimecodeResult<()> {
    FramerateRegistry::global().register(rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_custom_framerate_widens_frame_limit() {
        let registry = FramerateRegistry::global();
        registry.reset();

        // 47.4 rounds to 47 frame numbers until registered
        assert!(Timecode::at(0, 0, 0, 47, 47.4, false).is_err());
        add_custom_framerate(47.4).unwrap();
        assert!(registry.is_registered(47.4));
        assert!(Timecode::at(0, 0, 0, 47, 47.4, false).is_ok());

        registry.reset();
        assert!(!registry.is_registered(47.4));
    }

    #[test]
    #[serial]
    fn test_registration_does_not_change_parsing() {
        FramerateRegistry::global().reset();
        add_custom_framerate(23.976).unwrap();

        let tc = Timecode::parse("00:00:01:00", 23.976).unwrap();
        assert_eq!(tc.total(), 24);
        assert_eq!(detect_notation("00:00:01:00"), Some(Notation::Smpte));

        FramerateRegistry::global().reset();
    }
}
