//! Timecode variants
//!
//! A variant is a marker type that tags a [`Timecode`] and acts as its
//! factory. Every constructor below returns a `Timecode<Self>`, and every
//! arithmetic operator returns the variant of its left operand, so a custom
//! variant never decays back into [`Standard`].
//!
//! ```
//! use timecode_core::{Timecode, Variant};
//!
//! #[derive(Clone, Copy, Debug)]
//! enum Reel {}
//!
//! impl Variant for Reel {
//!     const NAME: &'static str = "Reel";
//! }
//!
//! let tc = Reel::parse("10h", 25).unwrap();
//! let sum: Timecode<Reel> = (tc + Timecode::new(10, 25, false).unwrap()).unwrap();
//! assert_eq!(format!("{:?}", sum), "#<Reel:10:00:00:10 (900010F@25.00)>");
//! ```

use crate::parse;
use crate::validate::normalize_fps;
use crate::{Atoms, FrameSource, ParseConfig, Timecode, TimecodeResult};

/// Marker type that tags and constructs timecodes
pub trait Variant: Sized + 'static {
    /// Name shown in the debug representation
    const NAME: &'static str;

    /// Timecode from a raw frame count
    fn new(total: u64, fps: impl Into<f64>, drop: bool) -> TimecodeResult<Timecode<Self>> {
        Timecode::from_frames(total, normalize_fps(fps)?, drop)
    }

    /// Timecode from a frame count, text, or nothing (zero)
    fn coerce<'a>(
        source: impl Into<FrameSource<'a>>,
        fps: impl Into<f64>,
        drop: bool,
    ) -> TimecodeResult<Timecode<Self>> {
        let fps = normalize_fps(fps)?;
        match source.into() {
            FrameSource::Zero => Timecode::from_frames(0, fps, drop),
            FrameSource::Count(total) => Timecode::from_frames(total, fps, drop),
            FrameSource::Text(text) => {
                let config = ParseConfig {
                    fps,
                    drop: drop.then_some(true),
                    ..Default::default()
                };
                parse::parse_text(text, &config)
            }
        }
    }

    /// Zero timecode at `fps`
    fn zero(fps: impl Into<f64>) -> TimecodeResult<Timecode<Self>> {
        Self::new(0, fps, false)
    }

    /// Timecode from clock atoms, validated
    fn at(
        hours: u32,
        minutes: u32,
        seconds: u32,
        frames: u32,
        fps: impl Into<f64>,
        drop: bool,
    ) -> TimecodeResult<Timecode<Self>> {
        let atoms = Atoms::new(hours as u64, minutes, seconds, frames);
        Timecode::from_atoms(atoms, normalize_fps(fps)?, drop)
    }

    /// Parse text at `fps`, deriving the drop flag from the notation
    fn parse(text: &str, fps: impl Into<f64>) -> TimecodeResult<Timecode<Self>> {
        parse::parse_text(text, &ParseConfig::with_fps(fps))
    }

    fn parse_with(text: &str, config: &ParseConfig) -> TimecodeResult<Timecode<Self>> {
        parse::parse_text(text, config)
    }

    /// Like [`Variant::parse`] but unparseable text yields zero
    fn soft_parse(text: &str, fps: impl Into<f64>) -> TimecodeResult<Timecode<Self>> {
        parse::soft_parse_text(text, &ParseConfig::with_fps(fps))
    }

    fn soft_parse_with(text: &str, config: &ParseConfig) -> TimecodeResult<Timecode<Self>> {
        parse::soft_parse_text(text, config)
    }

    /// Parse `HH:MM:SS.fraction` (or `,fraction`)
    fn parse_with_fractional_seconds(
        text: &str,
        fps: impl Into<f64>,
    ) -> TimecodeResult<Timecode<Self>> {
        parse::parse_fractional_seconds(text, &ParseConfig::with_fps(fps))
    }

    /// Timecode nearest to `seconds` of elapsed time
    fn from_seconds(
        seconds: f64,
        fps: impl Into<f64>,
        drop: bool,
    ) -> TimecodeResult<Timecode<Self>> {
        Timecode::from_elapsed(seconds, normalize_fps(fps)?, drop)
    }

    /// Unpack a BCD-packed 32-bit timecode
    fn from_uint(uint: u32, fps: impl Into<f64>) -> TimecodeResult<Timecode<Self>> {
        crate::bcd::unpack(uint, normalize_fps(fps)?)
    }

    /// Frame number of an image sequence member, e.g. `render.0001234.exr`
    fn from_filename_in_sequence(
        filename: &str,
        fps: impl Into<f64>,
    ) -> TimecodeResult<Timecode<Self>> {
        parse::parse_sequence_filename(filename, normalize_fps(fps)?)
    }
}

/// Default variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Standard {}

impl Variant for Standard {
    const NAME: &'static str = "Timecode";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug)]
    enum CustomTc {}

    impl Variant for CustomTc {
        const NAME: &'static str = "CustomTC";
    }

    #[test]
    fn test_variant_survives_construction() {
        let parsed: Timecode<CustomTc> = CustomTc::parse("001", 25).unwrap();
        assert_eq!(parsed.total(), 1);

        let at = CustomTc::at(10, 10, 10, 10, 25, false).unwrap();
        assert_eq!(format!("{:?}", at), "#<CustomTC:10:10:10:10 (915260F@25.00)>");
    }

    #[test]
    fn test_variant_survives_arithmetic() {
        let ten_hours = CustomTc::parse("10h", 25).unwrap();
        let other = Timecode::new(10, 25, false).unwrap();

        let sum: Timecode<CustomTc> = (ten_hours + other).unwrap();
        let diff: Timecode<CustomTc> = (ten_hours - other).unwrap();
        let product: Timecode<CustomTc> = (ten_hours * 5).unwrap();
        let quotient: Timecode<CustomTc> = (ten_hours / 5).unwrap();

        assert_eq!(sum.total(), 900_010);
        assert_eq!(diff.total(), 899_990);
        assert_eq!(product.total(), 4_500_000);
        assert_eq!(quotient.total(), 180_000);
    }

    #[test]
    fn test_coerce() {
        let from_text = Standard::coerce("00:25:30:10", 25, false).unwrap();
        assert_eq!(from_text, Timecode::parse("00:25:30:10", 25).unwrap());

        let from_none = Standard::coerce(None, 25, false).unwrap();
        assert!(from_none.is_zero());

        let from_count = Standard::coerce(10u64, 24, false).unwrap();
        assert_eq!(from_count.total(), 10);
        assert_eq!(from_count.fps(), 24.0);
    }
}
