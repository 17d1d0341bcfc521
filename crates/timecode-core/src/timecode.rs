//! The timecode value type

use std::marker::PhantomData;
use std::str::FromStr;

use crate::dropframe::{Atoms, DropFrameConverter};
use crate::validate::{normalize_fps, validate_timecode_atoms};
use crate::{
    Atom, ParseConfig, Standard, TimecodeError, TimecodeResult, Variant, DEFAULT_FPS, MAX_HOURS,
};

/// Immutable, frame-accurate SMPTE timecode
///
/// A frame count since `00:00:00:00` at a framerate, with a drop-frame flag.
/// The type parameter names the [`Variant`] the value belongs to.
pub struct Timecode<V = Standard> {
    /// Absolute frame count
    total: u64,
    /// Frames per second
    fps: f64,
    /// Drop-frame flag
    drop: bool,
    variant: PhantomData<fn() -> V>,
}

impl<V> Clone for Timecode<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Timecode<V> {}

/// Frame count argument of [`Variant::coerce`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameSource<'a> {
    /// No count given, the zero timecode
    Zero,
    /// Raw frame count
    Count(u64),
    /// Text to parse
    Text(&'a str),
}

impl From<u64> for FrameSource<'_> {
    fn from(total: u64) -> Self {
        FrameSource::Count(total)
    }
}

impl From<Option<u64>> for FrameSource<'_> {
    fn from(total: Option<u64>) -> Self {
        total.map_or(FrameSource::Zero, FrameSource::Count)
    }
}

impl<'a> From<&'a str> for FrameSource<'a> {
    fn from(text: &'a str) -> Self {
        FrameSource::Text(text)
    }
}

impl<V: Variant> Timecode<V> {
    /// Build from a frame count at an already-normalized rate
    pub(crate) fn from_frames(total: u64, fps: f64, drop: bool) -> TimecodeResult<Self> {
        let hours = DropFrameConverter::new(fps, drop).to_atoms(total).hours;
        if hours > MAX_HOURS as u64 {
            return Err(TimecodeError::AtomOutOfRange {
                atom: Atom::Hours,
                value: hours,
                limit: MAX_HOURS as u64,
            });
        }

        Ok(Timecode {
            total,
            fps,
            drop,
            variant: PhantomData,
        })
    }

    /// Build from a signed frame count, rejecting negative results
    pub(crate) fn from_signed(total: i128, fps: f64, drop: bool) -> TimecodeResult<Self> {
        if total < 0 {
            return Err(TimecodeError::Negative);
        }
        let total = u64::try_from(total).map_err(|_| TimecodeError::Overflow)?;
        Self::from_frames(total, fps, drop)
    }

    pub(crate) fn from_atoms(atoms: Atoms, fps: f64, drop: bool) -> TimecodeResult<Self> {
        validate_timecode_atoms(atoms, fps, drop)?;
        let total = DropFrameConverter::new(fps, drop).to_total(atoms);
        Self::from_frames(total, fps, drop)
    }

    pub(crate) fn from_elapsed(seconds: f64, fps: f64, drop: bool) -> TimecodeResult<Self> {
        let frames = (seconds * fps).round();
        if !frames.is_finite() || frames >= u64::MAX as f64 {
            return Err(TimecodeError::Overflow);
        }
        if frames < 0.0 {
            return Err(TimecodeError::Negative);
        }
        Self::from_frames(frames as u64, fps, drop)
    }

    /// New frame count at this value's rate and drop flag
    #[inline]
    pub(crate) fn with_total(&self, total: u64) -> TimecodeResult<Self> {
        Self::from_frames(total, self.fps, self.drop)
    }

    /// Absolute frame count
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Frames per second
    #[inline]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    #[inline]
    pub fn is_drop(&self) -> bool {
        self.drop
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total == 0
    }

    /// Converter for this value's rate and drop flag
    #[inline]
    pub fn converter(&self) -> DropFrameConverter {
        DropFrameConverter::new(self.fps, self.drop)
    }

    /// All four clock atoms
    pub fn atoms(&self) -> Atoms {
        self.converter().to_atoms(self.total)
    }

    pub fn hours(&self) -> u32 {
        self.atoms().hours as u32
    }

    pub fn minutes(&self) -> u32 {
        self.atoms().minutes
    }

    pub fn seconds(&self) -> u32 {
        self.atoms().seconds
    }

    pub fn frames(&self) -> u32 {
        self.atoms().frames
    }

    /// Duration of one frame in seconds
    #[inline]
    pub fn frame_interval(&self) -> f64 {
        1.0 / self.fps
    }

    /// Elapsed seconds since zero
    #[inline]
    pub fn to_seconds(&self) -> f64 {
        self.total as f64 / self.fps
    }

    /// Frame count as an integer
    #[inline]
    pub fn to_i(&self) -> u64 {
        self.total
    }

    /// Same frame count interpreted at another rate
    ///
    /// This does not preserve elapsed wall-clock time.
    pub fn convert(&self, fps: impl Into<f64>, drop: bool) -> TimecodeResult<Self> {
        Self::from_frames(self.total, normalize_fps(fps)?, drop)
    }

    /// Re-tag the value as another variant
    pub fn into_variant<W: Variant>(self) -> Timecode<W> {
        Timecode {
            total: self.total,
            fps: self.fps,
            drop: self.drop,
            variant: PhantomData,
        }
    }
}

impl Timecode<Standard> {
    /// Timecode from a raw frame count
    pub fn new(total: u64, fps: impl Into<f64>, drop: bool) -> TimecodeResult<Self> {
        Standard::new(total, fps, drop)
    }

    /// Timecode from a frame count, text, or nothing (zero)
    pub fn coerce<'a>(
        source: impl Into<FrameSource<'a>>,
        fps: impl Into<f64>,
        drop: bool,
    ) -> TimecodeResult<Self> {
        Standard::coerce(source, fps, drop)
    }

    pub fn zero(fps: impl Into<f64>) -> TimecodeResult<Self> {
        Standard::zero(fps)
    }

    /// Timecode from validated clock atoms
    pub fn at(
        hours: u32,
        minutes: u32,
        seconds: u32,
        frames: u32,
        fps: impl Into<f64>,
        drop: bool,
    ) -> TimecodeResult<Self> {
        Standard::at(hours, minutes, seconds, frames, fps, drop)
    }

    pub fn parse(text: &str, fps: impl Into<f64>) -> TimecodeResult<Self> {
        Standard::parse(text, fps)
    }

    pub fn parse_with(text: &str, config: &ParseConfig) -> TimecodeResult<Self> {
        Standard::parse_with(text, config)
    }

    pub fn soft_parse(text: &str, fps: impl Into<f64>) -> TimecodeResult<Self> {
        Standard::soft_parse(text, fps)
    }

    pub fn soft_parse_with(text: &str, config: &ParseConfig) -> TimecodeResult<Self> {
        Standard::soft_parse_with(text, config)
    }

    pub fn parse_with_fractional_seconds(text: &str, fps: impl Into<f64>) -> TimecodeResult<Self> {
        Standard::parse_with_fractional_seconds(text, fps)
    }

    pub fn from_seconds(seconds: f64, fps: impl Into<f64>, drop: bool) -> TimecodeResult<Self> {
        Standard::from_seconds(seconds, fps, drop)
    }

    pub fn from_uint(uint: u32, fps: impl Into<f64>) -> TimecodeResult<Self> {
        Standard::from_uint(uint, fps)
    }

    pub fn from_filename_in_sequence(filename: &str, fps: impl Into<f64>) -> TimecodeResult<Self> {
        Standard::from_filename_in_sequence(filename, fps)
    }
}

impl<V> Default for Timecode<V> {
    fn default() -> Self {
        Timecode {
            total: 0,
            fps: DEFAULT_FPS,
            drop: false,
            variant: PhantomData,
        }
    }
}

impl<V: Variant> FromStr for Timecode<V> {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        V::parse(s, DEFAULT_FPS)
    }
}

impl<V> From<Timecode<V>> for u64 {
    fn from(tc: Timecode<V>) -> u64 {
        tc.total
    }
}
