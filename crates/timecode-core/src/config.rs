//! Timecode constants and parser configuration

/// Framerate used when the caller does not name one
pub const DEFAULT_FPS: f64 = 25.0;

/// Highest hour a timecode can carry
pub const MAX_HOURS: u32 = 999;

/// Highest rate whose frame count over 1000 hours fits in a `u64`
pub const MAX_FPS: f64 = (u64::MAX / (3600 * 1000)) as f64;

/// Highest minute and second value
pub const MAX_MINUTES: u32 = 59;
pub const MAX_SECONDS: u32 = 59;

/// Relative tolerance under which two framerates are the same rate
pub const FRAMERATE_EPSILON: f64 = 1e-6;

/// Legacy tick resolution (1/250 s)
pub const TICKS_PER_SECOND: u32 = 250;

/// Digits kept from a bare digit string before grouping (HHMMSSFF)
pub const DEFAULT_MAX_DIGITS: usize = 8;

/// Rate implied by the `+` frame separator
pub const FILM_FPS: f64 = 24.0;

/// Text parser configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ParseConfig {
    /// Framerate of the produced timecode
    pub fps: f64,
    /// Drop-frame intention. `None` derives it from the frame separator
    pub drop: Option<bool>,
    /// Bare digit strings longer than this are truncated from the right
    pub max_digits: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            fps: DEFAULT_FPS,
            drop: None,
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }
}

impl ParseConfig {
    /// Configuration for the given rate with derived drop flag
    pub fn with_fps(fps: impl Into<f64>) -> Self {
        ParseConfig {
            fps: fps.into(),
            ..Default::default()
        }
    }

    /// 24 fps film
    pub fn film() -> Self {
        Self::with_fps(FILM_FPS)
    }

    /// 25 fps PAL
    pub fn pal() -> Self {
        Self::default()
    }

    /// 29.97 fps NTSC, drop-frame
    pub fn ntsc_drop() -> Self {
        ParseConfig {
            fps: 29.97,
            drop: Some(true),
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }

    pub fn drop(mut self, drop: bool) -> Self {
        self.drop = Some(drop);
        self
    }

    pub fn max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = max_digits;
        self
    }
}
