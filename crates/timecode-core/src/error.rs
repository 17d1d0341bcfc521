//! Error types for timecode construction, parsing and arithmetic

use std::fmt;

use thiserror::Error;

/// Clock atom of a timecode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Atom {
    Hours,
    Minutes,
    Seconds,
    Frames,
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Atom::Hours => "hours",
            Atom::Minutes => "minutes",
            Atom::Seconds => "seconds",
            Atom::Frames => "frames",
        };
        f.write_str(name)
    }
}

/// Core timecode errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimecodeError {
    // Range errors
    #[error("There can be no more than {limit} {atom}, got {value}")]
    AtomOutOfRange { atom: Atom, value: u64, limit: u64 },

    #[error("Drop-frame timecode skips frame {frame} at the start of minute {minute}")]
    DroppedFrameNumber { minute: u32, frame: u32 },

    #[error("Timecode cannot be negative")]
    Negative,

    #[error("Frame count overflow")]
    Overflow,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid framerate: {0}")]
    InvalidFramerate(f64),

    #[error("Ticks must be in 0..=249, got {0}")]
    TicksOutOfRange(u32),

    #[error("Invalid BCD byte: {0:#04x}")]
    InvalidBcd(u8),

    #[error("Buffer too short: expected {expected}, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    // Parse errors
    #[error("Cannot parse {0:?} as timecode")]
    CannotParse(String),

    // Compatibility errors
    #[error("Framerate mismatch: {expected} vs {actual}")]
    WrongFramerate { expected: f64, actual: f64 },

    #[error("Drop-frame flag mismatch: expected {expected}, got {actual}")]
    WrongDropFlag { expected: bool, actual: bool },
}

/// Failure kind of a [`TimecodeError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An atom, total, tick count or BCD byte is out of its valid range
    Range,
    /// Input text matches none of the recognized notations
    CannotParse,
    /// Operands have incompatible framerates
    WrongFramerate,
    /// Operands disagree on the drop-frame flag
    WrongDropFlag,
}

impl TimecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TimecodeError::CannotParse(_) => ErrorKind::CannotParse,
            TimecodeError::WrongFramerate { .. } => ErrorKind::WrongFramerate,
            TimecodeError::WrongDropFlag { .. } => ErrorKind::WrongDropFlag,
            TimecodeError::AtomOutOfRange { .. }
            | TimecodeError::DroppedFrameNumber { .. }
            | TimecodeError::Negative
            | TimecodeError::Overflow
            | TimecodeError::DivisionByZero
            | TimecodeError::InvalidFramerate(_)
            | TimecodeError::TicksOutOfRange(_)
            | TimecodeError::InvalidBcd(_)
            | TimecodeError::BufferTooShort { .. } => ErrorKind::Range,
        }
    }

    #[inline]
    pub fn is_range_error(&self) -> bool {
        self.kind() == ErrorKind::Range
    }

    #[inline]
    pub fn is_cannot_parse(&self) -> bool {
        self.kind() == ErrorKind::CannotParse
    }
}

/// Result type for timecode operations
pub type TimecodeResult<T> = Result<T, TimecodeError>;
