//! Range validation of framerates and clock atoms

use crate::dropframe::{Atoms, DropFrameConverter};
use crate::{
    Atom, FramerateRegistry, TimecodeError, TimecodeResult, MAX_FPS, MAX_HOURS, MAX_MINUTES,
    MAX_SECONDS,
};

/// Normalize a framerate at a public constructor boundary
///
/// Any numeric rate becomes `f64`; the rate must be finite, round to at
/// least one frame per second and stay within [`MAX_FPS`].
pub fn normalize_fps(fps: impl Into<f64>) -> TimecodeResult<f64> {
    let fps = fps.into();
    if !fps.is_finite() || fps.round() < 1.0 || fps.round() > MAX_FPS {
        return Err(TimecodeError::InvalidFramerate(fps));
    }
    Ok(fps)
}

/// Check hours, minutes, seconds and frames against their limits at `fps`
///
/// Checks run in that order and the first overflowing atom is reported.
pub fn validate_atoms(
    hours: u64,
    minutes: u32,
    seconds: u32,
    frames: u32,
    fps: f64,
) -> TimecodeResult<()> {
    let fps = normalize_fps(fps)?;

    check(Atom::Hours, hours, MAX_HOURS as u64)?;
    check(Atom::Minutes, minutes as u64, MAX_MINUTES as u64)?;
    check(Atom::Seconds, seconds as u64, MAX_SECONDS as u64)?;

    let max_frame = FramerateRegistry::global().max_frame_index(fps);
    check(Atom::Frames, frames as u64, max_frame)
}

/// Validate atoms and, for drop-frame, reject frame numbers the cadence skips
pub(crate) fn validate_timecode_atoms(atoms: Atoms, fps: f64, drop: bool) -> TimecodeResult<()> {
    validate_atoms(atoms.hours, atoms.minutes, atoms.seconds, atoms.frames, fps)?;

    if drop && DropFrameConverter::new(fps, true).is_skipped(atoms) {
        return Err(TimecodeError::DroppedFrameNumber {
            minute: atoms.minutes,
            frame: atoms.frames,
        });
    }
    Ok(())
}

#[inline]
fn check(atom: Atom, value: u64, limit: u64) -> TimecodeResult<()> {
    if value > limit {
        Err(TimecodeError::AtomOutOfRange { atom, value, limit })
    } else {
        Ok(())
    }
}
