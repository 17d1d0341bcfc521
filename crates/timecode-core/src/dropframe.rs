//! Frame count <-> clock atom conversion, with NTSC drop-frame cadence
//!
//! Drop-frame timecode skips the first `drop_per_minute` frame numbers of
//! every minute except each tenth minute, so that the clock stays in step
//! with wall time at 29.97/59.94 fps. Only rates whose rounded value is a
//! multiple of 30 have such a cadence; for any other rate the drop flag is
//! carried but produces no adjustment.

use crate::framerate::round_fps;

/// Clock atoms of a timecode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Atoms {
    pub hours: u64,
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
}

impl Atoms {
    pub fn new(hours: u64, minutes: u32, seconds: u32, frames: u32) -> Self {
        Atoms {
            hours,
            minutes,
            seconds,
            frames,
        }
    }
}

/// Whether `fps` has a standard drop-frame cadence
#[inline]
pub fn has_drop_cadence(fps: f64) -> bool {
    let rounded = round_fps(fps);
    rounded > 0 && rounded % 30 == 0
}

/// Frame numbers skipped per minute at `fps` (zero without a cadence)
#[inline]
pub fn drop_frames_per_minute(fps: f64) -> u64 {
    if has_drop_cadence(fps) {
        (fps * 0.066666).round() as u64
    } else {
        0
    }
}

/// Bidirectional total <-> atoms converter for one rate and drop flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropFrameConverter {
    /// Rounded frames per second
    rounded: u64,
    /// Frame numbers dropped at the start of each non-tenth minute
    drop_per_minute: u64,
    /// Frames in a minute that drops
    frames_per_minute: u64,
    /// Frames in a ten-minute block
    frames_per_ten_minutes: u64,
}

impl DropFrameConverter {
    pub fn new(fps: f64, drop: bool) -> Self {
        let rounded = round_fps(fps).max(1);
        // Never more than a fifteenth of the frame numbers in a second
        let drop_per_minute = if drop {
            drop_frames_per_minute(fps).min(rounded / 15)
        } else {
            0
        };
        let frames_per_minute = rounded.saturating_mul(60) - drop_per_minute;
        // One full minute plus nine dropping ones. Equals round(fps * 600)
        // for 29.97 and 59.94, and stays exact for nominal 30/60 DF.
        let frames_per_ten_minutes = rounded.saturating_mul(600) - drop_per_minute * 9;

        DropFrameConverter {
            rounded,
            drop_per_minute,
            frames_per_minute,
            frames_per_ten_minutes,
        }
    }

    #[inline]
    pub fn rounded_fps(&self) -> u64 {
        self.rounded
    }

    #[inline]
    pub fn drop_per_minute(&self) -> u64 {
        self.drop_per_minute
    }

    #[inline]
    pub fn is_dropping(&self) -> bool {
        self.drop_per_minute > 0
    }

    /// Convert an absolute frame count to clock atoms
    ///
    /// Saturates for totals past `u64::MAX` once drop adjustments are added.
    pub fn to_atoms(&self, total: u64) -> Atoms {
        let adjusted = if self.is_dropping() {
            let dpm = self.drop_per_minute;
            let tens = total / self.frames_per_ten_minutes;
            let rem = total % self.frames_per_ten_minutes;

            let mut adjusted = total.saturating_add((dpm * 9).saturating_mul(tens));
            if rem > dpm {
                adjusted = adjusted.saturating_add(dpm * ((rem - dpm) / self.frames_per_minute));
            }
            adjusted
        } else {
            total
        };

        let fps = self.rounded;
        Atoms {
            hours: adjusted / fps.saturating_mul(3600),
            minutes: ((adjusted / fps.saturating_mul(60)) % 60) as u32,
            seconds: ((adjusted / fps) % 60) as u32,
            frames: (adjusted % fps) as u32,
        }
    }

    /// Convert clock atoms to an absolute frame count
    ///
    /// Atoms naming a skipped drop-frame number map onto the frame before
    /// the skip; validation rejects them upstream.
    pub fn to_total(&self, atoms: Atoms) -> u64 {
        let total_minutes = atoms.hours.saturating_mul(60).saturating_add(atoms.minutes as u64);
        let naive = total_minutes
            .saturating_mul(60)
            .saturating_add(atoms.seconds as u64)
            .saturating_mul(self.rounded)
            .saturating_add(atoms.frames as u64);

        if self.is_dropping() {
            let dropped = self
                .drop_per_minute
                .saturating_mul(total_minutes - total_minutes / 10);
            naive.saturating_sub(dropped)
        } else {
            naive
        }
    }

    /// Whether the atoms name a frame number skipped by the drop cadence
    pub fn is_skipped(&self, atoms: Atoms) -> bool {
        self.is_dropping()
            && atoms.minutes % 10 != 0
            && atoms.seconds == 0
            && (atoms.frames as u64) < self.drop_per_minute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ntsc_constants() {
        let c = DropFrameConverter::new(29.97, true);
        assert_eq!(c.rounded_fps(), 30);
        assert_eq!(c.drop_per_minute(), 2);
        assert_eq!(c.frames_per_ten_minutes, 17982);

        let c = DropFrameConverter::new(59.94, true);
        assert_eq!(c.rounded_fps(), 60);
        assert_eq!(c.drop_per_minute(), 4);
        assert_eq!(c.frames_per_ten_minutes, 35964);
    }

    #[test]
    fn test_no_cadence_rates() {
        assert!(!has_drop_cadence(25.0));
        assert!(!has_drop_cadence(23.976));
        assert!(has_drop_cadence(29.97));
        assert!(!DropFrameConverter::new(25.0, true).is_dropping());
        assert!(!DropFrameConverter::new(29.97, false).is_dropping());
    }

    #[test]
    fn test_drop_frame_decode() {
        let df = DropFrameConverter::new(29.97, true);
        assert_eq!(df.to_atoms(9662), Atoms::new(0, 5, 22, 12));
        assert_eq!(df.to_atoms(1800), Atoms::new(0, 1, 0, 2));
        assert_eq!(df.to_atoms(1799), Atoms::new(0, 0, 59, 29));
        // Ten-minute boundary does not skip
        assert_eq!(df.to_atoms(17982), Atoms::new(0, 10, 0, 0));
        // One hour of drop-frame
        assert_eq!(df.to_atoms(107892), Atoms::new(1, 0, 0, 0));

        let ndf = DropFrameConverter::new(29.97, false);
        assert_eq!(ndf.to_atoms(9662), Atoms::new(0, 5, 22, 2));
    }

    #[test]
    fn test_drop_frame_encode() {
        let df = DropFrameConverter::new(29.97, true);
        assert_eq!(df.to_total(Atoms::new(0, 1, 0, 2)), 1800);
        assert_eq!(df.to_total(Atoms::new(0, 5, 22, 12)), 9662);
        assert_eq!(df.to_total(Atoms::new(1, 0, 0, 0)), 107892);
    }

    #[test]
    fn test_pal_decode() {
        let c = DropFrameConverter::new(25.0, false);
        assert_eq!(c.to_atoms(822233), Atoms::new(9, 8, 9, 8));
        assert_eq!(c.to_total(Atoms::new(9, 8, 9, 8)), 822233);
    }

    #[test]
    fn test_exhaustive_roundtrip_first_twenty_minutes() {
        for (fps, drop) in [(29.97, true), (59.94, true), (29.97, false), (24.0, false)] {
            let c = DropFrameConverter::new(fps, drop);
            for total in 0..(c.rounded_fps() * 60 * 20) {
                let atoms = c.to_atoms(total);
                assert!(!c.is_skipped(atoms), "{fps} {total} decoded to skipped {atoms:?}");
                assert_eq!(c.to_total(atoms), total, "{fps} drop={drop}");
            }
        }
    }

    #[test]
    fn test_extreme_totals_saturate() {
        let df = DropFrameConverter::new(29.97, true);
        let atoms = df.to_atoms(u64::MAX);
        assert!(atoms.hours >= 1000);
        let _ = df.to_total(Atoms::new(u64::MAX, 59, 59, 29));

        let ndf = DropFrameConverter::new(25.0, false);
        assert_eq!(ndf.to_atoms(u64::MAX).hours, u64::MAX / (25 * 3600));
    }

    #[test]
    fn test_extreme_rates_do_not_overflow() {
        for drop in [false, true] {
            let c = DropFrameConverter::new(1e30, drop);
            assert_eq!(c.rounded_fps(), u64::MAX);
            assert!(c.drop_per_minute() <= u64::MAX / 15);
            let atoms = c.to_atoms(u64::MAX);
            let _ = c.to_total(atoms);
        }
    }

    #[test]
    fn test_skipped_numbers() {
        let df = DropFrameConverter::new(29.97, true);
        assert!(df.is_skipped(Atoms::new(0, 1, 0, 0)));
        assert!(df.is_skipped(Atoms::new(0, 1, 0, 1)));
        assert!(!df.is_skipped(Atoms::new(0, 1, 0, 2)));
        assert!(!df.is_skipped(Atoms::new(0, 10, 0, 0)));
    }
}
