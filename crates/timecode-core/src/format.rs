//! Text rendering of timecodes

use std::fmt;

use crate::framerate::framerates_in_delta;
use crate::{Timecode, Variant, FILM_FPS};

impl<V: Variant> Timecode<V> {
    /// `HH:MM:SS:FF`, hours rolled over at 100, `;` before frames when dropping
    pub fn to_s(&self) -> String {
        self.to_string()
    }

    /// Like [`Timecode::to_s`] but hours are not rolled over
    pub fn to_s_without_rollover(&self) -> String {
        let atoms = self.atoms();
        format!(
            "{:02}:{:02}:{:02}{}{:02}",
            atoms.hours,
            atoms.minutes,
            atoms.seconds,
            self.frame_separator(),
            atoms.frames
        )
    }

    /// `HH:MM:SS.FF` with frames expressed as hundredths of a second
    pub fn with_fractional_seconds(&self) -> String {
        self.with_fraction_separator('.')
    }

    pub fn with_frames_as_fraction(&self) -> String {
        self.with_fractional_seconds()
    }

    /// `HH:MM:SS,FF`, SubRip style
    pub fn with_srt_fraction(&self) -> String {
        self.with_fraction_separator(',')
    }

    /// Debug form, e.g. `#<Timecode:00:00:00:10 (10F@25.00)>`
    pub fn inspect(&self) -> String {
        format!("{:?}", self)
    }

    #[inline]
    fn frame_separator(&self) -> char {
        if self.is_drop() {
            ';'
        } else {
            ':'
        }
    }

    fn with_fraction_separator(&self, separator: char) -> String {
        let atoms = self.atoms();
        let hundredths = ((atoms.frames as f64 / self.fps()) * 100.0).round().min(99.0) as u32;
        format!(
            "{:02}:{:02}:{:02}{}{:02}",
            atoms.hours % 100,
            atoms.minutes,
            atoms.seconds,
            separator,
            hundredths
        )
    }
}

impl<V: Variant> fmt::Display for Timecode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let atoms = self.atoms();
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            atoms.hours % 100,
            atoms.minutes,
            atoms.seconds,
            self.frame_separator(),
            atoms.frames
        )
    }
}

impl<V: Variant> fmt::Debug for Timecode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let atoms = self.atoms();
        // Film material shows the legacy `+` separator
        let separator = if !self.is_drop() && framerates_in_delta(self.fps(), FILM_FPS) {
            '+'
        } else {
            self.frame_separator()
        };
        write!(
            f,
            "#<{}:{:02}:{:02}:{:02}{}{:02} ({}F@{:.2})>",
            V::NAME,
            atoms.hours % 100,
            atoms.minutes,
            atoms.seconds,
            separator,
            atoms.frames,
            self.total(),
            self.fps()
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::Timecode;

    #[test]
    fn test_to_s() {
        assert_eq!(Timecode::new(5, 25, false).unwrap().to_s(), "00:00:00:05");
        assert_eq!(Timecode::at(10, 10, 34, 10, 25, false).unwrap().to_s(), "10:10:34:10");
    }

    #[test]
    fn test_rollover() {
        let tc = Timecode::at(123, 4, 5, 6, 25, false).unwrap();
        assert_eq!(tc.to_s(), "23:04:05:06");
        assert_eq!(tc.to_s_without_rollover(), "123:04:05:06");

        let tc = Timecode::at(7, 0, 0, 0, 25, false).unwrap();
        assert_eq!(tc.to_s_without_rollover(), "07:00:00:00");
    }

    #[test]
    fn test_fractional_seconds() {
        let tc = Timecode::new(100 - 1, 25, false).unwrap();
        assert_eq!(tc.frames(), 24);
        assert_eq!(tc.with_frames_as_fraction(), "00:00:03.96");
        assert_eq!(tc.with_fractional_seconds(), "00:00:03.96");
        assert_eq!(tc.with_srt_fraction(), "00:00:03,96");
    }

    #[test]
    fn test_inspect() {
        let inspect = |fps: f64| Timecode::new(10, fps, false).unwrap().inspect();
        assert_eq!(inspect(25.0), "#<Timecode:00:00:00:10 (10F@25.00)>");
        assert_eq!(inspect(12.0), "#<Timecode:00:00:00:10 (10F@12.00)>");
        assert_eq!(inspect(24.0), "#<Timecode:00:00:00+10 (10F@24.00)>");
        assert_eq!(
            Timecode::new(9662, 29.97, true).unwrap().inspect(),
            "#<Timecode:00:05:22;12 (9662F@29.97)>"
        );
    }
}
