//! Arithmetic, comparison and frame ranges
//!
//! Operators between two timecodes require the same rate (within
//! [`crate::FRAMERATE_EPSILON`]) and the same drop flag. Results always carry
//! the rate, drop flag and variant of the left operand.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Add, Div, Mul, Sub};

use crate::framerate::framerates_in_delta;
use crate::{Standard, Timecode, TimecodeError, TimecodeResult, Variant};

impl<V: Variant> Timecode<V> {
    /// Whether `other` runs at the same rate
    #[inline]
    pub fn is_compatible_with<W: Variant>(&self, other: &Timecode<W>) -> bool {
        framerates_in_delta(self.fps(), other.fps())
    }

    /// Fail unless `other` has the same rate and drop flag
    pub fn ensure_compatible<W: Variant>(&self, other: &Timecode<W>) -> TimecodeResult<()> {
        if !self.is_compatible_with(other) {
            return Err(TimecodeError::WrongFramerate {
                expected: self.fps(),
                actual: other.fps(),
            });
        }
        if self.is_drop() != other.is_drop() {
            return Err(TimecodeError::WrongDropFlag {
                expected: self.is_drop(),
                actual: other.is_drop(),
            });
        }
        Ok(())
    }

    /// Order two timecodes, failing on incompatible rates
    pub fn try_cmp<W: Variant>(&self, other: &Timecode<W>) -> TimecodeResult<Ordering> {
        if !self.is_compatible_with(other) {
            return Err(TimecodeError::WrongFramerate {
                expected: self.fps(),
                actual: other.fps(),
            });
        }
        Ok(self.total().cmp(&other.total()))
    }

    /// The next frame
    pub fn succ(&self) -> TimecodeResult<Self> {
        self.offset(1)
    }

    /// Whether `other` is exactly one frame away at a compatible rate
    pub fn adjacent_to<W: Variant>(&self, other: &Timecode<W>) -> bool {
        self.is_compatible_with(other) && self.total().abs_diff(other.total()) == 1
    }

    /// Ratio of the frame counts, failing on a zero-frame divisor
    pub fn ratio_to<W: Variant>(&self, other: &Timecode<W>) -> TimecodeResult<f64> {
        if other.is_zero() {
            return Err(TimecodeError::DivisionByZero);
        }
        Ok(self.total() as f64 / other.total() as f64)
    }

    /// Consecutive frames from `self` up to, not including, `end`
    pub fn frames_until<W: Variant>(&self, end: &Timecode<W>) -> TimecodeResult<FrameRange<V>> {
        self.ensure_compatible(end)?;
        Ok(FrameRange {
            template: *self,
            next: self.total(),
            end: end.total().max(self.total()),
        })
    }

    fn offset(&self, delta: i128) -> TimecodeResult<Self> {
        Self::from_signed(self.total() as i128 + delta, self.fps(), self.is_drop())
    }
}

impl<V: Variant, W: Variant> PartialEq<Timecode<W>> for Timecode<V> {
    fn eq(&self, other: &Timecode<W>) -> bool {
        self.total() == other.total()
            && self.is_drop() == other.is_drop()
            && framerates_in_delta(self.fps(), other.fps())
    }
}

/// `None` when the rates are incompatible; use [`Timecode::try_cmp`] to get
/// the failure instead.
impl<V: Variant, W: Variant> PartialOrd<Timecode<W>> for Timecode<V> {
    fn partial_cmp(&self, other: &Timecode<W>) -> Option<Ordering> {
        let ordering = self.try_cmp(other).ok()?;
        // Keep consistent with PartialEq, which also compares drop flags
        Some(ordering.then(self.is_drop().cmp(&other.is_drop())))
    }
}

impl<V: Variant, W: Variant> Add<Timecode<W>> for Timecode<V> {
    type Output = TimecodeResult<Timecode<V>>;

    fn add(self, rhs: Timecode<W>) -> Self::Output {
        self.ensure_compatible(&rhs)?;
        self.offset(rhs.total() as i128)
    }
}

impl<V: Variant> Add<i64> for Timecode<V> {
    type Output = TimecodeResult<Timecode<V>>;

    fn add(self, rhs: i64) -> Self::Output {
        self.offset(rhs as i128)
    }
}

impl<V: Variant, W: Variant> Sub<Timecode<W>> for Timecode<V> {
    type Output = TimecodeResult<Timecode<V>>;

    fn sub(self, rhs: Timecode<W>) -> Self::Output {
        self.ensure_compatible(&rhs)?;
        self.offset(-(rhs.total() as i128))
    }
}

impl<V: Variant> Sub<i64> for Timecode<V> {
    type Output = TimecodeResult<Timecode<V>>;

    fn sub(self, rhs: i64) -> Self::Output {
        self.offset(-(rhs as i128))
    }
}

impl<V: Variant> Mul<i64> for Timecode<V> {
    type Output = TimecodeResult<Timecode<V>>;

    fn mul(self, rhs: i64) -> Self::Output {
        let total = (self.total() as i128)
            .checked_mul(rhs as i128)
            .ok_or(TimecodeError::Overflow)?;
        Timecode::from_signed(total, self.fps(), self.is_drop())
    }
}

impl<V: Variant> Div<i64> for Timecode<V> {
    type Output = TimecodeResult<Timecode<V>>;

    fn div(self, rhs: i64) -> Self::Output {
        if rhs == 0 {
            return Err(TimecodeError::DivisionByZero);
        }
        if rhs < 0 && !self.is_zero() {
            return Err(TimecodeError::Negative);
        }
        self.with_total(self.total() / rhs.unsigned_abs())
    }
}

/// Ratio of two frame counts; dimensionless, so rates are not checked
///
/// A zero-frame divisor yields `inf` (or `NaN` for `0 / 0`) as with any `f64`
/// division. [`Timecode::ratio_to`] reports it as an error instead.
impl<V: Variant, W: Variant> Div<Timecode<W>> for Timecode<V> {
    type Output = f64;

    fn div(self, rhs: Timecode<W>) -> f64 {
        self.total() as f64 / rhs.total() as f64
    }
}

/// Iterator over consecutive frames, see [`Timecode::frames_until`]
pub struct FrameRange<V: Variant = Standard> {
    template: Timecode<V>,
    next: u64,
    end: u64,
}

impl<V: Variant> Clone for FrameRange<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Variant> Copy for FrameRange<V> {}

impl<V: Variant> fmt::Debug for FrameRange<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameRange")
            .field("template", &self.template)
            .field("next", &self.next)
            .field("end", &self.end)
            .finish()
    }
}

impl<V: Variant> Iterator for FrameRange<V> {
    type Item = Timecode<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let tc = self.template.with_total(self.next).ok()?;
        self.next += 1;
        Some(tc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.end - self.next) as usize;
        (len, Some(len))
    }
}

impl<V: Variant> ExactSizeIterator for FrameRange<V> {}

impl<V: Variant> FusedIterator for FrameRange<V> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tc(total: u64) -> Timecode {
        Timecode::new(total, 25, false).unwrap()
    }

    #[test]
    fn test_equality_within_delta() {
        let a = Timecode::new(10, 25.0000000000000000000000000001, false).unwrap();
        let b = Timecode::new(10, 25.0000000000000000000000000002, false).unwrap();
        assert_eq!(a, b);
        assert_eq!(tc(9), tc(9));
        assert_ne!(tc(9), Timecode::new(9, 25, true).unwrap());
        assert_ne!(tc(9), Timecode::new(9, 24, false).unwrap());
    }

    #[test]
    fn test_ordering() {
        assert!(tc(10) > tc(9));
        assert!(tc(9) < tc(10));
        assert_eq!(tc(9).try_cmp(&tc(9)).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_ordering_incompatible_rates() {
        let a = Timecode::new(10, 10, false).unwrap();
        let b = Timecode::new(10, 20, false).unwrap();
        assert!(matches!(a.try_cmp(&b), Err(TimecodeError::WrongFramerate { .. })));
        assert_eq!(a.partial_cmp(&b), None);

        let c = Timecode::new(10, 25, false).unwrap();
        let d = Timecode::new(10, 30, false).unwrap();
        assert!(matches!(c.try_cmp(&d), Err(TimecodeError::WrongFramerate { .. })));
        assert!(matches!(d.try_cmp(&c), Err(TimecodeError::WrongFramerate { .. })));
    }

    #[test]
    fn test_addition() {
        let a = Timecode::new(24, 25.000000000000001, false).unwrap();
        let b = Timecode::new(22, 25.000000000000002, false).unwrap();
        assert_eq!((a + b).unwrap(), Timecode::new(46, 25.000000000000001, false).unwrap());
        assert_eq!((tc(5) + 5).unwrap(), tc(10));
    }

    #[test]
    fn test_addition_requires_same_rate_and_drop() {
        let err = (tc(10) + Timecode::new(10, 30, false).unwrap()).unwrap_err();
        assert!(matches!(err, TimecodeError::WrongFramerate { .. }));

        let a = Timecode::new(10, 29.97, false).unwrap();
        let b = Timecode::new(10, 29.97, true).unwrap();
        assert_eq!(
            (a + b).unwrap_err(),
            TimecodeError::WrongDropFlag { expected: false, actual: true }
        );
    }

    #[test]
    fn test_subtraction() {
        assert_eq!((tc(10) - tc(4)).unwrap(), tc(6));
        assert_eq!((tc(15) - 5).unwrap(), tc(10));
        assert_eq!((tc(4) - tc(10)).unwrap_err(), TimecodeError::Negative);
        assert_eq!((tc(4) - 5).unwrap_err(), TimecodeError::Negative);

        let err = (tc(10) - Timecode::new(10, 30, false).unwrap()).unwrap_err();
        assert!(matches!(err, TimecodeError::WrongFramerate { .. }));
    }

    #[test]
    fn test_multiplication() {
        assert_eq!((tc(10) * 10).unwrap(), tc(100));
        assert_eq!((tc(10) * -200).unwrap_err(), TimecodeError::Negative);
        assert!((tc(10) * 0).unwrap().is_zero());
    }

    #[test]
    fn test_division() {
        assert_eq!((tc(200) / 20).unwrap(), tc(10));
        assert_eq!((tc(201) / 20).unwrap(), tc(10));
        assert_eq!((tc(200) / 0).unwrap_err(), TimecodeError::DivisionByZero);
        assert_eq!((tc(200) / -2).unwrap_err(), TimecodeError::Negative);
        assert_eq!(tc(200) / tc(20), 10.0);
        assert_eq!(tc(200) / Timecode::new(20, 30, false).unwrap(), 10.0);
    }

    #[test]
    fn test_division_by_zero_frames() {
        assert_eq!(tc(200) / tc(0), f64::INFINITY);
        assert!((tc(0) / tc(0)).is_nan());
        assert_eq!(tc(200).ratio_to(&tc(0)).unwrap_err(), TimecodeError::DivisionByZero);
        assert_eq!(tc(200).ratio_to(&tc(20)).unwrap(), 10.0);
    }

    #[test]
    fn test_succ() {
        assert_eq!(tc(10).succ().unwrap().total(), 11);
        let at45 = Timecode::new(22, 45, false).unwrap();
        assert_eq!(at45.succ().unwrap(), Timecode::new(23, 45, false).unwrap());
    }

    #[test]
    fn test_adjacency() {
        assert!(tc(10).adjacent_to(&tc(9)));
        assert!(tc(10).adjacent_to(&tc(11)));
        assert!(!tc(10).adjacent_to(&tc(12)));
        assert!(!tc(10).adjacent_to(&tc(10)));
        assert!(!tc(10).adjacent_to(&Timecode::new(11, 30, false).unwrap()));
    }

    #[test]
    fn test_frame_range() {
        let frames: Vec<Timecode> = tc(10).frames_until(&tc(20)).unwrap().collect();
        assert_eq!(frames.len(), 10);
        assert_eq!(frames[4], tc(14));
        assert_eq!(frames.last().unwrap().total(), 19);

        assert_eq!(tc(20).frames_until(&tc(10)).unwrap().count(), 0);
        assert!(tc(10).frames_until(&Timecode::new(20, 30, false).unwrap()).is_err());
    }

    /// Variant without any derived traits
    enum Bare {}

    impl Variant for Bare {
        const NAME: &'static str = "Bare";
    }

    #[test]
    fn test_frame_range_of_plain_variant() {
        let start = Bare::new(10, 25, false).unwrap();
        let range = start.frames_until(&tc(13)).unwrap();
        let copy = range;
        assert_eq!(copy.count(), 3);
        assert_eq!(range.len(), 3);
        assert!(format!("{:?}", range).starts_with("FrameRange { template: #<Bare:00:00:00:10"));
    }
}
