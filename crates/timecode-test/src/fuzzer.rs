//! Timecode Fuzzer - Randomized invariant sweeps
//!
//! Tests:
//! - Frame count <-> atom round trip, drop-frame and non-drop
//! - BCD pack/unpack round trip
//! - Text rendering/parsing round trip
//! - Addition/subtraction inverse
//! - Ordering defined exactly for compatible rates

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use timecode_core::{Atoms, DropFrameConverter, Timecode, TimecodeResult};

/// Rates swept by the fuzzer, with drop flag
pub const SWEEP_RATES: &[(f64, bool)] = &[
    (24.0, false),
    (25.0, false),
    (30.0, false),
    (50.0, false),
    (60.0, false),
    (23.976, false),
    (29.97, false),
    (29.97, true),
    (59.94, true),
];

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct FuzzerConfig {
    /// Number of random timecodes to check
    pub iterations: usize,
    /// Highest hour generated
    pub max_hours: u32,
    /// Random seed
    pub seed: u64,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        FuzzerConfig {
            iterations: 10_000,
            max_hours: 99,
            seed: 42,
        }
    }
}

impl FuzzerConfig {
    /// Light sweep for quick tests
    pub fn light() -> Self {
        FuzzerConfig {
            iterations: 500,
            max_hours: 99,
            seed: 42,
        }
    }

    /// Heavy sweep across the full hour range
    pub fn heavy() -> Self {
        FuzzerConfig {
            iterations: 200_000,
            max_hours: 999,
            seed: 42,
        }
    }
}

/// Randomized invariant checker
pub struct TimecodeFuzzer {
    config: FuzzerConfig,
    rng: StdRng,
}

impl TimecodeFuzzer {
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        TimecodeFuzzer { config, rng }
    }

    /// Random valid timecode at one of the sweep rates
    pub fn random_timecode(&mut self) -> TimecodeResult<Timecode> {
        let (fps, drop) = SWEEP_RATES[self.rng.gen_range(0..SWEEP_RATES.len())];
        let total = self.rng.gen_range(0..=max_total(fps, drop, self.config.max_hours));
        Timecode::new(total, fps, drop)
    }

    /// Random valid timecode at the rate of `like`
    fn random_like(&mut self, like: &Timecode) -> TimecodeResult<Timecode> {
        let total = self
            .rng
            .gen_range(0..=max_total(like.fps(), like.is_drop(), self.config.max_hours));
        Timecode::new(total, like.fps(), like.is_drop())
    }

    /// Run the sweep
    pub fn run(&mut self) -> TimecodeResult<FuzzResult> {
        let mut result = FuzzResult::default();

        for _ in 0..self.config.iterations {
            let tc = self.random_timecode()?;
            let other = self.random_like(&tc)?;
            let foreign = self.random_timecode()?;

            if !properties::atoms_roundtrip(&tc) {
                result.atom_violations += 1;
            }
            if tc.hours() <= 99 {
                if !tc.is_drop() && !properties::uint_roundtrip(&tc) {
                    result.uint_violations += 1;
                }
                if !properties::text_roundtrip(&tc) {
                    result.text_violations += 1;
                }
            }
            if !properties::add_sub_inverse(&tc, &other) {
                result.arithmetic_violations += 1;
            }
            if !properties::ordering_defined(&tc, &other)
                || !properties::ordering_defined(&tc, &foreign)
                || !properties::equality_symmetric(&tc, &foreign)
            {
                result.ordering_violations += 1;
            }
            result.checked += 1;
        }

        tracing::debug!(
            checked = result.checked,
            violations = result.violations(),
            seed = self.config.seed,
            "timecode sweep finished"
        );
        Ok(result)
    }
}

/// Largest frame count at or below `max_hours:59:59:ff`
fn max_total(fps: f64, drop: bool, max_hours: u32) -> u64 {
    let converter = DropFrameConverter::new(fps, drop);
    let last_frame = converter.rounded_fps() as u32 - 1;
    converter.to_total(Atoms::new(max_hours as u64, 59, 59, last_frame))
}

/// Sweep result
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FuzzResult {
    pub checked: u64,
    pub atom_violations: u64,
    pub uint_violations: u64,
    pub text_violations: u64,
    pub arithmetic_violations: u64,
    pub ordering_violations: u64,
}

impl FuzzResult {
    pub fn violations(&self) -> u64 {
        self.atom_violations
            + self.uint_violations
            + self.text_violations
            + self.arithmetic_violations
            + self.ordering_violations
    }

    pub fn is_valid(&self) -> bool {
        self.violations() == 0
    }
}

/// Property helpers shared with the proptest suite
pub mod properties {
    use timecode_core::{Timecode, Variant};

    /// Property: decoding then encoding the atoms restores the frame count
    pub fn atoms_roundtrip<V: Variant>(tc: &Timecode<V>) -> bool {
        tc.converter().to_total(tc.atoms()) == tc.total()
    }

    /// Property: BCD packing is lossless for non-drop timecodes under 100 hours
    pub fn uint_roundtrip(tc: &Timecode) -> bool {
        tc.to_uint()
            .and_then(|packed| Timecode::from_uint(packed, tc.fps()))
            .map_or(false, |back| back == *tc)
    }

    /// Property: parsing the SMPTE rendering restores the value
    pub fn text_roundtrip(tc: &Timecode) -> bool {
        Timecode::parse(&tc.to_s(), tc.fps()).map_or(false, |back| back == *tc)
    }

    /// Property: `(a + b) - b == a` whenever the sum is representable
    pub fn add_sub_inverse<V: Variant>(a: &Timecode<V>, b: &Timecode) -> bool {
        match *a + *b {
            Ok(sum) => (sum - *b).map_or(false, |back| back == *a),
            Err(err) => err.is_range_error(),
        }
    }

    /// Property: ordering succeeds exactly when rates are compatible
    pub fn ordering_defined<V: Variant>(a: &Timecode<V>, b: &Timecode) -> bool {
        a.try_cmp(b).is_ok() == a.is_compatible_with(b)
            && b.try_cmp(a).is_ok() == a.is_compatible_with(b)
    }

    /// Property: equality is symmetric
    pub fn equality_symmetric(a: &Timecode, b: &Timecode) -> bool {
        (a == b) == (b == a)
    }
}
