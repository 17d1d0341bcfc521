//! Framerate registry and rate comparison
//!
//! Rates differing by less than [`FRAMERATE_EPSILON`] (relative) are the same
//! rate. Non-integer rates used for real material (23.976, 29.97, ...) can be
//! registered process-wide, which lets validation accept frame numbers up to
//! `ceil(rate) - 1` for them.

use parking_lot::RwLock;

use crate::{TimecodeError, TimecodeResult, FRAMERATE_EPSILON};

static GLOBAL: FramerateRegistry = FramerateRegistry::new();

/// Check whether two framerates are the same rate within tolerance
#[inline]
pub fn framerates_in_delta(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= FRAMERATE_EPSILON * scale
}

/// Integer frame count per second used for clock atoms
#[inline]
pub fn round_fps(fps: f64) -> u64 {
    fps.round() as u64
}

/// Append-only set of known non-integer framerates
pub struct FramerateRegistry {
    rates: RwLock<Vec<f64>>,
}

impl FramerateRegistry {
    /// Create an empty registry
    pub const fn new() -> Self {
        FramerateRegistry {
            rates: parking_lot::const_rwlock(Vec::new()),
        }
    }

    /// Process-wide registry
    pub fn global() -> &'static FramerateRegistry {
        &GLOBAL
    }

    /// Register a rate for the lifetime of the registry
    pub fn register(&self, rate: f64) -> TimecodeResult<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(TimecodeError::InvalidFramerate(rate));
        }

        let mut rates = self.rates.write();
        if rates.iter().any(|&known| framerates_in_delta(known, rate)) {
            return Ok(());
        }
        rates.push(rate);
        tracing::debug!(rate, total = rates.len(), "registered custom framerate");
        Ok(())
    }

    /// Whether a rate (within tolerance) was registered
    pub fn is_registered(&self, rate: f64) -> bool {
        self.rates
            .read()
            .iter()
            .any(|&known| framerates_in_delta(known, rate))
    }

    /// Snapshot of registered rates in registration order
    pub fn rates(&self) -> Vec<f64> {
        self.rates.read().clone()
    }

    pub fn len(&self) -> usize {
        self.rates.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.read().is_empty()
    }

    /// Drop every registered rate. Intended for test isolation only
    pub fn reset(&self) {
        let mut rates = self.rates.write();
        tracing::debug!(cleared = rates.len(), "framerate registry reset");
        rates.clear();
    }

    /// Number of distinct frame numbers per second at `fps`
    ///
    /// Registered rates round up, everything else uses standard rounding.
    pub fn frames_per_second(&self, fps: f64) -> u64 {
        if self.is_registered(fps) {
            fps.ceil() as u64
        } else {
            round_fps(fps)
        }
    }

    /// Highest valid frame number at `fps`
    #[inline]
    pub fn max_frame_index(&self, fps: f64) -> u64 {
        self.frames_per_second(fps).saturating_sub(1)
    }
}

impl Default for FramerateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FramerateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FramerateRegistry")
            .field("rates", &*self.rates.read())
            .finish()
    }
}
