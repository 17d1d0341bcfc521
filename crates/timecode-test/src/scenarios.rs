//! Reference Scenarios - Known-answer checks for the timecode value
//!
//! Each scenario is a named closure returning `Ok(())` or a
//! [`ScenarioFailure`]. The runner logs every failure and collects a report.

use std::fmt::Debug;

use thiserror::Error;
use timecode_core::{ErrorKind, Timecode, TimecodeError, TimecodeResult};

// ============================================================================
// FAILURES
// ============================================================================

/// Why a scenario did not hold
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioFailure {
    #[error("expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("expected a {expected:?} error, got {actual}")]
    MissingError { expected: ErrorKind, actual: String },

    #[error("unexpected error: {0}")]
    Unexpected(#[from] TimecodeError),
}

/// Outcome of one scenario
pub type ScenarioResult = Result<(), ScenarioFailure>;

/// Compare two values
pub fn expect_eq<T: PartialEq + Debug>(actual: T, expected: T) -> ScenarioResult {
    if actual == expected {
        Ok(())
    } else {
        Err(ScenarioFailure::Mismatch {
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

/// Require `result` to fail with the given kind
pub fn expect_kind<T: Debug>(result: TimecodeResult<T>, expected: ErrorKind) -> ScenarioResult {
    match result {
        Err(err) if err.kind() == expected => Ok(()),
        Err(err) => Err(ScenarioFailure::MissingError {
            expected,
            actual: format!("{:?} error: {}", err.kind(), err),
        }),
        Ok(value) => Err(ScenarioFailure::MissingError {
            expected,
            actual: format!("{:?}", value),
        }),
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

/// A named known-answer check
pub struct Scenario {
    pub name: &'static str,
    check: fn() -> ScenarioResult,
}

impl Scenario {
    pub const fn new(name: &'static str, check: fn() -> ScenarioResult) -> Self {
        Scenario { name, check }
    }

    pub fn run(&self) -> ScenarioResult {
        (self.check)()
    }
}

/// The reference suite
pub fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("bcd pack", || {
            expect_eq(Timecode::at(5, 34, 42, 5, 25, false)?.to_uint()?, 87310853)
        }),
        Scenario::new("bcd unpack", || {
            expect_eq(
                Timecode::from_uint(87310853, 25)?,
                Timecode::at(5, 34, 42, 5, 25, false)?,
            )
        }),
        Scenario::new("ntsc drop-frame rendering", || {
            expect_eq(Timecode::new(9662, 29.97, true)?.to_s(), "00:05:22;12".to_string())
        }),
        Scenario::new("ntsc non-drop rendering", || {
            expect_eq(Timecode::new(9662, 29.97, false)?.to_s(), "00:05:22:02".to_string())
        }),
        Scenario::new("conversion keeps frame count", || {
            let converted = Timecode::new(1800, 25, false)?.convert(29.97, true)?;
            expect_eq(converted.to_s(), "00:01:00;02".to_string())
        }),
        Scenario::new("suffixed notation", || {
            expect_eq(Timecode::parse("1h 4f", 25)?.to_s(), "01:00:00:04".to_string())
        }),
        Scenario::new("tick overflow", || {
            expect_kind(Timecode::parse("10:10:10:250", 25), ErrorKind::Range)
        }),
        Scenario::new("empty input", || {
            expect_kind(Timecode::parse("", 25), ErrorKind::CannotParse)
        }),
        Scenario::new("comparison across rates", || {
            let pal = Timecode::new(10, 25, false)?;
            let ntsc = Timecode::new(10, 30, false)?;
            expect_kind(pal.try_cmp(&ntsc), ErrorKind::WrongFramerate)?;
            expect_eq(pal.partial_cmp(&ntsc), None)
        }),
        Scenario::new("equality within rate epsilon", || {
            expect_eq(
                Timecode::new(10, 25.0, false)? == Timecode::new(10, 25.0000001, false)?,
                true,
            )
        }),
        Scenario::new("drop flag must match for arithmetic", || {
            let df = Timecode::new(10, 29.97, true)?;
            let ndf = Timecode::new(10, 29.97, false)?;
            expect_kind(df + ndf, ErrorKind::WrongDropFlag)
        }),
        Scenario::new("soft parse recovers", || {
            expect_eq(Timecode::soft_parse("not a timecode", 25)?.is_zero(), true)
        }),
        Scenario::new("subtitle fraction", || {
            let tc = Timecode::parse("00:00:01,480", 25)?;
            expect_eq(tc.with_srt_fraction(), "00:00:01,48".to_string())
        }),
        Scenario::new("film separator", || {
            let tc = Timecode::parse("01:00:00+12", 25)?;
            expect_eq((tc.fps(), tc.is_drop()), (24.0, false))
        }),
    ]
}

// ============================================================================
// RUNNER
// ============================================================================

/// Scenario run report
#[derive(Debug, Default)]
pub struct ScenarioReport {
    pub passed: Vec<&'static str>,
    pub failed: Vec<(&'static str, ScenarioFailure)>,
}

impl ScenarioReport {
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed",
            self.passed.len(),
            self.failed.len()
        )
    }
}

/// Run every scenario and collect the outcome
pub fn run_scenarios(scenarios: &[Scenario]) -> ScenarioReport {
    let mut report = ScenarioReport::default();
    for scenario in scenarios {
        match scenario.run() {
            Ok(()) => {
                tracing::trace!(scenario = scenario.name, "scenario passed");
                report.passed.push(scenario.name);
            }
            Err(failure) => {
                tracing::warn!(scenario = scenario.name, %failure, "scenario failed");
                report.failed.push((scenario.name, failure));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenarios_pass() {
        crate::init_tracing();
        let report = run_scenarios(&reference_scenarios());
        assert!(report.all_passed(), "{}: {:?}", report.summary(), report.failed);
        assert_eq!(report.passed.len(), reference_scenarios().len());
    }

    #[test]
    fn test_failures_are_reported() {
        let scenarios = [
            Scenario::new("wrong answer", || expect_eq(1, 2)),
            Scenario::new("no error", || {
                expect_kind(Timecode::parse("00:00:01:00", 25), ErrorKind::CannotParse)
            }),
            Scenario::new("wrong kind", || {
                expect_kind(Timecode::parse("", 25), ErrorKind::Range)
            }),
            Scenario::new("propagated", || {
                Timecode::parse("", 25)?;
                Ok(())
            }),
        ];

        let report = run_scenarios(&scenarios);
        assert!(!report.all_passed());
        assert_eq!(report.summary(), "0 passed, 4 failed");
        assert_eq!(
            report.failed[0].1,
            ScenarioFailure::Mismatch {
                expected: "2".to_string(),
                actual: "1".to_string()
            }
        );
        assert!(matches!(report.failed[1].1, ScenarioFailure::MissingError { .. }));
        assert!(matches!(report.failed[2].1, ScenarioFailure::MissingError { .. }));
        assert!(matches!(
            report.failed[3].1,
            ScenarioFailure::Unexpected(TimecodeError::CannotParse(_))
        ));
    }
}
