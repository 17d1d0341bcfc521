//! Text parser for the timecode notations found in the wild
//!
//! Recognized notations, tried in this order:
//! - SMPTE `HH:MM:SS:FF`, with `;` (drop-frame) or `+` (24 fps film) before frames
//! - Fractional seconds `HH:MM:SS.mmm` or `HH:MM:SS,mmm` (subtitle files)
//! - Ticks `HH:MM:SS:TTT`, TTT being 1/250 s
//! - Unit suffixes `1h 20m 4s 12f`, summed in any order
//! - Bare digits `10203040`, grouped in pairs from the right

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::dropframe::{has_drop_cadence, Atoms};
use crate::validate::normalize_fps;
use crate::{
    ParseConfig, Timecode, TimecodeError, TimecodeResult, Variant, FILM_FPS, TICKS_PER_SECOND,
};

static SMPTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3}):(\d{1,2}):(\d{1,2})([:;+])(\d{1,2})$").unwrap());

static FRACTIONAL_SECONDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3}):(\d{1,2}):(\d{1,2})[.,](\d+)$").unwrap());

static TICKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,3}):(\d{1,2}):(\d{1,2}):(\d{3})$").unwrap());

static SUFFIXED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\d+\s*[hmsf](?:\s+\d+\s*[hmsf])*$").unwrap());

static SUFFIX_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*([hmsf])").unwrap());

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Textual timecode notation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    Smpte,
    FractionalSeconds,
    Ticks,
    Suffixed,
    Digits,
}

impl Notation {
    pub fn as_str(self) -> &'static str {
        match self {
            Notation::Smpte => "smpte",
            Notation::FractionalSeconds => "fractional-seconds",
            Notation::Ticks => "ticks",
            Notation::Suffixed => "suffixed",
            Notation::Digits => "digits",
        }
    }
}

/// Strip surrounding whitespace and byte-order marks
fn clean(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Detect which notation `text` is written in, first match wins
pub fn detect_notation(text: &str) -> Option<Notation> {
    let input = clean(text);
    if input.is_empty() {
        None
    } else if SMPTE.is_match(input) {
        Some(Notation::Smpte)
    } else if FRACTIONAL_SECONDS.is_match(input) {
        Some(Notation::FractionalSeconds)
    } else if TICKS.is_match(input) {
        Some(Notation::Ticks)
    } else if SUFFIXED.is_match(input) {
        Some(Notation::Suffixed)
    } else if input.bytes().any(|b| b.is_ascii_digit()) {
        Some(Notation::Digits)
    } else {
        None
    }
}

pub(crate) fn parse_text<V: Variant>(
    text: &str,
    config: &ParseConfig,
) -> TimecodeResult<Timecode<V>> {
    let fps = normalize_fps(config.fps)?;
    let input = clean(text);
    let notation =
        detect_notation(input).ok_or_else(|| TimecodeError::CannotParse(text.to_owned()))?;
    tracing::trace!(input, notation = notation.as_str(), fps, "parsing timecode");

    let drop = config.drop.unwrap_or(false);
    match notation {
        Notation::Smpte => {
            let caps = captures(&SMPTE, input)?;
            parse_smpte(&caps, fps, config.drop)
        }
        Notation::FractionalSeconds => {
            let caps = captures(&FRACTIONAL_SECONDS, input)?;
            parse_fraction(&caps, fps, drop)
        }
        Notation::Ticks => {
            let caps = captures(&TICKS, input)?;
            parse_ticks(&caps, fps, drop)
        }
        Notation::Suffixed => parse_suffixed(input, fps, drop),
        Notation::Digits => parse_digits(input, fps, drop, config.max_digits),
    }
}

pub(crate) fn soft_parse_text<V: Variant>(
    text: &str,
    config: &ParseConfig,
) -> TimecodeResult<Timecode<V>> {
    match parse_text(text, config) {
        Err(TimecodeError::CannotParse(input)) => {
            tracing::debug!(input = input.as_str(), "unparseable timecode, using zero");
            Timecode::from_frames(0, normalize_fps(config.fps)?, config.drop.unwrap_or(false))
        }
        result => result,
    }
}

pub(crate) fn parse_fractional_seconds<V: Variant>(
    text: &str,
    config: &ParseConfig,
) -> TimecodeResult<Timecode<V>> {
    let fps = normalize_fps(config.fps)?;
    let caps = FRACTIONAL_SECONDS
        .captures(clean(text))
        .ok_or_else(|| TimecodeError::CannotParse(text.to_owned()))?;
    parse_fraction(&caps, fps, config.drop.unwrap_or(false))
}

pub(crate) fn parse_sequence_filename<V: Variant>(
    filename: &str,
    fps: f64,
) -> TimecodeResult<Timecode<V>> {
    let run = DIGIT_RUN
        .find_iter(filename)
        .last()
        .ok_or_else(|| TimecodeError::CannotParse(filename.to_owned()))?;
    let total = run
        .as_str()
        .parse::<u64>()
        .map_err(|_| TimecodeError::Overflow)?;
    Timecode::from_frames(total, fps, false)
}

fn captures<'t>(re: &Regex, input: &'t str) -> TimecodeResult<Captures<'t>> {
    re.captures(input)
        .ok_or_else(|| TimecodeError::CannotParse(input.to_owned()))
}

/// Numeric capture group; groups are `\d{1,3}` so only overflow can fail
fn number(caps: &Captures<'_>, group: usize) -> TimecodeResult<u32> {
    caps[group].parse().map_err(|_| TimecodeError::Overflow)
}

/// Hours, minutes and seconds of the first three groups, zero frames
fn clock_atoms(caps: &Captures<'_>) -> TimecodeResult<Atoms> {
    Ok(Atoms::new(
        number(caps, 1)? as u64,
        number(caps, 2)?,
        number(caps, 3)?,
        0,
    ))
}

fn parse_smpte<V: Variant>(
    caps: &Captures<'_>,
    fps: f64,
    drop: Option<bool>,
) -> TimecodeResult<Timecode<V>> {
    let (fps, drop) = match &caps[4] {
        ";" => {
            if drop == Some(false) || !has_drop_cadence(fps) {
                return Err(TimecodeError::WrongDropFlag {
                    expected: false,
                    actual: true,
                });
            }
            (fps, true)
        }
        "+" => (FILM_FPS, false),
        _ => (fps, drop.unwrap_or(false)),
    };

    let atoms = Atoms {
        frames: number(caps, 5)?,
        ..clock_atoms(caps)?
    };
    Timecode::from_atoms(atoms, fps, drop)
}

fn parse_fraction<V: Variant>(
    caps: &Captures<'_>,
    fps: f64,
    drop: bool,
) -> TimecodeResult<Timecode<V>> {
    let whole = Timecode::<V>::from_atoms(clock_atoms(caps)?, fps, drop)?;
    let fraction: f64 = format!("0.{}", &caps[4])
        .parse()
        .map_err(|_| TimecodeError::CannotParse(caps[0].to_owned()))?;
    // Whole frames elapsed within the second; the nudge absorbs binary
    // representation error such as 0.29 * 100 = 28.999...
    let offset = (fraction * fps + 1e-9).floor() as u64;
    whole.with_total(whole.total() + offset)
}

fn parse_ticks<V: Variant>(
    caps: &Captures<'_>,
    fps: f64,
    drop: bool,
) -> TimecodeResult<Timecode<V>> {
    let ticks = number(caps, 4)?;
    if ticks >= TICKS_PER_SECOND {
        return Err(TimecodeError::TicksOutOfRange(ticks));
    }

    let whole = Timecode::<V>::from_atoms(clock_atoms(caps)?, fps, drop)?;
    let offset = (ticks as f64 * fps / TICKS_PER_SECOND as f64).floor() as u64;
    whole.with_total(whole.total() + offset)
}

fn parse_suffixed<V: Variant>(input: &str, fps: f64, drop: bool) -> TimecodeResult<Timecode<V>> {
    let mut seconds: u64 = 0;
    let mut frames: u64 = 0;

    for token in SUFFIX_TOKEN.captures_iter(input) {
        let value: u64 = token[1].parse().map_err(|_| TimecodeError::Overflow)?;
        let (sum, scale) = match token[2].to_ascii_lowercase().as_str() {
            "h" => (&mut seconds, 3600),
            "m" => (&mut seconds, 60),
            "s" => (&mut seconds, 1),
            _ => (&mut frames, 1),
        };
        let added = value
            .checked_mul(scale)
            .and_then(|v| sum.checked_add(v))
            .ok_or(TimecodeError::Overflow)?;
        *sum = added;
    }

    let total = (seconds as f64 * fps).round() + frames as f64;
    if total >= u64::MAX as f64 {
        return Err(TimecodeError::Overflow);
    }
    Timecode::from_frames(total as u64, fps, drop)
}

fn parse_digits<V: Variant>(
    input: &str,
    fps: f64,
    drop: bool,
    max_digits: usize,
) -> TimecodeResult<Timecode<V>> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let kept = &digits[..digits.len().min(max_digits)];
    if kept.is_empty() {
        return Err(TimecodeError::CannotParse(input.to_owned()));
    }

    // HHMMSSFF, hours take whatever is left of the six low digits
    let padded = format!("{:0>8}", kept);
    let (hours, rest) = padded.split_at(padded.len() - 6);
    let pair = |i: usize| rest[i..i + 2].parse::<u32>().map_err(|_| TimecodeError::Overflow);

    let atoms = Atoms::new(
        hours.parse().map_err(|_| TimecodeError::Overflow)?,
        pair(0)?,
        pair(2)?,
        pair(4)?,
    );
    Timecode::from_atoms(atoms, fps, drop)
}
