//! Transposition and interval arithmetic
//!
//! Letters move by the interval's diatonic number, and the alteration is
//! chosen so that the quarter-tone distance matches the interval's width.
//! Pitches carrying a double or triple alteration are refused as input.
//!
//! ```
//! use notation_kernel::intervals::{interval_between, transpose, IntervalKind};
//! use notation_kernel::models::QuarterTonesPitchKind;
//!
//! let g = transpose(QuarterTonesPitchKind::CNatural, IntervalKind::PerfectFifth).unwrap();
//! assert_eq!(g, QuarterTonesPitchKind::GNatural);
//! assert_eq!(
//!     interval_between(QuarterTonesPitchKind::CNatural, g).unwrap(),
//!     IntervalKind::PerfectFifth
//! );
//! ```

use log::debug;

use super::kind::IntervalKind;
use crate::errors::{KernelError, KernelResult};
use crate::models::{AlterationKind, Octave, QuarterTonesPitchKind};

/// Octaves a compound interval may carry beyond its simple part
const MAX_COMPOUND_OCTAVES: i32 = 1;

fn check_depth(pitch: QuarterTonesPitchKind) -> KernelResult<()> {
    if pitch.alteration().is_double_or_triple() {
        return Err(KernelError::UnsupportedAlterationDepth(pitch.to_string()));
    }
    Ok(())
}

/// Result pitch and the number of letter octaves crossed on the way up
fn transpose_counting_octaves(
    pitch: QuarterTonesPitchKind,
    interval: IntervalKind,
) -> KernelResult<(QuarterTonesPitchKind, i32)> {
    check_depth(pitch)?;

    let letter_steps = pitch.letter().index() as i32 + interval.number();
    let letter = pitch.letter().offset(interval.number());
    let octaves = letter_steps.div_euclid(7);

    let target = pitch.quarter_tones_above_c() + 2 * interval.semitones();
    let quarter_tones = target - 2 * letter.semitones_above_c() - 24 * octaves;

    let alteration = AlterationKind::from_quarter_tones(quarter_tones).ok_or(
        KernelError::AlterationOutOfRange {
            letter: letter.as_char(),
            quarter_tones,
        },
    )?;
    Ok((QuarterTonesPitchKind::from_parts(letter, alteration)?, octaves))
}

/// Transpose `pitch` upward by `interval`, a quarter-tone pitch class result
pub fn transpose(
    pitch: QuarterTonesPitchKind,
    interval: IntervalKind,
) -> KernelResult<QuarterTonesPitchKind> {
    transpose_counting_octaves(pitch, interval).map(|(result, _)| result)
}

/// Like `transpose`, also moving the octave when the letter wraps past B
///
/// The octave is `None` when it leaves the 0..=9 range.
pub fn transpose_with_octave(
    pitch: QuarterTonesPitchKind,
    octave: Octave,
    interval: IntervalKind,
) -> KernelResult<(QuarterTonesPitchKind, Option<Octave>)> {
    let (result, octaves) = transpose_counting_octaves(pitch, interval)?;
    Ok((result, octave.offset(octaves)))
}

/// Interval from `from` up to `to`, as simple intervals
///
/// The pitches are ordered by rank; when `to` ranks below `from` the
/// upward interval is computed and inverted.
pub fn interval_between(
    from: QuarterTonesPitchKind,
    to: QuarterTonesPitchKind,
) -> KernelResult<IntervalKind> {
    check_depth(from)?;
    check_depth(to)?;

    let (lower, higher, swapped) = if from.rank() <= to.rank() {
        (from, to, false)
    } else {
        (to, from, true)
    };

    let steps = higher.letter().index() as i32 - lower.letter().index() as i32;
    let quarter_tones = higher.quarter_tones_above_c() - lower.quarter_tones_above_c();
    if quarter_tones % 2 != 0 {
        return Err(KernelError::QuarterToneInterval(from.to_string(), to.to_string()));
    }
    let semitones = quarter_tones / 2;

    let interval = IntervalKind::from_steps_and_semitones(steps, semitones)
        .ok_or(KernelError::IntervalOutOfRange { steps, semitones })?;
    Ok(if swapped { interval.inverted() } else { interval })
}

/// Split an interval into its simple part and a count of octaves
///
/// The perfect octave gives `(PerfectUnison, 1)`.
pub fn normalize_interval(interval: IntervalKind) -> (IntervalKind, i32) {
    let number = interval.number();
    match IntervalKind::from_number_and_quality(number.rem_euclid(7), interval.quality()) {
        Some(simple) => (simple, number.div_euclid(7)),
        // every compound quality also exists on the simple number
        None => (interval, 0),
    }
}

/// Inverse of `normalize_interval`
pub fn de_normalize_interval(simple: IntervalKind, octaves: i32) -> KernelResult<IntervalKind> {
    let number = simple.number() + 7 * octaves;
    IntervalKind::from_number_and_quality(number, simple.quality()).ok_or(
        KernelError::IntervalOutOfRange {
            steps: number,
            semitones: simple.semitones() + 12 * octaves,
        },
    )
}

fn compound(steps: i32, semitones: i32, octaves: i32) -> KernelResult<IntervalKind> {
    let simple = IntervalKind::from_steps_and_semitones(steps, semitones)
        .ok_or(KernelError::IntervalOutOfRange { steps, semitones })?;

    let kept = octaves.clamp(0, MAX_COMPOUND_OCTAVES);
    if kept != octaves {
        debug!(
            "interval {} with {} octaves folded to {} octaves",
            simple, octaves, kept
        );
    }
    de_normalize_interval(simple, kept)
}

/// Interval reached by stacking `second` on top of `first`
///
/// Sums wider than the catalog keep their simple part and fold the extra
/// octaves away, so transposition by the result is unchanged.
pub fn interval_sum(first: IntervalKind, second: IntervalKind) -> KernelResult<IntervalKind> {
    let (simple1, octaves1) = normalize_interval(first);
    let (simple2, octaves2) = normalize_interval(second);

    let mut steps = simple1.number() + simple2.number();
    let mut semitones = simple1.semitones() + simple2.semitones();
    let mut octaves = octaves1 + octaves2;
    if steps >= 7 {
        steps -= 7;
        semitones -= 12;
        octaves += 1;
    }
    compound(steps, semitones, octaves)
}

/// Interval that stacked on `second` gives `first`
///
/// When `second` is the wider one the result is taken within the octave.
pub fn interval_difference(first: IntervalKind, second: IntervalKind) -> KernelResult<IntervalKind> {
    let (simple1, octaves1) = normalize_interval(first);
    let (simple2, octaves2) = normalize_interval(second);

    let mut steps = simple1.number() - simple2.number();
    let mut semitones = simple1.semitones() - simple2.semitones();
    let mut octaves = octaves1 - octaves2;
    if steps < 0 {
        steps += 7;
        semitones += 12;
        octaves -= 1;
    }
    compound(steps, semitones, octaves)
}
