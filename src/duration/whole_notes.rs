//! Exact durations as fractions of a whole note

use num_rational::Rational32;
use num_traits::CheckedMul;

use crate::errors::{KernelError, KernelResult};

/// Re-export Rational for duration calculations
pub type Rational = Rational32;

/// "No duration" sentinel
pub const NO_DURATION: Rational = Rational::new_raw(0, 1);

/// Reduce a raw MusicXML `<duration>` to whole notes
///
/// `divisions_per_quarter` comes from `<divisions>`. A zero duration is
/// legal (grace notes) and gives `NO_DURATION`.
pub fn whole_notes_from_divisions(duration: i32, divisions_per_quarter: i32) -> KernelResult<Rational> {
    if divisions_per_quarter <= 0 {
        return Err(KernelError::InvalidDivisions(divisions_per_quarter));
    }
    let divisions_per_whole = divisions_per_quarter
        .checked_mul(4)
        .ok_or(KernelError::InvalidDivisions(divisions_per_quarter))?;
    if duration < 0 {
        return Err(KernelError::NonPositiveWholeNotes {
            numerator: duration,
            denominator: divisions_per_whole,
        });
    }
    Ok(Rational::new(duration, divisions_per_whole))
}

/// Inverse of `whole_notes_from_divisions`
///
/// `None` if the value is not a whole number of divisions or overflows.
pub fn whole_notes_as_divisions(whole_notes: Rational, divisions_per_quarter: i32) -> Option<i32> {
    let divisions_per_whole = Rational::from_integer(divisions_per_quarter.checked_mul(4)?);
    let divisions = whole_notes.checked_mul(&divisions_per_whole)?;
    divisions.is_integer().then(|| divisions.to_integer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_divisions_reduces() {
        assert_eq!(whole_notes_from_divisions(256, 256), Ok(Rational::new(1, 4)));
        assert_eq!(whole_notes_from_divisions(3, 2), Ok(Rational::new(3, 8)));
        assert_eq!(whole_notes_from_divisions(0, 1), Ok(NO_DURATION));
    }

    #[test]
    fn test_from_divisions_rejects_bad_input() {
        assert_eq!(whole_notes_from_divisions(1, 0), Err(KernelError::InvalidDivisions(0)));
        assert!(whole_notes_from_divisions(-1, 4).is_err());
        assert!(whole_notes_from_divisions(1, i32::MAX).is_err());
    }

    #[test]
    fn test_as_divisions() {
        assert_eq!(whole_notes_as_divisions(Rational::new(3, 8), 2), Some(3));
        assert_eq!(whole_notes_as_divisions(Rational::new(1, 3), 2), None);
    }

    #[test]
    fn test_as_divisions_overflow_is_none() {
        assert_eq!(whole_notes_as_divisions(Rational::new(1_000_000, 1), 100_000), None);
        assert_eq!(whole_notes_as_divisions(Rational::new(1, 4), i32::MAX), None);
        // cross-reduction keeps large but representable products
        assert_eq!(
            whole_notes_as_divisions(Rational::new(1, 1 << 20), 1 << 25),
            Some(1 << 7)
        );
    }
}
