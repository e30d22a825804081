//! Dotted durations and their conversion to and from whole notes
//!
//! Going from a dotted duration to whole notes is a sum of halves. The
//! reverse direction decomposes a reduced fraction into a base duration, a
//! dot count and a multiplying factor:
//!
//! ```
//! use notation_kernel::duration::{decompose_whole_notes, Rational};
//!
//! let decomposition = decompose_whole_notes(Rational::new(7, 16)).unwrap();
//! assert_eq!(decomposition.as_lilypond_string(), "4..");
//!
//! let decomposition = decompose_whole_notes(Rational::new(5, 8)).unwrap();
//! assert_eq!(decomposition.as_lilypond_string(), "8*5");
//! ```

use serde::{Deserialize, Serialize};

use log::debug;

use super::kind::{DurationKind, MAXIMA_EXPONENT};
use super::whole_notes::Rational;
use crate::diagnostics::Reporter;
use crate::errors::{KernelError, KernelResult};

/// Longest supported run of dots
pub const MAX_DOTS: u32 = 16;

/// A base duration lengthened by dots
///
/// Dot counts above `MAX_DOTS` are capped, for both the value and the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DottedDuration {
    pub kind: DurationKind,
    pub dots: u32,
}

impl DottedDuration {
    /// Caps `dots` at `MAX_DOTS`; use `checked` to reject longer runs instead
    pub fn new(kind: DurationKind, dots: u32) -> Self {
        if dots > MAX_DOTS {
            debug!("{} dots on {:?} capped to {}", dots, kind, MAX_DOTS);
        }
        Self {
            kind,
            dots: dots.min(MAX_DOTS),
        }
    }

    pub fn checked(kind: DurationKind, dots: u32) -> KernelResult<Self> {
        if dots > MAX_DOTS {
            return Err(KernelError::TooManyDots(dots));
        }
        Ok(Self { kind, dots })
    }

    pub fn undotted(kind: DurationKind) -> Self {
        Self { kind, dots: 0 }
    }

    /// Dots actually applied, at most `MAX_DOTS`
    pub fn effective_dots(&self) -> u32 {
        self.dots.min(MAX_DOTS)
    }

    /// Each dot adds half of the previous increment
    pub fn as_whole_notes(&self) -> Rational {
        let mut increment = self.kind.as_whole_notes();
        let mut total = increment;
        for _ in 0..self.effective_dots() {
            increment /= 2;
            total += increment;
        }
        total
    }

    pub fn as_lilypond_string(&self) -> String {
        format!(
            "{}{}",
            self.kind.as_lilypond_token(),
            ".".repeat(self.effective_dots() as usize)
        )
    }
}

/// Value of `kind` with `dots` dots, in whole notes
pub fn duration_as_whole_notes(kind: DurationKind, dots: u32) -> Rational {
    DottedDuration::new(kind, dots).as_whole_notes()
}

/// Base duration, dot count and multiplying factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DurationDecomposition {
    kind: DurationKind,
    dots: u32,
    factor: u32,
}

impl DurationDecomposition {
    pub fn kind(&self) -> DurationKind {
        self.kind
    }

    /// Binary exponent of the base duration (see `DurationKind::exponent`)
    pub fn exponent(&self) -> i32 {
        self.kind.exponent()
    }

    pub fn dots(&self) -> u32 {
        self.dots
    }

    /// 1 when the value is a plain dotted duration
    pub fn factor(&self) -> u32 {
        self.factor
    }

    /// `(kind, dots)` when no multiplying factor is needed
    pub fn as_dotted_duration(&self) -> Option<DottedDuration> {
        if self.factor != 1 {
            return None;
        }
        DottedDuration::checked(self.kind, self.dots).ok()
    }

    /// Duration token such as `4.`, `\breve` or `8*5`
    pub fn as_lilypond_string(&self) -> String {
        let mut result = self.kind.as_lilypond_token();
        result.push_str(&".".repeat(self.dots as usize));
        if self.factor != 1 {
            result.push_str(&format!("*{}", self.factor));
        }
        result
    }
}

/// Number of dots encoded by an odd numerator: 1 → 0, 3 → 1, 7 → 2, 15 → 3
///
/// `None` when the numerator is not one less than a power of two.
fn numerator_dots(numerator: i32) -> Option<u32> {
    let ones = numerator.trailing_ones();
    if ones > 0 && (numerator >> ones) == 0 {
        Some(ones - 1)
    } else {
        None
    }
}

/// Decompose a positive whole-notes value into base, dots and factor
pub fn decompose_whole_notes(whole_notes: Rational) -> KernelResult<DurationDecomposition> {
    let value = whole_notes.reduced();
    let mut numerator = *value.numer();
    let denominator = *value.denom();

    if numerator <= 0 {
        return Err(KernelError::NonPositiveWholeNotes { numerator, denominator });
    }

    let unrepresentable = KernelError::UnrepresentableWholeNotes { numerator, denominator };

    if !(denominator as u32).is_power_of_two() {
        return Err(unrepresentable);
    }
    let mut exponent = denominator.trailing_zeros() as i32;

    // an integral number of whole notes: move factors of two into the exponent
    if denominator == 1 {
        while numerator % 2 == 0 && exponent > MAXIMA_EXPONENT {
            numerator /= 2;
            exponent -= 1;
        }
    }

    let (exponent, dots, factor) = match numerator_dots(numerator) {
        Some(dots) if dots <= MAX_DOTS && exponent - dots as i32 >= MAXIMA_EXPONENT => {
            (exponent - dots as i32, dots, 1)
        }
        _ => (exponent, 0, numerator as u32),
    };

    let kind = DurationKind::from_exponent(exponent).ok_or(unrepresentable)?;
    Ok(DurationDecomposition { kind, dots, factor })
}

/// Format whole notes as an engraving duration token and report its dots
///
/// Values that can't be decomposed are reported and rendered as the literal
/// `1*numerator/denominator`, so translation can go on.
pub fn whole_notes_as_dotted_string(whole_notes: Rational, reporter: &Reporter) -> (String, u32) {
    match decompose_whole_notes(whole_notes) {
        Ok(decomposition) => (decomposition.as_lilypond_string(), decomposition.dots()),
        Err(err) => {
            reporter.report_error(&err);
            let value = whole_notes.reduced();
            (format!("1*{}/{}", value.numer(), value.denom()), 0)
        }
    }
}
