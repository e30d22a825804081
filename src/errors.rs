//! Error types for the notation kernel
//!
//! Every fallible operation returns a `KernelError`. Most variants are
//! recoverable (the caller reports them and substitutes a sentinel),
//! `InternalInconsistency` is fatal for the current document.

use thiserror::Error;

use crate::diagnostics::Severity;

/// Result alias used throughout the kernel
pub type KernelResult<T> = Result<T, KernelError>;

/// Top-level kernel error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// The alteration was never set by the parser
    #[error("alteration is unset")]
    InvalidAlteration,

    /// MusicXML `<alter>` value that is not one of the supported steps
    #[error("unsupported alteration value {0} (expected one of -3, -2, -1.5, -1, -0.5, 0, 0.5, 1, 1.5, 2, 3)")]
    UnsupportedAlterationValue(f64),

    /// Octave specification mixing commas and quotes, or containing other characters
    #[error("malformed octave specification '{0}'")]
    MalformedOctaveSpec(String),

    /// Octave number outside 0..=9
    #[error("octave {0} out of range (must be 0 to 9)")]
    OctaveOutOfRange(i32),

    /// Pitch-and-octave string that can't be split into a name and octave marks
    #[error("malformed pitch string '{0}'")]
    MalformedPitchString(String),

    /// Pitch name not present in the selected language's table
    #[error("unknown pitch name '{name}' in language '{language}'")]
    UnknownPitchName { name: String, language: String },

    /// Diatonic step letter outside A..G
    #[error("unknown diatonic step '{0}'")]
    UnknownDiatonicStep(String),

    /// Duration integer that is not a supported power of two
    #[error("duration {0} is not a supported power of two (1 to 1024)")]
    UnsupportedDurationInteger(u32),

    /// MusicXML `<type>` name that is not recognized
    #[error("unknown duration type '{0}'")]
    UnsupportedDurationName(String),

    /// Dotted duration with more dots than supported
    #[error("{0} dots exceed the supported maximum of 16")]
    TooManyDots(u32),

    /// Divisions per quarter note must be positive
    #[error("divisions per quarter must be positive, got {0}")]
    InvalidDivisions(i32),

    /// Whole notes value that can't be formatted (non-positive numerator)
    #[error("whole notes {numerator}/{denominator} is not a positive duration")]
    NonPositiveWholeNotes { numerator: i32, denominator: i32 },

    /// Whole notes value whose denominator is not a supported power of two
    #[error("whole notes {numerator}/{denominator} can't be expressed as a dotted duration")]
    UnrepresentableWholeNotes { numerator: i32, denominator: i32 },

    /// Tuplet factor with a zero component
    #[error("invalid tuplet factor {actual}:{normal} (both must be positive)")]
    InvalidTupletFactor { actual: i32, normal: i32 },

    /// Interval arithmetic starting from a double or triple alteration
    #[error("interval arithmetic on '{0}' is not supported (double/triple alteration)")]
    UnsupportedAlterationDepth(String),

    /// Result of interval arithmetic would need more than a triple alteration
    #[error("alteration of {quarter_tones} quarter tones on {letter} is out of range")]
    AlterationOutOfRange { letter: char, quarter_tones: i32 },

    /// No named interval has this (diatonic steps, semitones) combination
    #[error("no interval spans {steps} diatonic steps and {semitones} semitones")]
    IntervalOutOfRange { steps: i32, semitones: i32 },

    /// Pitches a quarter tone apart have no named interval
    #[error("no interval between '{0}' and '{1}' (quarter-tone distance)")]
    QuarterToneInterval(String, String),

    /// Harmony kind name or MusicXML `<kind>` value that is not recognized
    #[error("unknown harmony kind '{0}'")]
    UnknownHarmonyKind(String),

    /// Harmony inversion index past the end of the structure
    #[error("inversion {inversion} out of range for {harmony} ({len} intervals)")]
    InversionOutOfRange {
        inversion: usize,
        harmony: String,
        len: usize,
    },

    /// Exhaustive case mapping reached an unmapped value (kernel bug)
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}

impl KernelError {
    /// Classify this error into the diagnostics severity scale
    pub fn severity(&self) -> Severity {
        match self {
            KernelError::UnsupportedAlterationDepth(_)
            | KernelError::AlterationOutOfRange { .. }
            | KernelError::IntervalOutOfRange { .. }
            | KernelError::QuarterToneInterval(..)
            | KernelError::UnrepresentableWholeNotes { .. } => Severity::Warning,
            KernelError::InternalInconsistency(_) => Severity::Fatal,
            _ => Severity::Error,
        }
    }

    /// Fatal errors abort processing of the current document
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_classification() {
        assert_eq!(KernelError::InvalidAlteration.severity(), Severity::Error);
        assert_eq!(
            KernelError::MalformedOctaveSpec("',".to_string()).severity(),
            Severity::Error
        );
        assert_eq!(
            KernelError::UnsupportedAlterationDepth("cisis".to_string()).severity(),
            Severity::Warning
        );
        assert!(KernelError::InternalInconsistency("x".to_string()).is_fatal());
        assert!(!KernelError::InvalidDivisions(0).is_fatal());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            KernelError::UnsupportedDurationInteger(3).to_string(),
            "duration 3 is not a supported power of two (1 to 1024)"
        );
        assert_eq!(
            KernelError::MalformedOctaveSpec("'',".to_string()).to_string(),
            "malformed octave specification ''','"
        );
    }
}
