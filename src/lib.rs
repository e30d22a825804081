//! Notation Kernel
//!
//! Exact musical arithmetic shared by the MusicXML reader and the engraving
//! output generators: rational durations, pitches at semitone and
//! quarter-tone resolution, interval algebra, harmony structures and the
//! moments used to align voices.
//!
//! Nothing here performs I/O. Fallible operations return `KernelResult`;
//! callers that must keep translating after a bad value go through
//! `diagnostics::Reporter`.

pub mod diagnostics;
pub mod duration;
pub mod errors;
pub mod harmonies;
pub mod intervals;
pub mod models;
pub mod moments;
pub mod settings;

// Re-export commonly used types
pub use diagnostics::{CollectingSink, DiagnosticsSink, InputLocation, LogSink, Reporter, Severity};
pub use duration::{DottedDuration, DurationKind, Rational, TupletFactor};
pub use errors::{KernelError, KernelResult};
pub use harmonies::{HarmonyKind, HarmonyStructure};
pub use intervals::{IntervalKind, IntervalQuality};
pub use models::{
    AlterationKind, DiatonicPitchKind, Octave, PitchLanguage, QuarterTonesPitchKind,
    SemiTonesPitchKind,
};
pub use moments::Moment;
pub use settings::KernelSettings;
