//! Rational duration engine
//!
//! Durations are exact fractions of a whole note. `dotted` converts between
//! those fractions and printable dotted durations, `tuplet` scales them.

pub mod dotted;
pub mod kind;
pub mod tuplet;
pub mod whole_notes;

// Re-export main API
pub use dotted::{
    decompose_whole_notes, duration_as_whole_notes, whole_notes_as_dotted_string, DottedDuration,
    DurationDecomposition, MAX_DOTS,
};
pub use kind::{DurationKind, MAXIMA_EXPONENT, SHORTEST_EXPONENT};
pub use tuplet::TupletFactor;
pub use whole_notes::{whole_notes_as_divisions, whole_notes_from_divisions, Rational, NO_DURATION};
