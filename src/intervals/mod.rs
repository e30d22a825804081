//! Interval algebra over quarter-tone pitches
//!
//! `kind` holds the named interval catalog and its inversion, `algebra`
//! the operations relating pitches and intervals.

pub mod algebra;
pub mod kind;

pub use algebra::{
    de_normalize_interval, interval_between, interval_difference, interval_sum,
    normalize_interval, transpose, transpose_with_octave,
};
pub use kind::{is_perfect_number, semitone_distance, IntervalKind, IntervalQuality};
