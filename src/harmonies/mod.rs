//! Harmony structure catalog
//!
//! Chords and scales as ordered interval stacks measured from the root.

pub mod kind;
pub mod structure;

pub use kind::HarmonyKind;
pub use structure::{build_semitone_chord, structure_of, HarmonyInterval, HarmonyStructure};
