// Caller-supplied configuration, passed explicitly to the spelling helpers

use serde::{Deserialize, Serialize};

use crate::errors::KernelResult;
use crate::models::{
    pitch_and_octave_as_string, pitch_and_octave_from_string,
    quarter_tones_pitch_kind_as_string_in_language, Octave, PitchLanguage, QuarterTonesPitchKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelSettings {
    /// Note name language for engraving output
    pub pitch_language: PitchLanguage,
}

impl KernelSettings {
    pub fn new(pitch_language: PitchLanguage) -> Self {
        Self { pitch_language }
    }

    pub fn pitch_name(&self, pitch: QuarterTonesPitchKind) -> String {
        quarter_tones_pitch_kind_as_string_in_language(pitch, self.pitch_language)
    }

    /// Name with absolute octave marks, e.g. "cis''"
    pub fn pitch_and_octave_name(&self, pitch: QuarterTonesPitchKind, octave: Octave) -> String {
        pitch_and_octave_as_string(self.pitch_language, pitch, octave)
    }

    pub fn parse_pitch_and_octave(&self, spec: &str) -> KernelResult<(QuarterTonesPitchKind, Octave)> {
        pitch_and_octave_from_string(self.pitch_language, spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        let settings = KernelSettings::default();
        assert_eq!(settings.pitch_language, PitchLanguage::Nederlands);
        assert_eq!(settings.pitch_name(QuarterTonesPitchKind::FSharp), "fis");
    }

    #[test]
    fn test_english_spelling() {
        let settings = KernelSettings::new(PitchLanguage::English);
        assert_eq!(
            settings.pitch_and_octave_name(QuarterTonesPitchKind::BFlat, Octave::Octave5),
            "bf''"
        );
        assert_eq!(
            settings.parse_pitch_and_octave("bf''"),
            Ok((QuarterTonesPitchKind::BFlat, Octave::Octave5))
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: KernelSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, KernelSettings::default());
        let settings: KernelSettings = serde_json::from_str(r#"{"pitch_language":"deutsch"}"#).unwrap();
        assert_eq!(settings.pitch_language, PitchLanguage::Deutsch);
    }
}
