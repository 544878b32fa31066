//! Workflow step kinds

use std::fmt;

use serde::{Deserialize, Serialize};

/// The transformation a workflow step applies.
///
/// Closed set: adding a kind means adding a prompt template (and, for
/// non-generative kinds, special-cased handling in the executor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    CleanText,
    Summarize,
    ExtractKeyPoints,
    TagCategory,
    SentimentAnalysis,
    RewriteProfessionalTone,
    ExtractHashtags,
    Translate,
    ExtractEntities,
    ExtractSkills,
}

impl StepKind {
    /// All step kinds, in a stable order
    pub const ALL: [StepKind; 10] = [
        StepKind::CleanText,
        StepKind::Summarize,
        StepKind::ExtractKeyPoints,
        StepKind::TagCategory,
        StepKind::SentimentAnalysis,
        StepKind::RewriteProfessionalTone,
        StepKind::ExtractHashtags,
        StepKind::Translate,
        StepKind::ExtractEntities,
        StepKind::ExtractSkills,
    ];

    /// Whether this kind calls the generation endpoint.
    ///
    /// `CleanText` is handled locally by the executor and never prompts.
    pub fn is_generative(&self) -> bool {
        !matches!(self, StepKind::CleanText)
    }

    /// Serialized snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::CleanText => "clean_text",
            StepKind::Summarize => "summarize",
            StepKind::ExtractKeyPoints => "extract_key_points",
            StepKind::TagCategory => "tag_category",
            StepKind::SentimentAnalysis => "sentiment_analysis",
            StepKind::RewriteProfessionalTone => "rewrite_professional_tone",
            StepKind::ExtractHashtags => "extract_hashtags",
            StepKind::Translate => "translate",
            StepKind::ExtractEntities => "extract_entities",
            StepKind::ExtractSkills => "extract_skills",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_round_trip() {
        for kind in StepKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));

            let back: StepKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_clean_text_is_not_generative() {
        assert!(!StepKind::CleanText.is_generative());
    }

    #[test]
    fn test_all_other_kinds_are_generative() {
        let generative = StepKind::ALL.iter().filter(|k| k.is_generative()).count();
        assert_eq!(generative, 9);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = serde_json::from_str::<StepKind>("\"word_count\"");
        assert!(result.is_err());
    }
}
