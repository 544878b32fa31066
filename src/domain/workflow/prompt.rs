//! Prompt templates for generative step kinds

use super::StepKind;

/// Build the prompt for a generative step.
///
/// Panics on `CleanText`, which is normalized locally and never reaches
/// the generation endpoint.
pub fn build_prompt(kind: StepKind, input: &str) -> String {
    match kind {
        StepKind::CleanText => unreachable!("clean_text is handled locally, not prompted"),
        StepKind::Summarize => {
            format!("Summarize the following text clearly and concisely:\n\n{input}")
        }
        StepKind::ExtractKeyPoints => {
            format!("Extract the key bullet points from the following text:\n\n{input}")
        }
        StepKind::TagCategory => format!(
            "Assign a category label to this text from: Business, Tech, Health, Education, Other.\n\nText:\n{input}"
        ),
        StepKind::SentimentAnalysis => format!(
            "Classify the sentiment (positive, neutral, negative) and explain briefly:\n\n{input}"
        ),
        StepKind::RewriteProfessionalTone => format!(
            "Rewrite the following in a professional, polished tone while preserving meaning:\n\n{input}"
        ),
        StepKind::ExtractHashtags => format!(
            "Extract relevant hashtags for the text. Return comma-separated hashtags only:\n\n{input}"
        ),
        StepKind::Translate => format!(
            "Translate the following text to Spanish. Keep formatting where possible:\n\n{input}"
        ),
        StepKind::ExtractEntities => format!(
            "Extract named entities (people, organizations, locations, dates) as concise bullet points:\n\n{input}"
        ),
        StepKind::ExtractSkills => format!(
            "Extract skills from the following text. Return a concise bullet list:\n\n{input}"
        ),
    }
}
