use crate::app::ports::SentimentResult;
use crate::codecs::{BinaryStats, EmojiStats, MorseStats};
use crate::constants::STEP_NAMES;
use serde::Serialize;

/// Displayed result of a step: text for most steps, a color list for step 6.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepOutput {
    Text(String),
    Colors(Vec<String>),
}

impl StepOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StepOutput::Text(text) => Some(text),
            StepOutput::Colors(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepStats {
    Morse(MorseStats),
    Emoji(EmojiStats),
    Binary(BinaryStats),
}

/// One step's record. Only the fields relevant to the step are serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult {
    pub step: u8,
    pub name: String,
    pub result: StepOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StepStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub haiku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment_ia: Option<SentimentResult>,
}

impl StepResult {
    /// Record for step `step` (1-based) with its display text cut to `limit`
    /// characters.
    pub fn text(step: u8, value: &str, limit: usize) -> Self {
        Self::new(step, StepOutput::Text(truncate(value, limit)))
    }

    pub fn new(step: u8, result: StepOutput) -> Self {
        Self {
            step,
            name: step_name(step).to_string(),
            result,
            stats: None,
            colors: None,
            sentiment: None,
            haiku: None,
            sentiment_ia: None,
        }
    }

    pub fn with_stats(mut self, stats: StepStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

fn step_name(step: u8) -> &'static str {
    usize::from(step)
        .checked_sub(1)
        .and_then(|i| STEP_NAMES.get(i))
        .copied()
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalVerdict {
    pub success: bool,
    pub message: String,
    pub starts_with_l: bool,
}

/// Everything one run produced. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineRun {
    pub steps: Vec<StepResult>,
    pub final_result: FinalVerdict,
}

/// Cuts to `limit` characters and marks the cut with `...`.
pub fn truncate(value: &str, limit: usize) -> String {
    match value.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}...", &value[..byte_idx]),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("abcd", 3), "abc...");
        assert_eq!(truncate("🔥🔥🔥", 2), "🔥🔥...");
    }

    #[test]
    fn step_records_carry_names() {
        let step = StepResult::text(1, "...", 100);
        assert_eq!(step.name, "Conversion en code Morse");
        assert_eq!(StepResult::text(11, "", 100).name, "Analyse psychologique (IA)");
    }

    #[test]
    fn optional_fields_are_omitted() {
        let value = serde_json::to_value(StepResult::text(4, "LUMIERE", 100)).unwrap();
        assert_eq!(value["result"], "LUMIERE");
        assert!(value.get("stats").is_none());
        assert!(value.get("haiku").is_none());
    }
}
