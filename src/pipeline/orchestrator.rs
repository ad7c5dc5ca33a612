use crate::app::ports::{RandomSource, SentimentResult};
use crate::app::sentiment::SentimentService;
use crate::codecs::{
    binary_stats, binary_to_text, color_to_sentiment, emoji_stats, emoji_to_morse, generate_haiku,
    hex_to_colors, hex_to_text, morse_stats, morse_to_emoji, morse_to_text, text_to_binary,
    text_to_hex, text_to_morse,
};
use crate::constants::{
    COLOR_DISPLAY_LIMIT, EMOJI_DISPLAY_LIMIT, TEXT_DISPLAY_LIMIT, VERDICT_FAILURE,
    VERDICT_NEGATIVE_SUCCESS, VERDICT_POSITIVE_SUCCESS, VERDICT_SCORE_THRESHOLD,
};
use crate::error::{PipelineError, Result};
use crate::observability::metrics::MetricName;
use crate::pipeline::steps::{FinalVerdict, PipelineRun, StepOutput, StepResult, StepStats};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

/// Stateless runner for the transformation chain. Build once, share across
/// requests.
#[derive(Clone)]
pub struct RubeGoldbergPipeline {
    sentiment: SentimentService,
    rng: Arc<dyn RandomSource>,
}

impl RubeGoldbergPipeline {
    pub fn new(sentiment: SentimentService, rng: Arc<dyn RandomSource>) -> Self {
        Self { sentiment, rng }
    }

    /// Runs every step over `text`. Either all steps complete or the run
    /// fails as a whole.
    pub async fn run(&self, text: &str) -> Result<PipelineRun> {
        if text.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let run_id = Uuid::new_v4();
        let started = Instant::now();
        let outcome = self
            .execute(text)
            .instrument(info_span!("pipeline_run", %run_id))
            .await;

        ::metrics::counter!(MetricName::RunsTotal.as_str()).increment(1);
        ::metrics::histogram!(MetricName::RunDuration.as_str()).record(started.elapsed().as_secs_f64());
        if outcome.is_err() {
            ::metrics::counter!(MetricName::RunErrors.as_str()).increment(1);
        }
        outcome
    }

    async fn execute(&self, text: &str) -> Result<PipelineRun> {
        info!(chars = text.chars().count(), "Starting pipeline run");
        let mut steps = Vec::with_capacity(11);

        // 1: text -> morse
        let morse = text_to_morse(text);
        steps.push(StepResult::text(1, &morse, TEXT_DISPLAY_LIMIT).with_stats(StepStats::Morse(morse_stats(&morse))));

        // 2: morse -> emoji
        let emojis = morse_to_emoji(&morse);
        steps.push(StepResult::text(2, &emojis, EMOJI_DISPLAY_LIMIT).with_stats(StepStats::Emoji(emoji_stats(&emojis))));

        // 3: emoji -> morse
        let morse_again = emoji_to_morse(&emojis);
        steps.push(StepResult::text(3, &morse_again, TEXT_DISPLAY_LIMIT));

        // 4: morse -> text
        let decoded = morse_to_text(&morse_again);
        debug!(decoded = %decoded, "Morse round trip finished");
        steps.push(StepResult::text(4, &decoded, TEXT_DISPLAY_LIMIT));

        // 5: decoded text (not the input) -> hex
        let hex = text_to_hex(&decoded);
        steps.push(StepResult::text(5, &hex, TEXT_DISPLAY_LIMIT));

        // 6: hex -> colors
        let colors = hex_to_colors(&hex);
        let shown = colors.iter().take(COLOR_DISPLAY_LIMIT).cloned().collect();
        let mut color_step = StepResult::new(6, StepOutput::Colors(shown));
        color_step.colors = Some(colors.clone());
        steps.push(color_step);

        // 7: colors -> sentiment + haiku
        let color_mood = color_to_sentiment(&colors)?;
        let mut mood_step = StepResult::new(7, StepOutput::Text(format!("Score: {:.2}", color_mood)));
        mood_step.sentiment = Some(color_mood);
        mood_step.haiku = Some(generate_haiku(color_mood).to_string());
        steps.push(mood_step);

        // 8: hex -> text
        let from_hex = hex_to_text(&hex)?;
        steps.push(StepResult::text(8, &from_hex, TEXT_DISPLAY_LIMIT));

        // 9: text -> binary
        let binary = text_to_binary(&from_hex);
        let stats = binary_stats(&binary, self.rng.as_ref());
        steps.push(StepResult::text(9, &binary, TEXT_DISPLAY_LIMIT).with_stats(StepStats::Binary(stats)));

        // 10: binary -> text
        let from_binary = binary_to_text(&binary)?;
        steps.push(StepResult::text(10, &from_binary, TEXT_DISPLAY_LIMIT));

        // 11: classifier verdict on the twice-decoded text
        let sentiment = self.sentiment.classify(&from_binary).await;
        let mut sentiment_step = StepResult::new(
            11,
            StepOutput::Text(format!("Label: {}, Score: {}%", sentiment.label, sentiment.score)),
        );
        sentiment_step.sentiment_ia = Some(sentiment.clone());
        steps.push(sentiment_step);

        // 12
        let final_result = verdict(text, &sentiment);
        info!(success = final_result.success, "Pipeline run finished");

        Ok(PipelineRun { steps, final_result })
    }
}

/// Judges the original input and the final score only; what happened to the
/// text in between is irrelevant.
pub fn verdict(original: &str, sentiment: &SentimentResult) -> FinalVerdict {
    let starts_with_l = original.trim().to_uppercase().starts_with('L');
    let message = match (starts_with_l, sentiment.score > VERDICT_SCORE_THRESHOLD) {
        (true, true) => VERDICT_POSITIVE_SUCCESS,
        (true, false) => VERDICT_NEGATIVE_SUCCESS,
        (false, _) => VERDICT_FAILURE,
    };

    FinalVerdict {
        success: starts_with_l,
        message: message.to_string(),
        starts_with_l,
    }
}
