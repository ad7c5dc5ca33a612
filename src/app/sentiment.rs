use crate::app::ports::{SentimentClassifier, SentimentResult};
use crate::constants::{LABEL_NEGATIVE, LABEL_NEUTRAL, LABEL_POSITIVE, NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::error::ClassifierError;
use crate::observability::metrics::MetricName;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const FALLBACK_BASE_SCORE: f64 = 30.0;
const FALLBACK_PER_KEYWORD: f64 = 8.0;
const FALLBACK_MAX_SCORE: f64 = 85.0;
const FALLBACK_NEUTRAL_SCORE: f64 = 50.0;

/// Keyword heuristic used whenever the remote classifier cannot answer.
pub fn fallback_sentiment(text: &str) -> SentimentResult {
    let lowered = text.to_lowercase();
    let positive = POSITIVE_WORDS.iter().filter(|w| lowered.contains(*w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| lowered.contains(*w)).count();

    let scored = |count: usize| (FALLBACK_BASE_SCORE + FALLBACK_PER_KEYWORD * count as f64).min(FALLBACK_MAX_SCORE);

    if positive > negative {
        SentimentResult { score: scored(positive), label: LABEL_POSITIVE.to_string() }
    } else if negative > positive {
        SentimentResult { score: scored(negative), label: LABEL_NEGATIVE.to_string() }
    } else {
        SentimentResult { score: FALLBACK_NEUTRAL_SCORE, label: LABEL_NEUTRAL.to_string() }
    }
}

/// Wraps a classifier with a latency budget and the keyword fallback. Never
/// fails.
#[derive(Clone)]
pub struct SentimentService {
    classifier: Option<Arc<dyn SentimentClassifier>>,
    timeout: Duration,
}

impl SentimentService {
    pub fn new(classifier: Arc<dyn SentimentClassifier>, timeout: Duration) -> Self {
        Self { classifier: Some(classifier), timeout }
    }

    /// A service that always answers with the keyword heuristic.
    pub fn offline() -> Self {
        Self { classifier: None, timeout: Duration::ZERO }
    }

    pub async fn classify(&self, text: &str) -> SentimentResult {
        match self.try_remote(text).await {
            Ok(result) => {
                debug!(label = %result.label, score = result.score, "Classifier answered");
                result
            }
            Err(ClassifierError::Disabled) => fallback_sentiment(text),
            Err(e) => {
                warn!("Sentiment classifier unavailable, using fallback: {}", e);
                ::metrics::counter!(MetricName::ClassifierFallbacks.as_str()).increment(1);
                fallback_sentiment(text)
            }
        }
    }

    async fn try_remote(&self, text: &str) -> Result<SentimentResult, ClassifierError> {
        let classifier = self.classifier.as_ref().ok_or(ClassifierError::Disabled)?;
        tokio::time::timeout(self.timeout, classifier.classify(text))
            .await
            .map_err(|_| ClassifierError::Timeout(self.timeout))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Fixed(SentimentResult);

    #[async_trait]
    impl SentimentClassifier for Fixed {
        async fn classify(&self, _text: &str) -> Result<SentimentResult, ClassifierError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    #[async_trait]
    impl SentimentClassifier for Failing {
        async fn classify(&self, _text: &str) -> Result<SentimentResult, ClassifierError> {
            Err(ClassifierError::Status(503))
        }
    }

    struct Slow;

    #[async_trait]
    impl SentimentClassifier for Slow {
        async fn classify(&self, _text: &str) -> Result<SentimentResult, ClassifierError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(SentimentResult { score: 99.0, label: "5 stars".to_string() })
        }
    }

    #[test]
    fn two_positive_keywords() {
        let result = fallback_sentiment("Super, c'est parfait");
        assert_eq!(result, SentimentResult { score: 46.0, label: "POSITIVE".to_string() });
    }

    #[test]
    fn negative_keywords_win() {
        let result = fallback_sentiment("HORRIBLE et NUL");
        assert_eq!(result.label, "NEGATIVE");
        assert_eq!(result.score, 46.0);
    }

    #[test]
    fn tie_is_neutral() {
        assert_eq!(fallback_sentiment("cool mais nul").label, "NEUTRAL");
        assert_eq!(fallback_sentiment("").score, 50.0);
    }

    #[test]
    fn score_is_capped() {
        let text = POSITIVE_WORDS.join(" ");
        assert_eq!(fallback_sentiment(&text).score, 85.0);
    }

    #[tokio::test]
    async fn uses_remote_answer_when_available() {
        let expected = SentimentResult { score: 71.25, label: "4 stars".to_string() };
        let service = SentimentService::new(Arc::new(Fixed(expected.clone())), Duration::from_secs(1));
        assert_eq!(service.classify("peu importe").await, expected);
    }

    #[tokio::test]
    async fn falls_back_on_error() {
        let service = SentimentService::new(Arc::new(Failing), Duration::from_secs(1));
        assert_eq!(service.classify("bien").await, fallback_sentiment("bien"));
    }

    #[tokio::test]
    async fn falls_back_on_timeout() {
        let service = SentimentService::new(Arc::new(Slow), Duration::from_millis(20));
        assert_eq!(service.classify("texte").await.label, "NEUTRAL");
    }

    #[tokio::test]
    async fn offline_service_never_calls_out() {
        assert_eq!(SentimentService::offline().classify("mauvais").await.label, "NEGATIVE");
    }
}
