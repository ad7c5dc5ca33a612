use crate::app::ports::{SentimentClassifier, SentimentResult};
use crate::constants::LABEL_NEUTRAL;
use crate::error::ClassifierError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_SCORE: f64 = 0.5;

/// Hugging Face style inference endpoint: `POST {"inputs": text}` answered
/// by `[{label, score}]` or `[[{label, score}, ...]]`.
pub struct HttpSentimentClassifier {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpSentimentClassifier {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url: url.into(), timeout })
    }
}

#[async_trait]
impl SentimentClassifier for HttpSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentResult, ClassifierError> {
        tracing::debug!("HTTP POST classifier request to: {}", self.url);
        let resp = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(&json!({ "inputs": text }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifierError::Timeout(self.timeout)
                } else {
                    ClassifierError::Http(e)
                }
            })?;

        let status = resp.status().as_u16();
        if status != 200 {
            return Err(ClassifierError::Status(status));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| ClassifierError::Malformed(e.to_string()))?;
        parse_classifier_response(&body)
    }
}

/// Accepts both the flat and the nested list shapes and scales the
/// confidence to 0–100, two decimals.
pub fn parse_classifier_response(body: &Value) -> Result<SentimentResult, ClassifierError> {
    let first = body
        .as_array()
        .and_then(|items| items.first())
        .ok_or_else(|| ClassifierError::Malformed("expected a non-empty list".to_string()))?;

    let entry = match first {
        Value::Array(inner) => inner
            .first()
            .ok_or_else(|| ClassifierError::Malformed("empty nested list".to_string()))?,
        other => other,
    };

    let object = entry
        .as_object()
        .ok_or_else(|| ClassifierError::Malformed(format!("expected an object, got {entry}")))?;

    let label = object
        .get("label")
        .and_then(Value::as_str)
        .unwrap_or(LABEL_NEUTRAL)
        .to_string();
    let raw_score = match object.get("score") {
        None => DEFAULT_SCORE,
        Some(score) => score
            .as_f64()
            .ok_or_else(|| ClassifierError::Malformed(format!("score is not a number: {score}")))?,
    };

    Ok(SentimentResult {
        score: (raw_score * 100.0 * 100.0).round() / 100.0,
        label,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_shape() {
        let body = json!([{ "label": "5 stars", "score": 0.87654 }]);
        let result = parse_classifier_response(&body).unwrap();
        assert_eq!(result.label, "5 stars");
        assert_eq!(result.score, 87.65);
    }

    #[test]
    fn parses_nested_shape() {
        let body = json!([[{ "label": "1 star", "score": 0.2 }, { "label": "2 stars", "score": 0.1 }]]);
        let result = parse_classifier_response(&body).unwrap();
        assert_eq!(result.label, "1 star");
        assert_eq!(result.score, 20.0);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let result = parse_classifier_response(&json!([{}])).unwrap();
        assert_eq!(result, SentimentResult { score: 50.0, label: "NEUTRAL".to_string() });
    }

    #[test]
    fn rejects_unexpected_shapes() {
        assert!(parse_classifier_response(&json!({ "error": "loading" })).is_err());
        assert!(parse_classifier_response(&json!([])).is_err());
        assert!(parse_classifier_response(&json!([[]])).is_err());
        assert!(parse_classifier_response(&json!(["text"])).is_err());
        assert!(matches!(
            parse_classifier_response(&json!([{ "label": "x", "score": "high" }])),
            Err(ClassifierError::Malformed(_))
        ));
        assert!(parse_classifier_response(&json!([{ "label": "x", "score": null }])).is_err());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        let classifier =
            HttpSentimentClassifier::new("http://127.0.0.1:9/classify", Duration::from_millis(200)).unwrap();
        assert!(classifier.classify("bonjour").await.is_err());
    }
}
