use crate::error::ClassifierError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Label plus a 0–100 confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub score: f64,
    pub label: String,
}

#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<SentimentResult, ClassifierError>;
}

/// Source of uniform values in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    fn next(&self) -> f64;
}
