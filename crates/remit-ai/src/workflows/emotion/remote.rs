use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{EmotionEngine, EmotionVector};
use crate::config::AnalyzerConfig;

/// Which path produced an analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalyzerModel {
    PythonMl,
    Keyword,
}

impl AnalyzerModel {
    pub const fn label(self) -> &'static str {
        match self {
            AnalyzerModel::PythonMl => "python-ml",
            AnalyzerModel::Keyword => "keyword",
        }
    }
}

/// Result of one analysis call, including the path taken for observability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisOutcome {
    pub emotions: EmotionVector,
    pub model: AnalyzerModel,
}

/// Error talking to the remote ML analyzer. Every variant is recoverable:
/// callers fall back to the local engine and never retry.
#[derive(Debug, thiserror::Error)]
pub enum RemoteAnalyzerError {
    #[error("analyzer request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("analyzer endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("analyzer response did not contain emotion scores")]
    MalformedBody,
}

#[derive(Debug, Serialize)]
struct RemoteAnalysisRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct RemoteAnalysisBody {
    emotions: Option<EmotionVector>,
}

/// Thin client for the sidecar sentiment service.
#[derive(Debug, Clone)]
pub struct RemoteAnalyzer {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteAnalyzer {
    /// The request timeout is enforced by the underlying client; there is no
    /// separate retry budget.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RemoteAnalyzerError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub async fn analyze(&self, text: &str) -> Result<EmotionVector, RemoteAnalyzerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RemoteAnalysisRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteAnalyzerError::Status(status));
        }

        let body: RemoteAnalysisBody = response.json().await?;
        body.emotions
            .map(EmotionVector::clamped)
            .ok_or(RemoteAnalyzerError::MalformedBody)
    }
}

/// Caller-facing analyzer: remote first when configured, keyword engine as
/// the fallback for any delegation failure.
#[derive(Debug, Clone, Default)]
pub struct EmotionAnalyzer {
    engine: EmotionEngine,
    remote: Option<RemoteAnalyzer>,
}

impl EmotionAnalyzer {
    pub fn local_only() -> Self {
        Self {
            engine: EmotionEngine::new(),
            remote: None,
        }
    }

    pub fn with_remote(remote: RemoteAnalyzer) -> Self {
        Self {
            engine: EmotionEngine::new(),
            remote: Some(remote),
        }
    }

    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, RemoteAnalyzerError> {
        match &config.endpoint {
            Some(endpoint) => {
                let remote = RemoteAnalyzer::new(endpoint.clone(), config.timeout)?;
                Ok(Self::with_remote(remote))
            }
            None => Ok(Self::local_only()),
        }
    }

    /// Never fails for valid input: delegation errors are logged and
    /// recovered by the local engine.
    pub async fn analyze(&self, text: &str) -> AnalysisOutcome {
        if let Some(remote) = &self.remote {
            match remote.analyze(text).await {
                Ok(emotions) => {
                    return AnalysisOutcome {
                        emotions,
                        model: AnalyzerModel::PythonMl,
                    }
                }
                Err(error) => {
                    warn!(%error, "remote analyzer unavailable, using keyword fallback");
                }
            }
        }

        AnalysisOutcome {
            emotions: self.engine.analyze(text),
            model: AnalyzerModel::Keyword,
        }
    }
}
