//! Prediction service: clean the input, invoke the model, shape the result.
//!
//! The service owns the optional model handle. A missing handle (the load
//! failed at startup) fails every request with [`IdentifyError::ModelNotReady`];
//! input that cleans down to nothing fails with [`IdentifyError::EmptyInput`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::clean::clean_text;
use crate::model::LanguageModel;

/// Only the single best label is reported.
const TOP_K: usize = 1;

/// Request body for language identification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextInput {
    pub text_content: String,
}

/// Successful identification result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguagePrediction {
    /// Language code from the model's top label, prefix stripped.
    pub language: String,
    /// Probability the model assigns to that label.
    pub confidence: f32,
}

#[derive(Error, Debug)]
pub enum IdentifyError {
    #[error("language model is not initialised")]
    ModelNotReady,
    #[error("text has no analysable content after cleaning")]
    EmptyInput,
    #[error("inference failed: {0}")]
    Inference(#[from] anyhow::Error),
}

/// Identifies the language of submitted text using an optional loaded model.
pub struct LanguageIdentifier {
    model: Option<Arc<dyn LanguageModel>>,
}

impl LanguageIdentifier {
    /// Service backed by a loaded model.
    pub fn ready(model: Arc<dyn LanguageModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Service without a model: every identify call fails with
    /// [`IdentifyError::ModelNotReady`] until the process restarts.
    pub fn not_ready() -> Self {
        Self { model: None }
    }

    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    /// Identify the language of `raw` text.
    ///
    /// The model check comes first, so an unready service rejects every
    /// request no matter the input. Cleaning runs next; input consisting
    /// only of URLs and whitespace is rejected as empty. The model's single
    /// best label, prefix stripped, becomes the prediction.
    pub fn identify(&self, raw: &str) -> Result<LanguagePrediction, IdentifyError> {
        let model = self.model.as_ref().ok_or(IdentifyError::ModelNotReady)?;

        let cleaned = clean_text(raw);
        debug!(cleaned = %cleaned, "cleaned input text");
        if cleaned.is_empty() {
            return Err(IdentifyError::EmptyInput);
        }

        let ranked = model.predict(&cleaned, TOP_K)?;
        let top = ranked
            .first()
            .ok_or_else(|| anyhow::anyhow!("model returned no labels"))?;

        Ok(LanguagePrediction {
            language: top.language_code().to_string(),
            confidence: top.probability,
        })
    }
}
