//! fastText-backed implementation of the language-model trait.

use std::path::Path;

use anyhow::anyhow;
use fasttext::FastText;
use tracing::info;

use glotserve_core::{LanguageModel, RankedLabel};

use crate::error::ModelError;

/// Language detector backed by a supervised fastText model.
#[derive(Debug)]
pub struct FastTextDetector {
    inner: FastText,
}

impl FastTextDetector {
    /// Load a binary fastText model from disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let mut inner = FastText::new();
        inner
            .load_model(&path.to_string_lossy())
            .map_err(|message| ModelError::Load {
                path: path.to_path_buf(),
                message,
            })?;
        info!(path = %path.display(), "loaded fastText model");
        Ok(Self { inner })
    }
}

impl LanguageModel for FastTextDetector {
    fn predict(&self, text: &str, k: usize) -> anyhow::Result<Vec<RankedLabel>> {
        let predictions = self
            .inner
            .predict(text, k as i32, 0.0)
            .map_err(|message| anyhow!("fastText predict failed: {message}"))?;

        Ok(predictions
            .into_iter()
            .map(|p| RankedLabel {
                label: p.label,
                probability: p.prob,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_a_missing_file_fails() {
        let err = FastTextDetector::load(Path::new("/nonexistent/model.bin")).unwrap_err();
        match err {
            ModelError::Load { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/model.bin"));
            }
            other => panic!("expected load error, got {other:?}"),
        }
    }

    /// Exercises a real model when one is available locally; point
    /// GLOTSERVE_TEST_MODEL at a model.bin to enable.
    #[test]
    fn real_model_identifies_portuguese() {
        let Ok(model_path) = std::env::var("GLOTSERVE_TEST_MODEL") else {
            eprintln!("GLOTSERVE_TEST_MODEL not set, skipping");
            return;
        };
        let detector = FastTextDetector::load(Path::new(&model_path)).unwrap();
        let ranked = detector.predict("Bom dia, como vai você?", 1).unwrap();
        assert_eq!(ranked.len(), 1);
        assert!(
            ranked[0].language_code().starts_with("por"),
            "unexpected language: {}",
            ranked[0].language_code()
        );
        assert!(ranked[0].probability > 0.0);
    }
}
