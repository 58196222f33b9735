//! Core layer: text cleaning, the language-model trait, and the prediction service.

pub mod clean;
pub mod model;
pub mod service;

pub use clean::clean_text;
pub use model::{LABEL_PREFIX, LanguageModel, RankedLabel};
pub use service::{IdentifyError, LanguageIdentifier, LanguagePrediction, TextInput};
