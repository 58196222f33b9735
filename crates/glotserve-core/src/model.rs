//! The seam between the service and a language-identification backend.

/// Prefix a supervised fastText model prepends to every stored label.
pub const LABEL_PREFIX: &str = "__label__";

/// One raw model label with its probability.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLabel {
    /// Label as stored in the model, usually still prefixed.
    pub label: String,
    /// Probability mass the model assigns to this label.
    pub probability: f32,
}

impl RankedLabel {
    /// The bare language code: the label with [`LABEL_PREFIX`] stripped.
    ///
    /// Labels without the prefix pass through unchanged.
    pub fn language_code(&self) -> &str {
        self.label.strip_prefix(LABEL_PREFIX).unwrap_or(&self.label)
    }
}

/// A loaded language-identification model.
///
/// Implementations are shared read-only across concurrent request handlers,
/// so prediction takes `&self` and the trait requires `Send + Sync`.
pub trait LanguageModel: Send + Sync {
    /// Return the top-`k` labels for `text`, ordered by descending probability.
    fn predict(&self, text: &str, k: usize) -> anyhow::Result<Vec<RankedLabel>>;
}
