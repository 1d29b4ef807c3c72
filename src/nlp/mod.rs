//! Natural language preprocessing for email text
//!
//! This module implements the fixed normalization pipeline applied to
//! every email before classification:
//!
//! 1. Lowercase the entire input
//! 2. Tokenize into word-level units (punctuation is a split point)
//! 3. Drop tokens that are stopwords
//! 4. Stem the survivors with a Porter-style suffix stripper
//!
//! The pipeline is deterministic, side-effect free, and never fails:
//! non-ASCII or emoji-laden input simply loses the tokens that are not
//! alphanumeric. The output token order follows the input order.

pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

pub use stemmer::WordStemmer;
pub use stopwords::StopwordFilter;
pub use tokenizer::tokenize;

use thiserror::Error;

/// Errors raised while constructing a [`Normalizer`].
///
/// Linguistic resources are bundled into the binary, so construction
/// only fails when the requested language has no stemmer or stopword
/// list. This is a startup error, never a per-request one.
#[derive(Debug, Error)]
pub enum NlpError {
    #[error("unsupported preprocessing language: {0}")]
    UnsupportedLanguage(String),
}

/// The fixed text-normalization pipeline.
///
/// Immutable after construction and safe to share across threads;
/// every call to [`Normalizer::normalize`] is independent.
pub struct Normalizer {
    stopwords: StopwordFilter,
    stemmer: WordStemmer,
}

impl Normalizer {
    /// Build a normalizer for the given ISO 639-1 language code.
    pub fn new(language: &str) -> Result<Self, NlpError> {
        let stopwords = StopwordFilter::new(language)
            .ok_or_else(|| NlpError::UnsupportedLanguage(language.to_string()))?;
        let stemmer = WordStemmer::new(language)
            .ok_or_else(|| NlpError::UnsupportedLanguage(language.to_string()))?;
        Ok(Self { stopwords, stemmer })
    }

    /// English pipeline, matching the language the bundled model was
    /// trained on.
    pub fn english() -> Self {
        Self::new("en").expect("english resources are always bundled")
    }

    /// Add extra stopwords on top of the bundled list.
    pub fn with_extra_stopwords(mut self, words: &[String]) -> Self {
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        self.stopwords.add_stopwords(&refs);
        self
    }

    /// Run the full pipeline and return the space-joined stems.
    ///
    /// Empty input, whitespace-only input, or input whose tokens are all
    /// punctuation or stopwords yields an empty string.
    ///
    /// Stopword filtering happens before stemming, matching the order the
    /// model's training data was prepared with. The output is therefore a
    /// fixed point of re-normalization except for the rare non-word whose
    /// stem is itself a stopword; such a token survives the first pass and
    /// is dropped on the next.
    pub fn normalize(&self, text: &str) -> String {
        let mut stems = Vec::new();
        let lowered = text.to_lowercase();
        for token in tokenize(&lowered) {
            if self.stopwords.is_stopword(token) {
                continue;
            }
            stems.push(self.stemmer.stem(token).into_owned());
        }
        stems.join(" ")
    }

    /// Number of tokens the pipeline would emit for this input.
    pub fn token_count(&self, text: &str) -> usize {
        let lowered = text.to_lowercase();
        tokenize(&lowered)
            .filter(|t| !self.stopwords.is_stopword(t))
            .count()
    }
}
