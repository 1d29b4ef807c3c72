//! Porter-style stemming
//!
//! Thin wrapper over the Snowball implementations in `rust-stemmers`.
//! Stemming is heuristic suffix stripping: it conflates morphological
//! variants ("running" → "run") and may emit non-dictionary roots
//! ("flies" → "fli", "verify" → "verifi"). That is accepted behavior,
//! not a bug; the model was trained on the same stems.

use rust_stemmers::{Algorithm, Stemmer};
use std::borrow::Cow;

/// Stems single word tokens for a fixed language.
pub struct WordStemmer {
    stemmer: Stemmer,
}

impl WordStemmer {
    /// Create a stemmer for the given ISO 639-1 language code.
    ///
    /// Returns `None` when no Snowball algorithm exists for the language.
    pub fn new(language: &str) -> Option<Self> {
        let algorithm = match language.to_lowercase().as_str() {
            "en" | "english" => Algorithm::English,
            "de" | "german" => Algorithm::German,
            "fr" | "french" => Algorithm::French,
            "es" | "spanish" => Algorithm::Spanish,
            "it" | "italian" => Algorithm::Italian,
            "pt" | "portuguese" => Algorithm::Portuguese,
            "nl" | "dutch" => Algorithm::Dutch,
            "ru" | "russian" => Algorithm::Russian,
            "sv" | "swedish" => Algorithm::Swedish,
            "da" | "danish" => Algorithm::Danish,
            "fi" | "finnish" => Algorithm::Finnish,
            "tr" | "turkish" => Algorithm::Turkish,
            _ => return None,
        };
        Some(Self {
            stemmer: Stemmer::create(algorithm),
        })
    }

    /// Stem one lowercase token.
    pub fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.stemmer.stem(word)
    }
}
