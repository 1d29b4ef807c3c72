//! Phishguard - phishing email detection
//!
//! A fast, local-first phishing detector that runs a fixed NLP
//! preprocessing pipeline (lowercase, tokenize, stopword removal,
//! stemming) and classifies email text with a pre-trained
//! TF-IDF + linear model. No network calls, no data leaves your machine.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod detector;
pub mod models;
pub mod nlp;
pub mod reporters;

pub use classifier::{Classify, ModelArtifact, Pipeline};
pub use detector::PhishingDetector;
pub use models::{Label, Outcome};
pub use nlp::Normalizer;
