//! Test helper utilities for roster integration tests

use std::sync::Arc;

use roster::{BuiltinLexicon, GenderClassifier};

/// Classifier wired to the bundled lexicon, as production uses it
pub fn builtin_classifier() -> GenderClassifier {
    GenderClassifier::new(Arc::new(BuiltinLexicon::new()))
}
