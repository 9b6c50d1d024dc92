//! Gender inference from a record's first name
//!
//! The classifier asks the lexicon first and only trusts a definite
//! verdict. Anything weaker falls back to a Portuguese name-ending rule.

use std::sync::Arc;

use shared::Gender;

use crate::traits::NameLexicon;
use crate::types::LexiconVerdict;

/// Infers a [`Gender`] for each record from its first name
pub struct GenderClassifier {
    lexicon: Arc<dyn NameLexicon>,
}

impl GenderClassifier {
    pub fn new(lexicon: Arc<dyn NameLexicon>) -> Self {
        Self { lexicon }
    }

    /// Classify a full name by its first whitespace-separated token
    ///
    /// A blank name has no first token and is `Indeterminate` without
    /// consulting the lexicon.
    pub fn classify(&self, name: &str) -> Gender {
        let Some(given) = name.split_whitespace().next() else {
            return Gender::Indeterminate;
        };

        match self.lexicon.lookup(given) {
            LexiconVerdict::Male => Gender::Male,
            LexiconVerdict::Female => Gender::Female,
            // A "mostly" or androgynous grade is not definite; those
            // take the ending rule like unknown names do.
            _ => suffix_fallback(given),
        }
    }
}

/// Ending rule for names the lexicon cannot settle
///
/// Lowercase 'a' and 'e' endings read as female, 'o' as male. The match
/// is case sensitive, so an all-caps name lands on `Indeterminate`.
fn suffix_fallback(given: &str) -> Gender {
    match given.chars().last() {
        Some('a') | Some('e') => Gender::Female,
        Some('o') => Gender::Male,
        _ => Gender::Indeterminate,
    }
}
