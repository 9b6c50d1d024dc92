//! Service trait definitions for dependency injection
//!
//! The name lexicon is an external reference table; abstracting it lets
//! tests pin coverage independently of the suffix-fallback logic.

use crate::types::LexiconVerdict;

/// First-name gender lexicon
#[mockall::automock]
pub trait NameLexicon: Send + Sync {
    /// Report the lexicon's verdict for a given (first) name
    fn lookup(&self, given_name: &str) -> LexiconVerdict;
}
