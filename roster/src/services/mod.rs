//! Service implementations backing the trait seams

pub mod lexicon;

pub use lexicon::BuiltinLexicon;
