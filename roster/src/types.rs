//! Component-internal types for the roster core

/// Verdict grades a first-name lexicon can report
///
/// Only `Male` and `Female` are definite; every other grade sends the
/// classifier to its suffix fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexiconVerdict {
    Male,
    Female,
    MostlyMale,
    MostlyFemale,
    Androgynous,
    Unknown,
}

/// Loader configuration
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    /// Worksheet to read; `None` selects the first sheet
    pub sheet: Option<String>,
}
