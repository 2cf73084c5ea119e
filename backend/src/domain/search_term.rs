//! Validated holder search input.
//!
//! A term shorter than [`MIN_SEARCH_TERM_CHARS`] is never sent to the store:
//! it would match nearly every holder. The term is otherwise kept verbatim
//! (no trimming or case folding) so the match predicate sees what the user
//! typed.

/// Minimum term length, in Unicode scalar values, that triggers a store read.
pub const MIN_SEARCH_TERM_CHARS: usize = 2;

/// Reasons a raw term cannot be used as a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchTermError {
    /// The term has fewer than [`MIN_SEARCH_TERM_CHARS`] characters.
    #[error(
        "search term must contain at least {min} characters, got {length}",
        min = MIN_SEARCH_TERM_CHARS
    )]
    TooShort { length: usize },
}

/// A holder search term long enough to query the store.
///
/// # Examples
/// ```
/// use registry_backend::domain::{SearchTerm, SearchTermError};
///
/// assert_eq!(SearchTerm::new("an").map(|t| t.as_str().to_owned()), Ok("an".to_owned()));
/// assert_eq!(SearchTerm::new("a"), Err(SearchTermError::TooShort { length: 1 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Validate a raw term.
    ///
    /// # Errors
    /// Returns [`SearchTermError::TooShort`] when the term is below the
    /// minimum length.
    pub fn new(raw: impl Into<String>) -> Result<Self, SearchTermError> {
        let raw = raw.into();
        let length = raw.chars().count();
        if length < MIN_SEARCH_TERM_CHARS {
            return Err(SearchTermError::TooShort { length });
        }
        Ok(Self(raw))
    }

    /// The validated term.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
