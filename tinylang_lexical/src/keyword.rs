//! Contains the [`KeywordTable`] used to tell reserved words from identifiers.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::token::TokenKind;

/// Is a read-only mapping from the exact spelling of every reserved word to its [`TokenKind`].
///
/// The table is filled once when it is created. Matching is case-sensitive: `BEGIN` is a keyword,
/// `begin` is an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    keywords: HashMap<&'static str, TokenKind>,
}

impl KeywordTable {
    /// Creates a table containing every tinylang keyword.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self {
            keywords: HashMap::new(),
        };
        table.add_keywords();
        table
    }

    fn add_keywords(&mut self) {
        for kind in TokenKind::iter() {
            if let Some(spelling) = kind.keyword_spelling() {
                self.add_keyword(spelling, kind);
            }
        }
    }

    fn add_keyword(&mut self, spelling: &'static str, kind: TokenKind) {
        self.keywords.insert(spelling, kind);
    }

    /// Gets the keyword kind spelled by `name`, or `default_kind` if `name` is not reserved.
    #[must_use]
    pub fn lookup(&self, name: &str, default_kind: TokenKind) -> TokenKind {
        self.keywords.get(name).copied().unwrap_or(default_kind)
    }

    /// Checks if `name` is a reserved word.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool { self.keywords.contains_key(name) }

    /// Gets the number of reserved words.
    #[must_use]
    pub fn len(&self) -> usize { self.keywords.len() }

    /// Checks if the table holds no reserved words.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }
}

impl Default for KeywordTable {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests;
