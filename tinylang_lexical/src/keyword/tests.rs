use strum::IntoEnumIterator;

use super::KeywordTable;
use crate::token::TokenKind;

#[test]
fn every_keyword_is_registered() {
    let table = KeywordTable::new();
    let keywords = TokenKind::iter().filter(|kind| kind.is_keyword());

    assert_eq!(table.len(), keywords.clone().count());

    for kind in keywords {
        let spelling = kind.keyword_spelling().unwrap();
        assert_eq!(table.lookup(spelling, TokenKind::Identifier), kind);
    }
}

#[test]
fn miss_returns_default() {
    let table = KeywordTable::new();

    assert_eq!(
        table.lookup("counter", TokenKind::Identifier),
        TokenKind::Identifier
    );
    assert_eq!(table.lookup("", TokenKind::Unknown), TokenKind::Unknown);
    assert!(!table.contains("counter"));
}

#[test]
fn lookup_is_case_sensitive() {
    let table = KeywordTable::new();

    assert_eq!(table.lookup("BEGIN", TokenKind::Identifier), TokenKind::KwBegin);
    assert_eq!(
        table.lookup("begin", TokenKind::Identifier),
        TokenKind::Identifier
    );
    assert_eq!(
        table.lookup("Begin", TokenKind::Identifier),
        TokenKind::Identifier
    );
    assert_eq!(
        table.lookup("BEGIN1", TokenKind::Identifier),
        TokenKind::Identifier
    );
}

#[test]
fn prefixes_are_not_keywords() {
    let table = KeywordTable::new();

    // `MOD` and `MODULE` are both reserved, `MODU` is not
    assert_eq!(table.lookup("MOD", TokenKind::Identifier), TokenKind::KwMod);
    assert_eq!(
        table.lookup("MODULE", TokenKind::Identifier),
        TokenKind::KwModule
    );
    assert!(!table.contains("MODU"));
}
