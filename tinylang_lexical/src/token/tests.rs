use std::collections::HashSet;

use strum::IntoEnumIterator;
use tinylang_base::source_file::SourceFile;

use super::{Token, TokenKind};

#[test]
fn kind_names() {
    assert_eq!(TokenKind::Eof.name(), "eof");
    assert_eq!(TokenKind::IntegerLiteral.name(), "integer_literal");
    assert_eq!(TokenKind::ColonEqual.name(), "colon_equal");
    assert_eq!(TokenKind::LParen.name(), "l_paren");
    assert_eq!(TokenKind::KwBegin.name(), "kw_begin");
}

#[test]
fn spellings_are_unique() {
    let mut spellings = HashSet::new();

    for kind in TokenKind::iter() {
        let spelling = kind.punctuator_spelling().or_else(|| kind.keyword_spelling());

        if let Some(spelling) = spelling {
            assert!(spelling.len() <= 2 || kind.is_keyword());
            assert!(spellings.insert(spelling), "duplicated spelling {spelling}");
        }

        // no kind is both
        assert!(!(kind.is_keyword() && kind.is_punctuator()));
    }
}

#[test]
fn keyword_names_follow_spellings() {
    for kind in TokenKind::iter().filter(|kind| kind.is_keyword()) {
        let spelling = kind.keyword_spelling().unwrap();
        assert_eq!(kind.name(), format!("kw_{}", spelling.to_lowercase()));
    }
}

#[test]
fn text_view_follows_kind() {
    let identifier = Token::new(TokenKind::Identifier, 4, "abc");
    assert_eq!(identifier.identifier(), Some("abc"));
    assert_eq!(identifier.literal_data(), None);
    assert_eq!(identifier.end(), 7);

    let string = Token::new(TokenKind::StringLiteral, 0, "\"abc\"");
    assert_eq!(string.literal_data(), Some("\"abc\""));
    assert_eq!(string.identifier(), None);

    let keyword = Token::new(TokenKind::KwEnd, 0, "END");
    assert_eq!(keyword.identifier(), None);
    assert_eq!(keyword.literal_data(), None);
    assert_eq!(keyword.length(), 3);
}

#[test]
fn kind_predicates() {
    let token = Token::new(TokenKind::LessEqual, 0, "<=");

    assert!(token.is(TokenKind::LessEqual));
    assert!(token.is_not(TokenKind::Less));
    assert!(token.is_one_of(&[TokenKind::Less, TokenKind::LessEqual]));
    assert!(!token.is_one_of(&[TokenKind::Greater, TokenKind::GreaterEqual]));
    assert_eq!(token.name(), "less_equal");
}

#[test]
fn token_span() {
    let source_file = SourceFile::temp("x := 10").unwrap();
    let token = Token::new(TokenKind::IntegerLiteral, 5, &source_file.content()[5..7]);

    let span = token.span(&source_file).unwrap();
    assert_eq!(span.str(), "10");

    let out_of_bounds = Token::new(TokenKind::IntegerLiteral, 6, "10");
    assert!(out_of_bounds.span(&source_file).is_none());
}
