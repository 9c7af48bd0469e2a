use super::{Location, SourceFile, Span};

#[test]
fn test_line_starts() {
    let text = "Hello\nworld\r\n!\rtes";
    assert_eq!(super::line_starts(text), vec![0, 6, 13, 15]);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "MODULE Test;";
    let source_file = SourceFile::temp(TEST_FILE).unwrap();
    assert_eq!(source_file.content(), TEST_FILE);
    assert_eq!(source_file.line_count(), 1);
}

#[test]
fn test_empty_file() {
    let source_file = SourceFile::temp("").unwrap();
    assert_eq!(source_file.content(), "");
    assert_eq!(
        source_file.get_location(0),
        Some(Location { line: 1, column: 1 })
    );
}

#[test]
fn test_get_line() {
    let source_file = SourceFile::temp("first\nsecond\r\nthird").unwrap();

    assert_eq!(source_file.get_line(0), None);
    assert_eq!(source_file.get_line(1), Some("first\n"));
    assert_eq!(source_file.get_line(2), Some("second\r\n"));
    assert_eq!(source_file.get_line(3), Some("third"));
    assert_eq!(source_file.get_line(4), None);
}

#[test]
fn test_get_location() {
    let source_file = SourceFile::temp("ab\n\u{e9}cd").unwrap();

    assert_eq!(
        source_file.get_location(1),
        Some(Location { line: 1, column: 2 })
    );
    assert_eq!(
        source_file.get_location(3),
        Some(Location { line: 2, column: 1 })
    );

    // `é` takes two bytes but one column
    assert_eq!(
        source_file.get_location(5),
        Some(Location { line: 2, column: 2 })
    );
    assert_eq!(source_file.get_location(4), None);

    // one past the end still resolves
    assert_eq!(
        source_file.get_location(7),
        Some(Location { line: 2, column: 4 })
    );
    assert_eq!(source_file.get_location(8), None);
}

#[test]
fn test_span_bounds() {
    let source_file = SourceFile::temp("BEGIN END").unwrap();

    let span = Span::new(source_file.clone(), 6, 9).unwrap();
    assert_eq!(span.str(), "END");
    assert_eq!(span.len(), 3);

    assert!(Span::new(source_file.clone(), 4, 2).is_none());
    assert!(Span::new(source_file.clone(), 0, 10).is_none());

    let begin = Span::new(source_file.clone(), 0, 5).unwrap();
    assert_eq!(begin.join(&span).unwrap().str(), "BEGIN END");
    assert!(span.join(&begin).is_none());

    let end = Span::at_end(source_file.clone());
    assert!(end.is_empty());
    assert_eq!(end.start(), 9);
    assert_eq!(end.start_location(), Some(Location { line: 1, column: 10 }));

    let other = SourceFile::temp("BEGIN END").unwrap();
    assert_ne!(Span::new(other, 0, 5).unwrap(), begin);
}

#[test]
fn test_cursor() {
    let source_file = SourceFile::temp("ab:=").unwrap();
    let mut cursor = source_file.cursor();

    cursor.eat_while(|character| character.is_ascii_alphabetic());
    assert_eq!(cursor.position(), 2);

    assert!(!cursor.eat('='));
    assert!(cursor.eat(':'));
    assert_eq!(cursor.peek(), Some((3, '=')));
    assert_eq!(cursor.next(), Some((3, '=')));

    assert_eq!(cursor.position(), 4);
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), None);
}
