use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let buf = SourceBuffer::new("hi");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.current(), b'h');
    cursor.advance();
    assert_eq!(cursor.current(), b'i');
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

// === EOF Detection ===

#[test]
fn is_eof_at_sentinel() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance(); // past 'x', at sentinel
    assert!(cursor.is_eof());
}

#[test]
fn is_eof_on_empty_source() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

// === Line Tracking ===

#[test]
fn line_starts_at_one() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.line(), 1);
}

#[test]
fn advance_line_bumps_line() {
    let buf = SourceBuffer::new("a\nb\nc");
    let mut cursor = buf.cursor();
    cursor.advance(); // past 'a'
    cursor.advance_line(); // past '\n'
    assert_eq!(cursor.line(), 2);
    assert_eq!(cursor.current(), b'b');
    cursor.advance();
    cursor.advance_line();
    assert_eq!(cursor.line(), 3);
}

#[test]
fn plain_advance_does_not_bump_line() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.line(), 1);
}

// === Slice ===

#[test]
fn slice_extracts_bytes() {
    let buf = SourceBuffer::new("hello world");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 5), b"hello");
    assert_eq!(cursor.slice(6, 11), b"world");
}

#[test]
fn slice_from_extracts_to_current() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.slice_from(0), b"abc");
    assert_eq!(cursor.slice_from(1), b"bc");
}

#[test]
fn slice_empty_range() {
    let buf = SourceBuffer::new("hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(2, 2), b"");
}

// === eat_while ===

#[test]
fn eat_while_consumes_matching_bytes() {
    let buf = SourceBuffer::new("aaabbb");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), b'b');
}

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("aaa");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

// === eat_whitespace ===

#[test]
fn eat_whitespace_consumes_spaces_and_tabs() {
    let buf = SourceBuffer::new("  \t hello");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'h');
}

#[test]
fn eat_whitespace_stops_at_newline() {
    let buf = SourceBuffer::new("  \nx");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.line(), 1);
}

#[test]
fn eat_whitespace_no_op_on_non_whitespace() {
    let buf = SourceBuffer::new("x  ");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 0);
}

// === eat_until_newline_or_eof ===

#[test]
fn eat_until_newline_stops_at_newline() {
    let buf = SourceBuffer::new("comment body\nnext");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.pos(), 12);
}

#[test]
fn eat_until_newline_stops_at_eof() {
    let buf = SourceBuffer::new("no newline here");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), cursor.source_len());
}

// === skip_to_string_delim ===

#[test]
fn skip_to_string_delim_finds_quote() {
    let buf = SourceBuffer::new("abc\"rest");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'"');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_string_delim_finds_backslash() {
    let buf = SourceBuffer::new("ab\\n\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\\');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_string_delim_finds_newline() {
    let buf = SourceBuffer::new("ab\ncd\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\n');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_string_delim_returns_zero_at_eof() {
    let buf = SourceBuffer::new("no delimiters");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_string_delim_takes_earliest() {
    // Backslash before quote: must stop at the backslash.
    let buf = SourceBuffer::new("a\\\"b\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_string_delim(), b'\\');
    assert_eq!(cursor.pos(), 1);
}
