use super::*;
use crate::keywords::{BUILTINS, KEYWORDS};

// === Span ===

#[test]
fn span_basics() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 10..20);
}

#[test]
fn span_point_is_empty() {
    let point = Span::point(42);
    assert_eq!(point.start, 42);
    assert_eq!(point.end, 42);
    assert!(point.is_empty());
    assert_eq!(point.len(), 0);
}

#[test]
fn span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
}

// === Token ===

#[test]
fn token_text_borrows_lexeme() {
    let source = "let x = 42;";
    let token = Token::new(TokenKind::Ident, Span::new(4, 5), 1);
    assert_eq!(token.text(source), "x");
}

#[test]
fn token_text_out_of_range_is_empty() {
    let token = Token::new(TokenKind::Ident, Span::new(10, 20), 1);
    assert_eq!(token.text("short"), "");
}

#[test]
fn token_debug_format() {
    let token = Token::new(TokenKind::KwLet, Span::new(0, 3), 2);
    assert_eq!(format!("{token:?}"), "keyword_let @ 0..3 (line 2)");
}

// === TokenKind names ===

#[test]
fn names_are_stable() {
    assert_eq!(TokenKind::Eof.name(), "eof");
    assert_eq!(TokenKind::Ident.name(), "identifier");
    assert_eq!(TokenKind::NumberLiteral.name(), "number_literal");
    assert_eq!(TokenKind::StringLiteral.name(), "string_literal");
    assert_eq!(TokenKind::CharLiteral.name(), "char_literal");
    assert_eq!(TokenKind::Question.name(), "questionmark");
    assert_eq!(TokenKind::Dollar.name(), "dollar_sign");
    assert_eq!(TokenKind::At.name(), "at_sign");
    assert_eq!(TokenKind::Ellipsis3.name(), "ellipsis3");
    assert_eq!(
        TokenKind::AngleLeftLeftEqual.name(),
        "angle_bracket_left_left_equal"
    );
    assert_eq!(
        TokenKind::AngleRightRightEqual.name(),
        "angle_bracket_right_right_equal"
    );
    assert_eq!(TokenKind::KwUnsigned.name(), "keyword_unsigned");
    assert_eq!(TokenKind::KwSigned.name(), "keyword_signed");
    assert_eq!(TokenKind::BuiltinInclude.name(), "builtin_include");
}

#[test]
fn keyword_names_match_spellings() {
    // keyword_<spelling> for every table entry
    for (spelling, kind) in KEYWORDS {
        assert_eq!(kind.name(), format!("keyword_{spelling}"));
    }
}

#[test]
fn builtin_names_match_spellings() {
    for (spelling, kind) in BUILTINS {
        assert_eq!(kind.name(), format!("builtin_{spelling}"));
    }
}

// === TokenKind lexemes ===

#[test]
fn fixed_lexemes() {
    assert_eq!(TokenKind::Plus.lexeme(), Some("+"));
    assert_eq!(TokenKind::PlusPlus.lexeme(), Some("++"));
    assert_eq!(TokenKind::Arrow.lexeme(), Some("->"));
    assert_eq!(TokenKind::Ellipsis2.lexeme(), Some(".."));
    assert_eq!(TokenKind::Ellipsis3.lexeme(), Some("..."));
    assert_eq!(TokenKind::ColonEqual.lexeme(), Some(":="));
    assert_eq!(TokenKind::AngleLeftLeftEqual.lexeme(), Some("<<="));
    assert_eq!(TokenKind::AngleRightRightEqual.lexeme(), Some(">>="));
    assert_eq!(TokenKind::KwTypedef.lexeme(), Some("typedef"));
    assert_eq!(TokenKind::BuiltinEndif.lexeme(), Some("endif"));
}

#[test]
fn variable_content_kinds_have_no_lexeme() {
    assert_eq!(TokenKind::Eof.lexeme(), None);
    assert_eq!(TokenKind::Ident.lexeme(), None);
    assert_eq!(TokenKind::NumberLiteral.lexeme(), None);
    assert_eq!(TokenKind::StringLiteral.lexeme(), None);
    assert_eq!(TokenKind::CharLiteral.lexeme(), None);
}

#[test]
fn keyword_lexemes_match_table_spellings() {
    for (spelling, kind) in KEYWORDS {
        assert_eq!(kind.lexeme(), Some(spelling));
    }
    for (spelling, kind) in BUILTINS {
        assert_eq!(kind.lexeme(), Some(spelling));
    }
}

// === Classification predicates ===

#[test]
fn keyword_range_classification() {
    for (_, kind) in KEYWORDS {
        assert!(kind.is_keyword(), "{} should be a keyword", kind.name());
        assert!(!kind.is_builtin());
    }
}

#[test]
fn builtin_range_classification() {
    for (_, kind) in BUILTINS {
        assert!(kind.is_builtin(), "{} should be a builtin", kind.name());
        assert!(!kind.is_keyword());
    }
}

#[test]
fn non_keyword_kinds_are_neither() {
    for kind in [
        TokenKind::Eof,
        TokenKind::Ident,
        TokenKind::NumberLiteral,
        TokenKind::Hash,
        TokenKind::AngleRightRightEqual,
        TokenKind::Semicolon,
    ] {
        assert!(!kind.is_keyword());
        assert!(!kind.is_builtin());
    }
}

// === Display ===

#[test]
fn display_prefers_lexeme() {
    assert_eq!(format!("{}", TokenKind::Arrow), "->");
    assert_eq!(format!("{}", TokenKind::KwReturn), "return");
    assert_eq!(format!("{}", TokenKind::Ident), "identifier");
    assert_eq!(format!("{}", TokenKind::Eof), "eof");
}
