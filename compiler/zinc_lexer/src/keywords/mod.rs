//! Keyword and builtin-directive resolution.
//!
//! Two fixed tables, consulted only after an identifier-shaped lexeme has
//! been fully scanned:
//!
//! 1. **Keywords**: resolved for every identifier.
//! 2. **Builtins**: resolved for the word after a `#` during directive scans.
//!
//! Both lookups bucket by length first: the slice's length selects the
//! candidate set, then whole-slice byte equality decides. A lexeme that
//! merely shares a prefix or suffix with a table entry (`intx`, `xint`,
//! `ret`) therefore never resolves, and neither does the empty directive
//! word of a bare `#`.

use crate::token::TokenKind;

/// The reserved keyword table: spelling → kind.
///
/// Exposed for tests and tooling (e.g. syntax highlighters); the scanner
/// goes through [`keyword_lookup`] instead of walking this table.
pub const KEYWORDS: [(&str, TokenKind); 40] = [
    ("return", TokenKind::KwReturn),
    ("const", TokenKind::KwConst),
    ("let", TokenKind::KwLet),
    ("static", TokenKind::KwStatic),
    ("if", TokenKind::KwIf),
    ("else", TokenKind::KwElse),
    ("for", TokenKind::KwFor),
    ("while", TokenKind::KwWhile),
    ("do", TokenKind::KwDo),
    ("goto", TokenKind::KwGoto),
    ("switch", TokenKind::KwSwitch),
    ("case", TokenKind::KwCase),
    ("break", TokenKind::KwBreak),
    ("default", TokenKind::KwDefault),
    ("struct", TokenKind::KwStruct),
    ("enum", TokenKind::KwEnum),
    ("union", TokenKind::KwUnion),
    ("typedef", TokenKind::KwTypedef),
    ("sizeof", TokenKind::KwSizeof),
    ("signed", TokenKind::KwSigned),
    ("unsigned", TokenKind::KwUnsigned),
    ("int", TokenKind::KwInt),
    ("bool", TokenKind::KwBool),
    ("char", TokenKind::KwChar),
    ("short", TokenKind::KwShort),
    ("long", TokenKind::KwLong),
    ("float", TokenKind::KwFloat),
    ("double", TokenKind::KwDouble),
    ("true", TokenKind::KwTrue),
    ("false", TokenKind::KwFalse),
    ("u8", TokenKind::KwU8),
    ("i8", TokenKind::KwI8),
    ("u16", TokenKind::KwU16),
    ("i16", TokenKind::KwI16),
    ("u32", TokenKind::KwU32),
    ("i32", TokenKind::KwI32),
    ("u64", TokenKind::KwU64),
    ("i64", TokenKind::KwI64),
    ("f32", TokenKind::KwF32),
    ("f64", TokenKind::KwF64),
];

/// The builtin directive table: spelling (without `#`) → kind.
pub const BUILTINS: [(&str, TokenKind); 6] = [
    ("include", TokenKind::BuiltinInclude),
    ("embed", TokenKind::BuiltinEmbed),
    ("define", TokenKind::BuiltinDefine),
    ("ifdef", TokenKind::BuiltinIfdef),
    ("ifndef", TokenKind::BuiltinIfndef),
    ("endif", TokenKind::BuiltinEndif),
];

/// Look up a reserved keyword by its scanned bytes.
///
/// Returns the keyword's kind on an exact (length and content) match,
/// `None` for a regular identifier.
///
/// Length-bucketing gives fast rejection: identifiers whose length falls
/// outside the 2-8 range are rejected without any comparison.
#[inline]
pub fn keyword_lookup(ident: &[u8]) -> Option<TokenKind> {
    match ident.len() {
        2 => match ident {
            b"if" => Some(TokenKind::KwIf),
            b"do" => Some(TokenKind::KwDo),
            b"u8" => Some(TokenKind::KwU8),
            b"i8" => Some(TokenKind::KwI8),
            _ => None,
        },
        3 => match ident {
            b"let" => Some(TokenKind::KwLet),
            b"for" => Some(TokenKind::KwFor),
            b"int" => Some(TokenKind::KwInt),
            b"u16" => Some(TokenKind::KwU16),
            b"i16" => Some(TokenKind::KwI16),
            b"u32" => Some(TokenKind::KwU32),
            b"i32" => Some(TokenKind::KwI32),
            b"u64" => Some(TokenKind::KwU64),
            b"i64" => Some(TokenKind::KwI64),
            b"f32" => Some(TokenKind::KwF32),
            b"f64" => Some(TokenKind::KwF64),
            _ => None,
        },
        4 => match ident {
            b"else" => Some(TokenKind::KwElse),
            b"goto" => Some(TokenKind::KwGoto),
            b"case" => Some(TokenKind::KwCase),
            b"enum" => Some(TokenKind::KwEnum),
            b"bool" => Some(TokenKind::KwBool),
            b"char" => Some(TokenKind::KwChar),
            b"long" => Some(TokenKind::KwLong),
            b"true" => Some(TokenKind::KwTrue),
            _ => None,
        },
        5 => match ident {
            b"const" => Some(TokenKind::KwConst),
            b"while" => Some(TokenKind::KwWhile),
            b"break" => Some(TokenKind::KwBreak),
            b"union" => Some(TokenKind::KwUnion),
            b"short" => Some(TokenKind::KwShort),
            b"float" => Some(TokenKind::KwFloat),
            b"false" => Some(TokenKind::KwFalse),
            _ => None,
        },
        6 => match ident {
            b"return" => Some(TokenKind::KwReturn),
            b"static" => Some(TokenKind::KwStatic),
            b"switch" => Some(TokenKind::KwSwitch),
            b"struct" => Some(TokenKind::KwStruct),
            b"sizeof" => Some(TokenKind::KwSizeof),
            b"signed" => Some(TokenKind::KwSigned),
            b"double" => Some(TokenKind::KwDouble),
            _ => None,
        },
        7 => match ident {
            b"default" => Some(TokenKind::KwDefault),
            b"typedef" => Some(TokenKind::KwTypedef),
            _ => None,
        },
        8 => match ident {
            b"unsigned" => Some(TokenKind::KwUnsigned),
            _ => None,
        },
        _ => None,
    }
}

/// Look up a builtin directive by the word scanned after `#`.
///
/// Returns the builtin's kind on an exact match, `None` otherwise, in
/// particular for the empty word of a bare `#`.
#[inline]
pub fn builtin_lookup(word: &[u8]) -> Option<TokenKind> {
    match word.len() {
        5 => match word {
            b"embed" => Some(TokenKind::BuiltinEmbed),
            b"ifdef" => Some(TokenKind::BuiltinIfdef),
            b"endif" => Some(TokenKind::BuiltinEndif),
            _ => None,
        },
        6 => match word {
            b"define" => Some(TokenKind::BuiltinDefine),
            b"ifndef" => Some(TokenKind::BuiltinIfndef),
            _ => None,
        },
        7 => match word {
            b"include" => Some(TokenKind::BuiltinInclude),
            _ => None,
        },
        _ => None,
    }
}
