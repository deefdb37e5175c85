//! Token types for the Zinc lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with a byte [`Span`] into the source
//! and the 1-based line its first byte lies on. Tokens are immutable and
//! carry no text of their own; the lexeme is a borrowed view into the
//! source, extracted on demand via [`Token::text`].

use std::fmt;

/// Source location span.
///
/// Layout: 8 bytes total.
/// - `start`: byte offset from source start (inclusive)
/// - `end`: byte offset (exclusive)
///
/// For every emitted token, `start <= end <= source_len`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a point span (zero-length), used for `eof`.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Convert to a `std::ops::Range` for slicing.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A token with its span and line in the source.
///
/// Immutable once produced; the scanner does not retain tokens after
/// returning them.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Line the token's first byte lies on, 1-based.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, line: u32) -> Self {
        Token { kind, span, line }
    }

    /// Borrow the token's lexeme out of the source it was scanned from.
    ///
    /// Returns `""` if the span does not fit `source` (only possible when
    /// the token came from a different source).
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.to_range()).unwrap_or("")
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} (line {})", self.kind.name(), self.span, self.line)
    }
}

/// Token kinds for Zinc.
///
/// A closed, exhaustive enumeration: every punctuation and operator, every
/// reserved keyword, every builtin directive, the literal kinds, and `Eof`.
/// There is no catch-all variant: unrecognized input is a fatal
/// [`LexError`](crate::LexError), not a token.
///
/// Declaration order groups the variants into contiguous ranges (literals,
/// delimiters, operators, keywords, builtins) which the classification
/// predicates below rely on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // === Special & literals ===
    Eof,
    Ident,
    NumberLiteral,
    StringLiteral,
    CharLiteral,

    // === Delimiters ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // === Punctuation & operators ===
    Period,
    Ellipsis2,
    Ellipsis3,
    Colon,
    ColonEqual,
    ColonColon,
    Equal,
    EqualEqual,
    Semicolon,
    Comma,
    Bang,
    BangEqual,
    Question,
    Dollar,
    At,
    Hash,
    Plus,
    PlusPlus,
    PlusEqual,
    Minus,
    MinusMinus,
    MinusEqual,
    Arrow,
    Asterisk,
    AsteriskEqual,
    Slash,
    SlashEqual,
    Percent,
    PercentEqual,
    Pipe,
    PipeEqual,
    PipePipe,
    Ampersand,
    AmpersandEqual,
    AmpersandAmpersand,
    Caret,
    CaretEqual,
    Tilde,
    TildeEqual,
    AngleLeft,
    AngleLeftLeft,
    AngleLeftLeftEqual,
    AngleLeftEqual,
    AngleRight,
    AngleRightRight,
    AngleRightRightEqual,
    AngleRightEqual,

    // === Keywords ===
    KwReturn,
    KwConst,
    KwLet,
    KwStatic,
    KwIf,
    KwElse,
    KwFor,
    KwWhile,
    KwDo,
    KwGoto,
    KwSwitch,
    KwCase,
    KwBreak,
    KwDefault,
    KwStruct,
    KwEnum,
    KwUnion,
    KwTypedef,
    KwSizeof,
    KwSigned,
    KwUnsigned,
    KwInt,
    KwBool,
    KwChar,
    KwShort,
    KwLong,
    KwFloat,
    KwDouble,
    KwTrue,
    KwFalse,
    KwU8,
    KwI8,
    KwU16,
    KwI16,
    KwU32,
    KwI32,
    KwU64,
    KwI64,
    KwF32,
    KwF64,

    // === Builtin directives ===
    BuiltinInclude,
    BuiltinEmbed,
    BuiltinDefine,
    BuiltinIfdef,
    BuiltinIfndef,
    BuiltinEndif,
}

impl TokenKind {
    /// Stable snake_case name for this kind.
    ///
    /// Total over every variant and stable across versions; golden-output
    /// tests and the `zinc lex` dump rely on these strings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eof => "eof",
            Self::Ident => "identifier",
            Self::NumberLiteral => "number_literal",
            Self::StringLiteral => "string_literal",
            Self::CharLiteral => "char_literal",
            Self::LParen => "l_paren",
            Self::RParen => "r_paren",
            Self::LBrace => "l_brace",
            Self::RBrace => "r_brace",
            Self::LBracket => "l_bracket",
            Self::RBracket => "r_bracket",
            Self::Period => "period",
            Self::Ellipsis2 => "ellipsis2",
            Self::Ellipsis3 => "ellipsis3",
            Self::Colon => "colon",
            Self::ColonEqual => "colon_equal",
            Self::ColonColon => "colon_colon",
            Self::Equal => "equal",
            Self::EqualEqual => "equal_equal",
            Self::Semicolon => "semicolon",
            Self::Comma => "comma",
            Self::Bang => "bang",
            Self::BangEqual => "bang_equal",
            Self::Question => "questionmark",
            Self::Dollar => "dollar_sign",
            Self::At => "at_sign",
            Self::Hash => "hash",
            Self::Plus => "plus",
            Self::PlusPlus => "plus_plus",
            Self::PlusEqual => "plus_equal",
            Self::Minus => "minus",
            Self::MinusMinus => "minus_minus",
            Self::MinusEqual => "minus_equal",
            Self::Arrow => "arrow",
            Self::Asterisk => "asterisk",
            Self::AsteriskEqual => "asterisk_equal",
            Self::Slash => "slash",
            Self::SlashEqual => "slash_equal",
            Self::Percent => "percent",
            Self::PercentEqual => "percent_equal",
            Self::Pipe => "pipe",
            Self::PipeEqual => "pipe_equal",
            Self::PipePipe => "pipe_pipe",
            Self::Ampersand => "ampersand",
            Self::AmpersandEqual => "ampersand_equal",
            Self::AmpersandAmpersand => "ampersand_ampersand",
            Self::Caret => "caret",
            Self::CaretEqual => "caret_equal",
            Self::Tilde => "tilde",
            Self::TildeEqual => "tilde_equal",
            Self::AngleLeft => "angle_bracket_left",
            Self::AngleLeftLeft => "angle_bracket_left_left",
            Self::AngleLeftLeftEqual => "angle_bracket_left_left_equal",
            Self::AngleLeftEqual => "angle_bracket_left_equal",
            Self::AngleRight => "angle_bracket_right",
            Self::AngleRightRight => "angle_bracket_right_right",
            Self::AngleRightRightEqual => "angle_bracket_right_right_equal",
            Self::AngleRightEqual => "angle_bracket_right_equal",
            Self::KwReturn => "keyword_return",
            Self::KwConst => "keyword_const",
            Self::KwLet => "keyword_let",
            Self::KwStatic => "keyword_static",
            Self::KwIf => "keyword_if",
            Self::KwElse => "keyword_else",
            Self::KwFor => "keyword_for",
            Self::KwWhile => "keyword_while",
            Self::KwDo => "keyword_do",
            Self::KwGoto => "keyword_goto",
            Self::KwSwitch => "keyword_switch",
            Self::KwCase => "keyword_case",
            Self::KwBreak => "keyword_break",
            Self::KwDefault => "keyword_default",
            Self::KwStruct => "keyword_struct",
            Self::KwEnum => "keyword_enum",
            Self::KwUnion => "keyword_union",
            Self::KwTypedef => "keyword_typedef",
            Self::KwSizeof => "keyword_sizeof",
            Self::KwSigned => "keyword_signed",
            Self::KwUnsigned => "keyword_unsigned",
            Self::KwInt => "keyword_int",
            Self::KwBool => "keyword_bool",
            Self::KwChar => "keyword_char",
            Self::KwShort => "keyword_short",
            Self::KwLong => "keyword_long",
            Self::KwFloat => "keyword_float",
            Self::KwDouble => "keyword_double",
            Self::KwTrue => "keyword_true",
            Self::KwFalse => "keyword_false",
            Self::KwU8 => "keyword_u8",
            Self::KwI8 => "keyword_i8",
            Self::KwU16 => "keyword_u16",
            Self::KwI16 => "keyword_i16",
            Self::KwU32 => "keyword_u32",
            Self::KwI32 => "keyword_i32",
            Self::KwU64 => "keyword_u64",
            Self::KwI64 => "keyword_i64",
            Self::KwF32 => "keyword_f32",
            Self::KwF64 => "keyword_f64",
            Self::BuiltinInclude => "builtin_include",
            Self::BuiltinEmbed => "builtin_embed",
            Self::BuiltinDefine => "builtin_define",
            Self::BuiltinIfdef => "builtin_ifdef",
            Self::BuiltinIfndef => "builtin_ifndef",
            Self::BuiltinEndif => "builtin_endif",
        }
    }

    /// Fixed source spelling for this kind, if it has one.
    ///
    /// `None` for variable-content kinds (`Eof`, `Ident`, the literals).
    /// For `Hash` the canonical spelling is `#` even though an unmatched
    /// directive's span covers the word after it (see the scanner docs).
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Eof | Self::Ident | Self::NumberLiteral | Self::StringLiteral
            | Self::CharLiteral => None,
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::LBrace => Some("{"),
            Self::RBrace => Some("}"),
            Self::LBracket => Some("["),
            Self::RBracket => Some("]"),
            Self::Period => Some("."),
            Self::Ellipsis2 => Some(".."),
            Self::Ellipsis3 => Some("..."),
            Self::Colon => Some(":"),
            Self::ColonEqual => Some(":="),
            Self::ColonColon => Some("::"),
            Self::Equal => Some("="),
            Self::EqualEqual => Some("=="),
            Self::Semicolon => Some(";"),
            Self::Comma => Some(","),
            Self::Bang => Some("!"),
            Self::BangEqual => Some("!="),
            Self::Question => Some("?"),
            Self::Dollar => Some("$"),
            Self::At => Some("@"),
            Self::Hash => Some("#"),
            Self::Plus => Some("+"),
            Self::PlusPlus => Some("++"),
            Self::PlusEqual => Some("+="),
            Self::Minus => Some("-"),
            Self::MinusMinus => Some("--"),
            Self::MinusEqual => Some("-="),
            Self::Arrow => Some("->"),
            Self::Asterisk => Some("*"),
            Self::AsteriskEqual => Some("*="),
            Self::Slash => Some("/"),
            Self::SlashEqual => Some("/="),
            Self::Percent => Some("%"),
            Self::PercentEqual => Some("%="),
            Self::Pipe => Some("|"),
            Self::PipeEqual => Some("|="),
            Self::PipePipe => Some("||"),
            Self::Ampersand => Some("&"),
            Self::AmpersandEqual => Some("&="),
            Self::AmpersandAmpersand => Some("&&"),
            Self::Caret => Some("^"),
            Self::CaretEqual => Some("^="),
            Self::Tilde => Some("~"),
            Self::TildeEqual => Some("~="),
            Self::AngleLeft => Some("<"),
            Self::AngleLeftLeft => Some("<<"),
            Self::AngleLeftLeftEqual => Some("<<="),
            Self::AngleLeftEqual => Some("<="),
            Self::AngleRight => Some(">"),
            Self::AngleRightRight => Some(">>"),
            Self::AngleRightRightEqual => Some(">>="),
            Self::AngleRightEqual => Some(">="),
            Self::KwReturn => Some("return"),
            Self::KwConst => Some("const"),
            Self::KwLet => Some("let"),
            Self::KwStatic => Some("static"),
            Self::KwIf => Some("if"),
            Self::KwElse => Some("else"),
            Self::KwFor => Some("for"),
            Self::KwWhile => Some("while"),
            Self::KwDo => Some("do"),
            Self::KwGoto => Some("goto"),
            Self::KwSwitch => Some("switch"),
            Self::KwCase => Some("case"),
            Self::KwBreak => Some("break"),
            Self::KwDefault => Some("default"),
            Self::KwStruct => Some("struct"),
            Self::KwEnum => Some("enum"),
            Self::KwUnion => Some("union"),
            Self::KwTypedef => Some("typedef"),
            Self::KwSizeof => Some("sizeof"),
            Self::KwSigned => Some("signed"),
            Self::KwUnsigned => Some("unsigned"),
            Self::KwInt => Some("int"),
            Self::KwBool => Some("bool"),
            Self::KwChar => Some("char"),
            Self::KwShort => Some("short"),
            Self::KwLong => Some("long"),
            Self::KwFloat => Some("float"),
            Self::KwDouble => Some("double"),
            Self::KwTrue => Some("true"),
            Self::KwFalse => Some("false"),
            Self::KwU8 => Some("u8"),
            Self::KwI8 => Some("i8"),
            Self::KwU16 => Some("u16"),
            Self::KwI16 => Some("i16"),
            Self::KwU32 => Some("u32"),
            Self::KwI32 => Some("i32"),
            Self::KwU64 => Some("u64"),
            Self::KwI64 => Some("i64"),
            Self::KwF32 => Some("f32"),
            Self::KwF64 => Some("f64"),
            Self::BuiltinInclude => Some("include"),
            Self::BuiltinEmbed => Some("embed"),
            Self::BuiltinDefine => Some("define"),
            Self::BuiltinIfdef => Some("ifdef"),
            Self::BuiltinIfndef => Some("ifndef"),
            Self::BuiltinEndif => Some("endif"),
        }
    }

    /// Returns `true` for the reserved keyword kinds.
    #[inline]
    pub fn is_keyword(self) -> bool {
        (Self::KwReturn as u8..=Self::KwF64 as u8).contains(&(self as u8))
    }

    /// Returns `true` for the builtin directive kinds.
    #[inline]
    pub fn is_builtin(self) -> bool {
        (Self::BuiltinInclude as u8..=Self::BuiltinEndif as u8).contains(&(self as u8))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lexeme() {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "{}", self.name()),
        }
    }
}

#[cfg(test)]
mod tests;
