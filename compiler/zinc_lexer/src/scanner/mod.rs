//! Hand-written single-pass scanner producing classified [`Token`]s.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] with zero heap
//! allocation. Keywords and builtin directives are resolved against the
//! fixed tables in [`crate::keywords`] after the identifier-shaped lexeme
//! has been fully scanned.
//!
//! # Design
//!
//! The start state dispatches on the current byte; each arm calls a focused
//! method that consumes input until its terminating condition and returns a
//! finished [`Token`]. Multi-character operators extend by maximal munch
//! with one provisional byte of lookahead (`<` → `<<` → `<<=`). Trivia
//! (whitespace, newlines, line comments) is consumed in the start loop and
//! the token start re-anchored after it, so a span never includes leading
//! trivia bytes.
//!
//! Errors are values: `next_token` returns `Result<Token, LexError>` and
//! the first `Err` ends the scan; callers stop pulling. There are no
//! recoverable lexical errors.
//!
//! # Directive quirk
//!
//! The word after `#` is scanned with its span starting *after* the `#`.
//! If it matches a builtin the token gets the builtin kind; if not, the
//! kind stays [`TokenKind::Hash`] while the span still covers the whole
//! scanned word. Downstream consumers rely on this shape; do not "fix" it
//! without migrating them.

use crate::cursor::Cursor;
use crate::keywords::{builtin_lookup, keyword_lookup};
use crate::lex_error::LexError;
use crate::token::{Span, Token, TokenKind};

/// Pure, allocation-free scanner.
///
/// Produces one token per [`next_token`](Self::next_token) call. A scanner
/// is tied to one source; to re-scan, build a fresh one.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Set once `Eof` or an error has been produced; fuses the iterator.
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            finished: false,
        }
    }

    /// Byte offset the scanner will read next. Equals the source length
    /// once `Eof` has been produced.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Line the scanner is currently on, 1-based.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Produce the next token, or the fatal error that ends the scan.
    ///
    /// Returns `TokenKind::Eof` with a zero-length span when the source is
    /// exhausted. Calls after `Eof` keep returning `Eof`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let start = self.cursor.pos();
            let line = self.cursor.line();
            return Ok(match self.cursor.current() {
                0 => Token::new(TokenKind::Eof, Span::point(start), line),
                b' ' | b'\t' => {
                    self.cursor.eat_whitespace();
                    continue;
                }
                b'\n' => {
                    self.cursor.advance_line();
                    continue;
                }
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start, line),
                b'0'..=b'9' => self.number(start, line),
                b'"' => self.string(start, line)?,
                b'\'' => self.char_literal(start, line),
                b'#' => self.directive(line),
                b'/' => match self.slash_or_comment(start, line) {
                    Some(token) => token,
                    None => continue,
                },
                b'=' => self.seed_or_equal(start, line, TokenKind::Equal, TokenKind::EqualEqual),
                b'+' => self.plus(start, line),
                b'-' => self.minus(start, line),
                b'*' => {
                    self.seed_or_equal(start, line, TokenKind::Asterisk, TokenKind::AsteriskEqual)
                }
                b'%' => {
                    self.seed_or_equal(start, line, TokenKind::Percent, TokenKind::PercentEqual)
                }
                b':' => self.colon(start, line),
                b'.' => self.period(start, line),
                b'~' => self.seed_or_equal(start, line, TokenKind::Tilde, TokenKind::TildeEqual),
                b'^' => self.seed_or_equal(start, line, TokenKind::Caret, TokenKind::CaretEqual),
                b'&' => self.ampersand(start, line),
                b'<' => self.angle_left(start, line),
                b'>' => self.angle_right(start, line),
                b'|' => self.pipe(start, line),
                b'!' => self.seed_or_equal(start, line, TokenKind::Bang, TokenKind::BangEqual),
                b';' => self.single(start, line, TokenKind::Semicolon),
                b',' => self.single(start, line, TokenKind::Comma),
                b'$' => self.single(start, line, TokenKind::Dollar),
                b'@' => self.single(start, line, TokenKind::At),
                b'?' => self.single(start, line, TokenKind::Question),
                b'{' => self.single(start, line, TokenKind::LBrace),
                b'}' => self.single(start, line, TokenKind::RBrace),
                b'[' => self.single(start, line, TokenKind::LBracket),
                b']' => self.single(start, line, TokenKind::RBracket),
                b'(' => self.single(start, line, TokenKind::LParen),
                b')' => self.single(start, line, TokenKind::RParen),
                byte => return Err(LexError::unhandled_character(byte, start, line)),
            });
        }
    }

    /// Finish a token spanning `start..pos` on `line`.
    fn token(&self, kind: TokenKind, start: u32, line: u32) -> Token {
        Token::new(kind, Span::new(start, self.cursor.pos()), line)
    }

    // ─── Identifiers & Keywords ──────────────────────────────────────────

    fn identifier(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // first byte already classified
        self.cursor.eat_while(is_ident_continue);
        let lexeme = self.cursor.slice_from(start);
        let kind = keyword_lookup(lexeme).unwrap_or(TokenKind::Ident);
        self.token(kind, start, line)
    }

    // ─── Numbers ─────────────────────────────────────────────────────────

    /// Maximal run of ASCII digits. No sign, no radix prefix, no fraction,
    /// no exponent; the first non-digit byte is left for the next token.
    fn number(&mut self, start: u32, line: u32) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.token(TokenKind::NumberLiteral, start, line)
    }

    // ─── String & Char Literals ──────────────────────────────────────────

    fn string(&mut self, start: u32, line: u32) -> Result<Token, LexError> {
        self.cursor.advance(); // consume opening '"'
        loop {
            // SIMD-accelerated skip past ordinary string content
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    return Ok(self.token(TokenKind::StringLiteral, start, line));
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    // Skip the escaped byte without inspecting it, but never
                    // past the sentinel: a source ending in `\` still reports
                    // the unterminated string on the next iteration.
                    if self.cursor.current() != 0 {
                        self.cursor.advance();
                    }
                }
                b'\n' => {
                    // Embedded newlines are accepted, not an error.
                    self.cursor.advance_line();
                }
                _ => return Err(LexError::unterminated_string(start, line)),
            }
        }
    }

    /// Char literal scan. `'` terminates, `\` skips the escape pair, any
    /// other byte is consumed: empty `''` and multi-byte `'abc'` are both
    /// accepted without error. A literal cut off by end-of-input is emitted
    /// as scanned; the next pull yields `Eof`.
    fn char_literal(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume opening '\''
        loop {
            match self.cursor.current() {
                b'\'' => {
                    self.cursor.advance();
                    return self.token(TokenKind::CharLiteral, start, line);
                }
                b'\\' => {
                    self.cursor.advance();
                    if self.cursor.current() != 0 {
                        self.cursor.advance();
                    }
                }
                b'\n' => self.cursor.advance_line(),
                0 => return self.token(TokenKind::CharLiteral, start, line),
                _ => self.cursor.advance(),
            }
        }
    }

    // ─── Comments ────────────────────────────────────────────────────────

    /// `/` seed: `/=`, a `//` line comment, or plain `/`.
    ///
    /// Returns `None` when a comment was consumed; the start loop then
    /// re-anchors and continues (or emits `Eof` if the comment ran to
    /// end-of-input; the comment itself never becomes a token).
    fn slash_or_comment(&mut self, start: u32, line: u32) -> Option<Token> {
        self.cursor.advance(); // consume first '/'
        match self.cursor.current() {
            b'=' => {
                self.cursor.advance();
                Some(self.token(TokenKind::SlashEqual, start, line))
            }
            b'/' => {
                self.cursor.advance(); // consume second '/'
                self.cursor.eat_until_newline_or_eof();
                if self.cursor.current() == b'\n' {
                    self.cursor.advance_line();
                }
                None
            }
            _ => Some(self.token(TokenKind::Slash, start, line)),
        }
    }

    // ─── Builtin Directives ──────────────────────────────────────────────

    /// `#` directive: span starts at the byte *after* the `#` and covers
    /// the identifier-shaped word (letters and `_` only). A match against
    /// the builtin table reclassifies the kind; otherwise the kind stays
    /// `Hash` with the span unchanged.
    fn directive(&mut self, line: u32) -> Token {
        self.cursor.advance(); // consume '#'
        let start = self.cursor.pos();
        self.cursor.eat_while(is_directive_continue);
        let word = self.cursor.slice_from(start);
        let kind = builtin_lookup(word).unwrap_or(TokenKind::Hash);
        self.token(kind, start, line)
    }

    // ─── Operators ───────────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, start: u32, line: u32, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(kind, start, line)
    }

    /// Seed byte whose only extension is `=` (e.g. `*` → `*=`).
    fn seed_or_equal(&mut self, start: u32, line: u32, plain: TokenKind, eq: TokenKind) -> Token {
        self.cursor.advance(); // consume seed
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(eq, start, line)
        } else {
            self.token(plain, start, line)
        }
    }

    fn plus(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume '+'
        match self.cursor.current() {
            b'=' => self.single(start, line, TokenKind::PlusEqual),
            b'+' => self.single(start, line, TokenKind::PlusPlus),
            _ => self.token(TokenKind::Plus, start, line),
        }
    }

    fn minus(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume '-'
        match self.cursor.current() {
            b'=' => self.single(start, line, TokenKind::MinusEqual),
            b'-' => self.single(start, line, TokenKind::MinusMinus),
            b'>' => self.single(start, line, TokenKind::Arrow),
            _ => self.token(TokenKind::Minus, start, line),
        }
    }

    fn colon(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume ':'
        match self.cursor.current() {
            b'=' => self.single(start, line, TokenKind::ColonEqual),
            b':' => self.single(start, line, TokenKind::ColonColon),
            _ => self.token(TokenKind::Colon, start, line),
        }
    }

    fn period(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume '.'
        if self.cursor.current() == b'.' {
            self.cursor.advance(); // consume second '.'
            if self.cursor.current() == b'.' {
                self.cursor.advance();
                self.token(TokenKind::Ellipsis3, start, line)
            } else {
                self.token(TokenKind::Ellipsis2, start, line)
            }
        } else {
            self.token(TokenKind::Period, start, line)
        }
    }

    fn ampersand(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume '&'
        match self.cursor.current() {
            b'=' => self.single(start, line, TokenKind::AmpersandEqual),
            b'&' => self.single(start, line, TokenKind::AmpersandAmpersand),
            _ => self.token(TokenKind::Ampersand, start, line),
        }
    }

    fn pipe(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume '|'
        match self.cursor.current() {
            b'=' => self.single(start, line, TokenKind::PipeEqual),
            b'|' => self.single(start, line, TokenKind::PipePipe),
            _ => self.token(TokenKind::Pipe, start, line),
        }
    }

    fn angle_left(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume '<'
        match self.cursor.current() {
            b'=' => self.single(start, line, TokenKind::AngleLeftEqual),
            b'<' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.cursor.advance();
                    self.token(TokenKind::AngleLeftLeftEqual, start, line)
                } else {
                    self.token(TokenKind::AngleLeftLeft, start, line)
                }
            }
            _ => self.token(TokenKind::AngleLeft, start, line),
        }
    }

    fn angle_right(&mut self, start: u32, line: u32) -> Token {
        self.cursor.advance(); // consume '>'
        match self.cursor.current() {
            b'=' => self.single(start, line, TokenKind::AngleRightEqual),
            b'>' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.cursor.advance();
                    self.token(TokenKind::AngleRightRightEqual, start, line)
                } else {
                    self.token(TokenKind::AngleRightRight, start, line)
                }
            }
            _ => self.token(TokenKind::AngleRight, start, line),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    /// Yields every token up to but excluding `Eof`, then `None`.
    /// After the first `Err` the iterator is fused and yields `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// Table lookup replaces the multi-range `matches!` with a single indexed
/// read. The sentinel byte (`0x00`) maps to `false`, terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Returns `true` if `b` can continue a directive word after `#`.
/// Directives are letters and underscores only, never digits.
#[inline]
fn is_directive_continue(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Convenience function: tokenize a source string and collect all tokens.
///
/// Returns every token up to but excluding the final `Eof`, or the first
/// fatal error. For streaming access, construct a
/// [`SourceBuffer`](crate::SourceBuffer) + [`Scanner`] directly.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let buf = crate::SourceBuffer::new(source);
    let mut scanner = Scanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        if token.kind == TokenKind::Eof {
            break;
        }
        tokens.push(token);
    }
    Ok(tokens)
}
