//! Tokenizer for the Zinc language.
//!
//! Zinc source is scanned in a single pass by a hand-written state machine
//! over a sentinel-terminated byte buffer. The scanner classifies the
//! current byte, runs the matching sub-scanner to completion, resolves
//! keyword/builtin identity for identifier-shaped lexemes, and hands back
//! one [`Token`] per pull, or a fatal [`LexError`] that ends the scan.
//!
//! # Layering
//!
//! - [`SourceBuffer`]: owned, sentinel-terminated copy of the source.
//! - [`Cursor`]: byte offset + line tracker, borrowed from the buffer.
//! - [`Scanner`]: the state machine; pull one token at a time.
//!
//! ```
//! use zinc_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("let x = 42;")?;
//! assert_eq!(tokens[0].kind, TokenKind::KwLet);
//! assert_eq!(tokens[1].kind, TokenKind::Ident);
//! # Ok::<(), zinc_lexer::LexError>(())
//! ```

pub mod cursor;
pub mod keywords;
pub mod lex_error;
pub mod scanner;
pub mod source_buffer;
pub mod token;

pub use cursor::Cursor;
pub use keywords::{builtin_lookup, keyword_lookup, BUILTINS, KEYWORDS};
pub use lex_error::LexError;
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
pub use token::{Span, Token, TokenKind};
