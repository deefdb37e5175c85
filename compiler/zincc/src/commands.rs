//! Command implementations for the `zinc` binary.

use zinc_lexer::{Scanner, Span, SourceBuffer, TokenKind};

/// Read a file to a string, or report the failure and exit.
///
/// Loader failures are not lexical errors; they end the process directly
/// with a plain message, before any scanner exists.
fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: failed to read `{path}`: {err}");
            std::process::exit(1);
        }
    }
}

/// Lex a file and print one line per token.
///
/// Prints the stable kind name, span, line, and lexeme of every token
/// including the final `eof`. On a lexical error, prints the diagnostic
/// with the offending source line and exits with status 1.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    tracing::debug!(bytes = content.len(), "loaded `{path}`");

    let buf = SourceBuffer::new(&content);
    let mut scanner = Scanner::new(buf.cursor());
    let mut count = 0usize;

    println!("Tokens for '{path}':");
    loop {
        match scanner.next_token() {
            Ok(token) => {
                println!(
                    "  {:<32} {:>6} line {:<4} => {:?}",
                    token.kind.name(),
                    token.span.to_string(),
                    token.line,
                    token.text(buf.as_str()),
                );
                if token.kind == TokenKind::Eof {
                    break;
                }
                count += 1;
            }
            Err(err) => {
                eprintln!("error: {err}");
                eprintln!("  --> {path}:{}", err.line());
                eprintln!("   | {}", buf.line_text(Span::point(err.offset())));
                std::process::exit(1);
            }
        }
    }
    tracing::debug!(tokens = count, "scan complete");
}
