//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PAIRED_TOKEN!` - Lexes a character that may combine with the next one
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The source text backing the token
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $literal,
        }
    };
}

/// Lexes a one-character operator that becomes a two-character operator
/// when immediately followed by `$second` (`=` / `==`, `!` / `!=`).
///
/// Consumes the second character when it matches; the caller still performs
/// the trailing advance shared by all punctuation.
///
/// # Arguments
///
/// * `$lexer` - The Lexer, positioned on the first character
/// * `$first` - The first character, as a byte
/// * `$second` - The byte that completes the paired operator
/// * `$paired` - The TokenKind emitted for the two-character form
/// * `$single` - The TokenKind emitted for the lone character
///
/// # Example
///
/// ```ignore
/// MK_PAIRED_TOKEN!(self, b'=', b'=', TokenKind::Eq, TokenKind::Assign)
/// ```
#[macro_export]
macro_rules! MK_PAIRED_TOKEN {
    ($lexer:expr, $first:expr, $second:expr, $paired:expr, $single:expr) => {{
        if $lexer.peek_char() == Some($second) {
            $lexer.read_char();
            $crate::MK_TOKEN!(
                $paired,
                format!("{}{}", $first as char, $second as char)
            )
        } else {
            $crate::MK_TOKEN!($single, String::from($first as char))
        }
    }};
}
