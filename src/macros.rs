//! Utility macros for the compiler.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-spelling tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$context` - The SourceContext of its first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::UnsignedInt, "42".to_string(), lexer.context());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $context:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            context: $context,
        }
    };
}

/// Creates a default lexer handler for a token with a fixed spelling.
///
/// Generates a handler function that creates a token with the given kind
/// at the lexer's current position and advances past its spelling.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal spelling (used for the lexeme and its width)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer,
         _lexeme: &str|
         -> Result<(), $crate::errors::errors::ScanError> {
            let context = lexer.context();
            lexer.push($crate::MK_TOKEN!($kind, String::from($value), context));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}
