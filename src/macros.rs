//! Utility macros for the expression engine.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Keeps token construction in the tokenizer down to a single line.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's matched text
/// * `$position` - The character offset the token starts at
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Position(0));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $position:expr) => {
        Token {
            kind: $kind,
            text: $text,
            position: $position,
        }
    };
}
