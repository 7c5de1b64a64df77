#![allow(clippy::module_inception)]

use crate::{
    ast::ast::ExpressionNode,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Character offset into the trimmed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

/// Tokenizes and parses `source` in one step.
pub fn parse_expression(source: &str) -> Result<ExpressionNode, Error> {
    parse(tokenize(source)?)
}

/// Finds the line containing the character offset `position`.
///
/// Returns the 1-based line number, the line text and the column within it.
/// Offsets past the end point just after the last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut last = (1, String::new(), position);

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let length = line.chars().count();

        if position < start + length {
            return (index + 1, line.to_string(), position - start);
        }

        last = (index + 1, line.to_string(), position - start);
        start += length;
    }

    last
}

/// Renders an error as a diagnostic pointing at the offending column.
///
/// ```text
/// Error: UnexpectedEndOfInput (Expected `CloseBracket`, found end of input)
///   |
/// 1 | (1+2
///   | ----^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let mut result = String::new();

    if let ErrorTip::None = error.get_tip() {
        result.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        result.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let Some(position) = error.get_position() else {
        return result;
    };

    // Token positions are relative to the trimmed input
    let (line, line_text, line_pos) = get_line_at_position(
        source.trim_matches(|character: char| character <= ' '),
        position.0,
    );

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let arrows = line_pos + 1;

    result.push_str(&format!("{:>padding$}\n", "|"));
    result.push_str(&format!("{} | {}\n", line_string, line_text.trim_end()));
    result.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    result
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "1 +\n2 *\n(3 - x)";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 2);
        assert_eq!(line_number, 1);
        assert_eq!(line, "1 +\n");
        assert_eq!(line_pos, 2);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 12);
        assert_eq!(line_number, 3);
        assert_eq!(line, "(3 - x)");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_get_line_past_end() {
        let (line_number, line, line_pos) = super::get_line_at_position("(1+2", 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "(1+2");
        assert_eq!(line_pos, 4);
    }

    #[test]
    fn test_format_error_with_position() {
        let error = Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: "`CloseBracket`".to_string(),
            },
            Position(4),
        );

        assert_eq!(
            super::format_error(&error, "  (1+2  "),
            "Error: UnexpectedEndOfInput (Expected `CloseBracket`, found end of input)\n  |\n1 | (1+2\n  | ----^\n"
        );
    }

    #[test]
    fn test_format_error_without_position() {
        let error = Error::without_position(ErrorImpl::UnboundVariable {
            variable: "x".to_string(),
        });

        assert_eq!(
            super::format_error(&error, "x + 1"),
            "Error: UnboundVariable (Variable `x` has no bound value)\n"
        );
    }

    #[test]
    fn test_parse_expression() {
        assert!(super::parse_expression("2 * (x + 1)").is_ok());
        assert!(super::parse_expression("2 * (x + 1").is_err());
    }
}
