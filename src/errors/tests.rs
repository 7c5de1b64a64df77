//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            remainder: "& 4".to_string(),
        },
        Position(2),
    );

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::TrailingInput {
            token: ")".to_string(),
        },
        Position(42),
    );

    assert_eq!(error.get_position(), Some(&Position(42)));
}

#[test]
fn test_evaluation_error_has_no_position() {
    let error = Error::without_position(ErrorImpl::UnboundVariable {
        variable: "x".to_string(),
    });

    assert_eq!(error.get_position(), None);
}

#[test]
fn test_error_kinds() {
    let syntax = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
            expected: "an operand".to_string(),
        },
        Position(0),
    );
    let evaluation = Error::without_position(ErrorImpl::UnboundVariable {
        variable: "y".to_string(),
    });

    assert_eq!(syntax.get_error_kind(), ErrorKind::Syntax);
    assert_eq!(evaluation.get_error_kind(), ErrorKind::Evaluation);
    assert_eq!(syntax.get_error_kind().to_string(), "SyntaxError");
    assert_eq!(evaluation.get_error_kind().to_string(), "EvaluationError");
}

#[test]
fn test_unknown_function_is_syntax_error() {
    let error = Error::new(
        ErrorImpl::UnknownFunction {
            name: "cosh".to_string(),
        },
        Position(0),
    );

    assert_eq!(error.get_error_kind(), ErrorKind::Syntax);
    assert_eq!(error.get_error_name(), "UnknownFunction");
}

#[test]
fn test_error_display() {
    let error = Error::without_position(ErrorImpl::UnboundVariable {
        variable: "x".to_string(),
    });

    assert_eq!(error.to_string(), "unbound variable \"x\"");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "2".to_string(),
            expected: "`OpenBracket`".to_string(),
        },
        Position(4),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `OpenBracket`, found `2`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_unexpected_character() {
    let error = Error::new(
        ErrorImpl::UnexpectedCharacter {
            remainder: "& 4".to_string(),
        },
        Position(2),
    );

    assert_eq!(error.get_tip().to_string(), "`&` does not start any known token");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 }, Position(256));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_error_kind(), ErrorKind::Syntax);
    assert_eq!(error.to_string(), "expression nested deeper than 256 levels");
}
