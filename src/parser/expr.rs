use crate::{
    ast::{
        ast::{BinaryOperator, ExpressionNode},
        functions::FunctionKind,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

const OPERAND: &str = "an operand (number, variable, function or `(`)";

/// `expr := term (("+" | "-") term)*`
pub fn parse_expr(parser: &mut Parser) -> Result<ExpressionNode, Error> {
    let mut left = parse_term(parser)?;
    let mut links = 0;

    while parser.current_token_kind() == Some(TokenKind::PlusMinus) {
        parser.deepen()?;
        links += 1;
        let operator = parse_operator(parser)?;
        let right = parse_term(parser)?;
        left = ExpressionNode::binary(operator, left, right);
    }

    parser.flatten(links);
    Ok(left)
}

/// `term := unary (("*" | "/") unary)*`
pub fn parse_term(parser: &mut Parser) -> Result<ExpressionNode, Error> {
    let mut left = parse_unary(parser)?;
    let mut links = 0;

    while parser.current_token_kind() == Some(TokenKind::MultDiv) {
        parser.deepen()?;
        links += 1;
        let operator = parse_operator(parser)?;
        let right = parse_unary(parser)?;
        left = ExpressionNode::binary(operator, left, right);
    }

    parser.flatten(links);
    Ok(left)
}

/// `unary := "-" unary | power`
///
/// Every recursive path through the grammar (brackets, function arguments,
/// exponents, repeated minus signs) passes through here. Nesting is counted
/// on entry.
pub fn parse_unary(parser: &mut Parser) -> Result<ExpressionNode, Error> {
    parser.enter()?;

    let node = if parser.current_is(TokenKind::PlusMinus, "-") {
        parser.advance();
        parse_unary(parser).map(ExpressionNode::unary_minus)
    } else {
        parse_power(parser)
    };

    parser.leave();
    node
}

/// `power := atom ("^" unary)?`
///
/// The exponent is parsed as a `unary`, which itself reaches `power` again,
/// so `2^3^2` groups as `2^(3^2)`.
pub fn parse_power(parser: &mut Parser) -> Result<ExpressionNode, Error> {
    let base = parse_atom(parser)?;

    if parser.current_token_kind() == Some(TokenKind::Raised) {
        let operator = parse_operator(parser)?;
        let exponent = parse_unary(parser)?;
        return Ok(ExpressionNode::binary(operator, base, exponent));
    }

    Ok(base)
}

/// `atom := NUMBER | VARIABLE | FUNCTION "(" expr ")" | "(" expr ")"`
pub fn parse_atom(parser: &mut Parser) -> Result<ExpressionNode, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Number) => {
            let token = parser.expect(TokenKind::Number)?;
            parse_number(&token)
        }
        Some(TokenKind::Variable) => {
            let token = parser.expect(TokenKind::Variable)?;
            Ok(ExpressionNode::Variable(token.text))
        }
        Some(TokenKind::Function) => parse_function_call(parser),
        Some(TokenKind::OpenBracket) => parse_grouping(parser),
        _ => Err(parser.unexpected(String::from(OPERAND))),
    }
}

pub fn parse_function_call(parser: &mut Parser) -> Result<ExpressionNode, Error> {
    let name = parser.expect(TokenKind::Function)?;
    let function = FunctionKind::from_name(&name.text).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnknownFunction {
                name: name.text.clone(),
            },
            name.position,
        )
    })?;

    parser.expect(TokenKind::OpenBracket)?;
    let argument = parse_expr(parser)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(ExpressionNode::function(function, argument))
}

pub fn parse_grouping(parser: &mut Parser) -> Result<ExpressionNode, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(expr)
}

fn parse_number(token: &Token) -> Result<ExpressionNode, Error> {
    token
        .text
        .parse()
        .map(ExpressionNode::Number)
        .map_err(|_| {
            Error::new(
                ErrorImpl::NumberParseError {
                    token: token.text.clone(),
                },
                token.position,
            )
        })
}

/// Consumes an operator token and maps its text.
fn parse_operator(parser: &mut Parser) -> Result<BinaryOperator, Error> {
    let operator = parser
        .current_token()
        .and_then(|token| BinaryOperator::from_symbol(&token.text))
        .ok_or_else(|| parser.unexpected(String::from("an operator")))?;
    parser.advance();

    Ok(operator)
}
