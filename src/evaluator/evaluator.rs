use std::collections::HashMap;

use crate::{
    ast::ast::ExpressionNode,
    errors::errors::{Error, ErrorImpl},
};

/// Variable values supplied by the caller.
pub type Bindings = HashMap<String, f64>;

/// Computes the value of `node`.
///
/// Floating-point edge cases such as division by zero or `(-8)^0.5` produce
/// infinities and NaN rather than errors.
pub fn evaluate(node: &ExpressionNode, bindings: &Bindings) -> Result<f64, Error> {
    match node {
        ExpressionNode::Number(value) => Ok(*value),
        ExpressionNode::Variable(name) => bindings.get(name).copied().ok_or_else(|| {
            Error::without_position(ErrorImpl::UnboundVariable {
                variable: name.clone(),
            })
        }),
        ExpressionNode::Binary {
            operator,
            left,
            right,
        } => {
            let left = evaluate(left, bindings)?;
            let right = evaluate(right, bindings)?;
            Ok(operator.apply(left, right))
        }
        ExpressionNode::UnaryMinus(operand) => Ok(-evaluate(operand, bindings)?),
        ExpressionNode::Function { function, argument } => {
            Ok(function.apply(evaluate(argument, bindings)?))
        }
    }
}
