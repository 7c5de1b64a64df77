//! Parser module for building the expression tree.
//!
//! This module contains a recursive-descent parser that transforms a stream
//! of tokens into an [`ExpressionNode`](crate::ast::ast::ExpressionNode).
//! Each precedence level has its own function, from lowest to highest:
//!
//! - `expr`  - addition and subtraction (left-associative)
//! - `term`  - multiplication and division (left-associative)
//! - `unary` - prefix minus
//! - `power` - exponentiation (right-associative)
//! - `atom`  - numbers, variables, function calls and brackets

pub mod expr;
pub mod parser;
