use std::fmt::Display;

use super::functions::FunctionKind;

/// Binary operators, in the order `+ - * / ^`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    /// Maps operator text as produced by the tokenizer.
    pub fn from_symbol(symbol: &str) -> Option<BinaryOperator> {
        match symbol {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Subtract),
            "*" => Some(BinaryOperator::Multiply),
            "/" => Some(BinaryOperator::Divide),
            "^" => Some(BinaryOperator::Power),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "^",
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
            BinaryOperator::Power => left.powf(right),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Expression Node
///
/// A node of the expression tree. Every child is owned by exactly one
/// parent, so the tree is acyclic and structural equality is well-defined.
/// Nodes are never mutated after the parser builds them.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    /// A numeric literal.
    Number(f64),
    /// A variable, resolved against caller bindings at evaluation time.
    Variable(String),
    Binary {
        operator: BinaryOperator,
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },
    UnaryMinus(Box<ExpressionNode>),
    Function {
        function: FunctionKind,
        argument: Box<ExpressionNode>,
    },
}

impl ExpressionNode {
    pub fn number(value: f64) -> Self {
        ExpressionNode::Number(value)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        ExpressionNode::Variable(name.into())
    }

    pub fn binary(operator: BinaryOperator, left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary_minus(operand: ExpressionNode) -> Self {
        ExpressionNode::UnaryMinus(Box::new(operand))
    }

    pub fn function(function: FunctionKind, argument: ExpressionNode) -> Self {
        ExpressionNode::Function {
            function,
            argument: Box::new(argument),
        }
    }
}

/// Fully parenthesized infix rendering, e.g. `(2 + (3 * x))`.
impl Display for ExpressionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpressionNode::Number(value) => write!(f, "{}", value),
            ExpressionNode::Variable(name) => write!(f, "{}", name),
            ExpressionNode::Binary {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            ExpressionNode::UnaryMinus(operand) => write!(f, "-{}", operand),
            ExpressionNode::Function { function, argument } => {
                write!(f, "{}({})", function, argument)
            }
        }
    }
}
