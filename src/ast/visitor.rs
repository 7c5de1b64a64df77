//! Pre-order traversal of the expression tree.
//!
//! A visitor implements one callback per node variant. [`accept`] calls the
//! callback for a node before descending into its children, left before
//! right, so every consumer sees the same deterministic order.

use super::{
    ast::{BinaryOperator, ExpressionNode},
    functions::FunctionKind,
};

pub trait ExpressionVisitor {
    fn visit_number(&mut self, value: f64);
    fn visit_variable(&mut self, name: &str);
    fn visit_binary(
        &mut self,
        operator: BinaryOperator,
        left: &ExpressionNode,
        right: &ExpressionNode,
    );
    fn visit_unary_minus(&mut self, operand: &ExpressionNode);
    fn visit_function(&mut self, function: FunctionKind, argument: &ExpressionNode);
}

/// Walks `node` in pre-order, invoking the matching callback on `visitor`.
pub fn accept<V: ExpressionVisitor + ?Sized>(node: &ExpressionNode, visitor: &mut V) {
    match node {
        ExpressionNode::Number(value) => visitor.visit_number(*value),
        ExpressionNode::Variable(name) => visitor.visit_variable(name),
        ExpressionNode::Binary {
            operator,
            left,
            right,
        } => {
            visitor.visit_binary(*operator, left, right);
            accept(left, visitor);
            accept(right, visitor);
        }
        ExpressionNode::UnaryMinus(operand) => {
            visitor.visit_unary_minus(operand);
            accept(operand, visitor);
        }
        ExpressionNode::Function { function, argument } => {
            visitor.visit_function(*function, argument);
            accept(argument, visitor);
        }
    }
}

/// Collects the distinct variable names of a tree in first-seen order.
#[derive(Debug, Default)]
pub struct VariableCollector {
    names: Vec<String>,
}

impl VariableCollector {
    pub fn new() -> Self {
        VariableCollector::default()
    }

    pub fn collect(node: &ExpressionNode) -> Vec<String> {
        let mut collector = VariableCollector::new();
        accept(node, &mut collector);
        collector.names
    }
}

impl ExpressionVisitor for VariableCollector {
    fn visit_number(&mut self, _value: f64) {}

    fn visit_variable(&mut self, name: &str) {
        if !self.names.iter().any(|known| known == name) {
            self.names.push(name.to_string());
        }
    }

    fn visit_binary(&mut self, _: BinaryOperator, _: &ExpressionNode, _: &ExpressionNode) {}

    fn visit_unary_minus(&mut self, _operand: &ExpressionNode) {}

    fn visit_function(&mut self, _: FunctionKind, _: &ExpressionNode) {}
}

/// Renders a tree in prefix (Polish) notation.
///
/// Unary minus is written `neg` to keep it apart from subtraction, so
/// `-2^2` renders as `neg ^ 2 2`.
#[derive(Debug, Default)]
pub struct PrefixPrinter {
    parts: Vec<String>,
}

impl PrefixPrinter {
    pub fn new() -> Self {
        PrefixPrinter::default()
    }

    pub fn print(node: &ExpressionNode) -> String {
        let mut printer = PrefixPrinter::new();
        accept(node, &mut printer);
        printer.finish()
    }

    pub fn finish(self) -> String {
        self.parts.join(" ")
    }
}

impl ExpressionVisitor for PrefixPrinter {
    fn visit_number(&mut self, value: f64) {
        self.parts.push(value.to_string());
    }

    fn visit_variable(&mut self, name: &str) {
        self.parts.push(name.to_string());
    }

    fn visit_binary(&mut self, operator: BinaryOperator, _: &ExpressionNode, _: &ExpressionNode) {
        self.parts.push(operator.to_string());
    }

    fn visit_unary_minus(&mut self, _operand: &ExpressionNode) {
        self.parts.push(String::from("neg"));
    }

    fn visit_function(&mut self, function: FunctionKind, _argument: &ExpressionNode) {
        self.parts.push(function.to_string());
    }
}
