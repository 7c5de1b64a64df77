//! Unit tests for the expression tree, function table and visitors.

use super::{
    ast::{BinaryOperator, ExpressionNode},
    functions::{FunctionKind, FUNCTION_LOOKUP},
    visitor::{accept, ExpressionVisitor, PrefixPrinter, VariableCollector},
};

/// Records every callback as a short label.
#[derive(Default)]
struct Recorder {
    visited: Vec<String>,
}

impl ExpressionVisitor for Recorder {
    fn visit_number(&mut self, value: f64) {
        self.visited.push(format!("Number({})", value));
    }

    fn visit_variable(&mut self, name: &str) {
        self.visited.push(format!("Variable({})", name));
    }

    fn visit_binary(&mut self, operator: BinaryOperator, _: &ExpressionNode, _: &ExpressionNode) {
        self.visited.push(format!("Binary({})", operator));
    }

    fn visit_unary_minus(&mut self, _operand: &ExpressionNode) {
        self.visited.push(String::from("UnaryMinus"));
    }

    fn visit_function(&mut self, function: FunctionKind, _argument: &ExpressionNode) {
        self.visited.push(format!("Function({})", function));
    }
}

fn sample_tree() -> ExpressionNode {
    // sin(-x) + 2 * y
    ExpressionNode::binary(
        BinaryOperator::Add,
        ExpressionNode::function(
            FunctionKind::Sin,
            ExpressionNode::unary_minus(ExpressionNode::variable("x")),
        ),
        ExpressionNode::binary(
            BinaryOperator::Multiply,
            ExpressionNode::number(2.0),
            ExpressionNode::variable("y"),
        ),
    )
}

#[test]
fn test_visitor_is_pre_order() {
    let mut recorder = Recorder::default();
    accept(&sample_tree(), &mut recorder);

    assert_eq!(
        recorder.visited,
        vec![
            "Binary(+)",
            "Function(sin)",
            "UnaryMinus",
            "Variable(x)",
            "Binary(*)",
            "Number(2)",
            "Variable(y)",
        ]
    );
}

#[test]
fn test_variable_collector_deduplicates() {
    let tree = ExpressionNode::binary(
        BinaryOperator::Subtract,
        ExpressionNode::variable("b"),
        ExpressionNode::binary(
            BinaryOperator::Divide,
            ExpressionNode::variable("a"),
            ExpressionNode::variable("b"),
        ),
    );

    assert_eq!(VariableCollector::collect(&tree), vec!["b", "a"]);
}

#[test]
fn test_prefix_printer() {
    assert_eq!(PrefixPrinter::print(&sample_tree()), "+ sin neg x * 2 y");
}

#[test]
fn test_display_is_fully_parenthesized() {
    assert_eq!(sample_tree().to_string(), "(sin(-x) + (2 * y))");
}

#[test]
fn test_structural_equality() {
    assert_eq!(sample_tree(), sample_tree().clone());
    assert_ne!(sample_tree(), ExpressionNode::number(2.0));
}

#[test]
fn test_function_lookup_is_exact() {
    assert_eq!(FUNCTION_LOOKUP.len(), 11);
    assert_eq!(FunctionKind::from_name("log2"), Some(FunctionKind::Log2));
    assert_eq!(FunctionKind::from_name("asin"), Some(FunctionKind::Asin));
    assert_eq!(FunctionKind::from_name("Sin"), None);
    assert_eq!(FunctionKind::from_name("sinh"), None);
}

#[test]
fn test_function_names_pattern_order() {
    assert_eq!(
        FunctionKind::all_names_pattern(),
        "sin|cos|tan|asin|acos|atan|sqrt|exp|ln|log|log2"
    );
}

#[test]
fn test_log_constants() {
    assert!((FunctionKind::Log.apply(1000.0) - 3.0).abs() < 1e-12);
    assert!((FunctionKind::Log2.apply(8.0) - 3.0).abs() < 1e-12);
}

#[test]
fn test_binary_operator_symbols() {
    for symbol in ["+", "-", "*", "/", "^"] {
        let operator = BinaryOperator::from_symbol(symbol).unwrap();
        assert_eq!(operator.symbol(), symbol);
    }
    assert_eq!(BinaryOperator::from_symbol("%"), None);
}

#[test]
fn test_power_of_negative_base_is_nan() {
    assert!(BinaryOperator::Power.apply(-8.0, 0.5).is_nan());
}
