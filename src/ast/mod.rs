/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The expression node sum type and its operators
/// - functions: The closed set of built-in functions
/// - visitor: Pre-order traversal and the visitors built on it
pub mod ast;
pub mod functions;
pub mod visitor;

#[cfg(test)]
mod tests;
