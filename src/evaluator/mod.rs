//! Evaluation of expression trees.
//!
//! Evaluation is a pure recursive walk: it never mutates the tree and the
//! only failure is a variable missing from the caller's bindings.

pub mod evaluator;
