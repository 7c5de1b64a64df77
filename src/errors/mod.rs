//! Error types and error handling for the expression engine.
//!
//! This module defines the single error type shared by every stage. It
//! includes:
//!
//! - An error structure with optional source position information
//! - Specific error variants for tokenizing, parsing and evaluation
//! - Error categories (syntax vs. evaluation) and human-readable tips

pub mod errors;

#[cfg(test)]
mod tests;
