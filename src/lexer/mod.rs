//! Lexical analysis module for the expression engine.
//!
//! This module contains the tokenizer that converts expression text into a
//! stream of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered list of regex patterns (first match wins)
//! - Recognition of operators, brackets, function names, numbers and variables
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
