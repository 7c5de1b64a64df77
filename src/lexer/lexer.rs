use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    ast::functions::FunctionKind,
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

lazy_static! {
    static ref EXPRESSION_TOKENIZER: Tokenizer = create_expression_tokenizer();
}

#[derive(Clone, Debug)]
pub struct RegexPattern {
    regex: Regex,
    kind: TokenKind,
}

/// Splits text into tokens using an ordered list of patterns.
///
/// Patterns are tried in the order they were added and the first one that
/// matches at the start of the remaining input wins. Order is therefore part
/// of the tokenizer's behaviour: function names must be registered before
/// variables, or `sin` would come out as a variable.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    patterns: Vec<RegexPattern>,
}

impl Tokenizer {
    pub fn new() -> Tokenizer {
        Tokenizer::default()
    }

    /// The shared tokenizer for arithmetic expressions.
    pub fn expression() -> &'static Tokenizer {
        &EXPRESSION_TOKENIZER
    }

    /// Appends a pattern. It must not contain its own `^` anchor; one is added.
    pub fn add(&mut self, pattern: &str, kind: TokenKind) -> Result<(), regex::Error> {
        let regex = Regex::new(&format!("^(?:{})", pattern))?;
        self.patterns.push(RegexPattern { regex, kind });
        Ok(())
    }

    /// Tokenizes `source`, returning a fresh token list.
    ///
    /// Blank characters (every char up to and including the space) are
    /// ignored at both ends and between tokens. Token positions are character
    /// offsets into the trimmed input.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, Error> {
        let mut remaining = source.trim_matches(is_blank);
        let mut offset = 0;
        let mut tokens = vec![];

        while !remaining.is_empty() {
            let position = Position(offset);

            // Empty matches would never advance
            let matched = self.patterns.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remaining)
                    .filter(|found| found.end() > 0)
                    .map(|found| (pattern.kind, found.end()))
            });

            let Some((kind, end)) = matched else {
                return Err(Error::new(
                    ErrorImpl::UnexpectedCharacter {
                        remainder: remaining.to_string(),
                    },
                    position,
                ));
            };

            let text = &remaining[..end];
            tokens.push(MK_TOKEN!(kind, text.trim_matches(is_blank).to_string(), position));

            // Blank chars are ASCII, so their byte length is their char count
            let rest = &remaining[end..];
            remaining = rest.trim_start_matches(is_blank);
            offset += text.chars().count() + (rest.len() - remaining.len());
        }

        Ok(tokens)
    }
}

fn is_blank(character: char) -> bool {
    character <= ' '
}

fn create_expression_tokenizer() -> Tokenizer {
    let function_pattern = format!(r"(?:{})\b", FunctionKind::all_names_pattern());

    let patterns = [
        (r"[+-]", TokenKind::PlusMinus),
        (r"[*/]", TokenKind::MultDiv),
        (r"\^", TokenKind::Raised),
        (function_pattern.as_str(), TokenKind::Function),
        (r"\(", TokenKind::OpenBracket),
        (r"\)", TokenKind::CloseBracket),
        (
            r"(?:[0-9]+\.?|\.[0-9])[0-9]*(?:[Ee][-+]?[0-9]+)?",
            TokenKind::Number,
        ),
        (r"[a-zA-Z][a-zA-Z0-9_]*", TokenKind::Variable),
    ];

    let mut tokenizer = Tokenizer::new();
    for (pattern, kind) in patterns {
        tokenizer
            .add(pattern, kind)
            .expect("built-in token patterns are valid regexes");
    }

    tokenizer
}

/// Tokenizes an arithmetic expression with the shared expression tokenizer.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Tokenizer::expression().tokenize(source)
}
