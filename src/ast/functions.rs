use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// `1 / ln(10)`
#[allow(clippy::excessive_precision)]
pub const LOG10_FACTOR: f64 = 0.43429448190325182765;
/// `1 / ln(2)`
#[allow(clippy::excessive_precision)]
pub const LOG2_FACTOR: f64 = 1.442695040888963407360;

lazy_static! {
    pub static ref FUNCTION_LOOKUP: HashMap<&'static str, FunctionKind> = {
        let mut map = HashMap::new();
        for function in FunctionKind::ALL {
            map.insert(function.name(), function);
        }
        map
    };
}

/// The built-in single-argument functions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FunctionKind {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Exp,
    Ln,
    Log,
    Log2,
}

impl FunctionKind {
    /// Every function, in the order their names are offered to the tokenizer.
    pub const ALL: [FunctionKind; 11] = [
        FunctionKind::Sin,
        FunctionKind::Cos,
        FunctionKind::Tan,
        FunctionKind::Asin,
        FunctionKind::Acos,
        FunctionKind::Atan,
        FunctionKind::Sqrt,
        FunctionKind::Exp,
        FunctionKind::Ln,
        FunctionKind::Log,
        FunctionKind::Log2,
    ];

    /// Exact, case-sensitive name lookup.
    pub fn from_name(name: &str) -> Option<FunctionKind> {
        FUNCTION_LOOKUP.get(name).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            FunctionKind::Sin => "sin",
            FunctionKind::Cos => "cos",
            FunctionKind::Tan => "tan",
            FunctionKind::Asin => "asin",
            FunctionKind::Acos => "acos",
            FunctionKind::Atan => "atan",
            FunctionKind::Sqrt => "sqrt",
            FunctionKind::Exp => "exp",
            FunctionKind::Ln => "ln",
            FunctionKind::Log => "log",
            FunctionKind::Log2 => "log2",
        }
    }

    /// All function names joined by `|`, for use inside a regex alternation.
    pub fn all_names_pattern() -> String {
        FunctionKind::ALL
            .iter()
            .map(|function| function.name())
            .collect::<Vec<_>>()
            .join("|")
    }

    pub fn apply(&self, argument: f64) -> f64 {
        match self {
            FunctionKind::Sin => argument.sin(),
            FunctionKind::Cos => argument.cos(),
            FunctionKind::Tan => argument.tan(),
            FunctionKind::Asin => argument.asin(),
            FunctionKind::Acos => argument.acos(),
            FunctionKind::Atan => argument.atan(),
            FunctionKind::Sqrt => argument.sqrt(),
            FunctionKind::Exp => argument.exp(),
            FunctionKind::Ln => argument.ln(),
            FunctionKind::Log => argument.ln() * LOG10_FACTOR,
            FunctionKind::Log2 => argument.ln() * LOG2_FACTOR,
        }
    }
}

impl Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
