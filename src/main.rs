use std::{process, time::Instant};

use clap::Parser;
use mathexpr::{
    ast::visitor::{PrefixPrinter, VariableCollector},
    errors::errors::Error,
    evaluator::evaluator::{evaluate, Bindings},
    format_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate an arithmetic expression", long_about = None)]
struct Input {
    /// The expression to evaluate, e.g. "2 * sin(x) + 1"
    expression: String,

    /// Bind a variable, e.g. `--var x=2.5`. May be given more than once.
    #[clap(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Print each token. Does not parse or evaluate the expression.
    #[clap(long, default_value = "false")]
    debug_lexer: bool,

    /// Print the expression tree. Does not evaluate the expression.
    #[clap(long, default_value = "false")]
    debug_parser: bool,

    /// Print how long each stage took.
    #[clap(long, default_value = "false")]
    timings: bool,
}

fn main() {
    let input = Input::parse();

    if let Err(error) = run(&input) {
        eprint!("{}", format_error(&error, &input.expression));
        process::exit(1);
    }
}

fn run(input: &Input) -> Result<(), Error> {
    let start = Instant::now();

    let tokens = tokenize(&input.expression)?;

    if input.timings {
        println!("Tokenized in {:?}", start.elapsed());
    }

    if input.debug_lexer {
        for token in &tokens {
            println!("{}", token);
        }
        return Ok(());
    }

    let parse_start = Instant::now();
    let tree = parse(tokens)?;

    if input.timings {
        println!("Parsed in {:?}", parse_start.elapsed());
    }

    if input.debug_parser {
        println!("{}", tree);
        println!("{}", PrefixPrinter::print(&tree));
        return Ok(());
    }

    let bindings: Bindings = input.vars.iter().cloned().collect();

    let unbound: Vec<String> = VariableCollector::collect(&tree)
        .into_iter()
        .filter(|name| !bindings.contains_key(name))
        .collect();
    if !unbound.is_empty() {
        eprintln!("Unbound variables: {}", unbound.join(", "));
    }

    let evaluate_start = Instant::now();
    let value = evaluate(&tree, &bindings)?;

    if input.timings {
        println!("Evaluated in {:?}", evaluate_start.elapsed());
        println!("Total time: {:?}", start.elapsed());
    }

    println!("{}", value);
    Ok(())
}

/// Parses a `NAME=VALUE` variable binding.
fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, found `{}`", binding))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in `{}`", binding));
    }

    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|error| format!("invalid value for `{}`: {}", name, error))?;

    Ok((name.to_string(), value))
}
