//! # intexpr
//!
//! intexpr evaluates integer arithmetic expressions: `+`, `-`, `*`, truncating
//! `/`, prefix signs and parentheses, with the usual precedence and left
//! associativity. Source text flows through a pull-based lexer, a
//! recursive-descent parser and a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use crate::{
    ast::Expr,
    config::Config,
    error::{ParseError, RuntimeError},
    interpreter::{evaluator, parser::core::Parser, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
pub mod ast;
/// Parsing configuration.
///
/// Selects between strict handling of malformed input (the default) and the
/// lenient behavior of the classic interpreter.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Every error carries the source position it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of evaluation.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses `source` with the default strict configuration.
///
/// # Example
/// ```
/// use intexpr::parse;
///
/// assert_eq!(parse("2 + 3 * 4").unwrap().to_string(), "(2 + (3 * 4))");
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_with(source, Config::default())
}

/// Parses `source` into an expression tree using `config`.
pub fn parse_with(source: &str, config: Config) -> Result<Expr, ParseError> {
    log::debug!("parsing {source:?} with {config:?}");
    Parser::new(source, config)?.parse()
}

/// Evaluates a parsed expression tree.
///
/// # Example
/// ```
/// use intexpr::{evaluate, interpreter::value::Value, parse};
///
/// let expr = parse("10 - 2 - 3").unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), Value::Number(5));
/// ```
pub fn evaluate(expr: &Expr) -> Result<Value, RuntimeError> {
    evaluator::core::evaluate(expr)
}

/// Returns the value of the expression in `source`.
///
/// This function parses the source with the given configuration and
/// evaluates the resulting tree. The first error from either phase is
/// returned and no partial result is produced.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use intexpr::{config::Config, get_result, interpreter::value::Value};
///
/// let res = get_result("(2 + 3) * 4", Config::default());
/// assert_eq!(res.unwrap(), Value::Number(20));
///
/// // Division by zero is reported, not panicked on.
/// let res = get_result("1 / 0", Config::default());
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, config: Config) -> Result<Value, Box<dyn std::error::Error>> {
    let expr = parse_with(source, config)?;
    let value = evaluate(&expr)?;
    log::debug!("{source:?} evaluated to {value}");
    Ok(value)
}
