/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST bottom-up, applies the arithmetic operators
/// and reports runtime errors such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens one at a time:
/// integer literals, operators, parentheses, whitespace runs and end of
/// input. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte positions.
/// - Rejects empty input, oversized literals and, unless configured
///   otherwise, unknown characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead and
/// builds the AST by recursive descent, one function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Enforces precedence, associativity and balanced parentheses.
/// - Reports unexpected tokens with their position.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
