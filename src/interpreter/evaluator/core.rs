use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns the resulting value.
///
/// This is the main entry point for evaluation. Children are evaluated
/// before their parent, left operand first, and the first error stops the
/// walk. The tree is only borrowed and can be evaluated again. Recursion
/// follows the height of the tree, which the parser caps at
/// [`crate::config::Config::max_depth`].
///
/// # Example
/// ```
/// use intexpr::{interpreter::{evaluator::core::evaluate, value::Value}, parse};
///
/// let expr = parse("(2 + 3) * 4").unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), Value::Number(20));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    let value = match expr {
        Expr::Number { value, .. } => Value::from(*value),
        Expr::UnaryOp { op, expr, position } => eval_unary(*op, &evaluate(expr)?, *position)?,
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, &left, &right, *position)?
        },
    };
    log::trace!("{expr} = {value}");
    Ok(value)
}
