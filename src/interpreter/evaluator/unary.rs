use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a unary operation on a value.
///
/// `Plus` returns the number unchanged and `Negate` flips its sign. The only
/// number without a negation is `i64::MIN`, which reports an overflow.
///
/// # Example
/// ```
/// use intexpr::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::Value},
/// };
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(5), 0).unwrap();
/// assert_eq!(v, Value::Number(-5));
///
/// assert!(eval_unary(UnaryOperator::Plus, &Value::Bool(true), 0).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, position: usize) -> EvalResult<Value> {
    let n = value.as_number(position)?;
    match op {
        UnaryOperator::Plus => Ok(Value::from(n)),
        UnaryOperator::Negate => n.checked_neg()
                                  .map(Value::from)
                                  .ok_or(RuntimeError::Overflow { position }),
    }
}
