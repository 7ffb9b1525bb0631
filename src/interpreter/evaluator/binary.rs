use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary arithmetic operation.
///
/// Both operands must be numbers. Arithmetic is checked: overflow and
/// division by zero are reported instead of panicking. Division truncates
/// toward zero.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Position of the operator for error reporting.
///
/// # Example
/// ```
/// use intexpr::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let result = eval_binary(BinaryOperator::Div, &Value::Number(-7), &Value::Number(2), 0);
/// assert_eq!(result.unwrap(), Value::Number(-3));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   position: usize)
                   -> EvalResult<Value> {
    let left = left.as_number(position)?;
    let right = right.as_number(position)?;

    let result = match op {
        BinaryOperator::Add => left.checked_add(right),
        BinaryOperator::Sub => left.checked_sub(right),
        BinaryOperator::Mul => left.checked_mul(right),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            left.checked_div(right)
        },
    };

    result.map(Value::from)
          .ok_or(RuntimeError::Overflow { position })
}
