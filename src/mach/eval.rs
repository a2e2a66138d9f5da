use super::{Operation, Var};
use crate::lang::{ast::Expression, Error};

/// Evaluates a tree against the variable table.
///
/// The tree is never changed. Every variable read bumps that variable's
/// usage count, so evaluating twice gives the same value but double counts.
pub fn evaluate(expr: &Expression, var: &mut Var) -> Result<i32, Error> {
    match expr {
        Expression::Number(_, n) => Ok(*n),
        Expression::Variable(col, name) => match var.fetch(name) {
            Ok(n) => Ok(n),
            Err(e) => Err(e.in_column(col)),
        },
        Expression::Binary(col, op, lhs, rhs) => {
            let lhs = evaluate(lhs, var)?;
            let rhs = evaluate(rhs, var)?;
            match Operation::binary(*op, lhs, rhs) {
                Ok(n) => Ok(n),
                Err(e) => Err(e.in_column(col)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{parse_expression, ErrorCode};

    fn eval_str(s: &str, var: &mut Var) -> Result<i32, Error> {
        match parse_expression(s) {
            Ok(expr) => evaluate(&expr, var),
            Err(e) => panic!("{}", e),
        }
    }

    #[test]
    fn test_arithmetic() {
        let mut var = Var::new();
        assert_eq!(eval_str("3 + 2 * 4", &mut var).unwrap(), 11);
        assert_eq!(eval_str("(3 + 2) * 4", &mut var).unwrap(), 20);
        assert_eq!(eval_str("2 ** 3 ** 2", &mut var).unwrap(), 512);
        assert_eq!(eval_str("7 MOD 3", &mut var).unwrap(), 1);
        assert_eq!(eval_str("-7 MOD 3", &mut var).unwrap(), 2);
        assert_eq!(eval_str("10 - 4 - 3", &mut var).unwrap(), 3);
        assert_eq!(eval_str("100 / 10 / 5", &mut var).unwrap(), 2);
    }

    #[test]
    fn test_divide_by_zero_column() {
        let mut var = Var::new();
        let e = eval_str("5 / 0", &mut var).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivideByZero);
        assert_eq!(e.column(), 2..3);
    }

    #[test]
    fn test_undefined_variable() {
        let mut var = Var::new();
        let e = eval_str("1 + X", &mut var).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedVariable);
        assert_eq!(e.column(), 4..5);
    }

    #[test]
    fn test_value_idempotent_usage_not() {
        let mut var = Var::new();
        var.store(&"A".into(), 3);
        var.store(&"B".into(), 4);
        let expr = parse_expression("A * A + B").unwrap();
        assert_eq!(evaluate(&expr, &mut var).unwrap(), 13);
        assert_eq!(var.usage_count("A"), 2);
        assert_eq!(var.usage_count("B"), 1);
        assert_eq!(evaluate(&expr, &mut var).unwrap(), 13);
        assert_eq!(var.usage_count("A"), 4);
        assert_eq!(var.usage_count("B"), 2);
    }
}
