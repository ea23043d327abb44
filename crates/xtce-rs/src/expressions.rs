// crates/xtce-rs/src/expressions.rs

//! Boolean conditions over parameter values.
//!
//! Used for include conditions of entries, restriction criteria of
//! containers and commands, expression checks of verifiers and the context
//! of context alarms.

use crate::references::ParameterMember;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl ComparisonOperator {
    /// Operator text of `<ComparisonOperator>`.
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "==",
            ComparisonOperator::Ne => "!=",
            ComparisonOperator::Lt => "<",
            ComparisonOperator::Lte => "<=",
            ComparisonOperator::Gt => ">",
            ComparisonOperator::Gte => ">=",
        }
    }
}

/// `operand <operator> value`
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub operand: ParameterMember,
    pub operator: ComparisonOperator,
    pub value: Value,
    /// Compare against the engineering value rather than the raw value.
    pub calibrated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Comparison(Comparison),
    /// Two or more conditions that must all hold.
    And(Vec<Expression>),
    /// Two or more conditions of which one must hold.
    Or(Vec<Expression>),
}

impl Expression {
    /// Conjunction with `other`, flattening an existing conjunction.
    pub fn and(self, other: Expression) -> Expression {
        match self {
            Expression::And(mut items) => {
                items.push(other);
                Expression::And(items)
            }
            first => Expression::And(vec![first, other]),
        }
    }

    /// Disjunction with `other`, flattening an existing disjunction.
    pub fn or(self, other: Expression) -> Expression {
        match self {
            Expression::Or(mut items) => {
                items.push(other);
                Expression::Or(items)
            }
            first => Expression::Or(vec![first, other]),
        }
    }

    /// Makes a comparison use the raw (uncalibrated) value. No effect on
    /// AND/OR nodes.
    pub fn raw(self) -> Expression {
        match self {
            Expression::Comparison(c) => Expression::Comparison(Comparison {
                calibrated: false,
                ..c
            }),
            other => other,
        }
    }
}

fn compare(
    operand: impl Into<ParameterMember>,
    operator: ComparisonOperator,
    value: impl Into<Value>,
) -> Expression {
    Expression::Comparison(Comparison {
        operand: operand.into(),
        operator,
        value: value.into(),
        calibrated: true,
    })
}

pub fn eq(operand: impl Into<ParameterMember>, value: impl Into<Value>) -> Expression {
    compare(operand, ComparisonOperator::Eq, value)
}

pub fn ne(operand: impl Into<ParameterMember>, value: impl Into<Value>) -> Expression {
    compare(operand, ComparisonOperator::Ne, value)
}

pub fn lt(operand: impl Into<ParameterMember>, value: impl Into<Value>) -> Expression {
    compare(operand, ComparisonOperator::Lt, value)
}

pub fn lte(operand: impl Into<ParameterMember>, value: impl Into<Value>) -> Expression {
    compare(operand, ComparisonOperator::Lte, value)
}

pub fn gt(operand: impl Into<ParameterMember>, value: impl Into<Value>) -> Expression {
    compare(operand, ComparisonOperator::Gt, value)
}

pub fn gte(operand: impl Into<ParameterMember>, value: impl Into<Value>) -> Expression {
    compare(operand, ComparisonOperator::Gte, value)
}

/// All of the given conditions. Chain more with [`Expression::and`].
pub fn all_of(first: Expression, second: Expression) -> Expression {
    Expression::And(vec![first, second])
}

/// Any of the given conditions. Chain more with [`Expression::or`].
pub fn any_of(first: Expression, second: Expression) -> Expression {
    Expression::Or(vec![first, second])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_default_to_calibrated() {
        match eq("/Sat/mode", 1) {
            Expression::Comparison(c) => {
                assert!(c.calibrated);
                assert_eq!(c.operator.symbol(), "==");
                assert_eq!(c.value, Value::Integer(1));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_raw_clears_calibrated_flag() {
        match gte("/Sat/temp", 3.5).raw() {
            Expression::Comparison(c) => assert!(!c.calibrated),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_and_flattens() {
        let expr = all_of(eq("a", 1), ne("b", 2)).and(lt("c", 3));
        match expr {
            Expression::And(items) => assert_eq!(items.len(), 3),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_or_nests_under_and() {
        let expr = all_of(eq("a", 1), any_of(gt("b", 2), lte("b", 0)));
        match expr {
            Expression::And(items) => assert!(matches!(items[1], Expression::Or(_))),
            other => panic!("unexpected {:?}", other),
        }
    }
}
