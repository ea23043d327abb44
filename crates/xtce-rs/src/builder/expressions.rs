// crates/xtce-rs/src/builder/expressions.rs

use super::Context;
use crate::datatypes::DataType;
use crate::error::MdbError;
use crate::expressions::{Comparison, Expression};
use crate::model::common::{
    BooleanExpression, Condition, ConditionList, ConditionNode, ExpressionHolder,
    ParameterInstanceRef,
};
use crate::value::Value;

/// Converts an expression into a `<BooleanExpression>`.
pub(super) fn build_boolean_expression(
    ctx: &Context<'_>,
    expression: &Expression,
) -> Result<BooleanExpression, MdbError> {
    Ok(BooleanExpression {
        node: build_node(ctx, expression)?,
    })
}

/// Wrapper used for include conditions, restriction criteria and context matches.
pub(super) fn build_holder(
    ctx: &Context<'_>,
    expression: Option<&Expression>,
) -> Result<Option<ExpressionHolder>, MdbError> {
    expression
        .map(|e| {
            Ok(ExpressionHolder {
                boolean_expression: build_boolean_expression(ctx, e)?,
            })
        })
        .transpose()
}

fn build_node(ctx: &Context<'_>, expression: &Expression) -> Result<ConditionNode, MdbError> {
    match expression {
        Expression::Comparison(c) => Ok(ConditionNode::Condition(build_condition(ctx, c)?)),
        Expression::And(items) => Ok(ConditionNode::And(build_list(ctx, items)?)),
        Expression::Or(items) => Ok(ConditionNode::Or(build_list(ctx, items)?)),
    }
}

fn build_list(ctx: &Context<'_>, items: &[Expression]) -> Result<ConditionList, MdbError> {
    if items.len() < 2 {
        return Err(MdbError::Export(format!(
            "A compound condition needs at least two operands, got {}",
            items.len()
        )));
    }
    Ok(ConditionList {
        items: items
            .iter()
            .map(|e| build_node(ctx, e))
            .collect::<Result<_, _>>()?,
    })
}

fn build_condition(ctx: &Context<'_>, comparison: &Comparison) -> Result<Condition, MdbError> {
    let value = match (ctx.member_type(&comparison.operand), &comparison.value) {
        (Some(dt @ DataType::Boolean(_)), Value::Bool(_))
        | (Some(dt @ DataType::Enumerated(_)), Value::Integer(_)) => {
            dt.format_value(&comparison.value)?
        }
        (_, other) => other.to_xml_value(),
    };

    Ok(Condition {
        parameter_instance_ref: ParameterInstanceRef {
            parameter_ref: ctx.member_ref(&comparison.operand)?,
            use_calibrated_value: Some(comparison.calibrated),
        },
        comparison_operator: comparison.operator.symbol().to_string(),
        value,
    })
}
