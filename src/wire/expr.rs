//! Encode and decode `${form.<id>}` condition expressions.
//!
//! Control components reference their condition subject as a form-data
//! expression on the wire (`${form.age} == '18'`). The serializer always
//! emits the canonical form below; the parser accepts exactly that shape.

use crate::document::{Condition, ConditionOp};

/// `subject` → `${form.subject}`.
pub fn form_ref(subject: &str) -> String {
    format!("${{form.{subject}}}")
}

/// `${form.subject}` → `subject`.
pub fn parse_form_ref(expr: &str) -> Option<&str> {
    expr.strip_prefix("${form.")?.strip_suffix('}')
}

/// Canonical wire expression: `${form.<subject>} <op> '<value>'`.
pub fn condition_expr(condition: &Condition) -> String {
    format!(
        "{} {} '{}'",
        form_ref(&condition.subject),
        condition.operator.symbol(),
        condition.value
    )
}

pub fn parse_condition_expr(expr: &str) -> Option<Condition> {
    let (operator, split_at) = if let Some(pos) = expr.find(" == ") {
        (ConditionOp::Eq, pos)
    } else if let Some(pos) = expr.find(" != ") {
        (ConditionOp::Neq, pos)
    } else {
        return None;
    };

    let subject = parse_form_ref(&expr[..split_at])?;
    let value = expr[split_at + 4..]
        .strip_prefix('\'')?
        .strip_suffix('\'')?;

    Some(Condition {
        subject: subject.to_string(),
        operator,
        value: value.to_string(),
    })
}
