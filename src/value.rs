//! Helpers for dynamic [`serde_json::Value`] data.
//!
//! Heterogeneous sequences are modelled as `&[Value]`. This module holds the
//! two rules the dynamic operations share: how a value's shape is named in
//! errors, and the total order used to sort values.

use std::cmp::Ordering;

use serde_json::{Number, Value};

/// Returns a short name for the shape of `value`.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use underbar::value::kind;
///
/// assert_eq!(kind(&json!(null)), "null");
/// assert_eq!(kind(&json!({"a": 1})), "object");
/// ```
#[must_use]
pub const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

const fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over JSON values.
///
/// Values of different shapes order as
/// `null < bool < number < string < array < object`. Within a shape:
/// numbers compare by exact numeric value (integers are never rounded
/// through `f64`), strings lexicographically, arrays
/// element-wise, and objects by their entries in traversal order.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use serde_json::json;
/// use underbar::value::compare;
///
/// assert_eq!(compare(&json!(2), &json!(10)), Ordering::Less);
/// assert_eq!(compare(&json!("b"), &json!(1)), Ordering::Greater);
/// assert_eq!(compare(&json!(null), &json!(false)), Ordering::Less);
/// ```
#[must_use]
pub fn compare(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(left), Value::Bool(right)) => left.cmp(right),
        (Value::Number(left), Value::Number(right)) => compare_numbers(left, right),
        (Value::String(left), Value::String(right)) => left.cmp(right),
        (Value::Array(left), Value::Array(right)) => left
            .iter()
            .zip(right)
            .map(|(left, right)| compare(left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| left.len().cmp(&right.len())),
        (Value::Object(left), Value::Object(right)) => left
            .iter()
            .zip(right)
            .map(|((left_key, left), (right_key, right))| {
                left_key.cmp(right_key).then_with(|| compare(left, right))
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| left.len().cmp(&right.len())),
        _ => rank(left).cmp(&rank(right)),
    }
}

/// A JSON number widened so that every integer is held exactly.
#[derive(Clone, Copy)]
enum Numeric {
    Integer(i128),
    Float(f64),
}

impl Numeric {
    fn of(number: &Number) -> Self {
        if let Some(unsigned) = number.as_u64() {
            Self::Integer(i128::from(unsigned))
        } else if let Some(signed) = number.as_i64() {
            Self::Integer(i128::from(signed))
        } else {
            Self::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }
}

fn compare_numbers(left: &Number, right: &Number) -> Ordering {
    match (Numeric::of(left), Numeric::of(right)) {
        (Numeric::Integer(left), Numeric::Integer(right)) => left.cmp(&right),
        (Numeric::Integer(left), Numeric::Float(right)) => compare_integer_to_float(left, right),
        (Numeric::Float(left), Numeric::Integer(right)) => {
            compare_integer_to_float(right, left).reverse()
        }
        (Numeric::Float(left), Numeric::Float(right)) => left
            .partial_cmp(&right)
            .unwrap_or_else(|| left.total_cmp(&right)),
    }
}

/// Compares without rounding the integer to `f64`.
///
/// The float's integral part is compared as an integer first, then its
/// fractional part breaks the tie. `NaN` sorts above every integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn compare_integer_to_float(integer: i128, float: f64) -> Ordering {
    if float.is_nan() {
        return Ordering::Less;
    }
    let integral = float.trunc();
    // i128::MAX as f64 rounds up to exactly 2^127.
    let limit = i128::MAX as f64;
    if integral >= limit {
        return Ordering::Less;
    }
    if integral < -limit {
        return Ordering::Greater;
    }
    integer.cmp(&(integral as i128)).then_with(|| {
        let fraction = float - integral;
        if fraction > 0.0 {
            Ordering::Less
        } else if fraction < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), json!(true))]
    #[case(json!(true), json!(0))]
    #[case(json!(99), json!(""))]
    #[case(json!("z"), json!([]))]
    #[case(json!([1]), json!({}))]
    fn test_shapes_are_ranked(#[case] lower: Value, #[case] higher: Value) {
        assert_eq!(compare(&lower, &higher), Ordering::Less);
        assert_eq!(compare(&higher, &lower), Ordering::Greater);
    }

    #[rstest]
    fn test_mixed_integer_and_float() {
        assert_eq!(compare(&json!(1), &json!(1.5)), Ordering::Less);
        assert_eq!(compare(&json!(2.0), &json!(2.0)), Ordering::Equal);
    }

    #[rstest]
    #[case(json!(u64::MAX - 1), json!(u64::MAX))]
    #[case(json!(i64::MAX - 1), json!(i64::MAX))]
    #[case(json!(i64::MAX), json!(9_223_372_036_854_775_808.0_f64))]
    #[case(json!(i64::MIN), json!(i64::MIN + 1))]
    #[case(json!(-9_223_372_036_854_777_856.0_f64), json!(i64::MIN))]
    #[case(json!(-1.5), json!(-1))]
    #[case(json!(2), json!(2.25))]
    #[case(json!(-1e300), json!(i64::MIN))]
    #[case(json!(u64::MAX), json!(1e300))]
    fn test_numbers_order_exactly(#[case] lower: Value, #[case] higher: Value) {
        assert_eq!(compare(&lower, &higher), Ordering::Less);
        assert_eq!(compare(&higher, &lower), Ordering::Greater);
    }

    #[rstest]
    #[case(json!(9_223_372_036_854_775_808_u64), json!(9_223_372_036_854_775_808.0_f64))]
    #[case(json!(0), json!(-0.0))]
    #[case(json!(0.0), json!(-0.0))]
    #[case(json!(-3), json!(-3.0))]
    fn test_equal_numbers_across_representations(#[case] left: Value, #[case] right: Value) {
        assert_eq!(compare(&left, &right), Ordering::Equal);
    }

    #[rstest]
    fn test_integers_near_two_to_the_63_are_ordered_transitively() {
        let below = json!(i64::MAX - 1);
        let max = json!(i64::MAX);
        let float = json!(9_223_372_036_854_775_808.0_f64);

        assert_eq!(compare(&below, &max), Ordering::Less);
        assert_eq!(compare(&max, &float), Ordering::Less);
        assert_eq!(compare(&below, &float), Ordering::Less);
    }

    #[rstest]
    fn test_arrays_compare_elementwise_then_by_length() {
        assert_eq!(compare(&json!([1, 2]), &json!([1, 3])), Ordering::Less);
        assert_eq!(compare(&json!([1, 2]), &json!([1, 2, 0])), Ordering::Less);
        assert_eq!(compare(&json!([1, 2]), &json!([1, 2])), Ordering::Equal);
    }
}
