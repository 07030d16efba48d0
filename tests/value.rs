use std::cmp::Ordering;

use arden_ops::interpreter::{
    operator::{
        element::{ArithmeticOperator, run_element},
        list::{binary_comma, common_time, unary_comma},
    },
    value::core::{SECONDS_PER_MONTH, Value},
};

fn numbers(values: &[f64]) -> Value {
    Value::list(values.iter().map(|v| Value::number(*v)).collect())
}

#[test]
fn equality_ignores_primary_time_but_identity_does_not() {
    let early = Value::number(1.0).with_time(Some(10));
    let late = Value::number(1.0).with_time(Some(20));

    assert_eq!(early, late);
    assert!(!early.identical(&late));
    assert!(early.identical(&early.clone()));
    assert!(Value::NULL.identical(&Value::null(None)));
    assert!(!Value::NULL.identical(&Value::null(Some(1))));
}

#[test]
fn lists_compare_element_wise() {
    let a = Value::list(vec![Value::number(1.0).with_time(Some(1)), "x".into()]);
    let b = Value::list(vec![Value::number(1.0), "x".into()]);

    assert_eq!(a, b);
    assert!(!a.identical(&b));
    assert_ne!(numbers(&[1.0, 2.0]), numbers(&[1.0]));
    assert_ne!(Value::number(1.0), numbers(&[1.0]));
}

#[test]
fn compare_orders_within_a_family_only() {
    assert_eq!(Value::string("a").compare(&Value::string("b")), Some(Ordering::Less));
    assert_eq!(Value::time(5).compare(&Value::time(5)), Some(Ordering::Equal));
    assert_eq!(Value::TRUE.compare(&Value::FALSE), None);
    assert_eq!(Value::NULL.compare(&Value::NULL), None);
    assert_eq!(Value::number(f64::NAN).compare(&Value::number(1.0)), None);
    assert_eq!(Value::time(0).compare(&Value::number(0.0)), None);
}

#[test]
fn durations_in_different_units_compare_in_seconds() {
    let month = Value::duration(1.0, true);
    let seconds = Value::duration(SECONDS_PER_MONTH, false);
    let day = Value::duration(86_400.0, false);

    assert_eq!(month, seconds);
    assert_eq!(month.compare(&day), Some(Ordering::Greater));
    assert_eq!(month.to_seconds(), Some(SECONDS_PER_MONTH));
}

#[test]
fn truthiness_is_explicit() {
    assert!(Value::TRUE.is_true());
    assert!(!Value::number(1.0).is_true());
    assert!(!Value::string("true").is_true());
    assert!(!Value::NULL.is_false());
    assert!(Value::FALSE.is_false());
}

#[test]
fn promotion_is_idempotent() {
    let single = Value::string("x");
    let once = unary_comma(&single);
    assert_eq!(once, Value::list(vec!["x".into()]));
    assert_eq!(unary_comma(&once), once);

    let empty = Value::empty_list();
    assert_eq!(unary_comma(&empty), empty);
}

#[test]
fn binary_comma_flattens_both_sides() {
    let joined = binary_comma(&numbers(&[1.0, 2.0]), &numbers(&[3.0]));
    assert_eq!(joined, numbers(&[1.0, 2.0, 3.0]));

    let with_empty = binary_comma(&Value::empty_list(), &Value::NULL);
    assert_eq!(with_empty, Value::list(vec![Value::NULL]));
}

#[test]
fn common_time_requires_agreement() {
    let a = Value::number(1.0).with_time(Some(5));
    let b = Value::number(2.0).with_time(Some(5));
    let c = Value::number(3.0);

    assert_eq!(common_time(&[a.clone(), b.clone()]), Some(5));
    assert_eq!(common_time(&[a, b, c]), None);
    assert_eq!(common_time(&[]), None);
}

#[test]
fn with_time_on_a_list_stamps_every_element() {
    let stamped = numbers(&[1.0, 2.0]).with_time(Some(9));
    let Value::List(items) = stamped else {
        panic!("expected a list");
    };
    assert!(items.iter().all(|item| item.primary_time() == Some(9)));
}

#[test]
fn display_forms() {
    assert_eq!(Value::number(3.0).to_string(), "3");
    assert_eq!(Value::number(2.5).to_string(), "2.5");
    assert_eq!(Value::time(86_400).to_string(), "1970-01-02T00:00:00");
    assert_eq!(Value::duration(1.0, true).to_string(), "1 month");
    assert_eq!(Value::duration(90.0, false).to_string(), "90 seconds");
    assert_eq!(Value::string("a\"b").to_string(), "a\"b");
    assert_eq!(Value::list(vec!["a\"b".into(), Value::NULL]).to_string(), "(\"a\"\"b\", null)");
    assert_eq!(Value::empty_list().to_string(), "()");
}

#[test]
fn arithmetic_keeps_only_a_shared_time() {
    let a = Value::number(1.0).with_time(Some(3));
    let b = Value::number(2.0).with_time(Some(3));
    let c = Value::number(2.0).with_time(Some(4));

    assert_eq!(run_element(ArithmeticOperator::Add, &a, &b).primary_time(), Some(3));
    assert_eq!(run_element(ArithmeticOperator::Add, &a, &c).primary_time(), None);

    let failed = run_element(ArithmeticOperator::Div, &a, &Value::number(0.0).with_time(Some(3)));
    assert!(failed.is_null());
    assert_eq!(failed.primary_time(), Some(3));
}

#[test]
fn arithmetic_on_unsupported_pairs_is_null() {
    use ArithmeticOperator::{Add, Mul, Sub};

    assert!(run_element(Add, &Value::string("a"), &Value::number(1.0)).is_null());
    assert!(run_element(Add, &Value::NULL, &Value::number(1.0)).is_null());
    assert!(run_element(Add, &numbers(&[1.0]), &Value::number(1.0)).is_null());
    assert!(run_element(Mul, &Value::time(1), &Value::number(2.0)).is_null());
    assert!(run_element(Sub, &Value::duration(1.0, false), &Value::time(1)).is_null());
}

#[test]
fn time_and_duration_arithmetic() {
    use ArithmeticOperator::{Add, Div, Sub};

    let day = Value::duration(86_400.0, false);
    assert_eq!(run_element(Add, &Value::time(0), &day), Value::time(86_400));
    assert_eq!(run_element(Add, &day, &Value::time(0)), Value::time(86_400));
    assert_eq!(run_element(Sub, &Value::time(86_400), &Value::time(0)), day);
    assert_eq!(run_element(Div, &day, &Value::duration(3_600.0, false)), Value::number(24.0));

    let mixed = run_element(Add, &Value::duration(1.0, true), &Value::duration(1.0, false));
    assert_eq!(mixed, Value::duration(SECONDS_PER_MONTH + 1.0, false));
}
