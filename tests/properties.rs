use arden_ops::interpreter::{
    operator::{
        aggregate::{average, count, sum, variance},
        element::{ArithmeticOperator, run_element},
        list::unary_comma,
        pattern::matches_pattern,
        sort::sort_by_data,
        string::{extract_characters, join_string},
        transform::{reverse, seqto, where_filter},
    },
    value::core::Value,
};
use arden_ops::util::num::usize_to_f64;

fn samples() -> Vec<Value> {
    vec![Value::empty_list(),
         Value::number(4.0),
         Value::NULL,
         Value::list(vec![3.0.into(), 1.0.into(), 2.0.into()]),
         Value::list(vec!["b".into(), Value::TRUE, Value::NULL]),
         Value::list(vec![Value::number(5.0).with_time(Some(2)), Value::number(-1.5)]),
         Value::list(vec!["pear".into(), "apple".into(), "fig".into()])]
}

fn numeric_samples() -> Vec<Vec<f64>> {
    vec![vec![1.0],
         vec![1.0, 2.0, 3.0],
         vec![-4.5, 0.0, 10.25, 3.0],
         vec![1e6, 1e-6, 7.0],
         vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]]
}

fn as_list(values: &[f64]) -> Value {
    Value::list(values.iter().map(|v| Value::number(*v)).collect())
}

fn number(value: &Value) -> f64 {
    match value {
        Value::Number { value, .. } => *value,
        other => panic!("expected a number, got {other}"),
    }
}

#[test]
fn promotion_is_idempotent() {
    for v in samples() {
        assert_eq!(unary_comma(&unary_comma(&v)), unary_comma(&v));
    }
}

#[test]
fn reverse_is_an_involution() {
    for xs in samples() {
        assert_eq!(reverse(&reverse(&xs)), unary_comma(&xs));
    }
}

#[test]
fn reverse_keeps_count() {
    for xs in samples() {
        assert_eq!(count(&xs), count(&reverse(&xs)));
    }
}

#[test]
fn average_is_sum_over_count() {
    for values in numeric_samples() {
        let xs = as_list(&values);
        let expected = run_element(ArithmeticOperator::Div, &sum(&xs), &count(&xs));
        assert!((number(&average(&xs)) - number(&expected)).abs() < 1e-9);
    }
}

#[test]
fn variance_is_not_negative() {
    for values in numeric_samples() {
        assert!(number(&variance(&as_list(&values))) >= 0.0);
    }
}

#[test]
fn sort_data_is_idempotent() {
    for xs in samples() {
        let once = sort_by_data(&xs);
        if once.is_null() {
            // Incomparable input; sorting the null again promotes it.
            continue;
        }
        assert_eq!(sort_by_data(&once), once);
    }
}

#[test]
fn where_all_true_is_identity() {
    for values in numeric_samples() {
        let xs = as_list(&values);
        let mask = Value::list(vec![Value::TRUE; values.len()]);
        assert_eq!(where_filter(&xs, &mask), xs);
    }
}

#[test]
fn seqto_length() {
    for a in -3..=3 {
        for b in -3..=3 {
            let seq = seqto(&Value::number(f64::from(a)), &Value::number(f64::from(b)));
            let expected = (b - a + 1).max(0);
            assert_eq!(count(&seq), Value::number(f64::from(expected)));
        }
    }
}

#[test]
fn extract_characters_length_matches_string() {
    for xs in samples() {
        let Value::String { value, .. } = join_string(&xs) else {
            panic!("expected a string");
        };
        let chars = extract_characters(&xs);
        assert_eq!(count(&chars), Value::number(usize_to_f64(value.chars().count())));
    }
}

#[test]
fn percent_matches_every_string() {
    for text in ["", "x", "multi\nline", "100%", "_\\"] {
        assert!(matches_pattern(&Value::string(text), &Value::string("%")).is_true());
    }
}
