use arden_ops::interpreter::{
    operator::{
        logic::{all, any, exist},
        sort::{sort_by_data, sort_by_time},
        transform::{
            first, first_n, increase, is_in, is_list, last, last_n, percent_increase, reverse,
            seqto, where_filter,
        },
    },
    value::core::Value,
};

fn numbers(values: &[f64]) -> Value {
    Value::list(values.iter().map(|v| Value::number(*v)).collect())
}

fn at(value: f64, time: i64) -> Value {
    Value::number(value).with_time(Some(time))
}

#[test]
fn sort_data_returns_sorted_input_unchanged() {
    let sorted = Value::list(vec![at(1.0, 9), at(1.0, 3), at(2.0, 1)]);
    assert!(sort_by_data(&sorted).identical(&sorted));
}

#[test]
fn sort_data_is_stable() {
    let input = Value::list(vec![at(2.0, 1), at(1.0, 2), at(2.0, 3), at(1.0, 4)]);
    let expected = Value::list(vec![at(1.0, 2), at(1.0, 4), at(2.0, 1), at(2.0, 3)]);
    assert!(sort_by_data(&input).identical(&expected));
}

#[test]
fn sort_data_of_booleans_or_nulls_is_null() {
    assert!(sort_by_data(&Value::list(vec![Value::TRUE, Value::FALSE])).is_null());
    assert!(sort_by_data(&Value::list(vec![Value::NULL, Value::NULL])).is_null());
    assert_eq!(sort_by_data(&Value::empty_list()), Value::empty_list());
    assert_eq!(sort_by_data(&Value::TRUE), Value::list(vec![Value::TRUE]));
}

#[test]
fn sort_time_orders_by_primary_time() {
    let input = Value::list(vec![at(1.0, 30), at(2.0, 10), at(3.0, 20)]);
    let expected = Value::list(vec![at(2.0, 10), at(3.0, 20), at(1.0, 30)]);
    assert!(sort_by_time(&input).identical(&expected));
    assert!(sort_by_time(&Value::list(vec![at(1.0, 1), Value::number(2.0)])).is_null());
}

#[test]
fn where_keeps_only_explicit_true() {
    let values = numbers(&[1.0, 2.0, 3.0, 4.0]);
    let mask = Value::list(vec![Value::TRUE, Value::NULL, Value::number(1.0), Value::TRUE]);
    assert_eq!(where_filter(&values, &mask), numbers(&[1.0, 4.0]));
}

#[test]
fn where_with_scalar_condition() {
    let values = numbers(&[1.0, 2.0]);
    assert_eq!(where_filter(&values, &Value::TRUE), values);
    assert_eq!(where_filter(&values, &Value::NULL), Value::empty_list());
    assert_eq!(where_filter(&Value::number(5.0), &Value::TRUE), Value::number(5.0));
}

#[test]
fn where_with_mismatched_lengths_is_null() {
    assert!(where_filter(&numbers(&[1.0, 2.0]), &Value::list(vec![Value::TRUE])).is_null());
}

#[test]
fn is_in_maps_over_left_list() {
    let haystack = numbers(&[1.0, 2.0]);
    let needles = numbers(&[2.0, 3.0]);
    assert_eq!(is_in(&needles, &haystack), Value::list(vec![Value::TRUE, Value::FALSE]));
    assert!(is_in(&Value::number(1.0), &Value::number(1.0)).is_true());
    assert!(is_in(&Value::number(1.0), &Value::empty_list()).is_false());
}

#[test]
fn is_in_keeps_time_only_on_matching_time() {
    let haystack = Value::list(vec![at(1.0, 5), at(2.0, 6)]);
    assert!(is_in(&at(1.0, 5), &haystack).identical(&Value::boolean(true, Some(5))));
    assert!(is_in(&at(2.0, 5), &haystack).identical(&Value::TRUE));
    assert!(is_in(&at(3.0, 5), &haystack).identical(&Value::FALSE));
}

#[test]
fn seqto_bounds() {
    assert_eq!(seqto(&Value::number(-1.0), &Value::number(1.0)), numbers(&[-1.0, 0.0, 1.0]));
    assert_eq!(seqto(&Value::number(2.0), &Value::number(2.0)), numbers(&[2.0]));
    assert!(seqto(&Value::string("1"), &Value::number(2.0)).is_null());
    assert!(seqto(&numbers(&[1.0]), &Value::number(2.0)).is_null());

    let stamped = seqto(&at(1.0, 4), &at(2.0, 4));
    assert!(stamped.identical(&numbers(&[1.0, 2.0])));
}

#[test]
fn seqto_bounds_outside_32_bits_are_null() {
    assert!(seqto(&Value::number(0.0), &Value::number(4e12)).is_null());
    assert!(seqto(&Value::number(3e9), &Value::number(3e9)).is_null());
    assert!(seqto(&Value::number(-3e9), &Value::number(0.0)).is_null());

    let top = f64::from(i32::MAX);
    assert_eq!(seqto(&Value::number(top - 1.0), &Value::number(top)),
               numbers(&[top - 1.0, top]));
}

#[test]
fn reverse_keeps_times() {
    let list = Value::list(vec![at(1.0, 1), at(2.0, 2)]);
    assert!(reverse(&list).identical(&Value::list(vec![at(2.0, 2), at(1.0, 1)])));
    assert_eq!(reverse(&Value::empty_list()), Value::empty_list());
}

#[test]
fn increase_stamps_later_time() {
    let list = Value::list(vec![at(10.0, 1), at(13.0, 2), at(12.0, 3)]);
    let expected = Value::list(vec![at(3.0, 2), at(-1.0, 3)]);
    assert!(increase(&list).identical(&expected));
    assert_eq!(increase(&Value::number(4.0)), Value::empty_list());
    assert!(increase(&Value::empty_list()).is_null());
}

#[test]
fn increase_of_times_yields_durations() {
    let list = Value::list(vec![Value::time(0), Value::time(60)]);
    assert_eq!(increase(&list), Value::list(vec![Value::duration(60.0, false)]));
}

#[test]
fn percent_increase_with_zero_is_null_element() {
    let result = percent_increase(&numbers(&[0.0, 5.0, 10.0]));
    let Value::List(items) = result else {
        panic!("expected a list");
    };
    assert!(items[0].is_null());
    assert_eq!(items[1], Value::number(100.0));
}

#[test]
fn is_list_times() {
    let list = Value::list(vec![at(1.0, 5), at(2.0, 5)]);
    assert!(is_list(&list).identical(&Value::boolean(true, Some(5))));
    assert!(is_list(&at(1.0, 6)).identical(&Value::boolean(false, Some(6))));
    assert!(is_list(&Value::empty_list()).is_true());
}

#[test]
fn first_and_last() {
    let list = numbers(&[1.0, 2.0, 3.0]);
    assert_eq!(first(&list), Value::number(1.0));
    assert_eq!(last(&list), Value::number(3.0));
    assert_eq!(first(&Value::string("x")), Value::string("x"));
    assert!(last(&Value::empty_list()).is_null());

    assert_eq!(first_n(&list, 0), Value::empty_list());
    assert_eq!(last_n(&list, 1), numbers(&[3.0]));
    assert_eq!(last_n(&list, -5), Value::empty_list());
    assert_eq!(first_n(&Value::number(7.0), 3), numbers(&[7.0]));
}

#[test]
fn exist_any_all_carry_common_time() {
    let list = Value::list(vec![Value::boolean(true, Some(2)), Value::null(Some(2))]);
    assert!(exist(&list).identical(&Value::boolean(true, Some(2))));
    assert!(any(&list).identical(&Value::boolean(true, Some(2))));
    assert!(all(&list).identical(&Value::null(Some(2))));
}

#[test]
fn any_and_all_ignore_non_boolean_truthiness() {
    let list = Value::list(vec![Value::number(1.0), Value::string("true")]);
    assert!(any(&list).is_null());
    assert!(all(&list).is_null());
    assert!(any(&Value::FALSE).is_false());
    assert!(all(&Value::TRUE).is_true());
}
