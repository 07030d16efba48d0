use arden_ops::interpreter::{
    operator::string::{
        concat, extract_characters, join_string, length, lowercase, stringify, trim, trim_left,
        trim_right, uppercase,
    },
    value::core::Value,
};

#[test]
fn stringify_uses_canonical_forms() {
    assert_eq!(stringify(&Value::string("raw")), "raw");
    assert_eq!(stringify(&Value::number(1.25)), "1.25");
    assert_eq!(stringify(&Value::NULL), "null");
    assert_eq!(stringify(&Value::time(0)), "1970-01-01T00:00:00");
}

#[test]
fn concat_drops_primary_time() {
    let left = Value::string("a").with_time(Some(1));
    let right = Value::string("b").with_time(Some(1));
    assert!(concat(&left, &right).identical(&Value::string("ab")));
}

#[test]
fn concat_prints_lists() {
    let list = Value::list(vec!["x".into(), 2.0.into()]);
    assert_eq!(concat(&Value::string("v="), &list), Value::string("v=(\"x\", 2)"));
}

#[test]
fn join_string_of_empty_list_is_empty_string() {
    assert_eq!(join_string(&Value::empty_list()), Value::string(""));
    assert_eq!(join_string(&Value::NULL), Value::string("null"));
}

#[test]
fn extract_characters_counts_chars_not_bytes() {
    let text = Value::string("héllo");
    let Value::List(chars) = extract_characters(&text) else {
        panic!("expected a list");
    };
    assert_eq!(chars.len(), 5);
    assert_eq!(chars[1], Value::string("é"));
    assert_eq!(extract_characters(&Value::string("")), Value::empty_list());
}

#[test]
fn trims_keep_time_and_null_non_strings() {
    let stamped = Value::string("  a  ").with_time(Some(8));
    assert!(trim(&stamped).identical(&Value::string("a").with_time(Some(8))));
    assert_eq!(trim_left(&stamped), Value::string("a  "));
    assert_eq!(trim_right(&stamped), Value::string("  a"));

    let number = Value::number(1.0).with_time(Some(8));
    assert!(trim(&number).identical(&Value::null(Some(8))));
}

#[test]
fn trims_map_over_lists() {
    let list = Value::list(vec![" a".into(), Value::TRUE, "b ".into()]);
    assert_eq!(trim(&list), Value::list(vec!["a".into(), Value::NULL, "b".into()]));
    assert!(trim(&Value::empty_list()).identical(&Value::NULL));
}

#[test]
fn length_drops_time_everywhere() {
    let stamped = Value::string("abc").with_time(Some(2));
    assert!(length(&stamped).identical(&Value::number(3.0)));
    assert!(length(&Value::number(1.0).with_time(Some(2))).identical(&Value::NULL));
    assert!(length(&Value::empty_list()).is_null());
}

#[test]
fn case_mapping_is_one_to_one() {
    assert_eq!(uppercase(&Value::string("ß")), Value::string("ß"));
    assert_eq!(uppercase(&Value::string("éa")), Value::string("ÉA"));
    assert_eq!(lowercase(&Value::string("ÀB")), Value::string("àb"));
    assert_eq!(lowercase(&Value::string("\u{130}")), Value::string("i"));
    assert_eq!(uppercase(&Value::string("\u{1FB3}")), Value::string("\u{1FBC}"));
    assert_eq!(uppercase(&Value::string("ŉ")), Value::string("ŉ"));

    let stamped = Value::string("x").with_time(Some(3));
    assert!(uppercase(&stamped).identical(&Value::string("X").with_time(Some(3))));
    assert!(lowercase(&Value::TRUE).is_null());
}
