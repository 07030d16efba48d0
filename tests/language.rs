use std::fs::{self};

use arden_ops::{get_result, interpreter::evaluator::core::Context, run_script};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, false) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```arden") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn end_to_end_scenarios() {
    assert_success("sort_data(3, 1, 2) => (1, 2, 3)");
    assert_success("median(1, 2, 3, 4) => 2.5");
    assert_success("variance(2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0) => 4.0");
    assert_success("where(1, 2, 3; true, false, true) => (1, 3)");
    assert_success("any(true, null, false) => true");
    assert_success("all(true, null, true) => null");
    assert_success("seqto(3; 1) => ()");
    assert_success("increase(10 @ 1, 13 @ 2, 12 @ 3) => (3 @ 2, -1 @ 3)");
    assert_success(r#"matches_pattern("a_b%"; "A_B%") => true"#);
    assert_success(r#"matches_pattern("abc"; "a\%c") => false"#);
}

#[test]
fn failed_checks_are_errors() {
    assert_failure("count(1, 2) => 3");
    assert_failure("sort_data(3, 1, 2) => (3, 2, 1)");
    assert_failure("3 => \"3\"");
    assert_failure("1 => ,1");
}

#[test]
fn checks_compare_primary_times() {
    assert_failure("sum(1 @ 5, 2 @ 5) => 3");
    assert_failure("first(1 @ 5) => 1 @ 6");

    let lenient = Context { compare_times: false };
    assert!(run_script("sum(1 @ 5, 2 @ 5) => 3", &lenient).is_ok());
    assert!(run_script("first(1 @ 5) => 1 @ 6", &lenient).is_ok());
    assert!(run_script("first(1 @ 5) => 2", &lenient).is_err());
}

#[test]
fn unknown_operator_and_wrong_arity() {
    assert_failure("frobnicate(1)");
    assert_failure("count()");
    assert_failure("count(1; 2)");
    assert_failure("first(1; 2; 3)");
    assert_failure("where(1)");
}

#[test]
fn operator_names_ignore_case() {
    assert_success("SORT_DATA(2, 1) => (1, 2)");
    assert_success("Count(1, 2) => 2");
}

#[test]
fn syntax_errors() {
    assert_failure("count(1, 2");
    assert_failure("1 2");
    assert_failure("5 @ \"noon\"");
    assert_failure("5 @ 1.5");
    assert_failure("count");
    assert_failure("=> 1");
    assert_failure("1e999");
    assert_failure("#");
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    assert_success("// nothing to see\n\n\ncount(1) => 1 // trailing comment\n\n");
    assert_success("");
}

#[test]
fn run_script_returns_last_value() {
    let value = run_script("count(1)\nreverse(1, 2)", &Context::new()).unwrap();
    assert_eq!(value.map(|v| v.to_string()), Some("(2, 1)".to_string()));

    let empty = run_script("// only a comment", &Context::new()).unwrap();
    assert!(empty.is_none());
}

#[test]
fn errors_report_line_numbers() {
    let err = run_script("count(1) => 1\n\ncount(1) => 2", &Context::new()).unwrap_err();
    assert!(err.to_string().starts_with("Error on line 3:"), "{err}");

    let err = run_script("count(1)\nnope(1)", &Context::new()).unwrap_err();
    assert!(err.to_string().starts_with("Error on line 2:"), "{err}");
}

#[test]
fn failed_check_prints_primary_times() {
    let err = run_script("first(1 @ 0) => 2", &Context::new()).unwrap_err();
    assert_eq!(err.to_string(),
               "Error on line 1: Check failed. Expected 2, but found 1 @ 1970-01-01T00:00:00 \
                instead.");
}

#[test]
fn strings_with_quotes_and_newlines() {
    assert_success(r#"length("say ""hi""") => 8"#);
    assert_success("length(\"a\nb\") => 3\ncount(1) => 1");
}

#[test]
fn durations_accept_singular_and_plural_units() {
    assert_success("1 hour => 3600 seconds");
    assert_success("2 weeks => 14 days");
    assert_success("1 year => 12 months");
    assert_success("1 minute => 60 second");
}
