//! End-to-end scenarios for validation units, conditions and sinks.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rulegate::prelude::*;
use rulegate::{assert_fails, assert_fails_with, assert_passes};

fn spy(calls: &Arc<AtomicUsize>) -> Rule {
    let calls = calls.clone();
    Rule::custom(move |_: &Value| {
        calls.fetch_add(1, Ordering::SeqCst);
        true
    })
    .named("spy")
    .message("spy")
    .build()
    .unwrap()
}

#[test]
fn length_rule_rejects_short_text_with_default_message() {
    let unit = ValidationUnit::new("char").within_range(5, 10).unwrap();
    assert_fails_with!(
        unit.evaluate().unwrap(),
        ErrorPayload::Message("Length must be between 5 and 10".into())
    );
}

#[test]
fn length_rule_accepts_seven_chars() {
    let unit = ValidationUnit::new("7 chars").within_range(5, 10).unwrap();
    assert_passes!(unit.evaluate().unwrap());
}

#[test]
fn length_rule_reads_numbers_and_booleans_as_text() {
    let rule = Rule::length(5, 10).build().unwrap();
    assert!(rule.evaluate(&Value::from(1234567890)).is_pass());
    assert!(!rule.evaluate(&Value::from(1234)).is_pass());
    assert!(rule.evaluate(&Value::from(false)).is_pass());
    assert!(!rule.evaluate(&Value::from(true)).is_pass());
}

#[test]
fn inverted_length_bounds_are_a_config_error() {
    let err = ValidationUnit::new("x").within_range(10, 5).unwrap_err();
    assert!(matches!(err, ConfigError::InvertedBounds { min: 10, max: 5 }));
}

#[test]
fn null_value_is_a_null_input_failure() {
    let unit = ValidationUnit::new(Value::Null).within_range(5, 10).unwrap();
    let failure = unit.evaluate().unwrap().into_result().unwrap_err();
    assert!(failure.is_null_input());
    assert_eq!(failure.message(), Some("Length must be between 5 and 10"));
}

#[test]
fn failing_standalone_rule_wins_over_passing_condition() {
    let calls = Arc::new(AtomicUsize::new(0));
    let unit = ValidationUnit::new("anything")
        .attach(
            Rule::custom(|_: &Value| false)
                .named("always_fails")
                .message("always fails")
                .build()
                .unwrap(),
        )
        .attach(Condition::all().add(spy(&calls)));

    let failure = unit.evaluate().unwrap().into_result().unwrap_err();
    assert_eq!(failure.rule(), "always_fails");
    assert_eq!(failure.message(), Some("always fails"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn spy_after_failing_condition_rule_never_runs() {
    let calls = Arc::new(AtomicUsize::new(0));
    let unit = ValidationUnit::new("abc").attach(
        Condition::all()
            .digits_only()
            .rule(spy(&calls)),
    );
    assert_fails!(unit.evaluate().unwrap());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn or_condition_runs_every_rule_before_failing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let unit = ValidationUnit::new("abc").attach(
        Condition::any()
            .rule(
                Rule::not(spy(&calls))
                    .message("spy passed")
                    .build()
                    .unwrap(),
            )
            .digits_only()
            .all_uppercase(),
    );

    assert_fails_with!(
        unit.evaluate().unwrap(),
        ErrorPayload::Message("Value is not all uppercase".into())
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_condition_passes() {
    let unit = ValidationUnit::new("x")
        .attach(Condition::all())
        .attach(Condition::any());
    assert_passes!(unit.evaluate().unwrap());
}

#[test]
fn codes_render_through_the_error_slot() {
    let codes = HashMap::from([(
        ErrorCode::new("username.short"),
        "Username is too short".to_string(),
    )]);
    let slot = Arc::new(ErrorSlot::with_resolver(codes));

    let mut unit = ValidationUnit::new("jo")
        .with_sink(slot.clone())
        .attach(Rule::min_length(3).code("username.short").build().unwrap())
        .alphanumeric_only();

    let outcome = unit.evaluate().unwrap();
    assert_eq!(outcome.code(), Some(&ErrorCode::new("username.short")));
    assert_eq!(slot.current().as_deref(), Some("Username is too short"));

    unit.set_value("john_doe");
    unit.evaluate().unwrap();
    assert_eq!(slot.current().as_deref(), Some("Value is not alphanumeric"));

    unit.set_value("johndoe");
    unit.evaluate().unwrap();
    assert_eq!(slot.current(), None);
}

#[test]
fn unresolvable_code_fails_the_evaluation() {
    let unit = ValidationUnit::new("")
        .with_sink(Arc::new(ErrorSlot::new()))
        .attach(Rule::min_length(1).code("missing.text").build().unwrap());
    assert!(matches!(
        unit.evaluate(),
        Err(ConfigError::UnknownErrorCode(code)) if code.as_str() == "missing.text"
    ));
}

#[test]
fn affix_and_case_builders() {
    let unit = ValidationUnit::new("HTTPS://EXAMPLE.COM")
        .starts_with("https://", true)
        .ends_with(".com", true)
        .all_uppercase()
        .not_contain("http://", true);
    assert_passes!(unit.evaluate().unwrap());

    let unit = ValidationUnit::new("https://example.org").ends_with(".com", false);
    assert_fails_with!(
        unit.evaluate().unwrap(),
        ErrorPayload::Message("Value does not end with .com".into())
    );
}

#[test]
fn equality_builders() {
    assert_passes!(ValidationUnit::new("yes").equal_to("yes").evaluate().unwrap());
    assert_fails_with!(
        ValidationUnit::new("no").equal_to("yes").evaluate().unwrap(),
        ErrorPayload::Message("Value is not equal to yes".into())
    );
    assert_fails_with!(
        ValidationUnit::new("admin").not_equal_to("admin").evaluate().unwrap(),
        ErrorPayload::Message("Value is equal to admin".into())
    );
}

#[test]
fn nested_composites_inside_a_condition() {
    let strong = Condition::all().named("password").add(
        Rule::any_of([
            Rule::contains_symbols().build().unwrap(),
            Rule::matching(r"[A-Z].*\d").build().unwrap(),
        ])
        .message("Add a symbol, or a capital followed by a digit")
        .build()
        .unwrap(),
    );

    let mut unit = ValidationUnit::new("plainpassword").attach(strong);
    let failure = unit.evaluate().unwrap().into_result().unwrap_err();
    assert_eq!(failure.condition(), Some("password"));
    assert_eq!(
        failure.message(),
        Some("Add a symbol, or a capital followed by a digit")
    );

    unit.set_value("Password1");
    assert_passes!(unit.evaluate().unwrap());
}
