//! End-to-end scenarios: document bytes → decode → compare → render.

mod common;

use common::decode;
use rulediff_core::compare::{compare, compare_with, CompareOptions, DuplicatePolicy};
use rulediff_core::model::{PropertyDiff, Rule, RuleDiff};
use rulediff_core::render::{render_csv, LineEnding, ReportOptions};
use serde_json::json;

fn lf_no_header() -> ReportOptions {
    ReportOptions {
        include_header: false,
        line_ending: LineEnding::Lf,
    }
}

fn only(diffs: &[RuleDiff]) -> &RuleDiff {
    assert_eq!(diffs.len(), 1, "expected exactly one diff, got {:?}", diffs);
    &diffs[0]
}

#[test]
fn test_max_length_change_round_trip() {
    let left = decode(&json!({"rules": [
        {"fieldName": "Email", "contactType": "Primary", "maxLength": 50}
    ]}));
    let right = decode(&json!({"rules": [
        {"fieldName": "Email", "contactType": "Primary", "maxLength": 100}
    ]}));

    let diffs = compare(&left.rules, &right.rules);
    let diff = only(&diffs);
    assert_eq!(diff.key(), "Email||Primary");
    assert_eq!(
        diff.property_differences(),
        &[PropertyDiff::new(
            "maxLength",
            Some("50".to_string()),
            Some("100".to_string())
        )]
    );
}

#[test]
fn test_rule_only_on_right() {
    let left = decode(&json!({"rules": []}));
    let right = decode(&json!({"rules": [{"fieldName": "Phone", "contactType": "Mobile"}]}));

    let diffs = compare(&left.rules, &right.rules);
    let diff = only(&diffs);
    assert_eq!(diff.field_name(), Some("Phone"));
    assert_eq!(diff.contact_type(), Some("Mobile"));
    assert_eq!(
        diff.property_differences(),
        &[PropertyDiff::new("RulePresence", None, Some("present".to_string()))]
    );
}

#[test]
fn test_presence_is_mirrored_never_both() {
    let a = vec![Rule::new("Zip", "Home")];
    let forward = compare(&a, &[]);
    let backward = compare(&[], &a);

    let f = only(&forward).property_differences();
    let b = only(&backward).property_differences();
    assert_eq!(f, &[PropertyDiff::only_left()]);
    assert_eq!(b, &[PropertyDiff::only_right()]);
}

#[test]
fn test_identical_rules_produce_no_diff() {
    let doc = json!({"rules": [
        {"fieldName": "Email", "contactType": "Primary", "maxLength": 50, "minLength": 3,
         "regEx": "^.+@.+$", "validationType": "Email"}
    ]});
    let left = decode(&doc);
    let right = decode(&doc);
    assert!(compare(&left.rules, &right.rules).is_empty());
}

#[test]
fn test_only_reg_ex_changed() {
    let base = Rule::new("Email", "Primary")
        .with_max_length(50)
        .with_validation_type("Email");
    let left = vec![base.clone().with_reg_ex("^a$")];
    let right = vec![base.with_reg_ex("^b$")];

    let diffs = compare(&left, &right);
    let props = only(&diffs).property_differences();
    assert_eq!(props.len(), 1);
    assert_eq!(props[0].property(), "regEx");
}

#[test]
fn test_reg_ex_surrounding_whitespace_ignored() {
    let left = vec![Rule::new("F", "C").with_reg_ex("^a$")];
    let right = vec![Rule::new("F", "C").with_reg_ex(" ^a$ ")];
    assert!(compare(&left, &right).is_empty());
}

#[test]
fn test_reg_ex_content_change_keeps_original_strings() {
    let left = vec![Rule::new("F", "C").with_reg_ex(" ^a$")];
    let right = vec![Rule::new("F", "C").with_reg_ex("^b$ ")];

    let diffs = compare(&left, &right);
    let prop = &only(&diffs).property_differences()[0];
    assert_eq!(prop.left_value(), Some(" ^a$"));
    assert_eq!(prop.right_value(), Some("^b$ "));
}

#[test]
fn test_validation_type_case_and_padding_ignored() {
    let left = vec![Rule::new("F", "C").with_validation_type("Required")];
    let right = vec![Rule::new("F", "C").with_validation_type("required ")];
    assert!(compare(&left, &right).is_empty());
}

#[test]
fn test_identity_is_case_insensitive_across_documents() {
    let left = decode(&json!({"rules": [{"FieldName": "EMAIL", "ContactType": "primary"}]}));
    let right = decode(&json!({"rules": [{"fieldname": "email", "CONTACTTYPE": "Primary"}]}));
    assert!(compare(&left.rules, &right.rules).is_empty());
}

#[test]
fn test_missing_identity_components_collide() {
    let left = decode(&json!({"rules": [{"contactType": "Mobile", "maxLength": 1}]}));
    let right = decode(&json!({"rules": [{"contactType": "mobile", "maxLength": 2}]}));

    let diffs = compare(&left.rules, &right.rules);
    let diff = only(&diffs);
    assert_eq!(diff.key(), "<null>||Mobile");
    assert_eq!(diff.field_name(), None);
}

#[test]
fn test_malformed_record_skipped_with_warning() {
    let decoded = decode(&json!({"rules": [
        {"fieldName": "Email", "contactType": "Primary"},
        {"fieldName": "Phone", "required": "yes"}
    ]}));

    assert_eq!(decoded.rules.len(), 1);
    assert_eq!(decoded.rules[0].field_name.as_deref(), Some("Email"));
    assert_eq!(decoded.warnings.len(), 1);
    assert_eq!(decoded.warnings[0].index, 1);
}

#[test]
fn test_diffs_sorted_by_key() {
    let left = vec![
        Rule::new("zeta", "x"),
        Rule::new("Alpha", "x"),
        Rule::new("mid", "x").with_max_length(1),
    ];
    let right = vec![Rule::new("beta", "x"), Rule::new("MID", "x").with_max_length(2)];

    let keys: Vec<String> = compare(&left, &right)
        .iter()
        .map(|d| d.key().to_string())
        .collect();
    assert_eq!(keys, vec!["Alpha||x", "beta||x", "mid||x", "zeta||x"]);
}

#[test]
fn test_duplicate_policy_changes_matched_rule() {
    let left = vec![
        Rule::new("Email", "Primary").with_max_length(10),
        Rule::new("Email", "Primary").with_max_length(20),
    ];
    let right = vec![Rule::new("Email", "Primary").with_max_length(10)];

    let last = compare_with(&left, &right, &CompareOptions::default());
    assert_eq!(
        only(&last).property_differences()[0].left_value(),
        Some("20")
    );

    let first = compare_with(
        &left,
        &right,
        &CompareOptions {
            duplicates: DuplicatePolicy::FirstWins,
        },
    );
    assert!(first.is_empty());
}

#[test]
fn test_multiple_properties_render_one_line_each() {
    let left = vec![Rule::new("Email", "Primary")
        .with_max_length(50)
        .with_validation_type("Email")];
    let right = vec![Rule::new("Email", "Primary")
        .with_max_length(100)
        .with_validation_type("Text")];

    let csv = render_csv(&compare(&left, &right), &lf_no_header());
    assert_eq!(
        csv,
        "Email,Primary,maxLength,50,100\nEmail,Primary,validationType,Email,Text\n"
    );
}

#[test]
fn test_csv_escapes_reg_ex_with_comma_and_quote() {
    let left = vec![Rule::new("Name", "Primary").with_reg_ex("a,\"b")];
    let right = vec![Rule::new("Name", "Primary")];

    let csv = render_csv(&compare(&left, &right), &lf_no_header());
    assert_eq!(csv, "Name,Primary,regEx,\"a,\"\"b\",\n");
}

#[test]
fn test_csv_header_and_null_as_empty() {
    let right = vec![Rule::new("Phone", "Mobile")];
    let csv = render_csv(
        &compare(&[], &right),
        &ReportOptions {
            include_header: true,
            line_ending: LineEnding::Lf,
        },
    );
    assert_eq!(
        csv,
        "FieldName,ContactType,Property,OldValue,NewValue\nPhone,Mobile,RulePresence,,present\n"
    );
}

#[test]
fn test_inputs_are_not_mutated() {
    let left = vec![Rule::new("F", "C").with_reg_ex(" x ")];
    let right = vec![Rule::new("f", "c").with_reg_ex("y")];
    let (left_before, right_before) = (left.clone(), right.clone());

    let _ = compare(&left, &right);
    assert_eq!(left, left_before);
    assert_eq!(right, right_before);
}
