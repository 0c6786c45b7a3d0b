//! Construct-level integration tests: source in, aligned source out.

use align::align::testing::align_source;
use align::AlignOptions;
use rstest::rstest;

fn ternary_on() -> AlignOptions {
    AlignOptions {
        ternary_expression: Some(true),
        ..AlignOptions::default()
    }
}

fn or_on() -> AlignOptions {
    AlignOptions {
        or_expression: Some(true),
        ..AlignOptions::default()
    }
}

#[rstest]
#[case::variable_declarations(
    "var a = 1;\nvar bb = 2;\n",
    "var a  = 1;\nvar bb = 2;\n"
)]
#[case::preexisting_padding_normalized(
    "var a   = 1;\nvar bb  = 2;\n",
    "var a  = 1;\nvar bb = 2;\n"
)]
#[case::assignments(
    "x = 1;\nlonger = 2;\n",
    "x      = 1;\nlonger = 2;\n"
)]
#[case::multiline_object(
    "var o = {\n  a: 1,\n  bb: 22,\n  ccc: 333\n};\n",
    "var o = {\n  a:   1,\n  bb:  22,\n  ccc: 333\n};\n"
)]
#[case::single_line_object_untouched(
    "var o = { a: 1, bb: 22 };\n",
    "var o = { a: 1, bb: 22 };\n"
)]
#[case::blank_line_splits_groups(
    "var a = 1;\n\nvar bb = 2;\n",
    "var a = 1;\n\nvar bb = 2;\n"
)]
#[case::comment_line_splits_groups(
    "var a = 1;\n// note\nvar bb = 2;\n",
    "var a = 1;\n// note\nvar bb = 2;\n"
)]
#[case::other_statement_breaks_run(
    "var a = 1;\nfoo.bar;\nvar bb = 2;\n",
    "var a = 1;\nfoo.bar;\nvar bb = 2;\n"
)]
#[case::declarators_across_lines(
    "var a = 1,\n    bb = 2;\n",
    "var a  = 1,\n    bb = 2;\n"
)]
#[case::declaration_without_initializer_splits(
    "var a = 1;\nvar b;\nvar cc = 3;\n",
    "var a = 1;\nvar b;\nvar cc = 3;\n"
)]
fn test_default_alignment(#[case] source: &str, #[case] expected: &str) {
    let aligned = align_source(source, &AlignOptions::default()).unwrap();
    assert_eq!(aligned, expected);
}

#[rstest]
#[case::conditions_and_results(
    "a ? b : c;\nlonger ? dd : e;\n",
    "a      ? b  : c;\nlonger ? dd : e;\n"
)]
#[case::blank_line_splits_ternaries(
    "a ? b : c;\n\nlonger ? d : e;\n",
    "a ? b : c;\n\nlonger ? d : e;\n"
)]
fn test_ternary_alignment(#[case] source: &str, #[case] expected: &str) {
    let aligned = align_source(source, &ternary_on()).unwrap();
    assert_eq!(aligned, expected);
}

#[rstest]
#[case::two_chains(
    "a || b;\nxx || yy || zz;\n",
    "a  || b;\nxx || yy || zz;\n"
)]
#[case::three_chains_ragged(
    "a || b;\nxx || yy || zz;\nfoo || z;\n",
    "a   || b;\nxx  || yy || zz;\nfoo || z;\n"
)]
fn test_or_alignment(#[case] source: &str, #[case] expected: &str) {
    let aligned = align_source(source, &or_on()).unwrap();
    assert_eq!(aligned, expected);
}

#[rstest]
#[case::declarations("var a = 1;\nvar bb = 2;\nvar ccc = 3;\n")]
#[case::assignments("x = 1;\nlonger = 2;\n")]
#[case::objects("var o = {\n  a: 1,\n  bb: 22\n};\n")]
fn test_alignment_is_idempotent(#[case] source: &str) {
    let once = align_source(source, &AlignOptions::default()).unwrap();
    let twice = align_source(&once, &AlignOptions::default()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_second_occurrence_aligns_independently() {
    let source = "aaaa || b || c;\nx || yy || z;\n";
    let aligned = align_source(source, &or_on()).unwrap();
    // First occurrences share a column, second occurrences share their
    // own, uninfluenced by the first group's width.
    assert_eq!(aligned, "aaaa || b  || c;\nx    || yy || z;\n");
}

#[test]
fn test_everything_disabled_is_identity() {
    let source = "var a = 1;\nvar bb = 2;\nx = 3;\nlonger = 4;\n";
    let options = AlignOptions {
        object_expression: Some(false),
        variable_declaration: Some(false),
        assignment_expression: Some(false),
        ternary_expression: Some(false),
        or_expression: Some(false),
    };
    assert_eq!(align_source(source, &options).unwrap(), source);
}

#[test]
fn test_options_from_host_json() {
    let options =
        AlignOptions::from_json(r#"{"VariableDeclaration": 0, "OrExpression": 1}"#).unwrap();
    let source = "var a = 1;\nvar bb = 2;\n";
    assert_eq!(align_source(source, &options).unwrap(), source);
}
