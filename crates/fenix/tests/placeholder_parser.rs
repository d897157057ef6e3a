//! Integration tests for the placeholder grammar and document scanner

use fenix::parser::{
    DocumentSegment, MalformedReason, ParseError, PlaceholderKind, parse_placeholder,
    scan_document,
};

#[test]
fn test_simple_placeholder() {
    let invocation = parse_placeholder("{{Fenix.TodayShiftDay(-1)}}").unwrap();
    assert_eq!(invocation.raw_text, "{{Fenix.TodayShiftDay(-1)}}");
    assert_eq!(invocation.function_name, "Fenix_TodayShiftDay");
    assert!(invocation.array_indexes.is_empty());
    assert_eq!(invocation.arguments, vec!["-1"]);
    assert!(invocation.use_execution_entropy);
    assert_eq!(invocation.extra_entropy, 0);
}

#[test]
fn test_index_list_and_arguments() {
    let invocation =
        parse_placeholder("{{Fenix.RandomPositiveDecimalValue.Sum[-1,2](2, 3)}}").unwrap();
    assert_eq!(invocation.function_name, "Fenix_RandomPositiveDecimalValue_Sum");
    assert_eq!(invocation.array_indexes, vec![-1, 2]);
    assert_eq!(invocation.arguments, vec!["2", "3"]);
}

#[test]
fn test_index_list_with_signs_and_spaces() {
    let invocation = parse_placeholder("{{F[+3, -4,  5]()}}").unwrap();
    assert_eq!(invocation.array_indexes, vec![3, -4, 5]);
}

#[test]
fn test_empty_index_elements_are_skipped() {
    assert_eq!(parse_placeholder("{{F[1,,2]()}}").unwrap().array_indexes, vec![1, 2]);
    assert!(parse_placeholder("{{F[]()}}").unwrap().array_indexes.is_empty());
}

#[test]
fn test_entropy_control() {
    let invocation =
        parse_placeholder("{{Fenix.ControlledUniqueId(Date: %YYYY-MM-DD%)}(true,5)}").unwrap();
    assert_eq!(invocation.arguments, vec!["Date: %YYYY-MM-DD%"]);
    assert!(invocation.use_execution_entropy);
    assert_eq!(invocation.extra_entropy, 5);

    let invocation = parse_placeholder("{{F(x)}(false)}").unwrap();
    assert!(!invocation.use_execution_entropy);
    assert_eq!(invocation.extra_entropy, 0);

    let invocation = parse_placeholder("{{F(x)}(false,  42)}").unwrap();
    assert!(!invocation.use_execution_entropy);
    assert_eq!(invocation.extra_entropy, 42);
}

#[test]
fn test_extra_entropy_accepts_full_u64() {
    let invocation = parse_placeholder("{{F()}(true,18446744073709551615)}").unwrap();
    assert_eq!(invocation.extra_entropy, u64::MAX);
}

#[test]
fn test_empty_argument_list_is_normalized() {
    assert!(parse_placeholder("{{Fenix.TodayShiftDay()}}").unwrap().arguments.is_empty());
    assert!(parse_placeholder("{{Fenix.TodayShiftDay(   )}}").unwrap().arguments.is_empty());
}

#[test]
fn test_empty_arguments_between_commas_are_kept() {
    let invocation = parse_placeholder("{{F( , )}}").unwrap();
    assert_eq!(invocation.arguments, vec!["", ""]);
}

#[test]
fn test_arguments_may_contain_parentheses() {
    let invocation =
        parse_placeholder("{{Fenix.ControlledUniqueId(%a(5; 11)%-%A(2; 3)%)}}").unwrap();
    assert_eq!(invocation.arguments, vec!["%a(5; 11)%-%A(2; 3)%"]);
}

#[test]
fn test_placeholder_inside_other_text() {
    let invocation = parse_placeholder("Total: {{Fenix.TodayShiftDay(1)}} days").unwrap();
    assert_eq!(invocation.raw_text, "{{Fenix.TodayShiftDay(1)}}");
}

#[test]
fn test_first_grammatical_placeholder_wins() {
    let invocation = parse_placeholder("{{ not one }} then {{Second.Call(1)}}").unwrap();
    assert_eq!(invocation.function_name, "Second_Call");
}

#[test]
fn test_reparse_is_identical() {
    let text = "{{Fenix.RandomPositiveDecimalValue[3](2, 3, 4, 4)}(false, 9)}";
    assert_eq!(parse_placeholder(text), parse_placeholder(text));
}

#[test]
fn test_display_is_raw_text() {
    let invocation = parse_placeholder("{{Fenix.TodayShiftDay( 2 )}}").unwrap();
    assert_eq!(invocation.to_string(), "{{Fenix.TodayShiftDay( 2 )}}");
}

#[test]
fn test_no_match_carries_input() {
    assert_eq!(
        parse_placeholder("Fenix.TodayShiftDay(-1)"),
        Err(ParseError::NoMatch {
            text: "Fenix.TodayShiftDay(-1)".to_string()
        })
    );
}

#[test]
fn test_missing_argument_list_is_no_match() {
    assert!(matches!(
        parse_placeholder("{{Fenix.TodayShiftDay}}"),
        Err(ParseError::NoMatch { .. })
    ));
}

#[test]
fn test_unrepresentable_index_is_malformed() {
    assert_eq!(
        parse_placeholder("{{F[99999999999999999999]()}}"),
        Err(ParseError::MalformedPlaceholder {
            placeholder: "{{F[99999999999999999999]()}}".to_string(),
            token: "99999999999999999999".to_string(),
            reason: MalformedReason::ArrayIndex,
        })
    );
    assert!(matches!(
        parse_placeholder("{{F[2, -]()}}"),
        Err(ParseError::MalformedPlaceholder {
            reason: MalformedReason::ArrayIndex,
            ..
        })
    ));
}

#[test]
fn test_misplaced_sign_or_space_in_index_is_no_match() {
    for text in ["{{F[1-2]()}}", "{{F[1 2]()}}", "{{F[--1]()}}", "{{F[+ 1]()}}"] {
        assert!(
            matches!(parse_placeholder(text), Err(ParseError::NoMatch { .. })),
            "{text}"
        );
    }
}

#[test]
fn test_overflowing_extra_entropy_is_malformed() {
    let result = parse_placeholder("{{F()}(true,18446744073709551616)}");
    assert!(matches!(
        result,
        Err(ParseError::MalformedPlaceholder {
            reason: MalformedReason::ExtraEntropy,
            ..
        })
    ));
}

#[test]
fn test_scan_splits_literals_and_placeholders() {
    let text = "Due {{Fenix.TodayShiftDay(3)}} for {{Customer.TestData.Name}}.";
    let segments = scan_document(text);
    assert_eq!(segments.len(), 5);
    assert_eq!(segments[0], DocumentSegment::Literal("Due ".to_string()));
    match &segments[1] {
        DocumentSegment::Placeholder {
            span,
            kind: PlaceholderKind::Function(invocation),
        } => {
            assert_eq!(&text[span.clone()], "{{Fenix.TodayShiftDay(3)}}");
            assert_eq!(invocation.function_name, "Fenix_TodayShiftDay");
        }
        other => panic!("expected function placeholder, got {other:?}"),
    }
    match &segments[3] {
        DocumentSegment::Placeholder {
            kind: PlaceholderKind::TestData { column, .. },
            ..
        } => assert_eq!(column.as_deref(), Some("Name")),
        other => panic!("expected test data reference, got {other:?}"),
    }
    assert_eq!(segments[4], DocumentSegment::Literal(".".to_string()));
}

#[test]
fn test_scan_finds_entropy_form_without_double_brace() {
    let segments = scan_document("id={{Fenix.ControlledUniqueId(%nnn%)}(true,5)}!");
    assert_eq!(segments.len(), 3);
    assert!(matches!(
        &segments[1],
        DocumentSegment::Placeholder {
            kind: PlaceholderKind::Function(invocation),
            ..
        } if invocation.extra_entropy == 5
    ));
}

#[test]
fn test_scan_marks_malformed_text() {
    let segments = scan_document("a {{Broken}} b");
    assert_eq!(segments.len(), 3);
    match &segments[1] {
        DocumentSegment::Placeholder {
            span,
            kind: PlaceholderKind::Malformed { raw_text, error },
        } => {
            assert_eq!(*span, 2..12);
            assert_eq!(raw_text, "{{Broken}}");
            assert!(matches!(error, ParseError::NoMatch { .. }));
        }
        other => panic!("expected malformed placeholder, got {other:?}"),
    }
}

#[test]
fn test_scan_keeps_unterminated_opening_as_literal() {
    assert_eq!(
        scan_document("a {{ oops"),
        vec![DocumentSegment::Literal("a {{ oops".to_string())]
    );
}

#[test]
fn test_scan_empty_document() {
    assert!(scan_document("").is_empty());
}
