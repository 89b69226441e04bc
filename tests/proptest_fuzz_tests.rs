//! Property-based fuzzing tests for the minipas pipeline
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. The tokeniser and parser never panic on arbitrary input
//! 2. Generated expressions evaluate to an independently computed result
//! 3. The renderers reproduce the shape the generator built

use std::collections::HashMap;

use minipas::{
    evaluate_expression, interpret_program, to_postfix, to_sexpr, Error, Parser, Tokeniser,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break the tokeniser
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,300}").unwrap()
}

/// Generate sequences of plausible minipas tokens in random order
fn token_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(soup_token(), 0..40).prop_map(|tokens| tokens.join(" "))
}

fn soup_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("BEGIN".to_string()),
        Just("END".to_string()),
        Just("DIV".to_string()),
        Just(":=".to_string()),
        Just(";".to_string()),
        Just(".".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        "[a-zA-Z][a-zA-Z0-9]{0,4}",
        (0i64..1000).prop_map(|n| n.to_string()),
    ]
}

/// Expected result of evaluating a generated expression
#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    Value(i64),
    DivisionByZero,
    Overflow,
}

/// A fully parenthesised expression with its rendered forms and result
#[derive(Debug, Clone)]
struct GenExpr {
    source: String,
    sexpr: String,
    postfix: String,
    outcome: Outcome,
}

fn combine(left: GenExpr, op: char, right: GenExpr) -> GenExpr {
    let outcome = match (left.outcome, right.outcome) {
        (Outcome::Value(l), Outcome::Value(r)) => {
            let result = match op {
                '+' => l.checked_add(r),
                '-' => l.checked_sub(r),
                '*' => l.checked_mul(r),
                _ if r == 0 => None,
                _ => l.checked_div(r),
            };
            match result {
                Some(v) => Outcome::Value(v),
                None if op == '/' && r == 0 => Outcome::DivisionByZero,
                None => Outcome::Overflow,
            }
        }
        (Outcome::Value(_), failed) => failed,
        (failed, _) => failed,
    };

    GenExpr {
        source: format!("({} {} {})", left.source, op, right.source),
        sexpr: format!("({} {} {})", op, left.sexpr, right.sexpr),
        postfix: format!("{} {} {}", left.postfix, right.postfix, op),
        outcome,
    }
}

fn generated_expression() -> impl Strategy<Value = GenExpr> {
    let leaf = (0i64..10_000).prop_map(|n| GenExpr {
        source: n.to_string(),
        sexpr: n.to_string(),
        postfix: n.to_string(),
        outcome: Outcome::Value(n),
    });

    leaf.prop_recursive(5, 32, 2, |inner| {
        (
            inner.clone(),
            prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')],
            inner,
        )
            .prop_map(|(l, op, r)| combine(l, op, r))
    })
}

/// Straight-line programs assigning literals to a handful of names
fn assignment_program() -> impl Strategy<Value = (String, HashMap<String, i64>)> {
    let name = prop_oneof![Just("a"), Just("b"), Just("Total"), Just("x1"), Just("COUNT")];
    prop::collection::vec((name, 0i64..1_000_000), 0..12).prop_map(|assignments| {
        let mut expected = HashMap::new();
        let statements: Vec<String> = assignments
            .iter()
            .map(|(name, value)| {
                expected.insert(name.to_ascii_lowercase(), *value);
                format!("{} := {}", name, value)
            })
            .collect();
        (format!("BEGIN {} END.", statements.join("; ")), expected)
    })
}

// =============================================================================
// TOKENISER / PARSER FUZZ TESTS
// =============================================================================

proptest! {
    /// The tokeniser should never panic on arbitrary input
    #[test]
    fn tokeniser_never_panics(source in arbitrary_source_string()) {
        let _ = Tokeniser::new(&source).tokenize();
    }

    /// A successful tokenisation always ends with exactly one Eof
    #[test]
    fn tokenize_ends_with_eof(source in token_soup()) {
        if let Ok(tokens) = Tokeniser::new(&source).tokenize() {
            let eofs = tokens.iter().filter(|t| t.kind == minipas::TokenKind::Eof).count();
            prop_assert_eq!(eofs, 1);
            prop_assert_eq!(&tokens.last().unwrap().kind, &minipas::TokenKind::Eof);
        }
    }

    /// The parser should never panic on shuffled tokens
    #[test]
    fn parser_never_panics(source in token_soup()) {
        if let Ok(mut parser) = Parser::new(&source) {
            let _ = parser.parse_program();
        }
        if let Ok(mut parser) = Parser::new(&source) {
            let _ = parser.parse_expression();
        }
    }

    /// Unbalanced parentheses are reported, never panicked on
    #[test]
    fn parser_handles_unbalanced_parens(opens in 0usize..50, closes in 0usize..50) {
        let source = format!("{}1{}", "(".repeat(opens), ")".repeat(closes));
        let result = evaluate_expression(&source);
        if opens == closes {
            prop_assert_eq!(result, Ok(1));
        } else {
            prop_assert!(matches!(result, Err(Error::SyntaxError { .. })), "unexpected result: {:?}", result);
        }
    }
}

// =============================================================================
// EVALUATION PROPERTIES
// =============================================================================

proptest! {
    /// Generated expressions evaluate to the independently computed outcome
    #[test]
    fn expression_matches_model(expr in generated_expression()) {
        let result = evaluate_expression(&expr.source);
        match expr.outcome {
            Outcome::Value(v) => prop_assert_eq!(result, Ok(v)),
            Outcome::DivisionByZero => prop_assert_eq!(result, Err(Error::DivisionByZero)),
            Outcome::Overflow => {
                prop_assert!(matches!(result, Err(Error::ArithmeticOverflow { .. })), "unexpected result: {:?}", result);
            }
        }
    }

    /// Both renderers reproduce the generated tree shape
    #[test]
    fn renderers_match_generated_shape(expr in generated_expression()) {
        prop_assert_eq!(to_sexpr(&expr.source).unwrap(), expr.sexpr);
        prop_assert_eq!(to_postfix(&expr.source).unwrap(), expr.postfix);
    }

    /// Straight-line assignments leave the last write to each name
    #[test]
    fn program_scope_matches_model((source, expected) in assignment_program()) {
        prop_assert_eq!(interpret_program(&source).unwrap(), expected);
    }

    /// Keyword and identifier case never changes the result
    #[test]
    fn keyword_case_is_irrelevant((source, expected) in assignment_program()) {
        prop_assert_eq!(interpret_program(&source.to_lowercase()).unwrap(), expected.clone());
        prop_assert_eq!(interpret_program(&source.to_uppercase()).unwrap(), expected);
    }

    /// Subtraction chains associate to the left
    #[test]
    fn subtraction_is_left_associative(nums in prop::collection::vec(0i64..1000, 1..10)) {
        let source = nums.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" - ");
        let expected = nums[1..].iter().fold(nums[0], |acc, n| acc - n);
        prop_assert_eq!(evaluate_expression(&source), Ok(expected));
    }
}
