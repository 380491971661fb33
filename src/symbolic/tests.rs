use std::cell::Cell;

use crate::expression::ParseError;
use crate::symbolic::{MAX_SIMPLIFY_ITERATIONS, Parser, Simplifier, SymbolicEngine, simplify_trace};
use crate::trace::{EvaluationResult, INVALID_EQUATION, TraceStep};

/// Appends a mark on every call, so it never settles
struct Growing {
    calls: Cell<usize>,
}

impl Simplifier for Growing {
    fn simplify(&self, expression: &str) -> Result<String, ParseError> {
        self.calls.set(self.calls.get() + 1);
        Ok(format!("{}'", expression))
    }
}

struct Verbatim;

impl Parser for Verbatim {
    fn canonical_form(&self, input: &str) -> Result<String, ParseError> {
        Ok(input.to_string())
    }
}

struct Broken;

impl Simplifier for Broken {
    fn simplify(&self, _expression: &str) -> Result<String, ParseError> {
        Err(ParseError::Backend("offline".to_string()))
    }
}

#[test]
fn test_engine_canonical_form() {
    let engine = SymbolicEngine;
    assert_eq!(
        engine.canonical_form("12+3*4-5/2"),
        Ok("12 + 3 * 4 - 5 / 2".to_string())
    );
    assert!(engine.canonical_form("2x+3=7").is_err());
}

#[test]
fn test_simplify_trace_respects_precedence() {
    let engine = SymbolicEngine;
    let result = simplify_trace(&engine, &engine, "12+3*4-5/2");
    assert_eq!(
        result,
        EvaluationResult::Success(vec![
            TraceStep::new("Original Expression", "12 + 3 * 4 - 5 / 2"),
            TraceStep::new("Simplification 1", "12 + 12 - 2.5"),
            TraceStep::new("Simplification 2", "24 - 2.5"),
            TraceStep::new("Simplification 3", "21.5"),
            TraceStep::new("Final Result", "21.5"),
        ])
    );
}

#[test]
fn test_simplify_trace_keeps_symbols() {
    let engine = SymbolicEngine;
    let result = simplify_trace(&engine, &engine, "2x + 3*1");
    assert_eq!(result.final_result(), Some("2 * x + 3"));
}

#[test]
fn test_simplify_trace_already_simple() {
    let engine = SymbolicEngine;
    let result = simplify_trace(&engine, &engine, "x");
    assert_eq!(
        result,
        EvaluationResult::Success(vec![
            TraceStep::new("Original Expression", "x"),
            TraceStep::new("Final Result", "x"),
        ])
    );
}

#[test]
fn test_simplify_trace_division_by_zero() {
    let engine = SymbolicEngine;
    let result = simplify_trace(&engine, &engine, "7/0 + 1");
    assert_eq!(result.final_result(), Some("Infinity"));
}

#[test]
fn test_simplify_trace_is_bounded() {
    let growing = Growing {
        calls: Cell::new(0),
    };
    let result = simplify_trace(&Verbatim, &growing, "a");
    assert_eq!(growing.calls.get(), MAX_SIMPLIFY_ITERATIONS);
    assert_eq!(result.steps().len(), MAX_SIMPLIFY_ITERATIONS + 2);
    assert_eq!(result.final_result(), Some("a'''''"));
}

#[test]
fn test_simplify_trace_reports_invalid_input() {
    let engine = SymbolicEngine;
    let result = simplify_trace(&engine, &engine, "1 +");
    assert_eq!(result, EvaluationResult::failure(INVALID_EQUATION));
}

#[test]
fn test_simplify_trace_backend_failure() {
    let result = simplify_trace(&Verbatim, &Broken, "1 + 1");
    assert_eq!(result, EvaluationResult::failure(INVALID_EQUATION));
}

#[test]
fn test_simplify_trace_folds_calls_and_factorials() {
    let engine = SymbolicEngine;
    let result = simplify_trace(&engine, &engine, "sqrt(4)+1");
    assert_eq!(
        result,
        EvaluationResult::Success(vec![
            TraceStep::new("Original Expression", "sqrt(4) + 1"),
            TraceStep::new("Simplification 1", "2 + 1"),
            TraceStep::new("Simplification 2", "3"),
            TraceStep::new("Final Result", "3"),
        ])
    );

    let result = simplify_trace(&engine, &engine, "3!+10%4");
    assert_eq!(result.final_result(), Some("8"));
}

#[test]
fn test_simplify_trace_rejects_deep_input() {
    let engine = SymbolicEngine;
    let input = format!("{}1{}", "(".repeat(2000), ")".repeat(2000));
    let result = simplify_trace(&engine, &engine, &input);
    assert_eq!(result, EvaluationResult::failure(INVALID_EQUATION));
}
