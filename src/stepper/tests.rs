use crate::expression::{MAX_NESTING, ParseError};
use crate::stepper::{Stepper, StepperError, evaluate};
use crate::symbolic::Parser;
use crate::token::{Operator, Token, TokenizeError, tokenize};
use crate::trace::{EvaluationResult, INVALID_EQUATION, TraceStep};

/// Stands in for an external symbolic library
struct Echo;

impl Parser for Echo {
    fn canonical_form(&self, input: &str) -> Result<String, ParseError> {
        Ok(format!("<{}>", input))
    }
}

struct Unavailable;

impl Parser for Unavailable {
    fn canonical_form(&self, _input: &str) -> Result<String, ParseError> {
        Err(ParseError::Backend("not loaded".to_string()))
    }
}

fn steps_for(input: &str) -> Vec<TraceStep> {
    match Stepper::new().solve(input) {
        EvaluationResult::Success(steps) => steps,
        EvaluationResult::Failure(step) => panic!("'{}' failed: {}", input, step),
    }
}

#[test]
fn test_left_to_right_ignores_precedence() {
    let result = Stepper::new().solve("12+3*4-5/2");
    assert_eq!(result.final_result(), Some("28.5"));
}

#[test]
fn test_full_trace() {
    let steps = steps_for("12+3*4-5/2");
    let expected = vec![
        TraceStep::new("Original Expression", "12 + 3 * 4 - 5 / 2"),
        TraceStep::new("Step 1", "12"),
        TraceStep::new("Step 2", "12 +"),
        TraceStep::new("Step 3", "12 + 3"),
        TraceStep::new("Step 4", "12 + 3 *"),
        TraceStep::new("Step 5", "12 + 3 * 4"),
        TraceStep::new("Step 6", "12 + 3 * 4 -"),
        TraceStep::new("Step 7", "12 + 3 * 4 - 5"),
        TraceStep::new("Step 8", "12 + 3 * 4 - 5 /"),
        TraceStep::new("Step 9", "12 + 3 * 4 - 5 / 2"),
        TraceStep::new("Final Result", "28.5"),
    ];
    assert_eq!(steps, expected);
}

#[test]
fn test_step_count_is_tokens_plus_two() {
    for input in ["1", "1+2", "12+3*4-5/2", "5++3", "2*(3+4)"] {
        let token_count = tokenize(input).map(|tokens| tokens.len()).unwrap_or(0);
        assert_eq!(steps_for(input).len(), token_count + 2, "input: {}", input);
    }
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    let result = Stepper::new().solve("7/0");
    assert!(result.is_success());
    assert_eq!(result.final_result(), Some("Infinity"));

    let result = Stepper::new().solve("0/0");
    assert_eq!(result.final_result(), Some("NaN"));
}

#[test]
fn test_infinity_propagates() {
    let result = Stepper::new().solve("7/0*0");
    assert_eq!(result.final_result(), Some("NaN"));

    let result = Stepper::new().solve("7/0-1");
    assert_eq!(result.final_result(), Some("Infinity"));
}

#[test]
fn test_empty_input_is_invalid() {
    let result = Stepper::new().solve("");
    assert_eq!(
        result,
        EvaluationResult::Failure(TraceStep::new("Error", "Invalid equation!"))
    );
}

#[test]
fn test_letters_only_is_invalid() {
    let result = Stepper::new().solve("abc");
    assert_eq!(result, EvaluationResult::failure(INVALID_EQUATION));
    assert_eq!(result.steps().len(), 1);
}

#[test]
fn test_consecutive_operators_keep_the_last() {
    let steps = steps_for("5++3");
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0], TraceStep::new("Original Expression", "5 + +3"));
    assert_eq!(steps[3], TraceStep::new("Step 3", "5 + +"));
    assert_eq!(steps[5], TraceStep::new("Final Result", "8"));
}

#[test]
fn test_last_pending_operator_wins() {
    let result = Stepper::new().solve("6*-2");
    assert_eq!(result.final_result(), Some("4"));
}

#[test]
fn test_leading_minus_starts_from_zero() {
    let result = Stepper::new().solve("-5+2");
    assert_eq!(result.final_result(), Some("-3"));
}

#[test]
fn test_parentheses_are_shown_but_not_grouped() {
    let steps = steps_for("2*(3+4)");
    assert_eq!(steps[3], TraceStep::new("Step 3", "2 * ("));
    assert_eq!(steps[7], TraceStep::new("Step 7", "2 * ( 3 + 4 )"));
    assert_eq!(steps[8], TraceStep::new("Final Result", "10"));
}

#[test]
fn test_number_without_operator_replaces_total() {
    let result = Stepper::new().solve("3 4");
    // "3 4" is not a valid expression for the parser
    assert_eq!(result, EvaluationResult::failure(INVALID_EQUATION));

    let number = |value: f64, text: &str| Token::Number {
        value,
        text: text.to_string(),
    };
    let steps = evaluate(&[number(3.0, "3"), number(4.0, "4")]);
    assert_eq!(
        steps.map(|steps| steps.last().cloned()),
        Ok(Some(TraceStep::new("Final Result", "4")))
    );
}

#[test]
fn test_unparseable_input_is_invalid() {
    let result = Stepper::new().solve("2x+3=7");
    assert_eq!(result, EvaluationResult::failure(INVALID_EQUATION));
}

#[test]
fn test_deterministic() {
    let stepper = Stepper::new();
    let first = stepper.solve("9-4*2/7+1");
    for _ in 0..10 {
        assert_eq!(stepper.solve("9-4*2/7+1"), first);
    }
}

#[test]
fn test_injected_parser_supplies_original_expression() {
    let stepper = Stepper::with_parser(Echo);
    let steps = stepper.trace("1+1");
    assert_eq!(
        steps.map(|steps| steps.first().cloned()),
        Ok(Some(TraceStep::new("Original Expression", "<1+1>")))
    );
}

#[test]
fn test_parser_failure_is_reported() {
    let stepper = Stepper::with_parser(Unavailable);
    assert_eq!(
        stepper.trace("1+1"),
        Err(StepperError::Parse(ParseError::Backend(
            "not loaded".to_string()
        )))
    );
    assert_eq!(stepper.solve("1+1"), EvaluationResult::failure(INVALID_EQUATION));
}

#[test]
fn test_trace_reports_tokenize_error() {
    let stepper = Stepper::with_parser(Echo);
    assert_eq!(
        stepper.trace("xyz"),
        Err(StepperError::Tokenize(TokenizeError::InvalidInput(
            "xyz".to_string()
        )))
    );
}

#[test]
fn test_operators_only_have_no_operand() {
    let tokens = [Token::Operator(Operator::Add), Token::Operator(Operator::Mul)];
    assert_eq!(evaluate(&tokens), Err(StepperError::NoOperand));

    let stepper = Stepper::with_parser(Echo);
    assert_eq!(stepper.solve("+*"), EvaluationResult::failure(INVALID_EQUATION));
}

#[test]
fn test_solve_all_keeps_input_order() {
    let stepper = Stepper::new();
    let inputs = ["1+1", "", "7/0", "12+3*4-5/2"];
    let results = stepper.solve_all(&inputs);

    assert_eq!(results.len(), inputs.len());
    assert_eq!(results[0].final_result(), Some("2"));
    assert_eq!(results[1], EvaluationResult::failure(INVALID_EQUATION));
    assert_eq!(results[2].final_result(), Some("Infinity"));
    assert_eq!(results[3].final_result(), Some("28.5"));
}

#[test]
fn test_large_and_tiny_results_use_exponent_form() {
    let result = Stepper::new().solve("99999999999999999999*100");
    assert_eq!(result.final_result(), Some("1e+22"));

    let result = Stepper::new().solve("1/10000000");
    assert_eq!(result.final_result(), Some("1e-7"));
}

#[test]
fn test_steps_show_digits_as_typed() {
    let steps = steps_for("12345678901234567890");
    assert_eq!(steps[1], TraceStep::new("Step 1", "12345678901234567890"));

    let steps = steps_for("007+1");
    assert_eq!(steps[1], TraceStep::new("Step 1", "007"));
    assert_eq!(steps[3], TraceStep::new("Step 3", "007 + 1"));
    assert_eq!(steps[4], TraceStep::new("Final Result", "8"));
}

#[test]
fn test_deep_parentheses_are_invalid() {
    let input = format!("{}1{}", "(".repeat(2000), ")".repeat(2000));
    let stepper = Stepper::new();
    assert_eq!(
        stepper.trace(&input),
        Err(StepperError::Parse(ParseError::TooDeep(MAX_NESTING)))
    );
    assert_eq!(stepper.solve(&input), EvaluationResult::failure(INVALID_EQUATION));
}

#[test]
fn test_long_sign_chain_is_invalid() {
    let input = format!("{}5", "-".repeat(50000));
    let result = Stepper::new().solve(&input);
    assert_eq!(result, EvaluationResult::failure(INVALID_EQUATION));
}

#[test]
fn test_moderate_nesting_still_solves() {
    let input = format!("{}1+2{}", "(".repeat(40), ")".repeat(40));
    let result = Stepper::new().solve(&input);
    assert_eq!(result.final_result(), Some("3"));
}

#[test]
fn test_calls_modulo_factorial_and_assignment_are_accepted() {
    let steps = steps_for("sqrt(4)+1");
    assert_eq!(steps[0], TraceStep::new("Original Expression", "sqrt(4) + 1"));
    assert_eq!(steps.last(), Some(&TraceStep::new("Final Result", "5")));

    let steps = steps_for("10%3");
    assert_eq!(steps[0], TraceStep::new("Original Expression", "10 % 3"));
    assert_eq!(steps.last(), Some(&TraceStep::new("Final Result", "3")));

    let steps = steps_for("3!");
    assert_eq!(steps[0], TraceStep::new("Original Expression", "3!"));
    assert_eq!(steps.last(), Some(&TraceStep::new("Final Result", "3")));

    let steps = steps_for("x=5");
    assert_eq!(steps[0], TraceStep::new("Original Expression", "x = 5"));
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[2], TraceStep::new("Final Result", "5"));
}
