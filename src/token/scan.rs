use log::{debug, warn};

use crate::token::errors::TokenizeError;
use crate::token::types::{Operator, Paren, Token};
use crate::utils::digits_to_number;

fn number(input: &str, start: usize, end: usize) -> Result<Token, TokenizeError> {
    Ok(Token::Number {
        value: digits_to_number(input, start, end)?,
        text: input[start..end].to_string(),
    })
}

/// Split `input` into number and operator tokens, in the order they appear.
///
/// Maximal runs of ASCII digits become numbers, keeping the digits as
/// written for display, and each of `+ - * / ( )`
/// becomes its own token. Every other character (letters, whitespace, `=`,
/// decimal points) is skipped, so `"1.5"` yields the two numbers `1` and
/// `5`, and `"-3"` yields a `-` operator followed by `3`.
///
/// # Errors
///
/// Returns [`TokenizeError::InvalidInput`] when nothing in the input matches.
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    debug!("Tokenizing '{}'", input);

    let mut tokens = Vec::new();
    let mut digits_start: Option<usize> = None;

    for (idx, c) in input.char_indices() {
        if c.is_ascii_digit() {
            if digits_start.is_none() {
                digits_start = Some(idx);
            }
            continue;
        }

        if let Some(start) = digits_start.take() {
            tokens.push(number(input, start, idx)?);
        }

        if let Some(op) = Operator::from_char(c) {
            tokens.push(Token::Operator(op));
        } else if c == '(' {
            tokens.push(Token::Paren(Paren::Open));
        } else if c == ')' {
            tokens.push(Token::Paren(Paren::Close));
        }
    }

    if let Some(start) = digits_start {
        tokens.push(number(input, start, input.len())?);
    }

    if tokens.is_empty() {
        warn!("No tokens found in '{}'", input);
        return Err(TokenizeError::InvalidInput(input.to_string()));
    }

    debug!("Produced {} tokens", tokens.len());
    Ok(tokens)
}
