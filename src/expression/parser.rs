use std::str::FromStr;

use log::{debug, warn};

use crate::expression::ast::Expression;
use crate::expression::errors::ParseError;
use crate::utils::digits_to_number;

/// Deepest tree the parser will build. Printing, folding and dropping an
/// expression all recurse over the tree, so this also bounds them.
pub const MAX_DEPTH: usize = 256;

/// Deepest the parser itself may recurse: nested parentheses, calls,
/// exponents and unary signs.
pub const MAX_NESTING: usize = 64;

type Binary = fn(Box<Expression>, Box<Expression>) -> Expression;
type Unary = fn(Box<Expression>) -> Expression;

#[derive(Debug, Clone, PartialEq)]
enum LexemeKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Bang,
    Equals,
    Comma,
    LParen,
    RParen,
}

#[derive(Debug, Clone)]
struct Lexeme {
    kind: LexemeKind,
    text: String,
    position: usize,
}

/// Length of an `e`/`E` exponent suffix (`e5`, `e+22`, `E-7`) at the start
/// of `rest`, or 0 if there is none.
fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e') | Some(b'E')) {
        return 0;
    }
    let mut len = 1;
    if matches!(bytes.get(len), Some(b'+') | Some(b'-')) {
        len += 1;
    }
    let digits = bytes
        .iter()
        .skip(len)
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 { 0 } else { len + digits }
}

fn lex(input: &str) -> Result<Vec<Lexeme>, ParseError> {
    let mut lexemes = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        let kind = if c.is_ascii_digit() || c == '.' {
            let mut end = start + c.len_utf8();
            let mut seen_dot = c == '.';
            while let Some(&(idx, next)) = chars.peek() {
                if next.is_ascii_digit() || (next == '.' && !seen_dot) {
                    seen_dot |= next == '.';
                    end = idx + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            end += exponent_len(&input[end..]);
            while chars.peek().is_some_and(|&(idx, _)| idx < end) {
                chars.next();
            }
            LexemeKind::Number(digits_to_number(input, start, end)?)
        } else if c.is_alphabetic() || c == '_' {
            let mut end = start + c.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if next.is_alphanumeric() || next == '_' {
                    end = idx + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            match &input[start..end] {
                "Infinity" => LexemeKind::Number(f64::INFINITY),
                "NaN" => LexemeKind::Number(f64::NAN),
                name => LexemeKind::Ident(name.to_string()),
            }
        } else {
            match c {
                '+' => LexemeKind::Plus,
                '-' => LexemeKind::Minus,
                '*' => LexemeKind::Star,
                '/' => LexemeKind::Slash,
                '%' => LexemeKind::Percent,
                '^' => LexemeKind::Caret,
                '!' => LexemeKind::Bang,
                '=' => LexemeKind::Equals,
                ',' => LexemeKind::Comma,
                '(' => LexemeKind::LParen,
                ')' => LexemeKind::RParen,
                other => {
                    warn!("Unexpected character '{}' at {}", other, start);
                    return Err(ParseError::UnexpectedCharacter {
                        ch: other,
                        position: start,
                    });
                }
            }
        };

        let end = chars.peek().map_or(input.len(), |&(idx, _)| idx);
        lexemes.push(Lexeme {
            kind,
            text: input[start..end].trim_end().to_string(),
            position: start,
        });
    }

    Ok(lexemes)
}

/// An expression together with the depth of its tree
type Parsed = (Expression, usize);

fn check_depth(depth: usize) -> Result<usize, ParseError> {
    if depth > MAX_DEPTH {
        warn!("Expression deeper than {} levels", MAX_DEPTH);
        return Err(ParseError::TooDeep(MAX_DEPTH));
    }
    Ok(depth)
}

fn combine(lhs: Parsed, rhs: Parsed, build: Binary) -> Result<Parsed, ParseError> {
    let depth = check_depth(lhs.1.max(rhs.1) + 1)?;
    Ok((build(Box::new(lhs.0), Box::new(rhs.0)), depth))
}

fn wrap(inner: Parsed, build: Unary) -> Result<Parsed, ParseError> {
    let depth = check_depth(inner.1 + 1)?;
    Ok((build(Box::new(inner.0)), depth))
}

/// Recursive-descent parser over the lexeme stream.
///
/// ```text
/// statement      := name "=" additive | additive
/// additive       := multiplicative (("+" | "-") multiplicative)*
/// multiplicative := implicit (("*" | "/" | "%") implicit)*
/// implicit       := unary (power)*          -- only before a name or "("
/// unary          := ("+" | "-") unary | power
/// power          := postfix ("^" unary)?
/// postfix        := primary "!"*
/// primary        := number | name "(" args ")" | name | "(" additive ")"
/// ```
///
/// Every recursive descent goes through `enter`, so input such as a few
/// thousand `(` fails with [`ParseError::TooDeep`] instead of exhausting
/// the stack.
struct Cursor {
    lexemes: Vec<Lexeme>,
    pos: usize,
    nesting: usize,
}

impl Cursor {
    fn peek(&self) -> Option<&LexemeKind> {
        self.lexemes.get(self.pos).map(|lexeme| &lexeme.kind)
    }

    fn peek_at(&self, offset: usize) -> Option<&LexemeKind> {
        self.lexemes.get(self.pos + offset).map(|lexeme| &lexeme.kind)
    }

    fn advance(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.pos).cloned();
        if lexeme.is_some() {
            self.pos += 1;
        }
        lexeme
    }

    fn unexpected(&self) -> ParseError {
        match self.lexemes.get(self.pos) {
            Some(lexeme) => ParseError::UnexpectedToken {
                found: lexeme.text.clone(),
                position: lexeme.position,
            },
            None => ParseError::UnexpectedEnd,
        }
    }

    fn expect_close(&mut self) -> Result<(), ParseError> {
        if !matches!(self.peek(), Some(LexemeKind::RParen)) {
            return Err(self.unexpected());
        }
        self.advance();
        Ok(())
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.nesting += 1;
        if self.nesting > MAX_NESTING {
            warn!("Expression nests deeper than {} levels", MAX_NESTING);
            return Err(ParseError::TooDeep(MAX_NESTING));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn statement(&mut self) -> Result<Parsed, ParseError> {
        if let (Some(LexemeKind::Ident(name)), Some(LexemeKind::Equals)) =
            (self.peek(), self.peek_at(1))
        {
            let name = name.clone();
            self.advance();
            self.advance();
            let (value, depth) = self.additive()?;
            let depth = check_depth(depth + 1)?;
            return Ok((Expression::Assign(name, Box::new(value)), depth));
        }
        self.additive()
    }

    fn additive(&mut self) -> Result<Parsed, ParseError> {
        let mut expr = self.multiplicative()?;
        loop {
            let build: Binary = match self.peek() {
                Some(LexemeKind::Plus) => Expression::Add,
                Some(LexemeKind::Minus) => Expression::Sub,
                _ => return Ok(expr),
            };
            self.advance();
            let rhs = self.multiplicative()?;
            expr = combine(expr, rhs, build)?;
        }
    }

    fn multiplicative(&mut self) -> Result<Parsed, ParseError> {
        let mut expr = self.implicit()?;
        loop {
            let build: Binary = match self.peek() {
                Some(LexemeKind::Star) => Expression::Mul,
                Some(LexemeKind::Slash) => Expression::Div,
                Some(LexemeKind::Percent) => Expression::Mod,
                _ => return Ok(expr),
            };
            self.advance();
            let rhs = self.implicit()?;
            expr = combine(expr, rhs, build)?;
        }
    }

    fn implicit(&mut self) -> Result<Parsed, ParseError> {
        let mut expr = self.unary()?;
        while matches!(
            self.peek(),
            Some(LexemeKind::Ident(_)) | Some(LexemeKind::LParen)
        ) {
            let rhs = self.power()?;
            expr = combine(expr, rhs, Expression::ImplicitMul)?;
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Parsed, ParseError> {
        let build: Unary = match self.peek() {
            Some(LexemeKind::Minus) => Expression::Neg,
            Some(LexemeKind::Plus) => Expression::Pos,
            _ => return self.power(),
        };
        self.advance();
        self.enter()?;
        let inner = self.unary()?;
        self.leave();
        wrap(inner, build)
    }

    fn power(&mut self) -> Result<Parsed, ParseError> {
        let base = self.postfix()?;
        if !matches!(self.peek(), Some(LexemeKind::Caret)) {
            return Ok(base);
        }
        self.advance();
        self.enter()?;
        let exponent = self.unary()?;
        self.leave();
        combine(base, exponent, Expression::Pow)
    }

    fn postfix(&mut self) -> Result<Parsed, ParseError> {
        let mut expr = self.primary()?;
        while matches!(self.peek(), Some(LexemeKind::Bang)) {
            self.advance();
            expr = wrap(expr, Expression::Factorial)?;
        }
        Ok(expr)
    }

    fn primary(&mut self) -> Result<Parsed, ParseError> {
        let error = self.unexpected();
        match self.advance().map(|lexeme| lexeme.kind) {
            Some(LexemeKind::Number(n)) => Ok((Expression::Number(n), 1)),
            Some(LexemeKind::Ident(name)) => {
                if matches!(self.peek(), Some(LexemeKind::LParen)) {
                    self.advance();
                    self.call(name)
                } else {
                    Ok((Expression::Symbol(name), 1))
                }
            }
            Some(LexemeKind::LParen) => {
                self.enter()?;
                let inner = self.additive()?;
                self.expect_close()?;
                self.leave();
                wrap(inner, Expression::Group)
            }
            _ => Err(error),
        }
    }

    // `name(` has been consumed
    fn call(&mut self, name: String) -> Result<Parsed, ParseError> {
        self.enter()?;
        let mut args = Vec::new();
        let mut depth = 0;
        if !matches!(self.peek(), Some(LexemeKind::RParen)) {
            loop {
                let (arg, arg_depth) = self.additive()?;
                depth = depth.max(arg_depth);
                args.push(arg);
                if !matches!(self.peek(), Some(LexemeKind::Comma)) {
                    break;
                }
                self.advance();
            }
        }
        self.expect_close()?;
        self.leave();
        Ok((Expression::Call(name, args), check_depth(depth + 1)?))
    }
}

impl Expression {
    /// Parse `input` with the usual precedence rules: postfix `!` binds
    /// tightest, then `^` (right-associative), then unary signs, then
    /// juxtaposition, then `* / %`, then `+ -`. A leading `name =` makes an
    /// assignment.
    ///
    /// # Errors
    ///
    /// Returns an error on an unknown character, a misplaced token, input
    /// that ends early (including empty input), or a tree deeper than
    /// [`MAX_DEPTH`] or nested deeper than [`MAX_NESTING`].
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        debug!("Parsing expression: '{}'", input);

        let lexemes = lex(input)?;
        let mut cursor = Cursor {
            lexemes,
            pos: 0,
            nesting: 0,
        };
        let (expr, depth) = cursor.statement()?;

        if cursor.peek().is_some() {
            let error = cursor.unexpected();
            warn!("Trailing input in '{}': {}", input, error);
            return Err(error);
        }

        debug!("Parsed expression of depth {}: {}", depth, expr);
        Ok(expr)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}
