use log::debug;

use crate::expression::ast::Expression;

#[inline]
fn is_exactly(value: Option<f64>, expected: f64) -> bool {
    value.is_some_and(|v| v == expected)
}

/// `n!` for non-negative integers; overflows to `Infinity` past `170!`
fn factorial(value: f64) -> Option<f64> {
    if value < 0.0 || value.fract() != 0.0 {
        return None;
    }
    if value > 170.0 {
        return Some(f64::INFINITY);
    }
    Some((1..=value as u32).map(f64::from).product())
}

/// Built-in single-argument functions that fold when their argument is a
/// literal. `log` is the natural logarithm.
fn call_builtin(name: &str, args: &[f64]) -> Option<f64> {
    let [x] = args else {
        return None;
    };
    let f: fn(f64) -> f64 = match name {
        "sqrt" => f64::sqrt,
        "abs" => f64::abs,
        "exp" => f64::exp,
        "log" => f64::ln,
        "sin" => f64::sin,
        "cos" => f64::cos,
        "tan" => f64::tan,
        "floor" => f64::floor,
        "ceil" => f64::ceil,
        "round" => f64::round,
        _ => return None,
    };
    Some(f(*x))
}

impl Expression {
    /// Numeric value of a literal, looking through unary signs.
    /// Parenthesized literals are not literals until the parentheses are
    /// dropped, so that step stays visible.
    pub fn literal(&self) -> Option<f64> {
        match self {
            Expression::Number(n) => Some(*n),
            Expression::Neg(inner) => inner.literal().map(|v| -v),
            Expression::Pos(inner) => inner.literal(),
            _ => None,
        }
    }

    /// One simplification pass.
    ///
    /// Folds every operation whose operands are already literals (IEEE-754,
    /// so `7 / 0` becomes `Infinity`), drops parentheses around atoms,
    /// removes neutral operands (`x + 0`, `x * 1`, `x / 1`, `x ^ 1` and
    /// friends) and spells juxtaposition as explicit `*`. Factorials of
    /// whole numbers and the built-in functions (`sqrt`, `abs`, `exp`,
    /// `log`, `sin`, `cos`, `tan`, `floor`, `ceil`, `round`) fold too;
    /// unknown calls keep their name. Operations that
    /// only become foldable through this pass are left for the next one, so
    /// repeated passes show the reduction one layer at a time.
    pub fn simplify_once(&self) -> Expression {
        let result = match self {
            Expression::Number(_) | Expression::Symbol(_) => self.clone(),
            Expression::Neg(inner) => match inner.literal() {
                Some(v) => Expression::Number(-v),
                None => Expression::Neg(Box::new(inner.simplify_once())),
            },
            Expression::Pos(inner) => match inner.literal() {
                Some(v) => Expression::Number(v),
                None => inner.simplify_once(),
            },
            Expression::Group(inner) => match inner.as_ref() {
                Expression::Symbol(_) | Expression::Group(_) => inner.simplify_once(),
                other => match other.literal() {
                    Some(v) => Expression::Number(v),
                    None => Expression::Group(Box::new(other.simplify_once())),
                },
            },
            Expression::Add(l, r) => fold_binary(l, r, |a, b| a + b, Expression::Add, |l, r| {
                if is_exactly(r, 0.0) {
                    Some(Side::Left)
                } else if is_exactly(l, 0.0) {
                    Some(Side::Right)
                } else {
                    None
                }
            }),
            Expression::Sub(l, r) => fold_binary(l, r, |a, b| a - b, Expression::Sub, |_, r| {
                is_exactly(r, 0.0).then_some(Side::Left)
            }),
            Expression::Mul(l, r) | Expression::ImplicitMul(l, r) => {
                fold_binary(l, r, |a, b| a * b, Expression::Mul, |l, r| {
                    if is_exactly(r, 1.0) {
                        Some(Side::Left)
                    } else if is_exactly(l, 1.0) {
                        Some(Side::Right)
                    } else {
                        None
                    }
                })
            }
            Expression::Div(l, r) => fold_binary(l, r, |a, b| a / b, Expression::Div, |_, r| {
                is_exactly(r, 1.0).then_some(Side::Left)
            }),
            Expression::Mod(l, r) => fold_binary(l, r, |a, b| a % b, Expression::Mod, |_, _| None),
            Expression::Pow(l, r) => fold_binary(l, r, f64::powf, Expression::Pow, |_, r| {
                is_exactly(r, 1.0).then_some(Side::Left)
            }),
            Expression::Factorial(inner) => match inner.literal().and_then(factorial) {
                Some(v) => Expression::Number(v),
                None => Expression::Factorial(Box::new(inner.simplify_once())),
            },
            Expression::Call(name, args) => {
                let literals: Option<Vec<f64>> = args.iter().map(Expression::literal).collect();
                match literals.and_then(|values| call_builtin(name, &values)) {
                    Some(v) => Expression::Number(v),
                    None => Expression::Call(
                        name.clone(),
                        args.iter().map(Expression::simplify_once).collect(),
                    ),
                }
            }
            Expression::Assign(name, value) => {
                Expression::Assign(name.clone(), Box::new(value.simplify_once()))
            }
        };

        debug!("Simplified {} => {}", self, result);
        result
    }
}

enum Side {
    Left,
    Right,
}

fn fold_binary(
    l: &Expression,
    r: &Expression,
    apply: impl Fn(f64, f64) -> f64,
    rebuild: impl Fn(Box<Expression>, Box<Expression>) -> Expression,
    neutral: impl Fn(Option<f64>, Option<f64>) -> Option<Side>,
) -> Expression {
    let (left, right) = (l.literal(), r.literal());

    if let (Some(a), Some(b)) = (left, right) {
        return Expression::Number(apply(a, b));
    }

    match neutral(left, right) {
        Some(Side::Left) => l.simplify_once(),
        Some(Side::Right) => r.simplify_once(),
        None => rebuild(Box::new(l.simplify_once()), Box::new(r.simplify_once())),
    }
}
