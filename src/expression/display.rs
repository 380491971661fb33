use std::fmt;

use crate::expression::ast::Expression;
use crate::utils::format_number;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Assign(_, _) => 0,
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mul(_, _)
                | Expression::ImplicitMul(_, _)
                | Expression::Div(_, _)
                | Expression::Mod(_, _) => 2,
                Expression::Neg(_) | Expression::Pos(_) => 3,
                // a negative literal prints with a leading sign
                Expression::Number(n) if *n < 0.0 => 3,
                Expression::Pow(_, _) => 4,
                Expression::Factorial(_) => 5,
                Expression::Number(_)
                | Expression::Symbol(_)
                | Expression::Call(_, _)
                | Expression::Group(_) => 6,
            }
        }

        // True when `expr` prints starting with a name or `(`, so that
        // juxtaposition reads back as multiplication.
        fn leads_with_atom(expr: &Expression) -> bool {
            match expr {
                Expression::Symbol(_) | Expression::Group(_) | Expression::Call(_, _) => true,
                Expression::Pow(base, _) | Expression::Factorial(base) => leads_with_atom(base),
                _ => false,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn write_binary(
            f: &mut fmt::Formatter,
            l: &Expression,
            op: &str,
            r: &Expression,
            level: u8,
        ) -> fmt::Result {
            write_with_parens(f, l, precedence(l) < level)?;
            write!(f, " {} ", op)?;
            write_with_parens(f, r, precedence(r) <= level)
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", format_number(*n)),
                Expression::Symbol(name) => write!(f, "{}", name),
                Expression::Add(l, r) => write_binary(f, l, "+", r, 1),
                Expression::Sub(l, r) => write_binary(f, l, "-", r, 1),
                Expression::Mul(l, r) => write_binary(f, l, "*", r, 2),
                Expression::Div(l, r) => write_binary(f, l, "/", r, 2),
                Expression::Mod(l, r) => write_binary(f, l, "%", r, 2),
                Expression::ImplicitMul(l, r) => {
                    let need_r = precedence(r) <= 2;
                    if need_r || leads_with_atom(r) {
                        write_with_parens(f, l, precedence(l) < 2)?;
                        write!(f, " ")?;
                        write_with_parens(f, r, need_r)
                    } else {
                        write_binary(f, l, "*", r, 2)
                    }
                }
                Expression::Pow(l, r) => {
                    // right-associative, and `2 ^ -3` needs no parentheses
                    write_with_parens(f, l, precedence(l) <= 4)?;
                    write!(f, " ^ ")?;
                    write_with_parens(f, r, precedence(r) < 3)
                }
                Expression::Neg(e) => {
                    write!(f, "-")?;
                    write_with_parens(f, e, precedence(e) < 3)
                }
                Expression::Pos(e) => {
                    write!(f, "+")?;
                    write_with_parens(f, e, precedence(e) < 3)
                }
                Expression::Factorial(e) => {
                    write_with_parens(f, e, precedence(e) < 5)?;
                    write!(f, "!")
                }
                Expression::Call(name, args) => {
                    write!(f, "{}(", name)?;
                    for (idx, arg) in args.iter().enumerate() {
                        if idx > 0 {
                            write!(f, ", ")?;
                        }
                        fmt_expression(f, arg)?;
                    }
                    write!(f, ")")
                }
                Expression::Assign(name, value) => {
                    write!(f, "{} = ", name)?;
                    fmt_expression(f, value)
                }
                Expression::Group(e) => {
                    write!(f, "(")?;
                    fmt_expression(f, e)?;
                    write!(f, ")")
                }
            }
        }

        fmt_expression(f, self)
    }
}
