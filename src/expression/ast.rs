/// Parsed form of an expression as the user wrote it
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Symbol(String),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    ImplicitMul(Box<Expression>, Box<Expression>), // `2x`, `2(3)`
    Div(Box<Expression>, Box<Expression>),
    Mod(Box<Expression>, Box<Expression>),
    Pow(Box<Expression>, Box<Expression>),
    Neg(Box<Expression>),
    Pos(Box<Expression>),
    Factorial(Box<Expression>),
    Call(String, Vec<Expression>),
    Group(Box<Expression>), // explicit parentheses, kept for printing
    Assign(String, Box<Expression>),
}
