/// What gets sent to the solving service for one equation
#[derive(Debug, Clone, PartialEq)]
pub struct SolverRequest {
    pub equation: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl SolverRequest {
    pub const MAX_TOKENS: u32 = 100;
    pub const TEMPERATURE: f32 = 0.2;

    pub fn for_equation(equation: &str) -> Self {
        Self {
            equation: equation.to_string(),
            prompt: format!("Solve for x in the equation: {}. Show all steps.", equation),
            max_tokens: Self::MAX_TOKENS,
            temperature: Self::TEMPERATURE,
        }
    }
}
