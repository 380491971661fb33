use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use math_stepper::{EvaluationResult, History, Stepper, SymbolicEngine, simplify_trace};
use rayon::prelude::*;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How each expression is worked through
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Apply tokens strictly left to right, one step per token
    Steps,
    /// Simplify with the usual precedence rules, one pass per step
    Simplify,
}

/// Math Stepper - show how an arithmetic expression is worked out
#[derive(Parser, Debug)]
#[command(name = "math-stepper")]
#[command(about = "Show step-by-step evaluation traces for arithmetic expressions")]
#[command(version)]
pub struct CliArgs {
    /// Expressions to evaluate; read one per line from stdin when omitted
    pub expressions: Vec<String>,

    /// Evaluation mode
    #[arg(short, long, value_enum, default_value = "steps")]
    pub mode: Mode,

    /// Print the previously solved questions at the end
    #[arg(long)]
    pub history: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expressions: Vec<String>,
    pub mode: Mode,
    pub show_history: bool,
    pub log_level: LogLevel,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        if args.expressions.iter().any(|e| e.trim().is_empty()) {
            bail!("Expressions given as arguments must not be blank");
        }

        Ok(CliConfig {
            expressions: args.expressions,
            mode: args.mode,
            show_history: args.history,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::try_from(CliArgs::parse()).context("Invalid arguments")
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

fn solve_one(mode: Mode, stepper: &Stepper, input: &str) -> EvaluationResult {
    match mode {
        Mode::Steps => stepper.solve(input),
        Mode::Simplify => simplify_trace(&SymbolicEngine, &SymbolicEngine, input),
    }
}

/// Text block shown for one question
pub fn render(question: &str, result: &EvaluationResult) -> String {
    let mut out = format!("> {}\n", question);
    for step in result.steps() {
        out.push_str(&format!("  {}\n", step));
    }
    out
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let stepper = Stepper::new();
    let mut history = History::new();

    if config.expressions.is_empty() {
        info!("Reading expressions from stdin in {:?} mode", config.mode);
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read expression from stdin")?;
            let question = line.trim();
            if question.is_empty() {
                continue;
            }
            let result = solve_one(config.mode, &stepper, question);
            print!("{}", render(question, &result));
            history.record(question, &result);
        }
    } else {
        info!(
            "Evaluating {} expressions in {:?} mode",
            config.expressions.len(),
            config.mode
        );
        let results: Vec<EvaluationResult> = match config.mode {
            Mode::Steps => stepper.solve_all(config.expressions.as_slice()),
            Mode::Simplify => config
                .expressions
                .par_iter()
                .map(|input| solve_one(Mode::Simplify, &stepper, input))
                .collect(),
        };
        for (question, result) in config.expressions.iter().zip(&results) {
            print!("{}", render(question, result));
            history.record(question, result);
        }
    }

    debug!("{} successful runs recorded", history.len());
    if config.show_history && !history.is_empty() {
        println!("Previous Solutions");
        for question in history.questions() {
            println!("  {}", question);
        }
    }

    Ok(())
}
