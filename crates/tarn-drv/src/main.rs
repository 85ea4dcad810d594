//! Tarn CLI - entry point for the Tarn interpreter.
//!
//! With no arguments this starts the REPL; with a file argument it runs
//! the script. `--emit` stops the pipeline after a phase and prints that
//! phase's output instead of evaluating.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tarn_drv::{repl, run_file, run_source, DriverError, EmitType, RunOutcome};

/// Tarn - a small, dynamically typed, expression-oriented language
#[derive(Parser, Debug)]
#[command(name = "tarn")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interpreter for the Tarn programming language", long_about = None)]
struct Cli {
    /// Script file to run; starts the REPL when omitted
    file: Option<PathBuf>,

    /// Stop after a phase and print its output
    #[arg(long, value_enum)]
    emit: Option<EmitPhase>,

    /// Evaluate the given source text and exit
    #[arg(short = 'e', long, conflicts_with = "file")]
    eval: Option<String>,

    /// Enable verbose (debug-level) logging
    #[arg(short, long, env = "TARN_VERBOSE")]
    verbose: bool,
}

/// Pipeline phase selectable with `--emit`.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum EmitPhase {
    /// Token stream, one token per line
    Tokens,
    /// Canonical AST rendering
    Ast,
}

impl From<EmitPhase> for EmitType {
    fn from(phase: EmitPhase) -> Self {
        match phase {
            EmitPhase::Tokens => EmitType::Tokens,
            EmitPhase::Ast => EmitType::Ast,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Installs the tracing subscriber: `RUST_LOG` wins, `--verbose` raises
/// the default to debug.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let emit = cli.emit.map(EmitType::from).unwrap_or_default();

    let outcome = match (&cli.eval, &cli.file) {
        (Some(source), _) => run_source(source, emit)?,
        (None, Some(path)) => run_file(path, emit)?,
        (None, None) => {
            greet();
            let stdin = io::stdin();
            let stdout = io::stdout();
            repl::start(&mut stdin.lock(), &mut stdout.lock())?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    match outcome {
        RunOutcome::Output(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        RunOutcome::Value(value) => {
            let failed = value.is_error();
            println!("{}", value.inspect());
            Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        RunOutcome::Silent => Ok(ExitCode::SUCCESS),
    }
}

/// Prints the session greeting, naming the user when the platform says
/// who they are.
fn greet() {
    match std::env::var("USER").or_else(|_| std::env::var("USERNAME")) {
        Ok(user) => println!("Welcome {user} to Tarn {}", env!("CARGO_PKG_VERSION")),
        Err(_) => println!("Welcome to Tarn {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Prints a process error; parse failures list each diagnostic.
fn report(err: &anyhow::Error) {
    if let Some(DriverError::Parse { errors }) = err.downcast_ref::<DriverError>() {
        let mut stderr = io::stderr().lock();
        for message in errors {
            let _ = writeln!(stderr, "parser error: {message}");
        }
        return;
    }
    eprintln!("error: {err}");
}
