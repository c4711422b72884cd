//! pcalc - a precedence-climbing expression calculator
//!
//! Usage:
//!   pcalc              Start interactive REPL
//!   pcalc -c "expr"    Evaluate a single expression
//!   pcalc table.calc   Evaluate a script file, one expression per line

mod cli;
mod repl;

use pcalc::evaluate;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let cli = cli::parse_args(&args);

    if cli.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if cli.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    if let Some(expression) = cli.command {
        return eval_once(&expression, cli.verbose);
    }
    if let Some(path) = cli.script {
        return run_script(&path, cli.verbose);
    }

    repl::run(cli.verbose)
}

/// Evaluate a single expression and report the result or the error
fn eval_once(expression: &str, verbose: bool) -> ExitCode {
    if verbose {
        println!("Expression: {}", expression);
    }
    match evaluate(expression) {
        Ok(value) => {
            if verbose {
                println!("Output: {}", value);
            } else {
                println!("{}", value);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Evaluate each line of a script file. Blank lines and lines starting with
/// '#' are skipped; the first error aborts with its line number.
fn run_script(path: &str, verbose: bool) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error: {}: {}", path, err);
            return ExitCode::FAILURE;
        }
    };

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if verbose {
            println!("Expression: {}", line);
        }
        match evaluate(line) {
            Ok(value) => {
                if verbose {
                    println!("Output: {}", value);
                } else {
                    println!("{}", value);
                }
            }
            Err(err) => {
                eprintln!("Error: line {}: {}", index + 1, err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
