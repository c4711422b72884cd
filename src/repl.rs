//! Interactive REPL for pcalc
//!
//! One expression per line; results print to stdout, errors to stderr
//! without ending the session.

use pcalc::evaluate;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::process::ExitCode;

use crate::cli::print_help;

pub(crate) fn run(verbose: bool) -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("Error: failed to start REPL: {}", err);
            return ExitCode::FAILURE;
        }
    };

    loop {
        match editor.readline("pcalc> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match line {
                    "exit" | "quit" => break,
                    "help" => {
                        print_help();
                        continue;
                    }
                    _ => {}
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
                    Err(err) => eprintln!("Error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C: discard the line, keep the session
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
