use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};

/// rangecalc is a calculator for arithmetic expressions over integers
/// confined to [-10000, 10000].
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. Starts an interactive session when
    /// omitted.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.expression {
        Some(expression) => match rangecalc::evaluate(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        },

        None => interactive(),
    }
}

/// Reads expressions line by line and prints each result or error.
///
/// The session ends on `exit`, `quit`, Ctrl-C, or Ctrl-D. A failed
/// evaluation only prints the error; the next line starts fresh.
fn interactive() {
    let mut editor = DefaultEditor::new().unwrap_or_else(|e| {
                                             eprintln!("Failed to start interactive session: {e}");
                                             std::process::exit(1);
                                         });

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "exit" || line == "quit" {
                    break;
                }

                let _ = editor.add_history_entry(line);

                match rangecalc::evaluate(line) {
                    Ok(value) => println!("{value}"),
                    Err(e) => eprintln!("{e}"),
                }
            },

            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,

            Err(e) => {
                eprintln!("{e}");
                break;
            },
        }
    }
}
