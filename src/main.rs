use std::{fs, process::ExitCode};

use clap::Parser;
use ember::Interpreter;
use rustyline::{DefaultEditor, error::ReadlineError};

/// ember is a small expression-oriented scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ember to treat the contents as a path to a script file.
    #[arg(short, long)]
    file: bool,

    /// Prints the value of the last statement after running the script.
    #[arg(short, long)]
    print_result: bool,

    /// Starts an interactive prompt. This is the default without contents.
    #[arg(short, long, conflicts_with = "contents")]
    repl: bool,

    /// Source text, or a path when `--file` is given.
    contents: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Some(contents) = args.contents.filter(|_| !args.repl) else {
        return run_repl();
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(error) => {
                eprintln!("Failed to read the input file '{contents}': {error}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    match Interpreter::new().run(&script) {
        Ok(value) => {
            if args.print_result {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}

/// Reads and evaluates one line at a time against a single interpreter, so
/// declarations persist between lines. Errors are reported and the prompt
/// continues.
fn run_repl() -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("Failed to start the prompt: {error}");
            return ExitCode::FAILURE;
        },
    };
    let mut interpreter = Interpreter::new();

    println!("\nember repl v{}", env!("CARGO_PKG_VERSION"));
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim() == "exit" {
                    break;
                }
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());

                match interpreter.run(&line) {
                    Ok(value) => println!("{value}"),
                    Err(error) => eprintln!("{error}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {error}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}

/// Installs a `tracing` subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=ember=debug`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true).with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
