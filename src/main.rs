use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{LevelFilter, debug};
use pedmas::{
    evaluate,
    interpreter::{normalizer::normalize, parser::tokenize_level},
    parse,
    util::num::format_result,
};

/// pedmas evaluates arithmetic expressions with the usual order of
/// operations.
///
/// Pass an expression as arguments to evaluate it once, or run without
/// arguments to type expressions one per line. Type `q`, `e` or `x` to quit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the top-level tokens of each expression instead of its value.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the parsed expression tree instead of its value.
    #[arg(long, conflicts_with = "tokens")]
    tree: bool,

    /// Prints only the result, without repeating the expression.
    #[arg(short, long)]
    quiet: bool,

    /// The expression; words are joined with spaces.
    expression: Vec<String>,
}

impl Args {
    /// Runs one expression and prints its outcome.
    fn run(&self, expression: &str) {
        let outcome = if self.tokens {
            tokenize_level(&normalize(expression)).map(|(tokens, _)| tokens.to_string())
        } else if self.tree {
            parse(expression).map(|tree| tree.to_string())
        } else {
            evaluate(expression).map(format_result)
        };

        match outcome {
            Ok(shown) if self.quiet => println!("{shown}"),
            Ok(shown) => println!("{expression} = {shown}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Whether a line asks to leave the read loop.
fn is_quit(line: &str) -> bool {
    line.chars()
        .next()
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'q' | 'e' | 'x'))
}

fn main() {
    env_logger::Builder::new().filter_level(LevelFilter::Warn)
                              .parse_default_env()
                              .init();

    let args = Args::parse();

    if !args.expression.is_empty() {
        args.run(&args.expression.join(" "));
        return;
    }

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Type expression: ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to write the prompt: {e}");
            std::process::exit(1);
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read the expression: {e}");
                std::process::exit(1);
            },
        }

        let expression = line.trim_end_matches(['\n', '\r']);
        if is_quit(expression) {
            debug!("quit requested with {expression:?}");
            break;
        }
        if expression.trim().is_empty() {
            continue;
        }

        args.run(expression);
    }
}
