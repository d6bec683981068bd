use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use calcrs::{config::Options, evaluate_with};
use clap::Parser;

const FAREWELL: &str = "Goodbye!";
const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "q"];

/// calcrs is a console calculator that safely evaluates arithmetic
/// expressions.
///
/// Without arguments it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every non-blank line of this file instead of prompting.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Maximum nesting depth of parentheses, signs and powers.
    #[arg(short = 'd', long, default_value_t = calcrs::config::MAX_DEPTH)]
    max_depth: usize,

    /// Skips the banner in interactive mode.
    #[arg(short, long)]
    quiet: bool,

    /// A single expression to evaluate. It may start with a sign, as in
    /// `-2^2`.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let options = Options { max_depth: args.max_depth };

    if let Some(expression) = &args.expression {
        return exit_code(report(expression, &options));
    }

    if let Some(path) = &args.file {
        let script = match fs::read_to_string(path) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        };

        let mut all_ok = true;
        for line in script.lines().filter(|line| !line.trim().is_empty()) {
            all_ok &= report(line, &options);
        }
        return exit_code(all_ok);
    }

    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n{FAREWELL}");
        std::process::exit(0);
    }) {
        eprintln!("Failed to install the interrupt handler: {e}");
    }

    if !args.quiet {
        print_banner();
    }

    match repl(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Evaluates one expression and prints the outcome. Returns `false` on error.
fn report(expression: &str, options: &Options) -> bool {
    match evaluate_with(expression, options) {
        Ok(value) => {
            println!("= {value}");
            true
        },
        Err(e) => {
            eprintln!("[error] {e}");
            false
        },
    }
}

const fn exit_code(success: bool) -> ExitCode {
    if success { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Reads lines until an exit command or end of input.
///
/// Evaluation errors are printed and the loop carries on.
fn repl(options: &Options) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!(">>> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let expression = line.trim();
        if EXIT_COMMANDS.iter().any(|cmd| expression.eq_ignore_ascii_case(cmd)) {
            break;
        }
        if expression.is_empty() {
            continue;
        }

        match evaluate_with(expression, options) {
            Ok(value) => println!("= {value}"),
            Err(e) => println!("[error] {e}"),
        }
    }

    println!("{FAREWELL}");
    Ok(())
}

fn print_banner() {
    let rule = "=".repeat(40);
    println!("{rule}");
    println!("{:^40}", "Console Calculator");
    println!("{rule}");
    println!("  Operators: + - * / // % ^ (or **)");
    println!("  Parentheses: (1 + 2) * 3");
    println!("  Quit: exit, quit or q");
    println!("{rule}");
    println!();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("calcrs").chain(args.iter().copied()))
            .unwrap_or_else(|e| panic!("Failed to parse {args:?}: {e}"))
    }

    #[test]
    fn arguments_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn expression_may_start_with_a_sign() {
        assert_eq!(parse(&["-2^2"]).expression.as_deref(), Some("-2^2"));
        assert_eq!(parse(&["-(1 + 2) * 3"]).expression.as_deref(), Some("-(1 + 2) * 3"));
        assert_eq!(parse(&["+5"]).expression.as_deref(), Some("+5"));
    }

    #[test]
    fn flags_still_parse_before_an_expression() {
        let args = parse(&["-q", "-d", "16", "-1 - 1"]);
        assert!(args.quiet);
        assert_eq!(args.max_depth, 16);
        assert_eq!(args.expression.as_deref(), Some("-1 - 1"));
    }

    #[test]
    fn file_and_expression_conflict() {
        let result = Args::try_parse_from(["calcrs", "-f", "sums.txt", "1 + 1"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_without_arguments() {
        let args = parse(&[]);
        assert_eq!(args.expression, None);
        assert_eq!(args.file, None);
        assert_eq!(args.max_depth, calcrs::config::MAX_DEPTH);
        assert!(!args.quiet);
    }
}
