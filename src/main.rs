use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use treelox::{RunOptions, interpreter::evaluator::core::Interpreter, repl, run_with};

/// Exit code for a script file that cannot be read.
const EXIT_NO_INPUT: u8 = 66;

/// treelox runs scripts written in a small dynamically typed language with
/// first-class functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints every scanned token, one `[KIND] token: lexeme` line each,
    /// before running the script. Off by default, so a plain run writes only
    /// the script's own output.
    #[arg(long)]
    tokens: bool,

    /// Prints the parsed program in prefix form before running the script.
    #[arg(long)]
    ast: bool,

    /// The script to run. Starts an interactive prompt when omitted.
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let Some(path) = args.path else {
        return match repl::start(io::stdin().lock(), &mut io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let source = match fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return ExitCode::from(EXIT_NO_INPUT);
        },
    };

    let options = RunOptions { dump_tokens: args.tokens,
                               dump_ast:    args.ast, };
    let mut stdout = io::stdout().lock();
    let mut interpreter = Interpreter::new(&mut stdout);

    match run_with(&source, &options, &mut interpreter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(diagnostics) => {
            eprintln!("{diagnostics}");
            tracing::debug!(exit_code = diagnostics.exit_code(), "run failed");
            ExitCode::from(diagnostics.exit_code())
        },
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, `warn` by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn dumps_are_opt_in() {
        let args = Args::try_parse_from(["treelox", "script.lox"]).unwrap();
        assert!(!args.tokens && !args.ast);
        assert_eq!(args.path, Some(PathBuf::from("script.lox")));

        let args = Args::try_parse_from(["treelox", "--tokens", "--ast"]).unwrap();
        assert!(args.tokens && args.ast);
        assert_eq!(args.path, None);
    }

    #[test]
    fn tokens_help_states_the_default() {
        let command = Args::command();
        let help = command.get_arguments()
                          .find(|arg| arg.get_id() == "tokens")
                          .and_then(|arg| arg.get_help())
                          .map(ToString::to_string)
                          .unwrap();
        assert!(help.contains("Off by default"), "{help}");
    }
}
