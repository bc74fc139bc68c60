use std::io::{self, BufRead, Write};

use crate::{RunOptions, interpreter::evaluator::core::Interpreter, run_with};

const PROMPT: &str = "> ";

/// Runs the interactive prompt until `exit`, `quit` or end of input.
///
/// Every line is run as a complete program against one interpreter, so
/// variables and functions defined on earlier lines stay visible. Errors are
/// written to `output` and the prompt continues.
///
/// # Errors
/// Returns an error if reading `input` or writing `output` fails.
///
/// # Example
/// ```
/// let input = "var a = 2;\nprint a * 3;\nprint b;\nexit\nprint 1;\n";
/// let mut output = Vec::new();
/// treelox::repl::start(input.as_bytes(), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "> > 6\n> [line 1] Error: Undefined variable 'b'.\n> ");
/// ```
pub fn start(mut input: impl BufRead, output: &mut impl Write) -> io::Result<()> {
    let mut interpreter = Interpreter::new(output);
    let options = RunOptions::default();
    let mut line = String::new();

    loop {
        write!(interpreter.out(), "{PROMPT}")?;
        interpreter.out().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(interpreter.out())?;
            return Ok(());
        }

        let source = line.trim();
        if matches!(source, "exit" | "quit") {
            return Ok(());
        }

        if let Err(diagnostics) = run_with(source, &options, &mut interpreter) {
            writeln!(interpreter.out(), "{diagnostics}")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn functions_survive_between_lines() {
        assert_eq!(session("fun twice(x) { return x * 2; }\nprint twice(21);\n"),
                   "> > 42\n> \n");
    }

    #[test]
    fn parse_errors_do_not_end_the_session() {
        assert_eq!(session("print ;\nprint 1;\nquit\n"),
                   "> [line 1] Error at ';': Expect expression.\n> 1\n> ");
    }

    #[test]
    fn runtime_error_inside_a_block_restores_the_global_scope() {
        assert_eq!(session("var a = 1;\n{ var a = 2; print missing; }\nprint a;\n"),
                   "> > [line 1] Error: Undefined variable 'missing'.\n> 1\n> \n");
    }
}
