use crate::ast::{Expr, Statement};

/// Renders an expression in parenthesized prefix form.
///
/// ## Example
/// ```
/// use treelox::{
///     error::Diagnostics,
///     interpreter::{lexer::scan_tokens, parser::core::Parser, printer::print_statement},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan_tokens("print -1 + (2 * x);", &mut diagnostics);
/// let statements = Parser::new(&tokens).parse(&mut diagnostics);
///
/// assert_eq!(print_statement(&statements[0]), "(print (+ (- 1) (group (* 2 x))))");
/// ```
#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal { value, .. } => value.to_string(),
        Expr::Grouping { expr, .. } => parenthesize("group", [expr.as_ref()]),
        Expr::Unary { op, expr, .. } => parenthesize(&op.to_string(), [expr.as_ref()]),
        Expr::Binary { left, op, right, .. } => {
            parenthesize(&op.to_string(), [left.as_ref(), right.as_ref()])
        },
        Expr::Logical { left, op, right, .. } => {
            parenthesize(&op.to_string(), [left.as_ref(), right.as_ref()])
        },
        Expr::Variable { name, .. } => name.clone(),
        Expr::Assign { name, value, .. } => format!("(= {name} {})", print_expr(value)),
        Expr::Call { callee, arguments, .. } => {
            parenthesize("call", std::iter::once(callee.as_ref()).chain(arguments))
        },
    }
}

/// Renders a statement in parenthesized prefix form.
#[must_use]
pub fn print_statement(statement: &Statement) -> String {
    match statement {
        Statement::Expression { expr, .. } => parenthesize(";", [expr]),
        Statement::Print { expr, .. } => parenthesize("print", [expr]),
        Statement::Var { name, initializer: None, .. } => format!("(var {name})"),
        Statement::Var { name, initializer: Some(init), .. } => {
            format!("(var {name} = {})", print_expr(init))
        },
        Statement::Block { statements, .. } => group("block", statements),
        Statement::If { condition, then_branch, else_branch, .. } => match else_branch {
            None => format!("(if {} {})", print_expr(condition), print_statement(then_branch)),
            Some(else_branch) => format!("(if-else {} {} {})",
                                         print_expr(condition),
                                         print_statement(then_branch),
                                         print_statement(else_branch)),
        },
        Statement::While { condition, body, .. } => {
            format!("(while {} {})", print_expr(condition), print_statement(body))
        },
        Statement::Function(def) => {
            let header = format!("fun {}({})", def.name, def.params.join(" "));
            group(&header, &def.body)
        },
        Statement::Return { value: None, .. } => "(return)".to_string(),
        Statement::Return { value: Some(value), .. } => parenthesize("return", [value]),
    }
}

fn parenthesize<'e>(name: &str, exprs: impl IntoIterator<Item = &'e Expr>) -> String {
    let mut out = format!("({name}");
    for expr in exprs {
        out.push(' ');
        out.push_str(&print_expr(expr));
    }
    out.push(')');
    out
}

fn group(name: &str, statements: &[Statement]) -> String {
    let mut out = format!("({name}");
    for statement in statements {
        out.push(' ');
        out.push_str(&print_statement(statement));
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        error::Diagnostics,
        interpreter::{lexer::scan_tokens, parser::core::Parser},
    };

    fn render(source: &str) -> Vec<String> {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens(source, &mut diagnostics);
        let statements = Parser::new(&tokens).parse(&mut diagnostics);
        assert!(diagnostics.is_empty(), "{diagnostics}");
        statements.iter().map(print_statement).collect()
    }

    #[test]
    fn literals_print_their_display_text() {
        assert_eq!(render("nil; true; 1.50; \"two words\";"),
                   ["(; nil)", "(; true)", "(; 1.5)", "(; two words)"]);
    }

    #[test]
    fn control_flow_forms() {
        assert_eq!(render("if (a) print 1; else { var b; }"),
                   ["(if-else a (print 1) (block (var b)))"]);
        assert_eq!(render("if (a) return;"), ["(if a (return))"]);
        assert_eq!(render("while (x > 0) x = x - 1;"), ["(while (> x 0) (; (= x (- x 1))))"]);
    }

    #[test]
    fn empty_function_and_call() {
        assert_eq!(render("fun noop() {} noop();"), ["(fun noop())", "(; (call noop))"]);
    }
}
