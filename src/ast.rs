use std::{fmt, rc::Rc};

use crate::util::num::format_number;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code: `nil`, booleans, numbers and strings. It is used in the AST to
/// represent literal expressions and converts losslessly into a runtime
/// `Value`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `nil` literal.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A double-precision number literal such as `3` or `2.5`.
    Number(f64),
    /// A string literal, stored without its surrounding quotes.
    String(Rc<str>),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(Rc::from(value))
    }
}

/// Literals print the way the runtime prints the value they produce.
impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant carries the source line of the token that introduced it, so
/// the evaluator can report runtime errors without going back to the token
/// stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or `nil`).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`-x`, `!x`).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number of the operator.
        line: usize,
    },
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// A short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left one does not decide.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to an existing variable.
    Assign {
        /// Name of the assigned variable.
        name:  String,
        /// The assigned expression.
        value: Box<Self>,
        /// Line number of the variable name.
        line:  usize,
    },
    /// Call expression (e.g. `add(1, 2)` or `makeCounter()()`).
    Call {
        /// The expression producing the callee.
        callee:    Box<Self>,
        /// Arguments to the call, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number of the closing parenthesis.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use treelox::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Grouping { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Logical { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function declaration.
///
/// The declaration is shared behind an `Rc` by the statement that introduced
/// it and by every closure created from it, so the body is never copied when
/// the function is called.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements of the function body.
    pub body:   Vec<Statement>,
    /// Line number of the function name.
    pub line:   usize,
}

/// Represents a statement.
///
/// A program is an ordered list of statements; blocks and function bodies
/// nest further statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `print <expr>;`
    Print {
        /// The printed expression.
        expr: Expr,
        /// Line number of the `print` keyword.
        line: usize,
    },
    /// A variable declaration using `var`.
    Var {
        /// The name of the variable.
        name:        String,
        /// The optional initializer; the variable is `nil` without one.
        initializer: Option<Expr>,
        /// Line number of the variable name.
        line:        usize,
    },
    /// A braced block introducing a new scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number of the opening brace.
        line:       usize,
    },
    /// `if (<condition>) <then> else <else>`
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed if the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed if the condition is falsy.
        else_branch: Option<Box<Self>>,
        /// Line number of the `if` keyword.
        line:        usize,
    },
    /// `while (<condition>) <body>`; `for` loops are desugared into this.
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number of the loop keyword.
        line:      usize,
    },
    /// A user-defined function declaration.
    Function(Rc<FunctionDef>),
    /// `return <expr>;`
    Return {
        /// The returned expression; `nil` is returned without one.
        value: Option<Expr>,
        /// Line number of the `return` keyword.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number of the token that introduced the statement.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::Print { line, .. }
            | Self::Var { line, .. }
            | Self::Block { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Return { line, .. } => *line,
            Self::Function(def) => def.line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
