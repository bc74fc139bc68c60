use std::fmt;

use logos::Logos;

use crate::{
    ast::LiteralValue,
    error::{Diagnostics, ScanError},
};

/// Errors produced by the generated lexer before they are given a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token pattern matches the input at this position.
    #[default]
    UnexpectedCharacter,
    /// A string literal ran to the end of input.
    UnterminatedString,
}

/// The kind of a lexical token.
///
/// Kinds are recognized with maximal munch: two-character operators win over
/// their one-character prefixes and keywords win over identifiers of the same
/// length. Whitespace, newlines and `//` comments are skipped.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Identifier tokens; variable or function names such as `x` or
    /// `makeCounter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literal tokens, such as `"hello"`. Strings may span lines.
    #[regex(r#""[^"]*""#, string_literal, allow_greedy = true)]
    #[regex(r#""[^"]*"#, unterminated_string, allow_greedy = true)]
    String,
    /// Numeric literal tokens, such as `42` or `3.14`. A trailing `.` with
    /// no digit after it is not part of the number.
    #[regex(r"[0-9]+")]
    #[regex(r"[0-9]+\.[0-9]+")]
    Number,
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks; only counted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End-of-input sentinel, appended after the last scanned token.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::Fun => "FUN",
            Self::For => "FOR",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEW_LINE",
            Self::Ignored => "IGNORED",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Counts the newlines of a string literal.
fn string_literal(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += lex.slice().matches('\n').count();
}

/// Counts the newlines of a string literal that ran to the end of input and
/// rejects it.
fn unterminated_string(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexError> {
    lex.extras.line += lex.slice().matches('\n').count();
    Err(LexError::UnterminatedString)
}

/// A lexical token: its kind, source text, literal payload and line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The exact source text of the token.
    pub lexeme:  String,
    /// The literal value for `NUMBER`, `STRING`, `true` and `false`.
    pub literal: Option<LiteralValue>,
    /// The source line the token ends on.
    pub line:    usize,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind,
               lexeme: impl Into<String>,
               literal: Option<LiteralValue>,
               line: usize)
               -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal,
               line }
    }

    /// Builds a token from a matched slice, deriving its literal payload.
    fn from_slice(kind: TokenKind, slice: &str, line: usize) -> Self {
        let literal = match kind {
            TokenKind::Number => slice.parse().ok().map(LiteralValue::Number),
            TokenKind::String => Some(LiteralValue::from(&slice[1..slice.len() - 1])),
            TokenKind::True => Some(LiteralValue::Bool(true)),
            TokenKind::False => Some(LiteralValue::Bool(false)),
            _ => None,
        };

        Self::new(kind, slice, literal, line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] token: {}", self.kind, self.lexeme)
    }
}

/// Scans `source` into tokens.
///
/// Scanning never stops at an error: bad characters and unterminated strings
/// are recorded in `diagnostics` and the scan carries on. The returned stream
/// always ends with a [`TokenKind::Eof`] token.
///
/// # Example
/// ```
/// use treelox::{
///     error::Diagnostics,
///     interpreter::lexer::{TokenKind, scan_tokens},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan_tokens("var x = 1.5;", &mut diagnostics);
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert!(diagnostics.is_empty());
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
pub fn scan_tokens(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => tokens.push(Token::from_slice(kind, lexer.slice(), line)),
            Err(LexError::UnexpectedCharacter) => {
                diagnostics.report(ScanError::UnexpectedCharacter { line });
            },
            Err(LexError::UnterminatedString) => {
                diagnostics.report(ScanError::UnterminatedString { line });
            },
        }
    }

    tokens.push(Token::new(TokenKind::Eof, "", None, lexer.extras.line));
    tracing::debug!(count = tokens.len(), "scanned tokens");
    tokens
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens(source, &mut diagnostics);
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {diagnostics}");
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn two_character_operators_use_maximal_munch() {
        use TokenKind::{
            Bang, BangEqual, Eof, Equal, EqualEqual, Greater, GreaterEqual, Less, LessEqual,
        };

        assert_eq!(kinds("!= == <= >= ! = < >"),
                   [BangEqual,
                    EqualEqual,
                    LessEqual,
                    GreaterEqual,
                    Bang,
                    Equal,
                    Less,
                    Greater,
                    Eof]);
    }

    #[test]
    fn keywords_are_reclassified_but_longer_identifiers_are_not() {
        assert_eq!(kinds("or orchid while whiles"),
                   [TokenKind::Or,
                    TokenKind::Identifier,
                    TokenKind::While,
                    TokenKind::Identifier,
                    TokenKind::Eof]);
    }

    #[test]
    fn number_does_not_swallow_trailing_dot() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens("12.5 7.", &mut diagnostics);

        assert_eq!(tokens[0].literal, Some(LiteralValue::Number(12.5)));
        assert_eq!(tokens[1].literal, Some(LiteralValue::Number(7.0)));
        assert_eq!(tokens[2].kind, TokenKind::Dot);
    }

    #[test]
    fn comments_and_newlines_advance_lines() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens("// first\nvar\n\n\"a\nb\" x", &mut diagnostics);

        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].literal, Some(LiteralValue::from("a\nb")));
        assert_eq!(tokens[1].line, 5);
        assert_eq!(tokens[2].line, 5);
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn scan_errors_are_recorded_and_scanning_continues() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens("var @ x;\n# \"open", &mut diagnostics);

        let messages: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
        assert_eq!(messages,
                   ["[line 1] Error: Unexpected character.",
                    "[line 2] Error: Unexpected character.",
                    "[line 2] Error: Unterminated string."]);
        assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
                   [TokenKind::Var, TokenKind::Identifier, TokenKind::Semicolon, TokenKind::Eof]);
    }

    #[test]
    fn token_dump_format() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens("(", &mut diagnostics);

        assert_eq!(tokens[0].to_string(), "[LEFT_PAREN] token: (");
        assert_eq!(tokens[1].to_string(), "[EOF] token: ");
    }
}
