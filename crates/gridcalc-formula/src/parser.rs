//! Formula parser
//!
//! Formulas come in two shapes, each with its own grammar:
//!
//! ```text
//! arithmetic := additive
//! additive   := multiplicative (('+' | '-') multiplicative)*
//! multiplicative := unary (('*' | '/') unary)*
//! unary      := ('-' | '+') unary | primary
//! primary    := NUMBER | '(' additive ')'
//!
//! aggregate  := FUNCTION '(' REFERENCE ':' REFERENCE ')'
//! REFERENCE  := LETTER DIGIT+
//! ```
//!
//! Text made only of digits, `+ - * / ( ) .` and whitespace is parsed as
//! arithmetic; anything else must be an aggregate call.

use crate::ast::{BinaryOperator, Expr, Formula, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use crate::functions::AggregateFunction;
use gridcalc_core::{CellAddress, CellRange};

/// Deepest allowed chain of parentheses and prefix signs
pub const MAX_NESTING_DEPTH: usize = 64;

/// Most binary operators allowed in one formula
pub const MAX_OPERATORS: usize = 256;

/// Parse a formula body into an AST
///
/// `formula` is the text after the formula marker.
///
/// # Example
/// ```rust
/// use gridcalc_formula::{parse_formula, Formula};
///
/// assert!(matches!(parse_formula("1+2").unwrap(), Formula::Arithmetic(_)));
/// assert!(matches!(parse_formula("SUM(A1:A10)").unwrap(), Formula::Aggregate { .. }));
/// ```
pub fn parse_formula(formula: &str) -> FormulaResult<Formula> {
    let formula = formula.trim();
    let tokens = tokenize(formula);
    let mut parser = FormulaParser::new(formula, tokens);

    if is_arithmetic(formula) {
        log::trace!("parsing '{}' as arithmetic", formula);
        parser.parse_arithmetic().map(Formula::Arithmetic)
    } else {
        log::trace!("parsing '{}' as aggregate", formula);
        parser.parse_aggregate()
    }
}

/// Check whether text belongs to the arithmetic character class
fn is_arithmetic(formula: &str) -> bool {
    !formula.is_empty()
        && formula
            .chars()
            .all(|c| c.is_ascii_digit() || "+-*/().".contains(c) || c.is_whitespace())
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    // Literals
    Number(f64),

    // Function names and cell references
    Identifier(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Colon,

    // Delimiters
    LeftParen,
    RightParen,

    // Anything the grammar has no use for
    Unknown(char),

    // End of input
    Eof,
}

// === Token scanning ===

fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner { input, pos: 0 };
    let mut tokens = Vec::new();

    loop {
        let token = scanner.scan_token();
        let done = token == Token::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let c = match self.peek_char() {
            Some(c) => c,
            None => return Token::Eof,
        };

        let single = match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            ':' => Some(Token::Colon),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => None,
        };
        if let Some(token) = single {
            self.advance();
            return token;
        }

        if c.is_ascii_digit()
            || (c == '.' && self.peek_char_at(1).map_or(false, |c| c.is_ascii_digit()))
        {
            return self.scan_number();
        }

        if c.is_ascii_alphabetic() {
            return self.scan_identifier();
        }

        self.advance();
        Token::Unknown(c)
    }

    fn scan_number(&mut self) -> Token {
        let start = self.pos;

        // Integer part
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        // Decimal part
        if self.peek_char() == Some('.') {
            self.advance();
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let num_str = &self.input[start..self.pos];
        match num_str.parse::<f64>() {
            Ok(n) => Token::Number(n),
            Err(_) => Token::Unknown('.'),
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;

        while self
            .peek_char()
            .map_or(false, |c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        Token::Identifier(self.input[start..self.pos].to_string())
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }
}

/// Formula parser
struct FormulaParser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    operators: usize,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str, tokens: Vec<Token>) -> Self {
        Self {
            input,
            tokens,
            pos: 0,
            depth: 0,
            operators: 0,
        }
    }

    fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&Token::Eof)
    }

    fn consume(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn enter_nested(&mut self) -> FormulaResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(FormulaError::Syntax(format!(
                "expression nests deeper than {} levels",
                MAX_NESTING_DEPTH
            )));
        }
        Ok(())
    }

    fn leave_nested(&mut self) {
        self.depth -= 1;
    }

    fn count_operator(&mut self) -> FormulaResult<()> {
        self.operators += 1;
        if self.operators > MAX_OPERATORS {
            return Err(FormulaError::Syntax(format!(
                "more than {} operators in one formula",
                MAX_OPERATORS
            )));
        }
        Ok(())
    }

    // === Arithmetic ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Unary: -, +
    // 4. Primary: numbers, parentheses

    fn parse_arithmetic(&mut self) -> FormulaResult<Expr> {
        let expr = self.parse_additive()?;

        if self.current_token() != &Token::Eof {
            return Err(FormulaError::Syntax(format!(
                "unexpected {:?} in '{}'",
                self.current_token(),
                self.input
            )));
        }

        Ok(expr)
    }

    fn parse_additive(&mut self) -> FormulaResult<Expr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current_token() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume();
            self.count_operator()?;
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> FormulaResult<Expr> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current_token() {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.consume();
            self.count_operator()?;
            let right = self.parse_unary()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> FormulaResult<Expr> {
        match self.current_token() {
            Token::Minus => {
                self.consume();
                self.enter_nested()?;
                let operand = self.parse_unary()?;
                self.leave_nested();
                Ok(Expr::UnaryOp {
                    op: UnaryOperator::Negate,
                    operand: Box::new(operand),
                })
            }
            // Prefix plus (no-op)
            Token::Plus => {
                self.consume();
                self.enter_nested()?;
                let operand = self.parse_unary()?;
                self.leave_nested();
                Ok(operand)
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> FormulaResult<Expr> {
        match self.consume() {
            Token::Number(n) => Ok(Expr::Number(n)),

            Token::LeftParen => {
                self.enter_nested()?;
                let expr = self.parse_additive()?;
                self.leave_nested();
                match self.consume() {
                    Token::RightParen => Ok(expr),
                    other => Err(FormulaError::Syntax(format!(
                        "expected ')', got {:?} in '{}'",
                        other, self.input
                    ))),
                }
            }

            Token::Eof => Err(FormulaError::Syntax(format!(
                "unexpected end of expression in '{}'",
                self.input
            ))),

            other => Err(FormulaError::Syntax(format!(
                "unexpected {:?} in '{}'",
                other, self.input
            ))),
        }
    }

    // === Aggregate ===

    fn parse_aggregate(&mut self) -> FormulaResult<Formula> {
        let name = match self.consume() {
            Token::Identifier(name) => name,
            _ => return Err(self.unsupported()),
        };

        let function = AggregateFunction::from_name(&name)
            .ok_or_else(|| FormulaError::Unsupported(format!("unknown function '{}'", name)))?;

        self.expect(Token::LeftParen)?;
        let start = self.parse_reference()?;
        self.expect(Token::Colon)?;
        let end = self.parse_reference()?;
        self.expect(Token::RightParen)?;
        self.expect(Token::Eof)?;

        Ok(Formula::Aggregate {
            function,
            range: CellRange::new(start, end),
        })
    }

    fn parse_reference(&mut self) -> FormulaResult<CellAddress> {
        let text = match self.consume() {
            Token::Identifier(text) => text,
            _ => return Err(self.unsupported()),
        };

        if !is_reference_shape(&text) {
            return Err(FormulaError::Unsupported(format!(
                "malformed range reference '{}'",
                text
            )));
        }

        CellAddress::parse(&text).map_err(|e| {
            FormulaError::Parse(format!("invalid cell reference '{}': {}", text, e))
        })
    }

    fn expect(&mut self, expected: Token) -> FormulaResult<()> {
        if self.consume() == expected {
            Ok(())
        } else {
            Err(self.unsupported())
        }
    }

    fn unsupported(&self) -> FormulaError {
        FormulaError::Unsupported(format!("'{}' is not a supported formula", self.input))
    }
}

/// A single uppercase column letter followed by one or more digits
fn is_reference_shape(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().map_or(false, |c| c.is_ascii_uppercase())
        && !chars.as_str().is_empty()
        && chars.all(|c| c.is_ascii_digit())
}
