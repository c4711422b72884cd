//! Precedence-climbing evaluation for pcalc
//!
//! Tokenizing, parsing, and evaluation are fused into a single recursive
//! pass: no syntax tree is built, the call stack stands in for one.
//! [`eval_expr`] folds binary operators at or above a minimum precedence
//! into a running left-hand side, recursing for each right-hand side;
//! [`eval_primary`] handles integer literals, parenthesized subexpressions,
//! and unary negation.

use crate::lexer::{lex, LexError, Token};
use crate::ops::{ArithmeticError, Assoc, BinOp};
use thiserror::Error;

/// Recursion ceiling covering parenthesis nesting, unary chains, and
/// right-associative operator chains. Deeper input is rejected rather than
/// risking stack exhaustion.
const MAX_DEPTH: usize = 128;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("stream ended unexpectedly")]
    UnexpectedEnd,
    #[error("unmatched '('")]
    UnmatchedOpen,
    #[error("unmatched ')'")]
    UnmatchedClose,
    #[error("invalid operator: {0}")]
    InvalidOperator(String),
    #[error("invalid integer literal: {0}")]
    InvalidLiteral(String),
    #[error("expression nesting too deep")]
    TooDeep,
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
}

/// Cursor over a lexed token sequence: forward consumption plus pushback of
/// the single most recently consumed token.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, pos: 0 }
    }

    /// Peek at the current token without consuming it
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Consume and return the current token
    pub fn advance(&mut self) -> Option<Token> {
        if self.pos < self.tokens.len() {
            let token = self.tokens[self.pos].clone();
            self.pos += 1;
            Some(token)
        } else {
            None
        }
    }

    /// Push back the most recently consumed token. At most one token can be
    /// ungotten before the next advance.
    pub fn unget(&mut self) {
        debug_assert!(self.pos > 0, "unget before any advance");
        self.pos = self.pos.saturating_sub(1);
    }

    /// Check if every token has been consumed
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

/// Evaluate a whitespace-tokenized arithmetic expression.
///
/// The grammar is `term (operator term)*` where a term is a base-10 integer,
/// a parenthesized expression, or `-` followed by a term. Operators are
/// `+ - * / ^`, with `^` binding tightest and grouping right-to-left.
/// Every token, parentheses included, must be separated by whitespace.
///
/// # Example
///
/// ```rust
/// use pcalc::evaluate;
///
/// assert_eq!(evaluate("( 9 - 8 ) - 7").unwrap(), -6);
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 512);
/// assert!(evaluate("1 +").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<i64, EvalError> {
    let mut stream = TokenStream::new(lex(input)?);
    let result = eval_expr(&mut stream, 1, 0)?;

    // The only token eval_expr can leave behind at minimum precedence is a
    // close paren nobody opened
    if !stream.is_at_end() {
        return Err(EvalError::UnmatchedClose);
    }

    Ok(result)
}

/// Evaluate a primary: an integer literal, a parenthesized expression, or a
/// unary negation.
fn eval_primary(stream: &mut TokenStream, depth: usize) -> Result<i64, EvalError> {
    if depth > MAX_DEPTH {
        return Err(EvalError::TooDeep);
    }

    match stream.advance() {
        None => Err(EvalError::UnexpectedEnd),
        Some(Token::OpenParen) => {
            let value = eval_expr(stream, 1, depth + 1)?;
            match stream.advance() {
                Some(Token::CloseParen) => Ok(value),
                _ => Err(EvalError::UnmatchedOpen),
            }
        }
        Some(Token::CloseParen) => Err(EvalError::UnmatchedClose),
        // A '-' where a value is expected is unary negation, recursively
        // applicable ("- - 5")
        Some(Token::Atom(word)) if word == "-" => {
            let value = eval_primary(stream, depth + 1)?;
            Ok(value.checked_neg().ok_or(ArithmeticError::Overflow)?)
        }
        Some(Token::Atom(word)) => word
            .parse::<i64>()
            .map_err(|_| EvalError::InvalidLiteral(word)),
    }
}

/// Consume binary operators at or above `min_prec`, folding each application
/// into the left-hand side. An operator below the threshold is pushed back
/// for an enclosing call to claim.
fn eval_expr(stream: &mut TokenStream, min_prec: u8, depth: usize) -> Result<i64, EvalError> {
    if depth > MAX_DEPTH {
        return Err(EvalError::TooDeep);
    }

    let mut lhs = eval_primary(stream, depth)?;

    while let Some(token) = stream.advance() {
        let op = match token {
            // Close parens are consumed by the eval_primary frame that saw
            // the matching open paren; hand it back
            Token::CloseParen => {
                stream.unget();
                break;
            }
            Token::OpenParen => return Err(EvalError::InvalidOperator("(".to_string())),
            Token::Atom(word) => match BinOp::from_token(&word) {
                Some(op) => op,
                None => return Err(EvalError::InvalidOperator(word)),
            },
        };

        if op.precedence() < min_prec {
            stream.unget();
            break;
        }

        // A left-associative operator keeps its own precedence out of its
        // right-hand side, so equal-precedence chains fold here iteration by
        // iteration; '^' admits it, nesting the chain rightward
        let next_min = match op.associativity() {
            Assoc::Left => op.precedence() + 1,
            Assoc::Right => op.precedence(),
        };
        let rhs = eval_expr(stream, next_min, depth + 1)?;
        lhs = op.apply(lhs, rhs)?;
    }

    Ok(lhs)
}
