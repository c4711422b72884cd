//! Tokenization for pcalc
//!
//! Whitespace is the sole token delimiter: `( 1 + 2 )` is five tokens,
//! while `(1+2)` is a single word that will fail later as a literal.
//! Classification beyond the two parenthesis symbols is positional and
//! happens in the evaluator.

use nom::{
    bytes::complete::take_while1,
    character::complete::multispace0,
    combinator::map,
    multi::many0,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening parenthesis: (
    OpenParen,
    /// Closing parenthesis: )
    CloseParen,
    /// Any other word (integer literal, operator symbol, or junk)
    Atom(String),
}

#[derive(Error, Debug)]
pub enum LexError {
    #[error("Unexpected character: {0}")]
    UnexpectedChar(char),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Classify a whitespace-delimited word. Parentheses only count when they
/// stand alone as a full word.
fn classify(word: &str) -> Token {
    match word {
        "(" => Token::OpenParen,
        ")" => Token::CloseParen,
        _ => Token::Atom(word.to_string()),
    }
}

/// Parse any single token
fn token(input: &str) -> IResult<&str, Token> {
    preceded(
        multispace0,
        map(take_while1(|c: char| !c.is_whitespace()), classify),
    )(input)
}

/// Tokenize a complete input string
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let (remaining, tokens) =
        many0(token)(input).map_err(|e| LexError::ParseError(format!("{:?}", e)))?;

    // Check for any remaining unparsed content
    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(LexError::UnexpectedChar(remaining.chars().next().unwrap()));
    }

    Ok(tokens)
}
