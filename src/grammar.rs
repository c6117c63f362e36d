//! The token grammar: a digit-run identifier or a dotted-quad address.
//!
//! ```text
//! token      := backtrack(address) | identifier
//! address    := octet "." octet "." octet "." octet mask?
//! mask       := "/" digit{1,2}
//! octet      := digit{1,3}
//! identifier := digit*
//! ```
//!
//! The address alternative goes first. Identifier accepts the empty run, so
//! it would shadow the address grammar if tried before it.

use crate::and::AndExt;
use crate::ascii::{bounded_digits, digits};
use crate::backtrack::backtrack;
use crate::byte_cursor::ByteCursor;
use crate::chomp::{end, literal};
use crate::cursor::Cursor;
use crate::error::ClassifyError;
use crate::map::MapExt;
use crate::optional::optional;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::token::{Address, Token};
use tracing::debug;

pub use crate::ascii::Bounds;

/// Digit-count bounds for the fields of the address grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grammar {
    /// Each of the four dotted fields
    pub octet: Bounds,
    /// The length after `/`
    pub mask: Bounds,
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar {
            octet: Bounds::OCTET,
            mask: Bounds::MASK,
        }
    }
}

impl Grammar {
    /// Classify the longest valid prefix of `input`
    ///
    /// Trailing input after the match is ignored.
    pub fn classify(&self, input: &str) -> Result<Token, ClassifyError> {
        let cursor = ByteCursor::new(input.as_bytes());
        match token(*self).parse(cursor) {
            Ok((token, rest)) => {
                debug!(input, %token, consumed = rest.position(), "classified");
                Ok(token)
            }
            Err(e) => {
                debug!(input, error = %e, "classification failed");
                Err(ClassifyError::from_node(&e))
            }
        }
    }

    /// Classify `input`, requiring the match to cover all of it
    pub fn classify_complete(&self, input: &str) -> Result<Token, ClassifyError> {
        let cursor = ByteCursor::new(input.as_bytes());
        let parser = token(*self).and(end()).map(|(token, ())| token);
        match parser.parse(cursor) {
            Ok((token, _)) => {
                debug!(input, %token, "classified completely");
                Ok(token)
            }
            Err(e) => {
                debug!(input, error = %e, "complete classification failed");
                Err(ClassifyError::from_node(&e))
            }
        }
    }
}

/// [`Grammar::classify`] with the default bounds
///
/// ```
/// use addrtok::{Token, classify};
///
/// assert_eq!(classify("10a.2bc.3#!.19"), Ok(Token::Identifier("10".into())));
/// ```
pub fn classify(input: &str) -> Result<Token, ClassifyError> {
    Grammar::default().classify(input)
}

/// [`Grammar::classify_complete`] with the default bounds
///
/// ```
/// use addrtok::{Address, Token, classify_complete};
///
/// let token = classify_complete("10.128.16.255/32").unwrap();
/// assert_eq!(
///     token,
///     Token::Address(Address {
///         network1: 10,
///         network2: 128,
///         host1: 16,
///         host2: 255,
///         mask: Some(32),
///     })
/// );
/// assert!(classify_complete("10a.2bc.3#!.19").is_err());
/// ```
pub fn classify_complete(input: &str) -> Result<Token, ClassifyError> {
    Grammar::default().classify_complete(input)
}

/// A run of digits of any length, including none
pub fn identifier<'code>() -> impl Parser<'code, Output = Token> {
    digits().map(|span| Token::Identifier(span.as_str().into_owned()))
}

pub fn octet<'code>(bounds: Bounds) -> impl Parser<'code, Output = u32> {
    bounded_digits(bounds)
}

/// `/` and a mask length, or `None` with nothing consumed
pub fn mask_suffix<'code>(bounds: Bounds) -> impl Parser<'code, Output = Option<u32>> {
    optional(literal("/").and(bounded_digits(bounds)).map(|((), mask)| mask))
}

fn octet_then_dot<'code>(bounds: Bounds) -> impl Parser<'code, Output = u32> {
    octet(bounds).and(literal(".")).map(|(value, ())| value)
}

pub fn address<'code>(grammar: Grammar) -> impl Parser<'code, Output = Address> {
    octet_then_dot(grammar.octet)
        .and(octet_then_dot(grammar.octet))
        .and(octet_then_dot(grammar.octet))
        .and(octet(grammar.octet))
        .and(mask_suffix(grammar.mask))
        .map(
            |((((network1, network2), host1), host2), mask)| Address {
                network1,
                network2,
                host1,
                host2,
                mask,
            },
        )
}

pub fn token<'code>(grammar: Grammar) -> impl Parser<'code, Output = Token> {
    backtrack(address(grammar).map(Token::Address)).or(identifier())
}
