//! # addrtok - token classification
//!
//! Classifies short textual tokens as either a bare numeric identifier or a
//! dotted-quad address with an optional subnet mask length, using a small set
//! of composable parser combinators:
//!
//! - **Zero panics**: every failure is a `Result`, whatever the input
//! - **Explicit backtracking**: `or` only falls back when the first alternative
//!   consumed nothing, and `backtrack` marks where rewinding is allowed
//! - **Partial and complete matching**: [`classify`] accepts a valid prefix,
//!   [`classify_complete`] requires the whole input
//!
//! ```
//! use addrtok::{Address, Token, classify, classify_complete};
//!
//! assert_eq!(classify("2293487"), Ok(Token::Identifier("2293487".into())));
//! assert_eq!(
//!     classify("10.0.0.1/8"),
//!     Ok(Token::Address(Address {
//!         network1: 10,
//!         network2: 0,
//!         host1: 0,
//!         host2: 1,
//!         mask: Some(8),
//!     }))
//! );
//! assert!(classify_complete("1234.1.1.1").is_err());
//! ```

pub mod and;
pub mod ascii;
pub mod backtrack;
pub mod byte_cursor;
pub mod chomp;
pub mod cursor;
pub mod error;
pub mod grammar;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod span;
pub mod token;

pub use byte_cursor::ByteCursor;
pub use cursor::Cursor;
pub use error::{ClassifyError, CodeLoc, ErrorLeaf, ErrorNode, ParseError};
pub use grammar::{Bounds, Grammar, classify, classify_complete};
pub use parser::Parser;
pub use span::Span;
pub use token::{Address, Token};
