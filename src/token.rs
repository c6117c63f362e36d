use crate::error::ClassifyError;
use std::fmt;
use std::str::FromStr;

/// A dotted-quad address with an optional subnet mask length
///
/// Fields are decoded from their digit runs as written. No check is made that
/// they fit in a byte or that the mask is a valid prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    pub network1: u32,
    pub network2: u32,
    pub host1: u32,
    pub host2: u32,
    pub mask: Option<u32>,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.network1, self.network2, self.host1, self.host2
        )?;
        if let Some(mask) = self.mask {
            write!(f, "/{}", mask)?;
        }
        Ok(())
    }
}

/// A classified token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// The exact run of digits that was matched
    Identifier(String),
    Address(Address),
}

impl Token {
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Token::Identifier(text) => Some(text),
            Token::Address(_) => None,
        }
    }

    pub fn as_address(&self) -> Option<&Address> {
        match self {
            Token::Address(address) => Some(address),
            Token::Identifier(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(text) => write!(f, "{}", text),
            Token::Address(address) => write!(f, "{}", address),
        }
    }
}

/// Parses with [`classify_complete`](crate::grammar::classify_complete)
impl FromStr for Token {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::grammar::classify_complete(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(mask: Option<u32>) -> Address {
        Address {
            network1: 10,
            network2: 128,
            host1: 16,
            host2: 255,
            mask,
        }
    }

    #[test]
    fn test_address_display() {
        assert_eq!(address(None).to_string(), "10.128.16.255");
        assert_eq!(address(Some(32)).to_string(), "10.128.16.255/32");
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Identifier("007".into()).to_string(), "007");
        assert_eq!(Token::Address(address(Some(8))).to_string(), "10.128.16.255/8");
    }

    #[test]
    fn test_accessors() {
        let id = Token::Identifier("42".into());
        assert_eq!(id.as_identifier(), Some("42"));
        assert!(id.as_address().is_none());

        let addr = Token::Address(address(None));
        assert_eq!(addr.as_address(), Some(&address(None)));
        assert!(addr.as_identifier().is_none());
    }

    #[test]
    fn test_from_str() {
        let token: Token = "10.128.16.255/32".parse().unwrap();
        assert_eq!(token, Token::Address(address(Some(32))));

        let token: Token = "2293487".parse().unwrap();
        assert_eq!(token, Token::Identifier("2293487".into()));

        assert!("10a.2bc.3#!.19".parse::<Token>().is_err());
    }

    #[test]
    fn test_display_roundtrip_drops_leading_zeros() {
        let token: Token = "010.001.0.00/08".parse().unwrap();
        assert_eq!(token.to_string(), "10.1.0.0/8");
    }
}
