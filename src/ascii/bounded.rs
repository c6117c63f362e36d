use super::digit::digits;
use crate::byte_cursor::ByteCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Inclusive bounds on the number of digits in a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    /// Network and host fields of an address
    pub const OCTET: Bounds = Bounds::new(1, 3);
    /// Subnet mask length
    pub const MASK: Bounds = Bounds::new(1, 2);

    pub const fn new(min: usize, max: usize) -> Self {
        Bounds { min, max }
    }

    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

/// Parser for a digit run whose length must fall within `bounds`
///
/// Chomps the maximal run first and checks the length afterwards, so `"1234"`
/// with a maximum of three is an error rather than `123`. The error is reported
/// at the end of the run: the digits were consumed, so an unguarded `or` does not
/// fall back past it. An empty run that the bounds allow decodes to `0`.
pub struct BoundedDigits {
    bounds: Bounds,
}

impl<'code> Parser<'code> for BoundedDigits {
    type Output = u32;
    type Error = ParseError<'code>;

    fn parse(
        &self,
        cursor: ByteCursor<'code>,
    ) -> Result<(Self::Output, ByteCursor<'code>), Self::Error> {
        let (span, next) = digits().parse(cursor)?;

        let observed = span.len();
        if !self.bounds.contains(observed) {
            return Err(ParseError::OutOfRange {
                observed,
                min: self.bounds.min,
                max: self.bounds.max,
                loc: next.loc(),
            });
        }

        // The run is all ASCII digits, so this only fails on overflow
        let value = span
            .slice()
            .iter()
            .try_fold(0u32, |acc, &digit| {
                acc.checked_mul(10)?.checked_add(u32::from(digit - b'0'))
            })
            .ok_or_else(|| ParseError::NumberTooLarge {
                digits: span.as_str().into_owned(),
                loc: cursor.loc(),
            })?;

        Ok((value, next))
    }
}

pub fn bounded_digits(bounds: Bounds) -> BoundedDigits {
    BoundedDigits { bounds }
}
