use crate::chomp::{ChompWhile, chomp_while};

/// ASCII decimal digit. Other Unicode digits are not accepted.
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Parser for a run of zero or more ASCII digits
pub fn digits() -> ChompWhile<fn(u8) -> bool> {
    chomp_while(is_digit as fn(u8) -> bool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_cursor::ByteCursor;
    use crate::cursor::Cursor;
    use crate::parser::Parser;

    #[test]
    fn test_is_digit() {
        for byte in b'0'..=b'9' {
            assert!(is_digit(byte));
        }
        for byte in [b'a', b'.', b'/', b' ', 0xD9] {
            assert!(!is_digit(byte));
        }
    }

    #[test]
    fn test_digits_rejects_non_ascii_digits() {
        // Arabic-Indic five
        let (span, cursor) = digits().parse(ByteCursor::new("٥".as_bytes())).unwrap();
        assert!(span.is_empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_digits_run() {
        let (span, cursor) = digits().parse(ByteCursor::new(b"0123/4")).unwrap();
        assert_eq!(span.as_str(), "0123");
        assert_eq!(cursor.value(), Some(b'/'));
    }
}
