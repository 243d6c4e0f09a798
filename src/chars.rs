//! Byte classes used by the grammar (RFC 5234 core rules, RFC 9110 `tchar`).
//!
//! All predicates match on raw byte values; none of them interpret code points.

#[inline]
pub(crate) const fn is_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'9')
}

#[inline]
pub(crate) const fn is_alpha(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z')
}

#[inline]
pub(crate) const fn is_lcalpha(b: u8) -> bool {
    matches!(b, b'a'..=b'z')
}

/// `tchar` from RFC 9110, section 5.6.2.
#[inline]
pub(crate) const fn is_tchar(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'#'
            | b'$'
            | b'%'
            | b'&'
            | b'\''
            | b'*'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~'
            | b'0'..=b'9'
            | b'A'..=b'Z'
            | b'a'..=b'z'
    )
}

#[inline]
pub(crate) const fn is_token_start(b: u8) -> bool {
    is_alpha(b) || b == b'*'
}

/// Bytes allowed after the first byte of a Token.
#[inline]
pub(crate) const fn is_token_char(b: u8) -> bool {
    is_tchar(b) || b == b':' || b == b'/'
}

#[inline]
pub(crate) const fn is_key_start(b: u8) -> bool {
    is_lcalpha(b) || b == b'*'
}

#[inline]
pub(crate) const fn is_key_char(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b'*')
}

/// `%x00-1f` and `%x7f-ff`: anything that is neither VCHAR nor SP.
#[inline]
pub(crate) const fn is_control_or_non_ascii(b: u8) -> bool {
    b <= 0x1f || b >= 0x7f
}

/// Decodes one lowercase hex digit.
#[inline]
pub(crate) const fn lowercase_hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tchar() {
        for b in b"!#$%&'*+-.^_`|~09AZaz".iter().copied() {
            assert!(is_tchar(b), "{}", b as char);
        }
        for b in b" \"(),/:;<=>?@[\\]{}".iter().copied() {
            assert!(!is_tchar(b), "{}", b as char);
        }
        assert!(!is_tchar(0x7f));
        assert!(!is_tchar(0x80));
    }

    #[test]
    fn test_token_chars() {
        assert!(is_token_start(b'*'));
        assert!(is_token_start(b'Q'));
        assert!(!is_token_start(b'1'));
        assert!(is_token_char(b':'));
        assert!(is_token_char(b'/'));
        assert!(!is_token_char(b';'));
    }

    #[test]
    fn test_key_chars() {
        assert!(is_key_start(b'a'));
        assert!(is_key_start(b'*'));
        assert!(!is_key_start(b'A'));
        assert!(!is_key_start(b'_'));
        assert!(!is_key_start(b'0'));
        for b in b"az09_-.*".iter().copied() {
            assert!(is_key_char(b));
        }
        assert!(!is_key_char(b'A'));
        assert!(!is_key_char(b'='));
    }

    #[test]
    fn test_control_range() {
        assert!(is_control_or_non_ascii(0x00));
        assert!(is_control_or_non_ascii(0x1f));
        assert!(!is_control_or_non_ascii(b' '));
        assert!(!is_control_or_non_ascii(b'~'));
        assert!(is_control_or_non_ascii(0x7f));
        assert!(is_control_or_non_ascii(0xff));
    }

    #[test]
    fn test_lowercase_hex() {
        assert_eq!(lowercase_hex_value(b'0'), Some(0));
        assert_eq!(lowercase_hex_value(b'9'), Some(9));
        assert_eq!(lowercase_hex_value(b'a'), Some(10));
        assert_eq!(lowercase_hex_value(b'f'), Some(15));
        assert_eq!(lowercase_hex_value(b'F'), None);
        assert_eq!(lowercase_hex_value(b'g'), None);
    }

    #[test]
    fn test_digit_and_alpha() {
        assert!(is_digit(b'5'));
        assert!(!is_digit(b'a'));
        assert!(is_alpha(b'z'));
        assert!(is_alpha(b'A'));
        assert!(!is_alpha(b'@'));
        assert!(is_lcalpha(b'q'));
        assert!(!is_lcalpha(b'Q'));
    }
}
