//! Configuration options for parsing.
//!
//! The grammar itself has no tunables. The only option is a cap on the input
//! length, which guards the parser against oversized field values before any
//! byte is inspected.
//!
//! ## Examples
//!
//! ```rust
//! use rfc9651::{parse_item_with_options, ParserOptions};
//!
//! let options = ParserOptions::new().with_max_input_len(4);
//! assert!(parse_item_with_options("1234", options.clone()).is_ok());
//! assert!(parse_item_with_options("12345", options).is_err());
//!
//! let options = ParserOptions::unlimited();
//! assert!(parse_item_with_options("1".repeat(15), options).is_ok());
//! ```

/// Default input length cap, in bytes.
///
/// Common HTTP servers reject field sections above 8 to 16 KiB, so a single
/// field value beyond this size is not worth parsing.
pub const DEFAULT_MAX_INPUT_LEN: usize = 16 * 1024;

/// Configuration options for the parser entry points.
///
/// # Examples
///
/// ```rust
/// use rfc9651::{ParserOptions, DEFAULT_MAX_INPUT_LEN};
///
/// let options = ParserOptions::new();
/// assert_eq!(options.max_input_len, Some(DEFAULT_MAX_INPUT_LEN));
///
/// let options = ParserOptions::new().without_input_limit();
/// assert_eq!(options.max_input_len, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum accepted input length in bytes, `None` for no limit.
    pub max_input_len: Option<usize>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
        }
    }
}

impl ParserOptions {
    /// Creates default options (16 KiB input cap).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options without an input length cap.
    #[must_use]
    pub fn unlimited() -> Self {
        ParserOptions {
            max_input_len: None,
        }
    }

    /// Sets the maximum accepted input length in bytes.
    #[must_use]
    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = Some(max);
        self
    }

    /// Removes the input length cap.
    #[must_use]
    pub fn without_input_limit(mut self) -> Self {
        self.max_input_len = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ParserOptions::default();
        assert_eq!(options, ParserOptions::new());
        assert_eq!(options.max_input_len, Some(16384));
    }

    #[test]
    fn test_builder_chain() {
        let options = ParserOptions::new().with_max_input_len(10);
        assert_eq!(options.max_input_len, Some(10));

        let options = options.without_input_limit();
        assert_eq!(options, ParserOptions::unlimited());
    }
}
