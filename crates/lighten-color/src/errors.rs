#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Input was not exactly 6 hex digits after stripping a leading `#`.
    /// Carries the stripped string so callers can echo it back.
    #[error("hex color must be 6 digits: {0}")]
    BadLength(String),

    /// Input had the right length but contained a non-hex character.
    #[error("invalid hex digit in color: {0}")]
    BadDigit(String),
}

impl ColorError {
    /// The `#`-stripped input that failed to parse.
    pub fn stripped(&self) -> &str {
        match self {
            Self::BadLength(s) | Self::BadDigit(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        let err = ColorError::BadLength("fff".into());
        assert_eq!(err.to_string(), "hex color must be 6 digits: fff");

        let err = ColorError::BadDigit("zzzzzz".into());
        assert_eq!(err.to_string(), "invalid hex digit in color: zzzzzz");
    }

    #[test]
    fn color_error_carries_stripped_input() {
        let err = ColorError::BadLength("1234".into());
        assert_eq!(err.stripped(), "1234");

        let err = ColorError::BadDigit("gg0011".into());
        assert_eq!(err.stripped(), "gg0011");
    }
}
