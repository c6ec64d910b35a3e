use std::fmt;

/// A rejected hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string does not start with `#`.
    MissingHash,
    /// The digits after `#` are not exactly six long; carries the observed length.
    InvalidLength(usize),
    /// One of the six digits is not `0-9`, `a-f` or `A-F`.
    InvalidHex,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::MissingHash => f.write_str("color must start with '#'"),
            ColorError::InvalidLength(n) => {
                write!(f, "color must be #RRGGBB, got {} digits", n)
            }
            ColorError::InvalidHex => f.write_str("color contains invalid hex digits"),
        }
    }
}

impl std::error::Error for ColorError {}
