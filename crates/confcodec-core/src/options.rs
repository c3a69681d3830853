//! Knobs for [`crate::decode_with`] and [`crate::encode_with`].

/// Width of one leading tab when measuring indentation.
pub const DEFAULT_TAB_WIDTH: usize = 2;

/// Spaces emitted per nesting level by the encoder.
pub const INDENT_UNIT: &str = "  ";

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Fail with [`crate::CodecError::MalformedDocument`] on the first line
    /// that would otherwise be skipped.
    pub strict: bool,
    /// Indentation units contributed by each leading tab.
    pub tab_width: usize,
}

impl DecodeOptions {
    /// Lenient decoding with the default tab width.
    pub const fn lenient() -> Self {
        Self {
            strict: false,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Strict decoding with the default tab width.
    pub const fn strict() -> Self {
        Self {
            strict: true,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::lenient()
    }
}

/// Encoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Nesting depth of the outermost lines (each level is two spaces).
    pub indent: usize,
}
