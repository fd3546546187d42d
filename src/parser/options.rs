//! Parsing options and configuration.

/// Options for parsing table blocks.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// How the header-separator row is recognized
    pub separator_mode: SeparatorMode,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set separator mode.
    pub fn with_separator_mode(mut self, mode: SeparatorMode) -> Self {
        self.separator_mode = mode;
        self
    }

    /// Only drop the second line when it looks like a separator row.
    pub fn detect_separator(mut self) -> Self {
        self.separator_mode = SeparatorMode::Detect;
        self
    }
}

/// How the second line of a table block is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorMode {
    /// Always drop the second line, whatever it contains.
    ///
    /// A table without a separator row loses its first data row in this mode.
    #[default]
    Positional,
    /// Drop the second line only if it consists of dashes, colons and pipes
    Detect,
}
