//! Indentation configuration for code generation.

use tswink_manifest::{IndentConfig, IndentKeyword};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the generator default.
    pub const DEFAULT: Self = Self::Spaces(4);

    /// The text of one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(n) => " ".repeat(usize::from(*n)),
            Self::Tab => "\t".to_string(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<IndentConfig> for Indent {
    fn from(config: IndentConfig) -> Self {
        match config {
            IndentConfig::Spaces(n) => Self::Spaces(n),
            IndentConfig::Keyword(IndentKeyword::Tab) => Self::Tab,
        }
    }
}
