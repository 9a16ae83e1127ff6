//! Fragments of generated code, built ahead of emission.

/// A piece of generated code, positioned relative to the builder's
/// indentation when it is emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// Emitted verbatim: no indentation, no newline
    Raw(String),
    /// Indented, but without a trailing newline
    IndentedRaw(String),
    /// Header line, body one level deeper, then the optional closing line
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn indented_raw(s: impl Into<String>) -> Self {
        Self::IndentedRaw(s.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: Option<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }
}

/// Nodes that can be emitted into a [`CodeBuilder`](super::CodeBuilder).
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_constructor() {
        let block = CodeFragment::block(
            "constructor() {",
            vec![CodeFragment::line("super();")],
            Some("}".to_string()),
        );
        assert_eq!(
            block,
            CodeFragment::Block {
                header: "constructor() {".to_string(),
                body: vec![CodeFragment::Line("super();".to_string())],
                close: Some("}".to_string()),
            }
        );
    }

    #[test]
    fn test_fragment_renders_itself() {
        let line = CodeFragment::indented_raw("// <x>");
        assert_eq!(line.to_fragments(), [CodeFragment::IndentedRaw("// <x>".to_string())]);
    }
}
