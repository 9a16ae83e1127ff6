//! Indentation-aware text buffer for generated files.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated lines at a current indentation level.
///
/// The `push_*` methods work through `&mut self` so a renderer can thread one
/// builder through several helpers; `line`, `indent` and `dedent` consume and
/// return the builder for short chains.
///
/// ```
/// use tswink_codegen::builder::{CodeBuilder, Indent};
///
/// let code = CodeBuilder::new(Indent::Spaces(2))
///     .line("export enum Status {")
///     .indent()
///     .line("OPEN = 1,")
///     .dedent()
///     .line("}")
///     .build();
/// assert_eq!(code, "export enum Status {\n  OPEN = 1,\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    unit: String,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            unit: indent.unit(),
            buffer: String::new(),
        }
    }

    /// Append `s` at the current indentation, followed by a newline.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Append an empty line; blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append `s` verbatim.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Append `s` at the current indentation, without a newline.
    pub fn push_indented_raw(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Append every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::IndentedRaw(s) => {
                self.push_indented_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                for inner in body {
                    self.apply(inner);
                }
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// The text of one indentation level.
    pub fn indent_unit(&self) -> &str {
        &self.unit
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.level {
            self.buffer.push_str(&self.unit);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::DEFAULT)
    }
}
