//! Hand-written regions that survive regeneration.
//!
//! Each region is delimited by a pair of sentinel comments. Whatever bytes sit
//! strictly between the two sentinels in the previous output are copied
//! verbatim into the new output. The splice is purely textual.

use crate::builder::{CodeFragment, Renderable};

/// The preserved regions of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Extra imports, right after the generated import lines
    ImportDeclarations,
    /// Extra members, inside the class or interface body
    ClassDeclarations,
    /// Free-form code at the end of the file
    Code,
}

impl Region {
    pub const ALL: [Region; 3] = [
        Region::ImportDeclarations,
        Region::ClassDeclarations,
        Region::Code,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::ImportDeclarations => "non-auto-generated-import-declarations",
            Self::ClassDeclarations => "non-auto-generated-class-declarations",
            Self::Code => "non-auto-generated-code",
        }
    }

    pub fn open_marker(self) -> String {
        format!("// <{}>", self.tag())
    }

    pub fn close_marker(self) -> String {
        format!("// </{}>", self.tag())
    }

    /// The bytes strictly between this region's sentinels in `text`.
    ///
    /// Returns `None` unless both sentinels are present, in order.
    pub fn extract(self, text: &str) -> Option<&str> {
        let open = self.open_marker();
        let start = text.find(&open)? + open.len();
        let end = start + text[start..].find(&self.close_marker())?;
        Some(&text[start..end])
    }
}

/// Preserved content captured from a previous output, one slot per region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreservedRegions {
    imports: Option<String>,
    class_declarations: Option<String>,
    code: Option<String>,
}

impl PreservedRegions {
    /// Capture every region found in `prior`.
    pub fn extract(prior: &str) -> Self {
        let mut regions = Self::default();
        for region in Region::ALL {
            if let Some(content) = region.extract(prior) {
                regions.set(region, content);
            }
        }
        regions
    }

    pub fn get(&self, region: Region) -> Option<&str> {
        self.slot(region).as_deref()
    }

    pub fn set(&mut self, region: Region, content: impl Into<String>) {
        *self.slot_mut(region) = Some(content.into());
    }

    pub fn is_empty(&self) -> bool {
        Region::ALL.iter().all(|r| self.get(*r).is_none())
    }

    fn slot(&self, region: Region) -> &Option<String> {
        match region {
            Region::ImportDeclarations => &self.imports,
            Region::ClassDeclarations => &self.class_declarations,
            Region::Code => &self.code,
        }
    }

    fn slot_mut(&mut self, region: Region) -> &mut Option<String> {
        match region {
            Region::ImportDeclarations => &mut self.imports,
            Region::ClassDeclarations => &mut self.class_declarations,
            Region::Code => &mut self.code,
        }
    }
}

/// A region ready to be emitted at the builder's current indentation.
///
/// An empty slot renders as one blank line between the sentinels, with the
/// closing sentinel at `close_indent`.
#[derive(Debug, Clone)]
pub struct RegionBlock<'a> {
    region: Region,
    content: Option<&'a str>,
    close_indent: String,
}

impl<'a> RegionBlock<'a> {
    pub fn new(region: Region, content: Option<&'a str>, close_indent: impl Into<String>) -> Self {
        Self {
            region,
            content,
            close_indent: close_indent.into(),
        }
    }
}

impl Renderable for RegionBlock<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let content = match self.content {
            Some(content) => content.to_string(),
            None => format!("\n\n{}", self.close_indent),
        };
        vec![
            CodeFragment::indented_raw(self.region.open_marker()),
            CodeFragment::raw(content),
            CodeFragment::raw(format!("{}\n", self.region.close_marker())),
        ]
    }
}
