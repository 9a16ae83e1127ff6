//! `@property` style tags in entity documentation blocks.

/// Which tag a documented property came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTagKind {
    /// `@property`
    ReadWrite,
    /// `@property-read`
    Read,
    /// `@property-write`
    Write,
    /// `@tswink-property`, which wins over the other tags for the same name
    Override,
}

impl DocTagKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "@property" => Some(Self::ReadWrite),
            "@property-read" => Some(Self::Read),
            "@property-write" => Some(Self::Write),
            "@tswink-property" => Some(Self::Override),
            _ => None,
        }
    }
}

/// One documented property: `@tag <type> $<name> [description]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocProperty {
    pub kind: DocTagKind,
    /// Raw type signal, e.g. `int|null` or `array{key: string}`
    pub ty: String,
    pub name: String,
    pub description: Option<String>,
}

/// Extract every documented property from a doc block, in source order.
///
/// Comment decoration (`/**`, `*`, `*/`) is tolerated. Lines whose tag has
/// no `$name` are ignored.
pub fn parse_doc_properties(doc: &str) -> Vec<DocProperty> {
    doc.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<DocProperty> {
    let line = line
        .trim()
        .trim_start_matches("/**")
        .trim_end_matches("*/")
        .trim_start_matches('*')
        .trim();

    let (tag, rest) = line.split_once(char::is_whitespace)?;
    let kind = DocTagKind::from_tag(tag)?;
    let rest = rest.trim_start();

    // The type may itself contain spaces, so the name is the first `$` that
    // starts a whitespace-separated token.
    let dollar = find_name_start(rest)?;
    let ty = rest[..dollar].trim();
    let after = &rest[dollar + 1..];
    let name_len = after
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(after.len());
    if ty.is_empty() || name_len == 0 {
        return None;
    }

    let description = after[name_len..].trim();
    Some(DocProperty {
        kind,
        ty: ty.to_string(),
        name: after[..name_len].to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
    })
}

fn find_name_start(text: &str) -> Option<usize> {
    let mut prev_is_space = true;
    for (i, c) in text.char_indices() {
        if c == '$' && prev_is_space && i > 0 {
            return Some(i);
        }
        prev_is_space = c.is_whitespace();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_tags() {
        let props = parse_doc_properties(
            "/**\n * @property int $id\n * @property-read int|null $nullable_student_count Students\n */",
        );
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].kind, DocTagKind::ReadWrite);
        assert_eq!(props[0].ty, "int");
        assert_eq!(props[0].name, "id");
        assert_eq!(props[0].description, None);
        assert_eq!(props[1].kind, DocTagKind::Read);
        assert_eq!(props[1].ty, "int|null");
        assert_eq!(props[1].description.as_deref(), Some("Students"));
    }

    #[test]
    fn test_type_with_spaces() {
        let props = parse_doc_properties(
            "@property array{stringProperty: string, numberProperty: int} $associativeArray",
        );
        assert_eq!(props.len(), 1);
        assert_eq!(
            props[0].ty,
            "array{stringProperty: string, numberProperty: int}"
        );
        assert_eq!(props[0].name, "associativeArray");
    }

    #[test]
    fn test_override_and_write_tags() {
        let props = parse_doc_properties(
            "@tswink-property string $tswinkOverride\n@property-write string $password",
        );
        assert_eq!(props[0].kind, DocTagKind::Override);
        assert_eq!(props[1].kind, DocTagKind::Write);
    }

    #[test]
    fn test_ignores_other_lines() {
        let props = parse_doc_properties(
            "Some description\n@mixin Builder\n@property int\n@return void",
        );
        assert!(props.is_empty());
    }
}
