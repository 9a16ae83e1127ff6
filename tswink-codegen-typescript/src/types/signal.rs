//! Parser for textual type signals such as `int|null`, `string[]`,
//! `array<int, array{foo: bool}>` or `Collection<Tag>`.

use std::str::FromStr;

use thiserror::Error;
use tswink_core::base_name;

/// A parsed type signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSignal {
    /// A bare name: a scalar keyword or an entity name, possibly namespaced
    Named(String),
    /// `?T`
    Nullable(Box<TypeSignal>),
    /// `A|B|C`
    Union(Vec<TypeSignal>),
    /// `T[]`, `array<T>`, `list<T>` or `array<K, V>`
    List {
        key: Option<Box<TypeSignal>>,
        value: Box<TypeSignal>,
    },
    /// `array{key: T, other?: U}`
    Shape(Vec<ShapeField>),
    /// Any other `Name<Args>`
    Generic { name: String, args: Vec<TypeSignal> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeField {
    pub key: String,
    pub optional: bool,
    pub ty: TypeSignal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type signal '{input}': {reason} at offset {offset}")]
pub struct SignalError {
    pub input: String,
    pub offset: usize,
    pub reason: &'static str,
}

impl FromStr for TypeSignal {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser { src: s, pos: 0 };
        let signal = parser.union()?;
        parser.skip_ws();
        if parser.pos != s.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(signal)
    }
}

fn is_list_keyword(name: &str) -> bool {
    matches!(
        base_name(name).to_ascii_lowercase().as_str(),
        "array" | "list" | "iterable" | "non-empty-array" | "non-empty-list"
    )
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char, reason: &'static str) -> Result<(), SignalError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(reason))
        }
    }

    fn error(&self, reason: &'static str) -> SignalError {
        SignalError {
            input: self.src.to_string(),
            offset: self.pos,
            reason,
        }
    }

    fn union(&mut self) -> Result<TypeSignal, SignalError> {
        let mut items = vec![self.item()?];
        while self.eat('|') {
            items.push(self.item()?);
        }
        Ok(match items.len() {
            1 => items.remove(0),
            _ => TypeSignal::Union(items),
        })
    }

    fn item(&mut self) -> Result<TypeSignal, SignalError> {
        if self.eat('?') {
            return Ok(TypeSignal::Nullable(Box::new(self.item()?)));
        }
        let mut signal = self.primary()?;
        loop {
            self.skip_ws();
            if !self.src[self.pos..].starts_with("[]") {
                break;
            }
            self.pos += 2;
            signal = TypeSignal::List {
                key: None,
                value: Box::new(signal),
            };
        }
        Ok(signal)
    }

    fn primary(&mut self) -> Result<TypeSignal, SignalError> {
        if self.eat('(') {
            let inner = self.union()?;
            self.expect(')', "expected ')'")?;
            return Ok(inner);
        }

        let name = self.name()?;
        if self.eat('{') {
            if !is_list_keyword(&name) {
                return Err(self.error("only arrays can have a shape"));
            }
            return Ok(TypeSignal::Shape(self.shape_fields()?));
        }
        if self.eat('<') {
            let mut args = vec![self.union()?];
            while self.eat(',') {
                args.push(self.union()?);
            }
            self.expect('>', "expected '>'")?;

            if !is_list_keyword(&name) {
                return Ok(TypeSignal::Generic { name, args });
            }
            let value = args.pop().map(Box::new);
            let key = args.pop().map(Box::new);
            return match (value, args.is_empty()) {
                (Some(value), true) => Ok(TypeSignal::List { key, value }),
                _ => Err(self.error("arrays take one or two type arguments")),
            };
        }
        Ok(TypeSignal::Named(name))
    }

    fn name(&mut self) -> Result<String, SignalError> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || matches!(c, '_' | '\\' | '-') {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        if self.pos == start {
            return Err(self.error("expected a type name"));
        }
        Ok(self.src[start..self.pos].to_string())
    }

    fn shape_fields(&mut self) -> Result<Vec<ShapeField>, SignalError> {
        let mut fields = Vec::new();
        loop {
            if self.eat('}') {
                break;
            }
            let key = self.name()?;
            let optional = self.eat('?');
            self.expect(':', "expected ':' after shape key")?;
            let ty = self.union()?;
            fields.push(ShapeField { key, optional, ty });
            if !self.eat(',') {
                self.expect('}', "expected ',' or '}'")?;
                break;
            }
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> TypeSignal {
        TypeSignal::Named(name.to_string())
    }

    fn parse(s: &str) -> TypeSignal {
        s.parse().expect("valid signal")
    }

    #[test]
    fn test_union_and_nullable() {
        assert_eq!(
            parse("int|null"),
            TypeSignal::Union(vec![named("int"), named("null")])
        );
        assert_eq!(parse("?string"), TypeSignal::Nullable(Box::new(named("string"))));
    }

    #[test]
    fn test_suffix_lists_nest() {
        assert_eq!(
            parse("string[][]"),
            TypeSignal::List {
                key: None,
                value: Box::new(TypeSignal::List {
                    key: None,
                    value: Box::new(named("string")),
                }),
            }
        );
    }

    #[test]
    fn test_keyed_array() {
        assert_eq!(
            parse("array<int, string>"),
            TypeSignal::List {
                key: Some(Box::new(named("int"))),
                value: Box::new(named("string")),
            }
        );
    }

    #[test]
    fn test_shape() {
        let signal = parse("array{key: string, count?: int}");
        let TypeSignal::Shape(fields) = signal else {
            panic!("expected a shape");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].key, "key");
        assert!(!fields[0].optional);
        assert_eq!(fields[1].ty, named("int"));
        assert!(fields[1].optional);
    }

    #[test]
    fn test_generic_collection() {
        assert_eq!(
            parse("Illuminate\\Support\\Collection<App\\Models\\Tag>"),
            TypeSignal::Generic {
                name: "Illuminate\\Support\\Collection".to_string(),
                args: vec![named("App\\Models\\Tag")],
            }
        );
    }

    #[test]
    fn test_parenthesized_list() {
        assert_eq!(
            parse("(int|string)[]"),
            TypeSignal::List {
                key: None,
                value: Box::new(TypeSignal::Union(vec![named("int"), named("string")])),
            }
        );
    }

    #[test]
    fn test_malformed_signals() {
        assert!("array<int".parse::<TypeSignal>().is_err());
        assert!("int|".parse::<TypeSignal>().is_err());
        assert!("Tag{a: int}".parse::<TypeSignal>().is_err());
        assert!("string )".parse::<TypeSignal>().is_err());
    }
}
