//! Enum service methods: exported functions returning fixed case lists.

use tswink_codegen::{CodeFragment, GenerationContext};
use tswink_manifest::{EnumSource, MethodSource, ServiceValue};

use crate::{
    ast::{ArrowFn, ExportedObject},
    error::{Error, Result},
};

/// An exported method and the cases it returned at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceMethod {
    pub export_name: String,
    pub cases: Vec<String>,
}

impl ServiceMethod {
    fn arrow_fn(&self, enum_name: &str, ctx: &GenerationContext) -> ArrowFn {
        let term = ctx.terminator();
        if self.cases.is_empty() {
            return ArrowFn::new("").body_line(format!("return []{term}"));
        }
        ArrowFn::new("").body_fragment(CodeFragment::block(
            "return [",
            self.cases
                .iter()
                .map(|case| CodeFragment::line(format!("{enum_name}.{case},")))
                .collect(),
            Some(format!("]{term}")),
        ))
    }
}

/// Evaluate and validate every exported method of `source`, in declaration
/// order.
pub fn service_methods(source: &EnumSource) -> Result<Vec<ServiceMethod>> {
    source
        .methods
        .iter()
        .filter_map(|method| {
            method
                .export_name()
                .map(|export_name| validate(source, method, export_name))
        })
        .collect()
}

fn validate(source: &EnumSource, method: &MethodSource, export_name: &str) -> Result<ServiceMethod> {
    let enum_name = source.qualified_name();
    let qualified = format!("{enum_name}::{}", method.name);

    let value = method
        .evaluate(source)
        .map_err(|message| Error::ServiceExecution {
            method: qualified.clone(),
            message,
        })?;
    let items = match value {
        ServiceValue::Array(items) => items,
        other => {
            return Err(Error::ServiceNotArray {
                method: qualified,
                got: other.type_name().to_string(),
            });
        }
    };

    let mut cases = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            ServiceValue::Case {
                enum_name: owner,
                case,
            } if owner == enum_name => {
                if !source.has_case(&case) {
                    return Err(Error::ServiceUnknownCase {
                        method: qualified,
                        case,
                        index,
                    });
                }
                cases.push(case);
            }
            ServiceValue::Case {
                enum_name: owner,
                case,
            } => {
                return Err(Error::ServiceWrongEnum {
                    method: qualified,
                    found: format!("{owner}::{case}"),
                    index,
                    expected: enum_name,
                });
            }
            other => {
                return Err(Error::ServiceNonCase {
                    method: qualified,
                    found: other.type_name().to_string(),
                    index,
                    expected: enum_name,
                });
            }
        }
    }

    Ok(ServiceMethod {
        export_name: export_name.to_string(),
        cases,
    })
}

/// `export const <Enum>Service = { ... }`.
pub fn service_object(
    enum_name: &str,
    methods: &[ServiceMethod],
    ctx: &GenerationContext,
) -> ExportedObject {
    methods.iter().fold(
        ExportedObject::new(format!("{enum_name}Service")),
        |object, method| object.arrow_fn(&method.export_name, method.arrow_fn(enum_name, ctx)),
    )
}
