//! Pivot interfaces: one per pivot table, shared by every relation that
//! goes through that table.

use indexmap::{IndexMap, IndexSet};
use tswink_codegen::{CodeBuilder, GenerationOptions};
use tswink_core::to_pascal_case;
use tswink_manifest::{ColumnSchema, ModelSource, PivotSource, Schema};

use crate::{
    error::{Error, Result},
    types::{ANY, column_type},
};

/// Columns picked when a relation does not list its pivot columns.
fn is_default_pivot_column(column: &ColumnSchema) -> bool {
    !matches!(column.name.as_str(), "id" | "created_at" | "updated_at")
        && !column.name.ends_with("_id")
}

/// The interface generated for one pivot table.
#[derive(Debug, Clone)]
pub struct PivotInterface {
    table: String,
    name: String,
    columns: Vec<ColumnSchema>,
    included: IndexSet<String>,
    explicit: bool,
}

impl PivotInterface {
    fn new(table: &str, columns: Vec<ColumnSchema>) -> Self {
        Self {
            table: table.to_string(),
            name: format!("{}Pivot", to_pascal_case(table)),
            columns,
            included: IndexSet::new(),
            explicit: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Included columns with their TypeScript types, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.columns
            .iter()
            .filter(|c| self.included.contains(&c.name))
            .map(|c| (c.name.as_str(), column_type(&c.ty).unwrap_or(ANY)))
    }

    /// Explicit column lists are unioned; inferred columns only apply while
    /// no relation has been explicit.
    fn include(&mut self, columns: &[&ColumnSchema], explicit: bool) {
        if explicit {
            if !self.explicit {
                self.included.clear();
                self.explicit = true;
            }
        } else if self.explicit || !self.included.is_empty() {
            return;
        }
        self.included
            .extend(columns.iter().map(|c| c.name.clone()));
    }

    /// Render the pivot file. Dates stay `Date` here in every mode.
    pub fn render(&self, options: &GenerationOptions) -> String {
        let term = options.terminator();
        let mut builder = CodeBuilder::new(options.indent);
        builder
            .push_line(&format!(
                "// Auto-generated pivot interface for table: {}",
                self.table
            ))
            .push_line(&format!("export default interface {} {{", self.name))
            .push_indent();
        for (column, ty) in self.fields() {
            builder.push_line(&format!("{column}?: {ty}{term}"));
        }
        builder.push_dedent().push_line("}");
        builder.build()
    }
}

/// How one relation uses its pivot interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotUse {
    pub interface_name: String,
    /// Non-nullable columns of the relation's column set
    pub required: IndexSet<String>,
}

/// Every pivot table referenced during a run, keyed by table name.
#[derive(Debug, Clone)]
pub struct PivotRegistry<'a> {
    schema: Option<&'a Schema>,
    pivots: IndexMap<String, PivotInterface>,
}

impl<'a> PivotRegistry<'a> {
    pub fn new(schema: Option<&'a Schema>) -> Self {
        Self {
            schema,
            pivots: IndexMap::new(),
        }
    }

    /// Register the pivots of every relation of `model`.
    ///
    /// All models of a run are registered before any relation is referenced,
    /// so each table's interface is final by the time wrappers are built.
    pub fn register_model(&mut self, model: &ModelSource) -> Result<()> {
        for relation in &model.relations {
            if let Some(pivot) = &relation.pivot {
                self.register(&relation.name, pivot)?;
            }
        }
        Ok(())
    }

    /// Register a relation's use of a pivot table.
    pub fn register(&mut self, relation: &str, pivot: &PivotSource) -> Result<()> {
        let (columns, selected, explicit) = self.select(relation, pivot)?;
        self.pivots
            .entry(pivot.table.clone())
            .or_insert_with(|| PivotInterface::new(&pivot.table, columns.to_vec()))
            .include(&selected, explicit);
        Ok(())
    }

    /// The interface a relation uses, with its required columns limited to
    /// the fields the interface ends up with.
    pub fn reference(&self, relation: &str, pivot: &PivotSource) -> Result<PivotUse> {
        let (_, selected, _) = self.select(relation, pivot)?;
        let interface = self
            .pivots
            .get(&pivot.table)
            .ok_or_else(|| Error::PivotNotRegistered {
                relation: relation.to_string(),
                table: pivot.table.clone(),
            })?;

        Ok(PivotUse {
            interface_name: interface.name.clone(),
            required: selected
                .iter()
                .filter(|c| !c.nullable && interface.included.contains(&c.name))
                .map(|c| c.name.clone())
                .collect(),
        })
    }

    /// The table's columns, the relation's selected columns and whether the
    /// selection was listed explicitly.
    fn select(
        &self,
        relation: &str,
        pivot: &PivotSource,
    ) -> Result<(&'a [ColumnSchema], Vec<&'a ColumnSchema>, bool)> {
        let table = self
            .schema
            .and_then(|s| s.table(&pivot.table))
            .ok_or_else(|| Error::PivotTableNotFound {
                relation: relation.to_string(),
                table: pivot.table.clone(),
            })?;

        let explicit = !pivot.columns.is_empty();
        let selected: Vec<&ColumnSchema> = if explicit {
            pivot
                .columns
                .iter()
                .map(|name| {
                    table.column(name).ok_or_else(|| Error::PivotColumnNotFound {
                        relation: relation.to_string(),
                        table: pivot.table.clone(),
                        column: name.clone(),
                    })
                })
                .collect::<Result<_>>()?
        } else {
            table
                .columns
                .iter()
                .filter(|c| is_default_pivot_column(c))
                .collect()
        };

        for column in &selected {
            if column_type(&column.ty).is_none() {
                return Err(Error::UnknownColumnType {
                    table: pivot.table.clone(),
                    column: column.name.clone(),
                    ty: column.ty.clone(),
                });
            }
        }
        Ok((&table.columns, selected, explicit))
    }

    pub fn get(&self, table: &str) -> Option<&PivotInterface> {
        self.pivots.get(table)
    }

    pub fn pivots(&self) -> impl Iterator<Item = &PivotInterface> {
        self.pivots.values()
    }
}
