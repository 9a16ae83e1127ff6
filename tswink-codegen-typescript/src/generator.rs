//! TypeScript generator for a whole project.

use std::path::Path;

use eyre::{Result, WrapErr};
use log::{debug, info};
use tswink_codegen::{
    GenerateResult, GenerationContext, GenerationOptions, LanguageCodegen, PreviewFile,
    generation::PreservedRegions,
};
use tswink_core::{File, WriteResult, read_existing};
use tswink_manifest::{EntitySource, Project};

use crate::{
    builder::EntityBuilder,
    entity::Entity,
    pivot::PivotRegistry,
    render::render_entity,
};

/// Generates models, enums and pivot interfaces for a project.
///
/// Every file is rendered before anything is written, so a failing entity
/// leaves the output directories untouched.
pub struct Generator<'a> {
    project: &'a Project,
    options: GenerationOptions,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.render_all()
    }

    fn generate(&self) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for file in self.render_all()? {
            match File::new(&file.path, file.content).write()? {
                WriteResult::Written => {
                    info!("wrote {}", file.path.display());
                    result.written.push(file.path);
                }
                WriteResult::Unchanged => {
                    debug!("unchanged {}", file.path.display());
                    result.unchanged.push(file.path);
                }
            }
        }
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self {
            project,
            options: GenerationOptions::from(&project.config().options),
        }
    }

    /// Context for `New<Name>` variants: every model name is renamed.
    fn new_model_context(&self) -> GenerationContext {
        self.project
            .sources()
            .iter()
            .filter_map(|s| s.entity.as_model())
            .fold(GenerationContext::new_model(&self.options), |ctx, model| {
                ctx.with_type_mapping(&model.name, format!("New{}", model.name))
            })
    }

    fn render_all(&self) -> Result<Vec<PreviewFile>> {
        let builder = EntityBuilder::new(&self.options, self.project.schema());
        let mut pivots = PivotRegistry::new(self.project.schema());
        let regular = GenerationContext::regular(&self.options);
        let new_model = self.new_model_context();
        let classes_dir = self.project.classes_dir();
        let enums_dir = self.project.enums_dir();

        for source in self.project.sources() {
            if let EntitySource::Model(model) = &source.entity {
                pivots.register_model(model).wrap_err_with(|| {
                    format!(
                        "failed to register pivots of '{}' from {}",
                        model.name,
                        source.path.display()
                    )
                })?;
            }
        }

        let mut files = Vec::new();
        for source in self.project.sources() {
            let built = match &source.entity {
                EntitySource::Model(model) => builder.build_model(model, &pivots),
                EntitySource::Enum(enumeration) => builder.build_enum(enumeration),
            };
            let mut entity = built.wrap_err_with(|| {
                format!(
                    "failed to generate '{}' from {}",
                    source.entity.name(),
                    source.path.display()
                )
            })?;

            if entity.is_enum() {
                files.push(self.render_file(&mut entity, &enums_dir, &regular)?);
                continue;
            }
            files.push(self.render_file(&mut entity, &classes_dir, &regular)?);
            if self.options.separate_new_models {
                files.push(self.render_file(&mut entity, &classes_dir, &new_model)?);
            }
        }

        for pivot in pivots.pivots() {
            debug!("rendering pivot interface {}", pivot.name());
            files.push(PreviewFile {
                path: classes_dir.join(format!("{}.{}", pivot.name(), self.file_extension())),
                content: pivot.render(&self.options),
            });
        }

        Ok(files)
    }

    /// Render one file, carrying over the hand-written regions of the file it
    /// replaces.
    fn render_file(
        &self,
        entity: &mut Entity,
        dir: &Path,
        ctx: &GenerationContext,
    ) -> Result<PreviewFile> {
        let path = dir.join(format!(
            "{}.{}",
            ctx.mapped_name(&entity.name),
            self.file_extension()
        ));
        entity.preserved = match read_existing(&path)? {
            Some(prior) => {
                let regions = PreservedRegions::extract(&prior);
                if !regions.is_empty() {
                    debug!("preserving hand-written regions of {}", path.display());
                }
                regions
            }
            None => PreservedRegions::default(),
        };

        Ok(PreviewFile {
            content: render_entity(entity, ctx),
            path,
        })
    }
}
