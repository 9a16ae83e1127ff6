//! A loaded project: configuration, entity sources and schema.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{EntitySource, Error, ProjectConfig, Result, Schema};

/// An entity source together with the file it came from.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub entity: EntitySource,
}

/// Everything needed for one generation run.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
    sources: Vec<SourceFile>,
    schema: Option<Schema>,
}

impl Project {
    /// Open a project from its tswink.toml; relative paths resolve against
    /// the config file's directory.
    pub fn open(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let config = ProjectConfig::from_file(config_path)?;
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::from_config(root, config)
    }

    /// Build a project from an already parsed configuration.
    pub fn from_config(root: impl Into<PathBuf>, config: ProjectConfig) -> Result<Self> {
        let root = root.into();

        let schema = match &config.sources.schema {
            Some(path) => Some(Schema::from_file(root.join(path))?),
            None => None,
        };

        let mut sources = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        for path in discover(&root, &config.sources.entities)? {
            let entity = EntitySource::from_file(&path)?;
            if let Some(first) = seen.get(entity.name()) {
                return Err(Box::new(Error::DuplicateEntity {
                    name: entity.name().to_string(),
                    first: first.clone(),
                    second: path,
                }));
            }
            seen.insert(entity.name().to_string(), path.clone());
            sources.push(SourceFile { path, entity });
        }

        Ok(Self {
            root,
            config,
            sources,
            schema,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Destination directory for model and pivot files.
    pub fn classes_dir(&self) -> PathBuf {
        self.root.join(&self.config.output.classes)
    }

    /// Destination directory for enum files.
    pub fn enums_dir(&self) -> PathBuf {
        self.root.join(&self.config.output.enums)
    }
}

/// Resolve configured entity paths to source files.
///
/// Directories are walked recursively in file-name order; duplicates are
/// dropped so a file listed twice is only loaded once.
fn discover(root: &Path, entries: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in entries {
        let path = root.join(entry);
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            for item in WalkDir::new(&path).sort_by_file_name() {
                let item = item.map_err(|source| {
                    Box::new(Error::Discovery {
                        path: path.clone(),
                        source,
                    })
                })?;
                let is_toml = item.path().extension().map(|e| e == "toml").unwrap_or(false);
                if item.file_type().is_file() && is_toml {
                    files.push(item.into_path());
                }
            }
        } else {
            return Err(Box::new(Error::MissingSource { path }));
        }
    }

    let mut unique = Vec::with_capacity(files.len());
    for file in files {
        if !unique.contains(&file) {
            unique.push(file);
        }
    }
    Ok(unique)
}
