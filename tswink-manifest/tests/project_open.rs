//! Integration tests for loading a whole project from disk.

use std::{fs, path::Path};

use tempfile::TempDir;
use tswink_manifest::{EntitySource, Error, Project};

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().expect("path has a parent")).expect("create dirs");
    fs::write(path, content).expect("write file");
}

const CONFIG: &str = r#"
[output]
classes = "out/models"
enums = "out/enums"

[sources]
entities = ["entities"]
schema = "schema.toml"

[options]
interface = true
"#;

#[test]
fn test_open_loads_sources_and_schema() {
    let temp = TempDir::new().expect("temp dir");
    write(temp.path(), "tswink.toml", CONFIG);
    write(
        temp.path(),
        "schema.toml",
        "[[tables.tags.columns]]\nname = \"id\"\ntype = \"bigint\"\n",
    );
    write(
        temp.path(),
        "entities/Tag.toml",
        "namespace = \"App\\\\Models\"\nname = \"Tag\"\ntable = \"tags\"\n",
    );
    write(
        temp.path(),
        "entities/enums/Permissions.toml",
        "kind = \"enum\"\nname = \"Permissions\"\n",
    );

    let project = Project::open(temp.path().join("tswink.toml")).expect("project opens");

    assert!(project.config().options.interface);
    assert_eq!(project.classes_dir(), temp.path().join("out/models"));
    assert_eq!(project.enums_dir(), temp.path().join("out/enums"));
    assert!(project.schema().and_then(|s| s.table("tags")).is_some());

    let names: Vec<_> = project.sources().iter().map(|s| s.entity.name()).collect();
    assert_eq!(names, ["Tag", "Permissions"]);
    assert!(matches!(project.sources()[1].entity, EntitySource::Enum(_)));
}

#[test]
fn test_duplicate_entity_names_rejected() {
    let temp = TempDir::new().expect("temp dir");
    write(temp.path(), "tswink.toml", CONFIG);
    write(temp.path(), "schema.toml", "");
    write(temp.path(), "entities/a/Tag.toml", "name = \"Tag\"\n");
    write(temp.path(), "entities/b/Tag.toml", "name = \"Tag\"\n");

    let err = Project::open(temp.path().join("tswink.toml")).expect_err("duplicate names");
    assert!(matches!(*err, Error::DuplicateEntity { .. }));
}

#[test]
fn test_invalid_source_reports_file() {
    let temp = TempDir::new().expect("temp dir");
    write(temp.path(), "tswink.toml", CONFIG);
    write(temp.path(), "schema.toml", "");
    write(temp.path(), "entities/Broken.toml", "name = \n");

    let err = Project::open(temp.path().join("tswink.toml")).expect_err("parse failure");
    match *err {
        Error::Parse { filename, .. } => assert!(filename.ends_with("Broken.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_config_is_io_error() {
    let temp = TempDir::new().expect("temp dir");
    let err = Project::open(temp.path().join("tswink.toml")).expect_err("missing config");
    assert!(matches!(*err, Error::Io { .. }));
}
