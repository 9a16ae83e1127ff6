//! Snapshot tests for the generated TypeScript.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

mod common;

use tswink_codegen_typescript::{Generator, LanguageCodegen};

/// Preview the fixture project, with paths relative to the project root.
fn preview(config: &str) -> Vec<(String, String)> {
    let temp = common::fixture(config);
    let project = common::open(temp.path());
    Generator::new(&project)
        .preview()
        .expect("preview succeeds")
        .into_iter()
        .map(|file| {
            let path = file
                .path
                .strip_prefix(temp.path())
                .expect("generated inside the project")
                .to_string_lossy()
                .replace('\\', "/");
            (path, file.content)
        })
        .collect()
}

fn file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, content)| content.as_str())
        .unwrap_or_else(|| panic!("{path} was not generated"))
}

#[test]
fn test_generated_file_list() {
    let files = preview(common::INTERFACE_CONFIG);
    let paths: Vec<_> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        [
            "resources/js/enums/Permissions.ts",
            "resources/js/models/Tag.ts",
            "resources/js/models/NewTag.ts",
            "resources/js/models/TestClass.ts",
            "resources/js/models/NewTestClass.ts",
            "resources/js/models/User.ts",
            "resources/js/models/NewUser.ts",
            "resources/js/models/TestClassTagPivot.ts",
        ]
    );
}

#[test]
fn test_test_class_interface() {
    let files = preview(common::INTERFACE_CONFIG);
    let test_class = file(&files, "resources/js/models/TestClass.ts");
    insta::assert_snapshot!("test_class_interface", test_class);
}

#[test]
fn test_tag_interface() {
    let files = preview(common::INTERFACE_CONFIG);
    let tag = file(&files, "resources/js/models/Tag.ts");
    insta::assert_snapshot!("tag_interface", tag);
}

#[test]
fn test_new_tag_interface() {
    let files = preview(common::INTERFACE_CONFIG);
    let new_tag = file(&files, "resources/js/models/NewTag.ts");
    insta::assert_snapshot!("new_tag_interface", new_tag);
}

#[test]
fn test_permissions_enum() {
    let files = preview(common::INTERFACE_CONFIG);
    let permissions = file(&files, "resources/js/enums/Permissions.ts");
    insta::assert_snapshot!("permissions_enum", permissions);
}

#[test]
fn test_pivot_interface() {
    let files = preview(common::INTERFACE_CONFIG);
    let pivot = file(&files, "resources/js/models/TestClassTagPivot.ts");
    insta::assert_snapshot!("pivot_interface", pivot);
}

#[test]
fn test_tag_class() {
    let files = preview(common::CLASS_CONFIG);
    let tag = file(&files, "resources/js/models/Tag.ts");
    insta::assert_snapshot!("tag_class", tag);
}

#[test]
fn test_class_mode_has_no_new_models() {
    let files = preview(common::CLASS_CONFIG);
    assert!(files.iter().all(|(p, _)| !p.contains("/New")));
}

#[test]
fn test_new_models_never_wrap() {
    let files = preview(common::INTERFACE_CONFIG);
    let new_test_class = file(&files, "resources/js/models/NewTestClass.ts");
    assert!(!new_test_class.contains("SetRequired"));
    assert!(new_test_class.contains("    tags?: NewTag[];\n"));
    assert!(new_test_class.contains("    students?: NewUser[];\n"));
    assert!(new_test_class.contains("    assignment?: TestClassTagPivot;\n"));
    assert!(new_test_class.contains("export const NewTestClassConstants = {\n"));
}
