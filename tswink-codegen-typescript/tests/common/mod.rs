//! A small project on disk shared by the integration tests.

#![allow(dead_code)]

use std::{fs, path::Path};

use tempfile::TempDir;
use tswink_manifest::Project;

pub const INTERFACE_CONFIG: &str = r#"
[output]
classes = "resources/js/models"
enums = "resources/js/enums"

[sources]
entities = ["entities"]
schema = "schema.toml"

[options]
interface = true
import_quotes = "single"
base_class = "BaseModel"
required_subset_module = "@acme/script-components"
separate_new_models = true
"#;

pub const CLASS_CONFIG: &str = r#"
[output]
classes = "resources/js/models"
enums = "resources/js/enums"

[sources]
entities = ["entities"]
schema = "schema.toml"

[options]
force_optional = false
base_class = "BaseModel"
required_subset_module = "@acme/script-components"
"#;

pub const SCHEMA: &str = r#"
[[tables.test_classes.columns]]
name = "id"
type = "bigint"

[[tables.test_classes.columns]]
name = "name"
type = "string"

[[tables.test_classes.columns]]
name = "value"
type = "integer"
nullable = true

[[tables.test_classes.columns]]
name = "created_at"
type = "datetime"
nullable = true

[[tables.test_classes.columns]]
name = "updated_at"
type = "datetime"
nullable = true

[[tables.tags.columns]]
name = "id"
type = "bigint"

[[tables.tags.columns]]
name = "name"
type = "string"

[[tables.tags.columns]]
name = "created_at"
type = "timestamp"
nullable = true

[[tables.tags.columns]]
name = "updated_at"
type = "timestamp"
nullable = true

[[tables.users.columns]]
name = "id"
type = "bigint"

[[tables.users.columns]]
name = "name"
type = "string"

[[tables.test_class_tag.columns]]
name = "id"
type = "bigint"

[[tables.test_class_tag.columns]]
name = "test_class_id"
type = "bigint"

[[tables.test_class_tag.columns]]
name = "tag_id"
type = "bigint"

[[tables.test_class_tag.columns]]
name = "priority"
type = "integer"

[[tables.test_class_tag.columns]]
name = "assigned_at"
type = "timestamp"
nullable = true

[[tables.test_class_tag.columns]]
name = "created_at"
type = "timestamp"
nullable = true

[[tables.test_class_tag.columns]]
name = "updated_at"
type = "timestamp"
nullable = true
"#;

pub const TEST_CLASS: &str = r#"
namespace = "App\\Models"
name = "TestClass"
table = "test_classes"
doc = """
@property array $anyArray
@property array{stringProperty: string, numberProperty: int, complexProperty: array{key: string}, subArray: array<string, string>} $associativeArray
@property array<int, array{foo: bool}> $complexArray
@property array<array<string>> $deepStringArray
@property-read int|null $nullable_student_count
@property string[] $stringArray
@property-read mixed|null $test_nullable_any_count
@property bool $tswinkOverride
@tswink-property string $tswinkOverride
@property-write string $password
"""

[constants]
TEST_CONST = 45.6
TEST_CONST_ARRAY = ["test", 123, true]
TEST_CONST_STRING = "test"

[[members]]
name = "getTestAccessorAttribute"
type = "string"
accessor = true

[[members]]
name = "getStringOrIntAccessorAttribute"
type = "string|int"
accessor = true

[[members]]
name = "table"
literal = "test_classes"

[[relations]]
name = "students"
kind = "has_many"
target = "App\\Models\\User"

[[relations]]
name = "user"
kind = "belongs_to"
target = "App\\Models\\User"

[[relations]]
name = "tags"
kind = "belongs_to_many"
target = "App\\Models\\Tag"

[relations.pivot]
table = "test_class_tag"
accessor = "assignment"
columns = ["priority", "assigned_at"]
"#;

pub const TAG: &str = r#"
namespace = "App\\Models"
name = "Tag"
table = "tags"

[[relations]]
name = "testClasses"
kind = "belongs_to_many"
target = "App\\Models\\TestClass"

[relations.pivot]
table = "test_class_tag"
accessor = "assignment"
columns = ["priority", "assigned_at"]
"#;

pub const USER: &str = r#"
namespace = "App\\Models"
name = "User"
table = "users"
"#;

pub const PERMISSIONS: &str = r#"
kind = "enum"
namespace = "App\\Enums"
name = "Permissions"

[[cases]]
name = "ADMIN"
value = 1

[[cases]]
name = "EDITOR"
value = 2

[[cases]]
name = "VIEWER"
value = 3

[[cases]]
name = "CONTRIBUTOR"
value = 4

[[methods]]
name = "creationPermissions"
export = true
returns = [{ case = "ADMIN" }, { case = "EDITOR" }]

[[methods]]
name = "managementPermissions"
export = "managePermissions"
returns = [{ case = "ADMIN" }]

[[methods]]
name = "internalPermissions"
returns = [{ case = "VIEWER" }]
"#;

pub fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().expect("path has a parent")).expect("create dirs");
    fs::write(path, content).expect("write file");
}

pub fn read(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join(rel)).expect("read generated file")
}

/// Lay out the fixture project with the given tswink.toml.
pub fn fixture(config: &str) -> TempDir {
    let temp = TempDir::new().expect("temp dir");
    write(temp.path(), "tswink.toml", config);
    write(temp.path(), "schema.toml", SCHEMA);
    write(temp.path(), "entities/models/TestClass.toml", TEST_CLASS);
    write(temp.path(), "entities/models/Tag.toml", TAG);
    write(temp.path(), "entities/models/User.toml", USER);
    write(temp.path(), "entities/enums/Permissions.toml", PERMISSIONS);
    temp
}

pub fn open(dir: &Path) -> Project {
    Project::open(dir.join("tswink.toml")).expect("project opens")
}
