//! Shared string utilities for code generation.

/// Convert a string to PascalCase (e.g., "test_class_tag" -> "TestClassTag")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "TestAccessor" -> "testAccessor")
pub fn to_camel_case(s: &str) -> String {
    let pascal = if s.contains(['_', '-']) {
        to_pascal_case(s)
    } else {
        s.to_string()
    };
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "testClasses" -> "test_classes")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Strip the namespace from a qualified name (e.g., "App\\Models\\Tag" -> "Tag")
pub fn base_name(qualified: &str) -> &str {
    let trimmed = qualified.trim_start_matches('\\');
    match trimmed.rfind('\\') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Join a namespace and a name into a qualified name.
pub fn qualify(namespace: &str, name: &str) -> String {
    let namespace = namespace.trim_matches('\\');
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}\\{name}")
    }
}
