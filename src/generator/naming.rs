/// `./a/directory/CMakeLists.txt` -> `./a/directory/`
///
/// Config paths always use forward slashes (the discovery step emits them
/// that way on every host), so this is a string split rather than a
/// platform path operation.
pub fn parent_dir_with_separator(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((parent, _file)) => format!("{parent}/"),
        None => String::new(),
    }
}

/// `import com.facebook.react.aPackage;` -> `aPackage`
///
/// The simple class name doubles as the generated provider symbol prefix
/// and the header base name.
pub fn import_class_name(import_path: &str) -> String {
    let name = import_path.trim();
    let name = name.strip_prefix("import ").unwrap_or(name);
    let name = name.strip_suffix(';').unwrap_or(name).trim();
    match name.rsplit_once('.') {
        Some((_package, simple)) => simple.to_string(),
        None => name.to_string(),
    }
}
