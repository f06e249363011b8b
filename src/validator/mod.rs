//! Cross-field checks on filtered descriptors, run before rendering.
//!
//! The renderers themselves never fail: absence of an optional field means
//! "emit nothing". What they cannot express is a descriptor that is
//! internally inconsistent, so that gets rejected here instead of silently
//! producing partial output.

use std::fmt;

use crate::model::AndroidDependency;

/// A descriptor-level configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Library name when known, source dir otherwise.
    pub dependency: String,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.dependency, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Validate every filtered descriptor; the first inconsistent one aborts.
pub fn validate(deps: &[&AndroidDependency]) -> Result<(), ConfigError> {
    for dep in deps {
        validate_cxx_module_fields(dep)?;
    }
    Ok(())
}

// The three cxx-module fields are an all-or-nothing group: the build entry,
// the linked library name, and the registration header must agree.
fn validate_cxx_module_fields(dep: &AndroidDependency) -> Result<(), ConfigError> {
    let fields = [
        ("cxxModuleHeaderName", dep.cxx_module_header_name.is_some()),
        (
            "cxxModuleCMakeListsModuleName",
            dep.cxx_module_cmake_lists_module_name.is_some(),
        ),
        (
            "cxxModuleCMakeListsPath",
            dep.cxx_module_cmake_lists_path.is_some(),
        ),
    ];

    let set = fields.iter().filter(|(_, present)| *present).count();
    if set == 0 || set == fields.len() {
        return Ok(());
    }

    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    Err(ConfigError {
        dependency: dep
            .library_name
            .clone()
            .unwrap_or_else(|| dep.source_dir.clone()),
        message: format!(
            "cxx module fields must be set together; missing {}",
            missing.join(", ")
        ),
    })
}
