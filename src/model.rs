use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level autolinking config document (`config.json`), as emitted by the
/// dependency discovery step that runs before us.
///
/// Only `dependencies` feeds code generation; the other fields are carried
/// so the whole document deserializes under one model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutolinkConfig {
    pub react_native_version: Option<String>,
    // IndexMap keeps the document's key order; generated output follows it.
    pub dependencies: Option<IndexMap<String, DependencyEntry>>,
    pub project: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DependencyEntry {
    pub root: Option<String>,
    pub name: Option<String>,
    pub platforms: Option<PlatformsEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformsEntry {
    pub android: Option<AndroidDependency>,
}

/// Per-dependency descriptor driving both renderers. Constructed once from
/// the parsed document, consumed read-only.
///
/// Every field except `sourceDir` is optional; renderers branch on presence
/// only and treat absence as "emit nothing".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidDependency {
    pub source_dir: String,
    pub package_import_path: Option<String>,
    pub package_instance: Option<String>,
    #[serde(default)]
    pub build_types: Vec<String>,
    pub library_name: Option<String>,
    #[serde(default)]
    pub component_descriptors: Vec<String>,
    pub cmake_lists_path: Option<String>,
    // The document spells `CMakeLists` with a capital M; the blanket
    // camelCase rename would produce `CmakeLists`.
    #[serde(rename = "cxxModuleCMakeListsModuleName")]
    pub cxx_module_cmake_lists_module_name: Option<String>,
    #[serde(rename = "cxxModuleCMakeListsPath")]
    pub cxx_module_cmake_lists_path: Option<String>,
    pub cxx_module_header_name: Option<String>,
}
