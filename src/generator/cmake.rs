use askama::Template;

use crate::generator::naming::parent_dir_with_separator;
use crate::model::AndroidDependency;

#[derive(Template)]
#[template(path = "Android-autolinking.cmake.j2", escape = "none")]
struct CmakeTemplate {
    library_includes: String,
    library_modules: String,
}

/// Render the CMake listing for the filtered descriptor sequence:
/// one `add_subdirectory` per buildable unit, then the
/// `AUTOLINKED_LIBRARIES` link list.
pub fn generate_cmake_file_content(
    deps: &[&AndroidDependency],
) -> Result<String, askama::Error> {
    let includes: Vec<String> = deps.iter().filter_map(|d| subdirectory_block(d)).collect();
    let modules: Vec<String> = deps.iter().filter_map(|d| library_block(d)).collect();

    CmakeTemplate {
        library_includes: includes.join("\n"),
        // The separator carries the two-space indent for the next block's
        // first line; continuation lines inside a block (cxx module names)
        // stay at column zero. Consumers expect these bytes exactly.
        library_modules: modules.join("\n  "),
    }
    .render()
}

// A descriptor without a library name has no target name to build, so it
// contributes no subdirectory entries at all.
fn subdirectory_block(dep: &AndroidDependency) -> Option<String> {
    let library_name = dep.library_name.as_deref()?;

    let mut lines: Vec<String> = Vec::new();
    if let Some(path) = dep.cmake_lists_path.as_deref() {
        lines.push(format!(
            "add_subdirectory({} {library_name}_autolinked_build)",
            parent_dir_with_separator(path)
        ));
    }
    if let Some(path) = dep.cxx_module_cmake_lists_path.as_deref() {
        lines.push(format!(
            "add_subdirectory({} {library_name}_cxxmodule_autolinked_build)",
            parent_dir_with_separator(path)
        ));
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn library_block(dep: &AndroidDependency) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();
    if let Some(name) = dep.library_name.as_deref() {
        lines.push(format!("react_codegen_{name}"));
    }
    if let Some(name) = dep.cxx_module_cmake_lists_module_name.as_deref() {
        lines.push(name.to_string());
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
