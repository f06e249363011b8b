use askama::Template;

use crate::generator::naming::import_class_name;
use crate::model::AndroidDependency;

#[derive(Template)]
#[template(path = "autolinking.cpp.j2", escape = "none")]
struct CppTemplate {
    includes: String,
    module_providers: String,
    cxx_module_providers: String,
    component_registrations: String,
}

/// Render the provider-registration source for the filtered descriptor
/// sequence. The three function signatures satisfy the fixed
/// `autolinking.h` contract; generated block lines sit at column zero with
/// only the fallback returns indented.
pub fn generate_cpp_file_content(
    deps: &[&AndroidDependency],
) -> Result<String, askama::Error> {
    let includes: Vec<String> = deps.iter().filter_map(|d| include_block(d)).collect();
    let module_providers: Vec<String> =
        deps.iter().filter_map(|d| module_provider_block(d)).collect();
    let cxx_module_providers: Vec<String> = deps
        .iter()
        .filter_map(|d| cxx_module_provider_block(d))
        .collect();
    let component_registrations: Vec<String> = deps
        .iter()
        .filter_map(|d| component_registration_block(d))
        .collect();

    CppTemplate {
        includes: includes.join("\n"),
        module_providers: module_providers.join("\n"),
        cxx_module_providers: cxx_module_providers.join("\n"),
        component_registrations: component_registrations.join("\n"),
    }
    .render()
}

// One include per contributing descriptor/header (never per call), grouped
// per descriptor in discovery order: module header, component-descriptors
// header, cxx module header.
fn include_block(dep: &AndroidDependency) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();

    if let Some(name) = module_provider_name(dep) {
        lines.push(format!("#include <{name}.h>"));
    }
    if let Some(library_name) = dep.library_name.as_deref() {
        if !dep.component_descriptors.is_empty() {
            lines.push(format!(
                "#include <react/renderer/components/{library_name}/ComponentDescriptors.h>"
            ));
        }
    }
    if let Some(header) = dep.cxx_module_header_name.as_deref() {
        lines.push(format!("#include <{header}.h>"));
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

// A descriptor joins the module provider chain only when both the import
// path and the instance expression are present.
fn module_provider_name(dep: &AndroidDependency) -> Option<String> {
    let import_path = dep.package_import_path.as_deref()?;
    dep.package_instance.as_deref()?;
    Some(import_class_name(import_path))
}

fn module_provider_block(dep: &AndroidDependency) -> Option<String> {
    let name = module_provider_name(dep)?;
    Some(
        [
            format!("auto module_{name} = {name}_ModuleProvider(moduleName, params);"),
            format!("if (module_{name} != nullptr) {{"),
            format!("return module_{name};"),
            "}".to_string(),
        ]
        .join("\n"),
    )
}

fn cxx_module_provider_block(dep: &AndroidDependency) -> Option<String> {
    let header = dep.cxx_module_header_name.as_deref()?;
    Some(
        [
            format!("if (moduleName == {header}::kModuleName) {{"),
            format!("return std::make_shared<{header}>(jsInvoker);"),
            "}".to_string(),
        ]
        .join("\n"),
    )
}

fn component_registration_block(dep: &AndroidDependency) -> Option<String> {
    if dep.component_descriptors.is_empty() {
        return None;
    }
    Some(
        dep.component_descriptors
            .iter()
            .map(|descriptor| {
                format!("providerRegistry->add(concreteComponentDescriptorProvider<{descriptor}>());")
            })
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
