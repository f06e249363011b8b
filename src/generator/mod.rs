use std::fs;
use std::path::{Path, PathBuf};

use crate::model::AndroidDependency;

mod cmake;
mod cpp;
mod naming;

pub use cmake::generate_cmake_file_content;
pub use cpp::generate_cpp_file_content;

/// Output names are fixed by the native build integration that consumes
/// the artifacts.
pub const CMAKE_FILE_NAME: &str = "Android-autolinking.cmake";
pub const CPP_FILE_NAME: &str = "autolinking.cpp";

#[derive(Debug, Clone)]
pub struct GeneratedFiles {
    pub cmake_path: PathBuf,
    pub cpp_path: PathBuf,
}

/// Render both artifacts and (over)write them under `out_dir`. The files
/// are fully regenerated on every invocation; nothing is merged.
pub fn generate_autolinking_files(
    deps: &[&AndroidDependency],
    out_dir: &Path,
) -> Result<GeneratedFiles, Box<dyn std::error::Error>> {
    fs::create_dir_all(out_dir)?;

    let cmake_path = out_dir.join(CMAKE_FILE_NAME);
    fs::write(&cmake_path, generate_cmake_file_content(deps)?)?;

    let cpp_path = out_dir.join(CPP_FILE_NAME);
    fs::write(&cpp_path, generate_cpp_file_content(deps)?)?;

    Ok(GeneratedFiles {
        cmake_path,
        cpp_path,
    })
}
