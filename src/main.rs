use std::env;
use std::fs;
use std::path::Path;

use autolink_tool::{filter, generator, model, validator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <config.json> <output-dir>", args[0]);
        eprintln!();
        eprintln!("Reads the autolinking config document and regenerates:");
        eprintln!(
            "  {}   subdirectories to build and libraries to link",
            generator::CMAKE_FILE_NAME
        );
        eprintln!(
            "  {}             module/component provider registrations",
            generator::CPP_FILE_NAME
        );
        std::process::exit(2);
    }

    let config_path = Path::new(&args[1]);
    let out_dir = Path::new(&args[2]);

    let content = fs::read_to_string(config_path)
        .map_err(|e| format!("Failed to read {}: {e}", config_path.display()))?;
    let config: model::AutolinkConfig = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {e}", config_path.display()))?;

    let deps = filter::filter_android_dependencies(Some(&config));
    validator::validate(&deps)?;

    let files = generator::generate_autolinking_files(&deps, out_dir)?;
    eprintln!("wrote {}", files.cmake_path.display());
    eprintln!("wrote {}", files.cpp_path.display());

    Ok(())
}
