//! autolink-tool - native dependency autolinking code generator
//!
//! Turns the autolinking config document (`config.json`) into two build
//! artifacts: the CMake listing of native subdirectories and linked
//! libraries, and the C++ source registering each dependency's module and
//! component providers with the host runtime.

pub mod filter;
pub mod generator;
pub mod model;
pub mod validator;

// Re-export the pipeline entry points.
pub use filter::filter_android_dependencies;
pub use generator::generate_autolinking_files;
pub use validator::validate;
