/// Handles argument parsing and the command-line entry point.
pub mod cli;

/// Constants shared across modules.
pub mod constants;

/// Reading and patching the build descriptor.
pub mod descriptor;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// The generation pipeline.
pub mod generator;

/// Sources of template sets.
pub mod loader;

/// Generation options and their validation.
pub mod options;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Ordered steps applied to the file tree.
pub mod rule;

/// Core template processing orchestration.
pub mod template;

/// File tree abstraction the generator writes into.
pub mod tree;

pub use generator::Generator;
pub use options::Options;
