//! Template rendering engine
//!
//! The module is structured as:
//! - `interface`: Core trait definitions for template rendering
//! - `minijinja`: MiniJinja-based implementation of the template renderer
//! - `filters`: String helpers exposed to templates
//! - `context`: The variables a template set is rendered with

mod context;
pub mod filters;
pub mod interface;
pub mod minijinja;

pub use context::TemplateContext;
pub use interface::TemplateRenderer;
pub use self::minijinja::MiniJinjaRenderer;
