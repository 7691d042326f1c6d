//! Template processing engine
//!
//! This module contains the core template processing components:
//! - `operation`: Defines operations to be performed on the file tree
//! - `processor`: Turns template files into operations

pub mod operation;
pub mod processor;

pub use operation::TemplateOperation;
pub use processor::TemplateProcessor;
