//! Validation and verification before generating a project.

pub mod preflight;
pub mod prompt;
pub mod rules;

pub use preflight::{check_destination, preflight_checks};
pub use prompt::confirm_removal;
pub use rules::{validate_namespace, validate_project_name};
