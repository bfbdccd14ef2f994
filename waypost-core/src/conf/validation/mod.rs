mod report;
mod validate;
mod validators;

pub use report::{Severity, ValidationIssue, ValidationReport};
pub use validate::validate_spec_config;
pub use validators::{validate_addr, validate_version};
