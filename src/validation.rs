//! Structural validation for scene, registry and theme documents.
//!
//! Validators take an already-parsed JSON value and either return the typed
//! document or every issue found. They never fail for malformed input; I/O
//! and JSON syntax errors are handled before validation runs.

use serde_json::Value;

mod checker;
mod issue;
mod registry;
mod scene;
mod theme;
#[cfg(test)]
mod tests;

pub use self::issue::{PathSegment, ValidationIssue, format_issue_path, format_issues};
pub use self::registry::RegistryValidator;
pub use self::scene::SceneValidator;
pub use self::theme::ThemeValidator;

/// Validates a parsed JSON document into a typed value.
pub trait DocumentValidator {
    type Output;

    fn validate(&self, value: &Value) -> Result<Self::Output, Vec<ValidationIssue>>;
}
