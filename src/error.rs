//! Error types for route compilation and link dispatch.
//!
//! Only structural problems surface here. A link whose route matched but whose
//! values fail an action's own checks is not an error; the action simply does
//! nothing.

use thiserror::Error;

/// Errors raised while compiling a route template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A `:` segment with no name after it.
    #[error("empty placeholder name in route template `{template}`")]
    EmptyPlaceholder { template: String },

    /// The same placeholder name appears twice in one template.
    #[error("placeholder `{name}` appears more than once in route template `{template}`")]
    DuplicatePlaceholder { template: String, name: String },
}

/// Errors reported back to the caller of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The inbound string is not a URL.
    #[error("invalid link `{0}`")]
    InvalidUrl(String),

    /// The URL's scheme or host is not one this router answers for.
    #[error("unsupported link `{0}`")]
    UnsupportedUrl(String),

    /// No registered route matches the path.
    #[error("no route for path `{path}`")]
    NoRoute { path: String },
}

impl LinkError {
    /// Short label used for logging and counters.
    pub fn reason(&self) -> &'static str {
        match self {
            LinkError::InvalidUrl(_) => "invalid_url",
            LinkError::UnsupportedUrl(_) => "unsupported_url",
            LinkError::NoRoute { .. } => "no_route",
        }
    }
}
