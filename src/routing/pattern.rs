//! Path pattern compilation and matching.
//!
//! # Grammar
//! A template is a `/`-separated list of segments. A segment starting with `:`
//! is a placeholder and binds to whatever single path component sits at that
//! position; any other segment is a literal that must match exactly.
//!
//! # Design Decisions
//! - Empty components are dropped on both sides, so `/read`, `/read/` and
//!   `//read` are the same path and a placeholder never binds to `""`
//! - Segment counts must be equal; there are no wildcards
//! - Literals compare case-sensitively
//! - Placeholders carry no type; actions parse what they need

use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::PatternError;
use crate::routing::values::MatchedValues;

/// One segment of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A compiled route template such as `/read/feeds/:feed_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    template: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a template.
    pub fn parse(template: &str) -> Result<Self, PatternError> {
        let mut seen = HashSet::new();
        let mut segments = Vec::new();

        for raw in template.split('/').filter(|s| !s.is_empty()) {
            match raw.strip_prefix(':') {
                Some("") => {
                    return Err(PatternError::EmptyPlaceholder {
                        template: template.to_string(),
                    });
                }
                Some(name) => {
                    if !seen.insert(name) {
                        return Err(PatternError::DuplicatePlaceholder {
                            template: template.to_string(),
                            name: name.to_string(),
                        });
                    }
                    segments.push(Segment::Placeholder(name.to_string()));
                }
                None => segments.push(Segment::Literal(raw.to_string())),
            }
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    /// The template this pattern was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in declaration order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a raw path (e.g. `/read/feeds/42`).
    pub fn match_path(&self, path: &str) -> Option<MatchedValues> {
        self.match_components(&path_components(path))
    }

    /// Match components that were already split and decoded by
    /// [`path_components`].
    pub fn match_components<S: AsRef<str>>(&self, components: &[S]) -> Option<MatchedValues> {
        if components.len() != self.segments.len() {
            return None;
        }

        let mut values = MatchedValues::new();
        for (segment, component) in self.segments.iter().zip(components) {
            let component = component.as_ref();
            match segment {
                Segment::Placeholder(name) => values.insert(name.as_str(), component),
                Segment::Literal(literal) if literal == component => {}
                Segment::Literal(_) => return None,
            }
        }
        Some(values)
    }
}

/// Split a path into its non-empty, percent-decoded components.
///
/// A component that does not decode to UTF-8 is kept as written.
pub fn path_components(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            urlencoding::decode(s)
                .map(Cow::into_owned)
                .unwrap_or_else(|_| s.to_string())
        })
        .collect()
}
