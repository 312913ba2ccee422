//! Route tree declarations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::guard::CapabilityRef;

/// Identifier of a renderable page supplied by a plugin.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One compiled segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Segment {
    /// Matches the segment verbatim.
    Literal(String),
    /// `:name` - matches any single segment and captures it.
    Param(String),
    /// Trailing `*` - matches any remainder, including an empty one.
    Wildcard,
}

pub(crate) fn compile(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s == "*" {
                Segment::Wildcard
            } else if let Some(name) = s.strip_prefix(':') {
                Segment::Param(name.to_string())
            } else {
                Segment::Literal(s.to_string())
            }
        })
        .collect()
}

/// One node of the route tree: a path pattern, the page it renders, an
/// optional access guard, and ordered children. Children inherit this
/// node's path prefix; their declaration order decides match precedence.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub(crate) path: String,
    pub(crate) page_id: PageId,
    pub(crate) guard: Option<CapabilityRef>,
    pub(crate) children: Vec<RouteEntry>,
    pub(crate) segments: Vec<Segment>,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, page_id: impl Into<PageId>) -> Self {
        let path = path.into();
        let segments = compile(&path);
        Self {
            path,
            page_id: page_id.into(),
            guard: None,
            children: Vec::new(),
            segments,
        }
    }

    /// Gate this route (and everything beneath it) on a capability.
    pub fn guarded(mut self, capability: impl Into<CapabilityRef>) -> Self {
        self.guard = Some(capability.into());
        self
    }

    /// Append a child route under this node's path prefix.
    pub fn child(mut self, child: RouteEntry) -> Self {
        self.children.push(child);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn page_id(&self) -> &PageId {
        &self.page_id
    }

    pub fn guard(&self) -> Option<&CapabilityRef> {
        self.guard.as_ref()
    }

    pub fn children(&self) -> &[RouteEntry] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_literals_params_and_wildcard() {
        let segments = compile("/catalog/:namespace/:kind/:name/*");
        assert_eq!(
            segments,
            vec![
                Segment::Literal("catalog".into()),
                Segment::Param("namespace".into()),
                Segment::Param("kind".into()),
                Segment::Param("name".into()),
                Segment::Wildcard,
            ]
        );
    }

    #[test]
    fn leading_and_trailing_slashes_are_irrelevant() {
        assert_eq!(compile("/settings/"), compile("settings"));
    }
}
