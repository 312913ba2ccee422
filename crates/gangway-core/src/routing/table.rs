//! Route table construction and resolution.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ConfigError;
use crate::guard::CapabilityRef;

use super::entry::{PageId, RouteEntry, Segment};

/// An explicit redirect rule, e.g. `/` to `/catalog`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

/// A successful resolution: the page to render, captured path parameters,
/// and the guard chain ordered ancestor-first (declaration order among
/// siblings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page_id: PageId,
    pub params: BTreeMap<String, String>,
    pub guards: Vec<CapabilityRef>,
}

/// Result of resolving a request path. `NotFound` is a terminal state, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Match(RouteMatch),
    Redirect(String),
    NotFound,
}

/// Ordered, immutable route table. Resolution is deterministic:
/// first-declared match wins among siblings.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
    redirects: Vec<Redirect>,
}

/// Builds a [`RouteTable`], rejecting invalid declarations at construction
/// time rather than at lookup time.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<RouteEntry>,
    redirects: Vec<Redirect>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level route. Declaration order decides precedence.
    pub fn route(mut self, entry: RouteEntry) -> Self {
        self.routes.push(entry);
        self
    }

    pub fn redirect(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.redirects.push(Redirect {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    /// Validate and freeze the table. Fails on non-trailing wildcards, on
    /// duplicate sibling patterns, and on redirects whose target no route
    /// matches.
    pub fn build(self) -> Result<RouteTable, ConfigError> {
        check_wildcard_placement(&self.routes)?;
        check_sibling_uniqueness("/", &self.routes)?;
        let table = RouteTable {
            routes: self.routes,
            redirects: self.redirects,
        };
        for redirect in &table.redirects {
            if table.match_only(&redirect.to).is_none() {
                return Err(ConfigError::UnknownRedirectTarget {
                    from: redirect.from.clone(),
                    to: redirect.to.clone(),
                });
            }
        }
        Ok(table)
    }
}

fn check_wildcard_placement(entries: &[RouteEntry]) -> Result<(), ConfigError> {
    for entry in entries {
        let wildcard_at = entry
            .segments
            .iter()
            .position(|s| matches!(s, Segment::Wildcard));
        if let Some(index) = wildcard_at {
            if index + 1 != entry.segments.len() {
                return Err(ConfigError::NonTrailingWildcard {
                    pattern: entry.path.clone(),
                });
            }
        }
        check_wildcard_placement(&entry.children)?;
    }
    Ok(())
}

// Compares compiled segments, so spellings that only differ in slashes
// ("/docs", "docs/") count as the same pattern.
fn check_sibling_uniqueness(parent: &str, entries: &[RouteEntry]) -> Result<(), ConfigError> {
    let mut seen: BTreeSet<&[Segment]> = BTreeSet::new();
    for entry in entries {
        if !seen.insert(entry.segments.as_slice()) {
            return Err(ConfigError::DuplicateSiblingPath {
                parent: parent.to_string(),
                pattern: entry.path.clone(),
            });
        }
        let prefix = join_paths(parent, &entry.path);
        check_sibling_uniqueness(&prefix, &entry.children)?;
    }
    Ok(())
}

fn join_paths(prefix: &str, path: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

impl RouteTable {
    /// Resolve a request path. Redirect rules are consulted first; route
    /// matching then walks the tree in declaration order.
    pub fn resolve(&self, path: &str) -> Resolution {
        let segments = split_path(path);
        if let Some(redirect) = self
            .redirects
            .iter()
            .find(|r| split_path(&r.from) == segments)
        {
            return Resolution::Redirect(redirect.to.clone());
        }
        match self.match_segments(&segments) {
            Some(matched) => Resolution::Match(matched),
            None => Resolution::NotFound,
        }
    }

    /// Resolve ignoring redirect rules. Used for redirect-target validation.
    fn match_only(&self, path: &str) -> Option<RouteMatch> {
        self.match_segments(&split_path(path))
    }

    fn match_segments(&self, segments: &[&str]) -> Option<RouteMatch> {
        match_entries(&self.routes, segments, &BTreeMap::new(), &[])
    }

    /// Reconstruct the full pattern path a page is mounted at, if any.
    pub fn path_of(&self, page_id: &PageId) -> Option<String> {
        fn walk(entries: &[RouteEntry], prefix: &str, page_id: &PageId) -> Option<String> {
            for entry in entries {
                let full = join_paths(prefix, &entry.path);
                if entry.page_id == *page_id {
                    return Some(full);
                }
                if let Some(found) = walk(&entry.children, &full, page_id) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.routes, "", page_id)
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn redirects(&self) -> &[Redirect] {
        &self.redirects
    }
}

fn match_entries(
    entries: &[RouteEntry],
    segments: &[&str],
    inherited_params: &BTreeMap<String, String>,
    inherited_guards: &[CapabilityRef],
) -> Option<RouteMatch> {
    entries
        .iter()
        .find_map(|entry| match_entry(entry, segments, inherited_params, inherited_guards))
}

fn match_entry(
    entry: &RouteEntry,
    segments: &[&str],
    inherited_params: &BTreeMap<String, String>,
    inherited_guards: &[CapabilityRef],
) -> Option<RouteMatch> {
    let mut params = inherited_params.clone();
    let mut rest = segments;
    let mut consumed_remainder = false;

    for pattern_segment in &entry.segments {
        if matches!(pattern_segment, Segment::Wildcard) {
            consumed_remainder = true;
            break;
        }
        let (head, tail) = rest.split_first()?;
        match pattern_segment {
            Segment::Literal(literal) => {
                if head != literal {
                    return None;
                }
            }
            Segment::Param(name) => {
                params.insert(name.clone(), (*head).to_string());
            }
            Segment::Wildcard => unreachable!("handled above"),
        }
        rest = tail;
    }

    let mut guards = inherited_guards.to_vec();
    if let Some(guard) = &entry.guard {
        guards.push(guard.clone());
    }

    if consumed_remainder || rest.is_empty() {
        return Some(RouteMatch {
            page_id: entry.page_id.clone(),
            params,
            guards,
        });
    }

    // Pattern consumed a prefix; the remainder must match a child.
    match_entries(&entry.children, rest, &params, &guards)
}
