//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Hold the ordered list of route entries
//! - Enforce name and path uniqueness at build time
//! - Resolve a requested path (first match wins) or a symbolic name
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - Build reports every defect, not just the first
//! - O(n) ordered scan; tables here hold a handful of entries

use std::collections::HashSet;

use thiserror::Error;

use crate::routing::matcher::{normalize, ExactPathMatcher, Matcher};
use crate::view::{LazyView, ViewHandle, ViewSource};

/// One navigable destination: a path pattern, a symbolic name, and the
/// view it resolves to.
#[derive(Debug)]
pub struct RouteEntry {
    path: String,
    name: String,
    component: ViewSource,
    matcher: ExactPathMatcher,
}

impl RouteEntry {
    /// Create an entry from an explicit view source.
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: ViewSource) -> Self {
        let path = path.into();
        let matcher = ExactPathMatcher::new(path.as_str());
        Self {
            path,
            name: name.into(),
            component,
            matcher,
        }
    }

    /// Entry whose view is available at startup.
    pub fn eager(path: impl Into<String>, name: impl Into<String>, view: ViewHandle) -> Self {
        Self::new(path, name, ViewSource::Eager(view))
    }

    /// Entry whose view is produced by a deferred factory on first visit.
    pub fn deferred(path: impl Into<String>, name: impl Into<String>, lazy: LazyView) -> Self {
        Self::new(path, name, ViewSource::Deferred(lazy))
    }

    /// URL path pattern of this entry.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Symbolic name of this entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How this entry obtains its view.
    pub fn component(&self) -> &ViewSource {
        &self.component
    }

    fn matches(&self, requested: &str) -> bool {
        self.matcher.matches(requested)
    }
}

/// A configuration defect detected while building the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableDefect {
    /// Two entries share the same symbolic name.
    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    /// Two entries share the same path pattern.
    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    /// Path is empty or does not begin with the root separator.
    #[error("route `{name}` has malformed path `{path}`")]
    MalformedPath { name: String, path: String },
}

/// Builder for [`RouteTable`]; the only way to construct one.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Order is significant: first match wins.
    pub fn route(mut self, entry: RouteEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Validate and freeze the table.
    ///
    /// Returns every defect found, not just the first, so a broken
    /// table can be fixed in one pass.
    pub fn build(self) -> Result<RouteTable, Vec<TableDefect>> {
        let mut defects = Vec::new();
        let mut names = HashSet::new();
        let mut paths = HashSet::new();

        for entry in &self.entries {
            if entry.path.is_empty() || !entry.path.starts_with('/') {
                defects.push(TableDefect::MalformedPath {
                    name: entry.name.clone(),
                    path: entry.path.clone(),
                });
            }
            if !names.insert(entry.name.clone()) {
                defects.push(TableDefect::DuplicateName(entry.name.clone()));
            }
            // Compare normalized paths so `/todo` and `/todo/` collide.
            if !paths.insert(normalize(&entry.path).to_string()) {
                defects.push(TableDefect::DuplicatePath(entry.path.clone()));
            }
        }

        if defects.is_empty() {
            Ok(RouteTable {
                entries: self.entries,
            })
        } else {
            Err(defects)
        }
    }
}

/// Ordered, immutable sequence of route entries.
///
/// Owned by the bootstrap phase and handed by reference to the
/// navigation runtime, which owns the active-route cursor.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Look up the first entry matching the requested path.
    pub fn match_path(&self, requested: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.matches(requested))
    }

    /// Look up an entry by symbolic name.
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
