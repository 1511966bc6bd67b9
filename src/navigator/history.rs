//! Hash-fragment history.
//!
//! # Responsibilities
//! - Encode route state after a `#` marker under a base path
//! - Decode a route path from a full URL or a bare fragment
//! - Track back/forward position in-process
//!
//! # Design Decisions
//! - Base path is normalized once, at construction
//! - Pushing while positioned back in the stack truncates the forward
//!   branch, matching browser history semantics
//! - No persistence; the stack lives and dies with the process

use url::Url;

/// Hash-based history: the visible URL carries route state after `#`.
#[derive(Debug, Clone)]
pub struct HashHistory {
    base_path: String,
    stack: Vec<String>,
    cursor: usize,
}

impl HashHistory {
    /// Create a hash history rooted under the given base path.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: normalize_base(base_path.into()),
            stack: Vec::new(),
            cursor: 0,
        }
    }

    /// Prefix under which this history is rooted.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Full href for a route path, e.g. base `/app` + `/todo` → `/app#/todo`.
    pub fn href_for(&self, route_path: &str) -> String {
        format!("{}#{}", self.base_path, route_path)
    }

    /// Extract the route path from a full URL or a bare fragment.
    ///
    /// An absent or empty fragment maps to the root path, mirroring how
    /// hash history treats a freshly loaded page.
    pub fn path_of(&self, location: &str) -> String {
        let fragment = if let Ok(url) = Url::parse(location) {
            url.fragment().map(str::to_string)
        } else {
            // Not an absolute URL; treat as "{base}#{fragment}".
            location.split_once('#').map(|(_, f)| f.to_string())
        };

        match fragment {
            Some(f) if !f.is_empty() => {
                if f.starts_with('/') {
                    f
                } else {
                    format!("/{}", f)
                }
            }
            _ => "/".to_string(),
        }
    }

    /// Record a visited path as the new current position.
    ///
    /// Any forward entries beyond the cursor are discarded.
    pub fn push(&mut self, route_path: &str) {
        if !self.stack.is_empty() {
            self.stack.truncate(self.cursor + 1);
        }
        self.stack.push(route_path.to_string());
        self.cursor = self.stack.len() - 1;
    }

    /// Path at the current position, if anything has been visited.
    pub fn current(&self) -> Option<&str> {
        self.stack.get(self.cursor).map(String::as_str)
    }

    /// Step back one entry; returns the new current path.
    pub fn back(&mut self) -> Option<String> {
        if self.cursor == 0 || self.stack.is_empty() {
            return None;
        }
        self.cursor -= 1;
        self.current().map(str::to_string)
    }

    /// Step forward one entry; returns the new current path.
    pub fn forward(&mut self) -> Option<String> {
        if self.cursor + 1 >= self.stack.len() {
            return None;
        }
        self.cursor += 1;
        self.current().map(str::to_string)
    }
}

/// Ensure a leading `/` and strip trailing slashes, except on root.
fn normalize_base(base: String) -> String {
    let mut base = if base.starts_with('/') {
        base
    } else {
        format!("/{}", base)
    };
    while base.len() > 1 && base.ends_with('/') {
        base.pop();
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_under_root_base() {
        let history = HashHistory::new("/");
        assert_eq!(history.href_for("/todo"), "/#/todo");
    }

    #[test]
    fn test_href_under_sub_path_base() {
        let history = HashHistory::new("/app/");
        assert_eq!(history.base_path(), "/app");
        assert_eq!(history.href_for("/wether"), "/app#/wether");
    }

    #[test]
    fn test_path_of_full_url() {
        let history = HashHistory::new("/app");
        assert_eq!(
            history.path_of("https://example.com/app#/todo"),
            "/todo"
        );
    }

    #[test]
    fn test_path_of_bare_fragment() {
        let history = HashHistory::new("/");
        assert_eq!(history.path_of("/#/todo"), "/todo");
        assert_eq!(history.path_of("/#todo"), "/todo");
    }

    #[test]
    fn test_missing_fragment_is_root() {
        let history = HashHistory::new("/");
        assert_eq!(history.path_of("https://example.com/app"), "/");
        assert_eq!(history.path_of("/app"), "/");
    }

    #[test]
    fn test_round_trip_under_base() {
        let history = HashHistory::new("/deeply/nested");
        let href = history.href_for("/todo");
        assert_eq!(history.path_of(&href), "/todo");
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = HashHistory::new("/");
        history.push("/");
        history.push("/todo");
        history.push("/wether");

        assert_eq!(history.back().as_deref(), Some("/todo"));
        assert_eq!(history.back().as_deref(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward().as_deref(), Some("/todo"));
        assert_eq!(history.forward().as_deref(), Some("/wether"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_branch() {
        let mut history = HashHistory::new("/");
        history.push("/");
        history.push("/todo");
        history.back();
        history.push("/wether");

        assert_eq!(history.current(), Some("/wether"));
        assert_eq!(history.forward(), None);
        assert_eq!(history.back().as_deref(), Some("/"));
    }
}
