//! Exemption registry: which routes skip authentication.
//!
//! Populated once while the router is assembled, then frozen behind an `Arc`
//! in `AppState` and consulted per dispatch. A route is public when either
//! its exact matched path was registered, or it lives under a registered
//! prefix (e.g. everything nested below `/api/v1/public`).

use std::collections::HashSet;

/// Default is deny: a path that was never registered requires authentication.
#[derive(Debug, Clone, Default)]
pub struct PublicRoutes {
    routes: HashSet<String>,
    prefixes: HashSet<String>,
}

impl PublicRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a single route path as public.
    ///
    /// `path` must be the full matched path as axum reports it, including
    /// any nest prefix (e.g. `/api/v1/health`).
    pub fn route(mut self, path: &str) -> Self {
        self.routes.insert(normalize(path));
        self
    }

    /// Mark every route under `path` as public.
    pub fn prefix(mut self, path: &str) -> Self {
        self.prefixes.insert(normalize(path));
        self
    }

    /// Lookup against the matched route path. Prefixes only match on whole
    /// path segments: `/public` covers `/public/version` but not `/publicx`.
    pub fn is_public(&self, matched_path: &str) -> bool {
        let matched = matched_path.trim_end_matches('/');
        let matched = if matched.is_empty() { "/" } else { matched };

        if self.routes.contains(matched) {
            return true;
        }

        self.prefixes.iter().any(|prefix| {
            matched == prefix
                || matched
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
