//! Route lookup, dispatch, and reverse resolution.
//!
//! This module defines the [`Router`] trait which allows the template
//! functions to work against any routing backend, plus [`RouteTable`], an
//! ordered table of `:param`-style patterns that serves as the default
//! implementation.
//!
//! Handlers are pure: they receive the bound parameters and return the
//! rendered output as a `String`. There is no output capturing.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AppError, Result};

/// Parameters bound to a route, keyed by placeholder name.
pub type RouteParams = HashMap<String, String>;

/// Handler invoked when a route is rendered.
pub type RouteHandler = Arc<dyn Fn(&RouteParams) -> Result<String> + Send + Sync>;

/// A routing backend the template functions can delegate to.
///
/// Implementations must resolve named routes, match method/path pairs, and
/// reverse-resolve names to concrete paths. All operations are read-only.
pub trait Router: Send + Sync {
    /// Returns `true` if a route is registered under `name`.
    fn has_route(&self, name: &str) -> bool;

    /// Renders the named route with the given parameters.
    ///
    /// Fails with [`AppError::RouteNotFound`] if no route has that name.
    fn render_named(&self, name: &str, params: &RouteParams) -> Result<String>;

    /// Renders the first route matching `method` and `path`.
    ///
    /// Parameters are extracted from the pattern and bound before the
    /// handler runs. Fails with [`AppError::NoMatch`] if nothing matches.
    fn render_path(&self, method: &str, path: &str) -> Result<String>;

    /// Reverse-resolves a named route to a concrete path.
    ///
    /// Every `:placeholder` in the pattern must have a value in `params`;
    /// an unbound placeholder fails with [`AppError::MissingParam`] rather
    /// than rendering a broken link.
    fn path_for(&self, name: &str, params: &RouteParams) -> Result<String>;
}

/// A single routing rule in a [`RouteTable`].
#[derive(Clone)]
pub struct Route {
    name: Option<String>,
    method: String,
    pattern: String,
    handler: RouteHandler,
}

impl Route {
    /// Creates a route for the given method and `:param` pattern.
    pub fn new(
        method: impl Into<String>,
        pattern: impl Into<String>,
        handler: impl Fn(&RouteParams) -> Result<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: None,
            method: method.into(),
            pattern: pattern.into(),
            handler: Arc::new(handler),
        }
    }

    /// Registers the route under a name, making it addressable by
    /// [`Router::render_named`] and [`Router::path_for`].
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The route's pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Matches `path` against the pattern, extracting placeholder values.
    ///
    /// Matching is segment-wise: literal segments compare exactly, `:name`
    /// segments capture. No trailing-slash normalization is applied.
    fn matches(&self, path: &str) -> Option<RouteParams> {
        let pattern_segments: Vec<&str> = self.pattern.split('/').collect();
        let path_segments: Vec<&str> = path.split('/').collect();
        if pattern_segments.len() != path_segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (pat, seg) in pattern_segments.iter().zip(&path_segments) {
            match pat.strip_prefix(':') {
                Some(param) => {
                    params.insert(param.to_string(), (*seg).to_string());
                }
                None => {
                    if pat != seg {
                        return None;
                    }
                }
            }
        }

        Some(params)
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Ordered table of routes; the default [`Router`] implementation.
///
/// Routes are tried in registration order and the first match wins.
///
/// # Example
///
/// ```rust
/// use waypoint_core::{Route, RouteTable, Router, RouteParams};
///
/// let table = RouteTable::new()
///     .add(Route::new("GET", "/users/:id", |p: &RouteParams| {
///         Ok(format!("user {}", p["id"]))
///     }).name("user"));
///
/// assert_eq!(table.render_path("GET", "/users/7").unwrap(), "user 7");
/// let mut params = RouteParams::new();
/// params.insert("id".into(), "7".into());
/// assert_eq!(table.path_for("user", &params).unwrap(), "/users/7");
/// ```
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a route to the table.
    pub fn add(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    fn named(&self, name: &str) -> Option<&Route> {
        self.routes
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
    }
}

impl Router for RouteTable {
    fn has_route(&self, name: &str) -> bool {
        self.named(name).is_some()
    }

    fn render_named(&self, name: &str, params: &RouteParams) -> Result<String> {
        let route = self.named(name).ok_or_else(|| AppError::RouteNotFound {
            name: name.to_string(),
        })?;
        (route.handler)(params)
    }

    fn render_path(&self, method: &str, path: &str) -> Result<String> {
        for route in &self.routes {
            if !route.method.eq_ignore_ascii_case(method) {
                continue;
            }
            if let Some(params) = route.matches(path) {
                return (route.handler)(&params);
            }
        }
        Err(AppError::NoMatch {
            method: method.to_string(),
            path: path.to_string(),
        })
    }

    fn path_for(&self, name: &str, params: &RouteParams) -> Result<String> {
        let route = self.named(name).ok_or_else(|| AppError::RouteNotFound {
            name: name.to_string(),
        })?;

        let mut segments = Vec::new();
        for segment in route.pattern.split('/') {
            match segment.strip_prefix(':') {
                Some(param) => {
                    let value = params.get(param).ok_or_else(|| AppError::MissingParam {
                        name: param.to_string(),
                        pattern: route.pattern.clone(),
                    })?;
                    segments.push(value.as_str());
                }
                None => segments.push(segment),
            }
        }

        Ok(segments.join("/"))
    }
}
