//! URL construction from request context and overrides.
//!
//! [`build_url`] is the one genuinely branchy piece of this crate: it takes
//! the current [`RequestContext`] and an optional set of [`UrlOptions`]
//! overrides and produces an absolute URL string. It is pure and never fails;
//! absent options simply select context defaults.

use serde::{Deserialize, Serialize};

use crate::request::RequestContext;

/// Overrides for [`build_url`].
///
/// All fields are optional; a default-constructed value selects the context's
/// own URL unchanged. Deserializable so a template-side map literal
/// (`{"scheme": "https", "path": "x"}`) maps onto it directly.
///
/// # Example
///
/// ```rust
/// use waypoint_core::{build_url, RequestContext, UrlOptions};
///
/// let ctx = RequestContext::new("http", "example.com").script_name("/app");
/// let opts = UrlOptions::new().scheme("https").path("login");
///
/// assert_eq!(build_url(&opts, &ctx), "https://example.com/login");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlOptions {
    /// Overrides the context scheme.
    pub scheme: Option<String>,
    /// Overrides the context port.
    pub port: Option<u16>,
    /// Appends the request's mount-path prefix to the URL.
    pub script_name: bool,
    /// Additional path segment to append.
    pub path: Option<String>,
}

impl UrlOptions {
    /// Creates an empty option set (all context defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the scheme.
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Overrides the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Requests the mount-path prefix to be appended.
    pub fn script_name(mut self, script_name: bool) -> Self {
        self.script_name = script_name;
        self
    }

    /// Sets the path segment to append.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Builds an absolute URL from the request context and the given overrides.
///
/// Behavior:
///
/// 1. When `scheme` or `port` is overridden the base is constructed
///    explicitly as `{scheme}://{host}[:port]`, falling back to the context
///    scheme. The host always comes from the context; there is deliberately
///    no host override.
/// 2. Otherwise the base is [`RequestContext::url`] unchanged.
/// 3. With `script_name` set, the context's mount prefix is appended verbatim.
/// 4. A `path` is appended behind exactly one `/`: a single leading slash on
///    the option is stripped first, further slashes are kept.
pub fn build_url(options: &UrlOptions, ctx: &RequestContext) -> String {
    let mut url = if options.scheme.is_some() || options.port.is_some() {
        let scheme = options.scheme.as_deref().unwrap_or(&ctx.scheme);
        match options.port {
            Some(port) => format!("{}://{}:{}", scheme, ctx.host, port),
            None => format!("{}://{}", scheme, ctx.host),
        }
    } else {
        ctx.url()
    };
    if options.script_name {
        url.push_str(&ctx.script_name);
    }
    if let Some(path) = options.path.as_deref() {
        url.push('/');
        url.push_str(path.strip_prefix('/').unwrap_or(path));
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RequestContext {
        RequestContext::new("http", "example.com").script_name("/app")
    }

    #[test]
    fn test_no_options_returns_context_url() {
        assert_eq!(build_url(&UrlOptions::new(), &ctx()), ctx().url());
    }

    #[test]
    fn test_scheme_override() {
        let opts = UrlOptions::new().scheme("https");
        assert_eq!(build_url(&opts, &ctx()), "https://example.com");
    }

    #[test]
    fn test_port_override_keeps_context_scheme() {
        let opts = UrlOptions::new().port(8080);
        assert_eq!(build_url(&opts, &ctx()), "http://example.com:8080");
    }

    #[test]
    fn test_script_name_appended() {
        let opts = UrlOptions::new().script_name(true);
        assert_eq!(build_url(&opts, &ctx()), "http://example.com/app");
    }

    #[test]
    fn test_path_with_leading_slash() {
        let opts = UrlOptions::new().path("/foo/bar");
        assert_eq!(build_url(&opts, &ctx()), "http://example.com/foo/bar");
    }

    #[test]
    fn test_path_without_leading_slash() {
        let opts = UrlOptions::new().path("foo/bar");
        assert_eq!(build_url(&opts, &ctx()), "http://example.com/foo/bar");
    }

    #[test]
    fn test_path_strips_single_slash_only() {
        let opts = UrlOptions::new().path("//foo");
        assert_eq!(build_url(&opts, &ctx()), "http://example.com//foo");
    }

    #[test]
    fn test_scheme_port_and_path_combined() {
        let opts = UrlOptions::new().scheme("https").port(8080).path("x");
        assert_eq!(build_url(&opts, &ctx()), "https://example.com:8080/x");
    }

    #[test]
    fn test_script_name_and_path() {
        let opts = UrlOptions::new().script_name(true).path("login");
        assert_eq!(build_url(&opts, &ctx()), "http://example.com/app/login");
    }

    #[test]
    fn test_host_is_never_overridden() {
        // There is no host field on UrlOptions; overrides only ever reuse
        // the context host.
        let opts = UrlOptions::new().scheme("https").port(9000);
        assert_eq!(build_url(&opts, &ctx()), "https://example.com:9000");
    }

    #[test]
    fn test_context_with_nonstandard_port_passes_through() {
        let ctx = RequestContext::new("http", "localhost").port(3000);
        assert_eq!(build_url(&UrlOptions::new(), &ctx), "http://localhost:3000");
    }

    #[test]
    fn test_options_deserialize_from_map() {
        let opts: UrlOptions = serde_json::from_value(serde_json::json!({
            "scheme": "https",
            "port": 8080,
            "script_name": true,
        }))
        .unwrap();
        assert_eq!(opts.scheme.as_deref(), Some("https"));
        assert_eq!(opts.port, Some(8080));
        assert!(opts.script_name);
        assert!(opts.path.is_none());
    }
}
