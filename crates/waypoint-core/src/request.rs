//! Request context snapshots.
//!
//! A [`RequestContext`] is a read-only snapshot of the request a template is
//! being rendered for. The web layer builds one per request and hands it to
//! the [`crate::App`]; nothing in this crate mutates it afterwards.

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the current request.
///
/// # Example
///
/// ```rust
/// use waypoint_core::RequestContext;
///
/// let ctx = RequestContext::new("https", "example.com")
///     .script_name("/app")
///     .path_info("/users/7");
///
/// assert_eq!(ctx.url(), "https://example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// URL scheme, e.g. `"http"` or `"https"`.
    pub scheme: String,
    /// Host name, without scheme or port.
    pub host: String,
    /// Port the request arrived on.
    pub port: u16,
    /// Mount-path prefix under which the application is served.
    pub script_name: String,
    /// Path of the current request, relative to `script_name`.
    pub path_info: String,
}

impl RequestContext {
    /// Creates a snapshot for the given scheme and host.
    ///
    /// The port defaults to the scheme's standard port (80 for `http`,
    /// 443 for `https`); `script_name` and `path_info` default to empty.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        let scheme = scheme.into();
        let port = default_port(&scheme);
        Self {
            scheme,
            host: host.into(),
            port,
            script_name: String::new(),
            path_info: String::new(),
        }
    }

    /// Sets the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the mount-path prefix.
    pub fn script_name(mut self, script_name: impl Into<String>) -> Self {
        self.script_name = script_name.into();
        self
    }

    /// Sets the request path.
    pub fn path_info(mut self, path_info: impl Into<String>) -> Self {
        self.path_info = path_info.into();
        self
    }

    /// The full URL of the current request origin.
    ///
    /// Renders as `"{scheme}://{host}"`, with `":{port}"` appended only when
    /// the port is nonstandard for the scheme.
    pub fn url(&self) -> String {
        if self.port == default_port(&self.scheme) {
            format!("{}://{}", self.scheme, self.host)
        } else {
            format!("{}://{}:{}", self.scheme, self.host, self.port)
        }
    }
}

fn default_port(scheme: &str) -> u16 {
    if scheme == "https" {
        443
    } else {
        80
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_standard_http_port() {
        let ctx = RequestContext::new("http", "example.com");
        assert_eq!(ctx.url(), "http://example.com");
    }

    #[test]
    fn test_url_standard_https_port() {
        let ctx = RequestContext::new("https", "example.com");
        assert_eq!(ctx.url(), "https://example.com");
    }

    #[test]
    fn test_url_nonstandard_port() {
        let ctx = RequestContext::new("http", "localhost").port(8080);
        assert_eq!(ctx.url(), "http://localhost:8080");
    }

    #[test]
    fn test_url_https_on_http_port() {
        let ctx = RequestContext::new("https", "example.com").port(80);
        assert_eq!(ctx.url(), "https://example.com:80");
    }

    #[test]
    fn test_chained_setters() {
        let ctx = RequestContext::new("http", "example.com")
            .script_name("/app")
            .path_info("/users");
        assert_eq!(ctx.script_name, "/app");
        assert_eq!(ctx.path_info, "/users");
    }
}
