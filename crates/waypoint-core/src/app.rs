//! Application aggregate.
//!
//! [`App`] bundles the three collaborators the template functions need: a
//! [`Router`], a [`ViewRenderer`], and the current [`RequestContext`]. It is
//! passed explicitly wherever it is needed; there is no process-wide
//! application registry. Callers serving several applications build one
//! `App` per application and register each into its own environment.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::request::RequestContext;
use crate::router::{RouteParams, Router};
use crate::url::{build_url, UrlOptions};
use crate::view::ViewRenderer;

/// Routing, view rendering, and request state for one application.
///
/// # Example
///
/// ```rust
/// use waypoint_core::{App, MiniJinjaView, RequestContext, RouteTable, UrlOptions};
///
/// let app = App::builder()
///     .router(RouteTable::new())
///     .view(MiniJinjaView::new())
///     .request(RequestContext::new("https", "example.com"))
///     .build()
///     .unwrap();
///
/// assert_eq!(app.url(&UrlOptions::new()), "https://example.com");
/// ```
pub struct App {
    router: Arc<dyn Router>,
    view: Arc<dyn ViewRenderer>,
    request: RequestContext,
}

impl App {
    /// Starts building an application.
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    /// The request snapshot this application renders against.
    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    /// Renders the named route with the given parameters.
    pub fn render_route_name(&self, name: &str, params: &RouteParams) -> Result<String> {
        self.router.render_named(name, params)
    }

    /// Renders the first route matching `method` and `path`.
    pub fn render_route_path(&self, path: &str, method: &str) -> Result<String> {
        self.router.render_path(method, path)
    }

    /// Renders a view template with the given data merged in.
    pub fn render_template(&self, template: &str, data: &serde_json::Value) -> Result<String> {
        self.view.render(template, data)
    }

    /// Reverse-resolves a named route to a concrete path.
    pub fn path_for(&self, name: &str, params: &RouteParams) -> Result<String> {
        self.router.path_for(name, params)
    }

    /// Builds a URL from the current request and the given overrides.
    pub fn url(&self, options: &UrlOptions) -> String {
        build_url(options, &self.request)
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

/// Builder for [`App`].
///
/// Router, view, and request are all required; [`AppBuilder::build`] fails
/// with [`AppError::Incomplete`] when one is missing.
#[derive(Default)]
pub struct AppBuilder {
    router: Option<Arc<dyn Router>>,
    view: Option<Arc<dyn ViewRenderer>>,
    request: Option<RequestContext>,
}

impl AppBuilder {
    /// Sets the routing backend.
    pub fn router(mut self, router: impl Router + 'static) -> Self {
        self.router = Some(Arc::new(router));
        self
    }

    /// Sets a shared routing backend.
    pub fn router_arc(mut self, router: Arc<dyn Router>) -> Self {
        self.router = Some(router);
        self
    }

    /// Sets the view backend.
    pub fn view(mut self, view: impl ViewRenderer + 'static) -> Self {
        self.view = Some(Arc::new(view));
        self
    }

    /// Sets a shared view backend.
    pub fn view_arc(mut self, view: Arc<dyn ViewRenderer>) -> Self {
        self.view = Some(view);
        self
    }

    /// Sets the current request snapshot.
    pub fn request(mut self, request: RequestContext) -> Self {
        self.request = Some(request);
        self
    }

    /// Finalizes the application.
    pub fn build(self) -> Result<App> {
        Ok(App {
            router: self.router.ok_or(AppError::Incomplete("router"))?,
            view: self.view.ok_or(AppError::Incomplete("view"))?,
            request: self.request.ok_or(AppError::Incomplete("request"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{Route, RouteTable};
    use crate::view::MiniJinjaView;
    use serde_json::json;

    fn app() -> App {
        let table = RouteTable::new().add(
            Route::new("GET", "/users/:id", |p: &RouteParams| {
                Ok(format!("user {}", p["id"]))
            })
            .name("user"),
        );
        let mut view = MiniJinjaView::new();
        view.add_template("hello", "Hello, {{ name }}!").unwrap();

        App::builder()
            .router(table)
            .view(view)
            .request(RequestContext::new("http", "example.com").script_name("/app"))
            .build()
            .unwrap()
    }

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_builder_requires_router() {
        let err = App::builder()
            .view(MiniJinjaView::new())
            .request(RequestContext::new("http", "example.com"))
            .build()
            .unwrap_err();
        assert!(matches!(err, AppError::Incomplete("router")));
    }

    #[test]
    fn test_builder_requires_request() {
        let err = App::builder()
            .router(RouteTable::new())
            .view(MiniJinjaView::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, AppError::Incomplete("request")));
    }

    #[test]
    fn test_render_route_name_delegates() {
        let output = app()
            .render_route_name("user", &params(&[("id", "3")]))
            .unwrap();
        assert_eq!(output, "user 3");
    }

    #[test]
    fn test_render_route_path_delegates() {
        assert_eq!(app().render_route_path("/users/9", "GET").unwrap(), "user 9");
    }

    #[test]
    fn test_render_template_delegates() {
        let output = app()
            .render_template("hello", &json!({"name": "World"}))
            .unwrap();
        assert_eq!(output, "Hello, World!");
    }

    #[test]
    fn test_path_for_delegates() {
        assert_eq!(
            app().path_for("user", &params(&[("id", "3")])).unwrap(),
            "/users/3"
        );
    }

    #[test]
    fn test_url_uses_request_context() {
        let opts = UrlOptions::new().script_name(true).path("login");
        assert_eq!(app().url(&opts), "http://example.com/app/login");
    }
}
