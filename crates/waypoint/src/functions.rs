//! Template function registration.
//!
//! [`register_functions`] wires an [`App`]'s routing and view facilities into
//! a minijinja environment as five callable functions:
//!
//! | Function | Purpose |
//! |----------|---------|
//! | `render_route_name(name, params?)` | Render a named route's output inline |
//! | `render_route_path(path, method?)` | Render the first route matching a path |
//! | `render_template(template, data?)` | Render a view template with extra data |
//! | `path(name, params?)` | Reverse-resolve a named route to a path |
//! | `url(options?)` | Build a URL from the current request |
//!
//! Failures (unknown route name, no matching route, missing template) abort
//! the surrounding render: a broken link reference should fail visibly, not
//! produce silently-wrong output.

use std::collections::HashMap;
use std::sync::Arc;

use minijinja::value::ViaDeserialize;
use minijinja::{Environment, ErrorKind};
use waypoint_core::{App, AppError, RouteParams, UrlOptions};

type ParamMap = HashMap<String, serde_json::Value>;

/// Registers the five template functions on `env`, bound to `app`.
///
/// Each function closes over the application handle. To expose several
/// applications, register each into its own environment.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use minijinja::Environment;
/// use waypoint::functions::register_functions;
/// use waypoint_core::{App, MiniJinjaView, RequestContext, RouteTable};
///
/// let app = Arc::new(
///     App::builder()
///         .router(RouteTable::new())
///         .view(MiniJinjaView::new())
///         .request(RequestContext::new("https", "example.com"))
///         .build()
///         .unwrap(),
/// );
///
/// let mut env = Environment::new();
/// register_functions(&mut env, app);
///
/// let output = env.render_str("{{ url({'path': 'login'}) }}", ()).unwrap();
/// assert_eq!(output, "https://example.com/login");
/// ```
pub fn register_functions(env: &mut Environment<'static>, app: Arc<App>) {
    let a = app.clone();
    env.add_function(
        "render_route_name",
        move |name: String, params: Option<ViaDeserialize<ParamMap>>| {
            a.render_route_name(&name, &route_params(params))
                .map_err(abort)
        },
    );

    let a = app.clone();
    env.add_function(
        "render_route_path",
        move |path: String, method: Option<String>| {
            a.render_route_path(&path, method.as_deref().unwrap_or("GET"))
                .map_err(abort)
        },
    );

    let a = app.clone();
    env.add_function(
        "render_template",
        move |template: String, data: Option<ViaDeserialize<serde_json::Value>>| {
            let data = data.map_or_else(|| serde_json::json!({}), |d| d.0);
            a.render_template(&template, &data).map_err(abort)
        },
    );

    let a = app.clone();
    env.add_function(
        "path",
        move |name: String, params: Option<ViaDeserialize<ParamMap>>| {
            a.path_for(&name, &route_params(params)).map_err(abort)
        },
    );

    let a = app;
    env.add_function("url", move |options: Option<ViaDeserialize<UrlOptions>>| {
        let options = options.map(|o| o.0).unwrap_or_default();
        a.url(&options)
    });
}

/// Creates a fresh environment with the functions registered.
pub fn environment(app: Arc<App>) -> Environment<'static> {
    let mut env = Environment::new();
    register_functions(&mut env, app);
    env
}

/// Converts a template-side parameter map into route parameters.
///
/// Non-string values (route ids are often integers in templates) are
/// stringified.
fn route_params(params: Option<ViaDeserialize<ParamMap>>) -> RouteParams {
    params
        .map(|p| p.0)
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect()
}

fn abort(err: AppError) -> minijinja::Error {
    minijinja::Error::new(ErrorKind::InvalidOperation, err.to_string())
}
