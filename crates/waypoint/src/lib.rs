//! # Waypoint - Routing and View Helpers for MiniJinja Templates
//!
//! `waypoint` exposes a web application's routing and view-rendering
//! facilities as callable functions inside a minijinja template environment.
//! Template authors can link to named routes, embed rendered route output,
//! and build URLs without hardcoding paths:
//!
//! ```jinja
//! <a href="{{ path('user', {'id': user_id}) }}">profile</a>
//! <a href="{{ url({'scheme': 'https', 'path': 'login'}) }}">log in</a>
//! {{ render_route_name('sidebar') }}
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use waypoint::{register_functions, App, MiniJinjaView, RequestContext, Route, RouteParams, RouteTable};
//!
//! let routes = RouteTable::new().add(
//!     Route::new("GET", "/users/:id", |p: &RouteParams| {
//!         Ok(format!("<p>user {}</p>", p["id"]))
//!     })
//!     .name("user"),
//! );
//!
//! let app = Arc::new(
//!     App::builder()
//!         .router(routes)
//!         .view(MiniJinjaView::new())
//!         .request(RequestContext::new("https", "example.com"))
//!         .build()?,
//! );
//!
//! let mut env = minijinja::Environment::new();
//! register_functions(&mut env, app);
//!
//! let html = env.render_str(
//!     "<a href=\"{{ path('user', {'id': 7}) }}\">{{ url() }}</a>",
//!     (),
//! ).unwrap();
//! assert_eq!(html, "<a href=\"/users/7\">https://example.com</a>");
//! # Ok::<(), waypoint::AppError>(())
//! ```
//!
//! ## Design
//!
//! There is no process-wide application registry: the functions close over
//! an explicit `Arc<App>` handle supplied at registration time. Serving
//! several applications means registering each one into its own environment.
//!
//! Route handlers and the view renderer are pure; they return their output
//! as a `String` instead of writing to an implicit buffer. Any failure
//! (unknown route name, unmatched path, missing template) aborts the
//! surrounding render.

pub mod functions;

pub use functions::{environment, register_functions};

// Core model re-exports
pub use waypoint_core::{
    build_url, App, AppBuilder, AppError, MiniJinjaView, RequestContext, Result, Route,
    RouteHandler, RouteParams, RouteTable, Router, UrlOptions, ViewRenderer,
};
