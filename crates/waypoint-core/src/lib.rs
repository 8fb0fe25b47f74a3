//! # Waypoint Core - Application Model
//!
//! `waypoint-core` provides the application model behind the `waypoint`
//! template functions: request context snapshots, URL construction, routing
//! and view-rendering seams, and the [`App`] aggregate tying them together.
//!
//! This crate is the foundation for the `waypoint` facade, but can be used
//! independently by anything that needs URL building or pure, string-returning
//! route dispatch.
//!
//! ## Core Concepts
//!
//! - [`RequestContext`]: Read-only snapshot of the current request
//! - [`UrlOptions`] / [`build_url`]: URL construction with per-call overrides
//! - [`Router`]: Seam for routing backends; [`RouteTable`] is the default
//! - [`ViewRenderer`]: Seam for view backends; [`MiniJinjaView`] is the default
//! - [`App`]: Explicit dependency-injection aggregate, one per application
//!
//! ## Quick Start
//!
//! ```rust
//! use waypoint_core::{
//!     App, MiniJinjaView, RequestContext, Route, RouteParams, RouteTable, UrlOptions,
//! };
//!
//! let routes = RouteTable::new().add(
//!     Route::new("GET", "/users/:id", |p: &RouteParams| {
//!         Ok(format!("<p>user {}</p>", p["id"]))
//!     })
//!     .name("user"),
//! );
//!
//! let app = App::builder()
//!     .router(routes)
//!     .view(MiniJinjaView::new())
//!     .request(RequestContext::new("https", "example.com").script_name("/admin"))
//!     .build()?;
//!
//! assert_eq!(app.render_route_path("/users/7", "GET")?, "<p>user 7</p>");
//! assert_eq!(
//!     app.url(&UrlOptions::new().script_name(true).path("login")),
//!     "https://example.com/admin/login"
//! );
//! # Ok::<(), waypoint_core::AppError>(())
//! ```

pub mod app;
mod error;
pub mod request;
pub mod router;
pub mod url;
pub mod view;

pub use app::{App, AppBuilder};
pub use error::{AppError, Result};
pub use request::RequestContext;
pub use router::{Route, RouteHandler, RouteParams, RouteTable, Router};
pub use url::{build_url, UrlOptions};
pub use view::{MiniJinjaView, ViewRenderer};
