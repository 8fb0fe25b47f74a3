//! View rendering.
//!
//! This module defines the [`ViewRenderer`] trait which allows the template
//! functions to work with different view backends. The default implementation
//! is [`MiniJinjaView`], which renders named minijinja templates against a
//! persistent base context merged with per-call data.

use std::collections::HashMap;

use minijinja::{Environment, Value};

use crate::error::Result;

/// A view backend that renders named templates with data.
pub trait ViewRenderer: Send + Sync {
    /// Renders the named template with the given data map.
    ///
    /// Fails with [`crate::AppError::TemplateNotFound`] if no template is
    /// registered under `template`.
    fn render(&self, template: &str, data: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-backed view renderer.
///
/// Holds a set of named templates and a base context. At render time the
/// call's data map is merged over the base context; on key conflicts the
/// call data wins.
///
/// # Example
///
/// ```rust
/// use waypoint_core::{MiniJinjaView, ViewRenderer};
/// use serde_json::json;
///
/// let mut view = MiniJinjaView::new();
/// view.set("site", json!("Example"));
/// view.add_template("hello", "{{ site }}: hello {{ name }}").unwrap();
///
/// let output = view.render("hello", &json!({"name": "world"})).unwrap();
/// assert_eq!(output, "Example: hello world");
/// ```
pub struct MiniJinjaView {
    env: Environment<'static>,
    base: HashMap<String, serde_json::Value>,
}

impl MiniJinjaView {
    /// Creates an empty view renderer.
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
            base: HashMap::new(),
        }
    }

    /// Adds a named template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Sets a base-context value available to every render.
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.base.insert(key.into(), value);
    }

    /// Checks if a template with the given name exists.
    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// This allows registering custom filters or functions, or configuring
    /// the environment directly.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for MiniJinjaView {
    fn render(&self, template: &str, data: &serde_json::Value) -> Result<String> {
        // Merge data over the base context (data takes precedence)
        let mut combined = HashMap::new();
        for (key, value) in &self.base {
            combined.insert(key.clone(), Value::from_serialize(value));
        }
        if let serde_json::Value::Object(map) = data {
            for (key, value) in map {
                combined.insert(key.clone(), Value::from_serialize(value));
            }
        }

        let tmpl = self.env.get_template(template)?;
        Ok(tmpl.render(&combined)?)
    }
}
