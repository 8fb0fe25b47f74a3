//! Error types for the application model.

use thiserror::Error;

/// Errors that can occur while routing, rendering, or building an [`crate::App`].
#[derive(Debug, Error)]
pub enum AppError {
    /// No route is registered under the given name.
    #[error("no named route \"{name}\"")]
    RouteNotFound {
        /// The route name that was looked up.
        name: String,
    },

    /// No registered route matches the given method and path.
    #[error("no route matching path \"{path}\" with method \"{method}\"")]
    NoMatch {
        /// The HTTP method that was matched against.
        method: String,
        /// The request path that was matched against.
        path: String,
    },

    /// A route pattern placeholder had no value in the parameter map.
    #[error("missing parameter \"{name}\" for route pattern \"{pattern}\"")]
    MissingParam {
        /// The placeholder name.
        name: String,
        /// The pattern being reverse-resolved.
        pattern: String,
    },

    /// Template not found in the view renderer.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Template syntax error or rendering failure.
    #[error("template error: {0}")]
    Template(String),

    /// A route handler failed.
    #[error("handler error: {0}")]
    Handler(String),

    /// An [`crate::AppBuilder`] was finalized with a required part missing.
    #[error("incomplete application: missing {0}")]
    Incomplete(&'static str),
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

// Keeps minijinja out of the public error surface; the view implementation
// classifies engine errors into the two template variants.
impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => AppError::TemplateNotFound(err.to_string()),
            _ => AppError::Template(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_not_found_display() {
        let err = AppError::RouteNotFound {
            name: "user".into(),
        };
        assert_eq!(err.to_string(), "no named route \"user\"");
    }

    #[test]
    fn test_no_match_display() {
        let err = AppError::NoMatch {
            method: "POST".into(),
            path: "/missing".into(),
        };
        assert!(err.to_string().contains("/missing"));
        assert!(err.to_string().contains("POST"));
    }

    #[test]
    fn test_from_minijinja_template_not_found() {
        let mj_err = minijinja::Error::new(
            minijinja::ErrorKind::TemplateNotFound,
            "template 'foo' not found",
        );
        let err: AppError = mj_err.into();
        assert!(matches!(err, AppError::TemplateNotFound(_)));
    }

    #[test]
    fn test_from_minijinja_syntax_error() {
        let mj_err = minijinja::Error::new(minijinja::ErrorKind::SyntaxError, "unexpected end");
        let err: AppError = mj_err.into();
        assert!(matches!(err, AppError::Template(_)));
    }
}
