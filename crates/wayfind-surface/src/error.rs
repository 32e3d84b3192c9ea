//! Link surface error types.

/// Errors raised while validating navbar, footer or feature declarations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// A navbar item references a sidebar id that was never declared.
    #[error("navbar item `{label}` references unknown sidebar `{sidebar_id}`")]
    UnknownSidebar {
        /// The undeclared sidebar id.
        sidebar_id: String,
        /// Label of the offending navbar item.
        label: String,
    },
    /// An internal path is not absolute or escapes the configured base path.
    #[error("invalid path `{path}`: internal paths must be absolute and start with `{base_url}`")]
    InvalidPath {
        /// The offending path.
        path: String,
        /// The configured site base path.
        base_url: String,
    },
    /// An external url does not use a supported scheme.
    #[error("invalid url `{url}`: only http and https schemes are supported")]
    InvalidUrl {
        /// The offending url.
        url: String,
    },
}
