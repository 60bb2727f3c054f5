//! Error and warning types.

use std::fmt;
use std::path::PathBuf;

/// Error returned by a handler. Any error type can be boxed into it.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Error building a [`Pattern`](crate::Pattern).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The expression failed to compile.
    #[error("invalid token pattern")]
    Regex(#[from] regex::Error),

    /// The expression has no capture group for the token name.
    #[error("token pattern `{pattern}` has no name capture group")]
    MissingNameGroup {
        /// The offending expression.
        pattern: String,
    },
}

/// Error loading an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read {}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error.
    #[error("invalid configuration")]
    Toml(#[from] toml::de::Error),

    /// The configured pattern is unusable.
    #[error("invalid pattern in configuration")]
    Pattern(#[from] PatternError),
}

/// Error that aborts a render pass.
///
/// Mutations applied before the failure stay in the tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// A handler returned an error.
    #[error("handler for token `{name}` failed")]
    Handler {
        /// Token name as written in the text.
        name: String,
        #[source]
        source: HandlerError,
    },
}

/// Non-fatal diagnostic recorded during a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Warning {
    /// No handler is registered under the token's name.
    UnresolvedToken {
        /// Token name as written in the text.
        name: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedToken { name } => write!(f, "token {name} not found"),
        }
    }
}
