use glint_diagnostics::{Diagnostic, Span};
use thiserror::Error;

/// Fatal errors raised while expanding a glob import.
///
/// Every variant aborts compilation of the current file; there is no
/// warning or recovery channel. Each carries the span of the offending
/// import statement.
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("Missing glob pattern '{pattern}'")]
    MissingGlobPattern { pattern: String, span: Span },

    #[error("Glob pattern must be relative, was '{pattern}'")]
    NonRelativePattern { pattern: String, span: Span },

    #[error("Could not generate a valid identifier for '{file}'")]
    UnresolvableIdentifier { file: String, span: Span },

    #[error("Found colliding members '{name}'")]
    NameCollision { name: String, span: Span },

    #[error("Unsupported import shape for glob pattern '{pattern}'")]
    UnsupportedSpecifierShape { pattern: String, span: Span },

    #[error("Glob matching failed for '{pattern}': {message}")]
    Glob {
        pattern: String,
        message: String,
        span: Span,
    },
}

impl ExpandError {
    pub(crate) fn glob(pattern: &str, message: impl Into<String>, span: &Span) -> Self {
        ExpandError::Glob {
            pattern: pattern.to_string(),
            message: message.into(),
            span: span.clone(),
        }
    }

    /// Span of the import statement that triggered the error
    pub fn span(&self) -> &Span {
        match self {
            ExpandError::MissingGlobPattern { span, .. }
            | ExpandError::NonRelativePattern { span, .. }
            | ExpandError::UnresolvableIdentifier { span, .. }
            | ExpandError::NameCollision { span, .. }
            | ExpandError::UnsupportedSpecifierShape { span, .. }
            | ExpandError::Glob { span, .. } => span,
        }
    }

    /// Stable diagnostic code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            ExpandError::MissingGlobPattern { .. } => "G0001",
            ExpandError::NonRelativePattern { .. } => "G0002",
            ExpandError::UnresolvableIdentifier { .. } => "G0003",
            ExpandError::NameCollision { .. } => "G0004",
            ExpandError::UnsupportedSpecifierShape { .. } => "G0005",
            ExpandError::Glob { .. } => "G0006",
        }
    }

    /// Convert to a source-located compiler diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code(), self.to_string(), self.span().clone());
        match self {
            ExpandError::NonRelativePattern { .. } => diagnostic
                .with_help("prefix the pattern with './' so it resolves against the importing file".to_string()),
            ExpandError::NameCollision { .. } => diagnostic.with_note(
                "identifier conversion folds characters, so 'foo-bar' and 'fooBar' collide".to_string(),
            ),
            ExpandError::UnsupportedSpecifierShape { .. } => diagnostic
                .with_help("use a single namespace or default binding, or no bindings at all".to_string()),
            _ => diagnostic,
        }
    }
}
