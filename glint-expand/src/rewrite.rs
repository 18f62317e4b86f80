//! Entry point: per-statement glob import rewriting.
//!
//! Invoked by the host compiler once for each import statement it visits:
//! `Inspect -> (NoOp | Resolve -> Validate -> Synthesize -> Replace)`.
//! Errors abort compilation of the current file; there is no partial or
//! best-effort rewrite.

use crate::collision;
use crate::config::ExpandOptions;
use crate::error::ExpandError;
use crate::resolver::{has_glob_magic, GlobResolver, GLOB_PREFIX};
use crate::synthesize;
use glint_ast::{ImportStatement, Statement};
use std::path::Path;

/// Outcome of inspecting one import statement
#[derive(Debug, Clone, PartialEq)]
pub enum Rewrite {
    /// The statement is not a glob import and stays untouched
    Unchanged,
    /// The statement is replaced by these statements, in order, at the
    /// same source position
    Replace(Vec<Statement>),
}

/// The host compiler's replace-in-place primitive. The transform only
/// hands over the replacement sequence; splicing it into the tree and
/// resuming traversal is the host's business.
pub trait StatementEditor {
    fn replace_with(&mut self, statements: Vec<Statement>);
}

pub struct ImportRewriter {
    resolver: GlobResolver,
}

impl ImportRewriter {
    pub fn new(options: ExpandOptions) -> Self {
        Self {
            resolver: GlobResolver::new(options),
        }
    }

    /// Inspect one import statement of `source_file` and compute its
    /// replacement, if any.
    pub fn rewrite(
        &self,
        source_file: &Path,
        import: &ImportStatement,
    ) -> Result<Rewrite, ExpandError> {
        let pattern = import.source.as_str();

        if !has_glob_magic(pattern) {
            if pattern.starts_with(GLOB_PREFIX) {
                // tagged as a glob on purpose, but nothing to match
                return Err(ExpandError::MissingGlobPattern {
                    pattern: pattern.to_string(),
                    span: import.span.clone(),
                });
            }
            return Ok(Rewrite::Unchanged);
        }

        // Only `*` wildcards mark a glob import; `?`/`[...]`-only patterns
        // fall through to the host's normal import handling.
        if !pattern.contains('*') {
            return Ok(Rewrite::Unchanged);
        }

        let pattern = pattern.strip_prefix(GLOB_PREFIX).unwrap_or(pattern);
        let base_dir = source_file.parent().unwrap_or_else(|| Path::new("."));

        log::debug!(
            "expanding glob import '{}' in {}",
            pattern,
            source_file.display()
        );

        let modules = self.resolver.resolve(pattern, base_dir, &import.span)?;
        collision::validate(&modules, &import.span)?;
        let replacement = synthesize::synthesize(import, &modules)?;
        Ok(Rewrite::Replace(replacement))
    }

    /// Rewrite through the host's replace-in-place primitive; a no-op
    /// leaves the editor untouched.
    pub fn rewrite_in_place<E: StatementEditor>(
        &self,
        editor: &mut E,
        source_file: &Path,
        import: &ImportStatement,
    ) -> Result<(), ExpandError> {
        if let Rewrite::Replace(statements) = self.rewrite(source_file, import)? {
            editor.replace_with(statements);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_diagnostics::Span;

    fn span() -> Span {
        Span::new("app.js".to_string(), 1, 1, 30)
    }

    #[test]
    fn plain_imports_are_left_alone() {
        let rewriter = ImportRewriter::new(ExpandOptions::default());
        let import = ImportStatement::side_effect("./utils", span());
        let result = rewriter.rewrite(Path::new("/src/app.js"), &import).unwrap();
        assert_eq!(result, Rewrite::Unchanged);
    }

    #[test]
    fn non_star_magic_is_not_a_glob_import() {
        let rewriter = ImportRewriter::new(ExpandOptions::default());
        let import = ImportStatement::side_effect("./utils/[ab].js", span());
        let result = rewriter.rewrite(Path::new("/src/app.js"), &import).unwrap();
        assert_eq!(result, Rewrite::Unchanged);
    }

    #[test]
    fn tagged_pattern_without_wildcards_is_fatal() {
        let rewriter = ImportRewriter::new(ExpandOptions::default());
        let import = ImportStatement::side_effect("glob:./utils/index.js", span());
        let error = rewriter
            .rewrite(Path::new("/src/app.js"), &import)
            .unwrap_err();
        assert!(matches!(error, ExpandError::MissingGlobPattern { .. }));
        assert_eq!(error.span().file, "app.js");
    }

    #[test]
    fn non_relative_glob_is_fatal() {
        let rewriter = ImportRewriter::new(ExpandOptions::default());
        let import = ImportStatement::side_effect("plugins/*.js", span());
        let error = rewriter
            .rewrite(Path::new("/src/app.js"), &import)
            .unwrap_err();
        assert!(matches!(error, ExpandError::NonRelativePattern { .. }));
    }
}
