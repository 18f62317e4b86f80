//! Glob resolution: drives the filesystem matching primitive and builds
//! the candidate child modules for one import statement.

use crate::config::ExpandOptions;
use crate::error::ExpandError;
use crate::{ident, path, pattern};
use glint_diagnostics::Span;
use glob::MatchOptions;
use std::path::{Path, PathBuf};

/// Sentinel tag marking explicit glob intent in an import source
pub const GLOB_PREFIX: &str = "glob:";

/// Wildcard characters recognized by the matching primitive
const GLOB_MAGIC: &[char] = &['*', '?', '['];

/// True when the pattern contains any wildcard character (the sentinel tag
/// itself is ignored)
pub fn has_glob_magic(pattern: &str) -> bool {
    let pattern = pattern.strip_prefix(GLOB_PREFIX).unwrap_or(pattern);
    pattern.contains(GLOB_MAGIC)
}

/// One matched module: the file, its generated import path, and the
/// identifier derived from the wildcard capture. `derived_name` is `None`
/// exactly when no valid identifier exists for the capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildModule {
    pub source_file: PathBuf,
    pub relative_import_path: String,
    pub derived_name: Option<String>,
}

/// Matches a relative glob pattern against the filesystem.
///
/// Results keep the matching primitive's own (sorted) traversal order and
/// are never re-sorted, so resolution is deterministic for a given
/// filesystem snapshot.
pub struct GlobResolver {
    options: ExpandOptions,
}

impl GlobResolver {
    pub fn new(options: ExpandOptions) -> Self {
        Self { options }
    }

    /// Resolve `pattern` (already stripped of the sentinel tag) against
    /// `base_dir`, the directory of the file being compiled.
    ///
    /// Filesystem errors from the primitive are strict: an unreadable
    /// entry aborts the whole resolution instead of being skipped.
    pub fn resolve(
        &self,
        pattern: &str,
        base_dir: &Path,
        span: &Span,
    ) -> Result<Vec<ChildModule>, ExpandError> {
        if !pattern.starts_with('.') {
            return Err(ExpandError::NonRelativePattern {
                pattern: pattern.to_string(),
                span: span.clone(),
            });
        }

        let cleaned = pattern.strip_prefix("./").unwrap_or(pattern);
        // The base directory is a literal path, not part of the pattern;
        // escape it so metacharacters in directory names do not match as
        // wildcards.
        let base = base_dir.to_string_lossy().replace('\\', "/");
        let expression = format!("{}/{}", glob::Pattern::escape(&base), cleaned);

        let match_options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let entries = glob::glob_with(&expression, match_options)
            .map_err(|error| ExpandError::glob(pattern, error.to_string(), span))?;

        let mut modules = Vec::new();
        for entry in entries {
            let matched = entry.map_err(|error| ExpandError::glob(pattern, error.to_string(), span))?;
            let relative = path::relative_components(base_dir, &matched).join("/");
            let subpath = pattern::capture_subpath(cleaned, &relative).ok_or_else(|| {
                ExpandError::glob(
                    pattern,
                    format!("could not derive the wildcard capture for '{}'", relative),
                    span,
                )
            })?;

            let module = ChildModule {
                relative_import_path: path::normalize(
                    base_dir,
                    &matched,
                    &self.options.trim_file_extensions,
                ),
                derived_name: ident::memberify(&subpath),
                source_file: matched,
            };
            log::trace!(
                "matched {} -> {} (capture '{}')",
                module.source_file.display(),
                module.relative_import_path,
                subpath
            );
            modules.push(module);
        }

        log::debug!(
            "glob '{}' under {} matched {} module(s)",
            pattern,
            base_dir.display(),
            modules.len()
        );
        Ok(modules)
    }
}
