//! Derived-name validation for one resolution.

use crate::error::ExpandError;
use crate::resolver::ChildModule;
use glint_diagnostics::Span;
use std::collections::HashSet;

/// Verify that every derived name exists and is unique within the
/// resolution. A single linear pass; the first offending entry aborts, so
/// no partial output is ever emitted.
pub fn validate(modules: &[ChildModule], span: &Span) -> Result<(), ExpandError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for module in modules {
        let name = module
            .derived_name
            .as_deref()
            .ok_or_else(|| ExpandError::UnresolvableIdentifier {
                file: module.source_file.display().to_string(),
                span: span.clone(),
            })?;
        if !seen.insert(name) {
            // identifier conversion folds characters, so subpaths like
            // foo-bar and fooBar collide here on purpose
            return Err(ExpandError::NameCollision {
                name: name.to_string(),
                span: span.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn module(file: &str, name: Option<&str>) -> ChildModule {
        ChildModule {
            source_file: PathBuf::from(file),
            relative_import_path: format!("./{}", file),
            derived_name: name.map(|n| n.to_string()),
        }
    }

    #[test]
    fn unique_names_pass() {
        let modules = [
            module("a.js", Some("a")),
            module("b.js", Some("b")),
            module("c.js", Some("c")),
        ];
        assert!(validate(&modules, &Span::unknown()).is_ok());
    }

    #[test]
    fn empty_resolution_passes() {
        assert!(validate(&[], &Span::unknown()).is_ok());
    }

    #[test]
    fn colliding_names_fail_regardless_of_order() {
        let forward = [module("foo-bar.js", Some("fooBar")), module("fooBar.js", Some("fooBar"))];
        let backward = [module("fooBar.js", Some("fooBar")), module("foo-bar.js", Some("fooBar"))];
        for modules in [forward, backward] {
            let error = validate(&modules, &Span::unknown()).unwrap_err();
            match error {
                ExpandError::NameCollision { name, .. } => assert_eq!(name, "fooBar"),
                other => panic!("expected NameCollision, got {:?}", other),
            }
        }
    }

    #[test]
    fn null_name_fails_even_when_others_are_unique() {
        let modules = [
            module("a.js", Some("a")),
            module("---.js", None),
            module("b.js", Some("b")),
        ];
        let error = validate(&modules, &Span::unknown()).unwrap_err();
        match error {
            ExpandError::UnresolvableIdentifier { file, .. } => assert_eq!(file, "---.js"),
            other => panic!("expected UnresolvableIdentifier, got {:?}", other),
        }
    }
}
