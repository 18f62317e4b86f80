//! Path normalization for generated import declarations.
//!
//! Matched files are rewritten as dot-relative, forward-slash paths so the
//! output is identical across platforms, with configured extensions
//! stripped.

use std::path::{Component, Path};

/// Platform-independent path components of `target` relative to `base`
pub(crate) fn relative_components(base: &Path, target: &Path) -> Vec<String> {
    let base: Vec<Component> = base.components().collect();
    let target: Vec<Component> = target.components().collect();

    let mut common = 0;
    while common < base.len() && common < target.len() {
        match (base.get(common), target.get(common)) {
            (Some(left), Some(right)) if left == right => common += 1,
            _ => break,
        }
    }

    let mut parts = Vec::new();
    for _ in common..base.len() {
        parts.push("..".to_string());
    }
    for component in target.iter().skip(common) {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }
    parts
}

/// Rewrite `matched_file` as an import path relative to `base_dir`.
///
/// The result always uses `/` separators, starts with `.`, and has at most
/// one trailing extension removed; `trim_extensions` is checked in order
/// and the first match wins.
pub fn normalize(base_dir: &Path, matched_file: &Path, trim_extensions: &[String]) -> String {
    let mut relative = relative_components(base_dir, matched_file).join("/");
    if !relative.starts_with('.') {
        relative = format!("./{}", relative);
    }

    for extension in trim_extensions {
        let suffix = format!(".{}", extension);
        if let Some(stripped) = relative.strip_suffix(&suffix) {
            relative = stripped.to_string();
            break;
        }
    }

    relative
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_extensions() -> Vec<String> {
        ["js", "jsx", "ts", "tsx"]
            .iter()
            .map(|extension| extension.to_string())
            .collect()
    }

    #[test]
    fn strips_configured_extension() {
        let normalized = normalize(
            Path::new("/base"),
            Path::new("/base/a/b.ts"),
            &default_extensions(),
        );
        assert_eq!(normalized, "./a/b");
    }

    #[test]
    fn strips_at_most_one_extension() {
        let normalized = normalize(
            Path::new("/base"),
            Path::new("/base/bundle.js.js"),
            &default_extensions(),
        );
        assert_eq!(normalized, "./bundle.js");
    }

    #[test]
    fn longer_extension_variants_survive() {
        // .jsx does not end with ".js", so only the .jsx rule applies
        let normalized = normalize(
            Path::new("/base"),
            Path::new("/base/view.jsx"),
            &default_extensions(),
        );
        assert_eq!(normalized, "./view");
    }

    #[test]
    fn unknown_extensions_are_kept() {
        let normalized = normalize(
            Path::new("/base"),
            Path::new("/base/styles.css"),
            &default_extensions(),
        );
        assert_eq!(normalized, "./styles.css");
    }

    #[test]
    fn parent_relative_paths_keep_their_leading_dots() {
        let normalized = normalize(
            Path::new("/base/app"),
            Path::new("/base/shared/util.js"),
            &default_extensions(),
        );
        assert_eq!(normalized, "../shared/util");
    }

    #[test]
    fn extension_matching_is_case_sensitive() {
        let normalized = normalize(
            Path::new("/base"),
            Path::new("/base/a.JS"),
            &default_extensions(),
        );
        assert_eq!(normalized, "./a.JS");
    }
}
