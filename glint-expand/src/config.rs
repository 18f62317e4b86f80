use serde::{Deserialize, Serialize};

/// Options recognized by the glob import expansion.
///
/// The host compiler deserializes this from its own configuration file
/// (hence the camelCase field names) and threads it into the rewriter at
/// construction; there is no ambient or process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpandOptions {
    /// Extensions stripped from generated import paths, checked in order;
    /// at most one is removed per path.
    pub trim_file_extensions: Vec<String>,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            trim_file_extensions: ["js", "jsx", "ts", "tsx"]
                .iter()
                .map(|extension| extension.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_extension_list() {
        let options = ExpandOptions::default();
        assert_eq!(options.trim_file_extensions, ["js", "jsx", "ts", "tsx"]);
    }

    #[test]
    fn deserializes_camel_case() {
        let options: ExpandOptions =
            serde_json::from_str(r#"{ "trimFileExtensions": ["mjs", "js"] }"#).unwrap();
        assert_eq!(options.trim_file_extensions, ["mjs", "js"]);
    }

    #[test]
    fn missing_field_falls_back_to_default() {
        let options: ExpandOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ExpandOptions::default());
    }
}
