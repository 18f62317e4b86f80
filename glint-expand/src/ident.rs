//! Identifier derivation for captured glob subpaths.
//!
//! `identifierfy` is the delegated string-to-identifier primitive: a pure
//! function that folds an arbitrary path segment into a valid JavaScript
//! identifier, or reports that none exists. `memberify` applies it per
//! `/`-separated segment and joins the results with `$`.

/// ECMAScript reserved words, including strict-mode and future reserved
/// words and the literal keywords.
const RESERVED_WORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Disambiguation behavior for [`identifierfy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierOptions {
    /// Prefix a reserved word with `_` instead of rejecting it
    pub prefix_reserved_words: bool,
    /// Prefix an invalid leading character (e.g. a digit) with `_` instead
    /// of rejecting the segment
    pub prefix_invalid_identifiers: bool,
}

fn is_id_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

fn is_id_continue(ch: char) -> bool {
    is_id_start(ch) || ch.is_numeric()
}

/// Fold `name` into a valid identifier, or `None` if no sane identifier
/// exists for it.
///
/// Characters that cannot appear in an identifier are dropped and the next
/// kept character is uppercased, so `foo-bar` becomes `fooBar`. A result
/// that starts with an invalid character or equals a reserved word is
/// `_`-prefixed or rejected according to `options`.
pub fn identifierfy(name: &str, options: IdentifierOptions) -> Option<String> {
    let mut id = String::with_capacity(name.len());
    let mut fold_next = false;
    for ch in name.chars() {
        if is_id_continue(ch) {
            if fold_next {
                id.extend(ch.to_uppercase());
                fold_next = false;
            } else {
                id.push(ch);
            }
        } else {
            fold_next = !id.is_empty();
        }
    }

    let first = id.chars().next()?;
    if !is_id_start(first) {
        return options
            .prefix_invalid_identifiers
            .then(|| format!("_{}", id));
    }
    if RESERVED_WORDS.contains(&id.as_str()) {
        return options.prefix_reserved_words.then(|| format!("_{}", id));
    }
    Some(id)
}

/// Derive the member identifier for one captured wildcard subpath.
///
/// Reserved words are only disambiguated when the whole subpath is a single
/// segment, and invalid leading characters only on the first segment;
/// deeper segments use strict rules. Any segment without a valid identifier
/// makes the whole subpath unresolvable.
pub fn memberify(subpath: &str) -> Option<String> {
    let pieces: Vec<&str> = subpath.split('/').collect();
    let prefix_reserved_words = pieces.len() == 1;
    let mut ids = Vec::with_capacity(pieces.len());
    for (index, piece) in pieces.iter().enumerate() {
        let id = identifierfy(
            piece,
            IdentifierOptions {
                prefix_reserved_words,
                prefix_invalid_identifiers: index == 0,
            },
        )?;
        ids.push(id);
    }
    Some(ids.join("$"))
}
