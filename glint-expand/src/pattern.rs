//! Glob capture extraction.
//!
//! The filesystem matching primitive reports which paths matched but not
//! which text the wildcards consumed, so every matched path is re-matched
//! here against the pattern to recover the capture groups: each `*`
//! captures the text it consumed within one segment, and each `**`
//! captures the whole segments it consumed. `?` and character classes
//! match without capturing. A `**` that matches zero segments contributes
//! no capture.

/// Match `path` against `pattern` and return the wildcard captures joined
/// by `/`, or `None` when the path does not match.
pub(crate) fn capture_subpath(pattern: &str, path: &str) -> Option<String> {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();
    let captures = match_segments(&pattern_segments, &path_segments)?;
    Some(captures.join("/"))
}

fn match_segments(pattern: &[&str], path: &[&str]) -> Option<Vec<String>> {
    let (first, rest) = match pattern.split_first() {
        Some(split) => split,
        None => return path.is_empty().then(Vec::new),
    };

    if *first == "**" {
        for take in 0..=path.len() {
            if let Some(tail) = match_segments(rest, path.get(take..)?) {
                let mut captures = Vec::new();
                if take > 0 {
                    captures.push(path.get(..take)?.join("/"));
                }
                captures.extend(tail);
                return Some(captures);
            }
        }
        return None;
    }

    let (head, tail) = path.split_first()?;
    let mut captures = match_segment(first, head)?;
    captures.extend(match_segments(rest, tail)?);
    Some(captures)
}

fn match_segment(pattern: &str, text: &str) -> Option<Vec<String>> {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    match_chars(&pattern, &text)
}

fn match_chars(pattern: &[char], text: &[char]) -> Option<Vec<String>> {
    let (first, rest) = match pattern.split_first() {
        Some(split) => split,
        None => return text.is_empty().then(Vec::new),
    };

    match *first {
        '*' => {
            // Shortest extent first; the rest of the pattern forces the
            // final length, so captures stay deterministic.
            for take in 0..=text.len() {
                if let Some(tail) = match_chars(rest, text.get(take..)?) {
                    let mut captures = vec![text.get(..take)?.iter().collect::<String>()];
                    captures.extend(tail);
                    return Some(captures);
                }
            }
            None
        }
        '?' => {
            let (_, remaining) = text.split_first()?;
            match_chars(rest, remaining)
        }
        '[' => {
            let (class, consumed) = parse_class(rest)?;
            let (ch, remaining) = text.split_first()?;
            if !class.matches(*ch) {
                return None;
            }
            match_chars(rest.get(consumed..)?, remaining)
        }
        literal => {
            let (ch, remaining) = text.split_first()?;
            if *ch != literal {
                return None;
            }
            match_chars(rest, remaining)
        }
    }
}

struct CharClass {
    negated: bool,
    ranges: Vec<(char, char)>,
}

impl CharClass {
    fn matches(&self, ch: char) -> bool {
        let inside = self.ranges.iter().any(|&(lo, hi)| lo <= ch && ch <= hi);
        inside != self.negated
    }
}

/// Parse a character class body starting just after the `[`; returns the
/// class and the number of characters consumed, including the closing `]`.
fn parse_class(pattern: &[char]) -> Option<(CharClass, usize)> {
    let mut index = 0;
    let negated = matches!(pattern.first(), Some(&'!'));
    if negated {
        index += 1;
    }

    let mut ranges = Vec::new();
    let mut first_in_class = true;
    loop {
        let ch = *pattern.get(index)?;
        if ch == ']' && !first_in_class {
            return Some((CharClass { negated, ranges }, index + 1));
        }
        first_in_class = false;
        // A `-` forms a range unless it is the last character of the class
        if matches!(pattern.get(index + 1), Some(&'-'))
            && !matches!(pattern.get(index + 2), Some(&']') | None)
        {
            let hi = *pattern.get(index + 2)?;
            ranges.push((ch, hi));
            index += 3;
        } else {
            ranges.push((ch, ch));
            index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_captures_the_segment_stem() {
        assert_eq!(
            capture_subpath("plugins/*.js", "plugins/alpha.js").as_deref(),
            Some("alpha")
        );
    }

    #[test]
    fn literal_segments_capture_nothing() {
        assert_eq!(
            capture_subpath("plugins/core.js", "plugins/core.js").as_deref(),
            Some("")
        );
    }

    #[test]
    fn globstar_captures_consumed_directories() {
        assert_eq!(
            capture_subpath("**/*.js", "a/b/c.js").as_deref(),
            Some("a/b/c")
        );
    }

    #[test]
    fn zero_width_globstar_contributes_no_capture() {
        assert_eq!(capture_subpath("x/**/*.js", "x/a.js").as_deref(), Some("a"));
        assert_eq!(
            capture_subpath("x/**/*.js", "x/sub/a.js").as_deref(),
            Some("sub/a")
        );
    }

    #[test]
    fn multiple_stars_capture_in_order() {
        assert_eq!(
            capture_subpath("a*b*.js", "a1b2.js").as_deref(),
            Some("1/2")
        );
    }

    #[test]
    fn question_mark_and_classes_do_not_capture() {
        assert_eq!(
            capture_subpath("?at-*.js", "cat-alpha.js").as_deref(),
            Some("alpha")
        );
        assert_eq!(
            capture_subpath("[ab]-*.js", "a-one.js").as_deref(),
            Some("one")
        );
    }

    #[test]
    fn negated_class() {
        assert!(capture_subpath("[!x]-*.js", "a-one.js").is_some());
        assert!(capture_subpath("[!x]-*.js", "x-one.js").is_none());
    }

    #[test]
    fn class_ranges() {
        assert!(capture_subpath("[a-c]*.js", "b1.js").is_some());
        assert!(capture_subpath("[a-c]*.js", "d1.js").is_none());
    }

    #[test]
    fn star_can_capture_empty_text() {
        assert_eq!(capture_subpath("*.js", ".js").as_deref(), Some(""));
    }

    #[test]
    fn mismatches_return_none() {
        assert!(capture_subpath("plugins/*.js", "plugins/alpha.ts").is_none());
        assert!(capture_subpath("plugins/*.js", "other/alpha.js").is_none());
        assert!(capture_subpath("plugins/*.js", "plugins/deep/alpha.js").is_none());
    }
}
