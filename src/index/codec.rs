//! Name escaping and normalization for path keys.

/// Separator between ancestor names in a category path.
pub const DELIMITER: char = '/';

/// Prefix that marks a delimiter as part of a name.
pub const ESCAPE: char = '\\';

/// Escape every delimiter inside a category name.
pub fn quote_delimiter(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c == DELIMITER {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Reverse of [`quote_delimiter`].
pub fn unquote_delimiter(quoted: &str) -> String {
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESCAPE && chars.peek() == Some(&DELIMITER) {
            continue;
        }
        out.push(c);
    }
    out
}

/// Normalize a path key. Case folding only, for now.
pub fn standardize(path: &str) -> String {
    path.to_lowercase()
}

/// Strip stray delimiters from the ends of a query path. A trailing
/// delimiter that is escaped belongs to the last name and is kept.
pub fn trim_delimiters(path: &str) -> &str {
    let mut trimmed = path.trim_start_matches(DELIMITER);
    while let Some(rest) = trimmed.strip_suffix(DELIMITER) {
        if rest.ends_with(ESCAPE) {
            break;
        }
        trimmed = rest;
    }
    trimmed
}

/// Split a joined path on unescaped delimiters and unquote each segment.
///
/// A name that itself ends with the escape character cannot be told apart
/// from an escaped delimiter; such paths split differently than they joined.
pub fn split_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut previous: Option<char> = None;
    for c in path.chars() {
        if c == DELIMITER && previous != Some(ESCAPE) {
            segments.push(unquote_delimiter(&current));
            current.clear();
        } else {
            current.push(c);
        }
        previous = Some(c);
    }
    segments.push(unquote_delimiter(&current));
    segments
}
