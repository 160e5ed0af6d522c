//! Wildcard pattern compilation.
//!
//! Supported syntax:
//! - `*` matches any sequence of characters, including `/`
//! - `?` matches any single character
//! - `[abc]` matches any character in the brackets, `[a-z]` a range
//! - `[^abc]` matches any character not in the brackets
//! - a `]` directly after the opening bracket (or after `^`) is literal
//!
//! Everything else matches itself. The pattern is anchored at both ends, so
//! it has to describe the whole name.

use regex::{Regex, RegexBuilder};

use crate::error::PatternError;

/// Converts a wildcard pattern into an anchored regular expression source.
pub(crate) fn wildcard_to_regex_source(pattern: &str) -> Result<String, PatternError> {
    let mut regex = String::with_capacity(pattern.len() * 2 + 2);
    regex.push('^');

    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                regex.push_str(".*");
                i += 1;
            }
            '?' => {
                regex.push('.');
                i += 1;
            }
            '[' => {
                let start = i;
                regex.push('[');
                i += 1;

                if i < chars.len() && chars[i] == '^' {
                    regex.push('^');
                    i += 1;
                }
                if i < chars.len() && chars[i] == ']' {
                    regex.push_str("\\]");
                    i += 1;
                }

                while i < chars.len() && chars[i] != ']' {
                    let c = chars[i];
                    // Class-set operators and nesting are not wildcard syntax.
                    if matches!(c, '\\' | '[' | '&' | '~') {
                        regex.push('\\');
                    }
                    regex.push(c);
                    i += 1;
                }

                if i >= chars.len() {
                    return Err(PatternError::UnterminatedSet { position: start });
                }
                regex.push(']');
                i += 1;
            }
            c => {
                let mut buf = [0u8; 4];
                regex.push_str(&regex::escape(c.encode_utf8(&mut buf)));
                i += 1;
            }
        }
    }

    regex.push('$');
    Ok(regex)
}

/// Compiles a wildcard pattern into a regex matching whole names.
pub fn compile_wildcard(pattern: &str, case_sensitive: bool) -> Result<Regex, PatternError> {
    let source = wildcard_to_regex_source(pattern)?;
    RegexBuilder::new(&source)
        .case_insensitive(!case_sensitive)
        .dot_matches_new_line(true)
        .build()
        .map_err(|err| PatternError::Regex {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })
}
