//! Filter engine for curve names.
//!
//! A [`FilterState`] (match mode, case sensitivity, text) is compiled into a
//! [`RowMatcher`] once per evaluation pass and then applied to every row name.
//!
//! # Match modes
//!
//! - [`MatchMode::Contains`]: the text is split on single spaces and a name
//!   matches when it contains every token. Splitting keeps empty tokens, and
//!   an empty token is contained in every name, so an empty filter (or runs
//!   of spaces) never hides anything by itself.
//! - [`MatchMode::Wildcard`]: the text is a wildcard pattern matched against
//!   the whole name (see [`wildcard`]).
//!
//! Case-insensitive matching folds each character on its own in both modes,
//! so a final `Σ` matches `σ` whichever mode is active.
//!
//! # Example
//!
//! ```
//! use curvelist::filter::{FilterState, MatchMode};
//!
//! let state = FilterState::new(MatchMode::Contains, false, "veh SPEED");
//! let matcher = state.matcher();
//! assert!(matcher.is_match("vehicle/speed"));
//! assert!(!matcher.is_match("vehicle/rpm"));
//! ```

pub mod wildcard;

use regex::Regex;
use serde::{Deserialize, Serialize};

use curvelist_core::logging::targets;

use crate::error::Result;

pub use wildcard::compile_wildcard;

/// How filter text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Space-separated tokens that must all appear in the name.
    #[default]
    Contains,
    /// Anchored wildcard pattern (`*`, `?`, `[...]`).
    Wildcard,
}

/// The inputs of one filter evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Active match mode.
    pub mode: MatchMode,
    /// Whether matching distinguishes letter case.
    pub case_sensitive: bool,
    /// The filter text as typed.
    pub text: String,
}

impl FilterState {
    /// Creates a filter state.
    pub fn new(mode: MatchMode, case_sensitive: bool, text: impl Into<String>) -> Self {
        Self {
            mode,
            case_sensitive,
            text: text.into(),
        }
    }

    /// Compiles this state, reporting an invalid wildcard pattern.
    pub fn try_matcher(&self) -> Result<RowMatcher> {
        Ok(match self.mode {
            MatchMode::Contains => RowMatcher::contains(&self.text, self.case_sensitive),
            MatchMode::Wildcard => {
                RowMatcher::Wildcard(Some(compile_wildcard(&self.text, self.case_sensitive)?))
            }
        })
    }

    /// Compiles this state into a matcher.
    ///
    /// An invalid wildcard pattern produces a matcher that rejects every name.
    pub fn matcher(&self) -> RowMatcher {
        self.try_matcher().unwrap_or_else(|err| {
            tracing::debug!(target: targets::FILTER, %err, "wildcard pattern rejected");
            RowMatcher::Wildcard(None)
        })
    }
}

/// A compiled filter, ready to test names.
#[derive(Debug, Clone)]
pub enum RowMatcher {
    /// Token containment. Tokens are pre-folded when case-insensitive.
    Contains {
        /// The split tokens, including empty ones.
        tokens: Vec<String>,
        /// Whether comparisons distinguish case.
        case_sensitive: bool,
    },
    /// Anchored wildcard; `None` when the pattern failed to compile.
    Wildcard(Option<Regex>),
}

impl RowMatcher {
    fn contains(text: &str, case_sensitive: bool) -> Self {
        let tokens = text
            .split(' ')
            .map(|token| {
                if case_sensitive {
                    token.to_string()
                } else {
                    fold_case(token)
                }
            })
            .collect();
        RowMatcher::Contains {
            tokens,
            case_sensitive,
        }
    }

    /// Returns true when `name` passes the filter (the row stays visible).
    pub fn is_match(&self, name: &str) -> bool {
        match self {
            RowMatcher::Contains {
                tokens,
                case_sensitive,
            } => {
                if *case_sensitive {
                    tokens.iter().all(|token| name.contains(token.as_str()))
                } else {
                    let name = fold_case(name);
                    tokens.iter().all(|token| name.contains(token.as_str()))
                }
            }
            RowMatcher::Wildcard(Some(regex)) => regex.is_match(name),
            RowMatcher::Wildcard(None) => false,
        }
    }

    /// Returns true when `name` should be hidden.
    pub fn hides(&self, name: &str) -> bool {
        !self.is_match(name)
    }
}

/// Folds `text` for caseless comparison, one character at a time.
///
/// Unlike [`str::to_lowercase`] this ignores context (a word-final `Σ` folds
/// to `σ`, not `ς`), and it maps the lowercase variant forms that have no
/// uppercase of their own onto their common form.
pub fn fold_case(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'ς' => folded.push('σ'),
            'ϐ' => folded.push('β'),
            'ϑ' => folded.push('θ'),
            'ϕ' => folded.push('φ'),
            'ϖ' => folded.push('π'),
            'ϰ' => folded.push('κ'),
            'ϱ' => folded.push('ρ'),
            'ϵ' => folded.push('ε'),
            'ſ' => folded.push('s'),
            '\u{1FBE}' => folded.push('ι'),
            _ => folded.extend(c.to_lowercase()),
        }
    }
    folded
}
