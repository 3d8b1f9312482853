//! Glob matching for registry lookups.
//!
//! Two wildcards are understood: `?` matches exactly one character and `*`
//! matches any run of characters, including an empty one. Every other
//! character matches itself, case-sensitively. A pattern has to cover the
//! whole text; there is no implicit prefix or suffix match.
//!
//! Pure and synchronous; no dependencies.
//!
//! ```
//! use college_glob::{Pattern, matches};
//!
//! assert!(matches("Biology", "*o?y"));
//! assert!(!matches("Bio", "*x"));
//! assert!(Pattern::new("Math").is_literal());
//! ```

use std::fmt;

const ANY_ONE: char = '?';
const ANY_RUN: char = '*';

// ─── Matching ────────────────────────────────────────────────────────────────

/// Return `true` if `pattern` matches all of `text`.
///
/// Runs a single left-to-right scan with at most one pending `*` checkpoint.
/// On a mismatch the most recent `*` claims one more character of `text` and
/// matching resumes right after it, so the work stays linear-amortised in the
/// number of checkpoints rather than exponential in the number of wildcards.
pub fn matches(text: &str, pattern: &str) -> bool {
  let text: Vec<char> = text.chars().collect();
  let pattern: Vec<char> = pattern.chars().collect();

  let mut t = 0;
  let mut p = 0;
  // (pattern index just past the last `*`, text index where its span ends)
  let mut checkpoint: Option<(usize, usize)> = None;

  while t < text.len() {
    match pattern.get(p) {
      Some(&ANY_RUN) => {
        p += 1;
        checkpoint = Some((p, t));
      }
      Some(&c) if c == ANY_ONE || c == text[t] => {
        t += 1;
        p += 1;
      }
      _ => {
        let Some((resume, span_end)) = checkpoint else {
          return false;
        };
        p = resume;
        t = span_end + 1;
        checkpoint = Some((resume, t));
      }
    }
  }

  pattern[p..].iter().all(|&c| c == ANY_RUN)
}

// ─── Pattern ─────────────────────────────────────────────────────────────────

/// A borrowed glob pattern.
///
/// A thin wrapper over [`matches`] that also lets callers ask whether the
/// pattern contains any wildcard at all, so exact lookups can skip a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern<'a>(&'a str);

impl<'a> Pattern<'a> {
  /// Matches every string, including the empty one.
  pub const ANY: Pattern<'static> = Pattern("*");

  pub fn new(pattern: &'a str) -> Self { Self(pattern) }

  pub fn as_str(&self) -> &'a str { self.0 }

  /// `true` if the pattern has no wildcard characters, i.e. it only matches
  /// the text equal to itself.
  pub fn is_literal(&self) -> bool { !self.0.contains([ANY_ONE, ANY_RUN]) }

  pub fn matches(&self, text: &str) -> bool { matches(text, self.0) }
}

impl<'a> From<&'a str> for Pattern<'a> {
  fn from(pattern: &'a str) -> Self { Self(pattern) }
}

impl<'a> From<&'a String> for Pattern<'a> {
  fn from(pattern: &'a String) -> Self { Self(pattern) }
}

impl fmt::Display for Pattern<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.0)
  }
}
