//! Exclusion pattern matching for tree walking

use std::path::Path;

use glob::{Pattern, PatternError};

/// Patterns applied on every run unless `--no-default-excludes` is given.
/// `tree.*.txt` keeps previous dumps out of later ones when stump is run
/// repeatedly in the same directory.
pub const DEFAULT_EXCLUDES: &[&str] = &["tree.*.txt"];

/// An ordered set of glob patterns matched against root-relative paths.
///
/// Matching uses the `glob` crate's default options, where `*` crosses
/// path separators. That makes `*.log` suppress log files at any depth,
/// while a bare name like `node_modules` only matches at the top level --
/// the same semantics as Python's `fnmatch`.
pub struct ExcludeSet {
    patterns: Vec<Pattern>,
}

impl ExcludeSet {
    /// Compile a set of patterns. Fails on the first invalid pattern,
    /// reporting it so the CLI can name the offender.
    pub fn new<I, S>(patterns: I) -> Result<Self, (String, PatternError)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for p in patterns {
            let p = p.as_ref();
            match Pattern::new(p) {
                Ok(pat) => compiled.push(pat),
                Err(e) => return Err((p.to_string(), e)),
            }
        }
        Ok(Self { patterns: compiled })
    }

    /// An empty set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Check whether a root-relative path matches any pattern.
    pub fn matches(&self, relative: &Path) -> bool {
        let rel = normalize_separators(relative);
        self.patterns.iter().any(|p| p.matches(&rel))
    }
}

/// Render a relative path with forward slashes so patterns behave the
/// same on every platform.
fn normalize_separators(path: &Path) -> String {
    let s = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
