//! Substring exclusion rules.
//!
//! A candidate is dropped when any pattern occurs anywhere in its
//! root-relative path, not only in the basename. An extension pattern such as
//! `.jpg` therefore also drops `my.jpgfile.txt`.

/// A set of substring patterns used to drop candidate files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionRules {
    patterns: Vec<String>,
}

impl ExclusionRules {
    /// Build a rule set from patterns. Empty patterns are ignored, since an
    /// empty substring would match every path.
    #[must_use]
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(Into::into)
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Return the first pattern contained in `path`, if any.
    #[must_use]
    pub fn matching_pattern(&self, path: &str) -> Option<&str> {
        self.patterns
            .iter()
            .map(String::as_str)
            .find(|pattern| path.contains(pattern))
    }

    /// Returns true if `path` contains any pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use extension_packager::filter::ExclusionRules;
    ///
    /// let rules = ExclusionRules::new([".jpg", "__pycache__"]);
    /// assert!(rules.is_excluded("icons/source.jpg"));
    /// assert!(rules.is_excluded("src/__pycache__/mod.pyc"));
    /// assert!(!rules.is_excluded("icons/icon128.png"));
    /// ```
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        self.matching_pattern(path).is_some()
    }
}
