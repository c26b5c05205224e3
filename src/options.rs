use std::path::PathBuf;

/// Settings for one compilation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Include search roots, tried in order after the including file's
    /// directory.
    pub roots: Vec<PathBuf>,
    /// Reject named element types that do not resolve within their domain.
    pub check_references: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            check_references: true,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    pub fn check_references(mut self, enabled: bool) -> Self {
        self.check_references = enabled;
        self
    }
}
