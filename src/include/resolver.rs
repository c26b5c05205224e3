use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    vec,
};

use tracing::{debug, trace};

use crate::{
    diagnostics::{Diagnostic, DiagnosticResult},
    syntax::{IncludeDirective, Statement, parse_source},
};

use super::loader::{SourceLoader, lexical_normalize};

/// One file whose statements are still being spliced.
struct Frame {
    file: PathBuf,
    dir: Option<PathBuf>,
    pending: vec::IntoIter<Statement>,
}

impl Frame {
    fn new(file: PathBuf, dir: Option<PathBuf>, statements: Vec<Statement>) -> Self {
        Self {
            file,
            dir,
            pending: statements.into_iter(),
        }
    }
}

/// Expands `include` statements against an including directory and an ordered
/// list of search roots.
pub struct IncludeResolver<'a> {
    roots: Vec<PathBuf>,
    loader: &'a dyn SourceLoader,
}

impl<'a> IncludeResolver<'a> {
    pub fn new(roots: &[PathBuf], loader: &'a dyn SourceLoader) -> Self {
        Self {
            roots: normalize_roots(roots, loader),
            loader,
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Parses `text` and splices every include it reaches, depth first.
    ///
    /// `source_id` names a file when the loader knows it; its directory is
    /// then searched before the roots. Any other id is synthetic and only the
    /// roots are searched.
    pub fn resolve_source(&self, source_id: &str, text: &str) -> DiagnosticResult<Vec<Statement>> {
        let path = Path::new(source_id);
        let (file, dir) = if self.loader.exists(path) {
            let canonical = self.loader.canonicalize(path);
            let dir = canonical.parent().map(Path::to_path_buf);
            (canonical, dir)
        } else {
            (path.to_path_buf(), None)
        };

        let statements = parse_source(text, file.display().to_string())?;
        self.splice(Frame::new(file, dir, statements))
    }

    fn splice(&self, top: Frame) -> DiagnosticResult<Vec<Statement>> {
        let mut output = Vec::new();
        let mut in_progress: HashSet<PathBuf> = HashSet::from([top.file.clone()]);
        let mut stack = vec![top];

        while let Some(frame) = stack.last_mut() {
            let Some(statement) = frame.pending.next() else {
                if let Some(done) = stack.pop() {
                    trace!(file = %done.file.display(), "finished include frame");
                    in_progress.remove(&done.file);
                }
                continue;
            };

            let directive = match statement {
                Statement::Include(directive) => directive,
                other => {
                    output.push(other);
                    continue;
                }
            };

            let target = self.locate(&directive, frame.dir.as_deref())?;

            if in_progress.contains(&target) {
                let start = stack
                    .iter()
                    .position(|frame| frame.file == target)
                    .unwrap_or_default();
                let mut cycle: Vec<PathBuf> =
                    stack[start..].iter().map(|frame| frame.file.clone()).collect();
                cycle.push(target);
                return Err(Box::new(
                    Diagnostic::circular_include(cycle).with_location(directive.location),
                ));
            }

            let text = self.loader.read(&target).map_err(|err| {
                Box::new(
                    Diagnostic::include_not_found(&directive.path, vec![target.clone()])
                        .with_location(directive.location.clone())
                        .with_hint(format!("Reading {} failed: {}", target.display(), err)),
                )
            })?;

            debug!(
                include = %directive.path,
                file = %target.display(),
                depth = stack.len(),
                "resolved include"
            );

            let statements = parse_source(&text, target.display().to_string())?;
            let dir = target.parent().map(Path::to_path_buf);
            in_progress.insert(target.clone());
            stack.push(Frame::new(target, dir, statements));
        }

        Ok(output)
    }

    /// First existing candidate, canonicalized. Fails with every absolute path
    /// tried, in search order.
    fn locate(&self, directive: &IncludeDirective, dir: Option<&Path>) -> DiagnosticResult<PathBuf> {
        let candidates = self.candidates(&directive.path, dir);
        for candidate in &candidates {
            if self.loader.exists(candidate) {
                return Ok(self.loader.canonicalize(candidate));
            }
        }

        trace!(include = %directive.path, tried = candidates.len(), "include not found");
        Err(Box::new(
            Diagnostic::include_not_found(&directive.path, candidates)
                .with_location(directive.location.clone()),
        ))
    }

    fn candidates(&self, include: &str, dir: Option<&Path>) -> Vec<PathBuf> {
        let include = Path::new(include);
        if include.is_absolute() {
            return vec![lexical_normalize(include)];
        }

        let mut candidates: Vec<PathBuf> = Vec::new();
        let bases = dir
            .into_iter()
            .chain(self.roots.iter().map(PathBuf::as_path));
        for base in bases {
            let candidate = lexical_normalize(&base.join(include));
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
        candidates
    }
}

/// Canonical roots in their original order, duplicates dropped.
pub fn normalize_roots(roots: &[PathBuf], loader: &dyn SourceLoader) -> Vec<PathBuf> {
    let mut normalized = Vec::new();
    for root in roots {
        let canonical = loader.canonicalize(root);
        if !normalized.contains(&canonical) {
            normalized.push(canonical);
        }
    }
    normalized
}
