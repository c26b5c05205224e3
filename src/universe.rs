//! Entry points: source text in, resolved [`TypeUniverse`] out.

use std::path::Path;

use serde::Serialize;

use crate::{
    compute::compute_universe,
    diagnostics::{Diagnostic, DiagnosticResult},
    domain::{Transform, TypeDomain},
    include::{FsLoader, IncludeResolver, SourceLoader},
    options::CompileOptions,
};

/// The fully resolved output of one compilation: concrete domains in
/// declaration order plus the declared transforms.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeUniverse {
    domains: Vec<TypeDomain>,
    transforms: Vec<Transform>,
}

impl TypeUniverse {
    pub fn new(domains: Vec<TypeDomain>, transforms: Vec<Transform>) -> Self {
        Self {
            domains,
            transforms,
        }
    }

    pub fn domains(&self) -> &[TypeDomain] {
        &self.domains
    }

    pub fn domain(&self, tag: &str) -> Option<&TypeDomain> {
        self.domains.iter().find(|domain| domain.tag == tag)
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn into_domains(self) -> Vec<TypeDomain> {
        self.domains
    }
}

/// Compiles `text`, resolving includes from the real filesystem.
///
/// `id` names the source in diagnostics. When it is the path of an existing
/// file, that file's directory is searched for includes before the roots.
pub fn parse_universe(
    id: &str,
    text: &str,
    options: &CompileOptions,
) -> DiagnosticResult<TypeUniverse> {
    parse_universe_with_loader(id, text, options, &FsLoader)
}

pub fn parse_universe_with_loader(
    id: &str,
    text: &str,
    options: &CompileOptions,
    loader: &dyn SourceLoader,
) -> DiagnosticResult<TypeUniverse> {
    let resolver = IncludeResolver::new(&options.roots, loader);
    let statements = resolver.resolve_source(id, text)?;
    compute_universe(statements, options)
}

/// Reads the entry file through `loader` and compiles it.
pub fn load_universe(
    path: &Path,
    options: &CompileOptions,
    loader: &dyn SourceLoader,
) -> DiagnosticResult<TypeUniverse> {
    let text = loader.read(path).map_err(|err| {
        let attempted = vec![loader.canonicalize(path)];
        Box::new(
            Diagnostic::include_not_found(path.display().to_string(), attempted)
                .with_hint(format!("Reading {} failed: {}", path.display(), err)),
        )
    })?;
    parse_universe_with_loader(&path.display().to_string(), &text, options, loader)
}
