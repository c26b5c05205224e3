//! Turns a flattened statement list into concrete domains.
//!
//! Statements are processed in declaration order. A permutation sees every
//! domain produced before it, including the output of earlier permutations.

mod permute;
mod references;

use tracing::debug;

use crate::{
    diagnostics::{Diagnostic, DiagnosticResult, ErrorKind},
    domain::TypeDomain,
    options::CompileOptions,
    syntax::Statement,
    universe::TypeUniverse,
};

pub fn compute_universe(
    statements: Vec<Statement>,
    options: &CompileOptions,
) -> DiagnosticResult<TypeUniverse> {
    let mut domains: Vec<TypeDomain> = Vec::new();
    let mut transforms = Vec::new();

    for statement in statements {
        let domain = match statement {
            Statement::Domain(domain) => domain,
            Statement::Permutation(permutation) => permute::permute(&domains, permutation)?,
            Statement::Transform(transform) => {
                transforms.push(transform);
                continue;
            }
            Statement::Include(include) => {
                return Err(Box::new(Diagnostic::malformed(
                    format!("include \"{}\" was not resolved", include.path),
                    include.location,
                )));
            }
        };

        if domains.iter().any(|known| known.tag == domain.tag) {
            let reason = format!("domain `{}` is defined more than once", domain.tag);
            return Err(Box::new(
                Diagnostic::new(ErrorKind::MalformedDefinition { reason })
                    .or_location(domain.location.as_ref()),
            ));
        }
        if options.check_references {
            references::check_references(&domain)?;
        }

        debug!(domain = %domain.tag, types = domain.user_types.len(), "computed domain");
        domains.push(domain);
    }

    // Transforms may name domains declared after them.
    for transform in &transforms {
        for tag in [&transform.from, &transform.to] {
            if !domains.iter().any(|domain| &domain.tag == tag) {
                return Err(Box::new(
                    Diagnostic::unknown_domain(tag.as_str()).or_location(transform.location.as_ref()),
                ));
            }
        }
    }

    Ok(TypeUniverse::new(domains, transforms))
}

#[cfg(test)]
mod compute_test;
