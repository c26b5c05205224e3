use crate::{
    diagnostics::{Diagnostic, DiagnosticResult},
    domain::TypeDomain,
};

/// Every named element type must be a type or a sum variant of the same
/// domain. Reports the first dangling reference in declaration order.
pub(super) fn check_references(domain: &TypeDomain) -> DiagnosticResult<()> {
    for tuple in domain.tuples() {
        for element in &tuple.elements {
            if let Some(name) = element.type_ref.referenced_name()
                && !domain.resolves(name)
            {
                return Err(Box::new(
                    Diagnostic::unknown_type(name, format!("domain `{}`", domain.tag))
                        .or_location(element.location.as_ref().or(tuple.location.as_ref())),
                ));
            }
        }
    }
    Ok(())
}
