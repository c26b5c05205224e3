//! Derives a domain from a base domain by replaying structural edits.

use tracing::trace;

use crate::{
    diagnostics::{Diagnostic, DiagnosticResult, SourceLocation},
    domain::{Sum, TypeDomain, UserType, declared_scope},
    syntax::{EditDirective, Permutation},
};

/// Copies the base domain's types and applies every edit in order.
pub(super) fn permute(known: &[TypeDomain], permutation: Permutation) -> DiagnosticResult<TypeDomain> {
    let Permutation {
        tag,
        base,
        edits,
        location,
    } = permutation;

    let Some(base_domain) = known.iter().find(|domain| domain.tag == base) else {
        return Err(Box::new(
            Diagnostic::unknown_domain(base).with_location(location),
        ));
    };

    let mut user_types = base_domain.user_types.clone();
    let scope = format!("domain `{}`", tag);
    for edit in edits {
        trace!(domain = %tag, "applying {}", edit);
        apply_edit(&mut user_types, edit, &scope)?;
    }

    Ok(TypeDomain {
        tag,
        user_types,
        location: Some(location),
    })
}

fn apply_edit(
    user_types: &mut Vec<UserType>,
    edit: EditDirective,
    scope: &str,
) -> DiagnosticResult<()> {
    match edit {
        EditDirective::ExcludeType { tag, location } => {
            let Some(index) = user_types.iter().position(|user_type| user_type.tag() == tag) else {
                return Err(Box::new(
                    Diagnostic::unknown_type(tag, scope).with_location(location),
                ));
            };
            user_types.remove(index);
        }
        EditDirective::IncludeType(user_type) => {
            for declared in user_type.declared_tags() {
                if let Some(owner) = declared_scope(user_types, declared, scope) {
                    return Err(Box::new(
                        Diagnostic::duplicate_type(declared, owner)
                            .or_location(user_type.location()),
                    ));
                }
            }
            user_types.push(user_type);
        }
        EditDirective::ExcludeVariant {
            sum,
            variant,
            location,
        } => {
            let target = find_sum(user_types, &sum, scope, Some(&location))?;
            let Some(index) = target.variants.iter().position(|tuple| tuple.tag == variant) else {
                return Err(Box::new(
                    Diagnostic::unknown_type(variant, format!("sum `{}`", sum))
                        .with_location(location),
                ));
            };
            target.variants.remove(index);
        }
        EditDirective::IncludeVariant { sum, variant } => {
            find_sum(user_types, &sum, scope, variant.location.as_ref())?;
            // The new variant tag must be free across the whole domain.
            if let Some(owner) = declared_scope(user_types, &variant.tag, scope) {
                return Err(Box::new(
                    Diagnostic::duplicate_type(&variant.tag, owner)
                        .or_location(variant.location.as_ref()),
                ));
            }
            find_sum(user_types, &sum, scope, variant.location.as_ref())?
                .variants
                .push(variant);
        }
    }
    Ok(())
}

fn find_sum<'a>(
    user_types: &'a mut [UserType],
    sum: &str,
    scope: &str,
    location: Option<&SourceLocation>,
) -> DiagnosticResult<&'a mut Sum> {
    let Some(user_type) = user_types.iter_mut().find(|user_type| user_type.tag() == sum) else {
        return Err(Box::new(
            Diagnostic::unknown_type(sum, scope).or_location(location),
        ));
    };
    let keyword = user_type.keyword();
    user_type.as_sum_mut().ok_or_else(|| {
        Box::new(
            Diagnostic::unknown_type(sum, scope)
                .or_location(location)
                .with_hint(format!("`{}` is a `{}`, not a `sum`.", sum, keyword)),
        )
    })
}
