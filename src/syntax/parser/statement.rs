//! Top-level forms: `define`, `include` and `transform`, plus permutation edits.

use crate::{
    diagnostics::{Diagnostic, DiagnosticResult},
    domain::{Transform, TypeDomain, declared_scope},
    syntax::{
        node::Node,
        statement::{EditDirective, IncludeDirective, Permutation, Statement},
    },
};

use super::{
    helpers::{Form, expect_name, malformed, reject_annotations},
    types::{parse_type, parse_variant},
};

pub(super) fn parse_statement(node: &Node) -> DiagnosticResult<Statement> {
    reject_annotations(node, "a top-level form")?;
    let mut form = Form::open(node, "a top-level form")?;

    match form.head() {
        "define" => parse_define(&mut form),
        "include" => parse_include(&mut form),
        "transform" => parse_transform(&mut form),
        other => Err(malformed(
            format!(
                "unknown top-level form `{}`; expected `define`, `include` or `transform`",
                other
            ),
            node,
        )),
    }
}

fn parse_define(form: &mut Form<'_>) -> DiagnosticResult<Statement> {
    let tag = form.next_name("domain name")?;
    let body = form.next_node("domain body")?;
    form.finish()?;

    reject_annotations(body, "a domain body")?;
    let mut body_form = Form::open(body, "`(domain ...)` or `(permute_domain ...)`")?;

    match body_form.head() {
        "domain" => parse_domain(tag, &mut body_form).map(Statement::Domain),
        "permute_domain" => parse_permutation(tag, &mut body_form).map(Statement::Permutation),
        other => Err(malformed(
            format!(
                "unknown domain form `{}`; expected `domain` or `permute_domain`",
                other
            ),
            body,
        )),
    }
}

fn parse_domain(tag: &str, form: &mut Form<'_>) -> DiagnosticResult<TypeDomain> {
    let mut domain = TypeDomain::new(tag).with_location(form.location().clone());
    let scope = format!("domain `{}`", tag);

    // Types and sum variants share one namespace.
    for node in form.rest() {
        let user_type = parse_type(node)?;
        for declared in user_type.declared_tags() {
            if let Some(owner) = declared_scope(&domain.user_types, declared, &scope) {
                return Err(Box::new(
                    Diagnostic::duplicate_type(declared, owner).with_location(node.location.clone()),
                ));
            }
        }
        domain.user_types.push(user_type);
    }
    Ok(domain)
}

fn parse_permutation(tag: &str, form: &mut Form<'_>) -> DiagnosticResult<Permutation> {
    let base = form.next_name("base domain name")?;
    let mut edits = Vec::new();

    for node in form.rest() {
        reject_annotations(node, "a permutation edit")?;
        let mut edit = Form::open(node, "`(exclude ...)`, `(include ...)` or `(with ...)`")?;
        match edit.head() {
            "exclude" => {
                for name in non_empty(&mut edit, "type name")? {
                    edits.push(EditDirective::ExcludeType {
                        tag: expect_name(name, "type name")?.to_string(),
                        location: name.location.clone(),
                    });
                }
            }
            "include" => {
                for type_node in non_empty(&mut edit, "type definition")? {
                    edits.push(EditDirective::IncludeType(parse_type(type_node)?));
                }
            }
            "with" => parse_with(&mut edit, &mut edits)?,
            other => {
                return Err(malformed(
                    format!(
                        "unknown permutation edit `{}`; expected `exclude`, `include` or `with`",
                        other
                    ),
                    node,
                ));
            }
        }
    }

    Ok(Permutation {
        tag: tag.to_string(),
        base: base.to_string(),
        edits,
        location: form.location().clone(),
    })
}

/// `(with <sum> (exclude <variant>...) (include <variant-form>...))`. The
/// sub-forms may repeat and are applied in the order written.
fn parse_with(form: &mut Form<'_>, edits: &mut Vec<EditDirective>) -> DiagnosticResult<()> {
    let sum = form.next_name("sum name")?;
    let sub_forms = form.rest();
    if sub_forms.is_empty() {
        return Err(malformed(
            format!("`(with {} ...)` needs an `exclude` or `include` form", sum),
            form.node(),
        ));
    }

    for node in sub_forms {
        reject_annotations(node, "a variant edit")?;
        let mut edit = Form::open(node, "`(exclude ...)` or `(include ...)`")?;
        match edit.head() {
            "exclude" => {
                for name in non_empty(&mut edit, "variant name")? {
                    edits.push(EditDirective::ExcludeVariant {
                        sum: sum.to_string(),
                        variant: expect_name(name, "variant name")?.to_string(),
                        location: name.location.clone(),
                    });
                }
            }
            "include" => {
                for variant_node in non_empty(&mut edit, "variant definition")? {
                    edits.push(EditDirective::IncludeVariant {
                        sum: sum.to_string(),
                        variant: parse_variant(variant_node, sum)?,
                    });
                }
            }
            other => {
                return Err(malformed(
                    format!(
                        "unknown variant edit `{}` in `(with {} ...)`; expected `exclude` or `include`",
                        other, sum
                    ),
                    node,
                ));
            }
        }
    }
    Ok(())
}

fn non_empty<'a>(form: &mut Form<'a>, what: &str) -> DiagnosticResult<&'a [Node]> {
    let items = form.rest();
    if items.is_empty() {
        return Err(malformed(
            format!("`({} ...)` needs at least one {}", form.head(), what),
            form.node(),
        ));
    }
    Ok(items)
}

fn parse_include(form: &mut Form<'_>) -> DiagnosticResult<Statement> {
    let path = form.next_string("include path")?;
    form.finish()?;

    if path.is_empty() {
        return Err(malformed("include path cannot be empty", form.node()));
    }
    Ok(Statement::Include(IncludeDirective {
        path: path.to_string(),
        location: form.location().clone(),
    }))
}

fn parse_transform(form: &mut Form<'_>) -> DiagnosticResult<Statement> {
    let from = form.next_name("source domain name")?;
    let to = form.next_name("target domain name")?;
    form.finish()?;

    Ok(Statement::Transform(Transform {
        from: from.to_string(),
        to: to.to_string(),
        location: Some(form.location().clone()),
    }))
}
