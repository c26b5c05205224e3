//! Type forms: `product`, `sum`, `enum`, `fixed`, `unit`, and tuple elements.

use std::collections::HashSet;

use crate::{
    diagnostics::{Diagnostic, DiagnosticResult},
    domain::{
        Annotations, Arity, EnumType, FixedType, NamedElement, ScalarType, Sum, Tuple,
        TypeAnnotation, TypeReference, UnitType, UserType,
    },
    syntax::node::Node,
};

use super::helpers::{Form, expect_name, malformed};

const TYPE_KEYWORDS: &str = "`product`, `sum`, `enum`, `fixed` or `unit`";

pub(super) fn parse_type(node: &Node) -> DiagnosticResult<UserType> {
    let annotations = parse_annotations(node)?;
    let mut form = Form::open(node, "a type definition")?;

    let user_type = match form.head() {
        "product" => UserType::Tuple(parse_product(&mut form, annotations, None)?),
        "sum" => UserType::Sum(parse_sum(&mut form, annotations)?),
        "enum" => UserType::Enum(parse_enum(&mut form, annotations)?),
        "fixed" => UserType::Fixed(parse_fixed(&mut form, annotations)?),
        "unit" => UserType::Unit(parse_unit(&mut form, annotations)?),
        other => {
            return Err(malformed(
                format!("unknown type form `{}`; expected {}", other, TYPE_KEYWORDS),
                node,
            ));
        }
    };
    Ok(user_type)
}

/// A sum variant: `(product tag elements...)` or the shorthand `(tag elements...)`.
/// Variants never inherit annotations from their sum.
pub(super) fn parse_variant(node: &Node, sum: &str) -> DiagnosticResult<Tuple> {
    let annotations = parse_annotations(node)?;
    let mut form = Form::open(node, "a variant definition")?;

    match form.head() {
        "product" => parse_product(&mut form, annotations, Some(sum)),
        keyword @ ("sum" | "enum" | "fixed" | "unit") => Err(malformed(
            format!(
                "`{}` cannot appear as a variant of sum `{}`; variants must be products",
                keyword, sum
            ),
            node,
        )),
        _ => {
            let tag = type_tag(form.head_node(), "variant name")?;
            build_tuple(tag, form.rest(), annotations, Some(sum), node)
        }
    }
}

fn next_type_tag<'a>(form: &mut Form<'a>) -> DiagnosticResult<&'a str> {
    let node = form.next_node("type name")?;
    type_tag(node, "type name")
}

/// Scalar names are reserved: an element naming one always means the scalar,
/// so a user type with that tag could never be referenced.
fn type_tag<'a>(node: &'a Node, what: &str) -> DiagnosticResult<&'a str> {
    let tag = expect_name(node, what)?;
    if let Some(scalar) = ScalarType::lookup(tag) {
        return Err(malformed(
            format!("{} `{}` is reserved for the scalar type `{}`", what, tag, scalar.name()),
            node,
        ));
    }
    Ok(tag)
}

fn parse_annotations(node: &Node) -> DiagnosticResult<Annotations> {
    let mut annotations = Annotations::new();
    for name in &node.annotations {
        let Some(annotation) = TypeAnnotation::lookup(name) else {
            return Err(malformed(
                format!(
                    "unknown annotation `{}`; expected `deprecated` or `experimental`",
                    name
                ),
                node,
            ));
        };
        annotations.insert(annotation);
    }
    Ok(annotations)
}

fn parse_product(
    form: &mut Form<'_>,
    annotations: Annotations,
    member_of: Option<&str>,
) -> DiagnosticResult<Tuple> {
    let tag = next_type_tag(form)?;
    let node = form.node();
    build_tuple(tag, form.rest(), annotations, member_of, node)
}

fn build_tuple(
    tag: &str,
    element_nodes: &[Node],
    annotations: Annotations,
    member_of: Option<&str>,
    node: &Node,
) -> DiagnosticResult<Tuple> {
    let elements = element_nodes
        .iter()
        .map(|element| parse_element(element, tag))
        .collect::<Result<Vec<_>, _>>()?;

    check_elements(tag, &elements, element_nodes)?;

    Ok(Tuple {
        tag: tag.to_string(),
        elements,
        annotations,
        member_of: member_of.map(str::to_string),
        location: Some(node.location.clone()),
    })
}

/// `tag::type` or `tag::identifier::type`, with an optional trailing `?`/`*`
/// on the type name.
fn parse_element(node: &Node, tuple: &str) -> DiagnosticResult<NamedElement> {
    let Some(type_text) = node.as_symbol() else {
        return Err(malformed(
            format!(
                "expected an element like `name::type` in `{}`, found {}",
                tuple,
                node.describe()
            ),
            node,
        ));
    };

    let (tag, identifier) = match node.annotations.as_slice() {
        [] => {
            return Err(malformed(
                format!(
                    "element `{}` in `{}` needs a tag, e.g. `name::{}`",
                    type_text, tuple, type_text
                ),
                node,
            ));
        }
        [tag] => (tag, tag),
        [tag, identifier] => (tag, identifier),
        _ => {
            return Err(malformed(
                format!(
                    "element `{}` in `{}` has too many annotations; expected `tag::type` or `tag::identifier::type`",
                    type_text, tuple
                ),
                node,
            ));
        }
    };

    if let Some(name) = [tag, identifier]
        .into_iter()
        .find(|name| name.contains(['?', '*']))
    {
        return Err(malformed(
            format!("element name `{}` in `{}` cannot carry an arity marker", name, tuple),
            node,
        ));
    }

    let (type_name, arity) = split_arity(type_text, node)?;

    Ok(
        NamedElement::new(tag.clone(), TypeReference::from_name(type_name, arity))
            .with_identifier(identifier.clone())
            .with_location(node.location.clone()),
    )
}

/// Strips the trailing arity marker from a type name.
fn split_arity<'a>(text: &'a str, node: &Node) -> DiagnosticResult<(&'a str, Arity)> {
    let base = text.trim_end_matches(['?', '*']);
    let markers = &text[base.len()..];

    if base.is_empty() || base.contains(['?', '*']) {
        return Err(malformed(
            format!("arity markers must trail the type name in `{}`", text),
            node,
        ));
    }

    let arity = match markers {
        "" => Arity::Required,
        "?" => Arity::Optional,
        "*" => Arity::Variadic,
        _ => {
            return Err(malformed(
                format!("type `{}` has more than one arity marker", text),
                node,
            ));
        }
    };
    Ok((base, arity))
}

fn check_elements(tag: &str, elements: &[NamedElement], nodes: &[Node]) -> DiagnosticResult<()> {
    let variadic: Vec<usize> = elements
        .iter()
        .enumerate()
        .filter(|(_, element)| element.type_ref.arity == Arity::Variadic)
        .map(|(index, _)| index)
        .collect();

    if let [_, second, ..] = variadic.as_slice() {
        return Err(malformed(
            format!(
                "`{}` has more than one variadic element (`{}`)",
                tag, elements[*second].tag
            ),
            &nodes[*second],
        ));
    }
    if let Some(&index) = variadic.first()
        && index + 1 != elements.len()
    {
        return Err(malformed(
            format!(
                "variadic element `{}` must be the last element of `{}`",
                elements[index].tag, tag
            ),
            &nodes[index],
        ));
    }

    let mut tags = HashSet::new();
    let mut identifiers = HashSet::new();
    for (element, node) in elements.iter().zip(nodes) {
        if !tags.insert(element.tag.as_str()) {
            return Err(malformed(
                format!("duplicate element tag `{}` in `{}`", element.tag, tag),
                node,
            ));
        }
        if !identifiers.insert(element.identifier.as_str()) {
            return Err(malformed(
                format!(
                    "duplicate element identifier `{}` in `{}`",
                    element.identifier, tag
                ),
                node,
            ));
        }
    }
    Ok(())
}

fn parse_sum(form: &mut Form<'_>, annotations: Annotations) -> DiagnosticResult<Sum> {
    let tag = next_type_tag(form)?;
    let mut sum = Sum {
        tag: tag.to_string(),
        variants: Vec::new(),
        annotations,
        location: Some(form.location().clone()),
    };

    for node in form.rest() {
        let variant = parse_variant(node, tag)?;
        if variant.tag == tag || sum.variant(&variant.tag).is_some() {
            return Err(Box::new(
                Diagnostic::duplicate_type(&variant.tag, format!("sum `{}`", tag))
                    .with_location(node.location.clone()),
            ));
        }
        sum.variants.push(variant);
    }
    Ok(sum)
}

fn parse_enum(form: &mut Form<'_>, annotations: Annotations) -> DiagnosticResult<EnumType> {
    let tag = next_type_tag(form)?;
    let location = form.location().clone();
    let value_nodes = form.rest();
    if value_nodes.is_empty() {
        return Err(Box::new(Diagnostic::malformed(
            format!("enum `{}` needs at least one value", tag),
            location,
        )));
    }

    let mut values: Vec<String> = Vec::with_capacity(value_nodes.len());
    for node in value_nodes {
        let value = expect_name(node, "enum value")?;
        if values.iter().any(|existing| existing == value) {
            return Err(malformed(
                format!("duplicate value `{}` in enum `{}`", value, tag),
                node,
            ));
        }
        values.push(value.to_string());
    }

    Ok(EnumType {
        tag: tag.to_string(),
        values,
        annotations,
        location: Some(location),
    })
}

fn parse_fixed(form: &mut Form<'_>, annotations: Annotations) -> DiagnosticResult<FixedType> {
    let tag = next_type_tag(form)?;
    let (size, size_node) = form.next_int("byte size")?;
    form.finish()?;

    let size = match u32::try_from(size) {
        Ok(size) if size > 0 => size,
        _ => {
            return Err(malformed(
                format!("fixed size of `{}` must be between 1 and {}, found {}", tag, u32::MAX, size),
                size_node,
            ));
        }
    };

    Ok(FixedType {
        tag: tag.to_string(),
        size,
        annotations,
        location: Some(form.location().clone()),
    })
}

fn parse_unit(form: &mut Form<'_>, annotations: Annotations) -> DiagnosticResult<UnitType> {
    let tag = next_type_tag(form)?;
    form.finish()?;

    Ok(UnitType {
        tag: tag.to_string(),
        annotations,
        location: Some(form.location().clone()),
    })
}
