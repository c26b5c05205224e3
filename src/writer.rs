//! Renders concrete domains back to the DSL.
//!
//! Output reads back to structurally equal domains. Variants use the
//! shorthand `(tag elements...)` form unless their tag is a type keyword.

use std::borrow::Cow;

use crate::domain::{Annotations, NamedElement, Tuple, TypeDomain, UserType};

const INDENT: &str = "    ";
const TYPE_KEYWORDS: [&str; 5] = ["product", "sum", "enum", "fixed", "unit"];

pub fn write_domains(domains: &[TypeDomain]) -> String {
    let mut out = String::new();
    for (index, domain) in domains.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        write_domain(&mut out, domain);
    }
    out
}

pub fn write_domain(out: &mut String, domain: &TypeDomain) {
    out.push_str("(define ");
    out.push_str(&symbol(&domain.tag));
    out.push_str(" (domain");
    for user_type in &domain.user_types {
        out.push('\n');
        out.push_str(INDENT);
        write_user_type(out, user_type);
    }
    out.push_str("))\n");
}

fn write_user_type(out: &mut String, user_type: &UserType) {
    write_annotations(out, user_type.annotations());
    out.push('(');
    out.push_str(user_type.keyword());
    out.push(' ');
    out.push_str(&symbol(user_type.tag()));

    match user_type {
        UserType::Tuple(tuple) => write_elements(out, &tuple.elements),
        UserType::Sum(sum) => {
            for variant in &sum.variants {
                out.push('\n');
                out.push_str(&INDENT.repeat(2));
                write_variant(out, variant);
            }
        }
        UserType::Enum(enumeration) => {
            for value in &enumeration.values {
                out.push(' ');
                out.push_str(&symbol(value));
            }
        }
        UserType::Fixed(fixed) => {
            out.push(' ');
            out.push_str(&fixed.size.to_string());
        }
        UserType::Unit(_) => {}
    }
    out.push(')');
}

fn write_variant(out: &mut String, variant: &Tuple) {
    write_annotations(out, &variant.annotations);
    out.push('(');
    if TYPE_KEYWORDS.contains(&variant.tag.as_str()) {
        out.push_str("product ");
    }
    out.push_str(&symbol(&variant.tag));
    write_elements(out, &variant.elements);
    out.push(')');
}

fn write_elements(out: &mut String, elements: &[NamedElement]) {
    for element in elements {
        out.push(' ');
        out.push_str(&symbol(&element.tag));
        out.push_str("::");
        if element.identifier != element.tag {
            out.push_str(&symbol(&element.identifier));
            out.push_str("::");
        }
        out.push_str(&symbol(element.type_ref.type_name()));
        out.push_str(element.type_ref.arity.marker());
    }
}

fn write_annotations(out: &mut String, annotations: &Annotations) {
    for annotation in annotations {
        out.push_str(annotation.name());
        out.push_str("::");
    }
}

/// `text` as a bare symbol when it lexes as one, else single-quoted.
pub fn symbol(text: &str) -> Cow<'_, str> {
    if is_bare_symbol(text) {
        return Cow::Borrowed(text);
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        match ch {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            '\0' => quoted.push_str("\\0"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

fn is_bare_symbol(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '$' | '.'))
}

#[cfg(test)]
#[path = "writer_test.rs"]
mod writer_test;
