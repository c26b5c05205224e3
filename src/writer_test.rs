use super::*;
use crate::domain::{
    Arity, EnumType, FixedType, NamedElement, ScalarType, Sum, Tuple, TypeAnnotation,
    TypeReference, UnitType,
};
use crate::syntax::{Statement, parse_source};

fn reparse(text: &str) -> Vec<TypeDomain> {
    match parse_source(text, "written.ion") {
        Ok(statements) => statements
            .into_iter()
            .filter_map(|statement| match statement {
                Statement::Domain(domain) => Some(domain),
                _ => None,
            })
            .collect(),
        Err(diagnostic) => panic!("written text does not parse: {}\n{}", diagnostic, text),
    }
}

#[test]
fn bare_and_quoted_symbols() {
    assert_eq!(symbol("point"), "point");
    assert_eq!(symbol("$v1.x_2"), "$v1.x_2");
    assert_eq!(symbol("two words"), "'two words'");
    assert_eq!(symbol("1st"), "'1st'");
    assert_eq!(symbol("it's"), "'it\\'s'");
    assert_eq!(symbol(""), "''");
}

#[test]
fn writes_explicit_identifiers_and_markers() {
    let tuple = Tuple::new("p")
        .with_element(NamedElement::new("a", TypeReference::scalar(ScalarType::Int64)))
        .with_element(
            NamedElement::new("b", TypeReference::named("q").with_arity(Arity::Optional))
                .with_identifier("B"),
        );
    let domain = TypeDomain::new("d").with_type(UserType::Tuple(tuple));
    assert_eq!(
        write_domains(&[domain]),
        "(define d (domain\n    (product p a::int64 b::B::q?)))\n"
    );
}

#[test]
fn keyword_variants_use_the_product_form() {
    let sum = Sum::new("s").with_variant(Tuple::new("unit"));
    let domain = TypeDomain::new("d").with_type(UserType::Sum(sum));
    let text = write_domains(std::slice::from_ref(&domain));
    assert!(text.contains("(product unit)"), "{}", text);
    assert_eq!(reparse(&text), vec![domain]);
}

#[test]
fn every_kind_round_trips_with_annotations() {
    let domain = TypeDomain::new("all kinds")
        .with_type(UserType::Tuple(
            Tuple::new("odd tuple")
                .with_annotation(TypeAnnotation::Experimental)
                .with_element(NamedElement::new(
                    "xs",
                    TypeReference::named("odd tuple").with_arity(Arity::Variadic),
                )),
        ))
        .with_type(UserType::Sum(
            Sum {
                annotations: [TypeAnnotation::Deprecated].into_iter().collect(),
                ..Sum::new("shape")
            }
            .with_variant(Tuple::new("circle").with_annotation(TypeAnnotation::Deprecated))
            .with_variant(Tuple::new("dot")),
        ))
        .with_type(UserType::Enum(EnumType {
            tag: "color".to_string(),
            values: vec!["red".to_string(), "dark blue".to_string()],
            annotations: Annotations::new(),
            location: None,
        }))
        .with_type(UserType::Fixed(FixedType {
            tag: "digest".to_string(),
            size: 32,
            annotations: Annotations::new(),
            location: None,
        }))
        .with_type(UserType::Unit(UnitType {
            tag: "nothing".to_string(),
            annotations: [TypeAnnotation::Deprecated, TypeAnnotation::Experimental]
                .into_iter()
                .collect(),
            location: None,
        }));

    let text = write_domains(std::slice::from_ref(&domain));
    let reread = reparse(&text);
    assert_eq!(reread.len(), 1);
    assert!(reread[0].eq_with_annotations(&domain), "{}", text);
}

#[test]
fn empty_domain() {
    let text = write_domains(&[TypeDomain::new("empty")]);
    assert_eq!(text, "(define empty (domain))\n");
    assert_eq!(reparse(&text), vec![TypeDomain::new("empty")]);
}
