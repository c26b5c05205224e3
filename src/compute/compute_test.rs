use super::*;
use crate::{
    diagnostics::ErrorKind,
    domain::{NamedElement, ScalarType, Sum, Tuple, TypeReference, UserType},
    syntax::parse_source,
};

fn compute(source: &str) -> DiagnosticResult<TypeUniverse> {
    compute_with(source, &CompileOptions::default())
}

fn compute_with(source: &str, options: &CompileOptions) -> DiagnosticResult<TypeUniverse> {
    compute_universe(parse_source(source, "test.ion")?, options)
}

fn tags<'a>(universe: &'a TypeUniverse, domain: &str) -> Vec<&'a str> {
    universe
        .domain(domain)
        .map(TypeDomain::type_tags)
        .unwrap_or_default()
}

fn error_kind(source: &str) -> ErrorKind {
    match compute(source) {
        Ok(universe) => panic!("expected an error, got {:?}", universe),
        Err(diagnostic) => diagnostic.kind().clone(),
    }
}

const THING: &str = "(define thing (domain (unit a) (unit b) (unit c)))";

#[test]
fn exclude_then_include() {
    let source = format!(
        "{} (define next (permute_domain thing (exclude a) (include (unit d) (unit e))))",
        THING
    );
    let universe = compute(&source).map_err(|d| d.to_string());
    assert_eq!(
        universe.as_ref().map(|u| tags(u, "next")),
        Ok(vec!["b", "c", "d", "e"])
    );
}

#[test]
fn reincluded_type_moves_to_the_end() {
    let source = format!(
        "{} (define next (permute_domain thing (exclude a) (include (unit x)) (include (product a v::int))))",
        THING
    );
    let universe = compute(&source).map_err(|d| d.to_string());
    assert_eq!(
        universe.as_ref().map(|u| tags(u, "next")),
        Ok(vec!["b", "c", "x", "a"])
    );
    let replaced = universe
        .ok()
        .and_then(|u| u.domain("next").and_then(|d| d.user_type("a")).cloned());
    assert!(matches!(replaced, Some(UserType::Tuple(_))));
}

#[test]
fn base_domain_is_left_untouched() {
    let source = format!("{} (define next (permute_domain thing (exclude b)))", THING);
    let universe = compute(&source).map_err(|d| d.to_string());
    assert_eq!(
        universe.as_ref().map(|u| (tags(u, "thing"), tags(u, "next"))),
        Ok((vec!["a", "b", "c"], vec!["a", "c"]))
    );
}

#[test]
fn permutations_chain_in_declaration_order() {
    let source = format!(
        "{} (define v2 (permute_domain thing (exclude a))) (define v3 (permute_domain v2 (exclude b)))",
        THING
    );
    let universe = compute(&source).map_err(|d| d.to_string());
    assert_eq!(
        universe.as_ref().map(|u| {
            u.domains()
                .iter()
                .map(|d| d.tag.as_str())
                .collect::<Vec<_>>()
        }),
        Ok(vec!["thing", "v2", "v3"])
    );
    assert_eq!(universe.as_ref().map(|u| tags(u, "v3")), Ok(vec!["c"]));
}

#[test]
fn including_a_present_tag_is_a_duplicate() {
    let source = format!("{} (define next (permute_domain thing (include (unit b))))", THING);
    assert!(matches!(
        error_kind(&source),
        ErrorKind::DuplicateType { tag, scope } if tag == "b" && scope == "domain `next`"
    ));
}

#[test]
fn excluding_a_missing_tag_is_unknown() {
    let source = format!("{} (define next (permute_domain thing (exclude zzz)))", THING);
    assert!(matches!(
        error_kind(&source),
        ErrorKind::UnknownType { tag, .. } if tag == "zzz"
    ));
}

#[test]
fn unknown_base_domain() {
    let diagnostic = compute("(define next (permute_domain nonexistent (exclude a)))")
        .err()
        .map(|d| d.to_string());
    assert_eq!(
        diagnostic.as_deref(),
        Some("test.ion:1:14: unknown domain `nonexistent`")
    );
}

#[test]
fn permutation_cannot_see_later_domains() {
    let source = format!("(define next (permute_domain thing)) {}", THING);
    assert!(matches!(
        error_kind(&source),
        ErrorKind::UnknownDomain { tag } if tag == "thing"
    ));
}

#[test]
fn variant_edits() {
    let source = "
        (define v1 (domain (sum shape (circle r::float) (square s::float))))
        (define v2 (permute_domain v1
            (with shape (exclude circle) (include (triangle a::float) (product circle d::float)))))
    ";
    let universe = compute(source).map_err(|d| d.to_string());
    let shape = universe
        .as_ref()
        .ok()
        .and_then(|u| u.domain("v2"))
        .and_then(|d| d.user_type("shape"))
        .and_then(UserType::as_sum)
        .cloned();
    let expected = Sum::new("shape")
        .with_variant(Tuple::new("square").with_element(float_element("s")))
        .with_variant(Tuple::new("triangle").with_element(float_element("a")))
        .with_variant(Tuple::new("circle").with_element(float_element("d")));
    assert_eq!(shape, Some(expected));

    let original = universe
        .ok()
        .and_then(|u| u.domain("v1").and_then(|d| d.user_type("shape")).cloned())
        .and_then(|t| t.as_sum().map(|sum| sum.variant_tags().len()));
    assert_eq!(original, Some(2));
}

fn float_element(tag: &str) -> NamedElement {
    NamedElement::new(tag, TypeReference::scalar(ScalarType::Float))
}

#[test]
fn variant_edit_errors() {
    let base = "(define v1 (domain (sum s (a)) (enum e x)))";
    let cases = [
        ("(with s (exclude b))", "unknown type `b` in sum `s`"),
        ("(with s (include (a)))", "duplicate type `a` in sum `s`"),
        ("(with missing (exclude a))", "unknown type `missing` in domain `v2`"),
        ("(with e (exclude x))", "unknown type `e` in domain `v2`"),
    ];
    for (edit, expected) in cases {
        let source = format!("{} (define v2 (permute_domain v1 {}))", base, edit);
        let message = compute(&source).err().map(|d| d.message());
        assert_eq!(message.as_deref(), Some(expected), "edit {}", edit);
    }
}

#[test]
fn with_on_a_non_sum_explains_why() {
    let source = "(define v1 (domain (enum e x))) (define v2 (permute_domain v1 (with e (exclude x))))";
    let hints = compute(source).err().map(|d| d.hints().to_vec());
    assert!(
        hints
            .unwrap_or_default()
            .iter()
            .any(|hint| hint == "`e` is a `enum`, not a `sum`.")
    );
}

#[test]
fn duplicate_domain_tags() {
    let source = "(define d (domain)) (define d (domain))";
    assert!(matches!(
        error_kind(source),
        ErrorKind::MalformedDefinition { reason } if reason.contains("more than once")
    ));
}

#[test]
fn transforms_pass_through_and_are_checked() {
    let universe = compute("(transform v1 v2) (define v1 (domain)) (define v2 (domain))")
        .map_err(|d| d.to_string());
    assert_eq!(universe.map(|u| u.transforms().len()), Ok(1));

    assert!(matches!(
        error_kind("(define v1 (domain)) (transform v1 nope)"),
        ErrorKind::UnknownDomain { tag } if tag == "nope"
    ));
}

#[test]
fn dangling_references() {
    let source = "(define d (domain\n  (product p child::missing)))";
    let diagnostic = compute(source).err();
    assert_eq!(
        diagnostic.as_ref().map(|d| d.to_string()),
        Some("test.ion:2:14: unknown type `missing` in domain `d`".to_string())
    );

    let relaxed = CompileOptions::default().check_references(false);
    assert!(compute_with(source, &relaxed).is_ok());
}

#[test]
fn references_may_name_variants_and_later_types() {
    let source = "(define d (domain (product p s::circle l::later*) (sum shape (circle)) (unit later)))";
    assert!(compute(source).is_ok());
}

#[test]
fn excluding_a_referenced_type_is_caught() {
    let source = "(define v1 (domain (unit leaf) (product node l::leaf))) (define v2 (permute_domain v1 (exclude leaf)))";
    assert!(matches!(
        error_kind(source),
        ErrorKind::UnknownType { tag, scope } if tag == "leaf" && scope == "domain `v2`"
    ));
}

#[test]
fn permutations_keep_types_and_variants_apart() {
    let base = "(define v1 (domain (product p) (sum s (a)) (sum t (b))))";
    let cases = [
        ("(include (product a))", "duplicate type `a` in sum `s`"),
        ("(include (sum u (p)))", "duplicate type `p` in domain `v2`"),
        ("(with t (include (a)))", "duplicate type `a` in sum `s`"),
        ("(with t (include (p)))", "duplicate type `p` in domain `v2`"),
        ("(with t (include (t)))", "duplicate type `t` in domain `v2`"),
    ];
    for (edit, expected) in cases {
        let source = format!("{} (define v2 (permute_domain v1 {}))", base, edit);
        let message = compute(&source).err().map(|d| d.message());
        assert_eq!(message.as_deref(), Some(expected), "edit {}", edit);
    }
}

#[test]
fn freed_variant_tags_can_be_reused() {
    let source = "(define v1 (domain (sum s (a) (b)))) \
                  (define v2 (permute_domain v1 (with s (exclude a)) (include (product a x::b))))";
    let universe = compute(source).map_err(|d| d.to_string());
    assert_eq!(universe.as_ref().map(|u| tags(u, "v2")), Ok(vec!["s", "a"]));
}
