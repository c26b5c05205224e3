use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::diagnostics::SourceLocation;

use super::type_reference::TypeReference;

/// Structural marker attached to a type or variant definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeAnnotation {
    Deprecated,
    Experimental,
}

impl TypeAnnotation {
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "deprecated" => Some(TypeAnnotation::Deprecated),
            "experimental" => Some(TypeAnnotation::Experimental),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeAnnotation::Deprecated => "deprecated",
            TypeAnnotation::Experimental => "experimental",
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type Annotations = BTreeSet<TypeAnnotation>;

/// A field of a tuple.
#[derive(Debug, Clone, Serialize)]
pub struct NamedElement {
    /// Target-language-facing name.
    pub identifier: String,
    /// DSL-facing name.
    pub tag: String,
    pub type_ref: TypeReference,
    #[serde(skip)]
    pub location: Option<SourceLocation>,
}

impl NamedElement {
    pub fn new(tag: impl Into<String>, type_ref: TypeReference) -> Self {
        let tag = tag.into();
        Self {
            identifier: tag.clone(),
            tag,
            type_ref,
            location: None,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl PartialEq for NamedElement {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.tag == other.tag
            && self.type_ref == other.type_ref
    }
}

/// A record, either standalone or as the variant of a sum.
#[derive(Debug, Clone, Serialize)]
pub struct Tuple {
    pub tag: String,
    pub elements: Vec<NamedElement>,
    pub annotations: Annotations,
    /// Tag of the sum this tuple is a variant of.
    pub member_of: Option<String>,
    #[serde(skip)]
    pub location: Option<SourceLocation>,
}

impl Tuple {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            elements: Vec::new(),
            annotations: Annotations::new(),
            member_of: None,
            location: None,
        }
    }

    pub fn with_element(mut self, element: NamedElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn with_annotation(mut self, annotation: TypeAnnotation) -> Self {
        self.annotations.insert(annotation);
        self
    }

    pub fn member_of(mut self, sum: impl Into<String>) -> Self {
        self.member_of = Some(sum.into());
        self
    }

    pub fn element(&self, tag: &str) -> Option<&NamedElement> {
        self.elements.iter().find(|element| element.tag == tag)
    }

    fn eq_with_annotations(&self, other: &Self) -> bool {
        self == other && self.annotations == other.annotations
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.elements == other.elements && self.member_of == other.member_of
    }
}

/// A tagged union whose variants are tuples.
#[derive(Debug, Clone, Serialize)]
pub struct Sum {
    pub tag: String,
    pub variants: Vec<Tuple>,
    pub annotations: Annotations,
    #[serde(skip)]
    pub location: Option<SourceLocation>,
}

impl Sum {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            variants: Vec::new(),
            annotations: Annotations::new(),
            location: None,
        }
    }

    /// Appends a variant, recording this sum as its parent.
    pub fn with_variant(mut self, variant: Tuple) -> Self {
        let variant = variant.member_of(self.tag.clone());
        self.variants.push(variant);
        self
    }

    pub fn variant(&self, tag: &str) -> Option<&Tuple> {
        self.variants.iter().find(|variant| variant.tag == tag)
    }

    pub fn variant_tags(&self) -> Vec<&str> {
        self.variants.iter().map(|variant| variant.tag.as_str()).collect()
    }
}

impl PartialEq for Sum {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.variants == other.variants
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnumType {
    pub tag: String,
    pub values: Vec<String>,
    pub annotations: Annotations,
    #[serde(skip)]
    pub location: Option<SourceLocation>,
}

impl PartialEq for EnumType {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.values == other.values
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FixedType {
    pub tag: String,
    /// Size in bytes.
    pub size: u32,
    pub annotations: Annotations,
    #[serde(skip)]
    pub location: Option<SourceLocation>,
}

impl PartialEq for FixedType {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.size == other.size
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnitType {
    pub tag: String,
    pub annotations: Annotations,
    #[serde(skip)]
    pub location: Option<SourceLocation>,
}

impl PartialEq for UnitType {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

/// A user-defined type. Equality ignores source locations and annotations;
/// use [`UserType::eq_with_annotations`] to compare those too.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserType {
    Tuple(Tuple),
    Sum(Sum),
    Enum(EnumType),
    Fixed(FixedType),
    Unit(UnitType),
}

impl UserType {
    pub fn tag(&self) -> &str {
        match self {
            UserType::Tuple(tuple) => &tuple.tag,
            UserType::Sum(sum) => &sum.tag,
            UserType::Enum(enumeration) => &enumeration.tag,
            UserType::Fixed(fixed) => &fixed.tag,
            UserType::Unit(unit) => &unit.tag,
        }
    }

    pub fn annotations(&self) -> &Annotations {
        match self {
            UserType::Tuple(tuple) => &tuple.annotations,
            UserType::Sum(sum) => &sum.annotations,
            UserType::Enum(enumeration) => &enumeration.annotations,
            UserType::Fixed(fixed) => &fixed.annotations,
            UserType::Unit(unit) => &unit.annotations,
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            UserType::Tuple(tuple) => tuple.location.as_ref(),
            UserType::Sum(sum) => sum.location.as_ref(),
            UserType::Enum(enumeration) => enumeration.location.as_ref(),
            UserType::Fixed(fixed) => fixed.location.as_ref(),
            UserType::Unit(unit) => unit.location.as_ref(),
        }
    }

    /// Tags this type adds to its domain: its own, then its variants'.
    pub fn declared_tags(&self) -> impl Iterator<Item = &str> {
        let variants = self.as_sum().map_or(&[][..], |sum| sum.variants.as_slice());
        std::iter::once(self.tag()).chain(variants.iter().map(|variant| variant.tag.as_str()))
    }

    /// The DSL keyword that introduces this kind of type.
    pub fn keyword(&self) -> &'static str {
        match self {
            UserType::Tuple(_) => "product",
            UserType::Sum(_) => "sum",
            UserType::Enum(_) => "enum",
            UserType::Fixed(_) => "fixed",
            UserType::Unit(_) => "unit",
        }
    }

    pub fn as_sum(&self) -> Option<&Sum> {
        match self {
            UserType::Sum(sum) => Some(sum),
            _ => None,
        }
    }

    pub fn as_sum_mut(&mut self) -> Option<&mut Sum> {
        match self {
            UserType::Sum(sum) => Some(sum),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            UserType::Tuple(tuple) => Some(tuple),
            _ => None,
        }
    }

    pub fn eq_with_annotations(&self, other: &Self) -> bool {
        if self != other || self.annotations() != other.annotations() {
            return false;
        }
        match (self, other) {
            (UserType::Sum(left), UserType::Sum(right)) => left
                .variants
                .iter()
                .zip(&right.variants)
                .all(|(l, r)| l.eq_with_annotations(r)),
            _ => true,
        }
    }
}
