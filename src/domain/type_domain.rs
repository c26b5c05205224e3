use serde::Serialize;

use crate::diagnostics::SourceLocation;

use super::user_type::{Tuple, UserType};

/// A named, ordered collection of user types forming one version of a schema.
///
/// Order is significant: it drives generation order and the replay order of
/// permutation edits. Equality compares the tag and the ordered types only.
#[derive(Debug, Clone, Serialize)]
pub struct TypeDomain {
    pub tag: String,
    pub user_types: Vec<UserType>,
    #[serde(skip)]
    pub location: Option<SourceLocation>,
}

impl TypeDomain {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            user_types: Vec::new(),
            location: None,
        }
    }

    pub fn with_type(mut self, user_type: UserType) -> Self {
        self.user_types.push(user_type);
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn user_type(&self, tag: &str) -> Option<&UserType> {
        self.user_types.iter().find(|user_type| user_type.tag() == tag)
    }

    pub fn position(&self, tag: &str) -> Option<usize> {
        self.user_types
            .iter()
            .position(|user_type| user_type.tag() == tag)
    }

    pub fn type_tags(&self) -> Vec<&str> {
        self.user_types.iter().map(UserType::tag).collect()
    }

    /// Every tuple in the domain: standalone products and sum variants.
    pub fn tuples(&self) -> impl Iterator<Item = &Tuple> {
        self.user_types.iter().flat_map(|user_type| {
            let (standalone, variants): (Option<&Tuple>, &[Tuple]) = match user_type {
                UserType::Tuple(tuple) => (Some(tuple), &[]),
                UserType::Sum(sum) => (None, &sum.variants),
                _ => (None, &[]),
            };
            standalone.into_iter().chain(variants)
        })
    }

    /// Whether `name` can be the target of a named type reference: a
    /// top-level type or a sum variant.
    pub fn resolves(&self, name: &str) -> bool {
        declaring_type(&self.user_types, name).is_some()
    }

    pub fn eq_with_annotations(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.user_types.len() == other.user_types.len()
            && self
                .user_types
                .iter()
                .zip(&other.user_types)
                .all(|(left, right)| left.eq_with_annotations(right))
    }
}

/// The type that puts `tag` into the domain namespace: the type with that tag,
/// or the sum holding a variant with that tag.
pub fn declaring_type<'a>(user_types: &'a [UserType], tag: &str) -> Option<&'a UserType> {
    user_types
        .iter()
        .find(|user_type| user_type.declared_tags().any(|declared| declared == tag))
}

/// Where `tag` is already declared, phrased for a duplicate-type error:
/// `domain_scope` for a top-level type, the sum for a variant.
pub fn declared_scope(user_types: &[UserType], tag: &str, domain_scope: &str) -> Option<String> {
    declaring_type(user_types, tag).map(|owner| match owner {
        UserType::Sum(sum) if sum.tag != tag => format!("sum `{}`", sum.tag),
        _ => domain_scope.to_string(),
    })
}

impl PartialEq for TypeDomain {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.user_types == other.user_types
    }
}

/// Declares that a migration exists from one domain to another. Carried
/// through to backends unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct Transform {
    pub from: String,
    pub to: String,
    #[serde(skip)]
    pub location: Option<SourceLocation>,
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}
