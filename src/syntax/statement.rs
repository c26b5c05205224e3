use std::fmt;

use crate::{
    diagnostics::SourceLocation,
    domain::{Transform, Tuple, TypeDomain, UserType},
};

/// A derived domain, not yet computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Permutation {
    pub tag: String,
    pub base: String,
    pub edits: Vec<EditDirective>,
    pub location: SourceLocation,
}

/// One structural edit inside a `permute_domain` form. Applied in order.
#[derive(Debug, Clone, PartialEq)]
pub enum EditDirective {
    ExcludeType {
        tag: String,
        location: SourceLocation,
    },
    IncludeType(UserType),
    ExcludeVariant {
        sum: String,
        variant: String,
        location: SourceLocation,
    },
    IncludeVariant {
        sum: String,
        variant: Tuple,
    },
}

impl EditDirective {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            EditDirective::ExcludeType { location, .. }
            | EditDirective::ExcludeVariant { location, .. } => Some(location),
            EditDirective::IncludeType(user_type) => user_type.location(),
            EditDirective::IncludeVariant { variant, .. } => variant.location.as_ref(),
        }
    }
}

impl fmt::Display for EditDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditDirective::ExcludeType { tag, .. } => write!(f, "exclude {}", tag),
            EditDirective::IncludeType(user_type) => write!(f, "include {}", user_type.tag()),
            EditDirective::ExcludeVariant { sum, variant, .. } => {
                write!(f, "exclude {}.{}", sum, variant)
            }
            EditDirective::IncludeVariant { sum, variant } => {
                write!(f, "include {}.{}", sum, variant.tag)
            }
        }
    }
}

/// A reference to another source file, consumed by the include resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    pub path: String,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Domain(TypeDomain),
    Permutation(Permutation),
    Transform(Transform),
    Include(IncludeDirective),
}

impl Statement {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Statement::Domain(domain) => domain.location.as_ref(),
            Statement::Permutation(permutation) => Some(&permutation.location),
            Statement::Transform(transform) => transform.location.as_ref(),
            Statement::Include(include) => Some(&include.location),
        }
    }

    /// The tag a statement defines, if it defines a domain.
    pub fn defined_tag(&self) -> Option<&str> {
        match self {
            Statement::Domain(domain) => Some(&domain.tag),
            Statement::Permutation(permutation) => Some(&permutation.tag),
            _ => None,
        }
    }
}
