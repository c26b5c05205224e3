//! The type-domain model handed to code generators.
//!
//! All entities are built once by the parser or the permutation engine and are
//! read-only afterwards. Cross-type references are names, resolved by lookup
//! against the enclosing [`TypeDomain`].

mod type_domain;
mod type_reference;
mod user_type;

pub use type_domain::{Transform, TypeDomain, declared_scope, declaring_type};
pub use type_reference::{Arity, ScalarType, TypeReference, TypeTarget};
pub use user_type::{
    Annotations, EnumType, FixedType, NamedElement, Sum, Tuple, TypeAnnotation, UnitType,
    UserType,
};
