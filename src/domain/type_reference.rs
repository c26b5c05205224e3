use std::fmt;

use serde::Serialize;

/// Primitive types understood by every backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    Bool,
    Int32,
    Int64,
    Float,
    Decimal,
    String,
    Bytes,
    /// Untyped payload passed through as-is.
    Any,
}

impl ScalarType {
    pub fn lookup(name: &str) -> Option<Self> {
        let scalar = match name {
            "bool" => ScalarType::Bool,
            "int32" => ScalarType::Int32,
            "int" | "int64" => ScalarType::Int64,
            "float" => ScalarType::Float,
            "decimal" => ScalarType::Decimal,
            "string" => ScalarType::String,
            "bytes" | "blob" => ScalarType::Bytes,
            "any" | "ion" => ScalarType::Any,
            _ => return None,
        };
        Some(scalar)
    }

    /// Canonical DSL spelling.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::Float => "float",
            ScalarType::Decimal => "decimal",
            ScalarType::String => "string",
            ScalarType::Bytes => "bytes",
            ScalarType::Any => "any",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    #[default]
    Required,
    Optional,
    /// Zero or more.
    Variadic,
}

impl Arity {
    pub fn marker(self) -> &'static str {
        match self {
            Arity::Required => "",
            Arity::Optional => "?",
            Arity::Variadic => "*",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum TypeTarget {
    Scalar(ScalarType),
    /// Resolved by tag lookup in the enclosing domain.
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeReference {
    pub target: TypeTarget,
    pub arity: Arity,
}

impl TypeReference {
    pub fn new(target: TypeTarget, arity: Arity) -> Self {
        Self { target, arity }
    }

    pub fn scalar(scalar: ScalarType) -> Self {
        Self::new(TypeTarget::Scalar(scalar), Arity::Required)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(TypeTarget::Named(name.into()), Arity::Required)
    }

    pub fn with_arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// Classifies a marker-stripped type name.
    pub fn from_name(name: &str, arity: Arity) -> Self {
        let target = match ScalarType::lookup(name) {
            Some(scalar) => TypeTarget::Scalar(scalar),
            None => TypeTarget::Named(name.to_string()),
        };
        Self::new(target, arity)
    }

    pub fn type_name(&self) -> &str {
        match &self.target {
            TypeTarget::Scalar(scalar) => scalar.name(),
            TypeTarget::Named(name) => name,
        }
    }

    pub fn referenced_name(&self) -> Option<&str> {
        match &self.target {
            TypeTarget::Named(name) => Some(name),
            TypeTarget::Scalar(_) => None,
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.type_name(), self.arity.marker())
    }
}
