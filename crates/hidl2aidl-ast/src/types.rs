//! Type nodes.

use std::fmt;
use std::str::FromStr;

use crate::arena::DeclId;

/// Built-in HIDL scalar and resource types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
    String,
    Handle,
    Memory,
    Pointer,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 15] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Int8,
        PrimitiveKind::Uint8,
        PrimitiveKind::Int16,
        PrimitiveKind::Uint16,
        PrimitiveKind::Int32,
        PrimitiveKind::Uint32,
        PrimitiveKind::Int64,
        PrimitiveKind::Uint64,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::String,
        PrimitiveKind::Handle,
        PrimitiveKind::Memory,
        PrimitiveKind::Pointer,
    ];

    /// The HIDL spelling of this type.
    pub fn hidl_name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Int8 => "int8_t",
            PrimitiveKind::Uint8 => "uint8_t",
            PrimitiveKind::Int16 => "int16_t",
            PrimitiveKind::Uint16 => "uint16_t",
            PrimitiveKind::Int32 => "int32_t",
            PrimitiveKind::Uint32 => "uint32_t",
            PrimitiveKind::Int64 => "int64_t",
            PrimitiveKind::Uint64 => "uint64_t",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::String => "string",
            PrimitiveKind::Handle => "handle",
            PrimitiveKind::Memory => "memory",
            PrimitiveKind::Pointer => "pointer",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hidl_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a HIDL primitive type")]
pub struct UnknownPrimitive(pub String);

impl FromStr for PrimitiveKind {
    type Err = UnknownPrimitive;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.hidl_name() == s)
            .ok_or_else(|| UnknownPrimitive(s.to_string()))
    }
}

/// A reference to a type: a primitive, a vector, or a named declaration.
///
/// Named types point into the owning `Ast` by handle; whether the
/// declaration is an interface or a compound type is answered by the arena.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    Vector(Box<TypeRef>),
    Named(DeclId),
}

impl TypeRef {
    pub fn vector(element: TypeRef) -> Self {
        TypeRef::Vector(Box::new(element))
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, TypeRef::Vector(_))
    }

    pub fn is_named_type(&self) -> bool {
        matches!(self, TypeRef::Named(_))
    }

    pub fn element(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Vector(element) => Some(element),
            _ => None,
        }
    }

    pub fn named(&self) -> Option<DeclId> {
        match self {
            TypeRef::Named(id) => Some(*id),
            _ => None,
        }
    }

    /// Every named declaration reachable from this node, through vectors.
    pub fn named_types(&self) -> Vec<DeclId> {
        let mut out = Vec::new();
        self.collect_named_types(&mut out);
        out
    }

    fn collect_named_types(&self, out: &mut Vec<DeclId>) {
        match self {
            TypeRef::Primitive(_) => {}
            TypeRef::Vector(element) => element.collect_named_types(out),
            TypeRef::Named(id) => out.push(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_names_parse_back() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(kind.hidl_name().parse::<PrimitiveKind>(), Ok(kind));
        }
        assert!("vec".parse::<PrimitiveKind>().is_err());
    }

    #[test]
    fn test_named_types_walk_vectors() {
        let ty = TypeRef::vector(TypeRef::vector(TypeRef::Named(DeclId(3))));
        assert!(ty.is_vector());
        assert!(!ty.is_named_type());
        assert_eq!(ty.named_types(), vec![DeclId(3)]);
        assert!(TypeRef::Primitive(PrimitiveKind::Int32).named_types().is_empty());
    }
}
