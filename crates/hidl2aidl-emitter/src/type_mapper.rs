//! Type Mapper - Convert HIDL type nodes to AIDL syntax.
//!
//! Vectors always render as arrays: AIDL's `List<T>` is not usable from
//! every backend. Named types render fully qualified.

use hidl2aidl_ast::{Ast, PrimitiveKind, TypeRef};

use crate::names::aidl_fq_name;

/// The AIDL spelling of a HIDL primitive, if it has one.
pub fn primitive_name(kind: PrimitiveKind) -> Option<&'static str> {
    let name = match kind {
        PrimitiveKind::Bool => "boolean",
        PrimitiveKind::Int8 | PrimitiveKind::Uint8 => "byte",
        PrimitiveKind::Int16 | PrimitiveKind::Uint16 => "char",
        PrimitiveKind::Int32 | PrimitiveKind::Uint32 => "int",
        PrimitiveKind::Int64 | PrimitiveKind::Uint64 => "long",
        PrimitiveKind::Float => "float",
        PrimitiveKind::Double => "double",
        PrimitiveKind::String => "String",
        PrimitiveKind::Handle => "android.hardware.common.NativeHandle",
        PrimitiveKind::Memory => "android.hardware.common.Ashmem",
        PrimitiveKind::Pointer => return None,
    };
    Some(name)
}

/// Prints types as AIDL syntax.
///
/// # Examples
///
/// ```
/// # use hidl2aidl_ast::{Ast, PrimitiveKind, TypeRef};
/// # use hidl2aidl_emitter::TypeMapper;
/// let ast = Ast::new();
/// let mapper = TypeMapper::new(&ast);
/// let ty = TypeRef::vector(TypeRef::Primitive(PrimitiveKind::Int32));
/// assert_eq!(mapper.map_type(&ty), "int[]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    ast: &'a Ast,
}

impl<'a> TypeMapper<'a> {
    pub fn new(ast: &'a Ast) -> Self {
        TypeMapper { ast }
    }

    /// # Panics
    ///
    /// Panics on a primitive with no AIDL counterpart: the mapping table is
    /// incomplete, which is a defect in the translator rather than the input.
    pub fn map_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(kind) => match primitive_name(*kind) {
                Some(name) => name.to_string(),
                None => panic!("no AIDL mapping for HIDL primitive type `{kind}`"),
            },
            TypeRef::Vector(element) => format!("{}[]", self.map_type(element)),
            TypeRef::Named(id) => aidl_fq_name(self.ast.get(*id).fq_name()),
        }
    }
}
