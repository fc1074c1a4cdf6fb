//! Declarations: interfaces, methods and compound types.

use crate::arena::DeclId;
use crate::doc_comment::DocComment;
use crate::fq_name::FqName;
use crate::types::TypeRef;

/// A named, typed argument or result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRef {
    pub name: String,
    pub ty: TypeRef,
}

impl NamedRef {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        NamedRef {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    args: Vec<NamedRef>,
    results: Vec<NamedRef>,
    oneway: bool,
    doc_comment: Option<DocComment>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Method {
            name: name.into(),
            args: Vec::new(),
            results: Vec::new(),
            oneway: false,
            doc_comment: None,
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.args.push(NamedRef::new(name, ty));
        self
    }

    pub fn with_result(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.results.push(NamedRef::new(name, ty));
        self
    }

    pub fn with_oneway(mut self, oneway: bool) -> Self {
        self.oneway = oneway;
        self
    }

    pub fn with_doc_comment(mut self, doc_comment: DocComment) -> Self {
        self.doc_comment = Some(doc_comment);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[NamedRef] {
        &self.args
    }

    pub fn results(&self) -> &[NamedRef] {
        &self.results
    }

    pub fn is_oneway(&self) -> bool {
        self.oneway
    }

    pub fn doc_comment(&self) -> Option<&DocComment> {
        self.doc_comment.as_ref()
    }

    /// Argument types followed by result types.
    pub fn references(&self) -> impl Iterator<Item = &TypeRef> {
        self.args.iter().chain(self.results.iter()).map(|r| &r.ty)
    }
}

/// An interface at one package version.
///
/// `super_type` is `None` only for the universal base interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub(crate) super_type: Option<DeclId>,
    pub(crate) methods: Vec<Method>,
}

impl Interface {
    pub fn super_type(&self) -> Option<DeclId> {
        self.super_type
    }

    /// Methods declared by this interface, excluding the base interface's
    /// lifecycle methods.
    pub fn user_defined_methods(&self) -> &[Method] {
        &self.methods
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
    pub doc_comment: Option<DocComment>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Field {
            name: name.into(),
            ty,
            doc_comment: None,
        }
    }

    pub fn with_doc_comment(mut self, doc_comment: DocComment) -> Self {
        self.doc_comment = Some(doc_comment);
        self
    }
}

/// Whether a compound holds all of its fields or exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompoundKind {
    #[default]
    Struct,
    Union,
}

/// A structured, non-interface type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompoundType {
    pub(crate) kind: CompoundKind,
    pub(crate) fields: Vec<Field>,
}

impl CompoundType {
    pub fn kind(&self) -> CompoundKind {
        self.kind
    }

    pub fn is_union(&self) -> bool {
        self.kind == CompoundKind::Union
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    Interface(Interface),
    Compound(CompoundType),
}

/// A named type declaration owned by the `Ast`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub(crate) fq_name: FqName,
    pub(crate) doc_comment: Option<DocComment>,
    pub(crate) kind: DeclKind,
    pub(crate) sub_types: Vec<DeclId>,
    pub(crate) parent: Option<DeclId>,
}

impl Declaration {
    pub fn fq_name(&self) -> &FqName {
        &self.fq_name
    }

    pub fn doc_comment(&self) -> Option<&DocComment> {
        self.doc_comment.as_ref()
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, DeclKind::Interface(_))
    }

    pub fn as_interface(&self) -> Option<&Interface> {
        match &self.kind {
            DeclKind::Interface(iface) => Some(iface),
            DeclKind::Compound(_) => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundType> {
        match &self.kind {
            DeclKind::Compound(compound) => Some(compound),
            DeclKind::Interface(_) => None,
        }
    }

    /// Nested type declarations, in declaration order.
    pub fn sub_types(&self) -> &[DeclId] {
        &self.sub_types
    }

    /// The enclosing declaration, for nested types.
    pub fn parent(&self) -> Option<DeclId> {
        self.parent
    }

    /// Types referenced directly by this declaration's own members.
    ///
    /// For an interface these are the types of its own methods only; the
    /// inherited method set is the translator's concern.
    pub fn references(&self) -> Vec<&TypeRef> {
        match &self.kind {
            DeclKind::Interface(iface) => iface
                .methods
                .iter()
                .flat_map(|method| method.references())
                .collect(),
            DeclKind::Compound(compound) => compound.fields.iter().map(|f| &f.ty).collect(),
        }
    }
}
