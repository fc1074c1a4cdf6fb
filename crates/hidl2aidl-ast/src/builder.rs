//! Incremental construction of an `Ast`.
//!
//! Declarations are declared first and filled in afterwards, so methods and
//! fields can refer to types declared later in the same package.

use crate::arena::{Ast, DeclId};
use crate::decl::{CompoundKind, CompoundType, DeclKind, Declaration, Field, Interface, Method};
use crate::doc_comment::DocComment;
use crate::fq_name::FqName;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("{0} is declared more than once")]
    Duplicate(FqName),
    #[error("{0} is not a type name")]
    NotATypeName(FqName),
    #[error("{child} is not nested directly inside {parent}")]
    NotNested { child: FqName, parent: FqName },
    #[error("{0} is not an interface")]
    NotAnInterface(FqName),
    #[error("{0} is not a compound type")]
    NotACompound(FqName),
    #[error("{0} cannot extend itself")]
    SelfInheritance(FqName),
    #[error("inheritance cycle through {0}")]
    InheritanceCycle(FqName),
}

pub struct AstBuilder {
    ast: Ast,
}

impl AstBuilder {
    pub fn new() -> Self {
        AstBuilder { ast: Ast::new() }
    }

    pub fn base(&self) -> DeclId {
        self.ast.base()
    }

    pub fn lookup(&self, fq_name: &FqName) -> Option<DeclId> {
        self.ast.lookup(fq_name)
    }

    pub fn fq_name(&self, id: DeclId) -> &FqName {
        self.ast.get(id).fq_name()
    }

    /// Declare an interface extending the base interface until
    /// `set_super_type` says otherwise.
    pub fn declare_interface(
        &mut self,
        fq_name: FqName,
        parent: Option<DeclId>,
    ) -> Result<DeclId, BuildError> {
        let base = self.ast.base();
        self.declare(
            fq_name,
            parent,
            DeclKind::Interface(Interface {
                super_type: Some(base),
                methods: Vec::new(),
            }),
        )
    }

    pub fn declare_compound(
        &mut self,
        fq_name: FqName,
        parent: Option<DeclId>,
    ) -> Result<DeclId, BuildError> {
        self.declare(fq_name, parent, DeclKind::Compound(CompoundType::default()))
    }

    /// Declare a compound of which exactly one field is set at a time.
    pub fn declare_union(
        &mut self,
        fq_name: FqName,
        parent: Option<DeclId>,
    ) -> Result<DeclId, BuildError> {
        let compound = CompoundType {
            kind: CompoundKind::Union,
            fields: Vec::new(),
        };
        self.declare(fq_name, parent, DeclKind::Compound(compound))
    }

    fn declare(
        &mut self,
        fq_name: FqName,
        parent: Option<DeclId>,
        kind: DeclKind,
    ) -> Result<DeclId, BuildError> {
        if !fq_name.is_fully_qualified() {
            return Err(BuildError::NotATypeName(fq_name));
        }
        if self.ast.lookup(&fq_name).is_some() {
            return Err(BuildError::Duplicate(fq_name));
        }
        match parent {
            Some(parent_id) => {
                let parent_name = self.ast.get(parent_id).fq_name();
                if fq_name.parent().as_ref() != Some(parent_name) {
                    return Err(BuildError::NotNested {
                        child: fq_name,
                        parent: parent_name.clone(),
                    });
                }
            }
            None if fq_name.names().len() != 1 => {
                let parent = fq_name.parent().unwrap_or_else(|| fq_name.clone());
                return Err(BuildError::NotNested {
                    child: fq_name,
                    parent,
                });
            }
            None => {}
        }

        let id = self.ast.push(Declaration {
            fq_name,
            doc_comment: None,
            kind,
            sub_types: Vec::new(),
            parent,
        });
        if let Some(parent_id) = parent {
            self.ast.get_mut(parent_id).sub_types.push(id);
        }
        Ok(id)
    }

    pub fn set_doc_comment(&mut self, id: DeclId, doc_comment: DocComment) {
        self.ast.get_mut(id).doc_comment = Some(doc_comment);
    }

    pub fn set_super_type(&mut self, id: DeclId, super_type: DeclId) -> Result<(), BuildError> {
        if id == super_type {
            return Err(BuildError::SelfInheritance(self.fq_name(id).clone()));
        }
        if !self.ast.get(super_type).is_interface() {
            return Err(BuildError::NotAnInterface(self.fq_name(super_type).clone()));
        }
        let iface = self.interface_mut(id)?;
        iface.super_type = Some(super_type);
        Ok(())
    }

    pub fn add_method(&mut self, id: DeclId, method: Method) -> Result<(), BuildError> {
        self.interface_mut(id)?.methods.push(method);
        Ok(())
    }

    pub fn add_field(&mut self, id: DeclId, field: Field) -> Result<(), BuildError> {
        let decl = self.ast.get_mut(id);
        match &mut decl.kind {
            DeclKind::Compound(compound) => {
                compound.fields.push(field);
                Ok(())
            }
            DeclKind::Interface(_) => Err(BuildError::NotACompound(decl.fq_name.clone())),
        }
    }

    fn interface_mut(&mut self, id: DeclId) -> Result<&mut Interface, BuildError> {
        let base = self.ast.base();
        let decl = self.ast.get_mut(id);
        match &mut decl.kind {
            DeclKind::Interface(iface) if id != base => Ok(iface),
            _ => Err(BuildError::NotAnInterface(decl.fq_name.clone())),
        }
    }

    /// Validate the inheritance graph and hand out the finished model.
    pub fn finish(self) -> Result<Ast, BuildError> {
        if let Some(id) = self.ast.find_inheritance_cycle() {
            return Err(BuildError::InheritanceCycle(self.fq_name(id).clone()));
        }
        Ok(self.ast)
    }
}

impl Default for AstBuilder {
    fn default() -> Self {
        AstBuilder::new()
    }
}
