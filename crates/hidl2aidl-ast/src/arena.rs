//! Declaration arena.
//!
//! Every declaration lives in one `Vec` and is referred to by `DeclId`.
//! Inheritance and nesting are handles into the same arena, so the model has
//! no cyclic ownership and can be shared across threads without locking.

use rustc_hash::FxHashMap;

use crate::decl::{DeclKind, Declaration, Interface};
use crate::fq_name::FqName;

/// Handle to a declaration in an `Ast`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub(crate) u32);

impl DeclId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct Ast {
    decls: Vec<Declaration>,
    by_name: FxHashMap<FqName, DeclId>,
}

impl Ast {
    /// The base interface is always the first declaration.
    const BASE: DeclId = DeclId(0);

    /// An arena holding only the universal base interface.
    pub fn new() -> Self {
        let mut ast = Ast {
            decls: Vec::new(),
            by_name: FxHashMap::default(),
        };
        ast.push(Declaration {
            fq_name: FqName::base_interface(),
            doc_comment: None,
            kind: DeclKind::Interface(Interface {
                super_type: None,
                methods: Vec::new(),
            }),
            sub_types: Vec::new(),
            parent: None,
        });
        ast
    }

    pub(crate) fn push(&mut self, decl: Declaration) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.by_name.insert(decl.fq_name.clone(), id);
        self.decls.push(decl);
        id
    }

    pub(crate) fn get_mut(&mut self, id: DeclId) -> &mut Declaration {
        &mut self.decls[id.index()]
    }

    pub fn base(&self) -> DeclId {
        Self::BASE
    }

    /// # Panics
    ///
    /// Panics if `id` was not produced by this arena.
    pub fn get(&self, id: DeclId) -> &Declaration {
        &self.decls[id.index()]
    }

    pub fn lookup(&self, fq_name: &FqName) -> Option<DeclId> {
        self.by_name.get(fq_name).copied()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = DeclId> + '_ {
        (0..self.decls.len() as u32).map(DeclId)
    }

    /// Declarations that are not nested in another declaration, excluding
    /// the base interface, in insertion order.
    pub fn top_level(&self) -> Vec<DeclId> {
        self.ids()
            .filter(|&id| id != Self::BASE && self.get(id).parent.is_none())
            .collect()
    }

    /// Top-level declarations in the package and version of `package`.
    pub fn package_declarations(&self, package: &FqName) -> Vec<DeclId> {
        self.top_level()
            .into_iter()
            .filter(|&id| self.get(id).fq_name.in_same_package(package))
            .collect()
    }

    pub fn interface(&self, id: DeclId) -> Option<&Interface> {
        self.get(id).as_interface()
    }

    /// The interface and all its ancestors, most-derived first. The last
    /// element is always the base interface.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an interface or if the chain contains a cycle;
    /// both are invariant violations of a validated model.
    pub fn type_chain(&self, id: DeclId) -> Vec<DeclId> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(iface_id) = current {
            assert!(
                chain.len() < self.decls.len(),
                "inheritance cycle through {}",
                self.get(iface_id).fq_name
            );
            let Some(iface) = self.interface(iface_id) else {
                panic!("{} is not an interface", self.get(iface_id).fq_name);
            };
            chain.push(iface_id);
            current = iface.super_type;
        }
        chain
    }

    /// The first cycle in the inheritance graph, reported by one member.
    pub(crate) fn find_inheritance_cycle(&self) -> Option<DeclId> {
        for id in self.ids() {
            let mut steps = 0;
            let mut current = self.interface(id).and_then(|iface| iface.super_type);
            while let Some(next) = current {
                steps += 1;
                if next == id || steps > self.decls.len() {
                    return Some(id);
                }
                current = self.interface(next).and_then(|iface| iface.super_type);
            }
        }
        None
    }
}

impl Default for Ast {
    fn default() -> Self {
        Ast::new()
    }
}
