//! AIDL names derived from HIDL fully-qualified names, and per-file imports.
//!
//! ```text
//! android.hardware.foo@2.1::IFoo.Callback
//!   -> package android.hardware.foo2
//!   -> name    IFooCallback
//!   -> path    android/hardware/foo2/IFooCallback.aidl
//! ```

use std::path::PathBuf;

use hidl2aidl_ast::{Ast, DeclId, FqName, TypeRef};
use rustc_hash::FxHashSet;

use crate::method_merger::MergeResult;

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalized type path segments, concatenated.
pub fn aidl_name(fq_name: &FqName) -> String {
    fq_name.names().iter().map(|name| capitalize(name)).collect()
}

/// The HIDL package with its major version appended, except for version 1.
pub fn aidl_package(fq_name: &FqName) -> String {
    if fq_name.major() == 1 {
        fq_name.package().to_string()
    } else {
        format!("{}{}", fq_name.package(), fq_name.major())
    }
}

pub fn aidl_fq_name(fq_name: &FqName) -> String {
    format!("{}.{}", aidl_package(fq_name), aidl_name(fq_name))
}

/// Output path of a declaration relative to the output root.
pub fn aidl_relative_path(fq_name: &FqName) -> PathBuf {
    let mut path: PathBuf = aidl_package(fq_name).split('.').collect();
    path.push(format!("{}.aidl", aidl_name(fq_name)));
    path
}

/// Deduplicated, first-seen-ordered AIDL imports for one file.
///
/// The base interface is always a member but is implicit: it never produces
/// an `import` line.
#[derive(Debug, Clone)]
pub struct ImportSet {
    base: String,
    seen: FxHashSet<String>,
    imports: Vec<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        let base = aidl_fq_name(&FqName::base_interface());
        let mut seen = FxHashSet::default();
        seen.insert(base.clone());
        ImportSet {
            base,
            seen,
            imports: Vec::new(),
        }
    }

    /// Imports for one declaration's file.
    ///
    /// Nested declarations come first, since each lands in its own file.
    /// An interface then imports what its flattened method set references;
    /// ignored methods contribute nothing. A compound type imports what its
    /// fields reference. The declaration never imports itself.
    pub fn for_declaration(ast: &Ast, id: DeclId, merged: Option<&MergeResult<'_>>) -> Self {
        let decl = ast.get(id);
        let mut imports = ImportSet::new();
        imports.exclude(decl.fq_name());

        for &sub_type in decl.sub_types() {
            imports.insert(ast.get(sub_type).fq_name());
        }

        match merged {
            Some(merged) => {
                for method in merged.methods.values() {
                    for ty in method.method.references() {
                        imports.insert_reachable(ast, ty);
                    }
                }
            }
            None => {
                for ty in decl.references() {
                    imports.insert_reachable(ast, ty);
                }
            }
        }

        imports
    }

    fn insert_reachable(&mut self, ast: &Ast, ty: &TypeRef) {
        for named in ty.named_types() {
            self.insert(ast.get(named).fq_name());
        }
    }

    /// Returns whether the name was newly added.
    pub fn insert(&mut self, fq_name: &FqName) -> bool {
        let import = aidl_fq_name(fq_name);
        if !self.seen.insert(import.clone()) {
            return false;
        }
        self.imports.push(import);
        true
    }

    /// Mark a name as present without producing an import for it.
    pub fn exclude(&mut self, fq_name: &FqName) {
        self.seen.insert(aidl_fq_name(fq_name));
    }

    pub fn contains(&self, aidl_fq_name: &str) -> bool {
        self.seen.contains(aidl_fq_name)
    }

    /// Explicit imports in first-seen order.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// `import` statements, one per explicit import.
    ///
    /// # Panics
    ///
    /// Panics if the implicit base import went missing.
    pub fn render(&self) -> Vec<String> {
        assert!(
            self.seen.contains(&self.base),
            "import set lost the implicit {} import",
            self.base
        );
        self.imports
            .iter()
            .map(|import| format!("import {import};"))
            .collect()
    }
}

impl Default for ImportSet {
    fn default() -> Self {
        ImportSet::new()
    }
}

#[cfg(test)]
#[path = "tests/names_tests.rs"]
mod tests;
