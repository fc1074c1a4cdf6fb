//! Model loading and target expansion.
//!
//! Package models are JSON files, one per package version:
//!
//! ```json
//! {
//!   "package": "android.hardware.foo@1.1",
//!   "declarations": [
//!     {
//!       "kind": "interface",
//!       "name": "IFoo",
//!       "extends": "android.hardware.foo@1.0::IFoo",
//!       "methods": [
//!         { "name": "get_1_1", "results": [{ "name": "value", "type": "int64_t" }] }
//!       ],
//!       "types": [
//!         { "kind": "struct", "name": "Config", "fields": [{ "name": "level", "type": "int32_t" }] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Type strings are HIDL primitive names, `vec<T>`, fully-qualified names, or
//! names relative to the enclosing scope (`Config`, `IFoo.Config`). Every
//! model is declared before any is defined, so references may point across
//! files and forward within a file.

use std::io;
use std::path::{Path, PathBuf};

use hidl2aidl_ast::{
    Ast, AstBuilder, BuildError, DeclId, DocComment, Field, FqName, FqNameError, Location,
    Method, PrimitiveKind, TypeRef,
};
use rustc_hash::FxHashSet;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum CoordinatorError {
    #[error("failed to read model {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse model {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: invalid name '{name}'", path.display())]
    InvalidName {
        path: PathBuf,
        name: String,
        #[source]
        source: FqNameError,
    },
    #[error("{}: unknown type '{name}' referenced from {scope}", path.display())]
    UnknownType {
        path: PathBuf,
        name: String,
        scope: FqName,
    },
    #[error("{}: type '{name}' has no AIDL equivalent", path.display())]
    UnsupportedType { path: PathBuf, name: String },
    #[error("{}", path.display())]
    Build {
        path: PathBuf,
        #[source]
        source: BuildError,
    },
    #[error("invalid model set")]
    Validate(#[source] BuildError),
    #[error("failed to search for models")]
    Walk(#[from] walkdir::Error),
    #[error("invalid target '{target}'")]
    InvalidTarget {
        target: String,
        #[source]
        source: FqNameError,
    },
    #[error("unknown target {0}")]
    UnknownTarget(FqName),
    #[error("{0} is the implicit base interface and has no translation")]
    BaseTarget(FqName),
    #[error("package {0} has no declarations")]
    NoDeclarations(FqName),
}

// =============================================================================
// Model schema
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageModel {
    pub package: String,
    #[serde(default)]
    pub declarations: Vec<DeclModel>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DeclModel {
    Interface(InterfaceModel),
    Struct(CompoundModel),
    Union(CompoundModel),
}

impl DeclModel {
    fn name(&self) -> &str {
        match self {
            DeclModel::Interface(iface) => &iface.name,
            DeclModel::Struct(compound) | DeclModel::Union(compound) => &compound.name,
        }
    }

    fn types(&self) -> &[DeclModel] {
        match self {
            DeclModel::Interface(iface) => &iface.types,
            DeclModel::Struct(compound) | DeclModel::Union(compound) => &compound.types,
        }
    }

    fn doc(&self) -> Option<&str> {
        match self {
            DeclModel::Interface(iface) => iface.doc.as_deref(),
            DeclModel::Struct(compound) | DeclModel::Union(compound) => compound.doc.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceModel {
    pub name: String,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodModel>,
    #[serde(default)]
    pub types: Vec<DeclModel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundModel {
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldModel>,
    #[serde(default)]
    pub types: Vec<DeclModel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodModel {
    pub name: String,
    #[serde(default)]
    pub args: Vec<ParamModel>,
    #[serde(default)]
    pub results: Vec<ParamModel>,
    #[serde(default)]
    pub oneway: bool,
    #[serde(default)]
    pub doc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParamModel {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Deserialize)]
pub struct FieldModel {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub doc: Option<String>,
}

// =============================================================================
// Loading
// =============================================================================

/// Model files under `paths`: files as given, directories searched
/// recursively for `*.json` in file-name order.
pub fn collect_model_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CoordinatorError> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }
        for entry in walkdir::WalkDir::new(path).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "json")
            {
                files.push(entry.into_path());
            }
        }
    }
    Ok(files)
}

pub fn read_model(path: &Path) -> Result<PackageModel, CoordinatorError> {
    let source = std::fs::read_to_string(path).map_err(|source| CoordinatorError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| CoordinatorError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read every model under `paths` and build one validated `Ast`.
pub fn load_models(paths: &[PathBuf]) -> Result<Ast, CoordinatorError> {
    let files = collect_model_files(paths)?;
    let mut models = Vec::with_capacity(files.len());
    for file in files {
        let model = read_model(&file)?;
        tracing::debug!(path = %file.display(), package = %model.package, "loaded model");
        models.push((file, model));
    }
    let ast = build_ast(&models)?;
    tracing::info!(
        models = models.len(),
        declarations = ast.len(),
        "built source model"
    );
    Ok(ast)
}

/// A declaration waiting for its body once every name is known.
struct Pending<'m> {
    id: DeclId,
    path: &'m Path,
    model: &'m DeclModel,
}

pub fn build_ast(models: &[(PathBuf, PackageModel)]) -> Result<Ast, CoordinatorError> {
    let mut builder = AstBuilder::new();
    let mut pending = Vec::new();

    for (path, model) in models {
        let package = FqName::parse(&model.package).map_err(|source| {
            CoordinatorError::InvalidName {
                path: path.clone(),
                name: model.package.clone(),
                source,
            }
        })?;
        for decl in &model.declarations {
            declare(&mut builder, path, &package, None, decl, &mut pending)?;
        }
    }

    for item in &pending {
        define(&mut builder, item)?;
    }

    builder.finish().map_err(CoordinatorError::Validate)
}

fn declare<'m>(
    builder: &mut AstBuilder,
    path: &'m Path,
    scope: &FqName,
    parent: Option<DeclId>,
    model: &'m DeclModel,
    pending: &mut Vec<Pending<'m>>,
) -> Result<(), CoordinatorError> {
    let fq_name = scoped_name(path, scope, model.name())?;
    let declared = match model {
        DeclModel::Interface(_) => builder.declare_interface(fq_name.clone(), parent),
        DeclModel::Struct(_) => builder.declare_compound(fq_name.clone(), parent),
        DeclModel::Union(_) => builder.declare_union(fq_name.clone(), parent),
    };
    let id = declared.map_err(|source| CoordinatorError::Build {
        path: path.to_path_buf(),
        source,
    })?;
    pending.push(Pending { id, path, model });

    for sub_type in model.types() {
        declare(builder, path, &fq_name, Some(id), sub_type, pending)?;
    }
    Ok(())
}

fn scoped_name(path: &Path, scope: &FqName, name: &str) -> Result<FqName, CoordinatorError> {
    let text = if scope.is_fully_qualified() {
        format!("{scope}.{name}")
    } else {
        format!("{scope}::{name}")
    };
    FqName::parse(&text).map_err(|source| CoordinatorError::InvalidName {
        path: path.to_path_buf(),
        name: text,
        source,
    })
}

fn define(builder: &mut AstBuilder, item: &Pending<'_>) -> Result<(), CoordinatorError> {
    let scope = builder.fq_name(item.id).clone();
    let to_error = |source| CoordinatorError::Build {
        path: item.path.to_path_buf(),
        source,
    };

    if let Some(doc) = item.model.doc() {
        builder.set_doc_comment(item.id, doc_comment(item.path, doc));
    }

    match item.model {
        DeclModel::Interface(iface) => {
            if let Some(extends) = &iface.extends {
                let super_type = resolve_named(builder, item.path, &scope, extends)?;
                builder
                    .set_super_type(item.id, super_type)
                    .map_err(to_error)?;
            }
            for method in &iface.methods {
                let method = build_method(builder, item.path, &scope, method)?;
                builder.add_method(item.id, method).map_err(to_error)?;
            }
        }
        DeclModel::Struct(compound) | DeclModel::Union(compound) => {
            for field in &compound.fields {
                let ty = resolve_type(builder, item.path, &scope, &field.ty)?;
                let mut built = Field::new(&field.name, ty);
                if let Some(doc) = &field.doc {
                    built = built.with_doc_comment(doc_comment(item.path, doc));
                }
                builder.add_field(item.id, built).map_err(to_error)?;
            }
        }
    }
    Ok(())
}

fn build_method(
    builder: &AstBuilder,
    path: &Path,
    scope: &FqName,
    model: &MethodModel,
) -> Result<Method, CoordinatorError> {
    let mut method = Method::new(&model.name).with_oneway(model.oneway);
    for arg in &model.args {
        method = method.with_arg(&arg.name, resolve_type(builder, path, scope, &arg.ty)?);
    }
    for result in &model.results {
        method = method.with_result(&result.name, resolve_type(builder, path, scope, &result.ty)?);
    }
    if let Some(doc) = &model.doc {
        method = method.with_doc_comment(doc_comment(path, doc));
    }
    Ok(method)
}

fn doc_comment(path: &Path, text: &str) -> DocComment {
    DocComment::parse(text, Location::new(path.display().to_string(), 0, 0))
}

/// Resolve a type string as seen from inside `scope`.
pub fn resolve_type(
    builder: &AstBuilder,
    path: &Path,
    scope: &FqName,
    text: &str,
) -> Result<TypeRef, CoordinatorError> {
    let text = text.trim();
    if let Some(element) = text.strip_prefix("vec<").and_then(|rest| rest.strip_suffix('>')) {
        return Ok(TypeRef::vector(resolve_type(builder, path, scope, element)?));
    }
    if let Ok(kind) = text.parse::<PrimitiveKind>() {
        if kind == PrimitiveKind::Pointer {
            return Err(CoordinatorError::UnsupportedType {
                path: path.to_path_buf(),
                name: text.to_string(),
            });
        }
        return Ok(TypeRef::Primitive(kind));
    }
    resolve_named(builder, path, scope, text).map(TypeRef::Named)
}

/// Fully-qualified names are looked up directly. Relative names are tried
/// in `scope`, then in each enclosing scope out to the package.
fn resolve_named(
    builder: &AstBuilder,
    path: &Path,
    scope: &FqName,
    text: &str,
) -> Result<DeclId, CoordinatorError> {
    let unknown = || CoordinatorError::UnknownType {
        path: path.to_path_buf(),
        name: text.to_string(),
        scope: scope.clone(),
    };

    if text.contains("::") {
        let fq_name = FqName::parse(text).map_err(|source| CoordinatorError::InvalidName {
            path: path.to_path_buf(),
            name: text.to_string(),
            source,
        })?;
        return builder.lookup(&fq_name).ok_or_else(unknown);
    }

    let mut current = Some(scope.clone());
    while let Some(enclosing) = current {
        let candidate = text
            .split('.')
            .fold(enclosing.clone(), |name, segment| name.nested(segment));
        if let Some(id) = builder.lookup(&candidate) {
            return Ok(id);
        }
        current = match enclosing.parent() {
            Some(parent) => Some(parent),
            None if enclosing.is_fully_qualified() => Some(enclosing.package_and_version()),
            None => None,
        };
    }
    Err(unknown())
}

// =============================================================================
// Targets
// =============================================================================

/// Declarations named by `targets`, in order and without repeats.
///
/// A package-only name expands to every top-level declaration of that
/// package version, in model order. A target nested inside another target is
/// dropped, as its enclosing target already emits it.
pub fn expand_targets(ast: &Ast, targets: &[String]) -> Result<Vec<DeclId>, CoordinatorError> {
    let mut seen = FxHashSet::default();
    let mut expanded = Vec::new();

    for target in targets {
        let fq_name =
            FqName::parse(target).map_err(|source| CoordinatorError::InvalidTarget {
                target: target.clone(),
                source,
            })?;

        let ids = if fq_name.is_fully_qualified() {
            let id = ast
                .lookup(&fq_name)
                .ok_or_else(|| CoordinatorError::UnknownTarget(fq_name.clone()))?;
            if id == ast.base() {
                return Err(CoordinatorError::BaseTarget(fq_name));
            }
            vec![id]
        } else {
            let ids = ast.package_declarations(&fq_name);
            if ids.is_empty() {
                return Err(CoordinatorError::NoDeclarations(fq_name));
            }
            ids
        };

        for id in ids {
            if seen.insert(id) {
                expanded.push(id);
            }
        }
    }

    expanded.retain(|&id| {
        let mut enclosing = ast.get(id).parent();
        while let Some(parent) = enclosing {
            if seen.contains(&parent) {
                return false;
            }
            enclosing = ast.get(parent).parent();
        }
        true
    });
    Ok(expanded)
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
