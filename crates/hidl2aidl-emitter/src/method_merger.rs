//! Flattening an interface's inheritance chain into one method set.
//!
//! AIDL has no interface inheritance, so every method of every ancestor is
//! merged into the translated interface. Methods are matched by canonical
//! name: a `<base>_<major>_<minor>` name, split at its first underscore, is
//! matched under `<base>` and its suffix overrides the declaring interface's
//! version for the comparison.
//!
//! ```text
//! IFoo@1.0      { get(); reset(); }
//! IFoo@1.1      { get_1_1(); } extends IFoo@1.0
//!
//! merged        { get (from get_1_1, renamed); reset(); }
//! ignored       [ get (1.0) ]
//! ```

use hidl2aidl_ast::{Ast, DeclId, Method};
use indexmap::IndexMap;
use indexmap::map::Entry;

/// A `<base>_<major>_<minor>` method name, split apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSuffix<'a> {
    pub base: &'a str,
    pub major: u32,
    pub minor: u32,
}

fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl<'a> VersionSuffix<'a> {
    /// The base ends at the first `_`; everything after it must be exactly
    /// `<major>_<minor>`. Any other shape yields `None` and the name is used
    /// verbatim, so `set_value_1_2` has no suffix.
    pub fn parse(name: &'a str) -> Option<Self> {
        let (base, version) = name.split_once('_')?;
        let (major, minor) = version.split_once('_')?;
        if base.is_empty() {
            return None;
        }
        Some(VersionSuffix {
            base,
            major: parse_component(major)?,
            minor: parse_component(minor)?,
        })
    }
}

/// A method together with the identity it competes under.
#[derive(Debug, Clone)]
pub struct MergedMethod<'a> {
    pub method: &'a Method,
    /// Interface that declared the method.
    pub declared_in: DeclId,
    /// Canonical name; the name the method is emitted under if it wins.
    pub name: String,
    /// Effective `(major, minor)` used for comparison.
    pub version: (u32, u32),
    /// Position of `declared_in` in the type chain, 0 being most derived.
    pub depth: usize,
}

impl MergedMethod<'_> {
    pub fn is_renamed(&self) -> bool {
        self.name != self.method.name()
    }

    /// Whether `self` supersedes `current` under the same canonical name.
    ///
    /// Newer versions win. On equal versions the more derived declaration
    /// wins, and between two candidates from the same interface the later
    /// one does.
    fn supersedes(&self, current: &MergedMethod<'_>) -> bool {
        if self.version != current.version {
            return self.version > current.version;
        }
        self.depth <= current.depth
    }
}

#[derive(Debug, Clone, Default)]
pub struct MergeResult<'a> {
    /// Winners keyed by canonical name, in first-seen order.
    pub methods: IndexMap<String, MergedMethod<'a>>,
    /// Superseded methods, in discovery order.
    pub ignored: Vec<MergedMethod<'a>>,
}

impl MergeResult<'_> {
    /// Whether the merged set has both oneway and blocking methods.
    pub fn mixes_oneway(&self) -> bool {
        let oneway = self.methods.values().filter(|m| m.method.is_oneway()).count();
        oneway > 0 && oneway < self.methods.len()
    }
}

/// Merge the user-defined methods of `iface` and all its ancestors.
///
/// The chain is walked most-derived first, each level in declaration order.
pub fn merge_methods(ast: &Ast, iface: DeclId) -> MergeResult<'_> {
    let mut result = MergeResult::default();

    for (depth, level) in ast.type_chain(iface).into_iter().enumerate() {
        let decl = ast.get(level);
        let Some(interface) = decl.as_interface() else {
            continue;
        };
        let declared_version = decl.fq_name().version();

        for method in interface.user_defined_methods() {
            let (name, version) = match VersionSuffix::parse(method.name()) {
                Some(suffix) => (suffix.base.to_string(), (suffix.major, suffix.minor)),
                None => (method.name().to_string(), declared_version),
            };
            let candidate = MergedMethod {
                method,
                declared_in: level,
                name,
                version,
                depth,
            };
            insert_candidate(&mut result, candidate);
        }
    }

    result
}

fn insert_candidate<'a>(result: &mut MergeResult<'a>, candidate: MergedMethod<'a>) {
    match result.methods.entry(candidate.name.clone()) {
        Entry::Vacant(entry) => {
            entry.insert(candidate);
        }
        Entry::Occupied(mut entry) => {
            if candidate.supersedes(entry.get()) {
                let replaced = std::mem::replace(entry.get_mut(), candidate);
                tracing::debug!(
                    name = %replaced.name,
                    ignored = replaced.method.name(),
                    winner = entry.get().method.name(),
                    "method superseded"
                );
                result.ignored.push(replaced);
            } else {
                tracing::debug!(
                    name = %candidate.name,
                    ignored = candidate.method.name(),
                    winner = entry.get().method.name(),
                    "older method ignored"
                );
                result.ignored.push(candidate);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/method_merger_tests.rs"]
mod tests;
