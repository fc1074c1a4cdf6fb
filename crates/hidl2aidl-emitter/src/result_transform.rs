//! Result/Signature Transformer.
//!
//! HIDL methods return everything through callback results. AIDL has a
//! built-in status channel and a single return value, so each method's
//! results are rewritten:
//!
//! 1. Results named `*status` / `*error` (case-insensitive) are dropped.
//! 2. A single remaining result becomes the return value.
//! 3. Two or more remaining results stay as `out` parameters.

use hidl2aidl_ast::{Method, NamedRef};

use crate::type_mapper::TypeMapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Promoted to the method's return value.
    Moved,
    /// Dropped in favour of AIDL's built-in status.
    Removed,
}

/// How one result was altered, consumed by doc comment rewriting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTransformation {
    pub result_name: String,
    pub kind: TransformKind,
}

/// A result rendered for an explanatory comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    pub aidl_type: String,
    pub name: String,
}

/// Whether a result carries a legacy status or error code.
pub fn is_status_result(name: &str) -> bool {
    let upper = name.to_uppercase();
    upper.ends_with("STATUS") || upper.ends_with("ERROR")
}

#[derive(Debug, Clone)]
pub struct SignaturePlan<'a> {
    /// AIDL return type, `void` unless a single result was promoted.
    pub return_type: String,
    /// Results that remain explicit `out` parameters, in declaration order.
    pub out_params: Vec<&'a NamedRef>,
    /// One record per dropped or promoted result, in the order applied.
    pub transformations: Vec<ResultTransformation>,
    pub removed: Vec<RenderedResult>,
    pub promoted: Option<RenderedResult>,
}

impl<'a> SignaturePlan<'a> {
    pub fn for_method(mapper: &TypeMapper<'_>, method: &'a Method) -> Self {
        let mut out_params = Vec::new();
        let mut transformations = Vec::new();
        let mut removed = Vec::new();

        for result in method.results() {
            if is_status_result(&result.name) {
                removed.push(RenderedResult {
                    aidl_type: mapper.map_type(&result.ty),
                    name: result.name.clone(),
                });
                transformations.push(ResultTransformation {
                    result_name: result.name.clone(),
                    kind: TransformKind::Removed,
                });
            } else {
                out_params.push(result);
            }
        }

        let mut return_type = "void".to_string();
        let mut promoted = None;
        if let [single] = out_params.as_slice() {
            return_type = mapper.map_type(&single.ty);
            promoted = Some(RenderedResult {
                aidl_type: return_type.clone(),
                name: single.name.clone(),
            });
            transformations.push(ResultTransformation {
                result_name: single.name.clone(),
                kind: TransformKind::Moved,
            });
            out_params.clear();
        }

        SignaturePlan {
            return_type,
            out_params,
            transformations,
            removed,
            promoted,
        }
    }

    pub fn removed_comments(&self) -> Vec<String> {
        self.removed
            .iter()
            .map(|r| {
                format!(
                    "// Ignoring result {} {} since AIDL has built in status types.",
                    r.aidl_type, r.name
                )
            })
            .collect()
    }

    pub fn promotion_comment(&self) -> Option<String> {
        self.promoted.as_ref().map(|r| {
            format!(
                "// Adding return type to method instead of out param {} {} since there is only one return value.",
                r.aidl_type, r.name
            )
        })
    }

    pub fn transformation_for(&self, result_name: &str) -> Option<&ResultTransformation> {
        self.transformations
            .iter()
            .find(|t| t.result_name == result_name)
    }
}

#[cfg(test)]
#[path = "tests/result_transform_tests.rs"]
mod tests;
