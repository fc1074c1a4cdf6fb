use super::*;
use hidl2aidl_ast::{Ast, AstBuilder, FqName, PrimitiveKind, TypeRef};

const INT32: TypeRef = TypeRef::Primitive(PrimitiveKind::Int32);

fn ast_with_status() -> (Ast, TypeRef) {
    let mut builder = AstBuilder::new();
    let status = builder
        .declare_compound(FqName::parse("android.hardware.foo@1.0::Status").unwrap(), None)
        .unwrap();
    (builder.finish().unwrap(), TypeRef::Named(status))
}

#[test]
fn test_status_names() {
    assert!(is_status_result("status"));
    assert!(is_status_result("retStatus"));
    assert!(is_status_result("lastError"));
    assert!(is_status_result("ERROR"));
    assert!(!is_status_result("statusCode"));
    assert!(!is_status_result("errors"));
}

#[test]
fn test_single_result_is_promoted() {
    let ast = Ast::new();
    let mapper = TypeMapper::new(&ast);
    let method = Method::new("getValue").with_result("value", INT32);

    let plan = SignaturePlan::for_method(&mapper, &method);
    assert_eq!(plan.return_type, "int");
    assert!(plan.out_params.is_empty());
    assert_eq!(
        plan.transformations,
        vec![ResultTransformation {
            result_name: "value".to_string(),
            kind: TransformKind::Moved,
        }]
    );
    assert_eq!(
        plan.promotion_comment().as_deref(),
        Some(
            "// Adding return type to method instead of out param int value since there is only one return value."
        )
    );
}

#[test]
fn test_status_is_dropped_and_value_promoted() {
    let (ast, status) = ast_with_status();
    let mapper = TypeMapper::new(&ast);
    let method = Method::new("read")
        .with_result("status", status)
        .with_result("value", INT32);

    let plan = SignaturePlan::for_method(&mapper, &method);
    assert_eq!(plan.return_type, "int");
    assert!(plan.out_params.is_empty());
    assert_eq!(
        plan.transformations,
        vec![
            ResultTransformation {
                result_name: "status".to_string(),
                kind: TransformKind::Removed,
            },
            ResultTransformation {
                result_name: "value".to_string(),
                kind: TransformKind::Moved,
            },
        ]
    );
    assert_eq!(
        plan.removed_comments(),
        vec![
            "// Ignoring result android.hardware.foo.Status status since AIDL has built in status types."
        ]
    );
}

#[test]
fn test_multiple_results_pass_through() {
    let ast = Ast::new();
    let mapper = TypeMapper::new(&ast);
    let method = Method::new("bounds")
        .with_result("min", INT32)
        .with_result("max", INT32);

    let plan = SignaturePlan::for_method(&mapper, &method);
    assert_eq!(plan.return_type, "void");
    let names: Vec<&str> = plan.out_params.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["min", "max"]);
    assert!(plan.transformations.is_empty());
    assert!(plan.promotion_comment().is_none());
}

#[test]
fn test_only_status_results_yield_void() {
    let (ast, status) = ast_with_status();
    let mapper = TypeMapper::new(&ast);
    let method = Method::new("reset").with_result("error", status);

    let plan = SignaturePlan::for_method(&mapper, &method);
    assert_eq!(plan.return_type, "void");
    assert!(plan.promoted.is_none());
    assert_eq!(plan.transformation_for("error").map(|t| t.kind), Some(TransformKind::Removed));
}

#[test]
fn test_no_results() {
    let ast = Ast::new();
    let mapper = TypeMapper::new(&ast);
    let method = Method::new("ping");

    let plan = SignaturePlan::for_method(&mapper, &method);
    assert_eq!(plan.return_type, "void");
    assert!(plan.out_params.is_empty());
    assert!(plan.transformations.is_empty());
}
