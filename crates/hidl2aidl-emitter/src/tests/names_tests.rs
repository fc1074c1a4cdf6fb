use super::*;
use crate::method_merger::merge_methods;
use hidl2aidl_ast::{AstBuilder, Field, Method, PrimitiveKind};
use std::path::Path;

fn fq(text: &str) -> FqName {
    FqName::parse(text).unwrap()
}

#[test]
fn test_aidl_name_capitalizes_each_segment() {
    assert_eq!(aidl_name(&fq("android.hardware.foo@1.0::IFoo")), "IFoo");
    assert_eq!(
        aidl_name(&fq("android.hardware.foo@1.0::IFoo.callback.event")),
        "IFooCallbackEvent"
    );
}

#[test]
fn test_aidl_package_appends_major_version() {
    assert_eq!(
        aidl_package(&fq("android.hardware.foo@1.2::IFoo")),
        "android.hardware.foo"
    );
    assert_eq!(
        aidl_package(&fq("android.hardware.foo@2.1::IFoo")),
        "android.hardware.foo2"
    );
    assert_eq!(
        aidl_fq_name(&fq("vendor.acme.radio@3.0::IRadio.Config")),
        "vendor.acme.radio3.IRadioConfig"
    );
}

#[test]
fn test_relative_path_follows_package() {
    assert_eq!(
        aidl_relative_path(&fq("android.hardware.foo@2.1::IFoo.Callback")),
        Path::new("android/hardware/foo2/IFooCallback.aidl")
    );
}

#[test]
fn test_import_set_dedupes_in_first_seen_order() {
    let mut imports = ImportSet::new();
    assert!(imports.insert(&fq("android.hardware.foo@1.0::B")));
    assert!(imports.insert(&fq("android.hardware.foo@1.0::A")));
    assert!(!imports.insert(&fq("android.hardware.foo@1.0::B")));

    assert_eq!(
        imports.render(),
        vec![
            "import android.hardware.foo.B;",
            "import android.hardware.foo.A;",
        ]
    );
}

#[test]
fn test_base_interface_is_implicit() {
    let mut imports = ImportSet::new();
    assert!(imports.contains("android.hidl.base.IBase"));
    assert!(!imports.insert(&FqName::base_interface()));
    assert!(imports.render().is_empty());
}

#[test]
fn test_excluded_name_is_never_imported() {
    let mut imports = ImportSet::new();
    let own = fq("android.hardware.foo@1.0::IFoo");
    imports.exclude(&own);
    assert!(!imports.insert(&own));
    assert!(imports.imports().is_empty());
}

#[test]
fn test_for_declaration_lists_nested_types_first() {
    let mut builder = AstBuilder::new();
    let shared = builder
        .declare_compound(fq("android.hardware.foo@1.0::Shared"), None)
        .unwrap();
    let iface = builder
        .declare_interface(fq("android.hardware.foo@1.0::IFoo"), None)
        .unwrap();
    let options = builder
        .declare_compound(fq("android.hardware.foo@1.0::IFoo.Options"), Some(iface))
        .unwrap();
    builder
        .add_field(options, Field::new("level", TypeRef::Primitive(PrimitiveKind::Int8)))
        .unwrap();
    builder
        .add_method(
            iface,
            Method::new("apply")
                .with_arg("shared", TypeRef::vector(TypeRef::vector(TypeRef::Named(shared))))
                .with_arg("options", TypeRef::Named(options))
                .with_result("again", TypeRef::Named(shared)),
        )
        .unwrap();
    let ast = builder.finish().unwrap();

    let merged = merge_methods(&ast, iface);
    let imports = ImportSet::for_declaration(&ast, iface, Some(&merged));
    assert_eq!(
        imports.imports(),
        [
            "android.hardware.foo.IFooOptions".to_string(),
            "android.hardware.foo.Shared".to_string(),
        ]
    );
}

#[test]
fn test_self_reference_is_not_imported() {
    let mut builder = AstBuilder::new();
    let node = builder
        .declare_compound(fq("android.hardware.foo@1.0::Node"), None)
        .unwrap();
    builder
        .add_field(node, Field::new("children", TypeRef::vector(TypeRef::Named(node))))
        .unwrap();
    let ast = builder.finish().unwrap();

    let imports = ImportSet::for_declaration(&ast, node, None);
    assert!(imports.imports().is_empty());
}
