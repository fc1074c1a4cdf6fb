use super::*;
use hidl2aidl_ast::{AstBuilder, FqName};

fn fq(text: &str) -> FqName {
    FqName::parse(text).unwrap()
}

fn names(result: &MergeResult<'_>) -> Vec<(String, String)> {
    result
        .methods
        .values()
        .map(|m| (m.name.clone(), m.method.name().to_string()))
        .collect()
}

fn ignored(result: &MergeResult<'_>) -> Vec<String> {
    result
        .ignored
        .iter()
        .map(|m| m.method.name().to_string())
        .collect()
}

#[test]
fn test_version_suffix_parsing() {
    assert_eq!(
        VersionSuffix::parse("foo_2_0"),
        Some(VersionSuffix {
            base: "foo",
            major: 2,
            minor: 0
        })
    );
    assert_eq!(VersionSuffix::parse("set_value_1_12"), None);
    assert_eq!(VersionSuffix::parse("foo_1_0_2"), None);
    assert_eq!(VersionSuffix::parse("foo"), None);
    assert_eq!(VersionSuffix::parse("foo_2"), None);
    assert_eq!(VersionSuffix::parse("foo_a_0"), None);
    assert_eq!(VersionSuffix::parse("foo_1_"), None);
    assert_eq!(VersionSuffix::parse("_1_0"), None);
    assert_eq!(VersionSuffix::parse("foo_+1_0"), None);
}

#[test]
fn test_suffix_overrides_interface_version() {
    let mut builder = AstBuilder::new();
    let parent = builder
        .declare_interface(fq("android.hardware.foo@1.0::IParent"), None)
        .unwrap();
    let child = builder
        .declare_interface(fq("android.hardware.foo@1.0::IChild"), None)
        .unwrap();
    builder.set_super_type(child, parent).unwrap();
    builder.add_method(parent, Method::new("foo")).unwrap();
    builder.add_method(child, Method::new("foo_2_0")).unwrap();
    let ast = builder.finish().unwrap();

    let result = merge_methods(&ast, child);
    assert_eq!(names(&result), vec![("foo".to_string(), "foo_2_0".to_string())]);
    assert_eq!(ignored(&result), vec!["foo"]);
    assert!(result.methods["foo"].is_renamed());
    assert_eq!(result.methods["foo"].version, (2, 0));
}

#[test]
fn test_equal_version_descendant_wins() {
    let mut builder = AstBuilder::new();
    let parent = builder
        .declare_interface(fq("android.hardware.foo@1.0::IParent"), None)
        .unwrap();
    let child = builder
        .declare_interface(fq("android.hardware.foo@1.0::IChild"), None)
        .unwrap();
    builder.set_super_type(child, parent).unwrap();
    builder.add_method(parent, Method::new("bar")).unwrap();
    builder.add_method(child, Method::new("bar")).unwrap();
    let ast = builder.finish().unwrap();

    let result = merge_methods(&ast, child);
    assert_eq!(result.methods["bar"].declared_in, child);
    assert_eq!(result.ignored.len(), 1);
    assert_eq!(result.ignored[0].declared_in, parent);
    assert!(!result.methods["bar"].is_renamed());
}

#[test]
fn test_newer_package_version_supersedes_older() {
    let mut builder = AstBuilder::new();
    let v1_0 = builder
        .declare_interface(fq("android.hardware.foo@1.0::IFoo"), None)
        .unwrap();
    let v1_1 = builder
        .declare_interface(fq("android.hardware.foo@1.1::IFoo"), None)
        .unwrap();
    builder.set_super_type(v1_1, v1_0).unwrap();
    builder.add_method(v1_0, Method::new("get")).unwrap();
    builder.add_method(v1_0, Method::new("reset")).unwrap();
    builder.add_method(v1_1, Method::new("get_1_1")).unwrap();
    builder.add_method(v1_1, Method::new("describe")).unwrap();
    let ast = builder.finish().unwrap();

    let result = merge_methods(&ast, v1_1);
    assert_eq!(
        names(&result),
        vec![
            ("get".to_string(), "get_1_1".to_string()),
            ("describe".to_string(), "describe".to_string()),
            ("reset".to_string(), "reset".to_string()),
        ]
    );
    assert_eq!(ignored(&result), vec!["get"]);
}

#[test]
fn test_older_suffix_in_descendant_loses() {
    let mut builder = AstBuilder::new();
    let v2 = builder
        .declare_interface(fq("android.hardware.foo@2.0::IFoo"), None)
        .unwrap();
    let v2_1 = builder
        .declare_interface(fq("android.hardware.foo@2.1::IFoo"), None)
        .unwrap();
    builder.set_super_type(v2_1, v2).unwrap();
    builder.add_method(v2, Method::new("start")).unwrap();
    builder.add_method(v2_1, Method::new("start_1_5")).unwrap();
    let ast = builder.finish().unwrap();

    let result = merge_methods(&ast, v2_1);
    assert_eq!(names(&result), vec![("start".to_string(), "start".to_string())]);
    assert_eq!(ignored(&result), vec!["start_1_5"]);
}

#[test]
fn test_greater_major_wins_regardless_of_minor() {
    let mut builder = AstBuilder::new();
    let iface = builder
        .declare_interface(fq("android.hardware.foo@1.9::IFoo"), None)
        .unwrap();
    builder.add_method(iface, Method::new("run_2_0")).unwrap();
    builder.add_method(iface, Method::new("run")).unwrap();
    let ast = builder.finish().unwrap();

    let result = merge_methods(&ast, iface);
    assert_eq!(result.methods["run"].method.name(), "run_2_0");
    assert_eq!(ignored(&result), vec!["run"]);
}

#[test]
fn test_mixes_oneway() {
    let mut builder = AstBuilder::new();
    let iface = builder
        .declare_interface(fq("android.hardware.foo@1.0::IFoo"), None)
        .unwrap();
    builder
        .add_method(iface, Method::new("notify").with_oneway(true))
        .unwrap();
    let only_oneway = builder
        .declare_interface(fq("android.hardware.foo@1.0::ICallback"), None)
        .unwrap();
    builder
        .add_method(only_oneway, Method::new("onEvent").with_oneway(true))
        .unwrap();
    builder.add_method(iface, Method::new("query")).unwrap();
    let ast = builder.finish().unwrap();

    assert!(merge_methods(&ast, iface).mixes_oneway());
    assert!(!merge_methods(&ast, only_oneway).mixes_oneway());
}

#[test]
fn test_base_interface_contributes_nothing() {
    let mut builder = AstBuilder::new();
    let iface = builder
        .declare_interface(fq("android.hardware.foo@1.0::IFoo"), None)
        .unwrap();
    let ast = builder.finish().unwrap();

    let result = merge_methods(&ast, iface);
    assert!(result.methods.is_empty());
    assert!(result.ignored.is_empty());
}

#[test]
fn test_underscored_names_are_not_versioned() {
    let mut builder = AstBuilder::new();
    let v1_0 = builder
        .declare_interface(fq("android.hardware.foo@1.0::IFoo"), None)
        .unwrap();
    let v1_1 = builder
        .declare_interface(fq("android.hardware.foo@1.1::IFoo"), None)
        .unwrap();
    builder.set_super_type(v1_1, v1_0).unwrap();
    builder.add_method(v1_0, Method::new("get_value")).unwrap();
    builder.add_method(v1_1, Method::new("get_value_1_1")).unwrap();
    let ast = builder.finish().unwrap();

    let result = merge_methods(&ast, v1_1);
    assert_eq!(
        names(&result),
        vec![
            ("get_value_1_1".to_string(), "get_value_1_1".to_string()),
            ("get_value".to_string(), "get_value".to_string()),
        ]
    );
    assert!(ignored(&result).is_empty());
    assert!(!result.methods["get_value_1_1"].is_renamed());
}
