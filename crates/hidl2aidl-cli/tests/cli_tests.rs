//! End-to-end tests for the hidl2aidl driver and binary

use std::fs;
use std::path::Path;
use std::process::Command;

use clap::Parser;
use hidl2aidl_cli::args::CliArgs;
use hidl2aidl_cli::driver::{self, CONVERSION_LOG};

const FOO_1_0: &str = r#"{
    "package": "android.hardware.foo@1.0",
    "declarations": [
        { "kind": "struct", "name": "Status", "fields": [{ "name": "code", "type": "int32_t" }] },
        {
            "kind": "interface",
            "name": "IFoo",
            "methods": [
                { "name": "ping", "oneway": true },
                {
                    "name": "configure",
                    "args": [{ "name": "level", "type": "uint32_t" }],
                    "results": [{ "name": "status", "type": "Status" }]
                }
            ]
        }
    ]
}"#;

const FOO_1_1: &str = r#"{
    "package": "android.hardware.foo@1.1",
    "declarations": [
        {
            "kind": "interface",
            "name": "IFoo",
            "extends": "android.hardware.foo@1.0::IFoo",
            "methods": [
                {
                    "name": "configure_1_1",
                    "args": [{ "name": "config", "type": "Config" }],
                    "results": [{ "name": "status", "type": "android.hardware.foo@1.0::Status" }],
                    "doc": "Applies the configuration.\n@return status whether it applied"
                }
            ],
            "types": [
                {
                    "kind": "struct",
                    "name": "Config",
                    "fields": [{ "name": "extra", "type": "Extra" }],
                    "types": [{ "kind": "union", "name": "Extra", "fields": [{ "name": "raw", "type": "vec<uint8_t>" }] }]
                }
            ]
        }
    ]
}"#;

fn write_models(dir: &Path) {
    fs::create_dir_all(dir.join("foo")).unwrap();
    fs::write(dir.join("foo/1.0.json"), FOO_1_0).unwrap();
    fs::write(dir.join("foo/1.1.json"), FOO_1_1).unwrap();
}

fn args(models: &Path, output: &Path, extra: &[&str]) -> CliArgs {
    let mut argv = vec![
        "hidl2aidl".to_string(),
        "-o".to_string(),
        output.display().to_string(),
        "-m".to_string(),
        models.display().to_string(),
    ];
    argv.extend(extra.iter().map(|arg| arg.to_string()));
    CliArgs::parse_from(argv)
}

#[test]
fn test_package_target_writes_nested_files_and_log() {
    let models = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_models(models.path());

    let summary = driver::run(&args(
        models.path(),
        out.path(),
        &["android.hardware.foo@1.1"],
    ))
    .unwrap();

    assert_eq!(
        summary.files,
        vec![
            Path::new("android/hardware/foo/IFooConfigExtra.aidl").to_path_buf(),
            Path::new("android/hardware/foo/IFooConfig.aidl").to_path_buf(),
            Path::new("android/hardware/foo/IFoo.aidl").to_path_buf(),
        ]
    );

    let iface = fs::read_to_string(out.path().join("android/hardware/foo/IFoo.aidl")).unwrap();
    assert!(iface.starts_with("// FIXME: license file if you have one\n\npackage android.hardware.foo;\n"));
    assert!(iface.contains("import android.hardware.foo.IFooConfig;\n"), "{iface}");
    assert!(iface.contains("    // Ignoring method configure since a newer alternative is available.\n"));
    assert!(iface.contains("    void configure(in android.hardware.foo.IFooConfig config);\n"), "{iface}");
    assert!(iface.contains("    oneway void ping();\n"), "{iface}");
    assert!(iface.contains("     * The following return was removed\n"), "{iface}");

    let extra =
        fs::read_to_string(out.path().join("android/hardware/foo/IFooConfigExtra.aidl")).unwrap();
    assert!(extra.contains("union IFooConfigExtra {\n    byte[] raw;\n}\n"), "{extra}");

    let log = fs::read_to_string(out.path().join(CONVERSION_LOG)).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(
        lines[..3],
        [
            "Converted android.hardware.foo@1.1::IFoo.Config.Extra to android.hardware.foo.IFooConfigExtra",
            "Converted android.hardware.foo@1.1::IFoo.Config to android.hardware.foo.IFooConfig",
            "Converted android.hardware.foo@1.1::IFoo to android.hardware.foo.IFoo",
        ]
    );
    assert!(lines.contains(&"android.hardware.foo.IFoo: renamed configure_1_1 to configure"));
}

#[test]
fn test_log_follows_target_order_across_workers() {
    let models = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_models(models.path());

    driver::run(&args(
        models.path(),
        out.path(),
        &[
            "-j",
            "4",
            "android.hardware.foo@1.0::IFoo",
            "android.hardware.foo@1.0::Status",
        ],
    ))
    .unwrap();

    let log = fs::read_to_string(out.path().join(CONVERSION_LOG)).unwrap();
    let converted: Vec<&str> = log
        .lines()
        .filter(|line| line.starts_with("Converted "))
        .collect();
    assert_eq!(
        converted,
        vec![
            "Converted android.hardware.foo@1.0::IFoo to android.hardware.foo.IFoo",
            "Converted android.hardware.foo@1.0::Status to android.hardware.foo.Status",
        ]
    );
}

#[test]
fn test_config_file_and_flags_shape_output() {
    let models = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_models(models.path());
    let config = models.path().join("options.conf");
    fs::write(&config, r#"{"headerComment": "// Copyright 2026 Acme", "indentWidth": 2}"#).unwrap();
    let config_arg = config.display().to_string();

    driver::run(&args(
        models.path(),
        out.path(),
        &[
            "--config",
            &config_arg,
            "android.hardware.foo@1.0::Status",
        ],
    ))
    .unwrap();

    let status = fs::read_to_string(out.path().join("android/hardware/foo/Status.aidl")).unwrap();
    assert_eq!(
        status,
        "// Copyright 2026 Acme\n\npackage android.hardware.foo;\n\nparcelable Status {\n  int code;\n}\n"
    );
}

#[test]
fn test_binary_reports_unknown_target() {
    let models = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_models(models.path());

    let output = Command::new(env!("CARGO_BIN_EXE_hidl2aidl"))
        .arg("-o")
        .arg(out.path())
        .arg("-m")
        .arg(models.path())
        .arg("android.hardware.foo@1.0::IMissing")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("ERROR: unknown target android.hardware.foo@1.0::IMissing"),
        "{stderr}"
    );
}

#[test]
fn test_binary_reports_malformed_model() {
    let models = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    fs::write(models.path().join("broken.json"), "{ not json").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hidl2aidl"))
        .arg("-o")
        .arg(out.path())
        .arg("-m")
        .arg(models.path())
        .arg("android.hardware.foo@1.0")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse model"), "{stderr}");
    assert!(stderr.contains("broken.json"), "{stderr}");
}
