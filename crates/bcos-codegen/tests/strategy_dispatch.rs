// crates/bcos-codegen/tests/strategy_dispatch.rs
// ============================================================================
// Module: Strategy Dispatch Tests
// Description: Integration tests for version-keyed dispatch and generation.
// Purpose: Ensure each version reaches exactly one strategy with the right inputs.
// Dependencies: bcos-codegen, bcos-codegen-config, tempfile
// ============================================================================

//! ## Overview
//! Covers strategy selection, V3-only option routing, end-to-end wrapper
//! generation, and fail-closed behavior for malformed inputs.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::PathBuf;

use bcos_codegen::CodegenError;
use bcos_codegen::ContractGenerator;
use bcos_codegen::ContractInputs;
use bcos_codegen::Strategy;
use bcos_codegen::artifacts::MAX_ABI_BYTES;
use bcos_codegen::artifacts::MAX_BIN_BYTES;
use bcos_codegen::artifacts::MAX_DEVDOC_BYTES;
use bcos_codegen::dispatch;
use bcos_codegen_config::CodegenConfig;
use bcos_codegen_config::resolve_config;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

const HELLO_ABI: &str = r#"[
    {"type":"constructor","inputs":[]},
    {"type":"function","name":"get","inputs":[],"outputs":[{"name":"","type":"string"}],"stateMutability":"view"},
    {"type":"function","name":"set","inputs":[{"name":"n","type":"string"}],"outputs":[],"stateMutability":"nonpayable"},
    {"type":"event","name":"NameChanged","inputs":[{"name":"n","type":"string","indexed":false}],"anonymous":false}
]"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(abi: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::write(dir.path().join("helloWorld.abi"), abi).expect("write abi");
        fs::write(dir.path().join("helloWorld.bin"), "0x608060405234801561001057600080fd5b50\n")
            .expect("write bin");
        fs::write(dir.path().join("helloWorld_sm.bin"), "608060405234801561001057600080fd5b51")
            .expect("write sm bin");
        Self {
            dir,
        }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_string_lossy().into_owned()
    }

    fn out_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    fn config(&self, version: &str, extra: &[&str]) -> CodegenConfig {
        self.config_with_package(version, "com.example", extra)
    }

    fn config_with_package(&self, version: &str, package: &str, extra: &[&str]) -> CodegenConfig {
        let mut args = vec![
            "-v".to_string(),
            version.to_string(),
            "-a".to_string(),
            self.path("helloWorld.abi"),
            "-b".to_string(),
            self.path("helloWorld.bin"),
            "-s".to_string(),
            self.path("helloWorld_sm.bin"),
            "-o".to_string(),
            self.path("out"),
            "-p".to_string(),
            package.to_string(),
        ];
        args.extend(extra.iter().map(ToString::to_string));
        resolve_config(args).expect("resolve config")
    }

    fn generated(&self) -> PathBuf {
        self.out_dir().join("com").join("example").join("HelloWorld.java")
    }
}

/// Replaces `name` with a sparse file one byte over `limit`.
fn write_oversized(workspace: &Workspace, name: &str, limit: u64) {
    let file = fs::File::create(workspace.dir.path().join(name)).expect("create oversized file");
    file.set_len(limit + 1).expect("extend oversized file");
}

/// Asserts an IO error mentioning `needle` and that nothing was generated.
fn assert_io_failure(workspace: &Workspace, config: &CodegenConfig, needle: &str) {
    match dispatch(config) {
        Err(CodegenError::Io(message)) => {
            assert!(message.contains(needle), "message `{message}` lacks `{needle}`");
        }
        other => panic!("expected io error, got {other:?}"),
    }
    assert!(!workspace.out_dir().exists());
}

fn expected_inputs(workspace: &Workspace, devdoc: Option<&str>) -> ContractInputs {
    ContractInputs {
        bin_file: PathBuf::from(workspace.path("helloWorld.bin")),
        sm_bin_file: PathBuf::from(workspace.path("helloWorld_sm.bin")),
        abi_file: PathBuf::from(workspace.path("helloWorld.abi")),
        devdoc_file: devdoc.map(|name| PathBuf::from(workspace.path(name))),
        output_dir: workspace.out_dir(),
        package_name: "com.example".to_string(),
    }
}

// ============================================================================
// SECTION: Selection
// ============================================================================

#[test]
fn v2_strategy_receives_only_shared_inputs() {
    let workspace = Workspace::new(HELLO_ABI);
    let config = workspace.config("2", &["-e", "-t", "2"]);
    match Strategy::for_config(&config) {
        Strategy::V2(generator) => {
            assert_eq!(generator.inputs(), &expected_inputs(&workspace, None));
        }
        other => panic!("expected v2 strategy, got {other:?}"),
    }
}

#[test]
fn v3_strategy_defaults_async_and_tx_version() {
    let workspace = Workspace::new(HELLO_ABI);
    let config = workspace.config("3", &[]);
    match Strategy::for_config(&config) {
        Strategy::V3(generator) => {
            assert!(!generator.enable_async_call());
            assert_eq!(generator.transaction_version(), 0);
            assert_eq!(generator.inputs(), &expected_inputs(&workspace, None));
        }
        other => panic!("expected v3 strategy, got {other:?}"),
    }
}

#[test]
fn v3_strategy_receives_async_and_tx_version() {
    let workspace = Workspace::new(HELLO_ABI);
    let config = workspace.config("3", &["-e", "-t", "1"]);
    let strategy = Strategy::for_config(&config);
    assert_eq!(strategy.target_version().major(), 3);
    match strategy {
        Strategy::V3(generator) => {
            assert!(generator.enable_async_call());
            assert_eq!(generator.transaction_version(), 1);
        }
        other => panic!("expected v3 strategy, got {other:?}"),
    }
}

#[test]
fn identical_configs_select_identical_strategies() {
    let workspace = Workspace::new(HELLO_ABI);
    let first = Strategy::for_config(&workspace.config("3", &["-t", "2"]));
    let second = Strategy::for_config(&workspace.config("3", &["-t", "2"]));
    assert_eq!(first, second);
}

// ============================================================================
// SECTION: Generation
// ============================================================================

#[test]
fn v2_dispatch_writes_wrapper_without_v3_constants() {
    let workspace = Workspace::new(HELLO_ABI);
    let config = workspace.config("2", &["-e", "-t", "1"]);
    let report = dispatch(&config).expect("generate v2");
    assert_eq!(report.files, vec![workspace.generated()]);
    let source = fs::read_to_string(workspace.generated()).expect("read wrapper");
    assert!(source.starts_with("package com.example;\n"));
    assert!(source.contains("import org.fisco.bcos.sdk.contract.Contract;"));
    assert!(source.contains("public class HelloWorld extends Contract {"));
    assert!(source.contains("public static final String[] BINARY_ARRAY = {\"608060405234801561001057600080fd5b50\"};"));
    assert!(source.contains("public static final String FUNC_GET = \"get\";"));
    assert!(source.contains("public static final String EVENT_NAME_CHANGED = \"NameChanged\";"));
    assert!(!source.contains("TRANSACTION_VERSION"));
    assert!(!source.contains("ASYNC_CALL_FUNCTIONS"));
}

#[test]
fn v3_dispatch_writes_async_and_tx_version_constants() {
    let workspace = Workspace::new(HELLO_ABI);
    let config = workspace.config("3", &["-e", "-t", "1"]);
    dispatch(&config).expect("generate v3");
    let source = fs::read_to_string(workspace.generated()).expect("read wrapper");
    assert!(source.contains("import org.fisco.bcos.sdk.v3.contract.Contract;"));
    assert!(source.contains("public static final int TRANSACTION_VERSION = 1;"));
    assert!(source.contains("public static final String[] ASYNC_CALL_FUNCTIONS = {FUNC_GET};"));
    assert!(source.contains("fisco-bcos-java-sdk v3"));
}

#[test]
fn generation_is_deterministic() {
    let workspace = Workspace::new(HELLO_ABI);
    let config = workspace.config("3", &["-e"]);
    dispatch(&config).expect("first run");
    let first = fs::read_to_string(workspace.generated()).expect("read first");
    dispatch(&config).expect("second run");
    let second = fs::read_to_string(workspace.generated()).expect("read second");
    assert_eq!(first, second);
}

#[test]
fn devdoc_is_rendered_into_javadoc() {
    let workspace = Workspace::new(HELLO_ABI);
    let devdoc = r#"{
        "title": "Greeting store",
        "author": "FISCO BCOS",
        "methods": {
            "set(string)": {"details": "Replaces the stored name.", "params": {"n": "new name"}}
        },
        "kind": "dev",
        "version": 1
    }"#;
    fs::write(workspace.dir.path().join("helloWorld.devdoc"), devdoc).expect("write devdoc");
    let devdoc_path = workspace.path("helloWorld.devdoc");
    let config = workspace.config("2", &["-d", devdoc_path.as_str()]);
    match Strategy::for_config(&config) {
        Strategy::V2(generator) => {
            assert_eq!(
                generator.inputs(),
                &expected_inputs(&workspace, Some("helloWorld.devdoc"))
            );
        }
        other => panic!("expected v2 strategy, got {other:?}"),
    }
    dispatch(&config).expect("generate with devdoc");
    let source = fs::read_to_string(workspace.generated()).expect("read wrapper");
    assert!(source.contains(" * Greeting store\n"));
    assert!(source.contains(" * @author FISCO BCOS\n"));
    assert!(source.contains("     * Replaces the stored name.\n"));
    assert!(source.contains("     * @param n new name\n"));
}

// ============================================================================
// SECTION: Failures
// ============================================================================

#[test]
fn malformed_abi_fails_without_output() {
    let workspace = Workspace::new("[{\"type\": \"function\", ");
    let config = workspace.config("3", &[]);
    match dispatch(&config) {
        Err(CodegenError::Abi(message)) => assert!(message.contains("helloWorld.abi")),
        other => panic!("expected abi error, got {other:?}"),
    }
    assert!(!workspace.out_dir().exists());
}

#[test]
fn missing_bin_file_is_an_io_error() {
    let workspace = Workspace::new(HELLO_ABI);
    fs::remove_file(workspace.dir.path().join("helloWorld.bin")).expect("remove bin");
    let config = workspace.config("2", &[]);
    match dispatch(&config) {
        Err(CodegenError::Io(message)) => assert!(message.contains("bin file")),
        other => panic!("expected io error, got {other:?}"),
    }
    assert!(!workspace.out_dir().exists());
}

#[test]
fn non_hex_bytecode_is_rejected() {
    let workspace = Workspace::new(HELLO_ABI);
    fs::write(workspace.dir.path().join("helloWorld_sm.bin"), "6080 zz").expect("write sm bin");
    let config = workspace.config("3", &[]);
    let err = Strategy::for_config(&config).generate().expect_err("invalid bytecode");
    assert!(matches!(err, CodegenError::Bytecode(ref message) if message.contains("sm bin")));
}

#[test]
fn keyword_package_is_a_naming_error() {
    let workspace = Workspace::new(HELLO_ABI);
    let config = workspace.config_with_package("2", "com.class", &[]);
    assert!(matches!(dispatch(&config), Err(CodegenError::Naming(_))));
    assert!(!workspace.out_dir().exists());
}

#[test]
fn oversized_inputs_are_rejected_per_kind() {
    let workspace = Workspace::new(HELLO_ABI);
    write_oversized(&workspace, "helloWorld.abi", MAX_ABI_BYTES);
    assert_io_failure(&workspace, &workspace.config("3", &[]), "abi file");

    let workspace = Workspace::new(HELLO_ABI);
    write_oversized(&workspace, "helloWorld.bin", MAX_BIN_BYTES);
    assert_io_failure(&workspace, &workspace.config("2", &[]), "exceeds");

    let workspace = Workspace::new(HELLO_ABI);
    write_oversized(&workspace, "helloWorld.devdoc", MAX_DEVDOC_BYTES);
    let devdoc_path = workspace.path("helloWorld.devdoc");
    let config = workspace.config("3", &["-d", devdoc_path.as_str()]);
    assert_io_failure(&workspace, &config, "devdoc file");
}

#[test]
fn non_utf8_abi_is_rejected() {
    let workspace = Workspace::new(HELLO_ABI);
    fs::write(workspace.dir.path().join("helloWorld.abi"), [0x5b, 0xff, 0xfe, 0x5d])
        .expect("write abi");
    assert_io_failure(&workspace, &workspace.config("2", &[]), "utf-8");
}

#[test]
fn directory_as_abi_file_is_rejected() {
    let workspace = Workspace::new(HELLO_ABI);
    let abi = workspace.dir.path().join("helloWorld.abi");
    fs::remove_file(&abi).expect("remove abi");
    fs::create_dir(&abi).expect("create abi dir");
    assert_io_failure(&workspace, &workspace.config("3", &[]), "not a regular file");
}

#[test]
fn malformed_devdoc_is_a_devdoc_error() {
    let workspace = Workspace::new(HELLO_ABI);
    fs::write(workspace.dir.path().join("helloWorld.devdoc"), "{\"methods\": [").expect("write devdoc");
    let devdoc_path = workspace.path("helloWorld.devdoc");
    let config = workspace.config("2", &["-d", devdoc_path.as_str()]);
    match dispatch(&config) {
        Err(CodegenError::Devdoc(message)) => assert!(message.contains("helloWorld.devdoc")),
        other => panic!("expected devdoc error, got {other:?}"),
    }
    assert!(!workspace.out_dir().exists());
}
