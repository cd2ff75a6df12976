// crates/bcos-codegen-config/tests/proptest_resolve.rs
// ============================================================================
// Module: Resolver Property-Based Tests
// Description: Property tests for resolver determinism and enum rejection.
// Purpose: Detect nondeterminism and over-permissive parsing across inputs.
// ============================================================================

//! Property-based tests for argument resolution invariants.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use bcos_codegen_config::resolve_config;
use proptest::prelude::*;

fn args_for(version: u8, package: &str, async_call: bool, tx: u32) -> Vec<String> {
    let mut args = vec![
        "-v".to_string(),
        version.to_string(),
        "-a".to_string(),
        "abi.json".to_string(),
        "-b".to_string(),
        "c.bin".to_string(),
        "-s".to_string(),
        "c_sm.bin".to_string(),
        "-o".to_string(),
        "out".to_string(),
        "-p".to_string(),
        package.to_string(),
        "-t".to_string(),
        tx.to_string(),
    ];
    if async_call {
        args.push("-e".to_string());
    }
    args
}

proptest! {
    #[test]
    fn resolution_is_deterministic(
        version in prop_oneof![Just(2u8), Just(3u8)],
        package in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}",
        async_call in any::<bool>(),
        tx in 0u32 ..= 2,
    ) {
        let args = args_for(version, &package, async_call, tx);
        let first = resolve_config(args.clone()).expect("first resolution");
        let second = resolve_config(args).expect("second resolution");
        prop_assert_eq!(first.target_version().major(), version);
        prop_assert_eq!(first.transaction_version().as_u32(), tx);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tx_version_outside_range_is_rejected(tx in 3u32 ..) {
        let args = args_for(3, "com.example", false, tx);
        let err = resolve_config(args).expect_err("out-of-range tx version");
        prop_assert!(!err.is_informational());
        prop_assert!(err.to_string().contains("--txVersion"));
    }
}
