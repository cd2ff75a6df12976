// crates/bcos-codegen/src/lib.rs
// ============================================================================
// Module: BCOS Codegen Library
// Description: Strategy dispatch and Java wrapper generators for FISCO BCOS.
// Purpose: Turn a validated configuration into generated contract bindings.
// Dependencies: bcos-codegen-config, serde, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! This crate consumes a [`bcos_codegen_config::CodegenConfig`] and generates
//! a Java wrapper class for the contract it describes. Two strategies exist,
//! one per fisco-bcos-java-sdk major version; [`dispatch`] picks exactly one.
//!
//! ### Security Posture
//! ABI, bytecode, and devdoc files are treated as untrusted input. Reads are
//! size-capped, parsing fails closed, and outputs are written atomically.
//!
//! ## Index
//! - Dispatch: [`dispatch`], [`Strategy`]
//! - Generators: [`ContractGenerator`], [`V2Generator`], [`V3Generator`], [`ContractInputs`]
//! - Inputs: [`abi`], [`devdoc`], [`artifacts`]
//! - Outputs: [`output`], [`GenerationReport`]
//! - Errors: [`CodegenError`]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod abi;
pub mod artifacts;
pub mod devdoc;
pub mod error;
pub mod generator;
mod java;
pub mod output;
pub mod strategy;
pub mod v2;
pub mod v3;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::CodegenError;
pub use generator::ContractGenerator;
pub use generator::ContractInputs;
pub use generator::GenerationReport;
pub use strategy::Strategy;
pub use strategy::dispatch;
pub use v2::V2Generator;
pub use v3::V3Generator;
