// crates/bcos-codegen-config/src/lib.rs
// ============================================================================
// Module: BCOS Codegen Config Library
// Description: Command-line configuration resolution for the binding generator.
// Purpose: Single gate that turns raw arguments into a validated CodegenConfig.
// Dependencies: clap, thiserror
// ============================================================================

//! ## Overview
//! `bcos-codegen-config` owns the configuration contract between the command
//! line and the generator strategies. [`resolve_config`] strips the optional
//! `solidity generate` label, parses the remaining tokens, and validates the
//! result. Nothing past this crate ever sees a partially populated
//! configuration.
//!
//! ## Index
//! - Resolution: [`resolve_config`], [`strip_command_prefix`], [`CodegenArgs`]
//! - Model: [`CodegenConfig`], [`TargetVersion`], [`TransactionVersion`]
//! - Errors: [`ConfigError`], [`ParseEnumError`]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod args;
pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use args::COMMAND_GENERATE;
pub use args::COMMAND_NAME;
pub use args::COMMAND_SOLIDITY;
pub use args::CodegenArgs;
pub use args::resolve_config;
pub use args::strip_command_prefix;
pub use config::CodegenConfig;
pub use config::ConfigError;
pub use config::ParseEnumError;
pub use config::TargetVersion;
pub use config::TransactionVersion;
