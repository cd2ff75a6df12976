// crates/bcos-codegen/src/error.rs
// ============================================================================
// Module: Codegen Errors
// Description: Error taxonomy for binding generation.
// Purpose: Give every generation failure a stable, printable category.
// Dependencies: thiserror
// ============================================================================

//! Error types for the generator crate.

use thiserror::Error;

/// Errors raised by the generator strategies.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
/// - Messages name the file or identifier involved.
///
/// # Examples
/// ```
/// use bcos_codegen::CodegenError;
///
/// let err = CodegenError::Abi("expected an array".to_string());
/// assert_eq!(err.to_string(), "abi error: expected an array");
/// ```
#[derive(Debug, Error)]
pub enum CodegenError {
    /// IO error while reading inputs or writing outputs.
    #[error("io error: {0}")]
    Io(String),
    /// ABI definition could not be parsed.
    #[error("abi error: {0}")]
    Abi(String),
    /// Bytecode file content is not valid hex.
    #[error("bytecode error: {0}")]
    Bytecode(String),
    /// Devdoc metadata could not be parsed.
    #[error("devdoc error: {0}")]
    Devdoc(String),
    /// Contract or package name is not a valid Java identifier.
    #[error("naming error: {0}")]
    Naming(String),
}
