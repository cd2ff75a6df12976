// crates/bcos-codegen/src/artifacts.rs
// ============================================================================
// Module: Contract Artifact Loading
// Description: Bounded reads and parsing of ABI, bytecode, and devdoc files.
// Purpose: Produce one in-memory view of a contract for wrapper rendering.
// Dependencies: serde_json, tracing
// ============================================================================

//! ## Overview
//! Every input file is untrusted. Reads are capped per file kind and fail
//! closed; nothing is written until all inputs have loaded successfully.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::abi::AbiEntry;
use crate::abi::parse_abi;
use crate::devdoc::DevDoc;
use crate::devdoc::parse_devdoc;
use crate::error::CodegenError;
use crate::generator::ContractInputs;

// ============================================================================
// CONSTANTS: Input limits
// ============================================================================

/// Maximum ABI file size accepted.
pub const MAX_ABI_BYTES: u64 = 8 * 1024 * 1024;
/// Maximum bytecode file size accepted.
pub const MAX_BIN_BYTES: u64 = 16 * 1024 * 1024;
/// Maximum devdoc file size accepted.
pub const MAX_DEVDOC_BYTES: u64 = 4 * 1024 * 1024;

// ============================================================================
// SECTION: Artifacts
// ============================================================================

/// Loaded and validated contract inputs.
///
/// # Invariants
/// - `binary` and `sm_binary` contain only hex digits and link placeholders.
/// - `contract_name` is derived from the ABI file stem, first letter upper-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractArtifacts {
    /// Class name for the generated wrapper.
    pub contract_name: String,
    /// ABI entries in declaration order.
    pub abi: Vec<AbiEntry>,
    /// Compact ABI JSON for embedding.
    pub abi_json: String,
    /// Standard bytecode without `0x` prefix.
    pub binary: String,
    /// SM bytecode without `0x` prefix.
    pub sm_binary: String,
    /// Developer documentation, when supplied.
    pub devdoc: Option<DevDoc>,
}

/// Loads all contract inputs.
///
/// # Errors
/// Returns [`CodegenError`] for the first input that cannot be read or
/// parsed.
pub fn load_artifacts(inputs: &ContractInputs) -> Result<ContractArtifacts, CodegenError> {
    let contract_name = contract_name_from_path(&inputs.abi_file)?;
    let abi_text = read_text_with_limit(&inputs.abi_file, MAX_ABI_BYTES, "abi")?;
    let parsed = parse_abi(&abi_text).map_err(|err| match err {
        CodegenError::Abi(message) => {
            CodegenError::Abi(format!("{}: {message}", inputs.abi_file.display()))
        }
        other => other,
    })?;
    let binary = read_bytecode(&inputs.bin_file, "bin")?;
    let sm_binary = read_bytecode(&inputs.sm_bin_file, "sm bin")?;
    let devdoc = match &inputs.devdoc_file {
        Some(path) => {
            let text = read_text_with_limit(path, MAX_DEVDOC_BYTES, "devdoc")?;
            let devdoc = parse_devdoc(&text).map_err(|err| match err {
                CodegenError::Devdoc(message) => {
                    CodegenError::Devdoc(format!("{}: {message}", path.display()))
                }
                other => other,
            })?;
            Some(devdoc)
        }
        None => None,
    };
    debug!(
        contract = %contract_name,
        entries = parsed.entries.len(),
        binary_len = binary.len(),
        sm_binary_len = sm_binary.len(),
        devdoc = devdoc.is_some(),
        "loaded contract artifacts"
    );
    Ok(ContractArtifacts {
        contract_name,
        abi: parsed.entries,
        abi_json: parsed.compact_json,
        binary,
        sm_binary,
        devdoc,
    })
}

/// Derives the wrapper class name from the ABI file stem.
fn contract_name_from_path(path: &Path) -> Result<String, CodegenError> {
    let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or_default();
    let mut chars = stem.chars();
    let Some(first) = chars.next() else {
        return Err(CodegenError::Naming(format!(
            "cannot derive a contract name from {}",
            path.display()
        )));
    };
    let mut name = String::with_capacity(stem.len());
    name.push(first.to_ascii_uppercase());
    name.extend(chars);
    Ok(name)
}

// ============================================================================
// SECTION: Bytecode
// ============================================================================

/// Reads a bytecode file and normalizes it to bare hex.
fn read_bytecode(path: &Path, label: &str) -> Result<String, CodegenError> {
    let text = read_text_with_limit(path, MAX_BIN_BYTES, label)?;
    normalize_bytecode(&text).map_err(|bad| {
        CodegenError::Bytecode(format!(
            "{label} file {} contains invalid character `{bad}`",
            path.display()
        ))
    })
}

/// Strips whitespace and an optional `0x` prefix, returning the first
/// character that is neither hex nor part of a `__$...$__` link placeholder.
fn normalize_bytecode(text: &str) -> Result<String, char> {
    let trimmed = text.trim();
    let body = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    match body.chars().find(|ch| !(ch.is_ascii_hexdigit() || *ch == '_' || *ch == '$')) {
        Some(bad) => Err(bad),
        None => Ok(body.to_string()),
    }
}

// ============================================================================
// SECTION: Bounded Reads
// ============================================================================

/// Reads a UTF-8 file with a size limit to avoid memory exhaustion.
fn read_text_with_limit(path: &Path, limit: u64, label: &str) -> Result<String, CodegenError> {
    let io_error = |err: std::io::Error| {
        CodegenError::Io(format!("cannot read {label} file {}: {err}", path.display()))
    };
    let file = fs::File::open(path).map_err(io_error)?;
    let metadata = file.metadata().map_err(io_error)?;
    if !metadata.is_file() {
        return Err(CodegenError::Io(format!(
            "{label} file {} is not a regular file",
            path.display()
        )));
    }
    if metadata.len() > limit {
        return Err(CodegenError::Io(format!(
            "{label} file {} exceeds {limit} bytes",
            path.display()
        )));
    }
    let mut bytes = Vec::new();
    let mut limited = file.take(limit + 1);
    limited.read_to_end(&mut bytes).map_err(io_error)?;
    let size = u64::try_from(bytes.len()).map_err(|_| {
        CodegenError::Io(format!("{label} file size exceeds addressable memory"))
    })?;
    if size > limit {
        return Err(CodegenError::Io(format!(
            "{label} file {} exceeds {limit} bytes",
            path.display()
        )));
    }
    String::from_utf8(bytes).map_err(|_| {
        CodegenError::Io(format!("{label} file {} must be utf-8", path.display()))
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
