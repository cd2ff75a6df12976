// crates/bcos-codegen/src/generator.rs
// ============================================================================
// Module: Generator Capability
// Description: Shared generator trait, inputs, and report types.
// Purpose: Define the one capability every generation strategy provides.
// Dependencies: std
// ============================================================================

//! ## Overview
//! [`ContractGenerator`] is the seam between the dispatcher and a strategy.
//! [`ContractInputs`] carries exactly the fields every strategy consumes;
//! V3-only options live on the V3 generator itself so the V2 path has no way
//! to observe them.

use std::path::Path;
use std::path::PathBuf;

use bcos_codegen_config::CodegenConfig;

use crate::artifacts::load_artifacts;
use crate::error::CodegenError;
use crate::java::WrapperOptions;
use crate::java::render_wrapper;
use crate::output::java_source_path;
use crate::output::write_output;

// ============================================================================
// SECTION: Inputs
// ============================================================================

/// Inputs shared by every generation strategy.
///
/// # Invariants
/// - Built only from a validated [`CodegenConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractInputs {
    /// Standard bytecode file.
    pub bin_file: PathBuf,
    /// SM bytecode file.
    pub sm_bin_file: PathBuf,
    /// ABI definition file.
    pub abi_file: PathBuf,
    /// Optional NatSpec devdoc file.
    pub devdoc_file: Option<PathBuf>,
    /// Destination root directory.
    pub output_dir: PathBuf,
    /// Package for generated classes.
    pub package_name: String,
}

impl ContractInputs {
    /// Copies the strategy-independent fields out of a configuration.
    #[must_use]
    pub fn from_config(config: &CodegenConfig) -> Self {
        Self {
            bin_file: config.bin_file().to_path_buf(),
            sm_bin_file: config.sm_bin_file().to_path_buf(),
            abi_file: config.abi_file().to_path_buf(),
            devdoc_file: config.devdoc_file().map(Path::to_path_buf),
            output_dir: config.output_dir().to_path_buf(),
            package_name: config.package_name().to_string(),
        }
    }
}

// ============================================================================
// SECTION: Capability
// ============================================================================

/// Files produced by a successful generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Paths written, in write order.
    pub files: Vec<PathBuf>,
}

/// A strategy that turns contract inputs into generated sources on disk.
pub trait ContractGenerator {
    /// Runs generation once, writing files under the output directory.
    ///
    /// # Errors
    /// Returns [`CodegenError`] when inputs cannot be read or parsed, or when
    /// outputs cannot be written.
    fn generate(&self) -> Result<GenerationReport, CodegenError>;
}

// ============================================================================
// SECTION: Shared Pipeline
// ============================================================================

/// Loads artifacts, renders the wrapper, and writes it under the output root.
pub(crate) fn generate_wrapper(
    inputs: &ContractInputs,
    options: WrapperOptions,
) -> Result<GenerationReport, CodegenError> {
    let artifacts = load_artifacts(inputs)?;
    let source = render_wrapper(&artifacts, &inputs.package_name, options)?;
    let path = java_source_path(&inputs.output_dir, &inputs.package_name, &artifacts.contract_name);
    write_output(&path, &source)?;
    Ok(GenerationReport {
        files: vec![path],
    })
}
