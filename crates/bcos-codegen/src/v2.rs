// crates/bcos-codegen/src/v2.rs
// ============================================================================
// Module: V2 Generator
// Description: Wrapper generation for fisco-bcos-java-sdk 2.x.
// Purpose: Generate bindings from the strategy-independent inputs only.
// Dependencies: bcos-codegen-config
// ============================================================================

//! fisco-bcos-java-sdk 2.x strategy.

use bcos_codegen_config::TargetVersion;

use crate::error::CodegenError;
use crate::generator::ContractGenerator;
use crate::generator::ContractInputs;
use crate::generator::GenerationReport;
use crate::generator::generate_wrapper;
use crate::java::WrapperOptions;

/// Generator for the 2.x SDK line.
///
/// Holds no async-call or transaction-version state; those options have no
/// meaning for 2.x wrappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct V2Generator {
    /// Contract inputs.
    inputs: ContractInputs,
}

impl V2Generator {
    /// Creates a V2 generator.
    #[must_use]
    pub const fn new(inputs: ContractInputs) -> Self {
        Self {
            inputs,
        }
    }

    /// Returns the inputs this generator was built with.
    #[must_use]
    pub const fn inputs(&self) -> &ContractInputs {
        &self.inputs
    }
}

impl ContractGenerator for V2Generator {
    fn generate(&self) -> Result<GenerationReport, CodegenError> {
        generate_wrapper(
            &self.inputs,
            WrapperOptions {
                sdk: TargetVersion::V2,
                transaction_version: None,
                async_call: false,
            },
        )
    }
}
