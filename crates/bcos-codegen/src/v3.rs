// crates/bcos-codegen/src/v3.rs
// ============================================================================
// Module: V3 Generator
// Description: Wrapper generation for fisco-bcos-java-sdk 3.x.
// Purpose: Generate bindings including async-call and transaction-version options.
// Dependencies: bcos-codegen-config
// ============================================================================

//! fisco-bcos-java-sdk 3.x strategy.

use bcos_codegen_config::TargetVersion;

use crate::error::CodegenError;
use crate::generator::ContractGenerator;
use crate::generator::ContractInputs;
use crate::generator::GenerationReport;
use crate::generator::generate_wrapper;
use crate::java::WrapperOptions;

/// Generator for the 3.x SDK line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct V3Generator {
    /// Contract inputs.
    inputs: ContractInputs,
    /// Whether async call helpers are listed.
    enable_async_call: bool,
    /// Numeric transaction version.
    transaction_version: u32,
}

impl V3Generator {
    /// Creates a V3 generator.
    #[must_use]
    pub const fn new(
        inputs: ContractInputs,
        enable_async_call: bool,
        transaction_version: u32,
    ) -> Self {
        Self {
            inputs,
            enable_async_call,
            transaction_version,
        }
    }

    /// Returns the inputs this generator was built with.
    #[must_use]
    pub const fn inputs(&self) -> &ContractInputs {
        &self.inputs
    }

    /// Returns whether async call helpers are generated.
    #[must_use]
    pub const fn enable_async_call(&self) -> bool {
        self.enable_async_call
    }

    /// Returns the numeric transaction version.
    #[must_use]
    pub const fn transaction_version(&self) -> u32 {
        self.transaction_version
    }
}

impl ContractGenerator for V3Generator {
    fn generate(&self) -> Result<GenerationReport, CodegenError> {
        generate_wrapper(
            &self.inputs,
            WrapperOptions {
                sdk: TargetVersion::V3,
                transaction_version: Some(self.transaction_version),
                async_call: self.enable_async_call,
            },
        )
    }
}
