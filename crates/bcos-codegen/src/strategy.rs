// crates/bcos-codegen/src/strategy.rs
// ============================================================================
// Module: Strategy Dispatcher
// Description: Version-keyed selection and single-shot invocation of a generator.
// Purpose: Route a validated configuration to exactly one generation strategy.
// Dependencies: bcos-codegen-config, tracing
// ============================================================================

//! ## Overview
//! [`Strategy`] is the closed set of generators. It is chosen once from the
//! configured [`TargetVersion`] and invoked once. Failures are returned to the
//! caller as-is: there is no retry and no fallback to the other strategy.

use bcos_codegen_config::CodegenConfig;
use bcos_codegen_config::TargetVersion;
use tracing::info;
use tracing::warn;

use crate::error::CodegenError;
use crate::generator::ContractGenerator;
use crate::generator::ContractInputs;
use crate::generator::GenerationReport;
use crate::v2::V2Generator;
use crate::v3::V3Generator;

/// The generation strategy selected for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// fisco-bcos-java-sdk 2.x wrappers.
    V2(V2Generator),
    /// fisco-bcos-java-sdk 3.x wrappers.
    V3(V3Generator),
}

impl Strategy {
    /// Builds the strategy for a configuration.
    ///
    /// # Examples
    /// ```
    /// use bcos_codegen::Strategy;
    /// use bcos_codegen_config::resolve_config;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = resolve_config([
    ///     "-v", "3", "-a", "abi.json", "-b", "c.bin", "-s", "c_sm.bin", "-o", "out", "-p",
    ///     "com.example", "-e", "-t", "1",
    /// ])?;
    /// let Strategy::V3(generator) = Strategy::for_config(&config) else {
    ///     return Err("expected the v3 strategy".into());
    /// };
    /// assert!(generator.enable_async_call());
    /// assert_eq!(generator.transaction_version(), 1);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn for_config(config: &CodegenConfig) -> Self {
        let inputs = ContractInputs::from_config(config);
        match config.target_version() {
            TargetVersion::V2 => Self::V2(V2Generator::new(inputs)),
            TargetVersion::V3 => Self::V3(V3Generator::new(
                inputs,
                config.enable_async_call(),
                config.transaction_version().as_u32(),
            )),
        }
    }

    /// Returns the SDK version this strategy targets.
    #[must_use]
    pub const fn target_version(&self) -> TargetVersion {
        match self {
            Self::V2(_) => TargetVersion::V2,
            Self::V3(_) => TargetVersion::V3,
        }
    }
}

impl ContractGenerator for Strategy {
    fn generate(&self) -> Result<GenerationReport, CodegenError> {
        match self {
            Self::V2(generator) => generator.generate(),
            Self::V3(generator) => generator.generate(),
        }
    }
}

/// Selects the strategy for `config` and runs it once.
///
/// # Errors
/// Returns the [`CodegenError`] raised by the selected generator.
pub fn dispatch(config: &CodegenConfig) -> Result<GenerationReport, CodegenError> {
    if config.target_version() == TargetVersion::V2 && config.has_v3_only_options() {
        warn!(
            enable_async_call = config.enable_async_call(),
            tx_version = config.transaction_version().as_u32(),
            "-e/--enableAsyncCall and -t/--txVersion only apply to v3; ignoring them for v2"
        );
    }
    let strategy = Strategy::for_config(config);
    info!(
        version = %strategy.target_version(),
        abi = %config.abi_file().display(),
        "dispatching contract generation"
    );
    strategy.generate()
}
