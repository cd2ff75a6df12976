// crates/bcos-codegen-config/src/args.rs
// ============================================================================
// Module: Command-Line Arguments
// Description: Raw argument model, command prefix handling, and resolution.
// Purpose: Turn process arguments into a validated CodegenConfig or fail fast.
// Dependencies: clap
// ============================================================================

//! ## Overview
//! [`CodegenArgs`] mirrors the command-line surface one-to-one. Parsing is
//! delegated to clap; [`CodegenArgs::into_config`] then applies the checks
//! clap cannot express. [`resolve_config`] is the only entry point callers
//! need. Resolution touches no files.

use std::ffi::OsStr;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::CodegenConfig;
use crate::config::ConfigError;
use crate::config::TargetVersion;
use crate::config::TransactionVersion;
use crate::config::validate_package_name;
use crate::config::validate_path;

// ============================================================================
// CONSTANTS: Command labels
// ============================================================================

/// Binary name used in usage and help output.
pub const COMMAND_NAME: &str = "bcos-codegen";
/// First token of the optional command prefix.
pub const COMMAND_SOLIDITY: &str = "solidity";
/// Second token of the optional command prefix.
pub const COMMAND_GENERATE: &str = "generate";

// ============================================================================
// SECTION: Argument Model
// ============================================================================

/// Raw command-line arguments prior to validation.
#[derive(Debug, Clone, Parser)]
#[command(
    name = COMMAND_NAME,
    version,
    about = "Generate FISCO BCOS Java contract bindings from ABI and bytecode files.",
    disable_help_subcommand = true
)]
pub struct CodegenArgs {
    /// Target fisco-bcos-java-sdk major version (2 or 3).
    #[arg(short = 'v', value_name = "VERSION")]
    pub target_version: TargetVersion,
    /// ABI file with the contract definition.
    #[arg(short = 'a', long = "abiFile", value_name = "FILE")]
    pub abi_file: PathBuf,
    /// Bin file with compiled contract code, used for deploy methods.
    #[arg(short = 'b', long = "binFile", value_name = "FILE")]
    pub bin_file: PathBuf,
    /// SM bin file with contract code compiled for the SM crypto suite.
    #[arg(short = 's', long = "smBinFile", value_name = "FILE")]
    pub sm_bin_file: PathBuf,
    /// Solidity devdoc file generated from NatSpec comments.
    #[arg(short = 'd', long = "devdoc", value_name = "FILE")]
    pub devdoc_file: Option<PathBuf>,
    /// Destination base directory.
    #[arg(short = 'o', long = "outputDir", value_name = "DIR")]
    pub output_dir: PathBuf,
    /// Base package name for generated classes.
    #[arg(short = 'p', long = "package", value_name = "PACKAGE")]
    pub package_name: String,
    /// Generate async call helpers (V3 only).
    #[arg(short = 'e', long = "enableAsyncCall")]
    pub enable_async_call: bool,
    /// Transaction version to target: 0, 1 or 2 (V3 only).
    #[arg(short = 't', long = "txVersion", value_name = "TX_VERSION", default_value = "0")]
    pub transaction_version: TransactionVersion,
}

impl CodegenArgs {
    /// Validates parsed arguments into a [`CodegenConfig`].
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first option that fails
    /// validation.
    pub fn into_config(self) -> Result<CodegenConfig, ConfigError> {
        Ok(CodegenConfig {
            target_version: self.target_version,
            abi_file: validate_path("-a/--abiFile", self.abi_file)?,
            bin_file: validate_path("-b/--binFile", self.bin_file)?,
            sm_bin_file: validate_path("-s/--smBinFile", self.sm_bin_file)?,
            devdoc_file: self
                .devdoc_file
                .map(|path| validate_path("-d/--devdoc", path))
                .transpose()?,
            output_dir: validate_path("-o/--outputDir", self.output_dir)?,
            package_name: validate_package_name("-p/--package", self.package_name)?,
            enable_async_call: self.enable_async_call,
            transaction_version: self.transaction_version,
        })
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Strips the optional `solidity generate` command label.
///
/// Either token may appear alone; `solidity` is only recognized first.
///
/// # Examples
/// ```
/// use bcos_codegen_config::strip_command_prefix;
///
/// let tokens = ["solidity", "generate", "-v", "3"];
/// assert_eq!(strip_command_prefix(&tokens), &["-v", "3"]);
/// assert_eq!(strip_command_prefix(&["generate", "-v"]), &["-v"]);
/// ```
#[must_use]
pub fn strip_command_prefix<T: AsRef<OsStr>>(tokens: &[T]) -> &[T] {
    let mut rest = tokens;
    if let Some((first, tail)) = rest.split_first()
        && first.as_ref() == COMMAND_SOLIDITY
    {
        rest = tail;
    }
    if let Some((first, tail)) = rest.split_first()
        && first.as_ref() == COMMAND_GENERATE
    {
        rest = tail;
    }
    rest
}

/// Resolves process arguments (without the program name) into a validated
/// configuration.
///
/// # Errors
/// Returns [`ConfigError::Usage`] for parse failures and help/version
/// requests, and [`ConfigError::Invalid`] for values that parse but fail
/// validation.
///
/// # Examples
/// ```
/// use bcos_codegen_config::TargetVersion;
/// use bcos_codegen_config::resolve_config;
///
/// # fn main() -> Result<(), bcos_codegen_config::ConfigError> {
/// let config = resolve_config([
///     "-v", "2", "-a", "abi.json", "-b", "c.bin", "-s", "c_sm.bin", "-o", "./out", "-p",
///     "com.example",
/// ])?;
/// assert_eq!(config.target_version(), TargetVersion::V2);
/// assert!(config.devdoc_file().is_none());
/// # Ok(())
/// # }
/// ```
pub fn resolve_config<I, T>(tokens: I) -> Result<CodegenConfig, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let tokens: Vec<OsString> = tokens.into_iter().map(Into::into).collect();
    let args = strip_command_prefix(&tokens);
    let argv = std::iter::once(OsString::from(COMMAND_NAME)).chain(args.iter().cloned());
    CodegenArgs::try_parse_from(argv)?.into_config()
}
