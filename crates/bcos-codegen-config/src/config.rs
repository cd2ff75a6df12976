// crates/bcos-codegen-config/src/config.rs
// ============================================================================
// Module: Codegen Configuration Model
// Description: Validated configuration and version enums for binding generation.
// Purpose: Provide the immutable configuration consumed by the strategy dispatcher.
// Dependencies: clap, thiserror
// ============================================================================

//! ## Overview
//! [`CodegenConfig`] is the single, immutable result of argument resolution.
//! Its fields are private; once built by [`crate::resolve_config`] it can only
//! be read. [`TargetVersion`] and [`TransactionVersion`] are closed value sets
//! with lookup functions for their derived string and integer forms.

use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum length of a single path component, in bytes.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total length of a path argument, in bytes.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Version Enums
// ============================================================================

/// Error returned when an enum-typed option receives an unsupported value.
///
/// # Examples
/// ```
/// use bcos_codegen_config::TargetVersion;
///
/// let err = "4".parse::<TargetVersion>().unwrap_err();
/// assert_eq!(err.to_string(), "expected one of 2, 3 (got `4`)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected one of {expected} (got `{value}`)")]
pub struct ParseEnumError {
    /// Rejected raw value.
    value: String,
    /// Human-readable list of accepted values.
    expected: &'static str,
}

/// Target Java SDK major version selecting the generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetVersion {
    /// FISCO BCOS Java SDK 2.x.
    V2,
    /// FISCO BCOS Java SDK 3.x.
    V3,
}

impl TargetVersion {
    /// Every supported version, in ascending order.
    pub const ALL: [Self; 2] = [Self::V2, Self::V3];

    /// Returns the numeric major version.
    #[must_use]
    pub const fn major(self) -> u8 {
        match self {
            Self::V2 => 2,
            Self::V3 => 3,
        }
    }

    /// Returns the lowercase label (`v2` / `v3`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetVersion {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "2" | "v2" | "V2" => Ok(Self::V2),
            "3" | "v3" | "V3" => Ok(Self::V3),
            _ => Err(ParseEnumError {
                value: value.to_string(),
                expected: "2, 3",
            }),
        }
    }
}

/// On-chain transaction encoding targeted by V3 bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransactionVersion {
    /// Original transaction encoding.
    #[default]
    V0,
    /// Encoding with extension fields (value, gas).
    V1,
    /// Encoding with extension fields and extra data.
    V2,
}

impl TransactionVersion {
    /// Every supported transaction version, in ascending order.
    pub const ALL: [Self; 3] = [Self::V0, Self::V1, Self::V2];

    /// Returns the numeric transaction version.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::V0 => 0,
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }
}

impl fmt::Display for TransactionVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

impl FromStr for TransactionVersion {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "0" | "v0" | "V0" => Ok(Self::V0),
            "1" | "v1" | "V1" => Ok(Self::V1),
            "2" | "v2" | "V2" => Ok(Self::V2),
            _ => Err(ParseEnumError {
                value: value.to_string(),
                expected: "0, 1, 2",
            }),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while resolving command-line arguments.
///
/// # Invariants
/// - Every variant identifies the offending option in its message.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Argument parsing failed, or help/version output was requested.
    #[error("{}", .0.to_string().trim_end())]
    Usage(#[from] clap::Error),
    /// A parsed value failed post-parse validation.
    #[error("invalid value for {option}: {message}")]
    Invalid {
        /// Option label, e.g. `-a/--abiFile`.
        option: &'static str,
        /// Validation failure detail.
        message: String,
    },
}

impl ConfigError {
    /// Returns true when the error carries help or version output rather
    /// than a failure.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::Usage(err) if !err.use_stderr())
    }
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Validated, immutable configuration for one generator invocation.
///
/// # Invariants
/// - Every required path is present, non-blank and within length limits.
/// - `package_name` is non-blank and contains no whitespace.
/// - `enable_async_call` and `transaction_version` are carried regardless of
///   `target_version`; only the V3 strategy reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Selected generation strategy.
    pub(crate) target_version: TargetVersion,
    /// ABI definition file.
    pub(crate) abi_file: PathBuf,
    /// Standard bytecode file.
    pub(crate) bin_file: PathBuf,
    /// SM (national crypto suite) bytecode file.
    pub(crate) sm_bin_file: PathBuf,
    /// Optional NatSpec devdoc file.
    pub(crate) devdoc_file: Option<PathBuf>,
    /// Destination root for generated sources.
    pub(crate) output_dir: PathBuf,
    /// Package for generated types.
    pub(crate) package_name: String,
    /// Whether async call helpers are generated (V3 only).
    pub(crate) enable_async_call: bool,
    /// Transaction encoding targeted (V3 only).
    pub(crate) transaction_version: TransactionVersion,
}

impl CodegenConfig {
    /// Returns the selected target SDK version.
    #[must_use]
    pub const fn target_version(&self) -> TargetVersion {
        self.target_version
    }

    /// Returns the ABI definition path.
    #[must_use]
    pub fn abi_file(&self) -> &Path {
        &self.abi_file
    }

    /// Returns the standard bytecode path.
    #[must_use]
    pub fn bin_file(&self) -> &Path {
        &self.bin_file
    }

    /// Returns the SM bytecode path.
    #[must_use]
    pub fn sm_bin_file(&self) -> &Path {
        &self.sm_bin_file
    }

    /// Returns the devdoc path, when supplied.
    #[must_use]
    pub fn devdoc_file(&self) -> Option<&Path> {
        self.devdoc_file.as_deref()
    }

    /// Returns the output root directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the package name for generated types.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Returns whether async call helpers were requested.
    #[must_use]
    pub const fn enable_async_call(&self) -> bool {
        self.enable_async_call
    }

    /// Returns the requested transaction version.
    #[must_use]
    pub const fn transaction_version(&self) -> TransactionVersion {
        self.transaction_version
    }

    /// Returns true when any V3-only option differs from its default.
    #[must_use]
    pub fn has_v3_only_options(&self) -> bool {
        self.enable_async_call || self.transaction_version != TransactionVersion::V0
    }
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Validates a path argument against emptiness and length constraints.
pub(crate) fn validate_path(option: &'static str, path: PathBuf) -> Result<PathBuf, ConfigError> {
    let invalid = |message: &str| ConfigError::Invalid {
        option,
        message: message.to_string(),
    };
    let text = path.to_string_lossy();
    if text.trim().is_empty() {
        return Err(invalid("path must be non-empty"));
    }
    if text.contains('\0') {
        return Err(invalid("path must not contain NUL bytes"));
    }
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(invalid("path exceeds max length"));
    }
    for component in path.components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(invalid("path component too long"));
        }
    }
    Ok(path)
}

/// Validates the package name.
pub(crate) fn validate_package_name(
    option: &'static str,
    value: String,
) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid {
            option,
            message: "package name must be non-empty".to_string(),
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid {
            option,
            message: format!("package name `{value}` must not contain whitespace"),
        });
    }
    Ok(value)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
