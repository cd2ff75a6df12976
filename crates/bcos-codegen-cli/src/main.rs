// crates/bcos-codegen-cli/src/main.rs
// ============================================================================
// Module: BCOS Codegen CLI Entry Point
// Description: Command-line front end for FISCO BCOS contract binding generation.
// Purpose: Resolve arguments, dispatch by SDK version, and own process exit codes.
// Dependencies: bcos-codegen, bcos-codegen-config, thiserror, tracing-subscriber
// ============================================================================

//! ## Overview
//! The CLI is the outermost boundary: it is the only place where a failure
//! becomes a diagnostic on stderr and a non-zero exit status. Library crates
//! return typed errors and never terminate the process.
//!
//! Exit codes: `0` on success or help/version output, `2` for argument
//! errors, `1` for generation failures.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use bcos_codegen::CodegenError;
use bcos_codegen::dispatch;
use bcos_codegen_config::ConfigError;
use bcos_codegen_config::TargetVersion;
use bcos_codegen_config::resolve_config;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ============================================================================
// CONSTANTS: Logging
// ============================================================================

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "BCOS_CODEGEN_LOG";
/// Log filter used when [`LOG_ENV`] is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";
/// Exit status for argument errors, matching clap's convention.
const USAGE_EXIT_CODE: u8 = 2;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures surfaced at the process boundary.
#[derive(Debug, Error)]
enum CliError {
    /// Arguments were missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The selected generator failed.
    #[error("code generation failed ({version}): {source}")]
    Generation {
        /// Strategy that was running.
        version: TargetVersion,
        /// Underlying generator error.
        #[source]
        source: CodegenError,
    },
    /// Help or version output could not be written.
    #[error("failed to write {stream}: {source}")]
    Output {
        /// Stream label.
        stream: &'static str,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Maps the failure to a process exit code.
    fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::from(USAGE_EXIT_CODE),
            Self::Generation {
                ..
            }
            | Self::Output {
                ..
            } => ExitCode::FAILURE,
        }
    }

    /// Formats the single-line diagnostic written to stderr.
    fn diagnostic(&self) -> String {
        let message = self.to_string();
        if message.starts_with("error:") { message } else { format!("error: {message}") }
    }
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    init_logging();
    match run(std::env::args_os().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    }
}

/// Resolves arguments and runs the selected generator once.
fn run<I, T>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let config = match resolve_config(args) {
        Ok(config) => config,
        Err(err) if err.is_informational() => {
            write_stdout_line(&err.to_string()).map_err(|source| CliError::Output {
                stream: "stdout",
                source,
            })?;
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    let report = dispatch(&config).map_err(|source| CliError::Generation {
        version: config.target_version(),
        source,
    })?;
    debug!(files = report.files.len(), "generation complete");
    Ok(())
}

// ============================================================================
// SECTION: Logging
// ============================================================================

/// Installs the stderr log subscriber.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits the diagnostic to stderr and returns the failure exit code.
fn report_error(err: &CliError) -> ExitCode {
    let _ = write_stderr_line(&err.diagnostic());
    err.exit_code()
}
