// crates/bcos-codegen/src/output.rs
// ============================================================================
// Module: Generated Output Writer
// Description: Atomic file writes for generated sources.
// Purpose: Never leave a partially written source file behind.
// Dependencies: tracing
// ============================================================================

//! ## Overview
//! Maps a package and contract name to a source path and writes it through a
//! temporary sibling file so a failed run never leaves a partial wrapper.

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use tracing::info;

use crate::error::CodegenError;

// ============================================================================
// CONSTANTS: Temporary output file handling
// ============================================================================

/// Attempts made to allocate a unique temporary file name.
const TEMP_ATTEMPTS: usize = 16;
/// Per-process counter for temporary file names.
static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// SECTION: Paths
// ============================================================================

/// Returns the source path for a class: `<root>/<package dirs>/<Class>.java`.
#[must_use]
pub fn java_source_path(output_dir: &Path, package_name: &str, class_name: &str) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    for segment in package_name.split('.') {
        path.push(segment);
    }
    path.push(format!("{class_name}.java"));
    path
}

// ============================================================================
// SECTION: Writes
// ============================================================================

/// Writes one generated Java source file.
///
/// The package directories under the output root are created on demand. A
/// wrapper from an earlier run is replaced only once the new source has been
/// fully written and synced.
///
/// # Errors
/// Returns [`CodegenError::Io`] when directories or files cannot be written.
pub fn write_output(path: &Path, contents: &str) -> Result<(), CodegenError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            CodegenError::Io(format!("cannot create directory {}: {err}", parent.display()))
        })?;
    }
    let (temp_path, mut file) = create_temp_output(path)?;
    if let Err(err) = file.write_all(contents.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(CodegenError::Io(format!("cannot write {}: {err}", path.display())));
    }
    if let Err(err) = file.sync_all() {
        let _ = fs::remove_file(&temp_path);
        return Err(CodegenError::Io(format!("cannot sync {}: {err}", path.display())));
    }
    persist_temp_output(&temp_path, path)?;
    info!(path = %path.display(), bytes = contents.len(), "wrote generated source");
    Ok(())
}

/// Opens a fresh hidden `.<Class>.java.tmp.<pid>.<n>` file in the package
/// directory.
fn create_temp_output(path: &Path) -> Result<(PathBuf, fs::File), CodegenError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CodegenError::Io("output path does not include a file name".to_string()))?;
    for _ in 0 .. TEMP_ATTEMPTS {
        let attempt = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let temp_name = format!(".{file_name}.tmp.{}.{}", std::process::id(), attempt);
        let temp_path = parent.join(temp_name);
        match OpenOptions::new().write(true).create_new(true).open(&temp_path) {
            Ok(file) => return Ok((temp_path, file)),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(err) => {
                return Err(CodegenError::Io(format!(
                    "cannot create {}: {err}",
                    temp_path.display()
                )));
            }
        }
    }
    Err(CodegenError::Io("failed to allocate temporary output path".to_string()))
}

/// Moves the finished temp file over the wrapper path.
///
/// When the rename cannot replace an existing wrapper, the old wrapper is
/// removed first. The temp file never outlives a failed call.
fn persist_temp_output(temp_path: &Path, path: &Path) -> Result<(), CodegenError> {
    let Err(err) = fs::rename(temp_path, path) else {
        return Ok(());
    };
    let result = if path.is_file() {
        fs::remove_file(path).and_then(|()| fs::rename(temp_path, path))
    } else {
        Err(err)
    };
    result.map_err(|err| {
        let _ = fs::remove_file(temp_path);
        CodegenError::Io(format!("cannot replace {}: {err}", path.display()))
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
