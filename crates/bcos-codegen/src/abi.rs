// crates/bcos-codegen/src/abi.rs
// ============================================================================
// Module: ABI Model
// Description: Minimal Solidity ABI entry model used for wrapper rendering.
// Purpose: Parse ABI JSON into entries with canonical signatures.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Only the parts of the ABI that the wrapper renders are modelled: entry
//! kind, name, parameter types, and mutability. Unknown keys are ignored so
//! newer compiler output still parses.

use serde::Deserialize;
use serde_json::Value;

use crate::error::CodegenError;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Kind of an ABI entry. Solidity omits `type` for functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbiEntryKind {
    /// Callable function.
    #[default]
    Function,
    /// Contract constructor.
    Constructor,
    /// Log event.
    Event,
    /// Fallback function.
    Fallback,
    /// Plain value receiver.
    Receive,
    /// Custom error.
    Error,
}

/// One parameter of a function, event, or error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbiParam {
    /// Parameter name; may be empty.
    #[serde(default)]
    pub name: String,
    /// Solidity type, e.g. `uint256` or `tuple[]`.
    #[serde(rename = "type")]
    pub ty: String,
    /// True for indexed event parameters.
    #[serde(default)]
    pub indexed: bool,
    /// Tuple components when `ty` starts with `tuple`.
    #[serde(default)]
    pub components: Vec<Self>,
}

impl AbiParam {
    /// Returns the canonical type with tuple components expanded.
    #[must_use]
    pub fn canonical_type(&self) -> String {
        match self.ty.strip_prefix("tuple") {
            Some(suffix) => {
                let inner: Vec<String> = self.components.iter().map(Self::canonical_type).collect();
                format!("({}){suffix}", inner.join(","))
            }
            None => self.ty.clone(),
        }
    }
}

/// One entry of a contract ABI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiEntry {
    /// Entry kind.
    #[serde(rename = "type", default)]
    pub kind: AbiEntryKind,
    /// Entry name; empty for constructors, fallback, and receive.
    #[serde(default)]
    pub name: String,
    /// Input parameters.
    #[serde(default)]
    pub inputs: Vec<AbiParam>,
    /// Output parameters.
    #[serde(default)]
    pub outputs: Vec<AbiParam>,
    /// Declared mutability (`pure`, `view`, `nonpayable`, `payable`).
    #[serde(default)]
    pub state_mutability: Option<String>,
    /// Legacy constant marker from pre-0.5 compilers.
    #[serde(default)]
    pub constant: bool,
    /// True for anonymous events.
    #[serde(default)]
    pub anonymous: bool,
}

impl AbiEntry {
    /// Returns the canonical signature, e.g. `set(uint256,(address,bool))`.
    #[must_use]
    pub fn signature(&self) -> String {
        let inputs: Vec<String> = self.inputs.iter().map(AbiParam::canonical_type).collect();
        format!("{}({})", self.name, inputs.join(","))
    }

    /// Returns true when the function does not modify chain state.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.constant || matches!(self.state_mutability.as_deref(), Some("view" | "pure"))
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// A parsed ABI plus its compact JSON form for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAbi {
    /// Entries in declaration order.
    pub entries: Vec<AbiEntry>,
    /// Compact JSON of the whole ABI.
    pub compact_json: String,
}

/// Parses ABI JSON text.
///
/// # Errors
/// Returns [`CodegenError::Abi`] when the text is not a JSON array of ABI
/// entries, or when a function, event, or error entry has no name.
pub fn parse_abi(text: &str) -> Result<ParsedAbi, CodegenError> {
    let value: Value = serde_json::from_str(text).map_err(|err| CodegenError::Abi(err.to_string()))?;
    if !value.is_array() {
        return Err(CodegenError::Abi("abi definition must be a JSON array".to_string()));
    }
    let compact_json =
        serde_json::to_string(&value).map_err(|err| CodegenError::Abi(err.to_string()))?;
    let entries: Vec<AbiEntry> =
        serde_json::from_value(value).map_err(|err| CodegenError::Abi(err.to_string()))?;
    for (index, entry) in entries.iter().enumerate() {
        let named = matches!(
            entry.kind,
            AbiEntryKind::Function | AbiEntryKind::Event | AbiEntryKind::Error
        );
        if named && entry.name.trim().is_empty() {
            return Err(CodegenError::Abi(format!("abi entry {index} is missing a name")));
        }
    }
    Ok(ParsedAbi {
        entries,
        compact_json,
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        reason = "Test-only assertions are permitted."
    )]

    use super::*;

    #[test]
    fn signature_expands_tuple_components() {
        let parsed = parse_abi(
            r#"[{"name":"store","inputs":[
                {"name":"id","type":"uint256"},
                {"name":"item","type":"tuple[]","components":[
                    {"name":"owner","type":"address"},{"name":"ok","type":"bool"}
                ]}
            ]}]"#,
        )
        .unwrap();
        assert_eq!(parsed.entries[0].kind, AbiEntryKind::Function);
        assert_eq!(parsed.entries[0].signature(), "store(uint256,(address,bool)[])");
    }

    #[test]
    fn constant_detection_covers_legacy_and_mutability() {
        let parsed = parse_abi(
            r#"[
                {"type":"function","name":"a","constant":true},
                {"type":"function","name":"b","stateMutability":"view"},
                {"type":"function","name":"c","stateMutability":"nonpayable"}
            ]"#,
        )
        .unwrap();
        let flags: Vec<bool> = parsed.entries.iter().map(AbiEntry::is_constant).collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn non_array_and_unnamed_entries_are_rejected() {
        assert!(matches!(parse_abi("{}"), Err(CodegenError::Abi(_))));
        assert!(matches!(parse_abi("[{\"type\":\"event\"}]"), Err(CodegenError::Abi(_))));
        assert!(matches!(parse_abi("not json"), Err(CodegenError::Abi(_))));
        assert!(parse_abi("[{\"type\":\"constructor\",\"inputs\":[]}]").is_ok());
    }
}
