// crates/bcos-codegen/src/devdoc.rs
// ============================================================================
// Module: Devdoc Model
// Description: NatSpec developer documentation emitted by solc --devdoc.
// Purpose: Attach contract and method docs to generated wrappers.
// Dependencies: serde, serde_json
// ============================================================================

//! Solidity devdoc (NatSpec developer documentation) model.
//!
//! Only the fields rendered into Javadoc are modeled; unknown keys such as
//! `kind` and `version` are ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::CodegenError;

/// Contract-level developer documentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DevDoc {
    /// `@title` tag.
    #[serde(default)]
    pub title: Option<String>,
    /// `@author` tag.
    #[serde(default)]
    pub author: Option<String>,
    /// `@dev` text for the contract.
    #[serde(default)]
    pub details: Option<String>,
    /// Method docs keyed by canonical signature.
    #[serde(default)]
    pub methods: BTreeMap<String, MethodDoc>,
    /// Event docs keyed by canonical signature.
    #[serde(default)]
    pub events: BTreeMap<String, MethodDoc>,
}

/// Documentation for one method or event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MethodDoc {
    /// `@dev` text.
    #[serde(default)]
    pub details: Option<String>,
    /// `@param` text keyed by parameter name.
    #[serde(default)]
    pub params: BTreeMap<String, String>,
    /// Legacy single `@return` text.
    #[serde(default, rename = "return")]
    pub return_doc: Option<String>,
    /// `@return` text keyed by output name.
    #[serde(default)]
    pub returns: BTreeMap<String, String>,
}

impl DevDoc {
    /// Looks up method docs by canonical signature.
    #[must_use]
    pub fn method(&self, signature: &str) -> Option<&MethodDoc> {
        self.methods.get(signature)
    }

    /// Looks up event docs by canonical signature.
    #[must_use]
    pub fn event(&self, signature: &str) -> Option<&MethodDoc> {
        self.events.get(signature)
    }
}

/// Parses devdoc JSON text.
///
/// # Errors
/// Returns [`CodegenError::Devdoc`] when the text is not a devdoc object.
pub fn parse_devdoc(text: &str) -> Result<DevDoc, CodegenError> {
    serde_json::from_str(text).map_err(|err| CodegenError::Devdoc(err.to_string()))
}
