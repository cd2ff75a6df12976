// crates/bcos-codegen/src/java.rs
// ============================================================================
// Module: Java Wrapper Rendering
// Description: Deterministic renderer for FISCO BCOS Java contract wrappers.
// Purpose: Emit one wrapper class per contract for the selected SDK line.
// Dependencies: bcos-codegen-config
// ============================================================================

//! ## Overview
//! The renderer assembles a wrapper class in a single pass. Output depends
//! only on the artifacts and options, so identical inputs give identical
//! bytes.
//!
//! ### Design Notes
//! - Long constants (bytecode, ABI) are split into string chunks so no single
//!   Java literal exceeds the class-file constant pool limit.
//! - Devdoc text is untrusted: whitespace is collapsed and comment
//!   terminators are defused before it lands in Javadoc.
//! - Overloaded functions share one `FUNC_*` constant.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use bcos_codegen_config::TargetVersion;

use crate::abi::AbiEntry;
use crate::abi::AbiEntryKind;
use crate::artifacts::ContractArtifacts;
use crate::devdoc::MethodDoc;
use crate::error::CodegenError;

// ============================================================================
// CONSTANTS: Rendering limits
// ============================================================================

/// Maximum bytes per Java string literal chunk.
const MAX_LITERAL_CHUNK_BYTES: usize = 32 * 1024;
/// Javadoc wrap width.
const DOC_WIDTH: usize = 90;

/// Java reserved words and literals that cannot be identifiers.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

// ============================================================================
// SECTION: Options
// ============================================================================

/// Strategy-specific rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WrapperOptions {
    /// SDK line the wrapper targets.
    pub(crate) sdk: TargetVersion,
    /// Transaction version constant; V3 only.
    pub(crate) transaction_version: Option<u32>,
    /// Whether to list async-callable functions; V3 only.
    pub(crate) async_call: bool,
}

impl WrapperOptions {
    /// Returns the root Java package of the targeted SDK.
    const fn sdk_package(self) -> &'static str {
        match self.sdk {
            TargetVersion::V2 => "org.fisco.bcos.sdk",
            TargetVersion::V3 => "org.fisco.bcos.sdk.v3",
        }
    }
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders the wrapper class source.
///
/// # Errors
/// Returns [`CodegenError::Naming`] when the package or contract name is not
/// a valid Java identifier.
#[allow(
    clippy::too_many_lines,
    reason = "Generator output is assembled in one pass for determinism."
)]
pub(crate) fn render_wrapper(
    artifacts: &ContractArtifacts,
    package_name: &str,
    options: WrapperOptions,
) -> Result<String, CodegenError> {
    validate_package(package_name)?;
    let class = artifacts.contract_name.as_str();
    validate_identifier("contract name", class)?;
    let sdk = options.sdk_package();

    let mut out = String::new();
    out.push_str("package ");
    out.push_str(package_name);
    out.push_str(";\n\n");
    for import in [
        "client.Client",
        "contract.Contract",
        "crypto.CryptoSuite",
        "crypto.keypair.CryptoKeyPair",
        "model.CryptoType",
        "utils.StringUtils",
    ] {
        out.push_str("import ");
        out.push_str(sdk);
        out.push('.');
        out.push_str(import);
        out.push_str(";\n");
    }
    out.push('\n');

    render_class_doc(&mut out, artifacts, options);
    out.push_str("@SuppressWarnings(\"unchecked\")\n");
    out.push_str("public class ");
    out.push_str(class);
    out.push_str(" extends Contract {\n");

    render_chunked_constant(&mut out, "BINARY", &artifacts.binary);
    render_chunked_constant(&mut out, "SM_BINARY", &artifacts.sm_binary);
    render_chunked_constant(&mut out, "ABI", &artifacts.abi_json);

    if let Some(version) = options.transaction_version {
        out.push_str("    public static final int TRANSACTION_VERSION = ");
        out.push_str(&version.to_string());
        out.push_str(";\n\n");
    }

    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for entry in &artifacts.abi {
        let prefix = match entry.kind {
            AbiEntryKind::Function => "FUNC_",
            AbiEntryKind::Event => "EVENT_",
            _ => continue,
        };
        validate_identifier_chars("abi entry name", &entry.name)?;
        let constant = format!("{prefix}{}", constant_case(&entry.name));
        if let Some(previous) = seen.get(&constant) {
            if *previous == entry.name {
                continue;
            }
            return Err(CodegenError::Naming(format!(
                "abi entries `{previous}` and `{}` both map to constant {constant}",
                entry.name
            )));
        }
        seen.insert(constant.clone(), &entry.name);
        let doc = artifacts.devdoc.as_ref().and_then(|devdoc| match entry.kind {
            AbiEntryKind::Event => devdoc.event(&entry.signature()),
            _ => devdoc.method(&entry.signature()),
        });
        render_entry_doc(&mut out, entry, doc);
        out.push_str("    public static final String ");
        out.push_str(&constant);
        out.push_str(" = ");
        out.push_str(&java_string_literal(&entry.name));
        out.push_str(";\n\n");
    }

    if options.async_call {
        let mut async_functions = BTreeSet::new();
        out.push_str("    public static final String[] ASYNC_CALL_FUNCTIONS = {");
        let mut first = true;
        for entry in &artifacts.abi {
            if entry.kind != AbiEntryKind::Function || !entry.is_constant() {
                continue;
            }
            let constant = format!("FUNC_{}", constant_case(&entry.name));
            if !async_functions.insert(constant.clone()) {
                continue;
            }
            if !first {
                out.push_str(", ");
            }
            out.push_str(&constant);
            first = false;
        }
        out.push_str("};\n\n");
    }

    out.push_str("    protected ");
    out.push_str(class);
    out.push_str("(String contractAddress, Client client, CryptoKeyPair credential) {\n");
    out.push_str(
        "        super(getBinary(client.getCryptoSuite()), contractAddress, client, credential);\n",
    );
    out.push_str("    }\n\n");

    out.push_str("    public static String getBinary(CryptoSuite cryptoSuite) {\n");
    out.push_str(
        "        return (cryptoSuite.getCryptoTypeConfig() == CryptoType.ECDSA_TYPE ? BINARY : \
         SM_BINARY);\n",
    );
    out.push_str("    }\n\n");

    out.push_str("    public static String getABI() {\n");
    out.push_str("        return ABI;\n");
    out.push_str("    }\n\n");

    out.push_str("    public static ");
    out.push_str(class);
    out.push_str(" load(String contractAddress, Client client, CryptoKeyPair credential) {\n");
    out.push_str("        return new ");
    out.push_str(class);
    out.push_str("(contractAddress, client, credential);\n");
    out.push_str("    }\n");
    out.push_str("}\n");
    Ok(out)
}

/// Renders the class-level Javadoc from devdoc and the generated banner.
fn render_class_doc(out: &mut String, artifacts: &ContractArtifacts, options: WrapperOptions) {
    out.push_str("/**\n");
    if let Some(devdoc) = &artifacts.devdoc {
        for text in [&devdoc.title, &devdoc.details].into_iter().flatten() {
            push_doc_paragraph(out, "", text);
        }
        if let Some(author) = &devdoc.author {
            out.push_str(" * @author ");
            out.push_str(&normalize_doc(author));
            out.push('\n');
        }
    }
    out.push_str(" * <p>This file is @generated by bcos-codegen for fisco-bcos-java-sdk ");
    out.push_str(options.sdk.as_str());
    out.push_str(". DO NOT EDIT.\n");
    out.push_str(" */\n");
}

/// Renders the Javadoc for one ABI entry, when devdoc is available.
fn render_entry_doc(out: &mut String, entry: &AbiEntry, doc: Option<&MethodDoc>) {
    let Some(doc) = doc else {
        return;
    };
    out.push_str("    /**\n");
    if let Some(details) = &doc.details {
        push_doc_paragraph(out, "    ", details);
    }
    for input in &entry.inputs {
        if let Some(text) = doc.params.get(&input.name) {
            out.push_str("     * @param ");
            out.push_str(&normalize_doc(&input.name));
            out.push(' ');
            out.push_str(&normalize_doc(text));
            out.push('\n');
        }
    }
    if let Some(text) = &doc.return_doc {
        out.push_str("     * @return ");
        out.push_str(&normalize_doc(text));
        out.push('\n');
    }
    for (name, text) in &doc.returns {
        out.push_str("     * @return ");
        out.push_str(&normalize_doc(name));
        out.push(' ');
        out.push_str(&normalize_doc(text));
        out.push('\n');
    }
    out.push_str("     */\n");
}

/// Pushes a wrapped Javadoc paragraph at the given indent.
fn push_doc_paragraph(out: &mut String, indent: &str, text: &str) {
    for line in wrap_doc(&normalize_doc(text), DOC_WIDTH) {
        out.push_str(indent);
        out.push_str(" * ");
        out.push_str(&line);
        out.push('\n');
    }
}

/// Renders `NAME_ARRAY` chunks and the joined `NAME` constant.
fn render_chunked_constant(out: &mut String, name: &str, value: &str) {
    out.push_str("    public static final String[] ");
    out.push_str(name);
    out.push_str("_ARRAY = {");
    for (index, chunk) in chunk_literal(value).iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&java_string_literal(chunk));
    }
    out.push_str("};\n\n");
    out.push_str("    public static final String ");
    out.push_str(name);
    out.push_str(" = StringUtils.joinAll(\"\", ");
    out.push_str(name);
    out.push_str("_ARRAY);\n\n");
}

// ============================================================================
// SECTION: Identifiers
// ============================================================================

/// Validates a dotted Java package name.
fn validate_package(package_name: &str) -> Result<(), CodegenError> {
    for segment in package_name.split('.') {
        validate_identifier("package segment", segment)
            .map_err(|_| CodegenError::Naming(format!("invalid package name `{package_name}`")))?;
    }
    Ok(())
}

/// Validates a Java identifier that is not a keyword.
fn validate_identifier(kind: &str, value: &str) -> Result<(), CodegenError> {
    validate_identifier_chars(kind, value)?;
    if JAVA_KEYWORDS.contains(&value) {
        return Err(CodegenError::Naming(format!("{kind} `{value}` is a reserved Java keyword")));
    }
    Ok(())
}

/// Validates identifier characters only.
///
/// ABI entry names end up inside string literals and upper-cased constant
/// names, so Java keywords are allowed there.
fn validate_identifier_chars(kind: &str, value: &str) -> Result<(), CodegenError> {
    let mut chars = value.chars();
    let valid_start = chars.next().is_some_and(|ch| ch.is_alphabetic() || ch == '_' || ch == '$');
    let valid_rest = chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$');
    if !valid_start || !valid_rest {
        return Err(CodegenError::Naming(format!("{kind} `{value}` is not a valid Java identifier")));
    }
    Ok(())
}

/// Converts `camelCase` to `UPPER_SNAKE_CASE`.
fn constant_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len() + 4);
    let mut previous_lower = false;
    for ch in value.chars() {
        if ch.is_uppercase() && previous_lower {
            output.push('_');
        }
        previous_lower = ch.is_lowercase() || ch.is_ascii_digit();
        output.extend(ch.to_uppercase());
    }
    output
}

// ============================================================================
// SECTION: Literals and Docs
// ============================================================================

/// Splits a value into chunks that fit a Java string literal.
fn chunk_literal(value: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut size = 0;
    for (index, ch) in value.char_indices() {
        if size + ch.len_utf8() > MAX_LITERAL_CHUNK_BYTES {
            chunks.push(&value[start .. index]);
            start = index;
            size = 0;
        }
        size += ch.len_utf8();
    }
    chunks.push(&value[start ..]);
    chunks
}

/// Renders a Java string literal with escapes.
fn java_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_control() => {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{unit:04x}"));
                }
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Normalizes documentation strings by collapsing whitespace and defusing
/// comment terminators in generated outputs.
fn normalize_doc(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace("*/", "* /")
}

/// Wraps documentation text to a target width.
fn wrap_doc(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        if current.len() + 1 + word.len() > width {
            lines.push(current);
            current = word.to_string();
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ============================================================================
// SECTION: Tests
// ============================================================================
