// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Error type shared by the loader, filter engine and report renderer.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to read export file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse export file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Export file {path:?} is encrypted; create an unencrypted JSON export instead")]
    EncryptedExport { path: PathBuf },

    /// A filter predicate read a key the item does not carry.
    #[error("Cannot filter item {item}: field `{field}` is missing")]
    FieldAccess { item: String, field: &'static str },

    /// The report renderer needed a key the item does not carry.
    #[error("Cannot render item {item}: field `{field}` is missing")]
    MissingField { item: String, field: &'static str },

    #[error("Text contains U+{codepoint:04X}, which cannot be stored in a document")]
    NotXmlCompatible { codepoint: u32 },

    /// [`ExportError::NotXmlCompatible`] tied to the item and field it came from.
    #[error(
        "Cannot render item {item}: field `{field}` contains U+{codepoint:04X}, which cannot be stored in a document"
    )]
    InvalidText {
        item: String,
        field: &'static str,
        codepoint: u32,
    },
}
