// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Render selected vault items into a [`Document`].

use crate::error::ExportError;
use crate::models::document::Document;
use crate::models::vault::{AbsentField, VaultItem};

/// Title and top-level heading of every generated document.
pub const DOCUMENT_TITLE: &str = "Bitwarden Export";

/// Build the export document: one level-1 title heading, then per item a
/// level-2 heading with the item name, URL/username/password paragraphs for
/// logins and a notes paragraph for every item.
///
/// Keys that are present with a `null` value render as empty text. Missing
/// keys are errors. Items are labelled by their position in `items`.
pub fn render_items(items: &[&VaultItem]) -> Result<Document, ExportError> {
    let indexed: Vec<(usize, &VaultItem)> = items.iter().copied().enumerate().collect();
    render_indexed(&indexed)
}

/// Like [`render_items`], but error labels use the positions carried with each
/// item, as returned by [`filter_indexed`](crate::logic::filter::filter_indexed).
pub fn render_indexed(items: &[(usize, &VaultItem)]) -> Result<Document, ExportError> {
    let mut document = Document::new(DOCUMENT_TITLE);
    document.add_heading(DOCUMENT_TITLE, 1)?;

    for &(index, item) in items {
        render_item(&mut document, index, item)?;
    }

    Ok(document)
}

fn render_item(document: &mut Document, index: usize, item: &VaultItem) -> Result<(), ExportError> {
    let missing = |AbsentField(field)| ExportError::MissingField {
        item: item.label(index),
        field,
    };
    // Names the field, never its content.
    let invalid = move |field: &'static str| {
        move |err: ExportError| match err {
            ExportError::NotXmlCompatible { codepoint } => ExportError::InvalidText {
                item: item.label(index),
                field,
                codepoint,
            },
            other => other,
        }
    };

    let name = item.name().map_err(missing)?;
    document
        .add_heading(name.unwrap_or_default(), 2)
        .map_err(invalid("name"))?;

    if let Some(login) = item.login() {
        let uri = login.first_uri().map_err(missing)?;
        let username = login.username().map_err(missing)?;
        let password = login.password().map_err(missing)?;

        document
            .add_paragraph(format!("URL: {}", uri.unwrap_or_default()))
            .map_err(invalid("login.uris[0].uri"))?;
        document
            .add_paragraph(format!("Username: {}", username.unwrap_or_default()))
            .map_err(invalid("login.username"))?;
        document
            .add_paragraph(format!("Password: {}", password.unwrap_or_default()))
            .map_err(invalid("login.password"))?;
    }

    let notes = item.notes().map_err(missing)?;
    document
        .add_paragraph(format!("Notes: {}", notes.unwrap_or_default()))
        .map_err(invalid("notes"))?;
    Ok(())
}
