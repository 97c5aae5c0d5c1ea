// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! In-memory document: an ordered list of headings and paragraphs.

use crate::error::ExportError;
use crate::utils::first_invalid_char;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// Heading with level `1..=9`.
    Heading { level: u8, text: String },
    Paragraph(String),
}

/// Document content before it is packaged as a `.docx` file.
///
/// Text is checked when it is added, so a built document always serializes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    title: String,
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Append a heading. Levels outside `1..=9` are clamped.
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> Result<(), ExportError> {
        let text = checked(text.into())?;
        self.blocks.push(Block::Heading {
            level: level.clamp(1, 9),
            text,
        });
        Ok(())
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>) -> Result<(), ExportError> {
        let text = checked(text.into())?;
        self.blocks.push(Block::Paragraph(text));
        Ok(())
    }
}

fn checked(text: String) -> Result<String, ExportError> {
    match first_invalid_char(&text) {
        Some(ch) => Err(ExportError::NotXmlCompatible {
            codepoint: ch as u32,
        }),
        None => Ok(text),
    }
}
