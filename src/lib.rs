// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! bwdocx: turn a Bitwarden JSON export into a Word document.
//!
//! The pipeline is linear: [`logic::load_export`] reads the export,
//! [`logic::filter_items`] selects items by collection, organization, name or
//! username (AND or OR), [`logic::render_items`] lays them out as headings and
//! paragraphs, and [`logic::write_docx`] packages the result as a `.docx` file.

pub mod app;
pub mod error;
pub mod logic;
pub mod models;
pub mod utils;

pub use app::{ExportConfig, run};
pub use error::ExportError;
