// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Export pipeline: load the JSON export, select items, render and package the document.

pub mod docx;
pub mod filter;
pub mod loader;
pub mod report;

pub use docx::write_docx;
pub use filter::{filter_indexed, filter_items};
pub use loader::load_export;
pub use report::{render_indexed, render_items};
