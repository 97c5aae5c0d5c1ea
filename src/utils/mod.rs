// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by the document model and the packager.

pub mod xml;

/// Find the first character XML 1.0 cannot carry.
pub use xml::first_invalid_char;
/// Split paragraph text into literal runs, line breaks and tabs.
pub use xml::{RunPiece, split_run_pieces};
