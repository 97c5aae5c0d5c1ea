// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: export records, filter criteria and the document model.

pub mod criteria;
pub mod document;
pub mod vault;
