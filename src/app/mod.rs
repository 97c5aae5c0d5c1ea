// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry: logging setup and the load → filter → render → write pipeline.

pub mod cli;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

use crate::logic::{filter_indexed, load_export, render_indexed, write_docx};
use crate::models::criteria::FilterCriteria;

pub use cli::{Cli, normalize_args};

/// Everything one export run needs, passed by value into the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub criteria: FilterCriteria,
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks info, debug or trace.
pub fn init_tracing(verbosity: u8) {
    let fallback = match verbosity {
        0 => "bwdocx=info",
        1 => "bwdocx=debug",
        _ => "bwdocx=trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

/// Run one export: read `config.input`, filter, and write `config.output`.
///
/// Returns the number of items written.
pub fn run(config: ExportConfig) -> Result<usize> {
    let ExportConfig {
        input,
        output,
        criteria,
    } = config;

    if !has_extension(&output, "docx") {
        tracing::warn!(?output, "Output path does not end in .docx; writing it anyway");
    }

    let export = load_export(&input)?;
    tracing::info!(items = export.items.len(), "Loaded Bitwarden export");

    let selected = filter_indexed(&export.items, &criteria).context("Failed to filter items")?;
    tracing::info!(
        selected = selected.len(),
        mode = criteria.mode.as_str(),
        logins_only = criteria.logins_only,
        "Selected items"
    );

    let document = render_indexed(&selected).context("Failed to render items")?;
    write_docx(&output, &document, OffsetDateTime::now_utc())
        .with_context(|| format!("Failed to write document {:?}", output))?;

    tracing::info!("Exported {} item(s) to {}", selected.len(), output.display());
    Ok(selected.len())
}

/// Whether `path` ends in `extension`, ignoring case.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    )
}
