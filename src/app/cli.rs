// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line surface: argument definitions and legacy flag spellings.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::app::ExportConfig;
use crate::models::criteria::{CombinationMode, FilterCriteria};

/// Single-dash multi-letter spellings and the long options they stand for.
const LEGACY_FLAGS: [(&str, &str); 5] = [
    ("-fc", "--filter-collection"),
    ("-fo", "--filter-organization"),
    ("-fon", "--filter-name"),
    ("-fu", "--filter-username"),
    ("-cor", "--combined-or"),
];

/// Options whose value is the following token when not given as `--opt=value`.
const VALUE_FLAGS: [&str; 8] = [
    "-i",
    "--input",
    "-o",
    "--output",
    "--filter-collection",
    "--filter-organization",
    "--filter-name",
    "--filter-username",
];

/// Create a Word document from a Bitwarden .json export.
#[derive(Debug, Parser)]
#[command(name = "bwdocx", version, about)]
pub struct Cli {
    /// Path to the Bitwarden .json export file
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the output .docx file
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Filter for a specific collectionId [short: -fc]
    #[arg(long, value_name = "ID")]
    pub filter_collection: Option<String>,

    /// Filter for a specific organizationId [short: -fo]
    #[arg(long, value_name = "ID")]
    pub filter_organization: Option<String>,

    /// Filter items whose name contains a specific string [short: -fon]
    #[arg(long, value_name = "TEXT")]
    pub filter_name: Option<String>,

    /// Filter items by username containing a specific string [short: -fu]
    #[arg(long, value_name = "TEXT")]
    pub filter_username: Option<String>,

    /// Combine filters with OR; default is AND [short: -cor]
    #[arg(long)]
    pub combined_or: bool,

    /// Only consider login items
    #[arg(long)]
    pub logins_only: bool,

    /// Increase log output (-v debug, -vv trace); ignored when RUST_LOG is set
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Turn parsed arguments into the configuration handed to the pipeline.
    pub fn into_config(self) -> ExportConfig {
        let mode = if self.combined_or {
            CombinationMode::Or
        } else {
            CombinationMode::And
        };

        let criteria = FilterCriteria {
            collection_id: self.filter_collection,
            organization_id: self.filter_organization,
            name_substring: self.filter_name,
            username_substring: self.filter_username,
            ..FilterCriteria::new(mode)
        }
        .logins_only(self.logins_only);

        ExportConfig {
            input: self.input,
            output: self.output,
            criteria,
        }
    }
}

/// Rewrite `-fc`, `-fo`, `-fon`, `-fu` and `-cor` (also in `-fc=value` form)
/// to their long options so clap can parse them.
///
/// Tokens consumed as option values and everything after `--` are left as-is.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expects_value = false;
    let mut passthrough = false;

    for arg in args {
        let arg: OsString = arg.into();
        if passthrough || expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        let replacement = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(text) => {
                let (flag, value) = match text.split_once('=') {
                    Some((flag, value)) => (flag, Some(value)),
                    None => (text, None),
                };
                let long = LEGACY_FLAGS
                    .iter()
                    .find(|(legacy, _)| *legacy == flag)
                    .map(|(_, long)| *long);

                expects_value = value.is_none() && VALUE_FLAGS.contains(&long.unwrap_or(flag));

                match (long, value) {
                    (Some(long), Some(value)) => Some(format!("{long}={value}")),
                    (Some(long), None) => Some(long.to_string()),
                    (None, _) => None,
                }
            }
            None => None,
        };

        normalized.push(replacement.map(OsString::from).unwrap_or(arg));
    }

    normalized
}
