// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Filter engine: select vault items by collection, organization, name or username.
//!
//! AND narrows a running selection criterion by criterion. OR concatenates the
//! matches of every criterion against the full list, so an item matching two
//! criteria is returned twice. With no active criteria AND keeps everything
//! and OR keeps nothing.

use crate::error::ExportError;
use crate::models::criteria::{CombinationMode, Criterion, FilterCriteria};
use crate::models::vault::{AbsentField, VaultItem};

/// Apply `criteria` to `items`, preserving input order within each criterion.
///
/// # Errors
///
/// Returns [`ExportError::FieldAccess`] as soon as an active criterion reads a
/// key an item does not carry. Nothing is skipped.
pub fn filter_items<'a>(
    items: &'a [VaultItem],
    criteria: &FilterCriteria,
) -> Result<Vec<&'a VaultItem>, ExportError> {
    let selected = filter_indexed(items, criteria)?;
    Ok(selected.into_iter().map(|(_, item)| item).collect())
}

/// Same selection as [`filter_items`], with each item's position in `items`.
pub fn filter_indexed<'a>(
    items: &'a [VaultItem],
    criteria: &FilterCriteria,
) -> Result<Vec<(usize, &'a VaultItem)>, ExportError> {
    let candidates: Vec<(usize, &VaultItem)> = items
        .iter()
        .enumerate()
        .filter(|(index, item)| {
            let keep = !criteria.logins_only || item.is_login();
            if !keep {
                tracing::trace!(
                    item = %item.label(*index),
                    kind = item.kind.map_or("none", |kind| kind.as_str()),
                    "Skipping non-login item"
                );
            }
            keep
        })
        .collect();

    let active = criteria.active();
    let names: Vec<&str> = active.iter().map(Criterion::describe).collect();
    tracing::debug!(
        mode = criteria.mode.as_str(),
        criteria = ?names,
        candidates = candidates.len(),
        "Filtering items"
    );

    match criteria.mode {
        CombinationMode::And => filter_all(candidates, &active),
        CombinationMode::Or => filter_any(&candidates, &active),
    }
}

fn filter_all<'a>(
    mut current: Vec<(usize, &'a VaultItem)>,
    active: &[Criterion<'_>],
) -> Result<Vec<(usize, &'a VaultItem)>, ExportError> {
    for criterion in active {
        let mut kept = Vec::with_capacity(current.len());
        for (index, item) in current {
            if matches(criterion, index, item)? {
                kept.push((index, item));
            }
        }
        current = kept;
    }
    Ok(current)
}

fn filter_any<'a>(
    candidates: &[(usize, &'a VaultItem)],
    active: &[Criterion<'_>],
) -> Result<Vec<(usize, &'a VaultItem)>, ExportError> {
    let mut selected = Vec::new();
    for criterion in active {
        for &(index, item) in candidates {
            if matches(criterion, index, item)? {
                selected.push((index, item));
            }
        }
    }
    Ok(selected)
}

/// Evaluate a single criterion against one item.
fn matches(criterion: &Criterion<'_>, index: usize, item: &VaultItem) -> Result<bool, ExportError> {
    let access = |AbsentField(field)| ExportError::FieldAccess {
        item: item.label(index),
        field,
    };

    let hit = match *criterion {
        Criterion::Collection(id) => item
            .collection_ids()
            .map_err(access)?
            .iter()
            .any(|candidate| candidate == id),
        Criterion::Organization(id) => item.organization_id().map_err(access)? == Some(id),
        Criterion::NameContains(needle) => item
            .name()
            .map_err(access)?
            .is_some_and(|name| name.contains(needle)),
        Criterion::UsernameContains(needle) => match item.login() {
            Some(login) => login
                .username()
                .map_err(access)?
                .is_some_and(|username| username.contains(needle)),
            None => false,
        },
    };
    Ok(hit)
}
