// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Filter criteria selected on the command line.

/// How active criteria are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CombinationMode {
    /// Every active criterion must match.
    #[default]
    And,
    /// Matches of each criterion are concatenated, duplicates included.
    Or,
}

impl CombinationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CombinationMode::And => "AND",
            CombinationMode::Or => "OR",
        }
    }
}

/// One active filter predicate, borrowed from [`FilterCriteria`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Criterion<'a> {
    Collection(&'a str),
    Organization(&'a str),
    NameContains(&'a str),
    UsernameContains(&'a str),
}

impl Criterion<'_> {
    pub fn describe(&self) -> &'static str {
        match self {
            Criterion::Collection(_) => "collection",
            Criterion::Organization(_) => "organization",
            Criterion::NameContains(_) => "name",
            Criterion::UsernameContains(_) => "username",
        }
    }
}

/// Optional predicates plus the combination mode.
///
/// Empty strings are treated like unset criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub collection_id: Option<String>,
    pub organization_id: Option<String>,
    pub name_substring: Option<String>,
    pub username_substring: Option<String>,
    pub mode: CombinationMode,
    /// Drop every item that is not a login before combining criteria.
    pub logins_only: bool,
}

impl FilterCriteria {
    pub fn new(mode: CombinationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_collection(mut self, id: impl Into<String>) -> Self {
        self.collection_id = Some(id.into());
        self
    }

    pub fn with_organization(mut self, id: impl Into<String>) -> Self {
        self.organization_id = Some(id.into());
        self
    }

    pub fn with_name(mut self, needle: impl Into<String>) -> Self {
        self.name_substring = Some(needle.into());
        self
    }

    pub fn with_username(mut self, needle: impl Into<String>) -> Self {
        self.username_substring = Some(needle.into());
        self
    }

    pub fn logins_only(mut self, enabled: bool) -> Self {
        self.logins_only = enabled;
        self
    }

    /// Active criteria in evaluation order: collection, organization, name, username.
    pub fn active(&self) -> Vec<Criterion<'_>> {
        let mut active = Vec::with_capacity(4);
        if let Some(id) = non_empty(&self.collection_id) {
            active.push(Criterion::Collection(id));
        }
        if let Some(id) = non_empty(&self.organization_id) {
            active.push(Criterion::Organization(id));
        }
        if let Some(needle) = non_empty(&self.name_substring) {
            active.push(Criterion::NameContains(needle));
        }
        if let Some(needle) = non_empty(&self.username_substring) {
            active.push(Criterion::UsernameContains(needle));
        }
        active
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
