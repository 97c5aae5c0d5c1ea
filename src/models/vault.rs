// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Bitwarden JSON export model.
//!
//! Only the keys the filters and the report read are modelled; everything else
//! in the export is ignored. Keys whose absence is an error are stored as
//! `Option<Option<T>>`: the outer `None` means the key is missing, `Some(None)`
//! means it is present with a `null` value.

use serde::{Deserialize, Deserializer};

/// Top-level object of a Bitwarden JSON export.
#[derive(Clone, Debug, Deserialize)]
pub struct VaultExport {
    pub items: Vec<VaultItem>,
}

/// Encryption markers checked before the items are parsed.
///
/// Password-protected exports carry no `items` key, so these are read on
/// their own. A `null` marker counts as unset.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFlags {
    #[serde(default)]
    pub encrypted: Option<bool>,
    #[serde(default)]
    pub password_protected: Option<bool>,
}

impl ExportFlags {
    pub fn is_locked(&self) -> bool {
        self.encrypted.unwrap_or(false) || self.password_protected.unwrap_or(false)
    }
}

/// Bitwarden cipher type, stored as an integer in exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "u64")]
pub enum ItemType {
    Login,
    SecureNote,
    Card,
    Identity,
    SshKey,
    Unknown(u64),
}

impl From<u64> for ItemType {
    fn from(raw: u64) -> Self {
        match raw {
            1 => Self::Login,
            2 => Self::SecureNote,
            3 => Self::Card,
            4 => Self::Identity,
            5 => Self::SshKey,
            other => Self::Unknown(other),
        }
    }
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::SecureNote => "secure note",
            Self::Card => "card",
            Self::Identity => "identity",
            Self::SshKey => "ssh key",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Name of a key that was missing from an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbsentField(pub &'static str);

/// One exported vault record (login, secure note, card, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub collection_ids: Option<Option<Vec<String>>>,
    #[serde(default, deserialize_with = "present")]
    pub organization_id: Option<Option<String>>,
    #[serde(rename = "type", default)]
    pub kind: Option<ItemType>,
    #[serde(default)]
    pub login: Option<Login>,
}

/// Login sub-record of a vault item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Login {
    #[serde(default, deserialize_with = "present")]
    pub username: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub password: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub uris: Option<Option<Vec<LoginUri>>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginUri {
    #[serde(default, deserialize_with = "present")]
    pub uri: Option<Option<String>>,
}

/// Wrap any present value (including `null`) in `Some` so a missing key stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn required<'a>(
    slot: &'a Option<Option<String>>,
    field: &'static str,
) -> Result<Option<&'a str>, AbsentField> {
    slot.as_ref()
        .map(|value| value.as_deref())
        .ok_or(AbsentField(field))
}

impl VaultItem {
    pub fn name(&self) -> Result<Option<&str>, AbsentField> {
        required(&self.name, "name")
    }

    pub fn notes(&self) -> Result<Option<&str>, AbsentField> {
        required(&self.notes, "notes")
    }

    pub fn organization_id(&self) -> Result<Option<&str>, AbsentField> {
        required(&self.organization_id, "organizationId")
    }

    /// Collection ids; a `null` list reads as empty.
    pub fn collection_ids(&self) -> Result<&[String], AbsentField> {
        match &self.collection_ids {
            Some(ids) => Ok(ids.as_deref().unwrap_or_default()),
            None => Err(AbsentField("collectionIds")),
        }
    }

    /// `null` and missing logins are both treated as "no login".
    pub fn login(&self) -> Option<&Login> {
        self.login.as_ref()
    }

    pub fn is_login(&self) -> bool {
        self.kind == Some(ItemType::Login)
    }

    /// Human-readable reference used in error messages. Never contains secrets.
    pub fn label(&self, index: usize) -> String {
        match (&self.name, &self.id) {
            (Some(Some(name)), _) => format!("#{} \"{}\"", index + 1, name),
            (_, Some(id)) => format!("#{} (id {})", index + 1, id),
            _ => format!("#{}", index + 1),
        }
    }
}

impl Login {
    pub fn username(&self) -> Result<Option<&str>, AbsentField> {
        required(&self.username, "login.username")
    }

    pub fn password(&self) -> Result<Option<&str>, AbsentField> {
        required(&self.password, "login.password")
    }

    /// First URI of the login. A missing, `null` or empty list is an error.
    pub fn first_uri(&self) -> Result<Option<&str>, AbsentField> {
        let first = self
            .uris
            .as_ref()
            .and_then(|uris| uris.as_deref())
            .and_then(|uris| uris.first())
            .ok_or(AbsentField("login.uris[0]"))?;
        required(&first.uri, "login.uris[0].uri")
    }
}

#[cfg(test)]
mod tests {
    use super::{AbsentField, ItemType, VaultExport, VaultItem};

    #[test]
    fn distinguishes_missing_keys_from_null_values() {
        let item: VaultItem =
            serde_json::from_str(r#"{"name":"Mail","organizationId":null}"#).unwrap();

        assert_eq!(item.name(), Ok(Some("Mail")));
        assert_eq!(item.organization_id(), Ok(None));
        assert_eq!(item.notes(), Err(AbsentField("notes")));
        assert_eq!(item.collection_ids(), Err(AbsentField("collectionIds")));
    }

    #[test]
    fn null_collection_list_reads_as_empty() {
        let item: VaultItem = serde_json::from_str(r#"{"collectionIds":null}"#).unwrap();
        assert!(item.collection_ids().unwrap().is_empty());
    }

    #[test]
    fn maps_item_type_numbers() {
        let export: VaultExport = serde_json::from_str(
            r#"{"items":[{"type":1},{"type":2},{"type":5},{"type":42},{}]}"#,
        )
        .unwrap();
        let kinds: Vec<_> = export.items.iter().map(|item| item.kind).collect();

        assert_eq!(
            kinds,
            vec![
                Some(ItemType::Login),
                Some(ItemType::SecureNote),
                Some(ItemType::SshKey),
                Some(ItemType::Unknown(42)),
                None,
            ]
        );
        assert!(export.items[0].is_login());
        assert!(!export.items[1].is_login());
        assert_eq!(ItemType::Card.as_str(), "card");
    }

    #[test]
    fn null_login_is_treated_as_missing() {
        let item: VaultItem = serde_json::from_str(r#"{"login":null}"#).unwrap();
        assert!(item.login().is_none());
    }

    #[test]
    fn first_uri_requires_a_non_empty_list() {
        let item: VaultItem = serde_json::from_str(
            r#"{"login":{"username":"bob","password":null,"uris":[]}}"#,
        )
        .unwrap();
        let login = item.login().unwrap();

        assert_eq!(login.username(), Ok(Some("bob")));
        assert_eq!(login.password(), Ok(None));
        assert_eq!(login.first_uri(), Err(AbsentField("login.uris[0]")));
    }

    #[test]
    fn first_uri_uses_only_the_first_entry() {
        let item: VaultItem = serde_json::from_str(
            r#"{"login":{"uris":[{"uri":"https://a"},{"uri":"https://b"}]}}"#,
        )
        .unwrap();
        assert_eq!(item.login().unwrap().first_uri(), Ok(Some("https://a")));
    }

    #[test]
    fn label_prefers_name_then_id() {
        let named: VaultItem = serde_json::from_str(r#"{"name":"Bank","id":"x1"}"#).unwrap();
        let unnamed: VaultItem = serde_json::from_str(r#"{"id":"x1"}"#).unwrap();
        let bare = VaultItem::default();

        assert_eq!(named.label(0), "#1 \"Bank\"");
        assert_eq!(unnamed.label(2), "#3 (id x1)");
        assert_eq!(bare.label(4), "#5");
    }
}
