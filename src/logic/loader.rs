// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Read a Bitwarden JSON export from disk.

use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::models::vault::{ExportFlags, VaultExport};

/// Load and deserialize the export at `path`.
///
/// The whole file is read into memory before parsing. Encrypted and
/// password-protected exports are rejected because their items cannot be read
/// without the account key.
pub fn load_export(path: &Path) -> Result<VaultExport, ExportError> {
    let raw = fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_error = |source| ExportError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let flags: ExportFlags = serde_json::from_str(&raw).map_err(parse_error)?;
    if flags.is_locked() {
        return Err(ExportError::EncryptedExport {
            path: path.to_path_buf(),
        });
    }

    let export: VaultExport = serde_json::from_str(&raw).map_err(parse_error)?;

    tracing::debug!(items = export.items.len(), ?path, "Loaded export");
    Ok(export)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::load_export;
    use crate::error::ExportError;

    #[test]
    fn loads_items_and_ignores_unknown_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("export.json");
        fs::write(
            &path,
            r#"{
                "encrypted": false,
                "folders": [],
                "items": [
                    {"id": "a", "name": "Mail", "type": 1, "favorite": false, "notes": null},
                    {"id": "b", "name": "Memo", "type": 2, "secureNote": {"type": 0}}
                ]
            }"#,
        )
        .unwrap();

        let export = load_export(&path).unwrap();
        assert_eq!(export.items.len(), 2);
        assert_eq!(export.items[1].name(), Ok(Some("Memo")));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_export(&tmp.path().join("absent.json")).unwrap_err();

        assert!(matches!(err, ExportError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, r#"{"items": [ {"name": "x"} "#).unwrap();

        assert!(matches!(
            load_export(&path).unwrap_err(),
            ExportError::Parse { .. }
        ));
    }

    #[test]
    fn export_without_items_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no-items.json");
        fs::write(&path, r#"{"folders": []}"#).unwrap();

        let err = load_export(&path).unwrap_err();
        let cause = std::error::Error::source(&err).unwrap().to_string();
        assert!(cause.contains("missing field `items`"), "unexpected cause: {cause}");
    }

    #[test]
    fn encrypted_exports_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("enc.json");
        fs::write(
            &path,
            r#"{"encrypted": true, "encKeyValidation_DO_NOT_EDIT": "2.abc", "items": []}"#,
        )
        .unwrap();

        assert!(matches!(
            load_export(&path).unwrap_err(),
            ExportError::EncryptedExport { .. }
        ));
    }

    #[test]
    fn null_encryption_markers_count_as_unencrypted() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nulls.json");
        fs::write(
            &path,
            r#"{"encrypted": null, "passwordProtected": null, "items": [{"name": "x"}]}"#,
        )
        .unwrap();

        let export = load_export(&path).unwrap();
        assert_eq!(export.items.len(), 1);
    }

    #[test]
    fn password_protected_exports_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("protected.json");
        fs::write(
            &path,
            r#"{"encrypted": true, "passwordProtected": true, "salt": "s", "data": "2.x"}"#,
        )
        .unwrap();

        assert!(matches!(
            load_export(&path).unwrap_err(),
            ExportError::EncryptedExport { .. }
        ));
    }
}
