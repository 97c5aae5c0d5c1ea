// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Runs the compiled binary against small exports and checks exit codes and output.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;
use zip::ZipArchive;

const EXPORT: &str = r#"{
    "encrypted": false,
    "collections": [{"id":"c1","organizationId":"o1","name":"Shared"}],
    "items": [
        {"id":"a","organizationId":"o1","collectionIds":["c1"],"type":1,"name":"Router",
         "notes":null,"login":{"uris":[{"uri":"http://192.168.0.1"}],"username":"admin","password":"admin"}},
        {"id":"b","organizationId":null,"collectionIds":[],"type":1,"name":"Mail",
         "notes":"personal","login":{"uris":[{"uri":"https://mail.example"}],"username":"me","password":"pw"}}
    ]
}"#;

fn bwdocx() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bwdocx"));
    command.env_remove("RUST_LOG");
    command
}

fn document_xml(path: &Path) -> String {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut part = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn legacy_collection_flag_selects_matching_items() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("export.json");
    let output = tmp.path().join("shared.docx");
    fs::write(&input, EXPORT).unwrap();

    let status = bwdocx()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-fc", "c1"])
        .status()
        .unwrap();

    assert!(status.success());
    let xml = document_xml(&output);
    assert!(xml.contains("Router"));
    assert!(xml.contains("URL: http://192.168.0.1"));
    assert!(!xml.contains("Mail"));
}

#[test]
fn or_mode_repeats_items_matching_several_filters() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("export.json");
    let output = tmp.path().join("or.docx");
    fs::write(&input, EXPORT).unwrap();

    let status = bwdocx()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["-fon", "Router", "-fu", "admin", "-cor"])
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(document_xml(&output).matches(">Router<").count(), 2);
}

#[test]
fn missing_input_exits_non_zero() {
    let tmp = TempDir::new().unwrap();

    let status = bwdocx()
        .arg("-i")
        .arg(tmp.path().join("absent.json"))
        .arg("-o")
        .arg(tmp.path().join("out.docx"))
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!tmp.path().join("out.docx").exists());
}

#[test]
fn missing_field_exits_non_zero() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("export.json");
    fs::write(&input, r#"{"items":[{"name":"No org","collectionIds":[]}]}"#).unwrap();

    let output = bwdocx()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(tmp.path().join("out.docx"))
        .args(["-fo", "o1"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("organizationId"), "stderr was: {stderr}");
}

#[test]
fn missing_required_arguments_is_a_usage_error() {
    let status = bwdocx().args(["-i", "in.json"]).status().unwrap();
    assert_eq!(status.code(), Some(2));
}
