//! End-to-end tests: report files on disk

mod common;

use auditdocx::docx::package::{self, CORE_PART, DOCUMENT_PART};
use auditdocx::validator::validate_package;
use auditdocx::{generate_audit_word_report, load_audit, render_audit_file};
use auditdocx::{Evidence, Finding, Settings, Severity, Status};
use common::*;
use std::fs;
use tempfile::TempDir;

fn settings(uploads: &TempDir, output: &TempDir) -> Settings {
    Settings::default()
        .with_upload_dir(uploads.path())
        .with_output_dir(output.path())
}

#[test]
fn test_report_file_exists_and_is_valid() {
    let uploads = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let audit = sample_audit(
        Some("en"),
        vec![Finding::new("Weak TLS", Severity::High, Status::Open)],
    );

    let path = generate_audit_word_report(&audit, &settings(&uploads, &output)).unwrap();

    assert!(path.exists());
    assert!(fs::metadata(&path).unwrap().len() > 0);
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("docx"));
    assert!(path.starts_with(output.path()));
    validate_package(&path).unwrap();

    let body = package::read_part_text(&path, DOCUMENT_PART).unwrap();
    assert!(body.contains("FINDING #1: Weak TLS"));
    assert!(body.contains("EXECUTIVE SUMMARY"));

    let core = package::read_part_text(&path, CORE_PART).unwrap();
    assert!(core.contains("<dc:title>AUDIT REPORT - Annual ISMS Audit</dc:title>"));
    assert!(core.contains("<dc:creator>ArchRampart Audit Tool</dc:creator>"));
}

#[test]
fn test_text_outside_xml_char_range_is_dropped() {
    let uploads = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let finding = Finding::new("A & <B> \u{1}ctl \u{FFFE}x", Severity::Low, Status::Open)
        .with_description("col1\tcol2\rnext\u{FFFF}");
    let audit = sample_audit(Some("en"), vec![finding]);

    let path = generate_audit_word_report(&audit, &settings(&uploads, &output)).unwrap();

    let body = package::read_part_text(&path, DOCUMENT_PART).unwrap();
    assert!(body.contains("FINDING #1: A &amp; &lt;B&gt; ctl x"));
    assert!(body.contains("col1</w:t><w:tab/>"));
    assert!(!body.contains('\u{FFFE}'));
    assert!(!body.contains('\u{FFFF}'));
    assert!(!body.contains('\u{1}'));
    assert!(!body.contains('\r'));
}

#[test]
fn test_consecutive_calls_use_distinct_paths() {
    let uploads = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let audit = sample_audit(None, vec![]);
    let settings = settings(&uploads, &output);

    let first = generate_audit_word_report(&audit, &settings).unwrap();
    let second = generate_audit_word_report(&audit, &settings).unwrap();

    assert_ne!(first, second);
    assert!(first.exists());
    assert!(second.exists());
}

#[test]
fn test_default_language_is_turkish_in_output() {
    let uploads = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let audit = sample_audit(Some("de"), vec![]);

    let path = generate_audit_word_report(&audit, &settings(&uploads, &output)).unwrap();
    let body = package::read_part_text(&path, DOCUMENT_PART).unwrap();

    assert!(body.contains("DENETİM RAPORU"));
    assert!(body.contains("Denetim kapsamında bulgu tespit edilmemiştir."));
}

#[test]
fn test_embedded_image_is_packaged() {
    let uploads = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(uploads.path().join("shot.png"), TINY_PNG).unwrap();

    let finding = Finding::new("Exposed panel", Severity::Critical, Status::Open)
        .with_evidence(Evidence::new("shot.png", "shot.png"))
        .with_evidence(Evidence::new("gone.gif", "gone.gif"));
    let audit = sample_audit(Some("en"), vec![finding]);

    let path = generate_audit_word_report(&audit, &settings(&uploads, &output)).unwrap();
    validate_package(&path).unwrap();

    let image = package::read_part(&path, "word/media/image1.png").unwrap();
    assert_eq!(image, TINY_PNG);

    let body = package::read_part_text(&path, DOCUMENT_PART).unwrap();
    assert!(body.contains(r#"r:embed="rIdImage1""#));
    assert!(body.contains("gone.gif (file not found)"));
}

#[test]
fn test_render_from_json_export() {
    let uploads = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let input = output.path().join("audit.json");

    let json = r#"{
        "id": 9,
        "name": "Vendor Review",
        "standard": "SOC 2",
        "language": "en",
        "audit_date": "2024-06-30",
        "created_at": "2024-06-01T08:00:00",
        "project": { "name": "Vendors", "organization": { "name": "Acme" } },
        "findings": [
            {
                "title": "Unknown severity",
                "severity": "catastrophic",
                "status": "open",
                "evidences": [
                    { "file_name": "contract.docx", "file_path": "v/contract.docx" }
                ]
            }
        ]
    }"#;
    fs::write(&input, json).unwrap();

    let audit = load_audit(&input).unwrap();
    assert_eq!(audit.findings[0].severity, Severity::Unrecognized);

    let path = render_audit_file(&input, &settings(&uploads, &output)).unwrap();
    let body = package::read_part_text(&path, DOCUMENT_PART).unwrap();
    assert!(body.contains("Severity: Info"));
    assert!(body.contains("contract.docx"));
    assert!(body.contains("2024-06-30"));
}

#[test]
fn test_unwritable_output_dir_is_error() {
    let uploads = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let missing = output.path().join("does/not/exist");
    let settings = Settings::default()
        .with_upload_dir(uploads.path())
        .with_output_dir(&missing);

    let result = generate_audit_word_report(&sample_audit(None, vec![]), &settings);
    assert!(result.is_err());
}
